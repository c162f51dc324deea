pub mod state;

use self::state::create_state;
use crate::layout::global_context::use_global_context;
use crate::layout::modal_service::use_modal;
use crate::layout::notification_service::use_notifications;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::{Badge, StatusBadge};
use crate::shared::components::{PageHeader, PaginationControls};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use chrono::Utc;
use contracts::domain::a001_promo_group::PromoGroup;
use contracts::shared::list_view::{derive_view, filter_records, TextFilter};
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

const SEARCH_FIELDS: &[&str] = &["name", "description"];

#[component]
pub fn PromoGroupList() -> impl IntoView {
    let ctx = use_global_context();
    let notifications = use_notifications();
    let modal = use_modal();
    let state = create_state(ctx.config().lists.promo_groups_page_size);

    // Просроченные Active-группы переводятся в Expired при открытии списка
    let now = Utc::now();
    if ctx
        .promo_groups
        .with_untracked(|store| store.list().iter().any(|g| g.is_overdue(now)))
    {
        let expired = ctx
            .promo_groups
            .try_update(|store| store.expire_overdue(now))
            .unwrap_or(0);
        log::info!("{} promo group(s) moved to Expired", expired);
    }

    let view_page = Memo::new(move |_| {
        let s = state.get();
        let filters = [TextFilter::new(SEARCH_FIELDS, s.search_query)];
        ctx.promo_groups
            .with(|store| derive_view(store.list(), &filters, &s.sort, &s.pagination))
    });

    let search_query = Signal::derive(move || state.with(|s| s.search_query.clone()));
    let on_search = Callback::new(move |value: String| {
        state.update(|s| {
            s.search_query = value;
            s.pagination.reset();
        });
    });

    let on_sort = Callback::new(move |field: &'static str| {
        state.update(|s| s.sort.toggle(field));
    });

    let go_to_page = Callback::new(move |page: usize| {
        state.update(|s| s.pagination.go_to(page));
    });

    let delete_group = move |group: PromoGroup| {
        let id = group.id;
        let name = group.name.clone();
        modal.confirm(
            "Delete promo group",
            format!(
                "Delete \"{}\" and its {} codes? This cannot be undone.",
                group.name,
                group.promo_codes.len()
            ),
            Callback::new(move |_| {
                let removed = ctx.promo_groups.try_update(|store| store.delete(&id)).flatten();
                if removed.is_none() {
                    log::warn!("delete requested for missing group {}", name);
                    return;
                }
                let query = state.with_untracked(|s| s.search_query.clone());
                let remaining = ctx.promo_groups.with_untracked(|store| {
                    filter_records(store.list(), &[TextFilter::new(SEARCH_FIELDS, query)]).len()
                });
                state.update(|s| s.pagination.retreat_if_empty(remaining));
                notifications.success("Group deleted", format!("\"{}\" was deleted.", name));
            }),
        );
    };

    view! {
        <PageFrame page_id="a001_promo_group--list" category=PAGE_CAT_LIST>
            <PageHeader title="eSIM Code Management" subtitle="Create and manage promo code groups">
                <A href="/esim-codes/create" attr:class="button button--primary">
                    {icon("plus")}
                    "Create Group"
                </A>
            </PageHeader>

            <div class="page__content">
                <div class="filter-panel">
                    <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                        <SearchInput
                            value=search_query
                            on_change=on_search
                            placeholder="Search by name or description..."
                        />
                        <Badge variant="primary">
                            {move || format!("{} groups", view_page.get().filtered_count)}
                        </Badge>
                    </Flex>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Name" field="name" sort=Signal::derive(move || state.get().sort) on_sort=on_sort />
                                <TableHeaderCell>"Description"</TableHeaderCell>
                                <SortableHeaderCell label="Quantity" field="quantity" sort=Signal::derive(move || state.get().sort) on_sort=on_sort align="right" />
                                <SortableHeaderCell label="Reward Type" field="reward_kind" sort=Signal::derive(move || state.get().sort) on_sort=on_sort />
                                <SortableHeaderCell label="Reward" field="reward_amount" sort=Signal::derive(move || state.get().sort) on_sort=on_sort align="right" />
                                <SortableHeaderCell label="Start Date" field="start_date" sort=Signal::derive(move || state.get().sort) on_sort=on_sort />
                                <SortableHeaderCell label="End Date" field="end_date" sort=Signal::derive(move || state.get().sort) on_sort=on_sort />
                                <SortableHeaderCell label="Status" field="status" sort=Signal::derive(move || state.get().sort) on_sort=on_sort />
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || view_page.get().rows
                                key=|group| (group.id, group.status)
                                children=move |group| {
                                    let id = group.to_string_id();
                                    let query = move || state.with(|s| s.search_query.clone());
                                    let name = group.name.clone();
                                    let description = group.description.clone();
                                    let group_for_delete = group.clone();
                                    let name_href = format!("/esim-codes/{}/view", id);
                                    let view_href = format!("/esim-codes/{}/view", id);
                                    let edit_href = format!("/esim-codes/{}/edit", id);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <A href=name_href attr:class="table__link">
                                                        {move || highlight_matches(&name, &query())}
                                                    </A>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&description, &query())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell class="text-right">{group.quantity.to_string()}</TableCell>
                                            <TableCell>{group.reward_kind.display_name()}</TableCell>
                                            <TableCell class="text-right">{group.reward_amount.to_string()}</TableCell>
                                            <TableCell>{format_date(group.start_date)}</TableCell>
                                            <TableCell>{format_date(group.end_date)}</TableCell>
                                            <TableCell>
                                                <StatusBadge status=group.status />
                                            </TableCell>
                                            <TableCell>
                                                <div class="table__actions">
                                                    <A href=view_href attr:class="table__action" attr:title="View">
                                                        {icon("eye")}
                                                    </A>
                                                    <A href=edit_href attr:class="table__action" attr:title="Edit">
                                                        {icon("edit")}
                                                    </A>
                                                    <button
                                                        class="table__action table__action--danger"
                                                        title="Delete"
                                                        on:click=move |_| delete_group(group_for_delete.clone())
                                                    >
                                                        {icon("trash")}
                                                    </button>
                                                </div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>

                    <Show when=move || view_page.get().rows.is_empty()>
                        <div class="table__empty">"No promo groups found."</div>
                    </Show>
                </div>

                <PaginationControls
                    pagination=Signal::derive(move || state.get().pagination)
                    total_count=Signal::derive(move || view_page.get().filtered_count)
                    on_page_change=go_to_page
                />
            </div>
        </PageFrame>
    }
}
