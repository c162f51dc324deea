use crate::layout::global_context::use_global_context;
use crate::layout::notification_service::use_notifications;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use contracts::shared::list_view::{derive_view, Pagination, SortState, TextFilter};
use contracts::shared::money::format_usd;
use leptos::prelude::*;
use thaw::*;

const SEARCH_FIELDS: &[&str] = &["email", "requested_codes"];

#[derive(Clone, Debug, PartialEq)]
struct TeamUsageState {
    search_query: String,
    sort: SortState,
    pagination: Pagination,
}

/// Вкладка «Team Usage»: запросы и погашения по участникам
#[component]
pub fn TeamUsageTab() -> impl IntoView {
    let ctx = use_global_context();
    let notifications = use_notifications();
    let state = RwSignal::new(TeamUsageState {
        search_query: String::new(),
        sort: SortState::none(),
        pagination: Pagination::new(ctx.config().lists.team_usage_page_size),
    });

    let view_page = Memo::new(move |_| {
        let s = state.get();
        let filters = [TextFilter::new(SEARCH_FIELDS, s.search_query)];
        ctx.team_usage
            .with(|store| derive_view(store.member_usage(), &filters, &s.sort, &s.pagination))
    });
    let max_per_user = Memo::new(move |_| ctx.team_usage.with(|store| store.limits().max_credit_per_user));

    let on_search = Callback::new(move |value: String| {
        state.update(|s| {
            s.search_query = value;
            s.pagination.reset();
        });
    });
    let on_sort = Callback::new(move |field: &'static str| state.update(|s| s.sort.toggle(field)));
    let go_to_page = Callback::new(move |page: usize| state.update(|s| s.pagination.go_to(page)));

    let reset_limit = move |email: String| {
        let result = ctx
            .team_usage
            .try_update(|store| store.reset_member_limit(&email))
            .unwrap_or(Ok(()));
        match result {
            Ok(()) => notifications.success(
                "Limit reset",
                format!("The request limit for {} was reset.", email),
            ),
            Err(err) => notifications.error(&err),
        }
    };

    let sort = Signal::derive(move || state.get().sort);

    view! {
        <div class="tab-panel">
            <div class="filter-panel">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <SearchInput
                        value=Signal::derive(move || state.with(|s| s.search_query.clone()))
                        on_change=on_search
                        placeholder="Search by email or code..."
                    />
                    <span class="filter-panel__hint">
                        {move || format!("Per-user limit: {}", format_usd(max_per_user.get()))}
                    </span>
                </Flex>
            </div>

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell label="Email" field="email" sort=sort on_sort=on_sort />
                            <SortableHeaderCell label="Requested Codes" field="requested_codes" sort=sort on_sort=on_sort />
                            <SortableHeaderCell label="Requested Value" field="requested_value" sort=sort on_sort=on_sort align="right" />
                            <SortableHeaderCell label="Redeemed Value" field="redeemed_value" sort=sort on_sort=on_sort align="right" />
                            <TableHeaderCell>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || view_page.get().rows
                            key=|row| (row.email.clone(), row.requested_codes.len(), row.requested_value.to_bits())
                            children=move |row| {
                                let query = move || state.with(|s| s.search_query.clone());
                                let email = row.email.clone();
                                let email_text = row.email.clone();
                                let codes_label = row.codes_label();
                                view! {
                                    <TableRow>
                                        <TableCell>{move || highlight_matches(&email_text, &query())}</TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {move || highlight_matches(&codes_label, &query())}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell class="text-right">{format_usd(row.requested_value)}</TableCell>
                                        <TableCell class="text-right">{format_usd(row.redeemed_value)}</TableCell>
                                        <TableCell>
                                            <button
                                                class="button button--ghost button--small"
                                                on:click=move |_| reset_limit(email.clone())
                                            >
                                                {icon("refresh")}
                                                "Reset Limit"
                                            </button>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>

                <Show when=move || view_page.get().rows.is_empty()>
                    <div class="table__empty">"No usage recorded."</div>
                </Show>
            </div>

            <PaginationControls
                pagination=Signal::derive(move || state.get().pagination)
                total_count=Signal::derive(move || view_page.get().filtered_count)
                on_page_change=go_to_page
            />
        </div>
    }
}
