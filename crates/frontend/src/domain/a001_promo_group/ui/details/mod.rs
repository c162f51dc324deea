pub mod redeem_dialog;
pub mod state;

use self::redeem_dialog::RedeemDialog;
use self::state::create_state;
use super::group_outcome;
use crate::layout::global_context::use_global_context;
use crate::layout::notification_service::use_notifications;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::StatusBadge;
use crate::shared::components::{PageHeader, PaginationControls};
use crate::shared::date_utils::{format_date, format_datetime, format_optional_datetime};
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use chrono::Utc;
use contracts::domain::a001_promo_group::{PromoCodeStatus, PromoGroup};
use contracts::domain::common::AggregateId;
use contracts::shared::error::ConsoleError;
use contracts::shared::list_view::{derive_view, ListPage, TextFilter};
use contracts::shared::status::StatusDisplay;
use leptos::prelude::*;
use leptos_router::components::{Redirect, A};
use leptos_router::hooks::use_params_map;
use thaw::*;

const SEARCH_FIELDS: &[&str] = &["code", "user_email", "status"];

#[component]
fn SummaryItem(#[prop(into)] label: String, children: Children) -> impl IntoView {
    view! {
        <div class="details__item">
            <div class="details__label">{label}</div>
            <div class="details__value">{children()}</div>
        </div>
    }
}

/// Просмотр группы: сводка и таблица кодов
#[component]
pub fn PromoGroupDetails() -> impl IntoView {
    let ctx = use_global_context();
    let notifications = use_notifications();
    let params = use_params_map();

    let group_id = params.with_untracked(|p| p.get("group_id")).unwrap_or_default();
    let Some(id) = ctx
        .promo_groups
        .with_untracked(|store| store.get_by_str(&group_id).map(|g| g.id))
    else {
        log::warn!("view requested for unknown group {}", group_id);
        notifications.error(&ConsoleError::not_found("group", group_id));
        return view! { <Redirect path="/esim-codes" /> }.into_any();
    };

    let group = Memo::new(move |_| {
        ctx.promo_groups
            .with(|store| store.get_by_id(&id).cloned())
    });
    let state = create_state(ctx.config().lists.promo_codes_page_size);

    let codes_page = Memo::new(move |_| {
        let s = state.get();
        let filters = [TextFilter::new(SEARCH_FIELDS, s.search_query)];
        group.with(|group| match group {
            Some(group) => derive_view(&group.promo_codes, &filters, &s.sort, &s.pagination),
            None => ListPage {
                rows: Vec::new(),
                filtered_count: 0,
                total_pages: 0,
            },
        })
    });

    let on_search = Callback::new(move |value: String| {
        state.update(|s| {
            s.search_query = value;
            s.pagination.reset();
        });
    });
    let on_sort = Callback::new(move |field: &'static str| state.update(|s| s.sort.toggle(field)));
    let go_to_page = Callback::new(move |page: usize| state.update(|s| s.pagination.go_to(page)));
    let close_redeem = Callback::new(move |_| state.update(|s| s.redeeming = None));

    let change_status = move |code: String, value: String| {
        let Some(status) = PromoCodeStatus::from_code(&value) else {
            return;
        };
        let result = group_outcome(
            ctx.promo_groups
                .try_update(|store| store.set_code_status(&id, &code, status, Utc::now())),
            id.as_string(),
        );
        match result {
            Ok(()) => notifications.info(
                "Status updated",
                format!("{} is now {}.", code, status.label()),
            ),
            Err(err) => notifications.error(&err),
        }
    };

    let sort = Signal::derive(move || state.get().sort);
    let redeeming = Memo::new(move |_| state.with(|s| s.redeeming.clone()));
    let title = group.with_untracked(|g| g.as_ref().map(|g| g.name.clone()).unwrap_or_default());

    view! {
        <PageFrame page_id="a001_promo_group--view" category=PAGE_CAT_DETAIL>
            <PageHeader title=title subtitle="Promo group details">
                <A href="/esim-codes" attr:class="button button--secondary">
                    {icon("chevron-left")}
                    "Back"
                </A>
                <A href=format!("/esim-codes/{}/edit", group_id) attr:class="button button--primary">
                    {icon("edit")}
                    "Edit"
                </A>
            </PageHeader>

            <div class="page__content">
                {move || group.get().map(|g| group_summary(&g))}

                <Card>
                    <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                        <h2 class="section__title">"Promo Codes"</h2>
                        <SearchInput
                            value=Signal::derive(move || state.with(|s| s.search_query.clone()))
                            on_change=on_search
                            placeholder="Search codes, emails, statuses..."
                        />
                    </Flex>

                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Code"</TableHeaderCell>
                                    <SortableHeaderCell label="Created" field="created_time" sort=sort on_sort=on_sort />
                                    <SortableHeaderCell label="Redeemed" field="redeem_time" sort=sort on_sort=on_sort />
                                    <SortableHeaderCell label="User" field="user_email" sort=sort on_sort=on_sort />
                                    <SortableHeaderCell label="Status" field="status" sort=sort on_sort=on_sort />
                                    <TableHeaderCell>"Actions"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || codes_page.get().rows
                                    key=|code| (code.code.clone(), code.status, code.redeem_time)
                                    children=move |code| {
                                        let query = move || state.with(|s| s.search_query.clone());
                                        let code_text = code.code.clone();
                                        let user_email = code.user_email.clone().unwrap_or_else(|| "-".to_string());
                                        let is_used = code.status == PromoCodeStatus::Used;
                                        let code_for_status = code.code.clone();
                                        let code_for_redeem = code.code.clone();
                                        let redeemable = code.status.is_redeemable();
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <span class="code">{move || highlight_matches(&code_text, &query())}</span>
                                                </TableCell>
                                                <TableCell>{format_datetime(code.created_time)}</TableCell>
                                                <TableCell>{format_optional_datetime(code.redeem_time)}</TableCell>
                                                <TableCell>
                                                    {move || highlight_matches(&user_email, &query())}
                                                </TableCell>
                                                <TableCell>
                                                    <StatusBadge status=code.status />
                                                </TableCell>
                                                <TableCell>
                                                    <div class="table__actions">
                                                        <select
                                                            class="form__select form__select--compact"
                                                            disabled=is_used
                                                            title=if is_used { "Redeemed codes keep their status" } else { "" }
                                                            on:change=move |ev| change_status(code_for_status.clone(), event_target_value(&ev))
                                                        >
                                                            {if is_used { vec![PromoCodeStatus::Used] } else { PromoCodeStatus::manual_choices() }
                                                                .into_iter()
                                                                .map(|status| view! {
                                                                    <option value=status.label() selected=status == code.status>
                                                                        {status.label()}
                                                                    </option>
                                                                })
                                                                .collect_view()}
                                                        </select>
                                                        <button
                                                            class="table__action"
                                                            title="Redeem for a team member"
                                                            disabled=!redeemable
                                                            on:click=move |_| state.update(|s| s.redeeming = Some(code_for_redeem.clone()))
                                                        >
                                                            {icon("check")}
                                                        </button>
                                                    </div>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>

                        <Show when=move || codes_page.get().rows.is_empty()>
                            <div class="table__empty">"No codes found."</div>
                        </Show>
                    </div>

                    <PaginationControls
                        pagination=Signal::derive(move || state.get().pagination)
                        total_count=Signal::derive(move || codes_page.get().filtered_count)
                        on_page_change=go_to_page
                    />
                </Card>
            </div>

            {move || redeeming.get().map(|code| view! {
                <RedeemDialog group_id=id code=code on_close=close_redeem />
            })}
        </PageFrame>
    }
    .into_any()
}

fn group_summary(group: &PromoGroup) -> impl IntoView {
    let used = group.count_codes(PromoCodeStatus::Used);
    let open = group.count_codes(PromoCodeStatus::Open);
    let reward = format!("{} {}", group.reward_amount, group.reward_kind.display_name());
    let window = format!("{} - {}", format_date(group.start_date), format_date(group.end_date));
    let status = group.status;
    let description = group.description.clone();
    let quantity = group.quantity.to_string();
    let codes = format!("{} open / {} used / {} total", open, used, group.promo_codes.len());

    view! {
        <Card>
            <div class="details__grid">
                <SummaryItem label="Status">
                    <StatusBadge status=status />
                </SummaryItem>
                <SummaryItem label="Description">{description}</SummaryItem>
                <SummaryItem label="Reward">{reward}</SummaryItem>
                <SummaryItem label="Validity">{window}</SummaryItem>
                <SummaryItem label="Quantity">{quantity}</SummaryItem>
                <SummaryItem label="Codes">
                    {codes}
                </SummaryItem>
            </div>
        </Card>
    }
}
