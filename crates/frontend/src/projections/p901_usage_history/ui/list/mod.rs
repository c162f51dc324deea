pub mod state;

use self::state::create_state;
use crate::layout::global_context::use_global_context;
use crate::layout::notification_service::use_notifications;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::{PageHeader, PaginationControls, StatCard};
use crate::shared::export::download_csv;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::enums::UsagePeriod;
use contracts::projections::p901_usage_history::{seed_usage_history, usage_stats, UsageFilters};
use contracts::shared::list_view::{derive_view, filtered_sorted};
use contracts::shared::money::format_usd;
use leptos::prelude::*;
use thaw::*;

const EXPORT_FILE: &str = "usage-history.csv";

/// Фильтры из строки запроса (`?email=...`); неизвестные ключи игнорируются
fn filters_from_query(search: &str) -> UsageFilters {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

/// Строка запроса для адресной строки; без фильтров пустая
fn filters_to_query(filters: &UsageFilters) -> String {
    if *filters == UsageFilters::default() {
        return String::new();
    }
    serde_qs::to_string(filters)
        .map(|qs| format!("?{}", qs))
        .unwrap_or_default()
}

fn current_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

fn replace_search(search: &str) {
    let Some(w) = web_sys::window() else {
        return;
    };
    let path = w.location().pathname().unwrap_or_default();
    let url = format!("{}{}", path, search);
    if let Ok(history) = w.history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url));
    }
}

#[component]
pub fn UsageHistoryList() -> impl IntoView {
    let ctx = use_global_context();
    let notifications = use_notifications();

    let records = StoredValue::new(seed_usage_history());
    let initial = filters_from_query(&current_search());
    let state = create_state(initial.clone(), ctx.config().lists.usage_history_page_size);

    // Поля ввода фильтров
    let top_up_code = RwSignal::new(initial.top_up_code);
    let group_id = RwSignal::new(initial.group_id);
    let email = RwSignal::new(initial.email);
    let referral_code = RwSignal::new(initial.referral_code);
    let period_code = RwSignal::new(UsagePeriod::default().code().to_string());

    Effect::new(move |_| {
        let period = UsagePeriod::from_code(&period_code.get()).unwrap_or_default();
        untrack(move || state.update(|s| s.period = period));
    });

    // Применённые фильтры отражаются в адресной строке
    Effect::new(move |_| {
        let search = filters_to_query(&state.with(|s| s.filters.clone()));
        if current_search() != search {
            replace_search(&search);
        }
    });

    let view_page = Memo::new(move |_| {
        let s = state.get();
        records.with_value(|rows| {
            derive_view(rows, &s.filters.to_text_filters(), &s.sort, &s.pagination)
        })
    });
    let stats = Memo::new(move |_| usage_stats(state.with(|s| s.period)));

    let apply_filters = move |_: leptos::ev::MouseEvent| {
        let filters = UsageFilters {
            top_up_code: top_up_code.get_untracked(),
            group_id: group_id.get_untracked(),
            email: email.get_untracked(),
            referral_code: referral_code.get_untracked(),
        };
        log::debug!("usage filters applied: {:?}", filters);
        state.update(|s| {
            s.filters = filters;
            s.pagination.reset();
        });
    };

    let reset_filters = move |_: leptos::ev::MouseEvent| {
        for field in [top_up_code, group_id, email, referral_code] {
            field.set(String::new());
        }
        state.update(|s| {
            s.filters = UsageFilters::default();
            s.pagination.reset();
        });
    };

    let export = move |_: leptos::ev::MouseEvent| {
        let rows = state.with_untracked(|s| {
            records.with_value(|rows| filtered_sorted(rows, &s.filters.to_text_filters(), &s.sort))
        });
        if let Err(e) = download_csv(&rows, EXPORT_FILE) {
            log::error!("usage export failed: {}", e);
            notifications.failure("Export failed", e);
        }
    };

    let on_sort = Callback::new(move |field: &'static str| state.update(|s| s.sort.toggle(field)));
    let go_to_page = Callback::new(move |page: usize| state.update(|s| s.pagination.go_to(page)));
    let sort = Signal::derive(move || state.get().sort);

    view! {
        <PageFrame page_id="p901_usage_history--list" category=PAGE_CAT_LIST>
            <PageHeader title="Usage" subtitle="Redeemed top-up codes and credit consumption">
                <Select value=period_code>
                    {UsagePeriod::all()
                        .into_iter()
                        .map(|p| view! { <option value=p.code()>{p.display_name()}</option> })
                        .collect_view()}
                </Select>
                <Button on_click=export>
                    {icon("download")}
                    "Download CSV"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Total Usage"
                        icon_name="activity"
                        value=Signal::derive(move || format_usd(stats.get().total_usage))
                    />
                    <StatCard
                        label="Codes Usage"
                        icon_name="tag"
                        value=Signal::derive(move || stats.get().codes_usage.to_string())
                    />
                </div>

                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Top-Up Code"</Label>
                            <Input value=top_up_code placeholder="Code" />
                        </Flex>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Group ID"</Label>
                            <Input value=group_id placeholder="Group" />
                        </Flex>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Email"</Label>
                            <Input value=email placeholder="Email" />
                        </Flex>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Referral Code"</Label>
                            <Input value=referral_code placeholder="Referral" />
                        </Flex>
                        <Button appearance=ButtonAppearance::Primary on_click=apply_filters>
                            {icon("search")}
                            "Apply"
                        </Button>
                        <Button on_click=reset_filters>"Reset"</Button>
                    </Flex>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Top-Up Code" field="top_up_code" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Group ID" field="group_id" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Amount" field="amount" sort=sort on_sort=on_sort align="right" />
                                <SortableHeaderCell label="Balance" field="balance" sort=sort on_sort=on_sort align="right" />
                                <SortableHeaderCell label="Email" field="email" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Referral Code" field="referral_code" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Redeemed at" field="redeemed_at" sort=sort on_sort=on_sort />
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || view_page.get().rows
                                key=|row| (row.top_up_code.clone(), row.redeemed_at)
                                children=move |row| {
                                    let redeemed_at = row.redeemed_at_label();
                                    view! {
                                        <TableRow>
                                            <TableCell><span class="code">{row.top_up_code.clone()}</span></TableCell>
                                            <TableCell>{row.group_id.clone()}</TableCell>
                                            <TableCell class="text-right">{format_usd(row.amount)}</TableCell>
                                            <TableCell class="text-right">{format_usd(row.balance)}</TableCell>
                                            <TableCell>{row.email.clone()}</TableCell>
                                            <TableCell>{row.referral_code.clone()}</TableCell>
                                            <TableCell>{redeemed_at}</TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>

                    <Show when=move || view_page.get().rows.is_empty()>
                        <div class="table__empty">"No usage records match the filters."</div>
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_round_trip() {
        let filters = UsageFilters {
            email: "john@example.com".into(),
            group_id: "G-01".into(),
            ..Default::default()
        };
        let query = filters_to_query(&filters);
        assert!(query.starts_with('?'));
        assert_eq!(filters_from_query(&query), filters);
    }

    #[test]
    fn test_empty_filters_clear_query() {
        assert_eq!(filters_to_query(&UsageFilters::default()), "");
        assert_eq!(filters_from_query(""), UsageFilters::default());
        assert_eq!(filters_from_query("?unknown=1"), UsageFilters::default());
    }
}
