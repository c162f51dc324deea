use contracts::enums::UsagePeriod;
use contracts::projections::p901_usage_history::UsageFilters;
use contracts::shared::list_view::{Pagination, SortState};
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct UsageHistoryState {
    /// Применённые фильтры; поля ввода живут отдельно до нажатия Apply
    pub filters: UsageFilters,
    pub sort: SortState,
    pub pagination: Pagination,
    pub period: UsagePeriod,
}

pub fn create_state(filters: UsageFilters, page_size: usize) -> RwSignal<UsageHistoryState> {
    RwSignal::new(UsageHistoryState {
        filters,
        sort: SortState::none(),
        pagination: Pagination::new(page_size),
        period: UsagePeriod::default(),
    })
}
