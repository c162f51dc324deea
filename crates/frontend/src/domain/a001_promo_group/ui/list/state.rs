use contracts::shared::list_view::{Pagination, SortState};
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct PromoGroupListState {
    pub search_query: String,
    pub sort: SortState,
    pub pagination: Pagination,
}

impl PromoGroupListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            search_query: String::new(),
            sort: SortState::none(),
            pagination: Pagination::new(page_size),
        }
    }
}

pub fn create_state(page_size: usize) -> RwSignal<PromoGroupListState> {
    RwSignal::new(PromoGroupListState::new(page_size))
}
