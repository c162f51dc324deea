use contracts::shared::list_view::{Pagination, SortState};
use leptos::prelude::*;

/// Состояние таблицы кодов на странице группы
#[derive(Clone, Debug, PartialEq)]
pub struct PromoCodesState {
    pub search_query: String,
    pub sort: SortState,
    pub pagination: Pagination,
    /// Код, для которого открыт диалог погашения
    pub redeeming: Option<String>,
}

pub fn create_state(page_size: usize) -> RwSignal<PromoCodesState> {
    RwSignal::new(PromoCodesState {
        search_query: String::new(),
        sort: SortState::none(),
        pagination: Pagination::new(page_size),
        redeeming: None,
    })
}
