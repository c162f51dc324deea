use contracts::domain::a002_team_member::TeamMember;
use contracts::shared::list_view::{Pagination, SortState};
use leptos::prelude::*;

/// Что показывает диалог участника
#[derive(Clone, Debug, PartialEq)]
pub enum MemberDialog {
    Add,
    Edit(TeamMember),
}

#[derive(Clone, Debug, PartialEq)]
pub struct TeamMembersState {
    pub search_query: String,
    pub sort: SortState,
    pub pagination: Pagination,
    pub dialog: Option<MemberDialog>,
}

pub fn create_state(page_size: usize) -> RwSignal<TeamMembersState> {
    RwSignal::new(TeamMembersState {
        search_query: String::new(),
        sort: SortState::none(),
        pagination: Pagination::new(page_size),
        dialog: None,
    })
}
