pub mod list;
pub mod member_dialog;

pub use list::TeamMembersTab;
