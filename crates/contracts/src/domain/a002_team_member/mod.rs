pub mod aggregate;
pub mod import;
pub mod seed;
pub mod store;

pub use aggregate::{NewTeamMember, TeamMember, TeamMemberId, TeamMemberStatus};
pub use store::TeamMemberStore;
