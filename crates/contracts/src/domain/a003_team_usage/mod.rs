pub mod aggregate;
pub mod seed;
pub mod store;

pub use aggregate::{usage_label, usage_percent, TeamLimits, TeamMemberUsage, TeamUsage, UsageCharge};
pub use store::TeamUsageStore;
