pub mod limits;
pub mod member_usage;

pub use limits::UsageLimitsTab;
pub use member_usage::TeamUsageTab;
