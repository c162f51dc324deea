pub mod dto;
pub mod seed;

pub use dto::{usage_stats, UsageFilters, UsageRecordDto, UsageStats};
pub use seed::seed_usage_history;
