pub mod list;

pub use list::UsageHistoryList;
