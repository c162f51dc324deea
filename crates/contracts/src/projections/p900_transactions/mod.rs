pub mod dto;
pub mod seed;

pub use dto::{latest_balance, purchase_stats, PurchaseStats, TransactionDto};
pub use seed::seed_transactions;
