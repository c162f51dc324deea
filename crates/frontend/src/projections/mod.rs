pub mod p900_transactions;
pub mod p901_usage_history;
