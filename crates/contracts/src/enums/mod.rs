pub mod payment_method;
pub mod transaction_type;
pub mod usage_period;

pub use payment_method::PaymentMethod;
pub use transaction_type::TransactionType;
pub use usage_period::UsagePeriod;
