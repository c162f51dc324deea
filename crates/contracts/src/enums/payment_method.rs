use serde::{Deserialize, Serialize};

use super::transaction_type::TransactionType;

/// Способ оплаты пополнения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Банковская карта через Stripe
    #[default]
    Stripe,
    /// Криптовалюта через Pelago
    Pelago,
}

impl PaymentMethod {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Stripe => "stripe",
            PaymentMethod::Pelago => "pelago",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Stripe => "Credit Card (Stripe)",
            PaymentMethod::Pelago => "Crypto (Pelago)",
        }
    }

    pub fn transaction_type(&self) -> TransactionType {
        match self {
            PaymentMethod::Stripe => TransactionType::CreditCard,
            PaymentMethod::Pelago => TransactionType::Crypto,
        }
    }

    pub fn all() -> Vec<PaymentMethod> {
        vec![PaymentMethod::Stripe, PaymentMethod::Pelago]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "stripe" => Some(PaymentMethod::Stripe),
            "pelago" => Some(PaymentMethod::Pelago),
            _ => None,
        }
    }
}
