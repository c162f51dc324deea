use serde::{Deserialize, Serialize};

/// Тип операции по счёту
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    CreditCard,
    Crypto,
    Usage,
}

impl TransactionType {
    pub fn code(&self) -> &'static str {
        match self {
            TransactionType::CreditCard => "credit-card",
            TransactionType::Crypto => "crypto",
            TransactionType::Usage => "usage",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TransactionType::CreditCard => "Credit Card",
            TransactionType::Crypto => "Crypto",
            TransactionType::Usage => "Usage",
        }
    }

    /// Пополнение (в отличие от списания)
    pub fn is_top_up(&self) -> bool {
        !matches!(self, TransactionType::Usage)
    }

    pub fn all() -> Vec<TransactionType> {
        vec![
            TransactionType::CreditCard,
            TransactionType::Crypto,
            TransactionType::Usage,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "credit-card" => Some(TransactionType::CreditCard),
            "crypto" => Some(TransactionType::Crypto),
            "usage" => Some(TransactionType::Usage),
            _ => None,
        }
    }
}
