use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::enums::{TransactionType, UsagePeriod};
use crate::shared::csv_export::CsvExportable;
use crate::shared::money::plain_amount;

/// Формат колонки «Date & Time»
pub const TRANSACTION_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Операция по счёту (пополнение или списание)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDto {
    pub id: String,
    /// Отрицательная для списаний
    pub amount: f64,
    /// Остаток после операции
    pub balance: f64,
    pub time: NaiveDateTime,
    pub kind: TransactionType,
}

impl TransactionDto {
    pub fn time_label(&self) -> String {
        self.time.format(TRANSACTION_TIME_FORMAT).to_string()
    }
}

impl CsvExportable for TransactionDto {
    fn headers() -> Vec<&'static str> {
        vec!["Transaction ID", "Amount", "Balance", "Date & Time", "Type"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            plain_amount(self.amount),
            plain_amount(self.balance),
            self.time_label(),
            self.kind.display_name().to_string(),
        ]
    }
}

/// Сумма покупок за период с трендом к предыдущему
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PurchaseStats {
    pub total: f64,
    pub trend_percent: u32,
    pub trend_positive: bool,
}

/// Остаток по самой поздней операции; 0 без операций
pub fn latest_balance(transactions: &[TransactionDto]) -> f64 {
    transactions
        .iter()
        .max_by_key(|t| t.time)
        .map(|t| t.balance)
        .unwrap_or(0.0)
}

pub fn purchase_stats(period: UsagePeriod) -> PurchaseStats {
    match period {
        UsagePeriod::Last7Days => PurchaseStats {
            total: 89.50,
            trend_percent: 5,
            trend_positive: false,
        },
        UsagePeriod::Last30Days => PurchaseStats {
            total: 342.80,
            trend_percent: 8,
            trend_positive: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projections::p900_transactions::seed::seed_transactions;
    use crate::shared::csv_export::to_csv_string;

    #[test]
    fn test_csv_export_two_rows() {
        let rows: Vec<TransactionDto> = seed_transactions().into_iter().take(2).collect();
        let csv = to_csv_string(&rows).unwrap();
        assert_eq!(
            csv,
            "Transaction ID,Amount,Balance,Date & Time,Type\n\
             TXN001,500.00,2450.00,2024-01-15 10:30,Credit Card\n\
             TXN002,-89.50,1950.00,2024-01-14 15:22,Usage\n"
        );
    }

    #[test]
    fn test_latest_balance() {
        assert_eq!(latest_balance(&seed_transactions()), 2450.0);
        assert_eq!(latest_balance(&[]), 0.0);
    }

    #[test]
    fn test_purchase_stats() {
        assert_eq!(purchase_stats(UsagePeriod::Last7Days).total, 89.50);
        assert!(purchase_stats(UsagePeriod::Last30Days).trend_positive);
    }
}
