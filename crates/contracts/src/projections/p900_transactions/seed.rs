use chrono::NaiveDateTime;

use super::dto::{TransactionDto, TRANSACTION_TIME_FORMAT};
use crate::enums::TransactionType;

const SEED: &[(&str, f64, f64, &str, TransactionType)] = &[
    ("TXN001", 500.00, 2450.00, "2024-01-15 10:30", TransactionType::CreditCard),
    ("TXN002", -89.50, 1950.00, "2024-01-14 15:22", TransactionType::Usage),
    ("TXN003", 1000.00, 2039.50, "2024-01-10 09:15", TransactionType::Crypto),
    ("TXN004", -125.30, 1039.50, "2024-01-08 12:45", TransactionType::Usage),
    ("TXN005", 200.00, 1164.80, "2024-01-07 11:00", TransactionType::CreditCard),
    ("TXN006", -45.00, 1119.80, "2024-01-06 09:30", TransactionType::Usage),
    ("TXN007", 750.00, 1869.80, "2024-01-05 14:00", TransactionType::Crypto),
    ("TXN008", -60.20, 1809.60, "2024-01-04 10:10", TransactionType::Usage),
    ("TXN009", 150.00, 1959.60, "2024-01-03 16:40", TransactionType::CreditCard),
    ("TXN010", -99.00, 1860.60, "2024-01-02 08:00", TransactionType::Usage),
    ("TXN011", 300.00, 2160.60, "2024-01-01 13:00", TransactionType::Crypto),
];

/// История операций, новые сверху
pub fn seed_transactions() -> Vec<TransactionDto> {
    SEED.iter()
        .filter_map(|(id, amount, balance, time, kind)| {
            let time = NaiveDateTime::parse_from_str(time, TRANSACTION_TIME_FORMAT).ok()?;
            Some(TransactionDto {
                id: id.to_string(),
                amount: *amount,
                balance: *balance,
                time,
                kind: *kind,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_seed_rows_parse() {
        assert_eq!(seed_transactions().len(), 11);
    }
}
