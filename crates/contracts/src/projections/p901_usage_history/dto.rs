use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::enums::UsagePeriod;
use crate::shared::csv_export::CsvExportable;
use crate::shared::list_view::{Searchable, SortValue, Sortable, TextFilter};
use crate::shared::money::plain_amount;

pub const REDEEMED_AT_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Погашение кода с списанием кредита
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageRecordDto {
    pub top_up_code: String,
    pub group_id: String,
    pub amount: f64,
    pub balance: f64,
    pub email: String,
    pub referral_code: String,
    pub redeemed_at: NaiveDateTime,
}

impl UsageRecordDto {
    pub fn redeemed_at_label(&self) -> String {
        self.redeemed_at.format(REDEEMED_AT_FORMAT).to_string()
    }
}

impl Searchable for UsageRecordDto {
    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "top_up_code" => Some(self.top_up_code.clone()),
            "group_id" => Some(self.group_id.clone()),
            "email" => Some(self.email.clone()),
            "referral_code" => Some(self.referral_code.clone()),
            _ => None,
        }
    }
}

impl Sortable for UsageRecordDto {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "amount" => SortValue::Number(self.amount),
            "balance" => SortValue::Number(self.balance),
            "group_id" => SortValue::Text(self.group_id.clone()),
            "email" => SortValue::Text(self.email.clone()),
            "referral_code" => SortValue::Text(self.referral_code.clone()),
            "redeemed_at" => SortValue::Number(self.redeemed_at.and_utc().timestamp() as f64),
            _ => SortValue::Text(self.top_up_code.clone()),
        }
    }
}

impl CsvExportable for UsageRecordDto {
    fn headers() -> Vec<&'static str> {
        vec![
            "Top-Up Code",
            "Group ID",
            "Amount",
            "Balance",
            "Email",
            "Referral Code",
            "Redeemed at",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.top_up_code.clone(),
            self.group_id.clone(),
            plain_amount(self.amount),
            plain_amount(self.balance),
            self.email.clone(),
            self.referral_code.clone(),
            self.redeemed_at_label(),
        ]
    }
}

/// Четыре фильтра страницы Usage, объединяемые по И
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageFilters {
    pub top_up_code: String,
    pub group_id: String,
    pub email: String,
    pub referral_code: String,
}

impl UsageFilters {
    pub fn to_text_filters(&self) -> Vec<TextFilter> {
        vec![
            TextFilter::new(&["top_up_code"], self.top_up_code.clone()),
            TextFilter::new(&["group_id"], self.group_id.clone()),
            TextFilter::new(&["email"], self.email.clone()),
            TextFilter::new(&["referral_code"], self.referral_code.clone()),
        ]
    }
}

/// Итоги потребления за период
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsageStats {
    pub total_usage: f64,
    pub codes_usage: u32,
}

pub fn usage_stats(period: UsagePeriod) -> UsageStats {
    match period {
        UsagePeriod::Last7Days => UsageStats {
            total_usage: 100.00,
            codes_usage: 4342,
        },
        UsagePeriod::Last30Days => UsageStats {
            total_usage: 342.80,
            codes_usage: 15000,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projections::p901_usage_history::seed::seed_usage_history;
    use crate::shared::list_view::{derive_view, Pagination, SortState};

    #[test]
    fn test_filters_and_paging() {
        let records = seed_usage_history();
        let filters = UsageFilters {
            email: "USER1".into(),
            ..Default::default()
        };
        let page = derive_view(
            &records,
            &filters.to_text_filters(),
            &SortState::none(),
            &Pagination::new(5),
        );
        // user1, user10..user19
        assert_eq!(page.filtered_count, 11);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_seed_fills_sixteen_pages() {
        let records = seed_usage_history();
        assert_eq!(Pagination::new(5).total_pages(records.len()), 16);
    }

    #[test]
    fn test_csv_row() {
        let record = &seed_usage_history()[0];
        assert_eq!(
            record.to_csv_row(),
            vec![
                "SOLANA2025FGR",
                "1343423443",
                "-10.00",
                "90.00",
                "example@email.com",
                "7879998787",
                "12/02/2025 14:23",
            ]
        );
    }

    #[test]
    fn test_usage_stats() {
        assert_eq!(usage_stats(UsagePeriod::Last30Days).codes_usage, 15000);
    }
}
