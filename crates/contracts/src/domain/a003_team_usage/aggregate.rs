use serde::{Deserialize, Serialize};

/// Суммарное потребление команды
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamUsage {
    pub total_data_used_gb: f64,
    pub total_credits_used: f64,
}

/// Лимиты команды
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamLimits {
    pub max_data_gb: f64,
    pub max_credits: f64,
    pub default_member_data_limit_gb: f64,
    pub default_member_credit_limit: f64,
    /// Максимальная сумма запросов одного пользователя, USD
    pub max_credit_per_user: f64,
}

/// Запросы и погашения одного участника
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberUsage {
    pub email: String,
    pub requested_codes: Vec<String>,
    pub requested_value: f64,
    pub redeemed_value: f64,
}

impl TeamMemberUsage {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            requested_codes: Vec::new(),
            requested_value: 0.0,
            redeemed_value: 0.0,
        }
    }

    pub fn codes_label(&self) -> String {
        self.requested_codes.join(", ")
    }
}

/// Списание по одному погашенному коду
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UsageCharge {
    pub data_gb: f64,
    pub credits: f64,
    /// Номинал кода, учитывается в счётчиках участника
    pub value: f64,
}

/// Процент заполнения для индикатора (0–100; 0 при нулевом лимите)
pub fn usage_percent(used: f64, max: f64) -> f64 {
    if max <= 0.0 || !used.is_finite() {
        return 0.0;
    }
    (used / max * 100.0).clamp(0.0, 100.0)
}

/// Подпись индикатора: `used / max unit (NN%)`, суммы с двумя знаками
pub fn usage_label(used: f64, max: f64, unit: &str) -> String {
    format!(
        "{:.2} / {:.2} {} ({:.0}%)",
        used,
        max,
        unit,
        usage_percent(used, max)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_percent() {
        assert_eq!(usage_percent(750.0, 1000.0), 75.0);
        assert_eq!(usage_percent(10.0, 0.0), 0.0);
        assert_eq!(usage_percent(2000.0, 1000.0), 100.0);
    }

    #[test]
    fn test_usage_label_rounds_float_sums() {
        // 0.1 + 0.2 накопленные погашениями
        assert_eq!(usage_label(0.1 + 0.2, 1000.0, "GB"), "0.30 / 1000.00 GB (0%)");
        assert_eq!(usage_label(750.0, 1000.0, "credits"), "750.00 / 1000.00 credits (75%)");
    }

    #[test]
    fn test_codes_label() {
        let mut usage = TeamMemberUsage::new("a@x.com");
        usage.requested_codes = vec!["ESIM-1".into(), "ESIM-2".into()];
        assert_eq!(usage.codes_label(), "ESIM-1, ESIM-2");
    }
}
