use serde::{Deserialize, Serialize};

/// Период для карточек статистики
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UsagePeriod {
    #[default]
    Last7Days,
    Last30Days,
}

impl UsagePeriod {
    pub fn code(&self) -> &'static str {
        match self {
            UsagePeriod::Last7Days => "last7days",
            UsagePeriod::Last30Days => "last30days",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UsagePeriod::Last7Days => "Last 7 days",
            UsagePeriod::Last30Days => "Last 30 days",
        }
    }

    /// Подпись сравнения для тренда
    pub fn comparison_label(&self) -> &'static str {
        match self {
            UsagePeriod::Last7Days => "vs previous week",
            UsagePeriod::Last30Days => "vs last month",
        }
    }

    pub fn all() -> Vec<UsagePeriod> {
        vec![UsagePeriod::Last7Days, UsagePeriod::Last30Days]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "last7days" => Some(UsagePeriod::Last7Days),
            "last30days" => Some(UsagePeriod::Last30Days),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for period in UsagePeriod::all() {
            assert_eq!(UsagePeriod::from_code(period.code()), Some(period));
        }
        assert_eq!(UsagePeriod::from_code("year"), None);
    }
}
