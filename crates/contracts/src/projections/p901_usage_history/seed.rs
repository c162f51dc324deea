use chrono::{Duration, NaiveDate, NaiveDateTime};

use super::dto::UsageRecordDto;

fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 2, 12)
        .and_then(|d| d.and_hms_opt(14, 23, 0))
        .unwrap_or_default()
}

/// Демонстрационная история погашений
pub fn seed_usage_history() -> Vec<UsageRecordDto> {
    let featured = (0..4).map(|_| UsageRecordDto {
        top_up_code: "SOLANA2025FGR".into(),
        group_id: "1343423443".into(),
        amount: -10.0,
        balance: 90.0,
        email: "example@email.com".into(),
        referral_code: "7879998787".into(),
        redeemed_at: base_time(),
    });

    let generated = (0..75).map(|i: i64| {
        let step = (i % 5 + 1) as f64 * 10.0;
        UsageRecordDto {
            top_up_code: format!("CODE{}", 1000 + i),
            group_id: format!("GROUP{}", 2000 + i),
            amount: -step,
            balance: 100.0 - step,
            email: format!("user{}@example.com", i),
            referral_code: format!("REF{}", 3000 + i),
            redeemed_at: base_time() - Duration::minutes(37 * (i + 1)),
        }
    });

    featured.chain(generated).collect()
}
