use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use super::aggregate::{
    IndividualPromoCode, PromoCodeStatus, PromoGroup, PromoGroupId, PromoGroupStatus, RewardKind,
};

/// Кодов в демонстрационной группе ByBit Team
pub const BYBIT_CODE_COUNT: usize = 830;

fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
        .single()
        .unwrap_or_default()
}

fn seed_code(i: usize) -> IndividualPromoCode {
    let status = match i % 4 {
        0 => PromoCodeStatus::Open,
        1 => PromoCodeStatus::Distributed,
        2 => PromoCodeStatus::Suspended,
        _ => PromoCodeStatus::Used,
    };
    let assigned = i % 2 == 0 || status == PromoCodeStatus::Used;
    let minutes = Duration::minutes(i as i64);

    IndividualPromoCode {
        code: format!("SOLANA2025FGR-{}", i),
        created_time: at(2024, 12, 20, 15, 43, 0) + minutes,
        redeem_time: (status == PromoCodeStatus::Used).then(|| at(2024, 12, 20, 19, 34, 0) + minutes),
        status,
        user_id: assigned.then(|| Uuid::new_v4().to_string()),
        user_email: assigned.then(|| format!("user{}@example.com", i)),
    }
}

fn group(
    name: &str,
    description: &str,
    quantity: u32,
    end_date: DateTime<Utc>,
    reward_amount: u32,
    status: PromoGroupStatus,
    promo_codes: Vec<IndividualPromoCode>,
) -> PromoGroup {
    PromoGroup {
        id: PromoGroupId::new_v4(),
        name: name.to_string(),
        description: description.to_string(),
        quantity,
        start_date: at(2024, 12, 20, 0, 0, 0),
        end_date,
        reward_kind: RewardKind::EsimData,
        reward_amount,
        status,
        promo_codes,
    }
}

/// Демонстрационные группы, с которыми стартует консоль
pub fn seed_promo_groups() -> Vec<PromoGroup> {
    let spring_end = at(2025, 4, 20, 23, 59, 59);
    vec![
        group(
            "ByBit Team",
            "Special promo for ByBit Team",
            1000,
            at(2025, 12, 31, 23, 59, 59),
            500,
            PromoGroupStatus::Active,
            (0..BYBIT_CODE_COUNT).map(seed_code).collect(),
        ),
        group(
            "Team 2",
            "Bonus data for Team 2",
            100,
            spring_end,
            2000,
            PromoGroupStatus::Inactive,
            Vec::new(),
        ),
        group(
            "Team 3",
            "Limited time offer for Team 3",
            900,
            spring_end,
            900,
            PromoGroupStatus::Expired,
            Vec::new(),
        ),
        group(
            "Group 4",
            "Another promo group",
            90,
            spring_end,
            900,
            PromoGroupStatus::Suspended,
            Vec::new(),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let groups = seed_promo_groups();
        assert_eq!(groups.len(), 4);
        assert_eq!(groups[0].name, "ByBit Team");
        assert_eq!(groups[0].promo_codes.len(), BYBIT_CODE_COUNT);
        assert_eq!(groups[0].promo_codes[5].code, "SOLANA2025FGR-5");
        assert!(groups[1..].iter().all(|g| g.promo_codes.is_empty()));
    }

    #[test]
    fn test_seed_codes_keep_redeem_invariant() {
        for code in &seed_promo_groups()[0].promo_codes {
            assert_eq!(code.is_used(), code.redeem_time.is_some(), "{}", code.code);
        }
    }
}
