pub mod request;
pub mod response;

pub use request::RedeemCodeRequest;
pub use response::RedemptionReceipt;

use chrono::{DateTime, Utc};

use crate::domain::a001_promo_group::{PromoCodeStatus, PromoGroup, PromoGroupStatus, PromoGroupStore, RewardKind};
use crate::domain::a002_team_member::{TeamMemberStatus, TeamMemberStore};
use crate::domain::a003_team_usage::{TeamUsageStore, UsageCharge};
use crate::domain::common::AggregateId;
use crate::shared::error::{ConsoleError, ConsoleResult};
use crate::usecases::common::UseCaseMetadata;

/// Мегабайт в гигабайте для наград eSIM Data
const MB_PER_GB: f64 = 1000.0;

pub struct RedeemCode;

impl UseCaseMetadata for RedeemCode {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "redeem_code"
    }

    fn display_name() -> &'static str {
        "Redeem code"
    }

    fn description() -> &'static str {
        "Погашение кода участником: статус Used и учёт потребления команды"
    }
}

/// Списание, которое порождает погашение одного кода группы
pub fn charge_for(group: &PromoGroup) -> UsageCharge {
    let amount = group.reward_amount as f64;
    match group.reward_kind {
        RewardKind::EsimData => UsageCharge {
            data_gb: amount / MB_PER_GB,
            credits: 0.0,
            value: amount,
        },
        RewardKind::Credits => UsageCharge {
            data_gb: 0.0,
            credits: amount,
            value: amount,
        },
    }
}

impl RedeemCode {
    /// Все проверки выполняются до первого изменения: при ошибке ни одно
    /// хранилище не меняется.
    pub fn execute(
        groups: &mut PromoGroupStore,
        members: &TeamMemberStore,
        usage: &mut TeamUsageStore,
        request: &RedeemCodeRequest,
        now: DateTime<Utc>,
    ) -> ConsoleResult<RedemptionReceipt> {
        let result = Self::check(groups, members, usage, request, now);
        let (member_id, member_email, charge) = match result {
            Ok(checked) => checked,
            Err(err) => {
                log::warn!("{} rejected for code {}: {}", Self::full_name(), request.code, err);
                return Err(err);
            }
        };

        let group = groups
            .get_mut(&request.group_id)
            .ok_or_else(|| ConsoleError::not_found("group", request.group_id.as_string()))?;
        let group_name = group.name.clone();
        let code = group
            .find_code_mut(&request.code)
            .ok_or_else(|| ConsoleError::not_found("code", request.code.clone()))?;
        code.set_status(PromoCodeStatus::Used, now);
        code.user_id = Some(member_id);
        code.user_email = Some(member_email.clone());

        usage.apply_charge(&member_email, &request.code, &charge);

        log::info!(
            "code {} of '{}' redeemed by {} ({:.3} GB, {} credits)",
            request.code,
            group_name,
            member_email,
            charge.data_gb,
            charge.credits
        );

        Ok(RedemptionReceipt {
            code: request.code.clone(),
            group_name,
            member_email,
            redeemed_at: now,
            charge,
        })
    }

    fn check(
        groups: &PromoGroupStore,
        members: &TeamMemberStore,
        usage: &TeamUsageStore,
        request: &RedeemCodeRequest,
        now: DateTime<Utc>,
    ) -> ConsoleResult<(String, String, UsageCharge)> {
        let group = groups
            .get_by_id(&request.group_id)
            .ok_or_else(|| ConsoleError::not_found("group", request.group_id.as_string()))?;
        if group.status != PromoGroupStatus::Active || !group.is_within_window(now) {
            return Err(ConsoleError::conflict(format!(
                "Group '{}' is not accepting redemptions.",
                group.name
            )));
        }

        let code = group
            .find_code(&request.code)
            .ok_or_else(|| ConsoleError::not_found("code", request.code.clone()))?;
        if !code.status.is_redeemable() {
            return Err(ConsoleError::conflict(format!(
                "Code {} cannot be redeemed in its current state.",
                code.code
            )));
        }

        let member = members
            .find_by_email(&request.member_email)
            .ok_or_else(|| ConsoleError::not_found("team member", request.member_email.trim()))?;
        if member.status != TeamMemberStatus::Active {
            return Err(ConsoleError::conflict(format!(
                "Team member {} is not active.",
                member.email
            )));
        }

        let charge = charge_for(group);
        usage.check_charge(&member.email, &charge)?;
        Ok((member.id.as_string(), member.email.clone(), charge))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_promo_group::{PromoGroupDraft, PromoGroupId};
    use crate::domain::a002_team_member::seed::seed_team_members;
    use crate::domain::a003_team_usage::seed::seed_team_usage_store;
    use crate::shared::config::ConsoleConfig;
    use chrono::{NaiveDate, TimeZone};

    struct Fixture {
        groups: PromoGroupStore,
        members: TeamMemberStore,
        usage: TeamUsageStore,
        group_id: PromoGroupId,
        code: String,
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap()
    }

    fn fixture() -> Fixture {
        let mut groups = PromoGroupStore::new(Vec::new(), ConsoleConfig::default().codes);
        let input = PromoGroupDraft {
            name: "Test Group".into(),
            quantity: 3,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 31),
            reward_amount: 500,
            ..Default::default()
        }
        .validate()
        .unwrap();
        let group = groups.create(input, now());
        Fixture {
            group_id: group.id,
            code: group.promo_codes[0].code.clone(),
            groups,
            members: TeamMemberStore::new(seed_team_members()),
            usage: seed_team_usage_store(),
        }
    }

    fn request(f: &Fixture, email: &str) -> RedeemCodeRequest {
        RedeemCodeRequest {
            group_id: f.group_id,
            code: f.code.clone(),
            member_email: email.into(),
        }
    }

    #[test]
    fn test_usecase_name() {
        assert_eq!(RedeemCode::full_name(), "u501_redeem_code");
    }

    #[test]
    fn test_redeem_updates_code_and_usage() {
        let mut f = fixture();
        let req = request(&f, "member1@example.com");
        let receipt =
            RedeemCode::execute(&mut f.groups, &f.members, &mut f.usage, &req, now()).unwrap();

        assert_eq!(receipt.group_name, "Test Group");
        let code = f.groups.get_by_id(&f.group_id).unwrap().find_code(&f.code).unwrap();
        assert_eq!(code.status, PromoCodeStatus::Used);
        assert_eq!(code.redeem_time, Some(now()));
        assert_eq!(code.user_id.as_deref(), Some("member1"));
        assert_eq!(code.user_email.as_deref(), Some("member1@example.com"));

        assert_eq!(f.usage.usage().total_data_used_gb, 750.5);
        let row = f.usage.find_member_usage("member1@example.com").unwrap();
        assert_eq!(row.requested_codes, vec![f.code.clone()]);
        assert_eq!(row.redeemed_value, 500.0);
    }

    #[test]
    fn test_second_redemption_is_conflict() {
        let mut f = fixture();
        let req = request(&f, "member1@example.com");
        RedeemCode::execute(&mut f.groups, &f.members, &mut f.usage, &req, now()).unwrap();
        let usage_before = f.usage.clone();

        let second = RedeemCode::execute(&mut f.groups, &f.members, &mut f.usage, &req, now());
        assert!(matches!(second, Err(ConsoleError::Conflict(_))));
        assert_eq!(f.usage.usage(), usage_before.usage());
        assert_eq!(f.usage.member_usage(), usage_before.member_usage());
    }

    #[test]
    fn test_redeemed_code_cannot_be_reopened() {
        let mut f = fixture();
        let req = request(&f, "member1@example.com");
        RedeemCode::execute(&mut f.groups, &f.members, &mut f.usage, &req, now()).unwrap();
        let usage_before = f.usage.clone();

        let reopened = f
            .groups
            .set_code_status(&f.group_id, &f.code, PromoCodeStatus::Open, now());
        assert!(matches!(reopened, Err(ConsoleError::Conflict(_))));

        let again = RedeemCode::execute(&mut f.groups, &f.members, &mut f.usage, &req, now());
        assert!(matches!(again, Err(ConsoleError::Conflict(_))));
        assert_eq!(f.usage.usage(), usage_before.usage());
        let row = f.usage.find_member_usage("member1@example.com").unwrap();
        assert_eq!(row.requested_codes, vec![f.code.clone()]);
        assert_eq!(row.redeemed_value, 500.0);
    }

    #[test]
    fn test_manual_used_is_rejected_without_charge() {
        let mut f = fixture();
        let usage_before = f.usage.clone();
        let result = f
            .groups
            .set_code_status(&f.group_id, &f.code, PromoCodeStatus::Used, now());
        assert!(matches!(result, Err(ConsoleError::Conflict(_))));

        let code = f.groups.get_by_id(&f.group_id).unwrap().find_code(&f.code).unwrap();
        assert_eq!(code.status, PromoCodeStatus::Open);
        assert!(code.user_email.is_none());
        assert_eq!(f.usage.usage(), usage_before.usage());
    }

    #[test]
    fn test_inactive_member_is_rejected() {
        let mut f = fixture();
        // member2 — Inactive
        let req = request(&f, "member2@example.com");
        let result = RedeemCode::execute(&mut f.groups, &f.members, &mut f.usage, &req, now());
        assert!(matches!(result, Err(ConsoleError::Conflict(_))));
        let code = f.groups.get_by_id(&f.group_id).unwrap().find_code(&f.code).unwrap();
        assert_eq!(code.status, PromoCodeStatus::Open);
    }

    #[test]
    fn test_unknown_member_and_expired_window() {
        let mut f = fixture();
        let req = request(&f, "ghost@example.com");
        assert!(matches!(
            RedeemCode::execute(&mut f.groups, &f.members, &mut f.usage, &req, now()),
            Err(ConsoleError::NotFound { .. })
        ));

        let late = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
        let req = request(&f, "member1@example.com");
        assert!(matches!(
            RedeemCode::execute(&mut f.groups, &f.members, &mut f.usage, &req, late),
            Err(ConsoleError::Conflict(_))
        ));
    }

    #[test]
    fn test_team_limit_blocks_redemption() {
        let mut f = fixture();
        let mut limits = f.usage.limits();
        limits.max_data_gb = 750.1;
        f.usage.update_limits(limits);

        let req = request(&f, "member1@example.com");
        let result = RedeemCode::execute(&mut f.groups, &f.members, &mut f.usage, &req, now());
        assert!(matches!(result, Err(ConsoleError::Conflict(_))));
        assert_eq!(f.usage.usage().total_data_used_gb, 750.0);
    }
}
