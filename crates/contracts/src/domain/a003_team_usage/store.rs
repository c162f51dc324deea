use super::aggregate::{TeamLimits, TeamMemberUsage, TeamUsage, UsageCharge};
use crate::shared::error::{ConsoleError, ConsoleResult};
use crate::shared::list_view::{Searchable, SortValue, Sortable};
use crate::shared::money::format_usd;

/// Потребление и лимиты команды.
///
/// `update_usage`/`update_limits` заменяют запись целиком и не сверяют
/// потребление с лимитами; проверка есть только на пути погашения кода.
#[derive(Debug, Clone)]
pub struct TeamUsageStore {
    usage: TeamUsage,
    limits: TeamLimits,
    members: Vec<TeamMemberUsage>,
}

impl TeamUsageStore {
    pub fn new(usage: TeamUsage, limits: TeamLimits, members: Vec<TeamMemberUsage>) -> Self {
        Self {
            usage,
            limits,
            members,
        }
    }

    pub fn usage(&self) -> TeamUsage {
        self.usage
    }

    pub fn limits(&self) -> TeamLimits {
        self.limits
    }

    pub fn update_usage(&mut self, usage: TeamUsage) {
        log::debug!("team usage replaced: {:?}", usage);
        self.usage = usage;
    }

    pub fn update_limits(&mut self, limits: TeamLimits) {
        log::debug!("team limits replaced: {:?}", limits);
        self.limits = limits;
    }

    pub fn member_usage(&self) -> &[TeamMemberUsage] {
        &self.members
    }

    pub fn find_member_usage(&self, email: &str) -> Option<&TeamMemberUsage> {
        self.members
            .iter()
            .find(|m| m.email.eq_ignore_ascii_case(email.trim()))
    }

    /// Сброс лимита участника: запрошенная сумма приравнивается к погашенной
    pub fn reset_member_limit(&mut self, email: &str) -> ConsoleResult<()> {
        let member = self
            .members
            .iter_mut()
            .find(|m| m.email.eq_ignore_ascii_case(email.trim()))
            .ok_or_else(|| ConsoleError::not_found("member usage", email))?;
        member.requested_value = member.redeemed_value;
        log::debug!("member limit reset: {}", member.email);
        Ok(())
    }

    /// Проверка, что списание укладывается в лимиты команды и участника
    pub fn check_charge(&self, email: &str, charge: &UsageCharge) -> ConsoleResult<()> {
        if self.usage.total_data_used_gb + charge.data_gb > self.limits.max_data_gb {
            return Err(ConsoleError::conflict(
                "This redemption would exceed the team data limit.",
            ));
        }
        if self.usage.total_credits_used + charge.credits > self.limits.max_credits {
            return Err(ConsoleError::conflict(
                "This redemption would exceed the team credit limit.",
            ));
        }
        let requested = self
            .find_member_usage(email)
            .map(|m| m.requested_value)
            .unwrap_or(0.0);
        if requested + charge.value > self.limits.max_credit_per_user {
            return Err(ConsoleError::conflict(format!(
                "{} would exceed the per-user limit of {}.",
                email,
                format_usd(self.limits.max_credit_per_user)
            )));
        }
        Ok(())
    }

    /// Учёт погашения. Вызывается после `check_charge`.
    pub(crate) fn apply_charge(&mut self, email: &str, code: &str, charge: &UsageCharge) {
        self.usage.total_data_used_gb += charge.data_gb;
        self.usage.total_credits_used += charge.credits;

        let index = match self
            .members
            .iter()
            .position(|m| m.email.eq_ignore_ascii_case(email))
        {
            Some(index) => index,
            None => {
                self.members.push(TeamMemberUsage::new(email));
                self.members.len() - 1
            }
        };
        let member = &mut self.members[index];
        member.requested_codes.push(code.to_string());
        member.requested_value += charge.value;
        member.redeemed_value += charge.value;
    }
}

impl Searchable for TeamMemberUsage {
    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "email" => Some(self.email.clone()),
            "requested_codes" => Some(self.codes_label()),
            _ => None,
        }
    }
}

impl Sortable for TeamMemberUsage {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "requested_value" => SortValue::Number(self.requested_value),
            "redeemed_value" => SortValue::Number(self.redeemed_value),
            "requested_codes" => SortValue::Number(self.requested_codes.len() as f64),
            _ => SortValue::Text(self.email.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_team_usage::seed::seed_team_usage_store;

    #[test]
    fn test_update_replaces_wholesale() {
        let mut store = seed_team_usage_store();
        store.update_usage(TeamUsage {
            total_data_used_gb: 5000.0,
            total_credits_used: 0.0,
        });
        assert_eq!(store.usage().total_data_used_gb, 5000.0);

        let mut limits = store.limits();
        limits.max_credits = 1.0;
        store.update_limits(limits);
        assert_eq!(store.limits().max_credits, 1.0);
    }

    #[test]
    fn test_reset_member_limit() {
        let mut store = seed_team_usage_store();
        store.reset_member_limit("john@partner.com").unwrap();
        let john = store.find_member_usage("john@partner.com").unwrap();
        assert_eq!(john.requested_value, john.redeemed_value);
        assert!(store.reset_member_limit("nobody@x.com").is_err());
    }

    #[test]
    fn test_check_charge_limits() {
        let store = seed_team_usage_store();
        let small = UsageCharge {
            data_gb: 1.0,
            credits: 0.0,
            value: 10.0,
        };
        assert!(store.check_charge("john@partner.com", &small).is_ok());

        let too_much_data = UsageCharge {
            data_gb: 300.0,
            ..small
        };
        assert!(matches!(
            store.check_charge("john@partner.com", &too_much_data),
            Err(ConsoleError::Conflict(_))
        ));

        let too_much_value = UsageCharge {
            value: 900.0,
            ..small
        };
        assert!(store.check_charge("john@partner.com", &too_much_value).is_err());
        assert!(store.check_charge("new@partner.com", &too_much_value).is_ok());
    }

    #[test]
    fn test_apply_charge_creates_member_row() {
        let mut store = seed_team_usage_store();
        let charge = UsageCharge {
            data_gb: 0.5,
            credits: 0.0,
            value: 500.0,
        };
        store.apply_charge("new@partner.com", "TEST1234", &charge);
        let row = store.find_member_usage("new@partner.com").unwrap();
        assert_eq!(row.requested_codes, vec!["TEST1234".to_string()]);
        assert_eq!(row.redeemed_value, 500.0);
        assert_eq!(store.usage().total_data_used_gb, 750.5);
    }
}
