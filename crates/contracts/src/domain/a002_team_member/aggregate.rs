use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateId, Entity};
use crate::shared::error::{ConsoleError, ConsoleResult};
use crate::shared::status::{StatusDisplay, StatusTone};

/// Идентификатор участника команды (`member12` у демо-данных, UUID у новых)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamMemberId(pub String);

impl TeamMemberId {
    pub fn new_v4() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl AggregateId for TeamMemberId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        String::from_string(s).map(TeamMemberId)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamMemberStatus {
    Active,
    Inactive,
    Pending,
}

impl TeamMemberStatus {
    pub fn all() -> Vec<TeamMemberStatus> {
        vec![
            TeamMemberStatus::Active,
            TeamMemberStatus::Inactive,
            TeamMemberStatus::Pending,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.label() == code)
    }
}

impl StatusDisplay for TeamMemberStatus {
    fn label(&self) -> &'static str {
        match self {
            TeamMemberStatus::Active => "Active",
            TeamMemberStatus::Inactive => "Inactive",
            TeamMemberStatus::Pending => "Pending",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            TeamMemberStatus::Active => StatusTone::Success,
            TeamMemberStatus::Inactive => StatusTone::Danger,
            TeamMemberStatus::Pending => StatusTone::Warning,
        }
    }
}

/// Участник команды, которому можно выдавать коды
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: TeamMemberId,
    pub email: String,
    pub referral_code: String,
    pub status: TeamMemberStatus,
}

impl Entity for TeamMember {
    type Id = TeamMemberId;

    fn id(&self) -> &TeamMemberId {
        &self.id
    }
}

/// Данные для добавления участника
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewTeamMember {
    pub email: String,
    pub referral_code: String,
    /// Не указан — участник создаётся в статусе Pending
    pub status: Option<TeamMemberStatus>,
}

impl NewTeamMember {
    pub fn new(email: impl Into<String>, referral_code: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            referral_code: referral_code.into(),
            status: None,
        }
    }

    /// Поля формы обязательны; пробелы по краям отбрасываются
    pub fn validate(&self) -> ConsoleResult<NewTeamMember> {
        let email = self.email.trim();
        let referral_code = self.referral_code.trim();
        if email.is_empty() || referral_code.is_empty() {
            return Err(ConsoleError::validation("Please fill in all required fields."));
        }
        Ok(NewTeamMember {
            email: email.to_string(),
            referral_code: referral_code.to_string(),
            status: self.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_trims() {
        let input = NewTeamMember::new("  a@b.com ", " REF1 ").validate().unwrap();
        assert_eq!(input.email, "a@b.com");
        assert_eq!(input.referral_code, "REF1");
    }

    #[test]
    fn test_validate_requires_fields() {
        assert!(NewTeamMember::new("a@b.com", "  ").validate().is_err());
        assert!(NewTeamMember::new("", "REF").validate().is_err());
    }

    #[test]
    fn test_status_tone() {
        assert_eq!(TeamMemberStatus::Pending.tone(), StatusTone::Warning);
        assert_eq!(TeamMemberStatus::from_code("Inactive"), Some(TeamMemberStatus::Inactive));
        assert!(TeamMemberId::from_string("").is_err());
    }
}
