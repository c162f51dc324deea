use super::aggregate::{NewTeamMember, TeamMember, TeamMemberId, TeamMemberStatus};
use crate::domain::common::{AggregateId, MemoryStore};
use crate::shared::error::{ConsoleError, ConsoleResult};
use crate::shared::list_view::{Searchable, SortValue, Sortable};
use crate::shared::status::StatusDisplay;

/// Хранилище участников команды. Уникальность email не проверяется.
#[derive(Debug, Clone, Default)]
pub struct TeamMemberStore {
    members: MemoryStore<TeamMember>,
}

impl TeamMemberStore {
    pub fn new(members: Vec<TeamMember>) -> Self {
        Self {
            members: MemoryStore::from_items(members),
        }
    }

    pub fn list(&self) -> &[TeamMember] {
        self.members.list()
    }

    pub fn get_by_id(&self, id: &TeamMemberId) -> Option<&TeamMember> {
        self.members.get_by_id(id)
    }

    pub fn find_by_email(&self, email: &str) -> Option<&TeamMember> {
        let email = email.trim();
        self.members
            .iter()
            .find(|m| m.email.eq_ignore_ascii_case(email))
    }

    pub fn create(&mut self, input: NewTeamMember) -> TeamMember {
        let member = TeamMember {
            id: TeamMemberId::new_v4(),
            email: input.email,
            referral_code: input.referral_code,
            status: input.status.unwrap_or(TeamMemberStatus::Pending),
        };
        log::debug!("team member created: id={} email={}", member.id.0, member.email);
        self.members.insert(member.clone());
        member
    }

    /// Добавление из формы: email не должен повторяться
    pub fn create_unique(&mut self, input: NewTeamMember) -> ConsoleResult<TeamMember> {
        let input = input.validate()?;
        if self.find_by_email(&input.email).is_some() {
            log::warn!("team member rejected, duplicate email: {}", input.email);
            return Err(ConsoleError::validation(format!(
                "A team member with email {} already exists.",
                input.email
            )));
        }
        Ok(self.create(input))
    }

    pub fn update(&mut self, member: TeamMember) -> ConsoleResult<()> {
        let id = member.id.as_string();
        if self.members.replace(member) {
            log::debug!("team member updated: id={}", id);
            Ok(())
        } else {
            Err(ConsoleError::not_found("team member", id))
        }
    }

    pub fn delete(&mut self, id: &TeamMemberId) -> Option<TeamMember> {
        let removed = self.members.remove(id);
        if let Some(member) = &removed {
            log::debug!("team member deleted: id={} email={}", id.0, member.email);
        }
        removed
    }

    pub fn count_by_status(&self, status: TeamMemberStatus) -> usize {
        self.members.iter().filter(|m| m.status == status).count()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Searchable for TeamMember {
    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "email" => Some(self.email.clone()),
            "referral_code" => Some(self.referral_code.clone()),
            "status" => Some(self.status.label().to_string()),
            _ => None,
        }
    }
}

impl Sortable for TeamMember {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "referral_code" => SortValue::Text(self.referral_code.clone()),
            "status" => SortValue::Text(self.status.label().to_string()),
            _ => SortValue::Text(self.email.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_defaults_to_pending() {
        let mut store = TeamMemberStore::default();
        let member = store.create(NewTeamMember::new("new@example.com", "REF_NEW"));
        assert_eq!(member.status, TeamMemberStatus::Pending);
        assert_eq!(store.get_by_id(&member.id), Some(&member));
    }

    #[test]
    fn test_create_with_status() {
        let mut store = TeamMemberStore::default();
        let member = store.create(NewTeamMember {
            status: Some(TeamMemberStatus::Active),
            ..NewTeamMember::new("a@example.com", "REF_A")
        });
        assert_eq!(member.status, TeamMemberStatus::Active);
        assert_eq!(store.count_by_status(TeamMemberStatus::Active), 1);
    }

    #[test]
    fn test_store_allows_duplicate_emails() {
        let mut store = TeamMemberStore::default();
        store.create(NewTeamMember::new("dup@example.com", "R1"));
        store.create(NewTeamMember::new("dup@example.com", "R2"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_form_rejects_duplicate_email() {
        let mut store = TeamMemberStore::default();
        store.create(NewTeamMember::new("dup@example.com", "R1"));
        let result = store.create_unique(NewTeamMember::new(" DUP@example.com ", "R2"));
        assert!(matches!(result, Err(ConsoleError::Validation(_))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_and_delete() {
        let mut store = TeamMemberStore::default();
        let mut member = store.create(NewTeamMember::new("a@example.com", "REF_A"));
        member.status = TeamMemberStatus::Inactive;
        store.update(member.clone()).unwrap();
        assert_eq!(
            store.get_by_id(&member.id).map(|m| m.status),
            Some(TeamMemberStatus::Inactive)
        );

        assert!(store.delete(&member.id).is_some());
        assert!(store.get_by_id(&member.id).is_none());
        assert!(store.update(member).is_err());
    }
}
