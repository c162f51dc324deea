use chrono::{DateTime, Utc};

use super::aggregate::{
    IndividualPromoCode, NewPromoGroup, PromoCodeStatus, PromoGroup, PromoGroupId,
    PromoGroupStatus,
};
use super::code_generator::generate_codes;
use crate::domain::common::{AggregateId, MemoryStore};
use crate::shared::config::CodesConfig;
use crate::shared::error::{ConsoleError, ConsoleResult};
use crate::shared::list_view::{Searchable, SortValue, Sortable};
use crate::shared::status::StatusDisplay;

/// Хранилище групп промокодов
#[derive(Debug, Clone)]
pub struct PromoGroupStore {
    groups: MemoryStore<PromoGroup>,
    codes: CodesConfig,
}

impl PromoGroupStore {
    pub fn new(groups: Vec<PromoGroup>, codes: CodesConfig) -> Self {
        Self {
            groups: MemoryStore::from_items(groups),
            codes,
        }
    }

    pub fn list(&self) -> &[PromoGroup] {
        self.groups.list()
    }

    pub fn get_by_id(&self, id: &PromoGroupId) -> Option<&PromoGroup> {
        self.groups.get_by_id(id)
    }

    /// Поиск по строковому ID из маршрута; некорректный UUID трактуется как отсутствие
    pub fn get_by_str(&self, id: &str) -> Option<&PromoGroup> {
        PromoGroupId::from_string(id)
            .ok()
            .and_then(|id| self.groups.get_by_id(&id))
    }

    /// Новая группа со статусом Active и сразу сгенерированными кодами
    pub fn create(&mut self, input: NewPromoGroup, now: DateTime<Utc>) -> PromoGroup {
        let promo_codes = generate_codes(&input.name, input.quantity as usize, &self.codes, now);
        let group = PromoGroup {
            id: PromoGroupId::new_v4(),
            name: input.name,
            description: input.description,
            quantity: input.quantity,
            start_date: input.start_date,
            end_date: input.end_date,
            reward_kind: input.reward_kind,
            reward_amount: input.reward_amount,
            status: PromoGroupStatus::Active,
            promo_codes,
        };
        log::debug!(
            "promo group created: id={} name='{}' codes={}",
            group.to_string_id(),
            group.name,
            group.promo_codes.len()
        );
        self.groups.insert(group.clone());
        group
    }

    /// Полная замена записи с тем же ID
    pub fn update(&mut self, group: PromoGroup) -> ConsoleResult<()> {
        let id = group.to_string_id();
        if self.groups.replace(group) {
            log::debug!("promo group updated: id={}", id);
            Ok(())
        } else {
            Err(ConsoleError::not_found("group", id))
        }
    }

    pub fn delete(&mut self, id: &PromoGroupId) -> Option<PromoGroup> {
        let removed = self.groups.remove(id);
        if removed.is_some() {
            log::debug!("promo group deleted: id={}", id.as_string());
        }
        removed
    }

    /// Ручная смена статуса кода.
    ///
    /// В Used код переводит только погашение, и погашенный код уже не меняется:
    /// его списание учтено в расходе команды.
    pub fn set_code_status(
        &mut self,
        group_id: &PromoGroupId,
        code: &str,
        status: PromoCodeStatus,
        now: DateTime<Utc>,
    ) -> ConsoleResult<()> {
        let group = self
            .groups
            .get_mut(group_id)
            .ok_or_else(|| ConsoleError::not_found("group", group_id.as_string()))?;
        let entry = group
            .find_code_mut(code)
            .ok_or_else(|| ConsoleError::not_found("code", code))?;
        if status == PromoCodeStatus::Used {
            log::warn!("manual Used rejected for code {}", code);
            return Err(ConsoleError::conflict(
                "Codes become Used only through redemption.",
            ));
        }
        if entry.is_used() {
            log::warn!("status change rejected for redeemed code {}", code);
            return Err(ConsoleError::conflict(format!(
                "Code {} has already been redeemed.",
                code
            )));
        }
        entry.set_status(status, now);
        log::debug!("code {} status -> {:?}", code, status);
        Ok(())
    }

    /// Изменяемый доступ для сценария погашения
    pub(crate) fn get_mut(&mut self, id: &PromoGroupId) -> Option<&mut PromoGroup> {
        self.groups.get_mut(id)
    }

    pub fn total_codes(&self) -> usize {
        self.groups.iter().map(|g| g.promo_codes.len()).sum()
    }

    /// Active-группы с истёкшим сроком переводятся в Expired. Возвращает число изменённых.
    pub fn expire_overdue(&mut self, now: DateTime<Utc>) -> usize {
        let ids: Vec<PromoGroupId> = self
            .groups
            .iter()
            .filter(|g| g.is_overdue(now))
            .map(|g| g.id)
            .collect();
        for id in &ids {
            if let Some(group) = self.groups.get_mut(id) {
                group.status = PromoGroupStatus::Expired;
                log::debug!("promo group expired: id={}", id.as_string());
            }
        }
        ids.len()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Searchable for PromoGroup {
    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "name" => Some(self.name.clone()),
            "description" => Some(self.description.clone()),
            _ => None,
        }
    }
}

impl Sortable for PromoGroup {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "quantity" => SortValue::Number(self.quantity as f64),
            "reward_amount" => SortValue::Number(self.reward_amount as f64),
            "start_date" => SortValue::Number(self.start_date.timestamp() as f64),
            "end_date" => SortValue::Number(self.end_date.timestamp() as f64),
            "status" => SortValue::Text(self.status.label().to_string()),
            "reward_kind" => SortValue::Text(self.reward_kind.display_name().to_string()),
            _ => SortValue::Text(self.name.clone()),
        }
    }
}

impl Searchable for IndividualPromoCode {
    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "code" => Some(self.code.clone()),
            "user_email" => self.user_email.clone(),
            "status" => Some(self.status.label().to_string()),
            _ => None,
        }
    }
}

impl Sortable for IndividualPromoCode {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "created_time" => SortValue::Number(self.created_time.timestamp() as f64),
            "redeem_time" => SortValue::Number(
                self.redeem_time.map(|t| t.timestamp() as f64).unwrap_or(0.0),
            ),
            "status" => SortValue::Text(self.status.label().to_string()),
            "user_email" => SortValue::Text(self.user_email.clone().unwrap_or_default()),
            _ => SortValue::Text(self.code.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_promo_group::aggregate::{PromoGroupDraft, RewardKind};
    use crate::shared::config::ConsoleConfig;
    use chrono::{NaiveDate, TimeZone};

    fn empty_store() -> PromoGroupStore {
        PromoGroupStore::new(Vec::new(), ConsoleConfig::default().codes)
    }

    fn test_group_input() -> NewPromoGroup {
        PromoGroupDraft {
            name: "Test Group".into(),
            quantity: 3,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 31),
            reward_amount: 500,
            ..Default::default()
        }
        .validate()
        .unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_create_test_group() {
        let mut store = empty_store();
        let group = store.create(test_group_input(), now());

        assert_eq!(group.status, PromoGroupStatus::Active);
        assert_eq!(group.reward_kind, RewardKind::EsimData);
        assert_eq!(group.reward_amount.to_string(), "500");
        assert_eq!(group.promo_codes.len(), 3);
        assert!(group.promo_codes.iter().all(|c| {
            c.status == PromoCodeStatus::Open
                && c.redeem_time.is_none()
                && c.user_id.is_none()
                && c.user_email.is_none()
                && !c.code.is_empty()
        }));
        assert_eq!(store.list().len(), 1);
        assert_eq!(store.total_codes(), 3);
    }

    #[test]
    fn test_get_by_str() {
        let mut store = empty_store();
        let group = store.create(test_group_input(), now());
        assert!(store.get_by_str(&group.to_string_id()).is_some());
        assert!(store.get_by_str("not-a-uuid").is_none());
    }

    #[test]
    fn test_update_replaces_fields() {
        let mut store = empty_store();
        let group = store.create(test_group_input(), now());

        let mut changed = group.clone();
        changed.name = "Renamed".into();
        changed.status = PromoGroupStatus::Suspended;
        changed.promo_codes.clear();
        store.update(changed).unwrap();

        let stored = store.get_by_id(&group.id).unwrap();
        assert_eq!(stored.id, group.id);
        assert_eq!(stored.name, "Renamed");
        assert_eq!(stored.status, PromoGroupStatus::Suspended);
        assert!(stored.promo_codes.is_empty());
    }

    #[test]
    fn test_update_unknown_is_not_found() {
        let mut store = empty_store();
        let mut other = empty_store().create(test_group_input(), now());
        other.name = "Ghost".into();
        assert!(matches!(
            store.update(other),
            Err(ConsoleError::NotFound { entity: "group", .. })
        ));
    }

    #[test]
    fn test_delete() {
        let mut store = empty_store();
        let group = store.create(test_group_input(), now());
        assert!(store.delete(&group.id).is_some());
        assert!(store.get_by_id(&group.id).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_code_status() {
        let mut store = empty_store();
        let group = store.create(test_group_input(), now());
        let code = group.promo_codes[0].code.clone();

        store
            .set_code_status(&group.id, &code, PromoCodeStatus::Suspended, now())
            .unwrap();
        let stored = store.get_by_id(&group.id).unwrap().find_code(&code).unwrap();
        assert_eq!(stored.status, PromoCodeStatus::Suspended);
        assert_eq!(stored.redeem_time, None);

        store
            .set_code_status(&group.id, &code, PromoCodeStatus::Distributed, now())
            .unwrap();
        assert!(store
            .set_code_status(&group.id, "MISSING", PromoCodeStatus::Open, now())
            .is_err());
    }

    #[test]
    fn test_manual_used_is_conflict() {
        let mut store = empty_store();
        let group = store.create(test_group_input(), now());
        let code = group.promo_codes[0].code.clone();

        assert!(matches!(
            store.set_code_status(&group.id, &code, PromoCodeStatus::Used, now()),
            Err(ConsoleError::Conflict(_))
        ));
        let stored = store.get_by_id(&group.id).unwrap().find_code(&code).unwrap();
        assert_eq!(stored.status, PromoCodeStatus::Open);
        assert_eq!(stored.redeem_time, None);
    }

    #[test]
    fn test_redeemed_code_keeps_status() {
        let mut store = empty_store();
        let group = store.create(test_group_input(), now());
        let code = group.promo_codes[0].code.clone();
        store
            .get_mut(&group.id)
            .and_then(|g| g.find_code_mut(&code))
            .unwrap()
            .set_status(PromoCodeStatus::Used, now());

        assert!(matches!(
            store.set_code_status(&group.id, &code, PromoCodeStatus::Open, now()),
            Err(ConsoleError::Conflict(_))
        ));
        let stored = store.get_by_id(&group.id).unwrap().find_code(&code).unwrap();
        assert_eq!(stored.status, PromoCodeStatus::Used);
        assert_eq!(stored.redeem_time, Some(now()));
    }

    #[test]
    fn test_expire_overdue() {
        let mut store = empty_store();
        let group = store.create(test_group_input(), now());

        assert_eq!(store.expire_overdue(now()), 0);
        let after_end = Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap();
        assert_eq!(store.expire_overdue(after_end), 1);
        assert_eq!(
            store.get_by_id(&group.id).unwrap().status,
            PromoGroupStatus::Expired
        );
        assert_eq!(store.expire_overdue(after_end), 0);
    }

    #[test]
    fn test_search_and_sort_groups() {
        use crate::shared::list_view::{filtered_sorted, SortState, TextFilter};

        let mut store = empty_store();
        store.create(test_group_input(), now());
        let mut other = test_group_input();
        other.name = "alpha launch".to_string();
        other.description = "Partner campaign".to_string();
        other.quantity = 1;
        store.create(other, now());

        let filters = [TextFilter::new(&["name", "description"], "PARTNER")];
        let found = filtered_sorted(store.list(), &filters, &SortState::none());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "alpha launch");

        let sort = SortState::none().toggled("name");
        let sorted = filtered_sorted(store.list(), &[], &sort);
        assert_eq!(sorted[0].name, "alpha launch");
        assert_eq!(sorted[1].name, "Test Group");

        let sort = SortState::none().toggled("quantity");
        let sorted = filtered_sorted(store.list(), &[], &sort);
        assert_eq!(sorted[0].quantity, 1);
    }
}
