use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{AggregateId, Entity};
use crate::shared::error::{ConsoleError, ConsoleResult};
use crate::shared::status::{StatusDisplay, StatusTone};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор группы промокодов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PromoGroupId(pub Uuid);

impl PromoGroupId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for PromoGroupId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::from_string(s).map(PromoGroupId)
    }
}

// ============================================================================
// Enums
// ============================================================================

/// Статус жизненного цикла группы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PromoGroupStatus {
    Active,
    Suspended,
    Expired,
    Distributed,
    Inactive,
}

impl PromoGroupStatus {
    pub fn all() -> Vec<PromoGroupStatus> {
        vec![
            PromoGroupStatus::Active,
            PromoGroupStatus::Suspended,
            PromoGroupStatus::Expired,
            PromoGroupStatus::Distributed,
            PromoGroupStatus::Inactive,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.label() == code)
    }
}

impl StatusDisplay for PromoGroupStatus {
    fn label(&self) -> &'static str {
        match self {
            PromoGroupStatus::Active => "Active",
            PromoGroupStatus::Suspended => "Suspended",
            PromoGroupStatus::Expired => "Expired",
            PromoGroupStatus::Distributed => "Distributed",
            PromoGroupStatus::Inactive => "Inactive",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            PromoGroupStatus::Active => StatusTone::Success,
            PromoGroupStatus::Suspended => StatusTone::Danger,
            PromoGroupStatus::Expired => StatusTone::Warning,
            PromoGroupStatus::Distributed => StatusTone::Info,
            PromoGroupStatus::Inactive => StatusTone::Neutral,
        }
    }
}

/// Статус отдельного кода
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PromoCodeStatus {
    Open,
    Used,
    Distributed,
    Suspended,
}

impl PromoCodeStatus {
    pub fn all() -> Vec<PromoCodeStatus> {
        vec![
            PromoCodeStatus::Open,
            PromoCodeStatus::Used,
            PromoCodeStatus::Distributed,
            PromoCodeStatus::Suspended,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.label() == code)
    }

    /// Статусы для ручного выбора; Used ставит только погашение
    pub fn manual_choices() -> Vec<PromoCodeStatus> {
        Self::all()
            .into_iter()
            .filter(|s| *s != PromoCodeStatus::Used)
            .collect()
    }

    /// Код можно погасить только из этих статусов
    pub fn is_redeemable(&self) -> bool {
        matches!(self, PromoCodeStatus::Open | PromoCodeStatus::Distributed)
    }
}

impl StatusDisplay for PromoCodeStatus {
    fn label(&self) -> &'static str {
        match self {
            PromoCodeStatus::Open => "Open",
            PromoCodeStatus::Used => "Used",
            PromoCodeStatus::Distributed => "Distributed",
            PromoCodeStatus::Suspended => "Suspended",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            PromoCodeStatus::Open => StatusTone::Success,
            PromoCodeStatus::Used => StatusTone::Warning,
            PromoCodeStatus::Distributed => StatusTone::Info,
            PromoCodeStatus::Suspended => StatusTone::Danger,
        }
    }
}

/// Вид вознаграждения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RewardKind {
    #[serde(rename = "eSIM Data")]
    EsimData,
    #[serde(rename = "Credits")]
    Credits,
}

impl RewardKind {
    pub fn code(&self) -> &'static str {
        match self {
            RewardKind::EsimData => "esim-data",
            RewardKind::Credits => "credits",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RewardKind::EsimData => "eSIM Data",
            RewardKind::Credits => "Credits",
        }
    }

    pub fn all() -> Vec<RewardKind> {
        vec![RewardKind::EsimData, RewardKind::Credits]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "esim-data" => Some(RewardKind::EsimData),
            "credits" => Some(RewardKind::Credits),
            _ => None,
        }
    }
}

// ============================================================================
// Individual code
// ============================================================================

/// Один погашаемый код внутри группы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndividualPromoCode {
    pub code: String,
    pub created_time: DateTime<Utc>,
    /// Заполнено тогда и только тогда, когда статус `Used`
    pub redeem_time: Option<DateTime<Utc>>,
    pub status: PromoCodeStatus,
    pub user_id: Option<String>,
    pub user_email: Option<String>,
}

impl IndividualPromoCode {
    pub fn open(code: String, created_time: DateTime<Utc>) -> Self {
        Self {
            code,
            created_time,
            redeem_time: None,
            status: PromoCodeStatus::Open,
            user_id: None,
            user_email: None,
        }
    }

    /// Смена статуса с сохранением связи `Used` ⇔ `redeem_time`
    pub fn set_status(&mut self, status: PromoCodeStatus, now: DateTime<Utc>) {
        self.status = status;
        if status == PromoCodeStatus::Used {
            self.redeem_time.get_or_insert(now);
        } else {
            self.redeem_time = None;
        }
    }

    pub fn is_used(&self) -> bool {
        self.status == PromoCodeStatus::Used
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Группа промокодов (партия кодов одной кампании)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoGroup {
    pub id: PromoGroupId,
    pub name: String,
    pub description: String,
    /// Целевое количество кодов
    pub quantity: u32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub reward_kind: RewardKind,
    pub reward_amount: u32,
    pub status: PromoGroupStatus,
    #[serde(default)]
    pub promo_codes: Vec<IndividualPromoCode>,
}

impl Entity for PromoGroup {
    type Id = PromoGroupId;

    fn id(&self) -> &PromoGroupId {
        &self.id
    }
}

impl PromoGroup {
    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    pub fn find_code(&self, code: &str) -> Option<&IndividualPromoCode> {
        self.promo_codes.iter().find(|c| c.code == code)
    }

    pub fn find_code_mut(&mut self, code: &str) -> Option<&mut IndividualPromoCode> {
        self.promo_codes.iter_mut().find(|c| c.code == code)
    }

    pub fn count_codes(&self, status: PromoCodeStatus) -> usize {
        self.promo_codes.iter().filter(|c| c.status == status).count()
    }

    /// Активная группа, срок действия которой истёк
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.status == PromoGroupStatus::Active && self.end_date < now
    }

    pub fn is_within_window(&self, now: DateTime<Utc>) -> bool {
        self.start_date <= now && now <= self.end_date
    }

    /// Полная замена полей из формы редактирования. ID и коды сохраняются.
    pub fn with_draft(&self, draft: &PromoGroupDraft) -> ConsoleResult<PromoGroup> {
        let input = draft.validate()?;
        Ok(PromoGroup {
            id: self.id,
            name: input.name,
            description: input.description,
            quantity: input.quantity,
            start_date: input.start_date,
            end_date: input.end_date,
            reward_kind: input.reward_kind,
            reward_amount: input.reward_amount,
            status: draft.status,
            promo_codes: self.promo_codes.clone(),
        })
    }
}

// ============================================================================
// Form input
// ============================================================================

/// Проверенные данные для создания группы
#[derive(Debug, Clone, PartialEq)]
pub struct NewPromoGroup {
    pub name: String,
    pub description: String,
    pub quantity: u32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub reward_kind: RewardKind,
    pub reward_amount: u32,
}

/// Состояние формы создания/редактирования группы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromoGroupDraft {
    pub name: String,
    pub description: String,
    /// 0 означает «не заполнено»
    pub quantity: u32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub reward_kind: RewardKind,
    pub reward_amount: u32,
    /// Используется только формой редактирования
    pub status: PromoGroupStatus,
}

impl Default for PromoGroupDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            quantity: 0,
            start_date: None,
            end_date: None,
            reward_kind: RewardKind::EsimData,
            reward_amount: 0,
            status: PromoGroupStatus::Active,
        }
    }
}

impl PromoGroupDraft {
    pub fn from_group(group: &PromoGroup) -> Self {
        Self {
            name: group.name.clone(),
            description: group.description.clone(),
            quantity: group.quantity,
            start_date: Some(group.start_date.date_naive()),
            end_date: Some(group.end_date.date_naive()),
            reward_kind: group.reward_kind,
            reward_amount: group.reward_amount,
            status: group.status,
        }
    }

    /// Обязательны имя, количество, даты и размер вознаграждения;
    /// дата окончания не раньше даты начала. Окно действия: с начала первого
    /// дня до 23:59:59 последнего (UTC).
    pub fn validate(&self) -> ConsoleResult<NewPromoGroup> {
        let name = self.name.trim();
        let (Some(start), Some(end)) = (self.start_date, self.end_date) else {
            return Err(ConsoleError::validation("Please fill in all required fields."));
        };
        if name.is_empty() || self.quantity == 0 || self.reward_amount == 0 {
            return Err(ConsoleError::validation("Please fill in all required fields."));
        }
        if end < start {
            return Err(ConsoleError::validation(
                "End date cannot be before the start date.",
            ));
        }

        let day_end = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN);
        Ok(NewPromoGroup {
            name: name.to_string(),
            description: self.description.trim().to_string(),
            quantity: self.quantity,
            start_date: start.and_time(NaiveTime::MIN).and_utc(),
            end_date: end.and_time(day_end).and_utc(),
            reward_kind: self.reward_kind,
            reward_amount: self.reward_amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn draft() -> PromoGroupDraft {
        PromoGroupDraft {
            name: "Test Group".into(),
            quantity: 3,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 31),
            reward_amount: 500,
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_window() {
        let input = draft().validate().unwrap();
        assert_eq!(input.start_date, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(input.end_date, Utc.with_ymd_and_hms(2025, 1, 31, 23, 59, 59).unwrap());
    }

    #[test]
    fn test_validate_required_fields() {
        for broken in [
            PromoGroupDraft { name: "  ".into(), ..draft() },
            PromoGroupDraft { quantity: 0, ..draft() },
            PromoGroupDraft { start_date: None, ..draft() },
            PromoGroupDraft { end_date: None, ..draft() },
            PromoGroupDraft { reward_amount: 0, ..draft() },
        ] {
            assert_eq!(
                broken.validate(),
                Err(ConsoleError::validation("Please fill in all required fields."))
            );
        }
    }

    #[test]
    fn test_validate_end_before_start() {
        let broken = PromoGroupDraft {
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31),
            ..draft()
        };
        assert!(matches!(broken.validate(), Err(ConsoleError::Validation(_))));
    }

    #[test]
    fn test_used_sets_and_clears_redeem_time() {
        let now = Utc.with_ymd_and_hms(2025, 1, 10, 12, 0, 0).unwrap();
        let mut code = IndividualPromoCode::open("TEST1A2B".into(), now);

        code.set_status(PromoCodeStatus::Used, now);
        assert_eq!(code.redeem_time, Some(now));

        code.set_status(PromoCodeStatus::Open, now);
        assert_eq!(code.redeem_time, None);
        assert!(!code.is_used());
    }

    #[test]
    fn test_json_shape() {
        let now = Utc.with_ymd_and_hms(2025, 1, 10, 12, 0, 0).unwrap();
        let code = IndividualPromoCode::open("TEST1A2B".into(), now);
        let json = serde_json::to_value(&code).unwrap();
        assert_eq!(json["code"], "TEST1A2B");
        assert_eq!(json["status"], "Open");
        assert!(json["redeemTime"].is_null());
        assert_eq!(serde_json::to_value(RewardKind::EsimData).unwrap(), "eSIM Data");

        let restored: PromoGroupDraft =
            serde_json::from_value(serde_json::to_value(draft()).unwrap()).unwrap();
        assert_eq!(restored, draft());
    }

    #[test]
    fn test_group_id_route_param() {
        let id = PromoGroupId::new_v4();
        assert_eq!(PromoGroupId::from_string(&id.as_string()), Ok(id));
        assert!(PromoGroupId::from_string("ESIM-1234").is_err());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(PromoGroupStatus::Expired.badge_class(), "badge badge--warning");
        assert_eq!(PromoCodeStatus::from_code("Used"), Some(PromoCodeStatus::Used));
        assert_eq!(PromoGroupStatus::from_code("Unknown"), None);
        assert!(PromoCodeStatus::Distributed.is_redeemable());
        assert!(!PromoCodeStatus::Suspended.is_redeemable());
        assert!(!PromoCodeStatus::manual_choices().contains(&PromoCodeStatus::Used));
        assert_eq!(PromoCodeStatus::manual_choices().len(), 3);
    }
}
