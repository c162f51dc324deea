use contracts::domain::a001_promo_group::seed::seed_promo_groups;
use contracts::domain::a001_promo_group::PromoGroupStore;
use contracts::domain::a002_team_member::seed::seed_team_members;
use contracts::domain::a002_team_member::TeamMemberStore;
use contracts::domain::a003_team_usage::seed::seed_team_usage_store;
use contracts::domain::a003_team_usage::TeamUsageStore;
use contracts::domain::a004_email_controls::{seed_email_controls, EmailControls};
use contracts::projections::p900_transactions::{seed_transactions, TransactionDto};
use contracts::shared::config::ConsoleConfig;
use contracts::system::account::AccountInfo;
use leptos::prelude::*;
use std::collections::HashMap;

/// Общее состояние приложения.
///
/// Хранилища создаются один раз при старте, поэтому правки переживают
/// переходы между страницами в пределах сессии.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub config: StoredValue<ConsoleConfig>,
    pub promo_groups: RwSignal<PromoGroupStore>,
    pub team_members: RwSignal<TeamMemberStore>,
    pub team_usage: RwSignal<TeamUsageStore>,
    pub email_controls: RwSignal<EmailControls>,
    pub transactions: RwSignal<Vec<TransactionDto>>,
    pub account: RwSignal<AccountInfo>,
    pub left_open: RwSignal<bool>,
    pub form_states: RwSignal<HashMap<String, serde_json::Value>>,
}

impl AppGlobalContext {
    pub fn new(config: ConsoleConfig) -> Self {
        let promo_groups = PromoGroupStore::new(seed_promo_groups(), config.codes.clone());
        Self {
            config: StoredValue::new(config),
            promo_groups: RwSignal::new(promo_groups),
            team_members: RwSignal::new(TeamMemberStore::new(seed_team_members())),
            team_usage: RwSignal::new(seed_team_usage_store()),
            email_controls: RwSignal::new(seed_email_controls()),
            transactions: RwSignal::new(seed_transactions()),
            account: RwSignal::new(AccountInfo::default()),
            left_open: RwSignal::new(true),
            form_states: RwSignal::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> ConsoleConfig {
        self.config.get_value()
    }

    pub fn get_form_state(&self, form_key: &str) -> Option<serde_json::Value> {
        self.form_states
            .with_untracked(|states| states.get(form_key).cloned())
    }

    pub fn set_form_state(&self, form_key: String, state: serde_json::Value) {
        self.form_states.update(|states| {
            states.insert(form_key, state);
        });
    }

    pub fn clear_form_state(&self, form_key: &str) {
        self.form_states.update(|states| {
            states.remove(form_key);
        });
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

/// Доступ к контексту из любого компонента
pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
