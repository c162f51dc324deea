//! ViewModel формы группы промокодов (создание и редактирование)

use crate::shared::date_utils::{date_input_value, parse_date_input};
use contracts::domain::a001_promo_group::{PromoGroupDraft, PromoGroupStatus, RewardKind};
use contracts::shared::status::StatusDisplay;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct PromoGroupFormVm {
    pub name: RwSignal<String>,
    pub description: RwSignal<String>,
    pub quantity: RwSignal<String>,
    pub start_date: RwSignal<String>,
    pub end_date: RwSignal<String>,
    /// Код `RewardKind`
    pub reward_kind: RwSignal<String>,
    pub reward_amount: RwSignal<String>,
    /// Подпись `PromoGroupStatus`
    pub status: RwSignal<String>,
}

impl PromoGroupFormVm {
    pub fn from_draft(draft: &PromoGroupDraft) -> Self {
        let number = |value: u32| {
            if value == 0 {
                String::new()
            } else {
                value.to_string()
            }
        };
        Self {
            name: RwSignal::new(draft.name.clone()),
            description: RwSignal::new(draft.description.clone()),
            quantity: RwSignal::new(number(draft.quantity)),
            start_date: RwSignal::new(date_input_value(draft.start_date)),
            end_date: RwSignal::new(date_input_value(draft.end_date)),
            reward_kind: RwSignal::new(draft.reward_kind.code().to_string()),
            reward_amount: RwSignal::new(number(draft.reward_amount)),
            status: RwSignal::new(draft.status.label().to_string()),
        }
    }

    /// Текущее состояние полей. Нечисловой ввод считается незаполненным.
    pub fn to_draft(&self) -> PromoGroupDraft {
        PromoGroupDraft {
            name: self.name.get(),
            description: self.description.get(),
            quantity: self.quantity.get().trim().parse().unwrap_or(0),
            start_date: parse_date_input(&self.start_date.get()),
            end_date: parse_date_input(&self.end_date.get()),
            reward_kind: RewardKind::from_code(&self.reward_kind.get())
                .unwrap_or(RewardKind::EsimData),
            reward_amount: self.reward_amount.get().trim().parse().unwrap_or(0),
            status: PromoGroupStatus::from_code(&self.status.get())
                .unwrap_or(PromoGroupStatus::Active),
        }
    }

    pub fn amount_label(&self) -> Signal<&'static str> {
        let kind = self.reward_kind;
        Signal::derive(move || match RewardKind::from_code(&kind.get()) {
            Some(RewardKind::Credits) => "Reward Amount (credits)",
            _ => "Reward Amount (MB)",
        })
    }
}
