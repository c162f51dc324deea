use serde::{Deserialize, Serialize};

use crate::domain::a001_promo_group::PromoGroupId;

/// Запрос на погашение кода участником команды
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedeemCodeRequest {
    pub group_id: PromoGroupId,
    pub code: String,
    pub member_email: String,
}
