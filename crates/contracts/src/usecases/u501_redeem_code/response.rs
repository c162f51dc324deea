use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a003_team_usage::UsageCharge;

/// Итог успешного погашения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedemptionReceipt {
    pub code: String,
    pub group_name: String,
    pub member_email: String,
    pub redeemed_at: DateTime<Utc>,
    pub charge: UsageCharge,
}
