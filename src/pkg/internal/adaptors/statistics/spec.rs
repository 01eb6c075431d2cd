use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use uuid::Uuid;

/// Per-skill usage counter, keyed by the skill reference.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct StatisticEntry {
    pub skill_id: Uuid,
    pub count: i64,
    pub updated_at: DateTime<Utc>,
}
