use sqlx::PgPool;
use uuid::Uuid;

use crate::{pkg::internal::adaptors::statistics::spec::StatisticEntry, prelude::Result};

pub struct StatisticSelector<'a> {
    pool: &'a PgPool,
}

impl<'a> StatisticSelector<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        StatisticSelector { pool }
    }

    pub async fn get_by_skill_id(&self, skill_id: Uuid) -> Result<Option<StatisticEntry>> {
        let row = sqlx::query_as::<_, StatisticEntry>(
            "SELECT skill_id, count, updated_at FROM statistics WHERE skill_id = $1",
        )
        .bind(skill_id)
        .fetch_optional(self.pool)
        .await?;
        Ok(row)
    }
}
