use sqlx::PgPool;
use uuid::Uuid;

use crate::{pkg::internal::adaptors::skills::spec::SkillEntry, prelude::Result};

pub struct SkillSelector<'a> {
    pool: &'a PgPool,
}

impl<'a> SkillSelector<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        SkillSelector { pool }
    }

    pub async fn list(&self) -> Result<Vec<SkillEntry>> {
        let rows = sqlx::query_as::<_, SkillEntry>(
            "SELECT skill_id, name FROM skills ORDER BY name",
        )
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// Batch half of the two-step join: one query resolves every skill
    /// referenced by a page of jobs.
    pub async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<SkillEntry>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        let rows = sqlx::query_as::<_, SkillEntry>(
            "SELECT skill_id, name FROM skills WHERE skill_id = ANY($1)",
        )
        .bind(ids.to_vec())
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }
}
