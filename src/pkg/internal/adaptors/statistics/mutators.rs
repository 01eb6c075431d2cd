use sqlx::PgPool;
use uuid::Uuid;

use crate::{pkg::internal::adaptors::statistics::spec::StatisticEntry, prelude::Result};

pub struct StatisticMutator<'a> {
    pool: &'a PgPool,
}

impl<'a> StatisticMutator<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        StatisticMutator { pool }
    }

    /// Bumps the usage counter for each referenced skill; missing
    /// counters start at one. Returns the counters as written.
    pub async fn add_skills(&self, skills: &[Uuid]) -> Result<Vec<StatisticEntry>> {
        let mut counters = Vec::with_capacity(skills.len());
        for skill_id in skills {
            let counter = sqlx::query_as::<_, StatisticEntry>(
                r#"
                INSERT INTO statistics (skill_id, count)
                VALUES ($1, 1)
                ON CONFLICT (skill_id) DO UPDATE
                SET count = statistics.count + 1, updated_at = now()
                RETURNING skill_id, count, updated_at
                "#,
            )
            .bind(skill_id)
            .fetch_one(self.pool)
            .await?;
            counters.push(counter);
        }
        Ok(counters)
    }

    /// Decrements the counter for each referenced skill and drops any
    /// counter that reaches zero. Returns how many counters were touched.
    pub async fn remove_skills(&self, skills: &[Uuid]) -> Result<u64> {
        let mut touched = 0;
        for skill_id in skills {
            let result = sqlx::query(
                "UPDATE statistics SET count = count - 1, updated_at = now() WHERE skill_id = $1",
            )
            .bind(skill_id)
            .execute(self.pool)
            .await?;
            touched += result.rows_affected();
        }
        sqlx::query("DELETE FROM statistics WHERE count <= 0")
            .execute(self.pool)
            .await?;
        Ok(touched)
    }
}
