use sqlx::PgPool;
use uuid::Uuid;

use crate::{pkg::internal::adaptors::skills::spec::SkillEntry, prelude::Result};

pub struct SkillMutator<'a> {
    pool: &'a PgPool,
}

impl<'a> SkillMutator<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        SkillMutator { pool }
    }

    /// Upserts on the unique name so repeated creates converge on one row.
    pub async fn create(&self, name: &str) -> Result<SkillEntry> {
        let skill = sqlx::query_as::<_, SkillEntry>(
            r#"
            INSERT INTO skills (skill_id, name)
            VALUES ($1, $2)
            ON CONFLICT (name) DO UPDATE
            SET name = EXCLUDED.name
            RETURNING skill_id, name
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .fetch_one(self.pool)
        .await?;
        Ok(skill)
    }
}
