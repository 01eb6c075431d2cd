use sqlx::PgPool;
use uuid::Uuid;

use crate::{pkg::internal::adaptors::jobs::spec::NewJob, prelude::Result};

pub struct JobMutator<'a> {
    pool: &'a PgPool,
}

impl<'a> JobMutator<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        JobMutator { pool }
    }

    /// Inserts the candidate and returns the generated identifier. A
    /// missing row here is the caller's distinct server-error condition.
    pub async fn create(&self, job: &NewJob) -> Result<Option<Uuid>> {
        let inserted = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO jobs (id, title, description, company, location, salary, skills, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.company)
        .bind(&job.location)
        .bind(job.salary)
        .bind(&job.skills)
        .bind(job.user_id)
        .fetch_optional(self.pool)
        .await?;
        Ok(inserted)
    }

    /// Full replacement of the settable fields, matched on the identifier
    /// AND the owner. The owner filter doubles as the authorization check:
    /// a non-owner produces zero matched rows, not a distinct error.
    pub async fn update(&self, id: Uuid, user_id: Uuid, job: &NewJob) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE jobs
            SET title = $3, description = $4, company = $5, location = $6,
                salary = $7, skills = $8, updated_at = now()
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.company)
        .bind(&job.location)
        .bind(job.salary)
        .bind(&job.skills)
        .execute(self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Conditional delete matched the same way as update.
    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
