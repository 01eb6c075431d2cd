use sqlx::PgPool;
use uuid::Uuid;

use crate::{pkg::internal::adaptors::jobs::spec::JobEntry, prelude::Result};

pub struct JobSelector<'a> {
    pool: &'a PgPool,
}

impl<'a> JobSelector<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        JobSelector { pool }
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<JobEntry>> {
        let row = sqlx::query_as::<_, JobEntry>(
            "SELECT id, title, description, company, location, salary, skills, user_id, created_at, updated_at
             FROM jobs WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;
        Ok(row)
    }

    pub async fn page(&self, skip: i64, limit: i64) -> Result<Vec<JobEntry>> {
        let rows = sqlx::query_as::<_, JobEntry>(
            "SELECT id, title, description, company, location, salary, skills, user_id, created_at, updated_at
             FROM jobs ORDER BY created_at, id LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn search(&self, title: &str, skip: i64, limit: i64) -> Result<Vec<JobEntry>> {
        let rows = sqlx::query_as::<_, JobEntry>(
            "SELECT id, title, description, company, location, salary, skills, user_id, created_at, updated_at
             FROM jobs WHERE title ILIKE $1 ORDER BY created_at, id LIMIT $2 OFFSET $3",
        )
        .bind(contains_pattern(title))
        .bind(limit)
        .bind(skip)
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// Unwindowed total across the whole collection, regardless of any
    /// pagination applied to the page itself.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jobs")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }

    /// Total over the filtered set only. Search counts matches, unlike
    /// `count` which ignores the filter; both behaviors are intended.
    pub async fn count_matching(&self, title: &str) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jobs WHERE title ILIKE $1")
            .bind(contains_pattern(title))
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}

/// Builds a case-insensitive containment pattern, escaping LIKE
/// metacharacters in the fragment. An empty fragment matches everything.
pub fn contains_pattern(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len() + 2);
    for c in fragment.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    format!("%{}%", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fragment_matches_everything() {
        assert_eq!(contains_pattern(""), "%%");
    }

    #[test]
    fn plain_fragments_are_wrapped() {
        assert_eq!(contains_pattern("engineer"), "%engineer%");
    }

    #[test]
    fn like_metacharacters_are_escaped() {
        assert_eq!(contains_pattern("100%_remote"), "%100\\%\\_remote%");
        assert_eq!(contains_pattern("back\\slash"), "%back\\\\slash%");
    }
}
