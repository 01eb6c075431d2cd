use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    pkg::internal::adaptors::{
        jobs::{selectors::JobSelector, spec::JobRecord},
        skills::{selectors::SkillSelector, spec::SkillEntry},
    },
    prelude::{Error, Result},
};

pub const JOB_NOT_FOUND: &str = "Job not found.";

/// Resolves one job by its string identifier, with skill references
/// expanded. A malformed identifier and an absent row both surface as the
/// not-found condition; a failed lookup keeps its database error.
pub async fn get_job_by_id(pool: &PgPool, job_id: &str) -> Result<JobRecord> {
    let id = job_id
        .parse::<Uuid>()
        .map_err(|_| Error::NotFound(JOB_NOT_FOUND))?;
    let job = JobSelector::new(pool)
        .get_by_id(id)
        .await?
        .ok_or(Error::NotFound(JOB_NOT_FOUND))?;
    let skills = SkillSelector::new(pool).get_by_ids(&job.skills).await?;
    let catalog: HashMap<Uuid, SkillEntry> = skills
        .into_iter()
        .map(|skill| (skill.skill_id, skill))
        .collect();
    Ok(job.resolve(&catalog))
}
