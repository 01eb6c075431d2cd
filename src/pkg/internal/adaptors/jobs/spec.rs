use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use uuid::Uuid;

use crate::pkg::internal::adaptors::skills::spec::SkillEntry;

/// A stored job posting. `skills` holds references into the skills table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JobEntry {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub salary: Option<i64>,
    pub skills: Vec<Uuid>,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Candidate row assembled from a client payload and the authenticated
/// owner. The owner never comes from the payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub salary: Option<i64>,
    pub skills: Vec<Uuid>,
    pub user_id: Uuid,
}

/// Read shape: skill references resolved into full skill records.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub salary: Option<i64>,
    pub skills: Vec<SkillEntry>,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobEntry {
    /// Replaces skill references with the matching records, keeping the
    /// reference order. References with no matching skill are dropped.
    pub fn resolve(self, catalog: &HashMap<Uuid, SkillEntry>) -> JobRecord {
        let skills = self
            .skills
            .iter()
            .filter_map(|id| catalog.get(id).cloned())
            .collect();
        JobRecord {
            id: self.id,
            title: self.title,
            description: self.description,
            company: self.company,
            location: self.location,
            salary: self.salary,
            skills,
            user_id: self.user_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Collects the distinct skill references across a page of jobs, in
/// first-seen order.
pub fn skill_refs(jobs: &[JobEntry]) -> Vec<Uuid> {
    let mut refs: Vec<Uuid> = Vec::new();
    for job in jobs {
        for id in &job.skills {
            if !refs.contains(id) {
                refs.push(*id);
            }
        }
    }
    refs
}

pub fn resolve_all(jobs: Vec<JobEntry>, skills: Vec<SkillEntry>) -> Vec<JobRecord> {
    let catalog: HashMap<Uuid, SkillEntry> = skills
        .into_iter()
        .map(|skill| (skill.skill_id, skill))
        .collect();
    jobs.into_iter().map(|job| job.resolve(&catalog)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str) -> SkillEntry {
        SkillEntry {
            skill_id: Uuid::new_v4(),
            name: name.to_string(),
        }
    }

    fn job(skills: Vec<Uuid>) -> JobEntry {
        JobEntry {
            id: Uuid::new_v4(),
            title: "Backend Engineer".to_string(),
            description: "build things".to_string(),
            company: None,
            location: None,
            salary: None,
            skills,
            user_id: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn refs_are_collected_once_in_first_seen_order() {
        let rust = skill("rust");
        let sql = skill("sql");
        let jobs = vec![
            job(vec![rust.skill_id, sql.skill_id]),
            job(vec![sql.skill_id, rust.skill_id]),
        ];
        assert_eq!(skill_refs(&jobs), vec![rust.skill_id, sql.skill_id]);
    }

    #[test]
    fn resolution_keeps_reference_order_and_drops_unknowns() {
        let rust = skill("rust");
        let sql = skill("sql");
        let dangling = Uuid::new_v4();
        let jobs = vec![job(vec![sql.skill_id, dangling, rust.skill_id])];

        let records = resolve_all(jobs, vec![rust.clone(), sql.clone()]);
        let names: Vec<&str> = records[0].skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["sql", "rust"]);
    }

    #[test]
    fn jobs_without_references_resolve_to_empty_skill_lists() {
        let records = resolve_all(vec![job(vec![])], vec![]);
        assert!(records[0].skills.is_empty());
    }
}
