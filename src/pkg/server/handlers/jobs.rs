use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{
    pkg::{
        internal::{
            adaptors::{
                jobs::{
                    mutators::JobMutator,
                    selectors::JobSelector,
                    service,
                    spec::{JobRecord, NewJob, resolve_all, skill_refs},
                },
                skills::{selectors::SkillSelector, spec::parse_refs},
            },
            auth::User,
            validate,
        },
        server::state::AppState,
    },
    prelude::{Error, Result},
};

const CREATE_FAILED: &str = "Failed to create a new job.";
const UPDATE_NO_MATCH: &str = "Failed to update job. No match job found!";
const DELETE_NO_MATCH: &str = "Failed to delete job. No match job found!";

fn default_limit() -> i64 {
    20
}

#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

/// Client-settable job fields. The owner comes from the session, never
/// from here.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct JobPayload {
    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "title is required"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    pub company: Option<String>,
    pub location: Option<String>,
    #[validate(range(min = 0, message = "salary must be non-negative"))]
    pub salary: Option<i64>,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl JobPayload {
    pub fn skill_refs(&self) -> Result<Vec<Uuid>> {
        parse_refs(&self.skills)
    }

    pub fn into_new_job(self, skills: Vec<Uuid>, user_id: Uuid) -> NewJob {
        NewJob {
            title: self.title,
            description: self.description,
            company: self.company,
            location: self.location,
            salary: self.salary,
            skills,
            user_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<JobRecord>,
    pub count: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSearchResponse {
    pub searched_jobs: Vec<JobRecord>,
    pub count: i64,
}

#[derive(Debug, Serialize)]
pub struct JobResponse {
    pub job: JobRecord,
}

/// Echo shape for create and update: the generated or targeted
/// identifier merged into the written record. Skill references stay
/// references here, they are not resolved on the write path.
#[derive(Debug, Serialize)]
pub struct JobWritten {
    pub id: Uuid,
    #[serde(flatten)]
    pub job: NewJob,
}

#[derive(Debug, Serialize)]
pub struct JobDeleted {
    pub id: Uuid,
}

pub async fn list(
    State(state): State<AppState>,
    Query(page): Query<Pagination>,
) -> Result<Json<JobListResponse>> {
    let selector = JobSelector::new(&state.db_pool);
    let jobs = selector.page(page.skip, page.limit).await?;
    let count = selector.count().await?;
    let skills = SkillSelector::new(&state.db_pool)
        .get_by_ids(&skill_refs(&jobs))
        .await?;
    Ok(Json(JobListResponse {
        jobs: resolve_all(jobs, skills),
        count,
    }))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<JobResponse>> {
    let job = service::get_job_by_id(&state.db_pool, &job_id)
        .await
        .map_err(|_| Error::NotFound(service::JOB_NOT_FOUND))?;
    Ok(Json(JobResponse { job }))
}

pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<JobSearchResponse>> {
    let selector = JobSelector::new(&state.db_pool);
    let jobs = selector
        .search(&params.title, params.skip, params.limit)
        .await?;
    let count = selector.count_matching(&params.title).await?;
    let skills = SkillSelector::new(&state.db_pool)
        .get_by_ids(&skill_refs(&jobs))
        .await?;
    Ok(Json(JobSearchResponse {
        searched_jobs: resolve_all(jobs, skills),
        count,
    }))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<User>>,
    Json(payload): Json<JobPayload>,
) -> Result<impl IntoResponse> {
    validate::validate_job(&payload)?;
    let skills = payload.skill_refs()?;
    let job = payload.into_new_job(skills, user.user_id);
    let inserted = JobMutator::new(&state.db_pool)
        .create(&job)
        .await
        .map_err(Error::into_request_error)?;
    let id = inserted.ok_or(Error::Server(CREATE_FAILED))?;
    tracing::info!("user {} created job {}", user.user_id, id);
    Ok((StatusCode::CREATED, Json(JobWritten { id, job })))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<User>>,
    Path(job_id): Path<String>,
    Json(payload): Json<JobPayload>,
) -> Result<Json<JobWritten>> {
    validate::validate_job(&payload)?;
    let id = job_id
        .parse::<Uuid>()
        .map_err(|_| Error::Request(format!("invalid job id: {}", job_id)))?;
    let skills = payload.skill_refs()?;
    let job = payload.into_new_job(skills, user.user_id);
    let matched = JobMutator::new(&state.db_pool)
        .update(id, user.user_id, &job)
        .await
        .map_err(Error::into_request_error)?;
    if matched == 0 {
        return Err(Error::NoMatch(UPDATE_NO_MATCH));
    }
    Ok(Json(JobWritten { id, job }))
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<User>>,
    Path(job_id): Path<String>,
) -> Result<Json<JobDeleted>> {
    let id = job_id
        .parse::<Uuid>()
        .map_err(|_| Error::Request(format!("invalid job id: {}", job_id)))?;
    let deleted = JobMutator::new(&state.db_pool)
        .delete(id, user.user_id)
        .await
        .map_err(Error::into_request_error)?;
    if deleted == 0 {
        return Err(Error::NoMatch(DELETE_NO_MATCH));
    }
    Ok(Json(JobDeleted { id }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_defaults_apply_when_params_are_absent() {
        let page: Pagination = serde_json::from_str("{}").unwrap();
        assert_eq!(page.skip, 0);
        assert_eq!(page.limit, 20);

        let params: SearchParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.title, "");
        assert_eq!(params.limit, 20);
    }

    #[test]
    fn search_response_uses_the_searched_jobs_key() {
        let body = serde_json::to_value(JobSearchResponse {
            searched_jobs: vec![],
            count: 3,
        })
        .unwrap();
        assert!(body.get("searchedJobs").is_some());
        assert_eq!(body["count"], 3);
    }

    #[test]
    fn written_echo_merges_the_identifier_into_the_record() {
        let user_id = Uuid::new_v4();
        let skill = Uuid::new_v4();
        let payload: JobPayload = serde_json::from_str(
            r#"{"title": "Backend Engineer", "description": "build things"}"#,
        )
        .unwrap();
        let job = payload.into_new_job(vec![skill], user_id);
        let id = Uuid::new_v4();

        let body = serde_json::to_value(JobWritten { id, job }).unwrap();
        assert_eq!(body["id"], id.to_string());
        assert_eq!(body["title"], "Backend Engineer");
        assert_eq!(body["userId"], user_id.to_string());
        assert_eq!(body["skills"][0], skill.to_string());
    }

    #[test]
    fn malformed_skill_references_are_request_errors() {
        let payload: JobPayload = serde_json::from_str(
            r#"{"title": "t", "description": "d", "skills": ["nope"]}"#,
        )
        .unwrap();
        assert!(matches!(payload.skill_refs(), Err(Error::Request(_))));
    }

    #[test]
    fn owner_comes_from_the_session_not_the_payload() {
        let caller = Uuid::new_v4();
        // A userId smuggled into the body has no field to land in.
        let payload: JobPayload = serde_json::from_str(
            r#"{"title": "t", "description": "d", "userId": "intruder"}"#,
        )
        .unwrap();
        let job = payload.into_new_job(vec![], caller);
        assert_eq!(job.user_id, caller);
    }
}
