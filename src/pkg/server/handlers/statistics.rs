use axum::{
    Json,
    extract::{Path, State},
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
                skills::spec::parse_refs,
                statistics::{
                    mutators::StatisticMutator, selectors::StatisticSelector, spec::StatisticEntry,
                },
            },
            validate,
        },
        server::state::AppState,
    },
    prelude::{Error, Result},
};

const STATISTIC_NOT_FOUND: &str = "Statistic not found.";

#[derive(Debug, Deserialize, Validate)]
pub struct StatisticsPayload {
    #[serde(default)]
    #[validate(length(min = 1, message = "skills are required"))]
    pub skills: Vec<String>,
}

impl StatisticsPayload {
    pub fn skill_refs(&self) -> Result<Vec<Uuid>> {
        parse_refs(&self.skills)
    }
}

#[derive(Debug, Serialize)]
pub struct StatisticListResponse {
    pub statistics: Vec<StatisticEntry>,
}

#[derive(Debug, Serialize)]
pub struct StatisticResponse {
    pub statistic: StatisticEntry,
}

#[derive(Debug, Serialize)]
pub struct StatisticsRemoved {
    pub removed: u64,
}

pub async fn add_skills(
    State(state): State<AppState>,
    Json(payload): Json<StatisticsPayload>,
) -> Result<impl IntoResponse> {
    validate::validate_statistics(&payload)?;
    let refs = payload.skill_refs()?;
    let statistics = StatisticMutator::new(&state.db_pool)
        .add_skills(&refs)
        .await
        .map_err(Error::into_request_error)?;
    Ok((
        StatusCode::CREATED,
        Json(StatisticListResponse { statistics }),
    ))
}

pub async fn get_by_skill_id(
    State(state): State<AppState>,
    Path(skill_id): Path<String>,
) -> Result<Json<StatisticResponse>> {
    let id = skill_id
        .parse::<Uuid>()
        .map_err(|_| Error::NotFound(STATISTIC_NOT_FOUND))?;
    let statistic = StatisticSelector::new(&state.db_pool)
        .get_by_skill_id(id)
        .await
        .map_err(|_| Error::NotFound(STATISTIC_NOT_FOUND))?
        .ok_or(Error::NotFound(STATISTIC_NOT_FOUND))?;
    Ok(Json(StatisticResponse { statistic }))
}

pub async fn remove_skills(
    State(state): State<AppState>,
    Json(payload): Json<StatisticsPayload>,
) -> Result<Json<StatisticsRemoved>> {
    validate::validate_statistics(&payload)?;
    let refs = payload.skill_refs()?;
    let removed = StatisticMutator::new(&state.db_pool)
        .remove_skills(&refs)
        .await
        .map_err(Error::into_request_error)?;
    Ok(Json(StatisticsRemoved { removed }))
}
