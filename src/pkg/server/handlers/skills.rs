use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    pkg::{
        internal::{
            adaptors::skills::{mutators::SkillMutator, selectors::SkillSelector, spec::SkillEntry},
            validate,
        },
        server::state::AppState,
    },
    prelude::{Error, Result},
};

#[derive(Debug, Deserialize, Validate)]
pub struct SkillPayload {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct SkillListResponse {
    pub skills: Vec<SkillEntry>,
}

#[derive(Debug, Serialize)]
pub struct SkillResponse {
    pub skill: SkillEntry,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<SkillListResponse>> {
    let skills = SkillSelector::new(&state.db_pool).list().await?;
    Ok(Json(SkillListResponse { skills }))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<SkillPayload>,
) -> Result<impl IntoResponse> {
    validate::validate_skill(&payload)?;
    let skill = SkillMutator::new(&state.db_pool)
        .create(&payload.name)
        .await
        .map_err(Error::into_request_error)?;
    Ok((StatusCode::CREATED, Json(SkillResponse { skill })))
}
