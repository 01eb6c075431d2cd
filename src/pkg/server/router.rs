use axum::middleware::from_fn_with_state;
use axum::{
    Router,
    routing::{get, post},
};

use super::handlers;
use super::handlers::probes::{healthz, livez};
use super::middlewares::authn;
use super::state::AppState;
use crate::prelude::Result;

pub async fn build_routes() -> Result<Router> {
    let state = AppState::new().await?;
    let app = Router::new()
        .route("/jobs", get(handlers::jobs::list).post(handlers::jobs::create))
        .route("/jobs/search", get(handlers::jobs::search))
        .route(
            "/jobs/{job_id}",
            get(handlers::jobs::get_by_id)
                .put(handlers::jobs::update)
                .delete(handlers::jobs::delete),
        )
        .route(
            "/skills",
            get(handlers::skills::list).post(handlers::skills::create),
        )
        .route("/statistics", post(handlers::statistics::add_skills))
        .route("/statistics/delete", post(handlers::statistics::remove_skills))
        .route(
            "/statistics/{skill_id}",
            get(handlers::statistics::get_by_skill_id),
        )
        .layer(from_fn_with_state(state.clone(), authn::authenticate))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .with_state(state);

    Ok(app)
}
