//! Axum route handlers for the Grow-Pulse briefing API.

use axum::{extract::State, Json};

use crate::briefing::pipeline::{
    run_blog_body_pipeline, run_blog_intro_pipeline, BlogBodyOutput, BlogIntroOutput,
    GrowPulseRequest,
};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /grow-pulse/
///
/// Runs the full body pipeline and returns the seven generated fields.
pub async fn handle_blog_body(
    State(state): State<AppState>,
    Json(request): Json<GrowPulseRequest>,
) -> Result<Json<BlogBodyOutput>, AppError> {
    let output = run_blog_body_pipeline(state.llm.as_ref(), &state.config, request).await?;
    Ok(Json(output))
}

/// POST /grow-pulse/blog-intro
///
/// Runs the title/summary pipeline for a blog preview.
pub async fn handle_blog_intro(
    State(state): State<AppState>,
    Json(request): Json<GrowPulseRequest>,
) -> Result<Json<BlogIntroOutput>, AppError> {
    let output = run_blog_intro_pipeline(state.llm.as_ref(), &state.config, request).await?;
    Ok(Json(output))
}
