//! Risk analysis handler

use axum::{extract::State, Json};
use validator::Validate;

use crate::logic::input::StudentInput;
use crate::logic::pipeline::{analyze, AnalysisResult};
use crate::{AppError, AppResult, AppState};

/// POST /analyze-risk
///
/// Range validation runs here, before the core is invoked - a payload
/// that fails validation never reaches any pipeline stage.
pub async fn analyze_risk(
    State(state): State<AppState>,
    Json(payload): Json<StudentInput>,
) -> AppResult<Json<AnalysisResult>> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let result = analyze(
        &payload,
        state.classifier.as_ref(),
        &state.catalog,
        &state.options,
    )?;

    Ok(Json(result))
}
