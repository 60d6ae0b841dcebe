use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::error::AppError;
use crate::models::SymptomQuery;
use crate::startup::AppState;
use crate::utils::ValidatedJson;

/// Fixed liveness message, kept stable for the frontend regardless of input.
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "Medical Advisor API is running"
    }))
}

/// Generate medical advice for a symptom query.
pub async fn get_medical_advice(
    State(state): State<AppState>,
    ValidatedJson(query): ValidatedJson<SymptomQuery>,
) -> Result<impl IntoResponse, AppError> {
    let res = state.advisor.get_medical_advice(&query).await?;
    Ok((StatusCode::OK, Json(res)))
}
