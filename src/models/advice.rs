use serde::{Deserialize, Serialize};
use validator::Validate;

/// Incoming symptom query. Optional fields fall back to the same defaults
/// the frontend relies on.
#[derive(Debug, Deserialize, Validate)]
pub struct SymptomQuery {
    #[validate(length(min = 1, message = "symptoms must not be empty"))]
    pub symptoms: String,

    #[serde(default)]
    pub patient_history: String,

    #[serde(default)]
    pub current_medications: String,

    #[serde(default = "default_num_recommendations")]
    pub num_recommendations: i64,
}

fn default_num_recommendations() -> i64 {
    3
}

/// Structured advice payload assembled from the model's free-text reply.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct AdviceResponse {
    pub recommendations: Vec<String>,
    pub advice: String,
    pub precautions: Vec<String>,
}
