pub mod advice;

pub use advice::{AdviceResponse, SymptomQuery};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
