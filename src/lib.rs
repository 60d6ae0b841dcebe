//! advisor-service: HTTP microservice that turns patient symptom queries
//! into structured medical advice via an external LLM provider.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod observability;
pub mod services;
pub mod startup;
pub mod utils;
