use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use std::env;

/// Default sampling temperature for advice completions.
const DEFAULT_TEMPERATURE: f32 = 0.7;

#[derive(Debug, Clone, Deserialize)]
pub struct AdvisorConfig {
    pub http: HttpConfig,
    pub provider: ProviderConfig,
    pub model: ModelConfig,
    pub security: SecurityConfig,
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8000
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Chat model used for advice completions (e.g., llama3-70b-8192)
    pub text_model: String,
    /// Sampling temperature passed to the provider
    pub temperature: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    /// Origins permitted by the CORS layer
    pub allowed_origins: Vec<String>,
}

impl AdvisorConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let http: HttpConfig = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()?;

        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(AdvisorConfig {
            http,
            provider: ProviderConfig {
                api_key: get_env("GROQ_API_KEY", None, is_prod)?,
            },
            model: ModelConfig {
                text_model: get_env("ADVISOR_MODEL", Some("llama3-70b-8192"), is_prod)?,
                temperature: get_env(
                    "ADVISOR_TEMPERATURE",
                    Some(&DEFAULT_TEMPERATURE.to_string()),
                    is_prod,
                )?
                .parse()
                .unwrap_or(DEFAULT_TEMPERATURE),
            },
            security: SecurityConfig {
                allowed_origins: get_env(
                    "ALLOWED_ORIGINS",
                    Some("http://localhost:5173"),
                    is_prod,
                )?
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),
            },
            log_level: get_env("LOG_LEVEL", Some("info"), is_prod)?,
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
