use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct QuizConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

impl QuizConfig {
    pub fn load() -> Result<Self, AppError> {
        // Handles .env and the APP__ prefix.
        let common_config = core_config::Config::load()?;

        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(QuizConfig {
            common: common_config,
            mongodb: MongoConfig {
                uri: get_env("MONGODB_URI", Some("mongodb://localhost:27017"), is_prod)?,
                database: get_env("MONGODB_DATABASE", Some("quiz_db"), is_prod)?,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    resolve(key, env::var(key).ok(), default, is_prod)
}

fn resolve(
    key: &str,
    value: Option<String>,
    default: Option<&str>,
    is_prod: bool,
) -> Result<String, AppError> {
    match value {
        Some(val) => Ok(val),
        None if is_prod => Err(AppError::ConfigError(anyhow::anyhow!(
            "{} is required in production but not set",
            key
        ))),
        None => default.map(str::to_string).ok_or_else(|| {
            AppError::ConfigError(anyhow::anyhow!("{} is required but not set", key))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_value_wins() {
        let value = resolve("MONGODB_DATABASE", Some("other".into()), Some("quiz_db"), true);
        assert_eq!(value.unwrap(), "other");
    }

    #[test]
    fn default_is_used_outside_production() {
        let value = resolve("MONGODB_DATABASE", None, Some("quiz_db"), false);
        assert_eq!(value.unwrap(), "quiz_db");
    }

    #[test]
    fn production_rejects_missing_values() {
        let err = resolve("MONGODB_URI", None, Some("mongodb://localhost:27017"), true)
            .unwrap_err();
        assert!(err.to_string().contains("MONGODB_URI"));
    }

    #[test]
    fn missing_value_without_default_is_an_error() {
        assert!(resolve("MONGODB_URI", None, None, false).is_err());
    }
}
