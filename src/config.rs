use std::env::{self, VarError};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::TokenError;
use crate::version::TaxonomyVersion;

pub const TAXONOMY_ENV_VAR: &str = "MONKEY_TAXONOMY";

// Ошибки загрузки конфигурации фронтенда
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid value for environment variable {var}: {source}")]
    Env {
        var: &'static str,
        #[source]
        source: TokenError,
    },

    #[error("Environment variable {var} is not valid unicode")]
    EnvNotUnicode { var: &'static str },
}

// Настройки фронтенда: пока только выбор таксономии.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrontEndConfig {
    pub taxonomy: TaxonomyVersion,
}

impl FrontEndConfig {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: FrontEndConfig = serde_json::from_str(text)?;
        log::info!("front end targets the {} taxonomy", config.taxonomy);
        Ok(config)
    }

    // Значение по умолчанию берётся только когда переменная не задана
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_value(env::var(TAXONOMY_ENV_VAR))
    }

    fn from_env_value(value: Result<String, VarError>) -> Result<Self, ConfigError> {
        let value = match value {
            Ok(value) => value,
            Err(VarError::NotPresent) => return Ok(FrontEndConfig::default()),
            Err(VarError::NotUnicode(_)) => {
                return Err(ConfigError::EnvNotUnicode {
                    var: TAXONOMY_ENV_VAR,
                });
            }
        };

        let taxonomy = value
            .trim()
            .parse::<TaxonomyVersion>()
            .map_err(|source| ConfigError::Env {
                var: TAXONOMY_ENV_VAR,
                source,
            })?;

        log::info!("front end targets the {taxonomy} taxonomy ({TAXONOMY_ENV_VAR})");
        Ok(FrontEndConfig { taxonomy })
    }
}
