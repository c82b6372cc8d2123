//! Startup configuration resolved from the environment.

use std::env;

const TELEGRAM_TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";
const COMPLETION_KEY_VAR: &str = "GROQ_API_KEY";
const COMPLETION_MODEL_VAR: &str = "GROQ_API_MODEL";

/// The three settings required before the bot can serve.
#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_token: String,
    pub completion_api_key: String,
    pub completion_model: String,
}

/// Fatal startup errors; the process must abort before serving.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// A required environment variable is absent or empty.
    MissingVar(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingVar(name) => write!(f, "required setting {name} is not set"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Reads the required settings, failing on the first missing one.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let require = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::MissingVar(name))
        };

        Ok(Self {
            telegram_token: require(TELEGRAM_TOKEN_VAR)?,
            completion_api_key: require(COMPLETION_KEY_VAR)?,
            completion_model: require(COMPLETION_MODEL_VAR)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            (TELEGRAM_TOKEN_VAR, "123:abc"),
            (COMPLETION_KEY_VAR, "gsk_test"),
            (COMPLETION_MODEL_VAR, "llama-3.1-8b-instant"),
        ])
    }

    fn config_from(env: &HashMap<&'static str, &'static str>) -> Result<Config, ConfigError> {
        Config::from_lookup(|name| env.get(name).map(|value| value.to_string()))
    }

    #[test]
    fn test_all_settings_present() {
        let config = config_from(&full_env()).unwrap();
        assert_eq!(config.telegram_token, "123:abc");
        assert_eq!(config.completion_api_key, "gsk_test");
        assert_eq!(config.completion_model, "llama-3.1-8b-instant");
    }

    #[test]
    fn test_each_missing_setting_is_fatal() {
        for var in [TELEGRAM_TOKEN_VAR, COMPLETION_KEY_VAR, COMPLETION_MODEL_VAR] {
            let mut env = full_env();
            env.remove(var);
            match config_from(&env) {
                Err(ConfigError::MissingVar(name)) => assert_eq!(name, var),
                other => panic!("expected MissingVar({var}), got {other:?}"),
            }
        }
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let mut env = full_env();
        env.insert(COMPLETION_KEY_VAR, "");
        assert!(matches!(
            config_from(&env),
            Err(ConfigError::MissingVar(COMPLETION_KEY_VAR))
        ));
    }

    #[test]
    fn test_error_message_formatting() {
        let err = ConfigError::MissingVar("GROQ_API_KEY");
        assert_eq!(format!("{err}"), "required setting GROQ_API_KEY is not set");
    }
}
