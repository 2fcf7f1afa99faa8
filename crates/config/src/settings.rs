//! Typed settings tree

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::ConfigError;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub classifier: ClassifierSettings,
    #[serde(default)]
    pub generator: GeneratorSettings,
    #[serde(default)]
    pub observability: ObservabilitySettings,
    #[serde(default)]
    pub logbook: LogbookSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_true")]
    pub cors_enabled: bool,
    #[serde(default)]
    pub cors_origins: Vec<String>,
    #[serde(default = "default_request_timeout")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierSettings {
    #[serde(default = "default_classifier_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_client_timeout")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorSettings {
    #[serde(default = "default_generator_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_client_timeout")]
    pub timeout_seconds: u64,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilitySettings {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogbookSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_logbook_dir")]
    pub dir: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_true() -> bool {
    true
}
fn default_request_timeout() -> u64 {
    30
}
fn default_classifier_endpoint() -> String {
    "http://localhost:8500".to_string()
}
fn default_generator_endpoint() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}
fn default_model() -> String {
    "gpt-4o-mini".to_string()
}
fn default_max_tokens() -> u32 {
    150
}
fn default_temperature() -> f32 {
    0.7
}
fn default_client_timeout() -> u64 {
    20
}
fn default_max_retries() -> u32 {
    3
}
fn default_cache_capacity() -> usize {
    256
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_logbook_dir() -> String {
    "logs".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_enabled: default_true(),
            cors_origins: Vec::new(),
            timeout_seconds: default_request_timeout(),
        }
    }
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            endpoint: default_classifier_endpoint(),
            timeout_seconds: default_client_timeout(),
        }
    }
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            endpoint: default_generator_endpoint(),
            api_key: String::new(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_seconds: default_client_timeout(),
            max_retries: default_max_retries(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

impl Default for ObservabilitySettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

impl Default for LogbookSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            dir: default_logbook_dir(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            classifier: ClassifierSettings::default(),
            generator: GeneratorSettings::default(),
            observability: ObservabilitySettings::default(),
            logbook: LogbookSettings::default(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must be non-zero".into()));
        }
        if self.generator.max_tokens == 0 {
            return Err(ConfigError::Invalid(
                "generator.max_tokens must be at least 1".into(),
            ));
        }
        if self.classifier.timeout_seconds == 0 || self.generator.timeout_seconds == 0 {
            return Err(ConfigError::Invalid(
                "client timeouts must be at least one second".into(),
            ));
        }
        Ok(())
    }
}

/// Load settings for the given environment name
///
/// Resolution order: struct defaults, then `config/{env}.toml` when present,
/// then `SAKINA__SECTION__FIELD` environment variables.
pub fn load_settings(env: &str) -> Result<Settings, ConfigError> {
    let settings: Settings = Config::builder()
        .add_source(File::with_name(&format!("config/{env}")).required(false))
        .add_source(Environment::with_prefix("SAKINA").separator("__"))
        .build()?
        .try_deserialize()?;

    settings.validate()?;
    tracing::debug!(env, "configuration loaded");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.generator.max_tokens, 150);
        assert_eq!(settings.generator.cache_capacity, 256);
    }

    #[test]
    fn test_zero_port_rejected() {
        let mut settings = Settings::default();
        settings.server.port = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_zero_max_tokens_rejected() {
        let mut settings = Settings::default();
        settings.generator.max_tokens = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_load_with_missing_file_uses_defaults() {
        let settings = load_settings("does-not-exist").unwrap();
        assert_eq!(settings.classifier.timeout_seconds, 20);
    }
}
