//! Layered configuration
//!
//! Defaults first, then an optional `config/{env}.toml` file, then
//! `SAKINA__`-prefixed environment variables. Every field has a default so
//! the service starts with no file present.

pub mod settings;

pub use settings::{
    load_settings, ClassifierSettings, GeneratorSettings, LogbookSettings,
    ObservabilitySettings, ServerSettings, Settings,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
