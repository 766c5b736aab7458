pub mod toml_config;

pub use toml_config::{LoggingConfig, Settings, SourceConfig, CONFIG_ENV_VAR};
