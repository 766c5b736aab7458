use crate::adapters::{CommandAnswer, EnvAnswer, FixedAnswer, ForeignAnswer};
use crate::domain::model::EXPECTED;
use crate::domain::ports::AnswerSource;
use crate::utils::error::{CheckError, Result};
use crate::utils::validation::{validate_env_var_name, validate_program, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Names the configuration file; unset means built-in defaults.
pub const CONFIG_ENV_VAR: &str = "ANSWER_CHECK_CONFIG";

const DEFAULT_ENV_VAR: &str = "ANSWER";
const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceConfig {
    Fixed {
        #[serde(default = "default_fixed_value")]
        value: i32,
    },
    Env {
        #[serde(default = "default_env_var")]
        var: String,
    },
    Command {
        program: String,
        #[serde(default)]
        args: Vec<String>,
    },
    Ffi,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig::Fixed {
            value: default_fixed_value(),
        }
    }
}

fn default_fixed_value() -> i32 {
    i32::from(EXPECTED)
}

fn default_env_var() -> String {
    DEFAULT_ENV_VAR.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Settings {
    /// Loads from the file named by `ANSWER_CHECK_CONFIG`, or defaults when unset.
    pub fn load() -> Result<Self> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CheckError::invalid_config(
                CONFIG_ENV_VAR,
                format!("cannot read '{}': {}", path.display(), e),
            )
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the variable's value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| CheckError::invalid_config("env_substitution", e.to_string()))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// Builds the configured collaborator.
    pub fn answer_source(&self) -> Result<Box<dyn AnswerSource>> {
        self.validate()?;

        let source: Box<dyn AnswerSource> = match &self.source {
            SourceConfig::Fixed { value } => Box::new(FixedAnswer(*value)),
            SourceConfig::Env { var } => Box::new(EnvAnswer::new(var.clone())),
            SourceConfig::Command { program, args } => {
                Box::new(CommandAnswer::new(program.clone(), args.clone()))
            }
            SourceConfig::Ffi => Box::new(ForeignAnswer),
        };
        Ok(source)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        match &self.source {
            SourceConfig::Fixed { .. } => {}
            SourceConfig::Env { var } => validate_env_var_name("source.var", var)?,
            SourceConfig::Command { program, .. } => validate_program("source.program", program)?,
            SourceConfig::Ffi => {
                if !ForeignAnswer::is_linked() {
                    return Err(CheckError::FfiUnavailableError);
                }
            }
        }

        match self.logging.level.to_ascii_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" | "off" => Ok(()),
            other => Err(CheckError::invalid_config(
                "logging.level",
                format!("unknown level '{}'", other),
            )),
        }
    }
}
