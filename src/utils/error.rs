use thiserror::Error;

/// Exit status for an unusable configuration (sysexits `EX_CONFIG`).
pub const EXIT_CONFIG: i32 = 78;
/// Exit status when the answer collaborator could not produce a value (`EX_UNAVAILABLE`).
pub const EXIT_UNAVAILABLE: i32 = 69;
/// Exit status when writing the check line failed (`EX_IOERR`).
pub const EXIT_IOERR: i32 = 74;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidConfigValueError { field: String, reason: String },

    #[error("Environment variable '{var}' is not set")]
    MissingEnvError { var: String },

    #[error("Answer from {origin} is not an integer: {text:?}")]
    ParseAnswerError { origin: String, text: String },

    #[error("Failed to launch '{program}': {source}")]
    SpawnError {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited unsuccessfully ({status})")]
    CommandFailedError { program: String, status: String },

    #[error("Foreign answer() is not linked into this build")]
    FfiUnavailableError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Collaborator,
    Output,
}

impl CheckError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CheckError::TomlError(_)
            | CheckError::InvalidConfigValueError { .. }
            | CheckError::FfiUnavailableError => ErrorCategory::Configuration,
            CheckError::MissingEnvError { .. }
            | CheckError::ParseAnswerError { .. }
            | CheckError::SpawnError { .. }
            | CheckError::CommandFailedError { .. } => ErrorCategory::Collaborator,
            CheckError::IoError(_) => ErrorCategory::Output,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => EXIT_CONFIG,
            ErrorCategory::Collaborator => EXIT_UNAVAILABLE,
            ErrorCategory::Output => EXIT_IOERR,
        }
    }

    pub fn invalid_config(field: &str, reason: impl Into<String>) -> Self {
        CheckError::InvalidConfigValueError {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
