use crate::adapters::parse_answer;
use crate::domain::model::Answer;
use crate::domain::ports::AnswerSource;
use crate::utils::error::{CheckError, Result};

/// Reads the answer from an environment variable at call time.
#[derive(Debug, Clone)]
pub struct EnvAnswer {
    var: String,
}

impl EnvAnswer {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl AnswerSource for EnvAnswer {
    fn answer(&self) -> Result<Answer> {
        let raw = std::env::var(&self.var).map_err(|_| CheckError::MissingEnvError {
            var: self.var.clone(),
        })?;
        parse_answer(&self.describe(), &raw)
    }

    fn describe(&self) -> String {
        format!("env {}", self.var)
    }
}
