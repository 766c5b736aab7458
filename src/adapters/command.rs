use std::process::{Command, Stdio};

use crate::adapters::parse_answer;
use crate::domain::model::Answer;
use crate::domain::ports::AnswerSource;
use crate::utils::error::{CheckError, Result};

/// Runs an external program and takes its stdout as the answer.
#[derive(Debug, Clone)]
pub struct CommandAnswer {
    program: String,
    args: Vec<String>,
}

impl CommandAnswer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl AnswerSource for CommandAnswer {
    fn answer(&self) -> Result<Answer> {
        tracing::debug!(program = %self.program, args = ?self.args, "running answer command");

        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| CheckError::SpawnError {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(CheckError::CommandFailedError {
                program: self.program.clone(),
                status: output.status.to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_answer(&self.describe(), &stdout)
    }

    fn describe(&self) -> String {
        format!("command {}", self.program)
    }
}
