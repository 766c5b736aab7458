// Adapters layer: concrete `AnswerSource` implementations.

pub mod command;
pub mod env;
pub mod ffi;
pub mod fixed;

pub use command::CommandAnswer;
pub use env::EnvAnswer;
pub use ffi::ForeignAnswer;
pub use fixed::FixedAnswer;

use crate::domain::model::Answer;
use crate::utils::error::{CheckError, Result};

/// Parses collaborator output as a signed integer, ignoring surrounding whitespace.
pub(crate) fn parse_answer(origin: &str, text: &str) -> Result<Answer> {
    text.trim()
        .parse::<i32>()
        .map(Answer)
        .map_err(|_| CheckError::ParseAnswerError {
            origin: origin.to_string(),
            text: text.to_string(),
        })
}
