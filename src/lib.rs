pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{CommandAnswer, EnvAnswer, FixedAnswer, ForeignAnswer};
pub use config::Settings;
pub use crate::core::check::AnswerCheck;
pub use domain::model::{Answer, CheckOutcome, Verdict, EXPECTED};
pub use domain::ports::AnswerSource;
pub use utils::error::{CheckError, Result};
