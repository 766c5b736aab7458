use crate::domain::model::{Answer, EXPECTED};
use crate::domain::ports::AnswerSource;
use crate::utils::error::Result;

/// Returns a preconfigured value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAnswer(pub i32);

impl Default for FixedAnswer {
    fn default() -> Self {
        Self(i32::from(EXPECTED))
    }
}

impl AnswerSource for FixedAnswer {
    fn answer(&self) -> Result<Answer> {
        Ok(Answer(self.0))
    }

    fn describe(&self) -> String {
        format!("fixed({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_answers_42() {
        assert_eq!(FixedAnswer::default().answer().unwrap(), Answer(42));
    }
}
