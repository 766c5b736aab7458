use std::fmt;

/// The value every answer is checked against.
pub const EXPECTED: u16 = 42;

/// Signed integer returned by the `answer()` collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answer(pub i32);

impl Answer {
    pub fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Match,
    Mismatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOutcome {
    pub expected: u16,
    pub answer: Answer,
    pub verdict: Verdict,
}

impl CheckOutcome {
    /// Compares in the signed domain, so negative answers never match.
    pub fn evaluate(expected: u16, answer: Answer) -> Self {
        let verdict = if answer.value() == i32::from(expected) {
            Verdict::Match
        } else {
            Verdict::Mismatch
        };
        Self {
            expected,
            answer,
            verdict,
        }
    }

    pub fn is_match(&self) -> bool {
        self.verdict == Verdict::Match
    }

    /// The process exit status: the answer, unchanged.
    pub fn exit_status(&self) -> i32 {
        self.answer.value()
    }

    /// The line printed on a match, without the trailing newline.
    pub fn report_line(&self) -> String {
        format!("{} == {}", self.expected, self.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_match() {
        let outcome = CheckOutcome::evaluate(EXPECTED, Answer(42));
        assert!(outcome.is_match());
        assert_eq!(outcome.exit_status(), 42);
        assert_eq!(outcome.report_line(), "42 == 42");
    }

    #[test]
    fn test_evaluate_mismatch_keeps_answer_as_status() {
        let outcome = CheckOutcome::evaluate(EXPECTED, Answer(7));
        assert_eq!(outcome.verdict, Verdict::Mismatch);
        assert_eq!(outcome.exit_status(), 7);
    }

    #[test]
    fn test_negative_answer_never_matches() {
        let outcome = CheckOutcome::evaluate(EXPECTED, Answer(-42));
        assert!(!outcome.is_match());
        assert_eq!(outcome.exit_status(), -42);
    }
}
