use std::io::Write;

use crate::domain::model::{CheckOutcome, EXPECTED};
use crate::domain::ports::AnswerSource;
use crate::utils::error::Result;

/// Asks the source for its answer, compares it with [`EXPECTED`], and
/// writes `"{expected} == {answer}"` to the sink on a match.
pub struct AnswerCheck<S: AnswerSource> {
    source: S,
}

impl<S: AnswerSource> AnswerCheck<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<CheckOutcome> {
        tracing::debug!(source = %self.source.describe(), "asking for the answer");

        let answer = self.source.answer()?;
        tracing::debug!(%answer, "answer obtained");

        let outcome = CheckOutcome::evaluate(EXPECTED, answer);
        if outcome.is_match() {
            writeln!(out, "{}", outcome.report_line())?;
            out.flush()?;
        }

        tracing::info!(
            expected = outcome.expected,
            answer = outcome.answer.value(),
            verdict = ?outcome.verdict,
            "check finished"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::FixedAnswer;
    use crate::domain::model::{Answer, Verdict};
    use crate::utils::error::{CheckError, EXIT_IOERR};
    use std::io;

    struct Failing;

    impl AnswerSource for Failing {
        fn answer(&self) -> Result<Answer> {
            Err(CheckError::MissingEnvError {
                var: "ANSWER".to_string(),
            })
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_match_prints_one_line() {
        let mut out = Vec::new();
        let outcome = AnswerCheck::new(FixedAnswer(42)).run(&mut out).unwrap();

        assert_eq!(outcome.verdict, Verdict::Match);
        assert_eq!(outcome.exit_status(), 42);
        assert_eq!(String::from_utf8(out).unwrap(), "42 == 42\n");
    }

    #[test]
    fn test_mismatch_prints_nothing() {
        for value in [0, 1, 41, 43, 255, -42, i32::MAX] {
            let mut out = Vec::new();
            let outcome = AnswerCheck::new(FixedAnswer(value)).run(&mut out).unwrap();

            assert_eq!(outcome.verdict, Verdict::Mismatch);
            assert_eq!(outcome.exit_status(), value);
            assert!(out.is_empty());
        }
    }

    #[test]
    fn test_source_failure_prints_nothing() {
        let mut out = Vec::new();
        let result = AnswerCheck::new(Failing).run(&mut out);

        assert!(matches!(result, Err(CheckError::MissingEnvError { .. })));
        assert!(out.is_empty());
    }

    #[test]
    fn test_broken_sink_is_an_io_error() {
        let err = AnswerCheck::new(FixedAnswer(42))
            .run(&mut ClosedPipe)
            .unwrap_err();

        assert!(matches!(err, CheckError::IoError(_)));
        assert_eq!(err.exit_code(), EXIT_IOERR);
    }

    #[test]
    fn test_mismatch_never_touches_the_sink() {
        let outcome = AnswerCheck::new(FixedAnswer(7)).run(&mut ClosedPipe).unwrap();
        assert_eq!(outcome.exit_status(), 7);
    }

    #[test]
    fn test_boxed_source_is_accepted() {
        let source: Box<dyn AnswerSource> = Box::new(FixedAnswer::default());
        let mut out = Vec::new();
        let outcome = AnswerCheck::new(source).run(&mut out).unwrap();
        assert!(outcome.is_match());
    }
}
