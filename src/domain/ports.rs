use crate::domain::model::Answer;
use crate::utils::error::Result;

/// The `answer()` collaborator. Implementations decide where the value comes from.
pub trait AnswerSource {
    fn answer(&self) -> Result<Answer>;

    /// Short label used in log events.
    fn describe(&self) -> String;
}

impl<S: AnswerSource + ?Sized> AnswerSource for Box<S> {
    fn answer(&self) -> Result<Answer> {
        (**self).answer()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
