use crate::domain::model::Answer;
use crate::domain::ports::AnswerSource;
use crate::utils::error::Result;

#[cfg(feature = "ffi")]
mod sys {
    use std::os::raw::c_int;

    extern "C" {
        pub fn answer() -> c_int;
    }
}

/// Calls the C `int answer(void)` linked in at build time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForeignAnswer;

impl ForeignAnswer {
    pub const fn is_linked() -> bool {
        cfg!(feature = "ffi")
    }
}

impl AnswerSource for ForeignAnswer {
    #[cfg(feature = "ffi")]
    fn answer(&self) -> Result<Answer> {
        // SAFETY: `answer` takes no arguments and returns a plain int.
        let value = unsafe { sys::answer() };
        Ok(Answer(value))
    }

    #[cfg(not(feature = "ffi"))]
    fn answer(&self) -> Result<Answer> {
        Err(crate::utils::error::CheckError::FfiUnavailableError)
    }

    fn describe(&self) -> String {
        "ffi answer()".to_string()
    }
}
