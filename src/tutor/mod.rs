//! The tutor core: normalize what the client sent, then answer it
//! through the completion gateway.

mod error;
mod gateway;
mod normalize;
pub mod prompt;

pub use error::{EMPTY_QUESTION, MISSING_API_KEY, TutorError};
pub use gateway::{
    GENERIC_UPSTREAM_ERROR, Gateway, NO_ANSWER, TEMPERATURE, answer_from_completion,
    completion_messages, upstream_error_message,
};
pub use normalize::{HISTORY_WINDOW, TutorRequest, normalize};
