//! Public types for the tutor API
use serde::{Deserialize, Serialize};

/// The only response shape the tutor endpoint produces, for answers
/// and errors alike.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AnswerResponse {
    pub answer: String,
}

impl AnswerResponse {
    pub fn new(answer: &str) -> Self {
        Self {
            answer: answer.into(),
        }
    }
}
