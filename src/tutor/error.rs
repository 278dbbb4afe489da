use http::StatusCode;

pub const EMPTY_QUESTION: &str = "Please enter a question.";
pub const MISSING_API_KEY: &str = "Missing OPENAI_API_KEY";

/// Every way a tutor request can end without an answer.
#[derive(Debug, thiserror::Error)]
pub enum TutorError {
    /// The question was blank and demo mode is off.
    #[error("{msg}", msg = EMPTY_QUESTION)]
    EmptyQuestion,

    /// No upstream credential is configured.
    #[error("{msg}", msg = MISSING_API_KEY)]
    MissingApiKey,

    /// The completion provider answered with a non-success status.
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// The completion provider could not be reached or the response
    /// could not be read.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Render(#[from] handlebars::RenderError),
}

impl TutorError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::EmptyQuestion => StatusCode::BAD_REQUEST,
            Self::MissingApiKey
            | Self::Upstream { .. }
            | Self::Transport(_)
            | Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
