use thiserror::Error;

/// Failure of a single chat-completion call. The client never retries;
/// callers decide what happens next.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LlmError {
    #[error("failed to build request: {0}")]
    RequestBuild(String),

    #[error("failed to send request: {0}")]
    Transport(String),

    #[error("API returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("failed to read response body: {0}")]
    BodyRead(String),

    #[error("unexpected response shape: {0}")]
    ResponseShape(String),
}

impl LlmError {
    pub fn kind(&self) -> &'static str {
        match self {
            LlmError::RequestBuild(_) => "request-build",
            LlmError::Transport(_) => "transport",
            LlmError::UpstreamStatus { .. } => "upstream-status",
            LlmError::BodyRead(_) => "body-read",
            LlmError::ResponseShape(_) => "response-shape",
        }
    }
}
