use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoachError {
    #[error("upstream completion failed: {0}")]
    Upstream(Box<dyn std::error::Error + Send + Sync>),
    #[error("malformed request: {0}")]
    MalformedRequest(String),
    #[error("conversation has no messages")]
    EmptyConversation,
    #[error("prompt template '{0}' not found")]
    TemplateNotFound(String),
    #[error("prompt file IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("prompt JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CoachResult<T> = Result<T, CoachError>;
