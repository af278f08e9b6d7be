use crate::mcp::errors;
use thiserror::Error;

pub type Result<T, E = DocsError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum DocsError {
    /// Token exchange returned a non-success status or an unreadable body.
    #[error("Token refresh failed: {0}")]
    Auth(String),

    /// The document API answered with a non-2xx status.
    #[error("Google Docs API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("{0}")]
    Config(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl DocsError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            DocsError::Auth(_) => errors::AUTH_ERROR,
            DocsError::Api { .. } => errors::API_ERROR,
            DocsError::UnknownTool(_) => errors::UNKNOWN_TOOL,
            DocsError::Config(_) => errors::CONFIG_ERROR,
            DocsError::InvalidInput(_) => errors::INVALID_INPUT,
            DocsError::Transport(_) => errors::TRANSPORT_ERROR,
            DocsError::Decode(_) => errors::INTERNAL_ERROR,
        }
    }
}
