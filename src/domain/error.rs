use thiserror::Error;

use super::GenerationStage;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed output: {0}")]
    MalformedOutput(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl DomainError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn malformed_output(msg: impl Into<String>) -> Self {
        Self::MalformedOutput(msg.into())
    }

    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// The message without the kind prefix. This is what callers of the
    /// HTTP endpoints see in the `{ "error": ... }` envelope.
    pub fn message(&self) -> &str {
        match self {
            Self::Configuration(m)
            | Self::Upstream(m)
            | Self::Transport(m)
            | Self::MalformedOutput(m)
            | Self::InvalidRequest(m) => m,
        }
    }

    /// The pipeline step that produced this error.
    pub fn failed_at(&self) -> GenerationStage {
        match self {
            Self::InvalidRequest(_) => GenerationStage::Received,
            Self::Configuration(_) => GenerationStage::CredentialChecked,
            Self::Transport(_) => GenerationStage::Requested,
            Self::Upstream(_) => GenerationStage::ResponseReceived,
            Self::MalformedOutput(_) => GenerationStage::Sanitized,
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn is_malformed_output(&self) -> bool {
        matches!(self, Self::MalformedOutput(_))
    }
}
