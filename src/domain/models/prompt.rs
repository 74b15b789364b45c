use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Body of an inbound generation request: `{ "prompt": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRequest {
    prompt: String,
}

impl PromptRequest {
    /// Parse a raw request body. The frontends post without a JSON content
    /// type, so this does not look at headers at all.
    pub fn from_json(body: &[u8]) -> Result<Self, DomainError> {
        serde_json::from_slice(body)
            .map_err(|e| DomainError::invalid_request(format!("Invalid request body: {e}")))
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_prompt_body() {
        let req = PromptRequest::from_json(br#"{"prompt":"a bouncing ball"}"#).unwrap();
        assert_eq!(req.prompt(), "a bouncing ball");
    }

    #[test]
    fn rejects_body_without_prompt() {
        let err = PromptRequest::from_json(br#"{"text":"hi"}"#).unwrap_err();
        assert!(matches!(err, DomainError::InvalidRequest(_)));
    }

    #[test]
    fn empty_prompt_passes_through() {
        let req = PromptRequest::from_json(br#"{"prompt":""}"#).unwrap();
        assert!(req.prompt().is_empty());
    }
}
