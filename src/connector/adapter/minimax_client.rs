use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::ChatClient;
use crate::domain::{CompletionRequest, DomainError};

pub const DEFAULT_BASE_URL: &str = "https://api.minimax.io";
pub const DEFAULT_MODEL: &str = "MiniMax-M2.1";
pub const API_KEY_VAR: &str = "MINIMAX_API_KEY";
const COMPLETIONS_PATH: &str = "/v1/text/chatcompletion_v2";

/// The parts of a MiniMax chat-completion reply we read. Every field is
/// optional: error replies carry only `base_resp`, and some success replies
/// carry `"choices": null`.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    choices: Option<Vec<Choice>>,
    base_resp: Option<BaseResp>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BaseResp {
    #[serde(default)]
    status_code: i64,
    status_msg: Option<String>,
}

impl BaseResp {
    fn message(&self) -> Option<&str> {
        self.status_msg.as_deref().filter(|m| !m.is_empty())
    }
}

/// HTTP client for the MiniMax chat-completion API.
///
/// Configuration is read once, at construction:
///
/// | Variable           | Default                  | Purpose               |
/// |--------------------|--------------------------|-----------------------|
/// | `MINIMAX_API_KEY`  | none                     | Bearer credential     |
/// | `MINIMAX_BASE_URL` | `https://api.minimax.io` | Provider or test fake |
/// | `MINIMAX_MODEL`    | `MiniMax-M2.1`           | Model identifier      |
///
/// A missing key does not prevent construction; each [`ChatClient::complete`]
/// call then fails with a configuration error without touching the network.
/// Requests use reqwest's default timeouts and are never retried.
pub struct MiniMaxClient {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
}

impl MiniMaxClient {
    pub fn new(
        api_key: Option<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), COMPLETIONS_PATH);
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            model: model.into(),
            url,
        }
    }

    pub fn from_env() -> Self {
        let key = std::env::var(API_KEY_VAR).ok();
        let base = std::env::var("MINIMAX_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model =
            std::env::var("MINIMAX_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self::new(key, model, base)
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ChatClient for MiniMaxClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, DomainError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| DomainError::configuration(format!("{API_KEY_VAR} not configured")))?;

        let request = CompletionRequest::new(&self.model, system, user);
        debug!("MiniMaxClient: POST {} (model {})", self.url, self.model);

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::transport(format!("Completion request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("MiniMaxClient: API returned {status}: {body}");
            return Err(DomainError::upstream(error_message(status, &body)));
        }

        let body = response.text().await.map_err(|e| {
            DomainError::transport(format!("Failed to read completion response: {e}"))
        })?;

        extract_content(&body)
    }
}

/// Message for a non-success reply: the provider's `status_msg` when it sent
/// one, otherwise the HTTP reason phrase.
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ApiResponse>(body)
        .ok()
        .and_then(|r| r.base_resp)
        .and_then(|b| b.message().map(str::to_string))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or(status.as_str())
                .to_string()
        })
}

/// Pull the first choice's text out of a success reply.
fn extract_content(body: &str) -> Result<String, DomainError> {
    let api_response: ApiResponse = serde_json::from_str(body).map_err(|e| {
        warn!("MiniMaxClient: unexpected response body ({e}): {body}");
        DomainError::upstream("Unexpected response from completion provider")
    })?;

    if let Some(base) = api_response.base_resp.as_ref() {
        if base.status_code != 0 {
            warn!("MiniMaxClient: provider reported status {}: {body}", base.status_code);
            return Err(DomainError::upstream(
                base.message()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Provider status code {}", base.status_code)),
            ));
        }
    }

    api_response
        .choices
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .ok_or_else(|| DomainError::upstream("Completion provider returned no choices"))
}
