use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use tracing::debug;

use crate::application::ChatClient;
use crate::domain::{DomainError, Generator};

type Responder = dyn Fn(&str, &str) -> Result<String, DomainError> + Send + Sync;

/// One `complete` call as the mock saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub system: String,
    pub user: String,
}

/// A [`ChatClient`] that answers from a closure and records every call.
///
/// Used by tests and by the `--mock` flag for running without a provider.
pub struct MockChatClient {
    responder: Box<Responder>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockChatClient {
    pub fn new(
        responder: impl Fn(&str, &str) -> Result<String, DomainError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            responder: Box::new(responder),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_reply(reply: impl Into<String>) -> Self {
        let reply = reply.into();
        Self::new(move |_, _| Ok(reply.clone()))
    }

    pub fn with_error(error: impl Fn() -> DomainError + Send + Sync + 'static) -> Self {
        Self::new(move |_, _| Err(error()))
    }

    /// Canned answers for both generators, no network involved.
    pub fn offline() -> Self {
        Self::new(|system, user| {
            if system == Generator::Ascii.system_prompt() {
                Ok(demo_animation())
            } else {
                Ok(demo_page(user))
            }
        })
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, DomainError> {
        debug!("MockChatClient: answering {user:?}");
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedCall {
                system: system.to_string(),
                user: user.to_string(),
            });
        (self.responder)(system, user)
    }
}

/// A ball bouncing across a small box, fenced the way models tend to answer.
fn demo_animation() -> String {
    const WIDTH: usize = 16;
    const FRAMES: usize = 12;

    let border = format!("+{}+", "-".repeat(WIDTH));
    let frames: Vec<String> = (0..FRAMES)
        .map(|i| {
            let half = FRAMES / 2;
            let pos = if i < half { i } else { FRAMES - i };
            let col = pos * (WIDTH - 1) / half;
            let mut row = vec![' '; WIDTH];
            row[col] = 'o';
            let row: String = row.into_iter().collect();
            format!("{border}\n|{row}|\n{border}")
        })
        .collect();

    let json = serde_json::json!({ "frames": frames });
    format!("```json\n{json}\n```")
}

fn demo_page(user: &str) -> String {
    let escaped = user
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<style>\n\
         body {{ margin: 0; min-height: 100vh; display: grid; place-items: center; \
         background: #0b0b12; color: #e5e5f0; font-family: system-ui, sans-serif; }}\n\
         .card {{ padding: 2rem 3rem; border-radius: 1rem; \
         background: linear-gradient(135deg, #7c3aed, #db2777); }}\n\
         </style>\n</head>\n<body>\n<div class=\"card\">{escaped}</div>\n</body>\n</html>"
    )
}
