//! Turns raw model text into payloads the endpoints can return.
//!
//! Models are told not to wrap their answer in markdown code fences but
//! frequently do anyway, so every response goes through [`strip_fence`]
//! before anything else looks at it.

use tracing::warn;

use crate::domain::{AnimationResult, DomainError, Generator, UiResult};

const FENCE: &str = "```";

/// Client-facing message for unparseable animation output. The raw text is
/// only ever logged.
pub const MALFORMED_OUTPUT_MESSAGE: &str = "Failed to parse model output";

/// Which fenced block a payload may be wrapped in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fence {
    Json,
    Html,
}

impl Fence {
    pub fn tag(&self) -> &'static str {
        match self {
            Fence::Json => "json",
            Fence::Html => "html",
        }
    }
}

/// Remove a surrounding ```` ```<tag> ```` / ```` ``` ```` pair and trim.
///
/// The opening marker may carry the matching tag (any case) or no tag at
/// all. An opener with some other tag is not ours, so the text is returned
/// trimmed but otherwise untouched. Unfenced text comes back trimmed.
pub fn strip_fence(raw: &str, fence: Fence) -> &str {
    let trimmed = raw.trim();

    let body = match trimmed.strip_prefix(FENCE) {
        Some(after_ticks) => {
            let tag_len = after_ticks
                .find(|c: char| !c.is_ascii_alphanumeric())
                .unwrap_or(after_ticks.len());
            let tag = &after_ticks[..tag_len];
            if !tag.is_empty() && !tag.eq_ignore_ascii_case(fence.tag()) {
                return trimmed;
            }
            &after_ticks[tag_len..]
        }
        None => trimmed,
    };

    body.strip_suffix(FENCE).unwrap_or(body).trim()
}

/// Strip fencing and parse the result as an [`AnimationResult`].
pub fn parse_animation(raw: &str) -> Result<AnimationResult, DomainError> {
    let cleaned = strip_fence(raw, Generator::Ascii.fence());
    serde_json::from_str(cleaned).map_err(|e| {
        warn!("Failed to parse model output as animation JSON ({e}). Raw output:\n{raw}");
        DomainError::malformed_output(MALFORMED_OUTPUT_MESSAGE)
    })
}

/// Strip fencing from generated markup. The markup itself is not inspected
/// or cleaned; isolation is the renderer's job.
pub fn clean_html(raw: &str) -> UiResult {
    UiResult::new(strip_fence(raw, Generator::Ui.fence()))
}
