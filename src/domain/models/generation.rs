use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Frame counts the animator prompt asks for. Nothing downstream relies on
/// it; results outside this range are only logged.
pub const EXPECTED_FRAME_COUNT: RangeInclusive<usize> = 10..=15;

/// Frames of an ASCII animation, in playback order. May be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationResult {
    frames: Vec<String>,
}

impl AnimationResult {
    pub fn new(frames: Vec<String>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn into_frames(self) -> Vec<String> {
        self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn has_expected_length(&self) -> bool {
        EXPECTED_FRAME_COUNT.contains(&self.frames.len())
    }
}

/// A generated, self-contained HTML document. Untrusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiResult {
    html: String,
}

impl UiResult {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }
}

/// Steps a generation request moves through. Any step can short-circuit to
/// `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStage {
    Received,
    CredentialChecked,
    Requested,
    ResponseReceived,
    Sanitized,
    Responded,
    Failed,
}

impl GenerationStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationStage::Received => "received",
            GenerationStage::CredentialChecked => "credential_checked",
            GenerationStage::Requested => "requested",
            GenerationStage::ResponseReceived => "response_received",
            GenerationStage::Sanitized => "sanitized",
            GenerationStage::Responded => "responded",
            GenerationStage::Failed => "failed",
        }
    }
}

impl fmt::Display for GenerationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animation_serializes_as_frames_object() {
        let result = AnimationResult::new(vec!["f1".into(), "f2".into()]);
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"frames":["f1","f2"]}"#
        );
    }

    #[test]
    fn animation_requires_frames_field() {
        assert!(serde_json::from_str::<AnimationResult>(r#"{"frame":[]}"#).is_err());
        let empty: AnimationResult = serde_json::from_str(r#"{"frames":[]}"#).unwrap();
        assert!(empty.is_empty());
        assert!(!empty.has_expected_length());
    }

    #[test]
    fn ui_serializes_as_html_object() {
        let result = UiResult::new("<div>Hi</div>");
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"html":"<div>Hi</div>"}"#
        );
    }
}
