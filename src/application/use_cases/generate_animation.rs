use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::ChatClient;
use crate::domain::{
    parse_animation, AnimationResult, DomainError, GenerationStage, Generator,
    EXPECTED_FRAME_COUNT,
};

/// Prompt in, ASCII animation frames out.
pub struct GenerateAnimationUseCase {
    chat_client: Arc<dyn ChatClient>,
}

impl GenerateAnimationUseCase {
    pub fn new(chat_client: Arc<dyn ChatClient>) -> Self {
        Self { chat_client }
    }

    pub async fn execute(&self, prompt: &str) -> Result<AnimationResult, DomainError> {
        let generator = Generator::Ascii;
        debug!(%generator, stage = %GenerationStage::Received, "Generating animation");

        debug!(%generator, stage = %GenerationStage::Requested, "Requesting completion");
        let raw = self
            .chat_client
            .complete(generator.system_prompt(), &generator.user_prompt(prompt))
            .await?;
        debug!(%generator, stage = %GenerationStage::ResponseReceived, bytes = raw.len(), "Received model response");

        let animation = parse_animation(&raw)?;
        if !animation.has_expected_length() {
            warn!(
                "Model returned {} frames, expected {}..={}",
                animation.len(),
                EXPECTED_FRAME_COUNT.start(),
                EXPECTED_FRAME_COUNT.end()
            );
        }
        debug!(%generator, stage = %GenerationStage::Sanitized, frames = animation.len(), "Parsed animation");

        Ok(animation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::MockChatClient;

    #[tokio::test]
    async fn returns_frames_from_fenced_reply() {
        let client = Arc::new(MockChatClient::with_reply(
            "```json\n{\"frames\":[\"f1\",\"f2\",\"f3\"]}\n```",
        ));
        let use_case = GenerateAnimationUseCase::new(client.clone());

        let result = use_case.execute("a bouncing ball").await.unwrap();

        assert_eq!(result.frames(), ["f1", "f2", "f3"]);
        let calls = client.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].system, Generator::Ascii.system_prompt());
        assert_eq!(calls[0].user, "Create an ASCII animation for: a bouncing ball");
    }

    #[tokio::test]
    async fn prose_reply_is_malformed_output() {
        let client = Arc::new(MockChatClient::with_reply("I cannot draw that."));
        let use_case = GenerateAnimationUseCase::new(client);

        let err = use_case.execute("a cat").await.unwrap_err();
        assert!(err.is_malformed_output());
    }

    #[tokio::test]
    async fn client_errors_propagate_unchanged() {
        let client = Arc::new(MockChatClient::with_error(|| {
            DomainError::upstream("rate limited")
        }));
        let use_case = GenerateAnimationUseCase::new(client);

        let err = use_case.execute("a cat").await.unwrap_err();
        assert!(err.is_upstream());
        assert_eq!(err.message(), "rate limited");
    }
}
