use std::sync::Arc;

use tracing::debug;

use crate::application::ChatClient;
use crate::domain::{clean_html, DomainError, GenerationStage, Generator, UiResult};

/// Prompt in, self-contained HTML document out.
pub struct GenerateUiUseCase {
    chat_client: Arc<dyn ChatClient>,
}

impl GenerateUiUseCase {
    pub fn new(chat_client: Arc<dyn ChatClient>) -> Self {
        Self { chat_client }
    }

    pub async fn execute(&self, prompt: &str) -> Result<UiResult, DomainError> {
        let generator = Generator::Ui;
        debug!(%generator, stage = %GenerationStage::Received, "Generating UI component");

        debug!(%generator, stage = %GenerationStage::Requested, "Requesting completion");
        let raw = self
            .chat_client
            .complete(generator.system_prompt(), &generator.user_prompt(prompt))
            .await?;
        debug!(%generator, stage = %GenerationStage::ResponseReceived, bytes = raw.len(), "Received model response");

        let ui = clean_html(&raw);
        debug!(%generator, stage = %GenerationStage::Sanitized, bytes = ui.html().len(), "Cleaned markup");

        Ok(ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::MockChatClient;

    #[tokio::test]
    async fn unfenced_html_is_returned_unchanged() {
        let client = Arc::new(MockChatClient::with_reply("<div>Hi</div>"));
        let use_case = GenerateUiUseCase::new(client.clone());

        let result = use_case.execute("login form").await.unwrap();

        assert_eq!(result.html(), "<div>Hi</div>");
        assert_eq!(client.calls()[0].user, "Create a UI component for: login form");
    }

    #[tokio::test]
    async fn fenced_html_is_unwrapped() {
        let client = Arc::new(MockChatClient::with_reply(
            "```html\n<!DOCTYPE html><html></html>\n```\n",
        ));
        let use_case = GenerateUiUseCase::new(client);

        let result = use_case.execute("card").await.unwrap();
        assert_eq!(result.html(), "<!DOCTYPE html><html></html>");
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn logs_each_stage_in_order() {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let client = Arc::new(MockChatClient::with_reply("<div>Hi</div>"));
        GenerateUiUseCase::new(client).execute("card").await.unwrap();

        let logs = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        let positions: Vec<usize> = [
            "stage=received",
            "stage=requested",
            "stage=response_received",
            "stage=sanitized",
        ]
        .iter()
        .map(|stage| logs.find(stage).unwrap_or_else(|| panic!("{stage} missing:\n{logs}")))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{logs}");
    }
}
