use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::ChatClient;
use crate::connector::adapter::{MiniMaxClient, MockChatClient, API_KEY_VAR};
use crate::{GenerateAnimationUseCase, GenerateUiUseCase};

pub struct ContainerConfig {
    /// Answer every generation from [`MockChatClient::offline`] instead of
    /// calling the provider.
    pub mock: bool,
}

/// Wires the chat client into the generation use cases.
///
/// Built once at startup and shared read-only between requests.
pub struct Container {
    chat_client: Arc<dyn ChatClient>,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let chat_client: Arc<dyn ChatClient> = if config.mock {
            debug!("Using offline mock chat client");
            Arc::new(MockChatClient::offline())
        } else {
            let client = MiniMaxClient::from_env();
            if client.has_credential() {
                debug!("Using MiniMax at {} with model {}", client.url(), client.model());
            } else {
                warn!("{API_KEY_VAR} is not set; generation requests will fail until it is configured");
            }
            Arc::new(client)
        };

        Self { chat_client }
    }

    /// Build around an existing client, e.g. one pointed at a test server.
    pub fn with_chat_client(chat_client: Arc<dyn ChatClient>) -> Self {
        Self { chat_client }
    }

    pub fn animation_use_case(&self) -> GenerateAnimationUseCase {
        GenerateAnimationUseCase::new(self.chat_client.clone())
    }

    pub fn ui_use_case(&self) -> GenerateUiUseCase {
        GenerateUiUseCase::new(self.chat_client.clone())
    }
}
