use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use super::super::Container;

pub struct UiController<'a> {
    container: &'a Container,
}

impl<'a> UiController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Generate a component and return its markup, or write it to `output`
    /// and return a short confirmation instead.
    pub async fn generate(&self, prompt: String, output: Option<PathBuf>) -> Result<String> {
        if prompt.trim().is_empty() {
            bail!("prompt must not be empty");
        }

        let use_case = self.container.ui_use_case();
        let ui = use_case.execute(&prompt).await?;

        match output {
            Some(path) => {
                tokio::fs::write(&path, ui.html())
                    .await
                    .with_context(|| format!("failed to write {}", path.display()))?;
                Ok(format!(
                    "Wrote {} bytes to {}. Open it in a browser to preview.",
                    ui.html().len(),
                    path.display()
                ))
            }
            None => Ok(ui.into_html()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tempfile::tempdir;

    use super::*;
    use crate::MockChatClient;

    #[tokio::test]
    async fn returns_markup_without_output_path() {
        let client = Arc::new(MockChatClient::with_reply("```html\n<div>Hi</div>\n```"));
        let container = Container::with_chat_client(client);

        let html = UiController::new(&container)
            .generate("login form".to_string(), None)
            .await
            .unwrap();

        assert_eq!(html, "<div>Hi</div>");
    }

    #[tokio::test]
    async fn writes_markup_to_output_path() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("component.html");
        let client = Arc::new(MockChatClient::with_reply("<div>Hi</div>"));
        let container = Container::with_chat_client(client);

        let message = UiController::new(&container)
            .generate("login form".to_string(), Some(path.clone()))
            .await
            .unwrap();

        assert!(message.starts_with("Wrote 13 bytes"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<div>Hi</div>");
    }
}
