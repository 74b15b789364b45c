use anyhow::{bail, Result};

use crate::AnimationResult;

use super::super::Container;

pub struct AsciiController<'a> {
    container: &'a Container,
}

impl<'a> AsciiController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn generate(&self, prompt: String) -> Result<AnimationResult> {
        if prompt.trim().is_empty() {
            bail!("prompt must not be empty");
        }
        let use_case = self.container.animation_use_case();
        Ok(use_case.execute(&prompt).await?)
    }

    /// Generate and render every frame one after another, for piping or
    /// terminals that can't host the player.
    pub async fn print(&self, prompt: String) -> Result<String> {
        let animation = self.generate(prompt).await?;
        Ok(self.format_frames(&animation))
    }

    fn format_frames(&self, animation: &AnimationResult) -> String {
        if animation.is_empty() {
            return "The model returned no frames.".to_string();
        }

        let total = animation.len();
        animation
            .frames()
            .iter()
            .enumerate()
            .map(|(i, frame)| format!("--- FRAME {}/{} ---\n{}\n", i + 1, total, frame))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
