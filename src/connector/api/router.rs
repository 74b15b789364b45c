use anyhow::{bail, Result};

use crate::Commands;

use super::container::Container;
use super::controller::{AsciiController, UiController};

/// Dispatches the one-shot CLI commands whose result is plain text.
pub struct Router<'a> {
    ascii_controller: AsciiController<'a>,
    ui_controller: UiController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            ascii_controller: AsciiController::new(container),
            ui_controller: UiController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Ascii { prompt, print: true } => self.ascii_controller.print(prompt).await,
            Commands::Ui { prompt, output } => self.ui_controller.generate(prompt, output).await,
            Commands::Ascii { print: false, .. } | Commands::Serve { .. } => {
                bail!("interactive command must be handled by the caller")
            }
        }
    }
}
