//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Chat completion (MiniMax over HTTP, plus an offline mock)
//! - HTTP API and frontends (axum)
//! - CLI routing and terminal playback (crossterm)

pub mod adapter;
pub mod api;
pub mod terminal;

pub use adapter::*;
pub use api::{Container, ContainerConfig};
