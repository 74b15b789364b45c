//! # Domain Layer
//!
//! Generation models, the error taxonomy, and the pure services
//! (fence sanitizer, playback state) that the other layers build on.
//! This layer is independent of external frameworks and infrastructure.

pub mod error;
pub mod models;
pub mod services;

pub use error::*;
pub use models::*;
pub use services::*;
