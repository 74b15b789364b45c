//! Pure domain services: output sanitizing and playback state.

mod playback;
mod sanitizer;

pub use playback::*;
pub use sanitizer::*;
