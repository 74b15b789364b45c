mod completion;
mod generation;
mod generator;
mod prompt;

pub use completion::*;
pub use generation::*;
pub use generator::*;
pub use prompt::*;
