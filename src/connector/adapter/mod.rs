mod minimax_client;
mod mock_chat_client;

pub use minimax_client::*;
pub use mock_chat_client::*;
