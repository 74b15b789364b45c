pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    AnimationPlayer, ChatClient, GenerateAnimationUseCase, GenerateUiUseCase, FRAME_INTERVAL,
};

pub use cli::Commands;

pub use connector::{Container, ContainerConfig, MiniMaxClient, MockChatClient, RecordedCall};

pub use domain::{
    AnimationResult, CompletionRequest, DomainError, Fence, GenerationStage, Generator, Playback,
    PlaybackSnapshot, PromptRequest, UiResult,
};
