mod animation_player;
mod generate_animation;
mod generate_ui;

pub use animation_player::*;
pub use generate_animation::*;
pub use generate_ui::*;
