mod config;
mod error;
mod game;
mod player;
pub use config::*;
pub use error::*;
pub use game::*;
pub use player::*;
