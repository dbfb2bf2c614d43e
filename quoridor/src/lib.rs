pub use board::*;
pub use errors::*;
pub use notation::*;
pub use player::*;
pub use protocol::*;
pub use rules::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod errors;
mod notation;
mod player;
mod protocol;
mod rules;
mod visualization;
