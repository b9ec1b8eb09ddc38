pub mod board;
pub mod game;
pub mod logger;
pub mod setup;
pub mod types;

pub use board::*;
pub use game::*;
pub use logger::GameLogger;
pub use setup::*;
pub use types::*;
