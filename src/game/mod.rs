pub mod engine;

pub use engine::{Engine, GameError, GameStatus, StatusSnapshot};
