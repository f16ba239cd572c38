//! The rules engine: hands, the snake, move legality, the computer
//! heuristic, and win/draw detection.

pub mod error;
pub mod game;
pub mod hand;
pub mod heuristic;
pub mod snake;

pub use error::GameError;
pub use game::{DominoEngine, GameStatus, Move, DEAL_SIZE};
pub use hand::Hand;
pub use snake::Snake;
