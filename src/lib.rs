//! # rust-dominoes
//!
//! A console dominoes game: human versus a simple heuristic computer
//! opponent.
//!
//! ## Rules Summary
//!
//! Both sides are dealt 7 pieces from a shuffled double-six set; the
//! highest double held opens the board chain (the "snake") and its owner
//! moves second. A move extends the snake at either end with a piece
//! matching the exposed pip, or draws from the stock when nothing fits.
//! First empty hand wins; the game is drawn when the snake's ends meet on
//! a value that is fully spent on the board.
//!
//! ## Architecture
//!
//! - **Deterministic RNG**: every random event flows through a seedable
//!   ChaCha8 generator, so a seed reproduces a whole game.
//! - **No partial mutation**: rejected moves leave the engine untouched;
//!   the console loop just re-prompts.
//! - **Testable I/O**: the console loop is generic over `BufRead`/`Write`
//!   and runs against string buffers in tests.
//!
//! ## Modules
//!
//! - `core`: pieces, seats, RNG
//! - `engine`: hands, the snake, move legality, the computer heuristic,
//!   win/draw detection
//! - `cli`: board rendering and the interactive turn loop

pub mod cli;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{GameRng, Piece, Seat, SeatMap, MAX_PIP};

pub use crate::engine::{DominoEngine, GameError, GameStatus, Hand, Move, Snake, DEAL_SIZE};
