//! Engine errors.

use thiserror::Error;

/// Errors returned by the rules engine.
///
/// Both variants are recoverable: the interactive loop re-prompts and the
/// computer player just tries its next candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The chosen piece matches neither exposed end of the snake.
    #[error("piece does not match the open end of the snake")]
    IllegalMove,

    /// The move named a hand position that does not exist.
    ///
    /// The console loop screens indices before calling the engine, so this
    /// only surfaces for programmatic callers.
    #[error("hand index {index} out of range for a hand of {hand_size}")]
    InvalidIndex {
        /// The 0-based index that was requested.
        index: usize,
        /// Size of the hand at the time of the call.
        hand_size: usize,
    },
}
