//! The board chain.
//!
//! The snake is the single shared zone of the game. It starts as one
//! double and only ever grows, one piece at a time, at either end. The
//! chain invariant: for every adjacent pair, the touching pips are equal.
//!
//! Pieces arrive here already oriented (the engine flips them against the
//! exposed end before placement); the snake asserts the invariant rather
//! than re-deriving it.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::Piece;

/// Snake renders at most this many pieces before truncating.
const DISPLAY_LIMIT: usize = 6;

/// The chain of played pieces.
///
/// Backed by `im::Vector`, whose O(1) `push_front`/`push_back` is exactly
/// the snake's growth pattern.
///
/// ## Example
///
/// ```
/// use rust_dominoes::core::Piece;
/// use rust_dominoes::engine::Snake;
///
/// let mut snake = Snake::new(Piece::new(4, 4));
/// snake.push_tail(Piece::new(4, 2));
///
/// assert_eq!(snake.head_value(), 4);
/// assert_eq!(snake.tail_value(), 2);
/// assert_eq!(snake.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    chain: Vector<Piece>,
}

impl Snake {
    /// Start a snake from its opening piece.
    #[must_use]
    pub fn new(opening: Piece) -> Self {
        let mut chain = Vector::new();
        chain.push_back(opening);
        Self { chain }
    }

    /// Build a snake from an already-valid chain.
    ///
    /// Intended for scripted scenarios and tests.
    ///
    /// ## Panics
    ///
    /// Panics if the chain is empty or any adjacent pair's touching pips
    /// differ.
    #[must_use]
    pub fn from_pieces(pieces: impl IntoIterator<Item = Piece>) -> Self {
        let chain: Vector<Piece> = pieces.into_iter().collect();
        assert!(!chain.is_empty(), "snake cannot be empty");

        for (left, right) in chain.iter().zip(chain.iter().skip(1)) {
            assert_eq!(
                left.second(),
                right.first(),
                "broken chain between {left} and {right}"
            );
        }

        Self { chain }
    }

    /// Number of pieces in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// The exposed pip at the head (left) end.
    #[must_use]
    pub fn head_value(&self) -> u8 {
        self.chain.front().expect("snake is never empty").first()
    }

    /// The exposed pip at the tail (right) end.
    #[must_use]
    pub fn tail_value(&self) -> u8 {
        self.chain.back().expect("snake is never empty").second()
    }

    /// Append an oriented piece at the tail.
    ///
    /// ## Panics
    ///
    /// Panics if the piece's first pip does not equal the tail value.
    pub fn push_tail(&mut self, piece: Piece) {
        assert_eq!(
            piece.first(),
            self.tail_value(),
            "piece {piece} not oriented for the tail"
        );
        self.chain.push_back(piece);
    }

    /// Prepend an oriented piece at the head.
    ///
    /// ## Panics
    ///
    /// Panics if the piece's second pip does not equal the head value.
    pub fn push_head(&mut self, piece: Piece) {
        assert_eq!(
            piece.second(),
            self.head_value(),
            "piece {piece} not oriented for the head"
        );
        self.chain.push_front(piece);
    }

    /// Total occurrences of a pip value across the chain, counting both
    /// ends of every piece. Drives draw detection.
    #[must_use]
    pub fn pip_count(&self, pip: u8) -> usize {
        self.chain
            .iter()
            .map(|piece| {
                let (a, b) = piece.pips();
                usize::from(a == pip) + usize::from(b == pip)
            })
            .sum()
    }

    /// Iterate over the chain from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = Piece> + '_ {
        self.chain.iter().copied()
    }
}

/// Renders the chain without separators, truncated to the first and last
/// three pieces with an ellipsis once it outgrows six.
impl std::fmt::Display for Snake {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.chain.len() > DISPLAY_LIMIT {
            for piece in self.chain.iter().take(3) {
                write!(f, "{piece}")?;
            }
            write!(f, "...")?;
            for piece in self.chain.iter().skip(self.chain.len() - 3) {
                write!(f, "{piece}")?;
            }
        } else {
            for piece in self.chain.iter() {
                write!(f, "{piece}")?;
            }
        }
        Ok(())
    }
}
