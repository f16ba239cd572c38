//! Domino pieces.
//!
//! A piece is an ordered pair of pip values. Orientation matters once a
//! piece is on the board: the chain invariant compares a piece's exposed
//! end against its neighbor, so placement may flip a piece first.
//!
//! ## Usage
//!
//! ```
//! use rust_dominoes::core::Piece;
//!
//! let piece = Piece::new(2, 5);
//! assert!(piece.has(5));
//! assert!(!piece.is_double());
//!
//! // Flipping swaps the ends without changing identity.
//! assert_eq!(piece.flipped().pips(), (5, 2));
//! ```

use serde::{Deserialize, Serialize};

/// Highest pip value on any end of a piece.
pub const MAX_PIP: u8 = 6;

/// A single domino piece: an ordered pair of pips.
///
/// Equality is orientation-sensitive (`[2, 5] != [5, 2]`); callers that
/// need identity regardless of orientation compare via [`Piece::matches`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    ends: [u8; 2],
}

impl Piece {
    /// Create a piece from two pip values.
    ///
    /// ## Panics
    ///
    /// Panics if either pip exceeds [`MAX_PIP`].
    #[must_use]
    pub fn new(first: u8, second: u8) -> Self {
        assert!(first <= MAX_PIP, "pip out of range: {first}");
        assert!(second <= MAX_PIP, "pip out of range: {second}");
        Self {
            ends: [first, second],
        }
    }

    /// Both pips in current orientation.
    #[must_use]
    pub const fn pips(self) -> (u8, u8) {
        (self.ends[0], self.ends[1])
    }

    /// The first pip in current orientation.
    #[must_use]
    pub const fn first(self) -> u8 {
        self.ends[0]
    }

    /// The second pip in current orientation.
    #[must_use]
    pub const fn second(self) -> u8 {
        self.ends[1]
    }

    /// Does either end carry this pip value?
    #[must_use]
    pub const fn has(self, pip: u8) -> bool {
        self.ends[0] == pip || self.ends[1] == pip
    }

    /// Both ends equal.
    #[must_use]
    pub const fn is_double(self) -> bool {
        self.ends[0] == self.ends[1]
    }

    /// Swap the ends in place.
    pub fn flip(&mut self) {
        self.ends.swap(0, 1);
    }

    /// A copy with the ends swapped.
    #[must_use]
    pub const fn flipped(self) -> Self {
        Self {
            ends: [self.ends[1], self.ends[0]],
        }
    }

    /// Same unordered pair, ignoring orientation.
    #[must_use]
    pub const fn matches(self, other: Piece) -> bool {
        (self.ends[0] == other.ends[0] && self.ends[1] == other.ends[1])
            || (self.ends[0] == other.ends[1] && self.ends[1] == other.ends[0])
    }

    /// The complete double-six set: every unordered pair `i <= j`,
    /// each exactly once, in ascending order (28 pieces).
    #[must_use]
    pub fn full_set() -> Vec<Piece> {
        let mut pieces = Vec::with_capacity(28);
        for i in 0..=MAX_PIP {
            for j in i..=MAX_PIP {
                pieces.push(Piece::new(i, j));
            }
        }
        pieces
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.ends[0], self.ends[1])
    }
}
