//! Seat identification and per-seat data storage.
//!
//! ## Seat
//!
//! The two sides of the game: the human player and the computer.
//!
//! ## SeatMap
//!
//! Per-seat data storage with O(1) access, indexable by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// The human at the console.
    Human,
    /// The heuristic opponent.
    Computer,
}

impl Seat {
    /// The other seat.
    ///
    /// ```
    /// use rust_dominoes::core::Seat;
    ///
    /// assert_eq!(Seat::Human.opponent(), Seat::Computer);
    /// assert_eq!(Seat::Computer.opponent(), Seat::Human);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Seat {
        match self {
            Seat::Human => Seat::Computer,
            Seat::Computer => Seat::Human,
        }
    }

    /// Both seats, human first.
    #[must_use]
    pub const fn both() -> [Seat; 2] {
        [Seat::Human, Seat::Computer]
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::Human => write!(f, "player"),
            Seat::Computer => write!(f, "computer"),
        }
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_dominoes::core::{Seat, SeatMap};
///
/// let mut scores: SeatMap<i32> = SeatMap::with_value(0);
///
/// scores[Seat::Human] = 12;
/// assert_eq!(scores[Seat::Human], 12);
/// assert_eq!(scores[Seat::Computer], 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    human: T,
    computer: T,
}

impl<T> SeatMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            human: factory(Seat::Human),
            computer: factory(Seat::Computer),
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            human: value.clone(),
            computer: value,
        }
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        match seat {
            Seat::Human => &self.human,
            Seat::Computer => &self.computer,
        }
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        match seat {
            Seat::Human => &mut self.human,
            Seat::Computer => &mut self.computer,
        }
    }

    /// Iterate over (Seat, &T) pairs, human first.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        [(Seat::Human, &self.human), (Seat::Computer, &self.computer)].into_iter()
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
