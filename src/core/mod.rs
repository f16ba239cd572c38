//! Core building blocks: pieces, seats, RNG.
//!
//! These types carry no game rules of their own; the rules live in
//! [`crate::engine`].

pub mod piece;
pub mod rng;
pub mod seat;

pub use piece::{Piece, MAX_PIP};
pub use rng::GameRng;
pub use seat::{Seat, SeatMap};
