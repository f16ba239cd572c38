//! The game engine: setup, move application, turn flow, outcome detection.
//!
//! ## Turn protocol
//!
//! The driving loop (see [`crate::cli`]) repeats:
//!
//! 1. act for the seat named by [`DominoEngine::status`] — either
//!    [`DominoEngine::apply_move`] for the human or
//!    [`DominoEngine::computer_turn`];
//! 2. [`DominoEngine::advance_turn`] to hand the move to the other seat;
//! 3. [`DominoEngine::check_winner`] to settle wins and draws.
//!
//! `apply_move` itself never touches the status, so a rejected human move
//! leaves the engine exactly where it was and the loop re-prompts.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameRng, Piece, Seat, SeatMap};
use crate::engine::error::GameError;
use crate::engine::hand::Hand;
use crate::engine::heuristic;
use crate::engine::snake::Snake;

/// Pieces dealt to each seat at setup.
pub const DEAL_SIZE: usize = 7;

/// The single process-wide state driving the turn loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for the human's command.
    PlayerMove,
    /// The computer moves next.
    ComputerMove,
    /// Terminal: the human emptied their hand.
    PlayerWin,
    /// Terminal: the computer emptied its hand.
    ComputerWin,
    /// Terminal: the snake's ends meet on an exhausted value.
    Draw,
}

impl GameStatus {
    /// Has the game ended?
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::PlayerWin | GameStatus::ComputerWin | GameStatus::Draw
        )
    }

    /// The seat to act, if the game is still running.
    #[must_use]
    pub const fn turn_seat(self) -> Option<Seat> {
        match self {
            GameStatus::PlayerMove => Some(Seat::Human),
            GameStatus::ComputerMove => Some(Seat::Computer),
            _ => None,
        }
    }
}

/// A single move.
///
/// The console protocol is an integer: `0` draws (or passes on an empty
/// stock), positive `k` plays hand piece `k` (1-based) at the tail,
/// negative `k` plays it at the head. [`Move::from_command`] performs that
/// mapping; inside the engine indices are 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    /// Draw from the stock, or pass when it is empty.
    Draw,
    /// Play the piece at this 0-based hand index onto the tail end.
    Tail(usize),
    /// Play the piece at this 0-based hand index onto the head end.
    Head(usize),
}

impl Move {
    /// Decode the console integer protocol.
    ///
    /// ```
    /// use rust_dominoes::engine::Move;
    ///
    /// assert_eq!(Move::from_command(0), Move::Draw);
    /// assert_eq!(Move::from_command(3), Move::Tail(2));
    /// assert_eq!(Move::from_command(-1), Move::Head(0));
    /// ```
    #[must_use]
    pub fn from_command(command: i32) -> Self {
        if command == 0 {
            Move::Draw
        } else if command > 0 {
            Move::Tail(command as usize - 1)
        } else {
            Move::Head(command.unsigned_abs() as usize - 1)
        }
    }
}

/// The dominoes engine: stock, hands, snake, and turn state.
///
/// ## Example
///
/// ```
/// use rust_dominoes::engine::{DominoEngine, DEAL_SIZE};
/// use rust_dominoes::core::Seat;
///
/// let engine = DominoEngine::new(42);
///
/// // One hand lost its opening double to the snake.
/// let held = engine.hand(Seat::Human).len() + engine.hand(Seat::Computer).len();
/// assert_eq!(held, 2 * DEAL_SIZE - 1);
/// assert_eq!(engine.snake().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct DominoEngine {
    stock: Vec<Piece>,
    hands: SeatMap<Hand>,
    snake: Snake,
    status: GameStatus,
    rng: GameRng,
}

impl DominoEngine {
    /// Set up a game from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// Set up a game from a prepared RNG.
    ///
    /// Shuffles the full set into the stock, deals [`DEAL_SIZE`] pieces to
    /// each seat, and opens the snake with the highest double held. A deal
    /// with no double anywhere is discarded and redone from the shuffle.
    ///
    /// The double's owner moves second: after the double leaves its hand,
    /// the side holding more pieces moves first.
    #[must_use]
    pub fn with_rng(mut rng: GameRng) -> Self {
        loop {
            let mut stock = Piece::full_set();
            rng.shuffle(&mut stock);

            let mut hands: SeatMap<Hand> = SeatMap::default();
            for seat in Seat::both() {
                for _ in 0..DEAL_SIZE {
                    let piece = stock.pop().expect("full set covers both deals");
                    hands[seat].push(piece);
                }
            }

            let Some((owner, index)) = highest_double(&hands) else {
                debug!("no opening double in either hand, reshuffling");
                continue;
            };

            let opening = hands[owner].remove(index);
            let snake = Snake::new(opening);

            let status = if hands[Seat::Computer].len() > hands[Seat::Human].len() {
                GameStatus::ComputerMove
            } else {
                GameStatus::PlayerMove
            };

            debug!(
                seed = rng.seed(),
                %opening,
                %owner,
                ?status,
                "setup complete"
            );

            return Self {
                stock,
                hands,
                snake,
                status,
                rng,
            };
        }
    }

    /// Assemble an engine from explicit parts, for scripted scenarios.
    ///
    /// The snake must already satisfy the chain invariant
    /// (see [`Snake::from_pieces`]).
    #[must_use]
    pub fn from_parts(
        stock: impl IntoIterator<Item = Piece>,
        player_hand: impl IntoIterator<Item = Piece>,
        computer_hand: impl IntoIterator<Item = Piece>,
        snake: Snake,
        status: GameStatus,
        rng: GameRng,
    ) -> Self {
        let mut hands: SeatMap<Hand> = SeatMap::default();
        hands[Seat::Human] = Hand::from_pieces(player_hand);
        hands[Seat::Computer] = Hand::from_pieces(computer_hand);

        Self {
            stock: stock.into_iter().collect(),
            hands,
            snake,
            status,
            rng,
        }
    }

    // === Accessors ===

    /// Current turn/outcome state.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// A seat's hand.
    #[must_use]
    pub fn hand(&self, seat: Seat) -> &Hand {
        &self.hands[seat]
    }

    /// Pieces left in the stock.
    #[must_use]
    pub fn stock_size(&self) -> usize {
        self.stock.len()
    }

    /// The board chain.
    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// The seed this game runs on.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Remaining stock, in order; draws take from the end.
    #[must_use]
    pub fn stock(&self) -> &[Piece] {
        &self.stock
    }

    // === Moves ===

    /// Apply a move for a seat.
    ///
    /// - [`Move::Draw`]: take the top stock piece into the hand; a no-op
    ///   pass when the stock is empty.
    /// - [`Move::Tail`]/[`Move::Head`]: fail with
    ///   [`GameError::IllegalMove`] unless the piece carries the exposed
    ///   end's pip; otherwise orient it and extend the snake.
    ///
    /// No state changes on any error path. The turn status is not touched;
    /// callers alternate it via [`DominoEngine::advance_turn`].
    pub fn apply_move(&mut self, seat: Seat, mv: Move) -> Result<(), GameError> {
        match mv {
            Move::Draw => {
                // Stock was shuffled at setup, so the top piece is a
                // uniformly random draw. Empty stock degrades to a pass.
                if let Some(piece) = self.stock.pop() {
                    self.hands[seat].push(piece);
                }
                Ok(())
            }
            Move::Tail(index) => {
                let piece = self.hand_piece(seat, index)?;
                let tail = self.snake.tail_value();
                if !piece.has(tail) {
                    return Err(GameError::IllegalMove);
                }

                let oriented = if piece.first() == tail {
                    piece
                } else {
                    piece.flipped()
                };
                self.hands[seat].remove(index);
                self.snake.push_tail(oriented);
                Ok(())
            }
            Move::Head(index) => {
                let piece = self.hand_piece(seat, index)?;
                let head = self.snake.head_value();
                if !piece.has(head) {
                    return Err(GameError::IllegalMove);
                }

                let oriented = if piece.second() == head {
                    piece
                } else {
                    piece.flipped()
                };
                self.hands[seat].remove(index);
                self.snake.push_head(oriented);
                Ok(())
            }
        }
    }

    /// Run the computer's turn and return the move it made.
    ///
    /// Candidates are ranked by pip-frequency score (see
    /// [`crate::engine::heuristic`]) and tried as tail plays in rank
    /// order; the computer never plays the head. If every candidate is
    /// illegal it draws (or passes).
    pub fn computer_turn(&mut self) -> Move {
        let order = heuristic::rank_by_score(&self.hands[Seat::Computer], &self.snake);

        for index in order {
            let mv = Move::Tail(index);
            if self.apply_move(Seat::Computer, mv).is_ok() {
                debug!(?mv, "computer plays");
                return mv;
            }
        }

        debug!("computer has no playable piece, drawing");
        let mv = Move::Draw;
        self.apply_move(Seat::Computer, mv)
            .expect("draw cannot fail");
        mv
    }

    /// Flip whose move it is. Terminal states are left alone.
    pub fn advance_turn(&mut self) {
        self.status = match self.status {
            GameStatus::PlayerMove => GameStatus::ComputerMove,
            GameStatus::ComputerMove => GameStatus::PlayerMove,
            terminal => terminal,
        };
    }

    /// Settle the outcome after a move.
    ///
    /// An emptied human hand wins for the human, then an emptied computer
    /// hand for the computer. Failing those, the game is drawn when the
    /// snake's two exposed ends carry the same value and that value
    /// appears eight times across the chain (every copy on the board).
    /// Otherwise the status is left unchanged.
    pub fn check_winner(&mut self) {
        if self.hands[Seat::Human].is_empty() {
            self.status = GameStatus::PlayerWin;
        } else if self.hands[Seat::Computer].is_empty() {
            self.status = GameStatus::ComputerWin;
        } else {
            let head = self.snake.head_value();
            if head == self.snake.tail_value() && self.snake.pip_count(head) == 8 {
                self.status = GameStatus::Draw;
            }
        }
    }

    fn hand_piece(&self, seat: Seat, index: usize) -> Result<Piece, GameError> {
        self.hands[seat]
            .get(index)
            .ok_or(GameError::InvalidIndex {
                index,
                hand_size: self.hands[seat].len(),
            })
    }
}

/// Locate the highest double across both hands, human's hand scanned
/// first. Returns the owning seat and the 0-based hand position.
fn highest_double(hands: &SeatMap<Hand>) -> Option<(Seat, usize)> {
    let mut best: Option<(Seat, usize, u8)> = None;

    for seat in Seat::both() {
        for (index, piece) in hands[seat].iter().enumerate() {
            if !piece.is_double() {
                continue;
            }
            if best.map_or(true, |(_, _, value)| piece.first() > value) {
                best = Some((seat, index, piece.first()));
            }
        }
    }

    best.map(|(seat, index, _)| (seat, index))
}
