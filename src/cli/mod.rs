//! Console front-end.
//!
//! Renders the board, reads move commands, and drives the turn loop. The
//! loop is generic over [`BufRead`]/[`Write`] so whole games can run in
//! tests against string buffers; the binary wires up stdin/stdout.
//!
//! ## Command protocol
//!
//! One integer per human turn: `0` draws from the stock (or passes),
//! positive `k` plays hand piece `k` on the right end of the snake,
//! negative `k` plays it on the left end. Before each computer turn the
//! loop waits for a confirmation line (Enter).

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::core::Seat;
use crate::engine::{DominoEngine, GameError, GameStatus, Move};

const SEPARATOR_WIDTH: usize = 70;

const INVALID_INPUT: &str = "Invalid input. Please try again.";
const ILLEGAL_MOVE: &str = "Illegal move. Please try again.";

/// The status banner shown under the board.
#[must_use]
pub fn status_line(status: GameStatus) -> &'static str {
    match status {
        GameStatus::PlayerMove => {
            "Status: It's your turn to make a move. Enter your command."
        }
        GameStatus::ComputerMove => {
            "Status: Computer is about to make a move. Press Enter to continue..."
        }
        GameStatus::PlayerWin => "Status: The game is over. You won!",
        GameStatus::ComputerWin => "Status: The game is over. The computer won!",
        GameStatus::Draw => "Status: The game is over. It's a draw!",
    }
}

/// Render the full board block: separator, counters, snake, the human's
/// indexed hand, and the status banner.
#[must_use]
pub fn render(engine: &DominoEngine) -> String {
    let mut out = String::new();

    out.push_str(&"=".repeat(SEPARATOR_WIDTH));
    out.push('\n');
    out.push_str(&format!("Stock size: {}\n", engine.stock_size()));
    out.push_str(&format!(
        "Computer pieces: {}\n\n",
        engine.hand(Seat::Computer).len()
    ));
    out.push_str(&format!("{}\n\n", engine.snake()));
    out.push_str("Your pieces:\n");
    for (i, piece) in engine.hand(Seat::Human).iter().enumerate() {
        out.push_str(&format!("{}:{piece}\n", i + 1));
    }
    out.push('\n');
    out.push_str(status_line(engine.status()));
    out.push('\n');

    out
}

/// Parse one line of move input. `None` for anything but an integer.
#[must_use]
pub fn parse_command(line: &str) -> Option<i32> {
    line.trim().parse().ok()
}

/// Drive a game to completion.
///
/// Renders the board each round, acts for whichever seat the status
/// names, and stops once a terminal status has been rendered. End of
/// input ends the game early without error.
pub fn run<R, W>(engine: &mut DominoEngine, mut input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{}", render(engine))?;

        match engine.status().turn_seat() {
            None => break,
            Some(Seat::Computer) => {
                // Confirmation line (Enter) before the computer acts.
                if read_line(&mut input)?.is_none() {
                    break;
                }
                engine.computer_turn();
                engine.advance_turn();
            }
            Some(Seat::Human) => {
                if !human_turn(engine, &mut input, &mut output)? {
                    break;
                }
                engine.advance_turn();
            }
        }

        engine.check_winner();
    }

    debug!(status = ?engine.status(), "game over");
    output.flush()
}

/// Prompt until a move applies. Returns `false` on end of input.
fn human_turn<R, W>(engine: &mut DominoEngine, input: &mut R, output: &mut W) -> io::Result<bool>
where
    R: BufRead,
    W: Write,
{
    loop {
        let Some(line) = read_line(input)? else {
            return Ok(false);
        };

        let Some(command) = parse_command(&line) else {
            writeln!(output, "{INVALID_INPUT}")?;
            continue;
        };

        if command.unsigned_abs() as usize > engine.hand(Seat::Human).len() {
            writeln!(output, "{INVALID_INPUT}")?;
            continue;
        }

        match engine.apply_move(Seat::Human, Move::from_command(command)) {
            Ok(()) => return Ok(true),
            Err(GameError::IllegalMove) => writeln!(output, "{ILLEGAL_MOVE}")?,
            Err(GameError::InvalidIndex { .. }) => writeln!(output, "{INVALID_INPUT}")?,
        }
    }
}

/// One line of input; `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}
