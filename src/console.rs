//! Line-oriented console front end.
//!
//! Reads one command per line and answers with text, playing the engine's
//! replies as it goes. Any `BufRead`/`Write` pair works, so the same loop
//! serves an interactive terminal and scripted transcripts.
//!
//! ## Commands
//!
//! - `a`..`i` (or `0`..`8`) - Claim that cell
//! - `new` - Abandon the round and start over
//! - `board` - Show the board
//! - `hint` - Suggest the best cell for the human
//! - `score` - Show the tally of finished rounds
//! - `help` - List commands
//! - `quit` / `exit` - Leave
//!
//! Rejected input gets a reply starting with `?`; the session carries on.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::board::Player;
use crate::constants::{CELL_LABELS, DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
use crate::error::{Error, Result};
use crate::game::{Game, Tally};
use crate::rules::Outcome;
use crate::search::analyze;

const BANNER: &str = "XOXOXO";

/// The list of known commands (cell names aside).
const KNOWN_COMMANDS: &[&str] = &["board", "exit", "help", "hint", "new", "quit", "score"];

/// Console session state.
pub struct Console {
    game: Game,
    tally: Tally,
}

impl Default for Console {
    fn default() -> Self {
        Self::new(Player::Human)
    }
}

impl Console {
    /// Create a session where `opener` moves first in every round.
    pub fn new(opener: Player) -> Self {
        Self {
            game: Game::new(opener),
            tally: Tally::default(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        let greeting = self.start_round();
        writeln!(output, "{BANNER}\n\n{greeting}\n")
            .map_err(|e| Error::io("write greeting", e))?;
        output.flush().map_err(|e| Error::io("flush output", e))?;

        for line in input.lines() {
            let line = line.map_err(|e| Error::io("read input", e))?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let command = line.to_lowercase();
            let (success, message) = self.execute(&command);
            let prefix = if success { "" } else { "? " };

            writeln!(output, "{prefix}{message}\n").map_err(|e| Error::io("write reply", e))?;
            output.flush().map_err(|e| Error::io("flush output", e))?;

            if command == "quit" || command == "exit" {
                break;
            }
        }

        Ok(())
    }

    /// Execute one command and return (success, response).
    fn execute(&mut self, command: &str) -> (bool, String) {
        match command {
            "quit" | "exit" => (true, format!("Final score. {}", self.tally)),

            "help" => (
                true,
                format!(
                    "Type a letter from a to i to claim that cell.\nOther commands: {}",
                    KNOWN_COMMANDS.join(", ")
                ),
            ),

            "board" => (true, self.game.board().to_string()),

            "score" => (true, self.tally.to_string()),

            "new" => {
                self.game.reset();
                (true, format!("New round.\n{}", self.start_round()))
            }

            "hint" => {
                if self.game.turn() != Player::Human {
                    return (false, "no hint: it is not your turn".to_string());
                }
                let analysis = analyze(self.game.board(), Player::Human);
                let best = analysis.best;
                (
                    true,
                    format!(
                        "Try {} ({})",
                        CELL_LABELS[best.index],
                        describe_score(best.score)
                    ),
                )
            }

            _ => match self.game.play_human(command) {
                Ok(outcome) => {
                    let board = self.game.board().to_string();
                    let next = if outcome.is_over() {
                        self.finish_round(outcome)
                    } else {
                        self.computer_turn()
                    };
                    (true, format!("{board}\n\n{next}"))
                }
                Err(e @ Error::InvalidCell { .. }) => {
                    (false, format!("{e}; type 'help' for commands"))
                }
                Err(e) => (false, e.to_string()),
            },
        }
    }

    /// Text that opens a round: the engine's first move if it opens, or
    /// the empty board otherwise.
    fn start_round(&mut self) -> String {
        if self.game.turn() == Player::Computer {
            self.computer_turn()
        } else {
            self.game.board().to_string()
        }
    }

    fn computer_turn(&mut self) -> String {
        match self.game.play_computer() {
            Ok((mv, outcome)) => {
                let played = format!(
                    "{} plays {}\n{}",
                    Player::Computer,
                    CELL_LABELS[mv.index],
                    self.game.board()
                );
                if outcome.is_over() {
                    format!("{played}\n\n{}", self.finish_round(outcome))
                } else {
                    played
                }
            }
            Err(e) => {
                warn!(error = %e, "engine could not move");
                e.to_string()
            }
        }
    }

    /// Announce the result, count it, and set up the next round.
    fn finish_round(&mut self, outcome: Outcome) -> String {
        let announcement = match outcome {
            Outcome::Won(player) => format!("{player} wins!"),
            Outcome::Draw => "Tie game!".to_string(),
            Outcome::InProgress => return String::new(),
        };
        self.tally.record(outcome);
        info!(?outcome, games = self.tally.games(), "round over");

        self.game.reset();
        format!("{announcement}\n\nNew round.\n{}", self.start_round())
    }
}

/// Describe a search score in words.
fn describe_score(score: i32) -> &'static str {
    match score {
        WIN_SCORE => "X wins with best play",
        LOSS_SCORE => "O wins with best play",
        DRAW_SCORE => "a draw with best play",
        _ => "unknown",
    }
}
