//! Synchronous, line-driven play session.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use gambit_core::{GameState, GameStatus, MoveReport, Square, is_check, legal_destinations};

use crate::command::{Command, parse_command};
use crate::config::SessionConfig;
use crate::error::SessionError;

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// A play session: the current game plus display settings.
///
/// Reads one command per line and answers on the output stream. Moves are
/// judged by the rule engine; refused moves leave the game as it was.
pub struct Session {
    game: GameState,
    config: SessionConfig,
}

impl Session {
    /// Create a session at the starting position with default settings.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            game: GameState::new(),
            config,
        }
    }

    /// Current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Run the session until `quit` or end of input.
    ///
    /// Malformed lines and refused moves are reported on `output` and do not
    /// end the session. Only I/O failures are returned as errors.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), SessionError> {
        info!("session started");
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");
            let flow = match parse_command(trimmed) {
                Ok(cmd) => self.handle(cmd, &mut output)?,
                Err(e) => {
                    warn!(error = %e, "command parse error");
                    writeln!(output, "error: {e}")?;
                    Flow::Continue
                }
            };
            output.flush()?;
            if flow == Flow::Quit {
                break;
            }
        }
        info!("session ended");
        Ok(())
    }

    fn handle<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<Flow, SessionError> {
        match cmd {
            Command::NewGame => self.handle_new(out)?,
            Command::Move { from, to } => self.handle_move(from, to, out)?,
            Command::Moves(from) => self.handle_moves(from, out)?,
            Command::Board => self.print_board(out)?,
            Command::Status => self.handle_status(out)?,
            Command::Set(option) => {
                self.config.apply(option);
                debug!(?option, "option set");
                writeln!(out, "ok")?;
            }
            Command::Quit => return Ok(Flow::Quit),
            Command::Unknown(word) => {
                debug!(%word, "ignoring unknown command");
            }
        }
        Ok(Flow::Continue)
    }

    fn handle_new<W: Write>(&mut self, out: &mut W) -> Result<(), SessionError> {
        self.game = GameState::new();
        info!("new game");
        writeln!(out, "ok")?;
        Ok(())
    }

    fn handle_move<W: Write>(&mut self, from: Square, to: Square, out: &mut W) -> Result<(), SessionError> {
        match self.game.play(from, to) {
            Ok((next, report)) => {
                self.game = next;
                writeln!(out, "ok")?;
                write_notice(&report, out)?;
                if self.config.auto_board {
                    self.print_board(out)?;
                }
            }
            Err(e) => {
                warn!(error = %e, %from, %to, "move refused");
                writeln!(out, "error: {e}")?;
            }
        }
        Ok(())
    }

    fn handle_moves<W: Write>(&self, from: Square, out: &mut W) -> Result<(), SessionError> {
        let destinations = legal_destinations(self.game.board(), from);
        if destinations.is_empty() {
            writeln!(out, "moves: none")?;
        } else {
            let list: Vec<String> = destinations.iter().map(Square::to_string).collect();
            writeln!(out, "moves: {}", list.join(" "))?;
        }
        Ok(())
    }

    fn handle_status<W: Write>(&self, out: &mut W) -> Result<(), SessionError> {
        match self.game.status() {
            GameStatus::Checkmate { loser } => {
                writeln!(out, "{loser} is in checkmate! Game over.")?;
            }
            GameStatus::InProgress => {
                let side = self.game.side_to_move();
                if is_check(self.game.board(), side) {
                    writeln!(out, "{side} to move (in check)")?;
                } else {
                    writeln!(out, "{side} to move")?;
                }
            }
        }
        Ok(())
    }

    fn print_board<W: Write>(&self, out: &mut W) -> Result<(), SessionError> {
        writeln!(out, "{}", self.game.board().pretty(self.config.style))?;
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Announce check or checkmate against the side that has to answer `report`.
fn write_notice<W: Write>(report: &MoveReport, out: &mut W) -> Result<(), SessionError> {
    let defender = report.mover.flip();
    if report.checkmate {
        writeln!(out, "{defender} is in checkmate! Game over.")?;
    } else if report.check {
        writeln!(out, "{defender} is in check!")?;
    }
    Ok(())
}
