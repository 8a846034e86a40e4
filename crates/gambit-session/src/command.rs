//! Session command parsing.

use gambit_core::{BoardStyle, Square};

use crate::config::SessionOption;
use crate::error::SessionError;

/// A parsed session command.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// `new` -- reset to the starting position.
    NewGame,
    /// `move <row> <col> <row> <col>` -- pick up the piece on `from` and drop it on `to`.
    Move { from: Square, to: Square },
    /// `moves <row> <col>` -- list the destinations the engine accepts for a piece.
    Moves(Square),
    /// `board` -- print the board.
    Board,
    /// `status` -- print whose turn it is, or how the game ended.
    Status,
    /// `set <name> <value>` -- change a setting.
    Set(SessionOption),
    /// `quit` -- end the session.
    Quit,
    /// Unrecognized command (ignored).
    Unknown(String),
}

/// Parse a single input line into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, SessionError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "new" => Ok(Command::NewGame),
        "board" => Ok(Command::Board),
        "status" => Ok(Command::Status),
        "quit" => Ok(Command::Quit),
        "move" => parse_move(&tokens[1..]),
        "moves" => parse_moves(&tokens[1..]),
        "set" => parse_set(&tokens[1..]),
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

/// Parse `move` arguments: source row and column, then destination row and column.
fn parse_move(tokens: &[&str]) -> Result<Command, SessionError> {
    if tokens.len() < 4 {
        return Err(SessionError::MissingArgument {
            command: "move",
            expected: 4,
        });
    }
    let from = parse_square(tokens[0], tokens[1])?;
    let to = parse_square(tokens[2], tokens[3])?;
    Ok(Command::Move { from, to })
}

fn parse_moves(tokens: &[&str]) -> Result<Command, SessionError> {
    if tokens.len() < 2 {
        return Err(SessionError::MissingArgument {
            command: "moves",
            expected: 2,
        });
    }
    Ok(Command::Moves(parse_square(tokens[0], tokens[1])?))
}

/// Parse `set` arguments.
///
/// Supports `style glyph|ascii` and `autoboard on|off`.
fn parse_set(tokens: &[&str]) -> Result<Command, SessionError> {
    if tokens.len() < 2 {
        return Err(SessionError::MissingArgument {
            command: "set",
            expected: 2,
        });
    }
    let value = tokens[1];
    let option = match tokens[0] {
        "style" => match value {
            "glyph" => SessionOption::Style(BoardStyle::Glyph),
            "ascii" => SessionOption::Style(BoardStyle::Ascii),
            _ => return Err(invalid_value("style", value)),
        },
        "autoboard" => match value {
            "on" => SessionOption::AutoBoard(true),
            "off" => SessionOption::AutoBoard(false),
            _ => return Err(invalid_value("autoboard", value)),
        },
        name => {
            return Err(SessionError::UnknownOption {
                name: name.to_string(),
            });
        }
    };
    Ok(Command::Set(option))
}

fn invalid_value(name: &'static str, value: &str) -> SessionError {
    SessionError::InvalidOptionValue {
        name,
        value: value.to_string(),
    }
}

/// Parse a row/column token pair into a square.
fn parse_square(row: &str, col: &str) -> Result<Square, SessionError> {
    Ok(Square::try_new(parse_coord(row)?, parse_coord(col)?)?)
}

fn parse_coord(token: &str) -> Result<u8, SessionError> {
    token.parse().map_err(|_| SessionError::InvalidCoordinate {
        value: token.to_string(),
    })
}
