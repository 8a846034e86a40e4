//! Session protocol errors.

use gambit_core::SquareError;

/// Errors that can occur while reading or running session commands.
///
/// Everything except [`SessionError::Io`] is reported back on the output and
/// the session continues.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A command was given too few arguments.
    #[error("{command}: expected {expected} argument(s)")]
    MissingArgument {
        /// The command keyword.
        command: &'static str,
        /// How many arguments it takes.
        expected: usize,
    },

    /// A coordinate token is not a number.
    #[error("invalid coordinate: {value}")]
    InvalidCoordinate {
        /// The token that failed to parse.
        value: String,
    },

    /// A coordinate is a number but lies off the board.
    #[error(transparent)]
    Square(#[from] SquareError),

    /// `set` named an option that does not exist.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name as given.
        name: String,
    },

    /// `set` gave a value the option does not accept.
    #[error("invalid value for {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: &'static str,
        /// The rejected value.
        value: String,
    },

    /// An I/O error occurred on the input or output stream.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
