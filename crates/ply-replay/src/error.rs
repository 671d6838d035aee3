//! Replay errors.

use std::io;
use std::path::PathBuf;

/// Errors raised by a [`MoveSource`](crate::source::MoveSource).
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The move file could not be opened.
    #[error("cannot open move file {}: {source}", .path.display())]
    Open {
        /// Path that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A line does not hold two squares in coordinate notation.
    #[error("line {line}: expected a move such as `e2e4`, found {text:?}")]
    Malformed {
        /// One-based line number.
        line: usize,
        /// The offending line, trimmed.
        text: String,
    },

    /// An I/O error occurred while reading moves.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: io::Error,
    },
}

/// Errors that abort a replay.
///
/// Illegal moves and read failures are not errors at this level: they are
/// reported through the sink and, for read failures, end the game normally.
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    /// The sink failed to write its output.
    #[error("failed to write output: {source}")]
    Output {
        /// The underlying I/O error.
        #[from]
        source: io::Error,
    },
}
