//! Replays a move list against a board, reporting legality, check and checkmate.

pub mod config;
pub mod error;
pub mod replay;
pub mod sink;
pub mod source;

pub use config::ReplayConfig;
pub use error::{ReplayError, SourceError};
pub use replay::{Outcome, Replay, ReplayStats, State};
pub use sink::{Sink, TextSink};
pub use source::{LineMoves, MoveSource, RawMove};
