//! The replay loop: pulls moves, validates and applies them, reports results.

use tracing::{debug, info, warn};

use ply_core::rules::{self, find_escape, is_in_check};
use ply_core::{Board, Color};

use crate::config::ReplayConfig;
use crate::error::{ReplayError, SourceError};
use crate::sink::Sink;
use crate::source::{MoveSource, RawMove};

/// Why a replay stopped.
#[derive(Debug)]
pub enum Outcome {
    /// The source ran out of moves.
    StreamExhausted,
    /// The source failed; no further moves were read.
    ReadError(SourceError),
    /// `winner` checkmated the other side.
    Checkmate { winner: Color },
}

/// Replay state after a step.
#[derive(Debug)]
pub enum State {
    Running,
    Ended(Outcome),
}

/// Counters kept over a replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    /// Moves pulled from the source.
    pub attempted: u32,
    /// Moves that stayed on the board.
    pub committed: u32,
    /// Moves rejected by shape, ownership or bounds.
    pub illegal: u32,
    /// Moves applied and reverted because they exposed the mover's king.
    pub self_check: u32,
}

/// Drives a [`MoveSource`] against a [`Board`], reporting to a [`Sink`].
pub struct Replay<S, K> {
    board: Board,
    source: S,
    sink: K,
    config: ReplayConfig,
    stats: ReplayStats,
    /// Set once the game has ended; later steps do not touch the source.
    halted: Option<Halt>,
}

/// The part of an [`Outcome`] kept after it has been handed out.
#[derive(Debug, Clone, Copy)]
enum Halt {
    Exhausted,
    Mated(Color),
}

impl Halt {
    fn outcome(self) -> Outcome {
        match self {
            Halt::Exhausted => Outcome::StreamExhausted,
            Halt::Mated(winner) => Outcome::Checkmate { winner },
        }
    }
}

impl<S: MoveSource, K: Sink> Replay<S, K> {
    /// Create a replay from the standard starting position with default config.
    pub fn new(source: S, sink: K) -> Self {
        Self::with_config(source, sink, ReplayConfig::default())
    }

    /// Create a replay from the standard starting position.
    pub fn with_config(source: S, sink: K, config: ReplayConfig) -> Self {
        Self {
            board: Board::starting_position(),
            source,
            sink,
            config,
            stats: ReplayStats::default(),
            halted: None,
        }
    }

    /// Start from `board` instead of the standard position.
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// The current position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Counters for the moves processed so far.
    pub fn stats(&self) -> ReplayStats {
        self.stats
    }

    /// Borrow the sink.
    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Consume the replay and return its sink.
    pub fn into_sink(self) -> K {
        self.sink
    }

    /// Run until the source is exhausted, fails, or a side is checkmated.
    pub fn run(&mut self) -> Result<Outcome, ReplayError> {
        info!(side = %self.board.side_to_move(), "starting replay");
        if self.config.render_initial_board {
            self.sink.board(&self.board)?;
            let side = self.board.side_to_move();
            if is_in_check(&self.board, side) {
                self.sink.check(side)?;
            }
        }

        let outcome = loop {
            if let State::Ended(outcome) = self.step()? {
                break outcome;
            }
        };

        self.sink.finished(&outcome)?;
        info!(
            ?outcome,
            attempted = self.stats.attempted,
            committed = self.stats.committed,
            illegal = self.stats.illegal,
            self_check = self.stats.self_check,
            "replay finished"
        );
        Ok(outcome)
    }

    /// Pull one move from the source and process it.
    ///
    /// Once the game has ended, every later call returns `Ended` again
    /// without reading from the source. A source that failed reports
    /// `StreamExhausted` on those later calls.
    pub fn step(&mut self) -> Result<State, ReplayError> {
        if let Some(halt) = self.halted {
            debug!(?halt, "step after end of game");
            return Ok(State::Ended(halt.outcome()));
        }
        let raw = match self.source.next_move() {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                self.halted = Some(Halt::Exhausted);
                return Ok(State::Ended(Outcome::StreamExhausted));
            }
            Err(err) => {
                warn!(error = %err, "move source failed");
                self.halted = Some(Halt::Exhausted);
                return Ok(State::Ended(Outcome::ReadError(err)));
            }
        };
        let state = self.attempt(raw)?;
        if let State::Ended(Outcome::Checkmate { winner }) = state {
            self.halted = Some(Halt::Mated(winner));
        }
        Ok(state)
    }

    fn attempt(&mut self, raw: RawMove) -> Result<State, ReplayError> {
        self.stats.attempted += 1;
        info!(mv = %raw, "attempting move");
        self.sink.attempt(raw)?;

        let mv = match raw.to_move().and_then(|mv| rules::validate(&self.board, mv).map(|_| mv)) {
            Ok(mv) => mv,
            Err(reason) => {
                debug!(mv = %raw, %reason, "illegal move");
                self.stats.illegal += 1;
                self.sink.illegal(raw, &reason)?;
                return Ok(State::Running);
            }
        };

        let mover = self.board.side_to_move();
        let captured = self.board.apply(mv.from, mv.to);

        if is_in_check(&self.board, mover) {
            self.board.undo(mv.from, mv.to, captured);
            debug!(%mv, %mover, "move exposes own king, reverted");
            self.stats.self_check += 1;
            self.sink.self_check(raw)?;
            return Ok(State::Running);
        }

        self.stats.committed += 1;
        match captured.piece() {
            Some(piece) => debug!(%mv, %mover, %piece, "move committed, capturing"),
            None => debug!(%mv, %mover, "move committed"),
        }
        self.sink.board(&self.board)?;

        let opponent = self.board.side_to_move();
        if is_in_check(&self.board, opponent) {
            self.sink.check(opponent)?;
            if find_escape(&mut self.board, opponent).is_none() {
                info!(winner = %mover, "checkmate");
                self.sink.checkmate(mover)?;
                return Ok(State::Ended(Outcome::Checkmate { winner: mover }));
            }
        }

        Ok(State::Running)
    }
}
