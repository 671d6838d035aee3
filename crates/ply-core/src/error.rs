//! Error types for board setup and move validation.

use crate::color::Color;
use crate::coord::Coord;
use crate::piece_kind::PieceKind;

/// Errors that occur when parsing a piece-placement string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// The string is not `<placement> <side>`.
    #[error("expected placement and side fields, found {found} fields")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The placement does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index (0 = rank 8).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The side field is not "w" or "b".
    #[error("invalid side to move: \"{found}\"")]
    InvalidColor {
        /// The invalid side string.
        found: String,
    },
}

/// Why a move was rejected before it touched the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    /// One of the four coordinates lies outside `0..8`.
    #[error("coordinates outside the board")]
    OutOfBounds,
    /// The origin square is empty.
    #[error("no piece on {from}")]
    EmptyOrigin {
        from: Coord,
    },
    /// The moving piece does not belong to the side to move.
    #[error("{owner} piece on {from}, but {to_move} is to move")]
    WrongTurn {
        from: Coord,
        owner: Color,
        to_move: Color,
    },
    /// The destination holds a piece of the mover's own color.
    #[error("{to} is occupied by a {color} piece")]
    SelfCapture {
        to: Coord,
        color: Color,
    },
    /// The piece cannot travel from `from` to `to` by its movement rules.
    #[error("{kind} cannot move from {from} to {to}")]
    Geometry {
        kind: PieceKind,
        from: Coord,
        to: Coord,
    },
}
