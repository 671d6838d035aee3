//! Board representation, movement rules, and check/checkmate detection.

mod board;
mod chess_move;
mod color;
mod coord;
mod error;
mod piece;
mod piece_kind;
mod placement;
pub mod rules;

pub use board::{Board, Captured, PrettyBoard};
pub use chess_move::Move;
pub use color::Color;
pub use coord::Coord;
pub use error::{IllegalMove, PlacementError};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use placement::STARTING_PLACEMENT;
