//! King-in-check detection by attacker enumeration.

use tracing::warn;

use super::geometry;
use crate::board::Board;
use crate::color::Color;
use crate::coord::Coord;

/// Return `true` if the king of `color` is attacked.
///
/// A board without a king of `color` is never in check for that color.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king) = board.king_square(color) else {
        warn!(%color, "no king on the board, treating as not in check");
        return false;
    };
    is_attacked(board, king, !color)
}

/// Return `true` if any piece of `by` could move onto `target` by shape and path.
///
/// Turn order and the attacker's own king safety are ignored.
pub fn is_attacked(board: &Board, target: Coord, by: Color) -> bool {
    board
        .pieces_of(by)
        .any(|(from, piece)| geometry::allows(board, piece, from, target))
}
