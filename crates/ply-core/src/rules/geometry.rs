//! Per-piece movement shapes.
//!
//! These answer "can this piece travel from here to there" using only its
//! movement pattern and the occupancy of the squares it passes through. Turn
//! order, self-capture and self-check are handled by the callers.

use crate::board::Board;
use crate::color::Color;
use crate::coord::Coord;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

/// Return `true` if `piece` standing on `from` may move to `to` by its shape and path.
///
/// A move that does not change squares is never allowed. Shape is tested
/// before path, so sliders only query the board along a real line.
pub fn allows(board: &Board, piece: Piece, from: Coord, to: Coord) -> bool {
    if from == to {
        return false;
    }
    let dx = from.row().abs_diff(to.row());
    let dy = from.col().abs_diff(to.col());

    let kind = piece.kind();
    let shape = match kind {
        PieceKind::King => dx <= 1 && dy <= 1,
        PieceKind::Queen => dx == dy || dx == 0 || dy == 0,
        PieceKind::Rook => dx == 0 || dy == 0,
        PieceKind::Bishop => dx == dy,
        PieceKind::Knight => (dx == 2 && dy == 1) || (dx == 1 && dy == 2),
        PieceKind::Pawn => return pawn_allows(board, piece.color(), from, to),
    };
    shape && (!kind.is_slider() || board.is_path_clear(from, to))
}

fn pawn_allows(board: &Board, color: Color, from: Coord, to: Coord) -> bool {
    let direction = i32::from(color.pawn_direction());
    let d_row = i32::from(to.row()) - i32::from(from.row());
    let dy = from.col().abs_diff(to.col());

    match (dy, board.piece_at(to)) {
        // Straight ahead onto an empty square.
        (0, None) => {
            if d_row == direction {
                return true;
            }
            d_row == 2 * direction
                && from.row() == color.pawn_start_row()
                && from
                    .offset(color.pawn_direction(), 0)
                    .is_some_and(|mid| !board.is_occupied(mid))
        }
        // Diagonal capture; en passant is not supported.
        (1, Some(target)) => d_row == direction && target.color() != color,
        _ => false,
    }
}
