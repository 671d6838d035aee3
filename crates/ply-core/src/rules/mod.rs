//! Move acceptance, check detection and checkmate search.

mod check;
mod checkmate;
pub mod geometry;

pub use check::{is_attacked, is_in_check};
pub use checkmate::{find_escape, is_checkmate};

use crate::board::Board;
use crate::chess_move::Move;
use crate::coord::Coord;
use crate::error::IllegalMove;
use crate::piece::Piece;

/// Decide whether `mv` may be played on `board` by the side to move.
///
/// Checks run in order: the origin is occupied, it belongs to the side to
/// move, the destination is not held by the same side, and the piece's shape
/// and path allow the move. Self-check is not considered here. Returns the
/// moving piece on success.
pub fn validate(board: &Board, mv: Move) -> Result<Piece, IllegalMove> {
    let piece = board
        .piece_at(mv.from)
        .ok_or(IllegalMove::EmptyOrigin { from: mv.from })?;

    let to_move = board.side_to_move();
    if piece.color() != to_move {
        return Err(IllegalMove::WrongTurn {
            from: mv.from,
            owner: piece.color(),
            to_move,
        });
    }

    check_destination(board, piece, mv.from, mv.to)?;
    Ok(piece)
}

/// Pseudo-legality of `piece` on `from` moving to `to`, regardless of whose turn it is.
pub(crate) fn check_destination(
    board: &Board,
    piece: Piece,
    from: Coord,
    to: Coord,
) -> Result<(), IllegalMove> {
    if let Some(target) = board.piece_at(to) {
        if target.color() == piece.color() {
            return Err(IllegalMove::SelfCapture {
                to,
                color: target.color(),
            });
        }
    }

    if !geometry::allows(board, piece, from, to) {
        return Err(IllegalMove::Geometry {
            kind: piece.kind(),
            from,
            to,
        });
    }

    Ok(())
}
