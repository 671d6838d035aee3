//! Exhaustive checkmate search.
//!
//! Every move of every piece of the checked side is simulated in place with
//! [`Board::with_move`], which undoes each trial before the next one starts.

use tracing::debug;

use super::check::is_in_check;
use super::check_destination;
use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::coord::Coord;

/// Return `true` if `color` is in check and no move of its pieces gets it out.
///
/// A side that is not in check is never mated; stalemate is not detected.
pub fn is_checkmate(board: &mut Board, color: Color) -> bool {
    is_in_check(board, color) && find_escape(board, color).is_none()
}

/// Return the first move (in a8..h1 scan order) that leaves `color` out of check.
///
/// Candidates are pieces of `color` moving to any square their shape and path
/// allow that does not hold a piece of `color`. Whose turn the board records
/// does not matter. The board is identical before and after the call.
pub fn find_escape(board: &mut Board, color: Color) -> Option<Move> {
    let mut trials = 0u32;
    for from in Coord::all() {
        let Some(piece) = board.piece_at(from) else {
            continue;
        };
        if piece.color() != color {
            continue;
        }

        for to in Coord::all() {
            if check_destination(board, piece, from, to).is_err() {
                continue;
            }
            trials += 1;
            if board.with_move(from, to, |after| !is_in_check(after, color)) {
                let escape = Move::new(from, to);
                debug!(%color, %escape, trials, "escape found");
                return Some(escape);
            }
        }
    }

    debug!(%color, trials, "no escape");
    None
}

#[cfg(test)]
mod tests {
    use super::{find_escape, is_checkmate};
    use crate::board::Board;
    use crate::chess_move::Move;
    use crate::color::Color;
    use crate::coord::Coord;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn not_in_check_is_not_mate() {
        let mut board = Board::starting_position();
        assert!(!is_checkmate(&mut board, Color::White));
        assert!(!is_checkmate(&mut board, Color::Black));
    }

    #[test]
    fn back_rank_mate() {
        let mut board = board("6k1/5ppp/8/8/8/8/8/R5K1 b");
        let before = board;
        // Rook a1 is not yet on the back rank: no check, no mate.
        assert!(!is_checkmate(&mut board, Color::Black));

        let mut mated = self::board("R5k1/5ppp/8/8/8/8/8/6K1 b");
        let mated_before = mated;
        assert!(is_checkmate(&mut mated, Color::Black));
        assert_eq!(mated, mated_before);
        assert_eq!(board, before);
    }

    #[test]
    fn lone_king_in_corner_is_mated_by_two_rooks() {
        let mut board = board("k7/8/8/8/8/8/1R6/R5K1 b");
        assert!(is_checkmate(&mut board, Color::Black));
    }

    #[test]
    fn removing_the_attacker_lifts_mate() {
        let mut board = board("k7/8/8/8/8/8/1R6/R5K1 b");
        assert!(is_checkmate(&mut board, Color::Black));
        let _ = board.clear(Coord::from_algebraic("a1").unwrap());
        assert!(!is_checkmate(&mut board, Color::Black));
    }

    #[test]
    fn king_can_capture_unprotected_checker() {
        // Queen on b7 checks a8 but is undefended.
        let mut board = board("k7/1Q6/8/8/8/8/8/6K1 b");
        assert_eq!(
            find_escape(&mut board, Color::Black),
            Move::from_algebraic("a8b7")
        );
        assert!(!is_checkmate(&mut board, Color::Black));
    }

    #[test]
    fn defended_checker_cannot_be_taken_by_king() {
        let mut board = board("k7/1Q6/2K5/8/8/8/8/8 b");
        assert!(is_checkmate(&mut board, Color::Black));
    }

    #[test]
    fn block_counts_as_escape() {
        // Back rank check along the 8th rank, the black rook on d7 can interpose.
        let mut board = board("R5k1/3r1ppp/8/8/8/8/8/6K1 b");
        assert!(!is_checkmate(&mut board, Color::Black));
        let escape = find_escape(&mut board, Color::Black).unwrap();
        assert_eq!(escape, Move::from_algebraic("d7d8").unwrap());
    }

    #[test]
    fn search_ignores_recorded_side_to_move() {
        let mut board = board("R5k1/5ppp/8/8/8/8/8/6K1 w");
        assert!(is_checkmate(&mut board, Color::Black));
        assert_eq!(board.side_to_move(), Color::White);
    }

    #[test]
    fn fools_mate() {
        let mut board = board("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w");
        assert!(is_checkmate(&mut board, Color::White));
        assert_eq!(board, self::board("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w"));
    }
}
