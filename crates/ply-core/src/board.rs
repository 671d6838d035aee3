//! The chess board: piece placement and side to move.

use std::fmt;

use crate::color::Color;
use crate::coord::Coord;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

/// Back-rank order from the a-file to the h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of optional pieces plus the side to move.
///
/// The board performs no legality checking. [`Board::apply`] and
/// [`Board::undo`] are raw data operations; legality lives in
/// [`rules`](crate::rules).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Indexed as `grid[row][col]`.
    grid: [[Option<Piece>; 8]; 8],
    /// Which side moves next. Only `apply` and `undo` change it after construction.
    side_to_move: Color,
}

/// Contents of a destination square before [`Board::apply`] overwrote it.
///
/// Must be handed back to [`Board::undo`] to restore the position.
#[must_use = "pass the captured square to Board::undo to restore the position"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Captured(Option<Piece>);

impl Captured {
    /// The piece that stood on the destination, if any.
    #[inline]
    pub fn piece(self) -> Option<Piece> {
        self.0
    }
}

impl Board {
    /// Return a board with no pieces.
    pub const fn empty(side_to_move: Color) -> Board {
        Board {
            grid: [[None; 8]; 8],
            side_to_move,
        }
    }

    /// Return the standard starting position with White to move.
    pub fn starting_position() -> Board {
        let mut board = Board::empty(Color::White);
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            board.grid[0][col] = Some(Piece::new(kind, Color::Black));
            board.grid[1][col] = Some(Piece::BLACK_PAWN);
            board.grid[6][col] = Some(Piece::WHITE_PAWN);
            board.grid[7][col] = Some(Piece::new(kind, Color::White));
        }
        board
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, c: Coord) -> Option<Piece> {
        self.grid[c.row() as usize][c.col() as usize]
    }

    /// Return `true` if the given square is occupied.
    #[inline]
    pub fn is_occupied(&self, c: Coord) -> bool {
        self.piece_at(c).is_some()
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Place a piece, replacing whatever was there.
    pub fn put(&mut self, c: Coord, piece: Piece) {
        self.set(c, Some(piece));
    }

    /// Empty a square, returning its previous contents.
    pub fn clear(&mut self, c: Coord) -> Option<Piece> {
        self.grid[c.row() as usize][c.col() as usize].take()
    }

    #[inline]
    fn set(&mut self, c: Coord, contents: Option<Piece>) {
        self.grid[c.row() as usize][c.col() as usize] = contents;
    }

    /// Move whatever is on `from` to `to` and hand the turn over.
    ///
    /// The previous contents of `to` are overwritten and returned so that
    /// [`Board::undo`] can put them back.
    pub fn apply(&mut self, from: Coord, to: Coord) -> Captured {
        let captured = Captured(self.piece_at(to));
        let moving = self.clear(from);
        self.set(to, moving);
        self.side_to_move = !self.side_to_move;
        captured
    }

    /// Reverse an [`apply`](Board::apply) of the same `from`/`to` pair.
    pub fn undo(&mut self, from: Coord, to: Coord, captured: Captured) {
        let moved = self.piece_at(to);
        self.set(from, moved);
        self.set(to, captured.0);
        self.side_to_move = !self.side_to_move;
    }

    /// Apply a move, run `f` on the resulting position, then undo the move.
    ///
    /// The undo runs unconditionally, so simulations never overlap and the
    /// board comes back exactly as it was.
    pub fn with_move<R>(&mut self, from: Coord, to: Coord, f: impl FnOnce(&Board) -> R) -> R {
        let captured = self.apply(from, to);
        let result = f(self);
        self.undo(from, to, captured);
        result
    }

    /// Return `true` if every square strictly between `from` and `to` is empty.
    ///
    /// The two squares must share a row, a column or a diagonal. Adjacent
    /// squares have no interior and are always clear.
    pub fn is_path_clear(&self, from: Coord, to: Coord) -> bool {
        let d_row = (i32::from(to.row()) - i32::from(from.row())).signum() as i8;
        let d_col = (i32::from(to.col()) - i32::from(from.col())).signum() as i8;
        debug_assert!(
            from.row() == to.row()
                || from.col() == to.col()
                || from.row().abs_diff(to.row()) == from.col().abs_diff(to.col()),
            "path query between non-collinear squares {from} and {to}"
        );

        let mut cur = from;
        loop {
            cur = match cur.offset(d_row, d_col) {
                Some(next) => next,
                None => return true,
            };
            if cur == to {
                return true;
            }
            if self.is_occupied(cur) {
                return false;
            }
        }
    }

    /// Return the square of the first king of `color` found, scanning from a8.
    pub fn king_square(&self, color: Color) -> Option<Coord> {
        let king = Piece::new(PieceKind::King, color);
        Coord::all().find(|&c| self.piece_at(c) == Some(king))
    }

    /// Iterate over every occupied square and its piece.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        Coord::all().filter_map(|c| self.piece_at(c).map(|p| (c, p)))
    }

    /// Iterate over the squares holding pieces of `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color() == color)
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{} {}\")", self.placement(), self.side_to_move.tag())
    }
}

/// Wrapper for printing a board as a labelled 8x8 grid, rank 8 on top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        writeln!(f, "  a b c d e f g h")?;
        for (row, squares) in board.grid.iter().enumerate() {
            let rank = 8 - row;
            write!(f, "{rank} ")?;
            for contents in squares {
                let c = contents.map_or('.', Piece::fen_char);
                write!(f, "{c} ")?;
            }
            writeln!(f, "{rank}")?;
        }
        writeln!(f, "  a b c d e f g h")?;
        write!(f, "Turn: {}", board.side_to_move)
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::color::Color;
    use crate::coord::Coord;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;

    fn sq(s: &str) -> Coord {
        Coord::from_algebraic(s).unwrap()
    }

    #[test]
    fn starting_position_layout() {
        let board = Board::starting_position();
        assert_eq!(board.piece_at(sq("e1")), Some(Piece::WHITE_KING));
        assert_eq!(board.piece_at(sq("d1")), Some(Piece::WHITE_QUEEN));
        assert_eq!(board.piece_at(sq("a1")), Some(Piece::WHITE_ROOK));
        assert_eq!(board.piece_at(sq("b1")), Some(Piece::WHITE_KNIGHT));
        assert_eq!(board.piece_at(sq("c1")), Some(Piece::WHITE_BISHOP));
        assert_eq!(board.piece_at(sq("e2")), Some(Piece::WHITE_PAWN));
        assert_eq!(board.piece_at(sq("e8")), Some(Piece::BLACK_KING));
        assert_eq!(board.piece_at(sq("d7")), Some(Piece::BLACK_PAWN));
        assert_eq!(board.piece_at(sq("e4")), None);
        assert_eq!(board.side_to_move(), Color::White);
    }

    #[test]
    fn starting_position_piece_count() {
        let board = Board::starting_position();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.pieces_of(Color::White).count(), 16);
        assert!(board.pieces_of(Color::Black).all(|(c, _)| c.row() <= 1));
    }

    #[test]
    fn king_square() {
        let board = Board::starting_position();
        assert_eq!(board.king_square(Color::White), Some(sq("e1")));
        assert_eq!(board.king_square(Color::Black), Some(sq("e8")));
        assert_eq!(Board::empty(Color::White).king_square(Color::White), None);
    }

    #[test]
    fn apply_moves_piece_and_flips_turn() {
        let mut board = Board::starting_position();
        let captured = board.apply(sq("e2"), sq("e4"));
        assert_eq!(captured.piece(), None);
        assert_eq!(board.piece_at(sq("e4")), Some(Piece::WHITE_PAWN));
        assert_eq!(board.piece_at(sq("e2")), None);
        assert_eq!(board.side_to_move(), Color::Black);
    }

    #[test]
    fn undo_restores_capture() {
        let mut board = Board::starting_position();
        let before = board;
        let captured = board.apply(sq("d1"), sq("d7"));
        assert_eq!(captured.piece(), Some(Piece::BLACK_PAWN));
        assert_eq!(board.piece_at(sq("d7")), Some(Piece::WHITE_QUEEN));

        board.undo(sq("d1"), sq("d7"), captured);
        assert_eq!(board, before);
    }

    #[test]
    fn undo_restores_same_square_move() {
        let mut board = Board::starting_position();
        let before = board;
        let captured = board.apply(sq("a1"), sq("a1"));
        board.undo(sq("a1"), sq("a1"), captured);
        assert_eq!(board, before);
    }

    #[test]
    fn with_move_always_restores() {
        let mut board = Board::starting_position();
        let before = board;
        let moved = board.with_move(sq("g1"), sq("f3"), |b| b.piece_at(sq("f3")));
        assert_eq!(moved, Some(Piece::WHITE_KNIGHT));
        assert_eq!(board, before);
    }

    #[test]
    fn path_clear_on_file() {
        let mut board = Board::starting_position();
        assert!(!board.is_path_clear(sq("a1"), sq("a3")));
        let _ = board.apply(sq("a2"), sq("a4"));
        assert!(board.is_path_clear(sq("a1"), sq("a3")));
        assert!(!board.is_path_clear(sq("a1"), sq("a5")));
    }

    #[test]
    fn path_clear_on_diagonal() {
        let mut board = Board::starting_position();
        assert!(!board.is_path_clear(sq("c1"), sq("a3")));
        let _ = board.apply(sq("b2"), sq("b3"));
        assert!(board.is_path_clear(sq("c1"), sq("a3")));
    }

    #[test]
    fn path_clear_ignores_endpoints() {
        let board = Board::starting_position();
        assert!(board.is_path_clear(sq("e1"), sq("e2")));
        assert!(board.is_path_clear(sq("a2"), sq("a7")));
        assert!(!board.is_path_clear(sq("a1"), sq("a8")));
    }

    #[test]
    fn put_and_clear() {
        let mut board = Board::empty(Color::Black);
        board.put(sq("h8"), Piece::BLACK_ROOK);
        assert!(board.is_occupied(sq("h8")));
        assert_eq!(board.clear(sq("h8")), Some(Piece::BLACK_ROOK));
        assert!(!board.is_occupied(sq("h8")));
    }

    #[test]
    fn pretty_print() {
        let board = Board::starting_position();
        let output = format!("{}", board.pretty());
        assert!(output.contains("8 r n b q k b n r 8"));
        assert!(output.contains("1 R N B Q K B N R 1"));
        assert!(output.contains("4 . . . . . . . . 4"));
        assert!(output.starts_with("  a b c d e f g h"));
        assert!(output.ends_with("Turn: White"));
    }

    #[test]
    fn debug_uses_placement() {
        let board = Board::starting_position();
        assert_eq!(
            format!("{board:?}"),
            "Board(\"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w\")"
        );
    }

    #[test]
    fn king_square_ignores_other_kinds() {
        let mut board = Board::empty(Color::White);
        board.put(sq("a1"), Piece::new(PieceKind::Queen, Color::White));
        board.put(sq("h1"), Piece::WHITE_KING);
        assert_eq!(board.king_square(Color::White), Some(sq("h1")));
        assert_eq!(board.king_square(Color::Black), None);
    }
}
