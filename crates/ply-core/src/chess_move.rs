//! A move between two board coordinates.

use std::fmt;

use crate::coord::Coord;
use crate::error::IllegalMove;

/// A move from one square to another. Carries no piece or capture information.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

impl Move {
    /// Create a move between two on-board squares.
    #[inline]
    pub const fn new(from: Coord, to: Coord) -> Move {
        Move { from, to }
    }

    /// Build a move from signed (row, col) pairs, rejecting anything off the board.
    pub fn from_signed(
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
    ) -> Result<Move, IllegalMove> {
        let from = Coord::from_signed(from_row, from_col).ok_or(IllegalMove::OutOfBounds)?;
        let to = Coord::from_signed(to_row, to_col).ok_or(IllegalMove::OutOfBounds)?;
        Ok(Move { from, to })
    }

    /// Parse two algebraic squares, e.g. "e2e4".
    pub fn from_algebraic(s: &str) -> Option<Move> {
        if s.len() != 4 || !s.is_ascii() {
            return None;
        }
        let from = Coord::from_algebraic(&s[0..2])?;
        let to = Coord::from_algebraic(&s[2..4])?;
        Some(Move { from, to })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{})", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::Move;
    use crate::error::IllegalMove;

    #[test]
    fn from_signed_checks_bounds() {
        assert!(Move::from_signed(6, 4, 4, 4).is_ok());
        assert_eq!(Move::from_signed(6, 4, 8, 4), Err(IllegalMove::OutOfBounds));
        assert_eq!(Move::from_signed(-1, 4, 4, 4), Err(IllegalMove::OutOfBounds));
    }

    #[test]
    fn from_algebraic() {
        let mv = Move::from_algebraic("e2e4").unwrap();
        assert_eq!(mv, Move::from_signed(6, 4, 4, 4).unwrap());
        assert_eq!(Move::from_algebraic("e2e"), None);
        assert_eq!(Move::from_algebraic("e2x4"), None);
    }

    #[test]
    fn display() {
        let mv = Move::from_algebraic("g1f3").unwrap();
        assert_eq!(mv.to_string(), "g1 to f3");
        assert_eq!(format!("{mv:?}"), "Move(g1f3)");
    }
}
