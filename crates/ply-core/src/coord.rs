//! Board coordinates in (row, column) form.

use std::fmt;

/// A square on the board, addressed by row and column.
///
/// Row 0 is rank 8 (Black's back rank) and row 7 is rank 1 (White's back
/// rank). Column 0 is the a-file. Both components are always in `0..8`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Create a coordinate, returning `None` if either component is out of range.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Coord> {
        if row < 8 && col < 8 {
            Some(Coord { row, col })
        } else {
            None
        }
    }

    /// Create a coordinate from signed components, as supplied by a move source.
    pub fn from_signed(row: i32, col: i32) -> Option<Coord> {
        let row = u8::try_from(row).ok()?;
        let col = u8::try_from(col).ok()?;
        Coord::new(row, col)
    }

    /// Parse algebraic notation (e.g. "e4") into a coordinate.
    pub fn from_algebraic(s: &str) -> Option<Coord> {
        let &[file, rank] = s.as_bytes() else {
            return None;
        };
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        Coord::new(b'8' - rank, file - b'a')
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Step by a signed delta, returning `None` when the result leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Coord> {
        Coord::from_signed(
            i32::from(self.row) + i32::from(d_row),
            i32::from(self.col) + i32::from(d_col),
        )
    }

    /// Iterate over all 64 squares, row by row from a8 to h1.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0u8..8).flat_map(|row| (0u8..8).map(move |col| Coord { row, col }))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", char::from(b'a' + self.col), 8 - self.row)
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({self})")
    }
}
