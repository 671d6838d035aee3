//! Move sources: where the replayed moves come from.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ply_core::{IllegalMove, Move};

use crate::error::SourceError;

/// A move as supplied by a source, before any range checking.
///
/// Components are ordered `(from_col, from_row, to_col, to_row)`, with row 0
/// at rank 8. Values outside `0..8` are representable; they are rejected when
/// the move is converted with [`RawMove::to_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMove {
    pub from_col: i32,
    pub from_row: i32,
    pub to_col: i32,
    pub to_row: i32,
}

impl RawMove {
    /// Create a raw move from `(from_col, from_row, to_col, to_row)`.
    pub const fn new(from_col: i32, from_row: i32, to_col: i32, to_row: i32) -> RawMove {
        RawMove {
            from_col,
            from_row,
            to_col,
            to_row,
        }
    }

    /// Map into board coordinates.
    pub fn to_move(self) -> Result<Move, IllegalMove> {
        Move::from_signed(self.from_row, self.from_col, self.to_row, self.to_col)
    }

    /// Parse coordinate notation such as `e2e4` or `e2 e4`.
    ///
    /// Any lowercase letter and any digit are accepted so that off-board
    /// squares like `i9` survive parsing and are rejected as illegal moves
    /// later. Returns `None` if the text is not two letter-digit pairs.
    pub fn parse(text: &str) -> Option<RawMove> {
        let chars: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
        let &[from_file, from_rank, to_file, to_rank] = chars.as_slice() else {
            return None;
        };
        let (from_col, from_row) = square(from_file, from_rank)?;
        let (to_col, to_row) = square(to_file, to_rank)?;
        Some(RawMove::new(from_col, from_row, to_col, to_row))
    }
}

/// Map a file letter and rank digit to `(col, row)`.
fn square(file: char, rank: char) -> Option<(i32, i32)> {
    if !file.is_ascii_lowercase() {
        return None;
    }
    let digit = rank.to_digit(10)?;
    Some((file as i32 - 'a' as i32, 8 - digit as i32))
}

fn write_square(f: &mut fmt::Formatter<'_>, col: i32, row: i32) -> fmt::Result {
    let file = u8::try_from(col)
        .ok()
        .filter(|c| *c < 26)
        .map_or('?', |c| char::from(b'a' + c));
    write!(f, "{file}{}", 8 - i64::from(row))
}

impl fmt::Display for RawMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_square(f, self.from_col, self.from_row)?;
        f.write_str(" to ")?;
        write_square(f, self.to_col, self.to_row)
    }
}

/// Supplies moves one at a time.
pub trait MoveSource {
    /// Return the next move, `Ok(None)` at end of stream, or a read failure.
    fn next_move(&mut self) -> Result<Option<RawMove>, SourceError>;
}

/// Reads one move per line from a buffered reader.
///
/// Blank lines and lines starting with `#` are skipped.
pub struct LineMoves<R> {
    reader: R,
    line: usize,
    buf: String,
}

impl LineMoves<BufReader<File>> {
    /// Open a move file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SourceError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(LineMoves::new(BufReader::new(file)))
    }
}

impl<R: BufRead> LineMoves<R> {
    /// Read moves from `reader`, numbering lines from 1.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            buf: String::new(),
        }
    }
}

impl<R: BufRead> MoveSource for LineMoves<R> {
    fn next_move(&mut self) -> Result<Option<RawMove>, SourceError> {
        loop {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;

            let text = self.buf.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }
            return RawMove::parse(text)
                .map(Some)
                .ok_or_else(|| SourceError::Malformed {
                    line: self.line,
                    text: text.to_string(),
                });
        }
    }
}
