//! Piece-placement parsing and serialization for [`Board`].
//!
//! The accepted form is the first two FEN fields, e.g.
//! `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w`. Castling, en passant and
//! move counters have no meaning here and are not accepted.

use std::str::FromStr;

use crate::board::Board;
use crate::color::Color;
use crate::coord::Coord;
use crate::error::PlacementError;
use crate::piece::Piece;

/// Placement and side for the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

impl Board {
    /// Build a board from a FEN piece-placement field and a side to move.
    ///
    /// Ranks are listed from rank 8 down to rank 1, matching row order.
    pub fn from_placement(placement: &str, side_to_move: Color) -> Result<Board, PlacementError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(PlacementError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty(side_to_move);
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col: usize = 0;
            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(PlacementError::InvalidPieceChar { character: c });
                    }
                    col += digit as usize;
                    continue;
                }

                let piece = Piece::from_fen_char(c)
                    .ok_or(PlacementError::InvalidPieceChar { character: c })?;
                let coord = Coord::from_signed(row as i32, col as i32).ok_or(
                    PlacementError::BadRankLength {
                        rank_index: row,
                        length: col + 1,
                    },
                )?;
                board.put(coord, piece);
                col += 1;
            }

            if col != 8 {
                return Err(PlacementError::BadRankLength {
                    rank_index: row,
                    length: col,
                });
            }
        }

        Ok(board)
    }

    /// Serialize the piece placement (without the side to move).
    pub fn placement(&self) -> String {
        let mut out = String::with_capacity(64);
        for row in 0u8..8 {
            if row > 0 {
                out.push('/');
            }
            let mut empty = 0u8;
            for col in 0u8..8 {
                let Some(coord) = Coord::new(row, col) else {
                    continue;
                };
                match self.piece_at(coord) {
                    Some(piece) => {
                        if empty > 0 {
                            out.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        out.push(piece.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push(char::from(b'0' + empty));
            }
        }
        out
    }
}

impl FromStr for Board {
    type Err = PlacementError;

    /// Parse `<placement> <w|b>`.
    fn from_str(s: &str) -> Result<Board, PlacementError> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        let [placement, side] = fields.as_slice() else {
            return Err(PlacementError::WrongFieldCount { found: fields.len() });
        };
        let side_to_move = match *side {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(PlacementError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };
        Board::from_placement(placement, side_to_move)
    }
}
