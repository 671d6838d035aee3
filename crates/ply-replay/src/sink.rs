//! Output sinks for replay events.

use std::io::{self, Write};

use ply_core::{Board, Color, IllegalMove};

use crate::replay::Outcome;
use crate::source::RawMove;

/// Receives everything a replay has to say.
///
/// After every move attempt exactly one of [`illegal`](Sink::illegal),
/// [`self_check`](Sink::self_check) or [`board`](Sink::board) is called;
/// a committed move may be followed by [`check`](Sink::check) and
/// [`checkmate`](Sink::checkmate).
pub trait Sink {
    /// A move is about to be tried.
    fn attempt(&mut self, mv: RawMove) -> io::Result<()>;

    /// The board after a committed move (or at the start of the game).
    fn board(&mut self, board: &Board) -> io::Result<()>;

    /// The move was rejected before touching the board.
    fn illegal(&mut self, mv: RawMove, reason: &IllegalMove) -> io::Result<()>;

    /// The move was applied and reverted because it exposed the mover's king.
    fn self_check(&mut self, mv: RawMove) -> io::Result<()>;

    /// `color` is in check.
    fn check(&mut self, color: Color) -> io::Result<()>;

    /// `winner` has delivered checkmate.
    fn checkmate(&mut self, winner: Color) -> io::Result<()>;

    /// The replay has ended.
    fn finished(&mut self, outcome: &Outcome) -> io::Result<()>;
}

/// Writes events as human-readable lines.
pub struct TextSink<W> {
    out: W,
}

impl TextSink<io::Stdout> {
    /// A sink writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Sink for TextSink<W> {
    fn attempt(&mut self, mv: RawMove) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Move: {mv}")
    }

    fn board(&mut self, board: &Board) -> io::Result<()> {
        writeln!(self.out, "{}", board.pretty())
    }

    fn illegal(&mut self, mv: RawMove, reason: &IllegalMove) -> io::Result<()> {
        writeln!(self.out, "Invalid move: {mv} ({reason})")
    }

    fn self_check(&mut self, mv: RawMove) -> io::Result<()> {
        writeln!(self.out, "Invalid move: {mv} puts own king in check")
    }

    fn check(&mut self, color: Color) -> io::Result<()> {
        writeln!(self.out, "{color} is in check")
    }

    fn checkmate(&mut self, winner: Color) -> io::Result<()> {
        writeln!(self.out, "Checkmate! {winner} wins")
    }

    fn finished(&mut self, outcome: &Outcome) -> io::Result<()> {
        match outcome {
            Outcome::StreamExhausted => writeln!(self.out, "Game ended: no more moves")?,
            Outcome::ReadError(err) => writeln!(self.out, "Error reading moves: {err}")?,
            Outcome::Checkmate { .. } => {}
        }
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::{Sink, TextSink};
    use crate::error::SourceError;
    use crate::replay::Outcome;
    use crate::source::RawMove;
    use ply_core::{Board, Color, IllegalMove};

    fn render(f: impl FnOnce(&mut TextSink<Vec<u8>>) -> std::io::Result<()>) -> String {
        let mut sink = TextSink::new(Vec::new());
        f(&mut sink).unwrap();
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn illegal_line_names_move_and_reason() {
        let mv = RawMove::parse("e2e5").unwrap();
        let out = render(|s| s.illegal(mv, &IllegalMove::OutOfBounds));
        assert_eq!(out, "Invalid move: e2 to e5 (coordinates outside the board)\n");
    }

    #[test]
    fn self_check_line() {
        let mv = RawMove::parse("e1e2").unwrap();
        let out = render(|s| s.self_check(mv));
        assert_eq!(out, "Invalid move: e1 to e2 puts own king in check\n");
    }

    #[test]
    fn check_and_mate_lines() {
        let out = render(|s| {
            s.check(Color::Black)?;
            s.checkmate(Color::White)
        });
        assert_eq!(out, "Black is in check\nCheckmate! White wins\n");
    }

    #[test]
    fn board_is_rendered_with_turn() {
        let out = render(|s| s.board(&Board::starting_position()));
        assert!(out.contains("8 r n b q k b n r 8"));
        assert!(out.ends_with("Turn: White\n"));
    }

    #[test]
    fn finished_lines() {
        let out = render(|s| s.finished(&Outcome::StreamExhausted));
        assert_eq!(out, "Game ended: no more moves\n");

        let err = SourceError::Malformed {
            line: 3,
            text: "xx".to_string(),
        };
        let out = render(|s| s.finished(&Outcome::ReadError(err)));
        assert!(out.starts_with("Error reading moves: line 3"));

        let out = render(|s| s.finished(&Outcome::Checkmate { winner: Color::Black }));
        assert_eq!(out, "");
    }
}
