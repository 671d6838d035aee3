//! Replay configuration.

/// Knobs for a [`Replay`](crate::replay::Replay).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayConfig {
    /// Render the board, and report a check on the side to move, before the first move.
    pub render_initial_board: bool,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            render_initial_board: true,
        }
    }
}
