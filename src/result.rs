//! Round outcome types.

/// Outcome of a round, derived on demand from a game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// The round is not decided yet.
    NoResult,
    /// Player wins (dealer busts or player has the higher score).
    PlayerWin,
    /// Dealer wins (player busts or dealer has the higher score).
    DealerWin,
    /// Both parties hold the same score.
    Draw,
}
