//! Turn state.

/// Whose turn it is within a round.
///
/// The only transition is [`Player`](Turn::Player) to
/// [`Dealer`](Turn::Dealer); a round never hands the turn back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Waiting for player actions.
    Player,
    /// The dealer plays out their hand; terminal for the round.
    Dealer,
}
