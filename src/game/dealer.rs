//! Dealer policy and result determination.

use crate::error::DrawError;
use crate::result::GameResult;

use super::{GameState, Turn};

/// The dealer draws while at or below this score.
const DEALER_DRAW_CEILING: u8 = 16;

impl GameState {
    /// Returns whether the dealer's fixed policy calls for another card
    /// (dealer score at or below 16).
    #[must_use]
    pub fn dealer_must_draw(&self) -> bool {
        self.dealer_hand.score() <= DEALER_DRAW_CEILING
    }

    /// One step of the dealer's drawing policy during [`Turn::Dealer`]:
    /// draws exactly one card if the dealer's score is 16 or less.
    ///
    /// Each call draws at most one card. Callers resolve the dealer's hand
    /// by invoking this repeatedly until [`dealer_must_draw`] is `false`.
    ///
    /// During [`Turn::Player`], or once the dealer's score exceeds 16, this
    /// is a no-op and returns the state unchanged.
    ///
    /// [`dealer_must_draw`]: GameState::dealer_must_draw
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DeckExhausted`] if the dealer must draw and the
    /// deck is empty.
    pub fn dealer_draws(mut self) -> Result<Self, DrawError> {
        if self.turn != Turn::Dealer || !self.dealer_must_draw() {
            return Ok(self);
        }

        let card = self.deck.draw()?;
        self.dealer_hand.add_card(card);

        Ok(self)
    }

    /// Determines the outcome of the round from both hands' scores.
    ///
    /// Bust checks take precedence over score comparisons: a busted player
    /// loses regardless of the dealer's hand, and a busted dealer loses to
    /// any standing player. Equal scores are a draw.
    /// [`GameResult::NoResult`] is the incomplete-round sentinel.
    ///
    /// This is a pure query; it does not look at the turn and can be called
    /// at any point.
    #[must_use]
    pub fn result(&self) -> GameResult {
        let player_score = self.player_hand.score();
        let dealer_score = self.dealer_hand.score();

        if player_score > 21 {
            return GameResult::DealerWin;
        }
        if dealer_score <= 21 && dealer_score > player_score {
            return GameResult::DealerWin;
        }
        if dealer_score > 21 {
            return GameResult::PlayerWin;
        }
        if player_score > dealer_score {
            return GameResult::PlayerWin;
        }
        if dealer_score == player_score {
            return GameResult::Draw;
        }

        GameResult::NoResult
    }
}
