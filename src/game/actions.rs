use crate::error::DrawError;

use super::{GameState, Turn};

impl GameState {
    /// Player action: Hit (draw one card into the player's hand).
    ///
    /// The turn stays at [`Turn::Player`], so the player may hit repeatedly.
    /// The engine keeps accepting hits after a bust; stopping once the
    /// player's score exceeds 21 is the front end's responsibility.
    ///
    /// Out of turn (during [`Turn::Dealer`]) this is a no-op and returns the
    /// state unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DeckExhausted`] if the deck is empty.
    pub fn player_hits(mut self) -> Result<Self, DrawError> {
        if self.turn != Turn::Player {
            return Ok(self);
        }

        let card = self.deck.draw()?;
        self.player_hand.add_card(card);

        Ok(self)
    }

    /// Player action: Stand (end the player's turn).
    ///
    /// Applies the dealer's drawing policy once before handing over the
    /// turn: if the dealer's score is 16 or less, the dealer draws exactly
    /// one card; otherwise none. The turn then becomes [`Turn::Dealer`].
    /// Callers drive the dealer to its stopping point with
    /// [`dealer_draws`](GameState::dealer_draws).
    ///
    /// Out of turn (during [`Turn::Dealer`]) this is a no-op and returns the
    /// state unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DeckExhausted`] if the dealer must draw and the
    /// deck is empty.
    pub fn player_stands(mut self) -> Result<Self, DrawError> {
        if self.turn != Turn::Player {
            return Ok(self);
        }

        if self.dealer_must_draw() {
            let card = self.deck.draw()?;
            self.dealer_hand.add_card(card);
        }

        self.turn = Turn::Dealer;

        Ok(self)
    }
}
