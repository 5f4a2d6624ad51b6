//! Hand representation and scoring.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Rank};

/// A hand of cards held by one party. Hands grow during a round and never
/// shrink.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Calculates the best legal score of the hand.
    ///
    /// Non-ace cards score their base value (2-10 face value, face cards 10).
    /// With one or more aces, one ace is counted as 11 and the rest as 1 if
    /// that total does not bust; otherwise every ace counts as 1. An empty
    /// hand scores 0.
    #[must_use]
    pub fn score(&self) -> u8 {
        let mut non_ace_sum: u8 = 0;
        let mut aces: u8 = 0;

        for card in &self.cards {
            if card.rank == Rank::Ace {
                aces += 1;
            }
            non_ace_sum = non_ace_sum.saturating_add(card.rank.base_value());
        }

        if aces == 0 {
            return non_ace_sum;
        }

        // One ace as 11 plus (aces - 1) aces as 1, when that stays at or
        // under 21. At most one ace can ever be worth 11.
        let soft = non_ace_sum.saturating_add(10 + aces);
        if soft <= 21 {
            soft
        } else {
            non_ace_sum.saturating_add(aces)
        }
    }

    /// Returns whether the hand is bust (score over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > 21
    }
}
