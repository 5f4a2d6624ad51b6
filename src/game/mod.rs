//! Game state and round flow.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DrawError;
use crate::hand::Hand;

mod actions;
mod dealer;
pub mod state;

pub use state::Turn;

/// The full state of one blackjack round: the live deck, both hands, and
/// whose turn it is.
///
/// The state is a plain value. Transitions such as [`player_hits`] consume
/// the state and return the successor, so the holder replaces its value
/// wholesale on each action. Resetting a round is simply calling
/// [`setup`] (or [`from_seed`]) again.
///
/// [`player_hits`]: GameState::player_hits
/// [`setup`]: GameState::setup
/// [`from_seed`]: GameState::from_seed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Cards remaining in the deck.
    deck: Deck,
    /// The player's hand.
    player_hand: Hand,
    /// The dealer's hand.
    dealer_hand: Hand,
    /// Whose turn it is.
    turn: Turn,
}

impl GameState {
    /// Starts a round: builds a standard deck, shuffles it with the given
    /// random source, and deals the opening hands.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::GameState;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(42);
    /// let state = GameState::setup(&mut rng);
    /// assert_eq!(state.cards_remaining(), 48);
    /// ```
    #[expect(
        clippy::missing_panics_doc,
        reason = "a full 52-card deck always covers the opening deal"
    )]
    #[must_use]
    pub fn setup<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Deck::standard();
        deck.shuffle(rng);

        Self::deal_from(deck).expect("a full 52-card deck always covers the opening deal")
    }

    /// Starts a round with a `ChaCha8` random source seeded from `seed`.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::setup(&mut rng)
    }

    /// Deals the opening hands from an explicit deck: two cards to the
    /// player, then two to the dealer, with the turn set to [`Turn::Player`].
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DeckExhausted`] if the deck holds fewer than
    /// four cards.
    pub fn deal_from(mut deck: Deck) -> Result<Self, DrawError> {
        let mut player_hand = Hand::new();
        let mut dealer_hand = Hand::new();

        // Player's two cards first, then the dealer's.
        player_hand.add_card(deck.draw()?);
        player_hand.add_card(deck.draw()?);
        dealer_hand.add_card(deck.draw()?);
        dealer_hand.add_card(deck.draw()?);

        Ok(Self {
            deck,
            player_hand,
            dealer_hand,
            turn: Turn::Player,
        })
    }

    /// Returns whose turn it is.
    #[must_use]
    pub const fn turn(&self) -> Turn {
        self.turn
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns the live deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the dealer's up card (the first card dealt to the dealer).
    ///
    /// A front end showing the table during [`Turn::Player`] displays this
    /// card and keeps the dealer's second card face down.
    #[must_use]
    pub fn dealer_up_card(&self) -> Option<&Card> {
        self.dealer_hand.cards().first()
    }
}
