//! A single-player blackjack rules engine with optional `no_std` support.
//!
//! The crate provides a [`GameState`] value that holds the deck, both hands,
//! and the turn. Transitions (hit, stand, dealer draw) consume the state and
//! return the successor, so a front end holds the current value and replaces
//! it wholesale on each action.
//!
//! # Example
//!
//! ```
//! use bjsolo::{GameResult, GameState, Turn};
//!
//! let state = GameState::from_seed(42);
//! assert_eq!(state.turn(), Turn::Player);
//!
//! let state = state.player_stands().unwrap();
//! assert_eq!(state.turn(), Turn::Dealer);
//! let _ = state.result();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::DrawError;
pub use game::{GameState, Turn};
pub use hand::Hand;
pub use result::GameResult;
