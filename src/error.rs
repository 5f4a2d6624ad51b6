//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when drawing from the deck.
///
/// A standard 52-card single-hand round cannot exhaust the deck, but every
/// drawing operation still surfaces the condition explicitly so that rule
/// extensions (multiple hands, multiple decks) stay safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The deck has no cards left.
    #[error("deck exhausted")]
    DeckExhausted,
}
