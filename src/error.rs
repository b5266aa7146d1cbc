//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Fewer than four cards are left in the deck.
    #[error("not enough cards in the deck to deal initial hands")]
    InsufficientCards,
}

/// Errors that can occur when drawing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The deck has no cards left.
    #[error("cannot draw, deck exhausted")]
    EmptyDeck,
}

/// Errors that can occur during player actions on a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The round has already been decided.
    #[error("round is already complete")]
    RoundOver,
    /// The deck has no cards left.
    #[error("cannot draw, deck exhausted")]
    EmptyDeck,
}

impl From<DrawError> for ActionError {
    fn from(err: DrawError) -> Self {
        match err {
            DrawError::EmptyDeck => Self::EmptyDeck,
        }
    }
}

/// Errors returned by [`Table`](crate::Table) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Round not found.
    #[error("round not found")]
    RoundNotFound,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// The initial deal failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A player action was rejected.
    #[error(transparent)]
    Action(#[from] ActionError),
}
