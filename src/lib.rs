//! A blackjack rule engine with optional `no_std` support.
//!
//! The rule functions ([`create_deck`], [`calculate_score`], [`check_status`],
//! [`deal_initial`], [`draw`], [`play_dealer`], [`settle`]) are pure: they
//! operate on explicit decks and hands and keep no state of their own.
//! [`Round`] bundles the state a backend persists for one round, and
//! [`Table`] is an in-memory store of rounds and player accounts built on
//! top of it.
//!
//! # Example
//!
//! ```
//! use bjrules::{Deck, Round, RoundStatus};
//!
//! let mut round = Round::start(Deck::seeded(1, 42), 10).unwrap();
//! if round.status() == RoundStatus::Active {
//!     round.stand().unwrap();
//! }
//! assert!(round.status().is_terminal());
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
pub mod options;
pub mod result;
mod sync;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, card_value};
pub use deck::{Deck, create_deck};
pub use error::{ActionError, DealError, DrawError, TableError};
pub use game::{
    DEALER_STANDS_ON, Round, check_status, deal_initial, draw, play_dealer, settle,
};
pub use hand::{BLACKJACK, Hand, calculate_score, is_blackjack, is_bust};
pub use options::{RoundingMode, RuleOptions};
pub use result::{RoundStatus, Settlement};
pub use table::{Account, PlayerId, RoundId, Table};
