//! Round flow on top of the rule functions.
//!
//! The free functions in this module are pure: they take a deck and hands
//! explicitly and never keep state between calls. [`Round`] bundles the
//! pieces a persistence layer stores for one round and drives them through
//! the new round / hit / stand flow.

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::hand::{Hand, calculate_score};
use crate::options::RuleOptions;
use crate::result::{RoundStatus, Settlement};

mod actions;
mod dealer;
mod rules;

pub use dealer::{DEALER_STANDS_ON, play_dealer, settle};
pub use rules::{check_status, deal_initial, draw};

/// One round of blackjack between a player and the dealer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Round {
    /// Cards left to draw.
    deck: Deck,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand.
    dealer: Hand,
    /// Current round status.
    status: RoundStatus,
    /// Amount staked on the round.
    bet: usize,
}

impl Round {
    /// Deals a new round from `deck`.
    ///
    /// The round may already be decided when either side is dealt a natural
    /// blackjack.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InsufficientCards`] if the deck holds fewer than
    /// four cards.
    pub fn start(mut deck: Deck, bet: usize) -> Result<Self, DealError> {
        let (player, dealer) = deal_initial(&mut deck)?;
        let status = check_status(player.cards(), dealer.cards(), false);

        Ok(Self {
            deck,
            player,
            dealer,
            status,
            bet,
        })
    }

    /// Rebuilds a round from previously stored parts.
    #[must_use]
    pub const fn from_parts(
        deck: Deck,
        player: Hand,
        dealer: Hand,
        status: RoundStatus,
        bet: usize,
    ) -> Self {
        Self {
            deck,
            player,
            dealer,
            status,
            bet,
        }
    }

    /// Returns the current round status.
    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    /// Returns the amount staked.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's full hand, hole card included.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the remaining deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the player's score.
    #[must_use]
    pub fn player_score(&self) -> u16 {
        self.player.score()
    }

    /// Returns the dealer's full score.
    #[must_use]
    pub fn dealer_score(&self) -> u16 {
        self.dealer.score()
    }

    /// Returns the dealer's face-up card.
    #[must_use]
    pub fn dealer_up_card(&self) -> Option<&Card> {
        self.dealer.cards().first()
    }

    /// Returns the dealer's score as the player may see it.
    ///
    /// While the round is active the hole card stays hidden, so only the
    /// up card counts.
    #[must_use]
    pub fn dealer_visible_score(&self) -> u16 {
        if self.status.is_terminal() {
            self.dealer_score()
        } else {
            self.dealer_up_card()
                .map_or(0, |card| calculate_score(core::slice::from_ref(card)))
        }
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Computes the settlement, or `None` while the round is active.
    #[must_use]
    pub fn settlement(&self, options: &RuleOptions) -> Option<Settlement> {
        settle(self.status, self.player.cards(), self.bet, options)
    }
}
