//! Hands and score evaluation.

extern crate alloc;

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::card::{Card, card_value};

/// Highest score that does not bust.
pub const BLACKJACK: u16 = 21;

/// Computes the best score for a set of cards.
///
/// Every combination of Ace values is considered. The result is the highest
/// total not above 21, or the lowest total when every combination busts.
/// An empty slice scores 0.
///
/// ```
/// use bjrules::{Card, Rank, Suit, calculate_score};
///
/// let hand = [
///     Card::new(Rank::Ace, Suit::Hearts),
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::Nine, Suit::Clubs),
/// ];
/// assert_eq!(calculate_score(&hand), 21);
/// ```
#[must_use]
pub fn calculate_score(cards: &[Card]) -> u16 {
    let mut totals = BTreeSet::from([0u16]);

    for card in cards {
        totals = card_value(*card)
            .iter()
            .flat_map(|value| totals.iter().map(move |total| total.saturating_add(*value)))
            .collect();
    }

    totals
        .range(..=BLACKJACK)
        .next_back()
        .or_else(|| totals.first())
        .copied()
        .unwrap_or(0)
}

/// Returns whether the cards form a natural blackjack (two cards worth 21).
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && calculate_score(cards) == BLACKJACK
}

/// Returns whether the cards are worth more than 21.
#[must_use]
pub fn is_bust(cards: &[Card]) -> bool {
    calculate_score(cards) > BLACKJACK
}

/// The cards dealt to one side of the table.
///
/// A hand only grows; cards are appended in the order they are dealt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
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

    /// Calculates the value of the hand.
    #[must_use]
    pub fn score(&self) -> u16 {
        calculate_score(&self.cards)
    }

    /// Returns whether the hand is a natural blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        is_bust(&self.cards)
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
}
