//! The draw pile.

extern crate alloc;

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// An ordered pile of cards.
///
/// The top of the deck is the end of the underlying sequence, so
/// [`Deck::draw`] removes the last card.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds `num_decks` standard decks merged together, unshuffled.
    #[must_use]
    pub fn standard(num_decks: u8) -> Self {
        let mut cards = Vec::with_capacity(num_decks as usize * DECK_SIZE);

        for _ in 0..num_decks {
            for rank in Rank::ALL {
                for suit in Suit::ALL {
                    cards.push(Card::new(rank, suit));
                }
            }
        }

        Self { cards }
    }

    /// Builds and shuffles `num_decks` decks using a `ChaCha8` generator
    /// seeded with `seed`.
    ///
    /// ```
    /// use bjrules::Deck;
    ///
    /// let a = Deck::seeded(2, 7);
    /// let b = Deck::seeded(2, 7);
    /// assert_eq!(a, b);
    /// assert_eq!(a.len(), 104);
    /// ```
    #[must_use]
    pub fn seeded(num_decks: u8, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        create_deck(num_decks, &mut rng)
    }

    /// Wraps an explicit card sequence. The last card is drawn first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Consumes the deck and returns its cards, bottom first.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

/// Creates `num_decks` standard decks merged together and shuffled uniformly.
pub fn create_deck<R: Rng + ?Sized>(num_decks: u8, rng: &mut R) -> Deck {
    let mut deck = Deck::standard(num_decks);
    deck.cards.shuffle(rng);
    deck
}
