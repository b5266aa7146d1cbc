//! Card types and valuation.

use core::fmt;

/// Card suit.
///
/// Suits never affect scoring; they are kept so callers can display cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits in deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Single-letter abbreviation used for compact display.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Spades => 'S',
        }
    }
}

/// Card rank.
///
/// With the `serde` feature, number ranks are written as integers (`7`) and
/// court cards and the Ace as letters (`"J"`, `"A"`). Both integers and
/// strings such as `"7"` are accepted on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All thirteen ranks, lowest first.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns every value this rank may contribute to a hand.
    ///
    /// Face cards are worth 10 and an Ace is worth either 1 or 11.
    ///
    /// ```
    /// use bjrules::Rank;
    ///
    /// assert_eq!(Rank::Seven.values(), &[7]);
    /// assert_eq!(Rank::Queen.values(), &[10]);
    /// assert_eq!(Rank::Ace.values(), &[1, 11]);
    /// ```
    #[must_use]
    pub const fn values(self) -> &'static [u16] {
        match self {
            Self::Two => &[2],
            Self::Three => &[3],
            Self::Four => &[4],
            Self::Five => &[5],
            Self::Six => &[6],
            Self::Seven => &[7],
            Self::Eight => &[8],
            Self::Nine => &[9],
            Self::Ten | Self::Jack | Self::Queen | Self::King => &[10],
            Self::Ace => &[1, 11],
        }
    }

    /// Short label as printed on the card face.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }

    /// Returns whether this is a Jack, Queen or King.
    #[must_use]
    pub const fn is_face(self) -> bool {
        matches!(self, Self::Jack | Self::Queen | Self::King)
    }

    /// Returns the pip count of a number card, or `None` for court cards
    /// and the Ace.
    #[must_use]
    pub const fn number(self) -> Option<u8> {
        match self {
            Self::Two => Some(2),
            Self::Three => Some(3),
            Self::Four => Some(4),
            Self::Five => Some(5),
            Self::Six => Some(6),
            Self::Seven => Some(7),
            Self::Eight => Some(8),
            Self::Nine => Some(9),
            Self::Ten => Some(10),
            Self::Jack | Self::Queen | Self::King | Self::Ace => None,
        }
    }

    /// Looks up a number card by pip count (2 through 10).
    #[must_use]
    pub const fn from_number(number: u64) -> Option<Self> {
        match number {
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            5 => Some(Self::Five),
            6 => Some(Self::Six),
            7 => Some(Self::Seven),
            8 => Some(Self::Eight),
            9 => Some(Self::Nine),
            10 => Some(Self::Ten),
            _ => None,
        }
    }

    /// Looks up a rank by its [`label`](Self::label).
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rank| rank.label() == label)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rank {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.number() {
            Some(number) => serializer.serialize_u8(number),
            None => serializer.serialize_str(self.label()),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rank {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RankVisitor;

        impl serde::de::Visitor<'_> for RankVisitor {
            type Value = Rank;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a card rank: 2 through 10, \"J\", \"Q\", \"K\" or \"A\"")
            }

            fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<Rank, E> {
                Rank::from_number(value).ok_or_else(|| {
                    E::invalid_value(serde::de::Unexpected::Unsigned(value), &self)
                })
            }

            fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<Rank, E> {
                u64::try_from(value)
                    .ok()
                    .and_then(Rank::from_number)
                    .ok_or_else(|| E::invalid_value(serde::de::Unexpected::Signed(value), &self))
            }

            fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Rank, E> {
                Rank::from_label(value)
                    .ok_or_else(|| E::invalid_value(serde::de::Unexpected::Str(value), &self))
            }
        }

        deserializer.deserialize_any(RankVisitor)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit.letter())
    }
}

/// Returns the possible values of a single card.
///
/// See [`Rank::values`].
#[must_use]
pub const fn card_value(card: Card) -> &'static [u16] {
    card.rank.values()
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
