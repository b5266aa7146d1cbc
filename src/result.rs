//! Round status and settlement types.

/// State of a round.
///
/// [`RoundStatus::Active`] is the only non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum RoundStatus {
    /// The round is still being played.
    #[default]
    Active,
    /// The player won.
    PlayerWon,
    /// The dealer won.
    DealerWon,
    /// Push.
    Tie,
}

impl RoundStatus {
    /// Returns whether the round has been decided.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// Money movement for a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settlement {
    /// The terminal status that was settled.
    pub status: RoundStatus,
    /// Whether the player won with a natural blackjack.
    pub blackjack: bool,
    /// The amount staked.
    pub bet: usize,
    /// Amount handed back to the player, stake included.
    pub payout: usize,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
}
