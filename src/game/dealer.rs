extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::hand::{Hand, is_blackjack};
use crate::options::{RoundingMode, RuleOptions};
use crate::result::{RoundStatus, Settlement};

use super::rules::draw;

/// The dealer stops drawing once their score reaches this value.
pub const DEALER_STANDS_ON: u16 = 17;

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

/// Dealer draws until reaching 17 or the deck runs out.
///
/// Running out of cards is not an error: the dealer simply stands on
/// whatever they hold. Returns the cards drawn, in order.
pub fn play_dealer(deck: &mut Deck, dealer: &mut Hand) -> Vec<Card> {
    let mut drawn_cards = Vec::new();

    while dealer.score() < DEALER_STANDS_ON {
        let Ok(card) = draw(deck, dealer) else {
            break;
        };
        drawn_cards.push(card);
    }

    drawn_cards
}

/// Computes the payout for a decided round.
///
/// Returns `None` while the round is still active.
///
/// * Natural blackjack win: the stake plus `blackjack_pays` times the bet,
///   rounded with `rounding_blackjack`.
/// * Any other win: twice the bet.
/// * Loss: nothing.
/// * Tie: the stake is returned.
///
/// Amounts saturate at `usize::MAX` (and `net` at the `isize` bounds)
/// instead of overflowing.
///
/// ```
/// use bjrules::{Card, Rank, RoundStatus, RuleOptions, Suit, settle};
///
/// let natural = [
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::King, Suit::Hearts),
/// ];
/// let result = settle(RoundStatus::PlayerWon, &natural, 10, &RuleOptions::default()).unwrap();
/// assert_eq!(result.payout, 25);
/// assert_eq!(result.net, 15);
/// ```
#[must_use]
pub fn settle(
    status: RoundStatus,
    player: &[Card],
    bet: usize,
    options: &RuleOptions,
) -> Option<Settlement> {
    let blackjack = status == RoundStatus::PlayerWon && is_blackjack(player);

    let payout = match status {
        RoundStatus::Active => return None,
        RoundStatus::PlayerWon if blackjack => {
            #[expect(
                clippy::cast_precision_loss,
                reason = "f64 has sufficient precision for monetary values"
            )]
            let winnings = (bet as f64) * options.blackjack_pays;
            bet.saturating_add(round_amount(winnings, options.rounding_blackjack))
        }
        RoundStatus::PlayerWon => bet.saturating_mul(2),
        RoundStatus::DealerWon => 0,
        RoundStatus::Tie => bet,
    };

    Some(Settlement {
        status,
        blackjack,
        bet,
        payout,
        net: net_result(payout, bet),
    })
}

fn net_result(payout: usize, bet: usize) -> isize {
    if payout >= bet {
        isize::try_from(payout - bet).unwrap_or(isize::MAX)
    } else {
        isize::try_from(bet - payout).map_or(isize::MIN, |loss| -loss)
    }
}
