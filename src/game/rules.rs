use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DealError, DrawError};
use crate::hand::{BLACKJACK, Hand, calculate_score, is_blackjack};
use crate::result::RoundStatus;

/// Decides the state of a round from both hands.
///
/// Rules are applied in order, the first match wins:
/// 1. Both sides hold a natural blackjack: tie.
/// 2. Player natural: player wins.
/// 3. Dealer natural: dealer wins.
/// 4. Player bust: dealer wins.
/// 5. Dealer bust: player wins.
/// 6. Dealer has not played yet: the round stays active.
/// 7. Higher score wins, equal scores tie.
#[must_use]
pub fn check_status(player: &[Card], dealer: &[Card], dealer_turn_complete: bool) -> RoundStatus {
    match (is_blackjack(player), is_blackjack(dealer)) {
        (true, true) => return RoundStatus::Tie,
        (true, false) => return RoundStatus::PlayerWon,
        (false, true) => return RoundStatus::DealerWon,
        (false, false) => {}
    }

    let player_score = calculate_score(player);
    let dealer_score = calculate_score(dealer);

    if player_score > BLACKJACK {
        RoundStatus::DealerWon
    } else if dealer_score > BLACKJACK {
        RoundStatus::PlayerWon
    } else if !dealer_turn_complete {
        RoundStatus::Active
    } else if player_score > dealer_score {
        RoundStatus::PlayerWon
    } else if player_score < dealer_score {
        RoundStatus::DealerWon
    } else {
        RoundStatus::Tie
    }
}

/// Deals two cards to the player, then two to the dealer.
///
/// Returns `(player, dealer)`.
///
/// # Errors
///
/// Returns [`DealError::InsufficientCards`] when fewer than four cards are
/// left. The deck is untouched in that case.
pub fn deal_initial(deck: &mut Deck) -> Result<(Hand, Hand), DealError> {
    if deck.len() < 4 {
        return Err(DealError::InsufficientCards);
    }

    let mut player = Hand::new();
    let mut dealer = Hand::new();
    for hand in [&mut player, &mut dealer] {
        for _ in 0..2 {
            draw(deck, hand).map_err(|_| DealError::InsufficientCards)?;
        }
    }

    Ok((player, dealer))
}

/// Moves the top card of the deck into the hand and returns it.
///
/// # Errors
///
/// Returns [`DrawError::EmptyDeck`] when the deck is exhausted. Neither the
/// deck nor the hand is modified in that case.
pub fn draw(deck: &mut Deck, hand: &mut Hand) -> Result<Card, DrawError> {
    let card = deck.draw().ok_or(DrawError::EmptyDeck)?;
    hand.add_card(card);
    Ok(card)
}
