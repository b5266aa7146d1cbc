extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ActionError;
use crate::result::RoundStatus;

use super::{Round, check_status, draw, play_dealer};

impl Round {
    fn ensure_active(&self) -> Result<(), ActionError> {
        if self.status == RoundStatus::Active {
            Ok(())
        } else {
            Err(ActionError::RoundOver)
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Returns the card drawn. A bust ends the round in the dealer's favour.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::RoundOver`] if the round is decided, or
    /// [`ActionError::EmptyDeck`] if no cards are left. The round is left
    /// unchanged on error.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_active()?;

        let card = draw(&mut self.deck, &mut self.player)?;
        self.status = check_status(self.player.cards(), self.dealer.cards(), false);

        Ok(card)
    }

    /// Player action: Stand (the dealer plays out their hand).
    ///
    /// Returns the cards drawn by the dealer. The round is always decided
    /// afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::RoundOver`] if the round is already decided.
    pub fn stand(&mut self) -> Result<Vec<Card>, ActionError> {
        self.ensure_active()?;

        let drawn = play_dealer(&mut self.deck, &mut self.dealer);
        self.status = check_status(self.player.cards(), self.dealer.cards(), true);

        Ok(drawn)
    }
}
