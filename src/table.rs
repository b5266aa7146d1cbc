//! In-memory table: round storage and player accounts.
//!
//! [`Table`] plays the part of the persistence and accounts layers around
//! the rule engine. Every action on a round runs with the round store
//! locked, so two concurrent actions on the same round never interleave.
//! Settlement is applied to the owning account exactly once, as soon as the
//! round is decided.

extern crate alloc;

use core::sync::atomic::{AtomicU32, Ordering};

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::Card;
use crate::deck::{Deck, create_deck};
use crate::error::TableError;
use crate::game::Round;
use crate::options::RuleOptions;
use crate::result::{RoundStatus, Settlement};
use crate::sync::Mutex;

/// Identifier of a player account.
pub type PlayerId = u32;

/// Identifier of a stored round.
pub type RoundId = u32;

/// A player's balance and record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Account {
    /// Money available for betting.
    pub balance: usize,
    /// Rounds won.
    pub wins: u32,
    /// Rounds lost.
    pub losses: u32,
    /// Rounds tied.
    pub ties: u32,
}

impl Account {
    fn apply(&mut self, settlement: &Settlement) {
        self.balance = self.balance.saturating_add(settlement.payout);
        match settlement.status {
            RoundStatus::PlayerWon => self.wins = self.wins.saturating_add(1),
            RoundStatus::DealerWon => self.losses = self.losses.saturating_add(1),
            RoundStatus::Tie => self.ties = self.ties.saturating_add(1),
            RoundStatus::Active => {}
        }
    }
}

#[derive(Debug)]
struct StoredRound {
    owner: PlayerId,
    round: Round,
    settled: bool,
}

/// A blackjack table holding accounts and rounds in memory.
pub struct Table {
    /// Rule options applied to every round.
    pub options: RuleOptions,
    next_player: AtomicU32,
    next_round: AtomicU32,
    accounts: Mutex<HashMap<PlayerId, Account>>,
    rounds: Mutex<HashMap<RoundId, StoredRound>>,
    rng: Mutex<ChaCha8Rng>,
}

impl Table {
    /// Creates a new table with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrules::{RuleOptions, Table};
    ///
    /// let table = Table::new(RuleOptions::default(), 42);
    /// let player = table.open_account(100);
    /// let round = table.start_round(player, 10).unwrap();
    /// assert_eq!(table.round(round).unwrap().bet(), 10);
    /// ```
    #[must_use]
    pub fn new(options: RuleOptions, seed: u64) -> Self {
        Self {
            options,
            next_player: AtomicU32::new(0),
            next_round: AtomicU32::new(0),
            accounts: Mutex::new(HashMap::new()),
            rounds: Mutex::new(HashMap::new()),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Opens an account with the given starting balance.
    pub fn open_account(&self, balance: usize) -> PlayerId {
        let id = self.next_player.fetch_add(1, Ordering::SeqCst);
        self.accounts.with(|accounts| {
            accounts.insert(
                id,
                Account {
                    balance,
                    ..Account::default()
                },
            );
        });
        tracing::debug!(player = id, balance, "account opened");
        id
    }

    /// Closes an account and returns its final state.
    ///
    /// Open rounds are left as they are and the bets already taken for them
    /// are not refunded. Such a round can still be played to the end, but
    /// its payout is not credited anywhere.
    pub fn close_account(&self, player_id: PlayerId) -> Option<Account> {
        self.accounts.with(|accounts| accounts.remove(&player_id))
    }

    /// Returns a copy of the player's account.
    pub fn account(&self, player_id: PlayerId) -> Option<Account> {
        self.accounts.with(|accounts| accounts.get(&player_id).copied())
    }

    /// Returns a snapshot of the round.
    pub fn round(&self, round_id: RoundId) -> Option<Round> {
        self.rounds
            .with(|rounds| rounds.get(&round_id).map(|stored| stored.round.clone()))
    }

    /// Returns the ids of every round owned by the player, oldest first.
    pub fn rounds_for(&self, player_id: PlayerId) -> Vec<RoundId> {
        let mut ids: Vec<RoundId> = self.rounds.with(|rounds| {
            rounds
                .iter()
                .filter(|(_, stored)| stored.owner == player_id)
                .map(|(id, _)| *id)
                .collect()
        });
        ids.sort_unstable();
        ids
    }

    /// Returns the settlement of a decided round.
    pub fn settlement(&self, round_id: RoundId) -> Option<Settlement> {
        self.round(round_id)?.settlement(&self.options)
    }

    /// Places a bet and deals a new round from a freshly shuffled deck.
    ///
    /// The bet is taken from the player's balance up front. If either side is
    /// dealt a natural blackjack the round is settled immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the bet is zero, the player cannot be found, the
    /// player lacks funds, or the configured deck is too small to deal.
    pub fn start_round(&self, player_id: PlayerId, bet: usize) -> Result<RoundId, TableError> {
        let deck = self
            .rng
            .with(|rng| create_deck(self.options.decks, rng));
        self.start_round_with_deck(player_id, bet, deck)
    }

    /// Places a bet and deals a new round from the given deck.
    ///
    /// Used to replay a known deck order; otherwise identical to
    /// [`Table::start_round`].
    ///
    /// # Errors
    ///
    /// Returns an error if the bet is zero, the player cannot be found, the
    /// player lacks funds, or the deck holds fewer than four cards. The
    /// balance is untouched on error.
    pub fn start_round_with_deck(
        &self,
        player_id: PlayerId,
        bet: usize,
        deck: Deck,
    ) -> Result<RoundId, TableError> {
        if bet == 0 {
            return Err(TableError::ZeroBet);
        }

        self.accounts.with(|accounts| {
            let account = accounts
                .get_mut(&player_id)
                .ok_or(TableError::PlayerNotFound)?;
            if account.balance < bet {
                return Err(TableError::InsufficientFunds);
            }
            account.balance -= bet;
            Ok(())
        })?;

        let round = match Round::start(deck, bet) {
            Ok(round) => round,
            Err(err) => {
                tracing::warn!(player = player_id, error = %err, "deck could not be dealt");
                self.credit(player_id, bet);
                return Err(err.into());
            }
        };

        let round_id = self.next_round.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(
            round = round_id,
            player = player_id,
            bet,
            status = ?round.status(),
            "round started"
        );

        self.rounds.with(|rounds| {
            let stored = rounds.entry(round_id).or_insert(StoredRound {
                owner: player_id,
                round,
                settled: false,
            });
            self.settle_if_decided(round_id, stored);
        });

        Ok(round_id)
    }

    /// Player action: Hit on the given round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round cannot be found, is already decided, or
    /// its deck is exhausted.
    pub fn hit(&self, round_id: RoundId) -> Result<Card, TableError> {
        self.with_round(round_id, |round| Ok(round.hit()?))
    }

    /// Player action: Stand on the given round.
    ///
    /// Returns the cards the dealer drew.
    ///
    /// # Errors
    ///
    /// Returns an error if the round cannot be found or is already decided.
    pub fn stand(&self, round_id: RoundId) -> Result<Vec<Card>, TableError> {
        self.with_round(round_id, |round| Ok(round.stand()?))
    }

    fn with_round<T>(
        &self,
        round_id: RoundId,
        action: impl FnOnce(&mut Round) -> Result<T, TableError>,
    ) -> Result<T, TableError> {
        self.rounds.with(|rounds| {
            let stored = rounds
                .get_mut(&round_id)
                .ok_or(TableError::RoundNotFound)?;
            let output = action(&mut stored.round)?;

            tracing::debug!(
                round = round_id,
                player_score = stored.round.player_score(),
                status = ?stored.round.status(),
                "round updated"
            );

            self.settle_if_decided(round_id, stored);
            Ok(output)
        })
    }

    /// Applies the settlement once the round is decided. Must be called with
    /// the round store locked.
    fn settle_if_decided(&self, round_id: RoundId, stored: &mut StoredRound) {
        if stored.settled {
            return;
        }
        let Some(settlement) = stored.round.settlement(&self.options) else {
            return;
        };
        let credited = self.accounts.with(|accounts| {
            if let Some(account) = accounts.get_mut(&stored.owner) {
                account.apply(&settlement);
                true
            } else {
                false
            }
        });
        stored.settled = true;

        if credited {
            tracing::info!(
                round = round_id,
                player = stored.owner,
                status = ?settlement.status,
                payout = settlement.payout,
                net = settlement.net,
                "round settled"
            );
        } else {
            tracing::warn!(
                round = round_id,
                player = stored.owner,
                "round settled for a closed account"
            );
        }
    }

    fn credit(&self, player_id: PlayerId, amount: usize) {
        self.accounts.with(|accounts| {
            if let Some(account) = accounts.get_mut(&player_id) {
                account.balance = account.balance.saturating_add(amount);
            }
        });
    }
}
