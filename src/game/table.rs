//! The table orchestrator.
//!
//! A [`Table`] owns the fixed seat array, the dealer button, the
//! current-actor pointer, and the per-hand state. It exposes every
//! player-facing operation, drives street progression, and settles
//! pots. One table processes one action at a time to full completion;
//! hosts serialize concurrent calls into it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use super::constants::{DECK_SIZE, MAX_SEATS, MIN_PLAYERS_TO_DEAL};
use super::entities::{Card, Chips, Hand, Player, SeatIndex, Street};
use super::events::{EventSink, NullSink, TableEvent};
use super::providers::{DeckProvider, HandRanker, HandStrength, ShuffledDeck};
use super::settlement::{self, Contender};

/// Rejections raised at construction time. A table that fails
/// validation is never built.
#[derive(Clone, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum ConfigError {
    #[error("min_players must be at least {MIN_PLAYERS_TO_DEAL}")]
    NotEnoughSeats,
    #[error("max_players must be at most {MAX_SEATS}")]
    TooManySeats,
    #[error("min_players must not exceed max_players")]
    SeatBoundsInverted,
    #[error("big blind must be greater than the small blind")]
    BlindsInverted,
    #[error("buy-in range is empty")]
    EmptyBuyInRange,
}

/// Per-action rejections. Every one of these is recovered locally: the
/// action performs no mutation and the table keeps running.
#[derive(Clone, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum ActionError {
    #[error("not your turn")]
    OutOfTurn,
    #[error("invalid amount")]
    InvalidAmount,
    #[error("no hand in progress")]
    NoActiveHand,
    #[error("can't check a live bet")]
    CannotCheck,
    #[error("unknown player")]
    UnknownPlayer,
    #[error("name already seated")]
    NameTaken,
    #[error("buy-in outside the table's range")]
    BuyInOutOfRange,
    #[error("no seat available")]
    TableFull,
}

/// Straddle configuration values:
/// -1: unlimited straddles (the last player able to straddle is the
///     dealer, so the effective cap is active players - 2)
///  0: no straddling
///  n: exactly n extra straddles, capped at active players - 2
/// Anything below -1 disables straddling and logs a warning.
pub type StraddleLimit = i32;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TableConfig {
    pub small_blind: Chips,
    pub big_blind: Chips,
    pub min_players: usize,
    pub max_players: usize,
    pub min_buy_in: Chips,
    pub max_buy_in: Chips,
    pub straddle_limit: StraddleLimit,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            small_blind: 10,
            big_blind: 20,
            min_players: 2,
            max_players: MAX_SEATS,
            min_buy_in: 400,
            max_buy_in: 2000,
            straddle_limit: 0,
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_players < MIN_PLAYERS_TO_DEAL {
            return Err(ConfigError::NotEnoughSeats);
        }
        if self.max_players > MAX_SEATS {
            return Err(ConfigError::TooManySeats);
        }
        if self.min_players > self.max_players {
            return Err(ConfigError::SeatBoundsInverted);
        }
        if self.big_blind <= self.small_blind {
            return Err(ConfigError::BlindsInverted);
        }
        if self.min_buy_in > self.max_buy_in {
            return Err(ConfigError::EmptyBuyInRange);
        }
        Ok(())
    }
}

/// One entry in the result snapshot of the most recent hand.
#[derive(Clone, Debug, Serialize)]
pub struct WinnerSummary {
    pub name: String,
    pub seat: SeatIndex,
    /// Chips collected from the pot.
    pub amount: Chips,
    /// Strength of the winning hand; `None` when the pot was taken
    /// uncontested and no ranking happened.
    pub hand: Option<HandStrength>,
    /// Stack after the payout.
    pub stack: Chips,
}

pub struct Table {
    config: TableConfig,
    seats: Vec<Option<Player>>,
    dealer: SeatIndex,
    actor: Option<SeatIndex>,
    hand: Option<Hand>,
    winners: Vec<WinnerSummary>,
    losers: Vec<String>,
    deck_provider: Box<dyn DeckProvider>,
    ranker: Box<dyn HandRanker>,
    events: Box<dyn EventSink>,
}

impl Table {
    pub fn new(config: TableConfig, ranker: Box<dyn HandRanker>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            seats: (0..config.max_players).map(|_| None).collect(),
            dealer: 0,
            actor: None,
            hand: None,
            winners: Vec::new(),
            losers: Vec::new(),
            deck_provider: Box::new(ShuffledDeck),
            ranker,
            events: Box::new(NullSink),
            config,
        })
    }

    /// Replace the default shuffled deck, e.g. with a scripted one.
    #[must_use]
    pub fn with_deck_provider(mut self, deck_provider: Box<dyn DeckProvider>) -> Self {
        self.deck_provider = deck_provider;
        self
    }

    /// Attach the observer this table publishes to.
    #[must_use]
    pub fn with_event_sink(mut self, events: Box<dyn EventSink>) -> Self {
        self.events = events;
        self
    }

    // === Seat & membership management ===

    /// Seat a player at the lowest free seat, or reactivate their own
    /// seat if they were marked leaving. New players spectate until the
    /// next round boundary.
    pub fn add_player(
        &mut self,
        name: &str,
        stack: Chips,
        is_straddling: bool,
    ) -> Result<SeatIndex, ActionError> {
        if let Some(seat) = self.seat_of(name) {
            let Some(player) = self.seats[seat].as_mut() else {
                return Err(ActionError::NameTaken);
            };
            if player.leaving {
                player.leaving = false;
                player.stack = stack;
                player.is_straddling = is_straddling;
                log::info!("{name} rejoined at seat {seat}");
                return Ok(seat);
            }
            return Err(ActionError::NameTaken);
        }
        if stack < self.config.min_buy_in || stack > self.config.max_buy_in {
            return Err(ActionError::BuyInOutOfRange);
        }
        // Seats tombstoned mid-hand stay reserved until the boundary
        // clears them; only truly empty seats are assignable then.
        let reclaim_leaving = self.hand.is_none();
        let seat = self
            .seats
            .iter()
            .position(|slot| match slot {
                None => true,
                Some(player) => reclaim_leaving && player.leaving,
            })
            .ok_or(ActionError::TableFull)?;
        self.seats[seat] = Some(Player::new(name, stack, is_straddling, seat));
        log::info!("{name} took seat {seat}");
        Ok(seat)
    }

    /// Mark a player as leaving. Their seat is freed at the next round
    /// boundary; if a hand is live their cards are folded immediately
    /// and the committed chips stay in play.
    pub fn remove_player(&mut self, name: &str) -> Result<(), ActionError> {
        let seat = self.seat_of(name).ok_or(ActionError::UnknownPlayer)?;
        let hand_live = self.is_hand_active();
        let Some(player) = self.seats[seat].as_mut() else {
            return Err(ActionError::UnknownPlayer);
        };
        player.leaving = true;
        log::info!("{name} is leaving the table");
        if hand_live && player.in_hand && !player.folded {
            let surrendered = player.fold_hand();
            if let Some(hand) = self.hand.as_mut() {
                hand.pot += surrendered;
                *hand.contributions.entry(seat).or_default() += surrendered;
            }
            self.progress();
        }
        Ok(())
    }

    /// Runs only between hands: clears leaving seats, activates
    /// waiting seats, and re-anchors the dealer button.
    fn remove_and_add_players(&mut self) {
        for slot in self.seats.iter_mut() {
            if slot.as_ref().is_some_and(|p| p.leaving) {
                if let Some(p) = slot.take() {
                    log::info!("{} left the table", p.name);
                }
            }
        }
        for player in self.seats.iter_mut().flatten() {
            player.in_hand = true;
        }
        if self.seats.iter().flatten().count() < MIN_PLAYERS_TO_DEAL {
            self.dealer = 0;
            return;
        }
        // If the button seat was vacated, pull it back to the previous
        // occupied seat so the upcoming rotation lands on the seat
        // after the departed dealer.
        if self.seats[self.dealer].is_none() {
            self.dealer = self.prev_seat_where(self.dealer, |p| p.in_hand);
        }
    }

    // === Hand lifecycle ===

    /// Create the first hand if none exists. Subsequent hands come
    /// from [`Table::init_new_round`].
    pub fn start_game(&mut self) {
        if self.hand.is_none() {
            self.begin_hand(false);
        }
    }

    /// Boundary operation: reseats players, rotates the dealer one
    /// active seat, deals hole cards, and posts blinds and straddles.
    /// Clears the active hand instead if fewer than two eligible
    /// players remain.
    pub fn init_new_round(&mut self) {
        self.begin_hand(true);
    }

    fn begin_hand(&mut self, rotate_dealer: bool) {
        self.remove_and_add_players();
        let dealt_seats: Vec<SeatIndex> = self.in_hand_seats();
        if dealt_seats.len() < MIN_PLAYERS_TO_DEAL {
            log::info!(
                "only {} player(s) seated, waiting for more",
                dealt_seats.len()
            );
            self.hand = None;
            self.actor = None;
            return;
        }
        if rotate_dealer {
            self.dealer = self.next_seat_where(self.dealer, |p| p.in_hand);
        }
        self.winners.clear();
        self.losers.clear();
        for player in self.seats.iter_mut().flatten() {
            if player.in_hand {
                player.reset_for_hand();
            }
        }

        let mut deck = Vec::with_capacity(DECK_SIZE);
        self.deck_provider.fill(&mut deck);
        let mut hand = Hand::new(deck);
        for &seat in &dealt_seats {
            hand.contributions.insert(seat, 0);
        }
        for &seat in &dealt_seats {
            let cards = [hand.draw(), hand.draw()];
            if let Some(player) = self.seats[seat].as_mut() {
                player.hole_cards.extend(cards);
            }
        }
        self.hand = Some(hand);
        log::info!(
            "new hand: {} players, dealer at seat {}",
            dealt_seats.len(),
            self.dealer
        );

        self.post_blinds_and_straddles();
        self.events.publish(TableEvent::HandStarted);
        // Short blinds can leave nobody able to act; progress either
        // lands on the first actor or races the board out.
        self.progress();
    }

    fn post_blinds_and_straddles(&mut self) {
        let small_blind_seat = self.next_seat_where(self.dealer, |p| p.in_hand);
        let big_blind_seat = self.next_seat_where(small_blind_seat, |p| p.in_hand);
        self.post_blind(small_blind_seat, self.config.small_blind);
        self.post_blind(big_blind_seat, self.config.big_blind);

        let mut last_poster = big_blind_seat;
        for k in 0..self.max_straddles() {
            let seat = self.next_seat_where(last_poster, |p| p.in_hand);
            let amount = self
                .config
                .big_blind
                .saturating_mul(2u32.saturating_pow(k as u32 + 1));
            let Some(player) = self.seats[seat].as_ref() else {
                break;
            };
            if !player.is_straddling {
                break;
            }
            if player.stack < amount {
                log::debug!("{} cannot cover the {amount} straddle", player.name);
                break;
            }
            self.post_blind(seat, amount);
            last_poster = seat;
        }
        self.actor = Some(self.next_seat_where(last_poster, |p| p.in_hand));
    }

    /// Post a forced bet, capped by the poster's stack and by the
    /// largest stake any other active player could still contest.
    fn post_blind(&mut self, seat: SeatIndex, amount: Chips) {
        let cover = self.best_other_stake(seat);
        let Some(player) = self.seats[seat].as_mut() else {
            return;
        };
        let posted = player.commit(amount.min(cover));
        // Forced bets do not count as acting.
        player.has_acted = false;
        log::debug!("{} posts {posted}", player.name);
    }

    /// How many straddles the current lineup allows.
    #[must_use]
    pub fn max_straddles(&self) -> usize {
        let active = self.in_hand_seats().len();
        if active <= 2 {
            return 0;
        }
        let limit = self.config.straddle_limit;
        if limit >= 0 && (limit as usize) <= active - 2 {
            return limit as usize;
        }
        if limit == -1 || limit > 0 {
            return active - 2;
        }
        log::warn!("invalid straddle_limit {limit}, straddling disabled");
        0
    }

    // === Player actions ===

    /// Put `amount` additional chips behind, clamped to the stack
    /// (an oversized bet is simply all-in). Returns the chips moved.
    pub fn bet(&mut self, name: &str, amount: i64) -> Result<Chips, ActionError> {
        if amount < 0 {
            log::debug!("{name} tried to bet {amount}");
            return Err(ActionError::InvalidAmount);
        }
        let seat = self.actor_guard(name)?;
        let Some(player) = self.seats[seat].as_mut() else {
            return Err(ActionError::OutOfTurn);
        };
        let want = amount.min(i64::from(player.stack)) as Chips;
        let moved = player.commit(want);
        log::info!("{name} bets {moved}");
        self.progress();
        Ok(moved)
    }

    /// Match the street's maximum bet, going all-in if the stack is
    /// short. Returns the chips moved.
    pub fn call(&mut self, name: &str) -> Result<Chips, ActionError> {
        let seat = self.actor_guard(name)?;
        let max_bet = self.max_bet();
        let Some(player) = self.seats[seat].as_mut() else {
            return Err(ActionError::OutOfTurn);
        };
        let owed = max_bet.saturating_sub(player.current_bet);
        let moved = player.commit(owed);
        if player.all_in {
            log::info!("{name} calls all-in for {moved}");
        } else {
            log::info!("{name} calls {moved}");
        }
        self.progress();
        Ok(moved)
    }

    /// Pre-flop convenience call: matches the big blind, but never
    /// puts in more than the largest stake any other live stack could
    /// still contest. Returns the chips moved.
    pub fn call_blind(&mut self, name: &str) -> Result<Chips, ActionError> {
        let seat = self.actor_guard(name)?;
        let max_bet = self.max_bet();
        let small_blind_seat = self.next_seat_where(self.dealer, |p| p.in_hand);
        let big_blind_seat = self.next_seat_where(small_blind_seat, |p| p.in_hand);
        let cover = self.best_other_stake(seat);
        let Some(player) = self.seats[seat].as_mut() else {
            return Err(ActionError::OutOfTurn);
        };
        let total = player.stack + player.current_bet;
        let target = if seat == big_blind_seat || max_bet >= self.config.big_blind {
            max_bet.min(total)
        } else {
            cover.min(self.config.big_blind).min(total)
        };
        let owed = target.saturating_sub(player.current_bet);
        let moved = player.commit(owed);
        log::info!("{name} calls the blind for {moved}");
        self.progress();
        Ok(moved)
    }

    /// Commit the whole stack. Returns the chips moved.
    pub fn all_in(&mut self, name: &str) -> Result<Chips, ActionError> {
        let seat = self.actor_guard(name)?;
        let Some(player) = self.seats[seat].as_mut() else {
            return Err(ActionError::OutOfTurn);
        };
        let stack = player.stack;
        let moved = player.commit(stack);
        log::info!("{name} is all-in for {moved}");
        self.progress();
        Ok(moved)
    }

    /// Pass without betting. Legal only when the player's current bet
    /// already matches the street maximum; this covers the big blind
    /// closing an unraised pre-flop round, which is really a
    /// zero-amount call.
    pub fn check(&mut self, name: &str) -> Result<(), ActionError> {
        let seat = self.actor_guard(name)?;
        let max_bet = self.max_bet();
        let Some(player) = self.seats[seat].as_mut() else {
            return Err(ActionError::OutOfTurn);
        };
        if player.current_bet != max_bet {
            log::debug!("{name} unable to check");
            return Err(ActionError::CannotCheck);
        }
        player.commit(0);
        log::info!("{name} checks");
        self.progress();
        Ok(())
    }

    /// Give up the hand. The surrendered bet goes straight into the
    /// pot and the player takes no further part in the hand.
    pub fn fold(&mut self, name: &str) -> Result<(), ActionError> {
        let seat = self.actor_guard(name)?;
        let Some(player) = self.seats[seat].as_mut() else {
            return Err(ActionError::OutOfTurn);
        };
        let surrendered = player.fold_hand();
        log::info!("{name} folds");
        if let Some(hand) = self.hand.as_mut() {
            hand.pot += surrendered;
            *hand.contributions.entry(seat).or_default() += surrendered;
        }
        self.progress();
        Ok(())
    }

    fn actor_guard(&self, name: &str) -> Result<SeatIndex, ActionError> {
        let Some(seat) = self.actor else {
            return Err(ActionError::NoActiveHand);
        };
        if self.hand.is_none() {
            return Err(ActionError::NoActiveHand);
        }
        match self.seats[seat].as_ref() {
            Some(player) if player.name == name => Ok(seat),
            _ => {
                log::debug!("{name} tried to act out of turn");
                Err(ActionError::OutOfTurn)
            }
        }
    }

    // === Round progression ===

    /// Re-evaluate the table after a mutation: hand the action to the
    /// next seat that owes a move, or close the betting round and
    /// advance the street. Cascades through streets nobody can bet on
    /// (everyone all-in) straight to settlement.
    fn progress(&mut self) {
        loop {
            if self.hand.is_none() || self.actor.is_none() {
                return;
            }
            let live = self
                .seats
                .iter()
                .flatten()
                .filter(|p| p.in_hand && !p.folded)
                .count();
            if live <= 1 {
                self.settle_uncontested();
                return;
            }
            if let Some(seat) = self.find_pending_seat() {
                self.actor = Some(seat);
                self.events.publish(TableEvent::ActorChanged);
                return;
            }
            // Betting round complete.
            self.sweep_bets();
            let street = match self.hand.as_ref() {
                Some(hand) => hand.street,
                None => return,
            };
            match street {
                Street::River | Street::Showdown => {
                    self.settle_showdown();
                    return;
                }
                _ => self.advance_street(),
            }
        }
    }

    /// First seat at or after the current actor that still owes a
    /// move: in the hand, not folded, not all-in, and either yet to
    /// act or short of the street maximum.
    fn find_pending_seat(&self) -> Option<SeatIndex> {
        let start = self.actor?;
        let max_bet = self.max_bet();
        let seat_count = self.seats.len();
        for offset in 0..seat_count {
            let seat = (start + offset) % seat_count;
            let Some(p) = self.seats[seat].as_ref() else {
                continue;
            };
            if p.in_hand
                && !p.folded
                && !p.all_in
                && (!p.has_acted || p.current_bet != max_bet)
            {
                return Some(seat);
            }
        }
        None
    }

    /// Move every outstanding bet into the pot and the contribution
    /// ledger, and rearm the acted flags for the next street.
    fn sweep_bets(&mut self) {
        let Some(hand) = self.hand.as_mut() else {
            return;
        };
        for player in self.seats.iter_mut().flatten() {
            if !player.in_hand {
                continue;
            }
            player.has_acted = false;
            let bet = std::mem::take(&mut player.current_bet);
            if bet > 0 {
                hand.pot += bet;
                *hand.contributions.entry(player.seat).or_default() += bet;
            }
        }
    }

    fn advance_street(&mut self) {
        let Some(hand) = self.hand.as_mut() else {
            return;
        };
        let street = hand.street.next();
        hand.street = street;
        hand.draw(); // burn
        for _ in 0..street.cards_to_reveal() {
            let card = hand.draw();
            hand.board.push(card);
        }
        let board = hand
            .board
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        log::info!("{street}: {board}");
        self.events.publish(TableEvent::StreetRevealed);
        // Action restarts left of the button, folded seats skipped; an
        // all-in seat is corrected by the pending-seat scan.
        self.actor = Some(self.next_seat_where(self.dealer, |p| p.in_hand && !p.folded));
    }

    // === Settlement ===

    /// Exactly one player left in the hand: the pot is theirs without
    /// any ranking.
    fn settle_uncontested(&mut self) {
        self.sweep_bets();
        self.actor = None;
        let winner_seat = self
            .seats
            .iter()
            .flatten()
            .find(|p| p.in_hand && !p.folded)
            .map(|p| p.seat);
        let Some(hand) = self.hand.as_mut() else {
            return;
        };
        let amount = std::mem::take(&mut hand.pot);
        if let Some(seat) = winner_seat {
            if let Some(player) = self.seats[seat].as_mut() {
                player.stack += amount;
                log::info!("{} takes the pot of {amount} uncontested", player.name);
                self.winners = vec![WinnerSummary {
                    name: player.name.clone(),
                    seat,
                    amount,
                    hand: None,
                    stack: player.stack,
                }];
            }
        }
        self.losers = self.collect_bankrupt();
        self.events.publish(TableEvent::HandOver);
    }

    /// Rank every live hand and drain the contribution ledger into
    /// tiered payouts.
    fn settle_showdown(&mut self) {
        self.actor = None;
        let Some(hand) = self.hand.as_mut() else {
            return;
        };
        hand.street = Street::Showdown;

        let mut contenders = Vec::new();
        for player in self.seats.iter().flatten() {
            if player.in_hand && !player.folded {
                let mut cards = player.hole_cards.clone();
                cards.extend_from_slice(&hand.board);
                contenders.push(Contender {
                    seat: player.seat,
                    strength: self.ranker.rank(&cards),
                });
            }
        }

        let payouts = settlement::distribute(
            &mut hand.contributions,
            &contenders,
            self.dealer,
            self.seats.len(),
        );
        hand.pot = 0;

        let strengths: HashMap<SeatIndex, HandStrength> = contenders
            .into_iter()
            .map(|c| (c.seat, c.strength))
            .collect();
        let mut awarded: Vec<(SeatIndex, Chips)> = payouts
            .into_iter()
            .filter(|&(_, amount)| amount > 0)
            .collect();
        awarded.sort_by_key(|&(seat, _)| seat);

        let mut winners = Vec::with_capacity(awarded.len());
        for (seat, amount) in awarded {
            if let Some(player) = self.seats[seat].as_mut() {
                player.stack += amount;
                log::info!("{} wins {amount}", player.name);
                winners.push(WinnerSummary {
                    name: player.name.clone(),
                    seat,
                    amount,
                    hand: strengths.get(&seat).cloned(),
                    stack: player.stack,
                });
            }
        }
        self.winners = winners;
        self.losers = self.collect_bankrupt();
        self.events.publish(TableEvent::HandOver);
    }

    /// Busted participants of the hand just played. Removing them is
    /// the caller's responsibility.
    fn collect_bankrupt(&self) -> Vec<String> {
        self.seats
            .iter()
            .flatten()
            .filter(|p| p.in_hand && p.stack == 0)
            .map(|p| {
                log::info!("{} went bankrupt", p.name);
                p.name.clone()
            })
            .collect()
    }

    // === Seat traversal helpers ===

    fn in_hand_seats(&self) -> Vec<SeatIndex> {
        self.seats
            .iter()
            .flatten()
            .filter(|p| p.in_hand)
            .map(|p| p.seat)
            .collect()
    }

    fn seat_of(&self, name: &str) -> Option<SeatIndex> {
        self.seats
            .iter()
            .flatten()
            .find(|p| p.name == name)
            .map(|p| p.seat)
    }

    /// First seat strictly after `from` (wrapping) whose occupant
    /// matches, falling back to `from` when no other seat does.
    fn next_seat_where<F>(&self, from: SeatIndex, pred: F) -> SeatIndex
    where
        F: Fn(&Player) -> bool,
    {
        let seat_count = self.seats.len();
        for offset in 1..=seat_count {
            let seat = (from + offset) % seat_count;
            if let Some(p) = self.seats[seat].as_ref() {
                if pred(p) {
                    return seat;
                }
            }
        }
        from
    }

    /// Counterpart of [`Table::next_seat_where`], scanning backward.
    fn prev_seat_where<F>(&self, from: SeatIndex, pred: F) -> SeatIndex
    where
        F: Fn(&Player) -> bool,
    {
        let seat_count = self.seats.len();
        for offset in 1..=seat_count {
            let seat = (from + seat_count - offset) % seat_count;
            if let Some(p) = self.seats[seat].as_ref() {
                if pred(p) {
                    return seat;
                }
            }
        }
        from
    }

    /// Largest stack-plus-bet among in-hand, non-folded players other
    /// than `seat`: the most anyone else could still contest.
    fn best_other_stake(&self, seat: SeatIndex) -> Chips {
        self.seats
            .iter()
            .flatten()
            .filter(|p| p.in_hand && !p.folded && p.seat != seat)
            .map(|p| p.stack + p.current_bet)
            .max()
            .unwrap_or(0)
    }

    // === Read-only accessors ===

    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Name of the player whose move it is, while a hand is live.
    #[must_use]
    pub fn current_actor(&self) -> Option<&str> {
        let seat = self.actor?;
        self.seats[seat].as_ref().map(|p| p.name.as_str())
    }

    #[must_use]
    pub fn dealer_seat(&self) -> SeatIndex {
        self.dealer
    }

    /// Largest bet on the street in progress.
    #[must_use]
    pub fn max_bet(&self) -> Chips {
        self.seats
            .iter()
            .flatten()
            .filter(|p| p.in_hand)
            .map(|p| p.current_bet)
            .max()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn pot(&self) -> Chips {
        self.hand.as_ref().map_or(0, |h| h.pot)
    }

    #[must_use]
    pub fn board(&self) -> &[Card] {
        self.hand.as_ref().map_or(&[], |h| h.board.as_slice())
    }

    #[must_use]
    pub fn street(&self) -> Option<Street> {
        self.hand.as_ref().map(|h| h.street)
    }

    #[must_use]
    pub fn hand(&self) -> Option<&Hand> {
        self.hand.as_ref()
    }

    #[must_use]
    pub fn hole_cards(&self, name: &str) -> Option<&[Card]> {
        let seat = self.seat_of(name)?;
        self.seats[seat].as_ref().map(|p| p.hole_cards.as_slice())
    }

    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        let seat = self.seat_of(name)?;
        self.seats[seat].as_ref()
    }

    /// Result snapshot of the most recently completed hand.
    #[must_use]
    pub fn winners(&self) -> &[WinnerSummary] {
        &self.winners
    }

    /// Players who went bankrupt in the most recently completed hand.
    #[must_use]
    pub fn losers(&self) -> &[String] {
        &self.losers
    }

    /// Seat occupancy, indexed by seat number.
    #[must_use]
    pub fn seats(&self) -> &[Option<Player>] {
        &self.seats
    }

    /// Whether a hand is live and awaiting action. False both in the
    /// "no active hand" state and after a hand has settled.
    #[must_use]
    pub fn is_hand_active(&self) -> bool {
        self.hand.is_some() && self.actor.is_some()
    }
}
