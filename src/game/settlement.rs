//! Tiered side-pot settlement.
//!
//! Settlement processes the per-seat contribution ledger in ascending
//! tiers. The smallest stake still owed by the current best-ranked
//! contenders defines a pot slice; the slice is collected from every
//! contributor (folded seats included), awarded to those contenders,
//! and the loop repeats against the next tier. A contender drops out
//! of later pots once their own stake is exhausted, which is exactly
//! what produces side pots when all-in amounts differ. The ledger
//! strictly decreases each tier, so termination is immediate to see.

use std::collections::HashMap;

use super::entities::{Chips, SeatIndex};
use super::providers::HandStrength;

/// A non-folded seat at showdown and the strength of its hand.
#[derive(Clone, Debug)]
pub(crate) struct Contender {
    pub seat: SeatIndex,
    pub strength: HandStrength,
}

/// Drain `ledger` into payouts keyed by seat. `contenders` are the
/// non-folded seats; ties in strength share a tier. Odd chips from a
/// split go to the winner nearest clockwise from `dealer`.
pub(crate) fn distribute(
    ledger: &mut HashMap<SeatIndex, Chips>,
    contenders: &[Contender],
    dealer: SeatIndex,
    seat_count: usize,
) -> HashMap<SeatIndex, Chips> {
    let mut payouts: HashMap<SeatIndex, Chips> = HashMap::new();

    // Group contenders by strength, strongest group first.
    let mut ranked: Vec<&Contender> = contenders.iter().collect();
    ranked.sort_by(|a, b| b.strength.cmp(&a.strength));
    let mut groups: Vec<(&HandStrength, Vec<SeatIndex>)> = Vec::new();
    for contender in ranked {
        match groups.last_mut() {
            Some((strength, seats)) if **strength == contender.strength => {
                seats.push(contender.seat);
            }
            _ => groups.push((&contender.strength, vec![contender.seat])),
        }
    }

    loop {
        // The strongest group with chips still in the ledger defines
        // the next tier. Members already paid off are excluded even if
        // they outrank everyone left.
        let winners: Vec<SeatIndex> = groups
            .iter()
            .map(|(_, seats)| {
                seats
                    .iter()
                    .copied()
                    .filter(|seat| ledger.get(seat).copied().unwrap_or(0) > 0)
                    .collect::<Vec<_>>()
            })
            .find(|seats| !seats.is_empty())
            .unwrap_or_default();
        if winners.is_empty() {
            break;
        }
        let tier = winners
            .iter()
            .filter_map(|seat| ledger.get(seat).copied())
            .min()
            .unwrap_or(0);
        if tier == 0 {
            break;
        }

        // Collect the slice: every contributor owes up to the tier
        // amount, short stakes pay what they have left.
        let mut slice: Chips = 0;
        for stake in ledger.values_mut() {
            let taken = (*stake).min(tier);
            *stake -= taken;
            slice += taken;
        }
        award(&mut payouts, &winners, slice, dealer, seat_count);
    }

    // Dead money can survive the loop only when a folded seat put in
    // more than every contender; it still belongs to the best hand.
    let residue: Chips = ledger.values().sum();
    if residue > 0 {
        for stake in ledger.values_mut() {
            *stake = 0;
        }
        if let Some((_, seats)) = groups.first() {
            award(&mut payouts, seats, residue, dealer, seat_count);
        }
    }

    payouts
}

/// Split `amount` evenly among `winners`, handing any integer
/// remainder to the winner nearest clockwise from the dealer.
fn award(
    payouts: &mut HashMap<SeatIndex, Chips>,
    winners: &[SeatIndex],
    amount: Chips,
    dealer: SeatIndex,
    seat_count: usize,
) {
    if winners.is_empty() || amount == 0 {
        return;
    }
    let mut order: Vec<SeatIndex> = winners.to_vec();
    order.sort_by_key(|&seat| clockwise_distance(dealer, seat, seat_count));

    let share = amount / winners.len() as Chips;
    let remainder = amount % winners.len() as Chips;
    for (i, &seat) in order.iter().enumerate() {
        let mut won = share;
        if i == 0 {
            won += remainder;
        }
        if won > 0 {
            *payouts.entry(seat).or_default() += won;
        }
    }
}

/// Seats strictly after the dealer come first; the dealer itself is
/// furthest away.
fn clockwise_distance(dealer: SeatIndex, seat: SeatIndex, seat_count: usize) -> usize {
    (seat + seat_count - 1 - dealer % seat_count) % seat_count
}
