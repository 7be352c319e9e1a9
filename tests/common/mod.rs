//! Shared fixtures: scripted decks, stub rankers, and an event
//! recorder, so scenarios can pin exactly who holds what.

#![allow(dead_code)]

use std::{cell::RefCell, rc::Rc};

use holdem_table::{Card, DeckProvider, EventSink, HandRanker, HandStrength, Suit, TableEvent};

pub fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(52);
    for value in 2..=14 {
        for suit in [Suit::Club, Suit::Spade, Suit::Diamond, Suit::Heart] {
            cards.push(Card(value, suit));
        }
    }
    cards
}

/// Deck provider that always deals the same arrangement. The cards in
/// `draws` come off the top in order; every fill resets the script.
pub struct ScriptedDeck {
    draws: Vec<Card>,
}

impl ScriptedDeck {
    /// Full deck arranged so `first_draws` are drawn first, with the
    /// remaining cards following in a fixed order.
    pub fn new(first_draws: &[Card]) -> Self {
        let mut draws = first_draws.to_vec();
        draws.extend(full_deck().into_iter().filter(|c| !first_draws.contains(c)));
        assert_eq!(draws.len(), 52, "scripted draws must be distinct");
        Self { draws }
    }
}

impl DeckProvider for ScriptedDeck {
    fn fill(&mut self, deck: &mut Vec<Card>) {
        deck.clear();
        deck.extend(self.draws.iter().rev().copied());
    }
}

/// Arrange a deck so each seat receives the given hole cards and the
/// board runs out exactly as specified, burns included.
pub fn scripted_hand(holes: &[[Card; 2]], board: [Card; 5]) -> ScriptedDeck {
    let mut used: Vec<Card> = holes.iter().flatten().copied().collect();
    used.extend(board);
    let pool: Vec<Card> = full_deck()
        .into_iter()
        .filter(|c| !used.contains(c))
        .collect();

    let mut draws: Vec<Card> = holes.iter().flatten().copied().collect();
    draws.push(pool[0]); // burn
    draws.extend_from_slice(&board[0..3]);
    draws.push(pool[1]); // burn
    draws.push(board[3]);
    draws.push(pool[2]); // burn
    draws.push(board[4]);
    ScriptedDeck::new(&draws)
}

/// Ranks a hand by the sum of its card values. With a shared board
/// this makes the highest hole cards win and equal hole sums tie.
pub struct SumRanker;

impl HandRanker for SumRanker {
    fn rank(&self, cards: &[Card]) -> HandStrength {
        let strength = cards.iter().map(|c| u32::from(c.0)).sum();
        HandStrength {
            strength,
            description: format!("sum {strength}"),
        }
    }
}

/// Proves a code path never ranks anything.
pub struct PanickingRanker;

impl HandRanker for PanickingRanker {
    fn rank(&self, _cards: &[Card]) -> HandStrength {
        panic!("hand ranking must not be consulted here");
    }
}

/// Event sink that records everything it sees.
#[derive(Clone, Default)]
pub struct EventLog(pub Rc<RefCell<Vec<TableEvent>>>);

impl EventLog {
    pub fn events(&self) -> Vec<TableEvent> {
        self.0.borrow().clone()
    }
}

impl EventSink for EventLog {
    fn publish(&mut self, event: TableEvent) {
        self.0.borrow_mut().push(event);
    }
}
