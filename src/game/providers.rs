//! Collaborator seams for capabilities the table consumes but does
//! not implement: deck shuffling and hand ranking.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use super::constants;
use super::entities::{Card, Suit};

/// Produces shuffled decks for the table. The table draws by removing
/// one card at a time from the top (the end of the vector).
pub trait DeckProvider {
    /// Clear `deck` and leave behind 52 unique cards in draw order.
    fn fill(&mut self, deck: &mut Vec<Card>);
}

/// Default deck provider backed by `rand`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShuffledDeck;

impl DeckProvider for ShuffledDeck {
    fn fill(&mut self, deck: &mut Vec<Card>) {
        deck.clear();
        deck.reserve(constants::DECK_SIZE);
        for value in 2..=14 {
            for suit in [Suit::Club, Suit::Spade, Suit::Diamond, Suit::Heart] {
                deck.push(Card(value, suit));
            }
        }
        deck.shuffle(&mut rand::rng());
    }
}

/// Result of ranking a 5–7 card set: a single number that totally
/// orders hands (category and tie-break kickers packed together by the
/// provider) plus a human-readable description.
///
/// Equal `strength` means a genuine tie; `description` never takes
/// part in comparisons.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct HandStrength {
    pub strength: u32,
    pub description: String,
}

impl PartialEq for HandStrength {
    fn eq(&self, other: &Self) -> bool {
        self.strength == other.strength
    }
}

impl Eq for HandStrength {}

impl PartialOrd for HandStrength {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandStrength {
    fn cmp(&self, other: &Self) -> Ordering {
        self.strength.cmp(&other.strength)
    }
}

impl fmt::Display for HandStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)
    }
}

/// Ranks a player's cards together with the board. Implementations are
/// supplied by the host; the table only relies on the total order.
pub trait HandRanker {
    fn rank(&self, cards: &[Card]) -> HandStrength;
}
