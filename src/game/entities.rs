use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};

use super::constants;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Suit {
    Club,
    Spade,
    Diamond,
    Heart,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Club => "♣",
            Self::Spade => "♠",
            Self::Diamond => "♦",
            Self::Heart => "♥",
        };
        write!(f, "{repr}")
    }
}

/// Placeholder for card values.
pub type Value = u8;

/// A card is a tuple of a uInt8 value (deuce=2u8 ... ace=14u8)
/// and a suit.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Card(pub Value, pub Suit);

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let value = match self.0 {
            1 | 14 => "A",
            11 => "J",
            12 => "Q",
            13 => "K",
            v => &v.to_string(),
        };
        write!(f, "{value}{}", self.1)
    }
}

/// Type alias for whole chips. All bets and player stacks are
/// represented as whole chips (there's no point arguing over pennies).
pub type Chips = u32;

/// Type alias for seat positions at the table.
pub type SeatIndex = usize;

/// Betting streets, in the order a hand passes through them. A hand's
/// street only ever advances; it never regresses.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    Dealing,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Street {
    /// The street that follows this one. `Showdown` is terminal.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Dealing => Self::Flop,
            Self::Flop => Self::Turn,
            Self::Turn => Self::River,
            Self::River | Self::Showdown => Self::Showdown,
        }
    }

    /// Community cards revealed when this street begins. One card is
    /// burned before any reveal.
    #[must_use]
    pub fn cards_to_reveal(self) -> usize {
        match self {
            Self::Flop => 3,
            Self::Turn | Self::River => 1,
            Self::Dealing | Self::Showdown => 0,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Dealing => "dealing",
            Self::Flop => "flop",
            Self::Turn => "turn",
            Self::River => "river",
            Self::Showdown => "showdown",
        };
        write!(f, "{repr}")
    }
}

/// A seated participant's account and per-hand status.
///
/// `stack` holds chips not currently at risk; `current_bet` holds
/// chips committed during the street in progress. Bets are swept into
/// the pot when the betting round closes.
#[derive(Clone, Debug, Serialize)]
pub struct Player {
    pub name: String,
    pub stack: Chips,
    pub current_bet: Chips,
    pub folded: bool,
    pub all_in: bool,
    pub has_acted: bool,
    /// Participating in the current (or next) hand, as opposed to
    /// spectating from a seat while waiting for a round boundary.
    pub in_hand: bool,
    /// Pending removal. The seat is freed at the next round boundary.
    pub leaving: bool,
    pub is_straddling: bool,
    pub seat: SeatIndex,
    pub hole_cards: Vec<Card>,
}

impl Player {
    #[must_use]
    pub fn new(name: &str, stack: Chips, is_straddling: bool, seat: SeatIndex) -> Self {
        Self {
            name: name.to_string(),
            stack,
            current_bet: 0,
            folded: false,
            all_in: false,
            has_acted: false,
            in_hand: false,
            leaving: false,
            is_straddling,
            seat,
            hole_cards: Vec::with_capacity(constants::HOLE_CARDS),
        }
    }

    /// Move up to `amount` chips from the stack into the current bet,
    /// returning the chips actually moved. A player whose stack is
    /// exhausted is all-in.
    pub(crate) fn commit(&mut self, amount: Chips) -> Chips {
        let moved = amount.min(self.stack);
        self.stack -= moved;
        self.current_bet += moved;
        self.has_acted = true;
        if self.stack == 0 {
            self.all_in = true;
        }
        moved
    }

    /// Surrender the current bet and leave the hand. Returns the chips
    /// given up so the caller can sweep them into the pot.
    pub(crate) fn fold_hand(&mut self) -> Chips {
        self.folded = true;
        self.has_acted = true;
        std::mem::take(&mut self.current_bet)
    }

    pub(crate) fn reset_for_hand(&mut self) {
        self.current_bet = 0;
        self.folded = false;
        self.all_in = false;
        self.has_acted = false;
        self.hole_cards.clear();
    }
}

/// Mutable state of a single hand, created at each round boundary and
/// discarded when too few participants remain.
#[derive(Debug)]
pub struct Hand {
    /// Chips already swept from completed betting rounds.
    pub pot: Chips,
    /// Community cards, append-only through the hand.
    pub board: Vec<Card>,
    pub street: Street,
    /// Cumulative chips each seat has put in across the whole hand.
    /// Only settlement reads this; it is distinct from the per-street
    /// `current_bet` on each player.
    pub contributions: HashMap<SeatIndex, Chips>,
    pub(crate) deck: Vec<Card>,
}

impl Hand {
    pub(crate) fn new(deck: Vec<Card>) -> Self {
        Self {
            pot: 0,
            board: Vec::with_capacity(constants::BOARD_SIZE),
            street: Street::Dealing,
            contributions: HashMap::with_capacity(constants::MAX_SEATS),
            deck,
        }
    }

    /// Draw the top card of the deck.
    pub(crate) fn draw(&mut self) -> Card {
        self.deck
            .pop()
            .expect("a 52-card deck outlasts any single hand")
    }
}
