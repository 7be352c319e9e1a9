//! # holdem_table
//!
//! A no-limit Texas Hold'em table engine.
//!
//! This library runs live multiplayer poker hands for a table of seated
//! participants: seat and dealer management, forced blind and straddle
//! posting, turn-order enforcement, bet validation, street progression,
//! and multi-way side-pot settlement for unequal all-in stacks.
//!
//! The engine is transport-free. Identity, session handling, timers,
//! and rendering all live outside the crate; a host calls action
//! methods on [`Table`], then queries its read-only accessors to
//! broadcast results. Collaborators are injected at the seams:
//!
//! - [`DeckProvider`] supplies shuffled decks ([`ShuffledDeck`] is the
//!   `rand`-backed default),
//! - [`HandRanker`] maps 5–7 cards onto a totally ordered
//!   [`HandStrength`] (supplied by the host, never implemented here),
//! - [`EventSink`] observes table transitions.
//!
//! Each table is a single-threaded, synchronous state machine: one
//! action is processed to full completion, including any cascading
//! street or settlement transitions, before another is accepted.
//! Tables share no mutable state with each other.
//!
//! ## Example
//!
//! ```
//! use holdem_table::{Card, HandRanker, HandStrength, Table, TableConfig};
//!
//! struct HighCard;
//!
//! impl HandRanker for HighCard {
//!     fn rank(&self, cards: &[Card]) -> HandStrength {
//!         let strength = cards.iter().map(|c| u32::from(c.0)).max().unwrap_or(0);
//!         HandStrength { strength, description: "high card".into() }
//!     }
//! }
//!
//! let mut table = Table::new(TableConfig::default(), Box::new(HighCard)).unwrap();
//! table.add_player("alice", 500, false).unwrap();
//! table.add_player("bob", 500, false).unwrap();
//! table.start_game();
//! assert!(table.is_hand_active());
//! ```

/// Core game logic: entities, providers, events, and the table itself.
pub mod game;
pub use game::{
    constants::{self, MAX_SEATS},
    entities::{Card, Chips, Hand, Player, SeatIndex, Street, Suit, Value},
    events::{EventSink, NullSink, TableEvent},
    providers::{DeckProvider, HandRanker, HandStrength, ShuffledDeck},
    table::{ActionError, ConfigError, StraddleLimit, Table, TableConfig, WinnerSummary},
};
