//! Notification surface.
//!
//! Each table publishes to a single observer injected at construction
//! time; there is no process-wide bus. Events carry no payload beyond
//! the tag - subscribers re-query the table's accessors for state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// State-change notifications emitted by a table.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableEvent {
    /// A fresh hand was dealt and blinds were posted.
    HandStarted,
    /// Action moved to (or stayed on) a seat that still owes a move.
    ActorChanged,
    /// A betting round closed and new community cards were revealed.
    StreetRevealed,
    /// The hand settled; winners and losers are available.
    HandOver,
}

impl fmt::Display for TableEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::HandStarted => "hand-started",
            Self::ActorChanged => "actor-changed",
            Self::StreetRevealed => "street-revealed",
            Self::HandOver => "hand-over",
        };
        write!(f, "{repr}")
    }
}

/// Observer interface the table publishes to. Implemented by the
/// transport layer; the table never reads anything back from it.
pub trait EventSink {
    fn publish(&mut self, event: TableEvent);
}

/// Sink that drops every event. The default for tables nobody watches.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn publish(&mut self, _event: TableEvent) {}
}
