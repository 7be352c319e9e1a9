//! Poker table engine - entities, collaborator seams, and game flow.
//!
//! This module provides the table implementation:
//! - Core entities (cards, streets, players, the per-hand state)
//! - Collaborator traits for decks, hand ranking, and notifications
//! - The [`table::Table`] orchestrator and its betting state machine
//! - Tiered side-pot settlement

pub mod constants;
pub mod entities;
pub mod events;
pub mod providers;
pub mod table;

mod settlement;
