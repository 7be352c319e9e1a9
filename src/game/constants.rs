//! Table-wide constants.

/// Hard limit on seats at a single table.
pub const MAX_SEATS: usize = 10;

/// A hand cannot be dealt with fewer participants than this.
pub const MIN_PLAYERS_TO_DEAL: usize = 2;

/// Cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Hole cards dealt to each participant.
pub const HOLE_CARDS: usize = 2;

/// Community cards on a fully dealt board.
pub const BOARD_SIZE: usize = 5;
