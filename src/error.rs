//! Error types for game and asset operations.

use alloc::string::String;

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur while selecting a board slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    /// Invalid game state for selecting.
    #[error("invalid game state for selecting")]
    InvalidState,
    /// The slot holds no card.
    #[error("slot {0} holds no card")]
    EmptySlot(usize),
}

/// Errors that can occur when advancing the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TickError {
    /// The countdown only runs while playing.
    #[error("invalid game state for ticking")]
    InvalidState,
}

/// Errors that can occur when starting a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// Invalid game state for starting.
    #[error("invalid game state for starting")]
    InvalidState,
}

/// Errors that can occur when returning to the Home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReplayError {
    /// Invalid game state for replaying.
    #[error("invalid game state for replaying")]
    InvalidState,
}

/// Errors that can occur when changing the round length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// Round length can only be changed on the Home screen.
    #[error("round length can only be changed on the home screen")]
    InvalidState,
}

/// Errors that can occur while loading card assets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    /// The identifier does not decode into a card.
    #[error("malformed asset identifier: {0}")]
    MalformedId(String),
    /// Two identifiers decode into the same card.
    #[error("duplicate asset for card: {0}")]
    Duplicate(String),
    /// No asset was found for a card.
    #[error("missing asset for card {0}")]
    Missing(Card),
    /// The asset source could not be read.
    #[error("failed to read assets: {0}")]
    Io(String),
}
