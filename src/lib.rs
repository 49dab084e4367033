//! A SET card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs a game of SET against a
//! simple computer opponent: dealing, the player's picks, the round
//! countdown, the computer's move when a round expires, and the end of the
//! game. Set detection itself lives in [`search`] as pure functions.
//!
//! # Example
//!
//! ```
//! use setrs::{Event, Flow, Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.start().unwrap();
//! assert_eq!(game.handle_event(Event::Tick), Flow::Continue(GameState::Playing));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod asset;
pub mod board;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod layout;
pub mod options;
pub mod result;
pub mod search;

// Re-export main types
pub use asset::AssetCatalog;
pub use board::{BOARD_SIZE, Board};
pub use card::{Card, Color, DECK_SIZE, Number, Shading, Symbol};
pub use deck::{Deck, build_deck, deal, shuffle};
pub use error::{AssetError, ReplayError, SelectError, SettingsError, StartError, TickError};
pub use game::{
    ComputerMove, Control, Event, Flow, Game, GameState, Report, SelectOutcome, Selection,
    Snapshot,
};
pub use options::{GameOptions, MIN_ROUND_SECONDS};
pub use result::{GameResult, Scores, Verdict};
pub use search::{Triple, find_all_sets, find_one_set, is_set, third_card};
