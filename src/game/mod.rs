//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::board::Board;
use crate::deck::{self, Deck};
use crate::options::{GameOptions, clamp_round_seconds};
use crate::result::Scores;

mod end;
mod home;
mod playing;
pub mod selection;
mod snapshot;
pub mod state;

pub use selection::{Selection, Toggle};
pub use snapshot::Snapshot;
pub use state::{ComputerMove, Control, Event, Flow, GameState, Report, SelectOutcome};

/// Slots the computer replaces when a round expires with no set on the board.
pub const FALLBACK_SLOTS: [usize; 3] = [0, 1, 2];

/// A SET game session against the computer.
///
/// The session owns the board, the remaining deck, the player's selection,
/// both scores and the countdown. Drive it by feeding [`Event`]s to
/// [`Game::handle_event`] from a single event loop, or call the per-state
/// methods directly.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Displayed cards.
    pub board: Board,
    /// Cards not yet dealt.
    pub deck: Deck,
    /// Current scores.
    pub scores: Scores,
    /// Seconds left in the current round.
    pub timer: u32,
    /// Current game state.
    state: GameState,
    /// Slots picked by the player.
    selection: Selection,
    /// Whether the one-second countdown should be delivering ticks.
    ticker_active: bool,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game on the Home screen with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use setrs::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Home);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let options = options.with_round_seconds(options.round_seconds);
        Self {
            options,
            board: Board::empty(),
            deck: Deck::new(),
            scores: Scores::default(),
            timer: options.round_seconds,
            state: GameState::Home,
            selection: Selection::new(),
            ticker_active: false,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Handles one input event and returns what the event loop should do
    /// next.
    ///
    /// Events that do not apply to the current state are ignored.
    ///
    /// # Panics
    ///
    /// Panics if an [`Event::Select`] names a slot off the board.
    pub fn handle_event(&mut self, event: Event) -> Flow {
        self.dispatch(event).0
    }

    /// Like [`Game::handle_event`], but also reports the computer's move or
    /// the outcome of a player pick.
    ///
    /// # Panics
    ///
    /// Panics if an [`Event::Select`] names a slot off the board.
    pub fn dispatch(&mut self, event: Event) -> (Flow, Option<Report>) {
        let (applied, report) = match (self.state, event) {
            (_, Event::Quit) => {
                self.ticker_active = false;
                return (Flow::Quit, None);
            }
            (GameState::Home, Event::Control(Control::MoreTime)) => {
                (self.increase_round_seconds().is_ok(), None)
            }
            (GameState::Home, Event::Control(Control::LessTime)) => {
                (self.decrease_round_seconds().is_ok(), None)
            }
            (GameState::Home, Event::Control(Control::Start)) => (self.start().is_ok(), None),
            (GameState::Playing, Event::Tick) => match self.tick() {
                Ok(computer_move) => (true, computer_move.map(Report::Computer)),
                Err(_) => (false, None),
            },
            (GameState::Playing, Event::Select(index)) => match self.select(index) {
                Ok(outcome) => (true, Some(Report::Select(outcome))),
                Err(_) => (false, None),
            },
            (GameState::End, Event::Control(Control::Replay)) => (self.replay().is_ok(), None),
            _ => (false, None),
        };

        if !applied {
            log::trace!("ignored {event:?} in {:?}", self.state);
        }

        (Flow::Continue(self.state), report)
    }

    /// Shuffles a fresh deck, deals the board and resets scores, timer and
    /// selection, then starts the countdown.
    pub fn reset_game(&mut self) {
        let mut cards = deck::build_deck();
        deck::shuffle(&mut cards, &mut self.rng);
        let (board, remaining) = deck::deal(cards);

        self.board = board;
        self.deck = remaining;
        self.scores = Scores::default();
        self.options.round_seconds = clamp_round_seconds(self.options.round_seconds);
        self.timer = self.options.round_seconds;
        self.selection.clear();
        self.ticker_active = true;
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player's current selection.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns whether the one-second countdown should be running.
    ///
    /// Only true while playing; drivers stop delivering ticks otherwise.
    #[must_use]
    pub const fn ticker_active(&self) -> bool {
        self.ticker_active
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the configured round length in seconds.
    #[must_use]
    pub const fn round_seconds(&self) -> u32 {
        self.options.round_seconds
    }
}
