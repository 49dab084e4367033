use crate::board::Board;
use crate::result::{GameResult, Scores};

use super::{Game, GameState, Selection};

/// Everything a renderer needs to draw the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    /// Current game state.
    pub state: GameState,
    /// Displayed cards.
    pub board: Board,
    /// Slots picked by the player.
    pub selection: Selection,
    /// Current scores.
    pub scores: Scores,
    /// Seconds left in the round.
    pub timer: u32,
    /// Cards left in the deck.
    pub cards_remaining: usize,
    /// Configured round length.
    pub round_seconds: u32,
    /// Final result, once the game has ended.
    pub result: Option<GameResult>,
}

impl Game {
    /// Captures the state a renderer draws from.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            board: self.board,
            selection: self.selection,
            scores: self.scores,
            timer: self.timer,
            cards_remaining: self.deck.len(),
            round_seconds: self.options.round_seconds,
            result: self.result(),
        }
    }
}
