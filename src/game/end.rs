use crate::error::ReplayError;
use crate::result::GameResult;

use super::{Game, GameState};

impl Game {
    /// Returns the final result once the game has ended.
    #[must_use]
    pub const fn result(&self) -> Option<GameResult> {
        match self.state {
            GameState::End => Some(GameResult::from_scores(self.scores)),
            GameState::Home | GameState::Playing => None,
        }
    }

    /// Leaves the End screen for the Home screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has not ended.
    pub fn replay(&mut self) -> Result<(), ReplayError> {
        if self.state != GameState::End {
            return Err(ReplayError::InvalidState);
        }

        self.state = GameState::Home;
        self.ticker_active = false;

        Ok(())
    }
}
