use crate::error::{SettingsError, StartError};
use crate::options::clamp_round_seconds;

use super::{Game, GameState};

impl Game {
    fn ensure_home(&self) -> Result<(), SettingsError> {
        if self.state == GameState::Home {
            Ok(())
        } else {
            Err(SettingsError::InvalidState)
        }
    }

    /// Lengthens the round by the configured step and returns the new length.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not on the Home screen.
    pub fn increase_round_seconds(&mut self) -> Result<u32, SettingsError> {
        self.ensure_home()?;

        let seconds = self
            .options
            .round_seconds
            .saturating_add(self.options.round_seconds_step);
        self.options.round_seconds = seconds;
        log::debug!("round length set to {seconds}s");

        Ok(seconds)
    }

    /// Shortens the round by the configured step, never below one second,
    /// and returns the new length.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not on the Home screen.
    pub fn decrease_round_seconds(&mut self) -> Result<u32, SettingsError> {
        self.ensure_home()?;

        let seconds = clamp_round_seconds(
            self.options
                .round_seconds
                .saturating_sub(self.options.round_seconds_step),
        );
        self.options.round_seconds = seconds;
        log::debug!("round length set to {seconds}s");

        Ok(seconds)
    }

    /// Starts a new game: deals a freshly shuffled deck and begins the
    /// countdown.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not on the Home screen.
    pub fn start(&mut self) -> Result<(), StartError> {
        if self.state != GameState::Home {
            return Err(StartError::InvalidState);
        }

        self.reset_game();
        self.state = GameState::Playing;
        log::info!(
            "game started with {}s rounds",
            self.options.round_seconds
        );

        Ok(())
    }
}
