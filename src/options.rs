//! Game configuration options.

/// Shortest allowed round, in seconds.
pub const MIN_ROUND_SECONDS: u32 = 1;

/// Configuration options for a SET game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use setrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_round_seconds(45)
///     .with_round_seconds_step(5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Seconds the player has each round before the computer moves.
    pub round_seconds: u32,
    /// Amount the Home screen controls change `round_seconds` by.
    pub round_seconds_step: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            round_seconds: 30,
            round_seconds_step: 1,
        }
    }
}

impl GameOptions {
    /// Sets the round length, never going below [`MIN_ROUND_SECONDS`].
    ///
    /// # Example
    ///
    /// ```
    /// use setrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_round_seconds(10);
    /// assert_eq!(options.round_seconds, 10);
    ///
    /// let options = GameOptions::default().with_round_seconds(0);
    /// assert_eq!(options.round_seconds, 1);
    /// ```
    #[must_use]
    pub const fn with_round_seconds(mut self, seconds: u32) -> Self {
        self.round_seconds = clamp_round_seconds(seconds);
        self
    }

    /// Sets how much the Home controls adjust the round length.
    ///
    /// # Example
    ///
    /// ```
    /// use setrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_round_seconds_step(5);
    /// assert_eq!(options.round_seconds_step, 5);
    /// ```
    #[must_use]
    pub const fn with_round_seconds_step(mut self, step: u32) -> Self {
        self.round_seconds_step = step;
        self
    }
}

/// Raises a round length to at least [`MIN_ROUND_SECONDS`].
#[must_use]
pub const fn clamp_round_seconds(seconds: u32) -> u32 {
    if seconds < MIN_ROUND_SECONDS {
        MIN_ROUND_SECONDS
    } else {
        seconds
    }
}
