//! Scores and end-of-game results.

/// Points scored by each side in the current game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scores {
    /// Sets claimed by the human player.
    pub player: u32,
    /// Sets claimed by the computer.
    pub computer: u32,
}

/// Verdict shown on the End screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The player scored strictly more than the computer.
    Win,
    /// The player did not outscore the computer. Ties land here.
    Lose,
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// Final scores.
    pub scores: Scores,
    /// Win or lose.
    pub verdict: Verdict,
}

impl GameResult {
    /// Builds a result from final scores.
    ///
    /// A tie counts as a loss.
    #[must_use]
    pub const fn from_scores(scores: Scores) -> Self {
        let verdict = if scores.player > scores.computer {
            Verdict::Win
        } else {
            Verdict::Lose
        };
        Self { scores, verdict }
    }

    /// Returns whether both sides finished level.
    ///
    /// Ties are reported as [`Verdict::Lose`]; front ends that want to show
    /// a draw can check this.
    #[must_use]
    pub const fn is_tie(&self) -> bool {
        self.scores.player == self.scores.computer
    }
}
