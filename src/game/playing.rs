use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{SelectError, TickError};
use crate::result::{GameResult, Verdict};
use crate::search::{find_all_sets, find_one_set, is_set};

use super::{ComputerMove, FALLBACK_SLOTS, Game, GameState, SelectOutcome, Toggle};

impl Game {
    /// Advances the countdown by one second.
    ///
    /// When the round runs out the computer moves: it claims the first set
    /// on the board, or replaces slots 0, 1 and 2 if there is none. The
    /// timer then restarts.
    ///
    /// Returns the computer's move if one was made.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not being played.
    pub fn tick(&mut self) -> Result<Option<ComputerMove>, TickError> {
        if self.state != GameState::Playing {
            return Err(TickError::InvalidState);
        }

        self.timer = self.timer.saturating_sub(1);
        let computer_move = if self.timer == 0 {
            Some(self.computer_move())
        } else {
            None
        };

        self.check_end();
        Ok(computer_move)
    }

    fn computer_move(&mut self) -> ComputerMove {
        let occupied = self.board.occupied();
        let cards: Vec<Card> = occupied.iter().map(|&(_, card)| card).collect();

        let computer_move = if let Some((i, j, k)) = find_one_set(&cards) {
            let slots = [occupied[i].0, occupied[j].0, occupied[k].0];
            self.scores.computer += 1;
            self.board.replace(&slots, &mut self.deck);
            self.selection.remove_all(&slots);
            log::debug!("computer claimed set at slots {slots:?}");
            ComputerMove::ClaimedSet(slots)
        } else {
            self.board.replace(&FALLBACK_SLOTS, &mut self.deck);
            self.selection.remove_all(&FALLBACK_SLOTS);
            log::debug!("no set on board, replaced slots {FALLBACK_SLOTS:?}");
            ComputerMove::ForcedReplace
        };

        self.timer = self.options.round_seconds;
        computer_move
    }

    /// Toggles a board slot in the player's selection.
    ///
    /// Picking a third slot evaluates the three cards. A set scores a point,
    /// refills the three slots and restarts the timer. Either way the
    /// selection is cleared.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not being played or the slot is
    /// empty.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a board slot.
    pub fn select(&mut self, index: usize) -> Result<SelectOutcome, SelectError> {
        if self.state != GameState::Playing {
            return Err(SelectError::InvalidState);
        }
        if self.board.get(index).is_none() {
            return Err(SelectError::EmptySlot(index));
        }

        let outcome = match self.selection.toggle(index) {
            Toggle::Added => SelectOutcome::Selected,
            Toggle::Removed => SelectOutcome::Deselected,
            Toggle::Complete(slots) => self.claim(slots),
        };

        self.check_end();
        Ok(outcome)
    }

    fn claim(&mut self, slots: [usize; 3]) -> SelectOutcome {
        let [a, b, c] = slots.map(|slot| self.board.get(slot));
        let (Some(a), Some(b), Some(c)) = (a, b, c) else {
            return SelectOutcome::Rejected(slots);
        };

        if !is_set(&a, &b, &c) {
            return SelectOutcome::Rejected(slots);
        }

        self.scores.player += 1;
        self.board.replace(&slots, &mut self.deck);
        self.timer = self.options.round_seconds;
        log::debug!("player claimed set at slots {slots:?}");

        SelectOutcome::Claimed(slots)
    }

    /// Ends the game once the deck is exhausted and no set remains on the
    /// board.
    fn check_end(&mut self) {
        if self.state != GameState::Playing
            || !self.deck.is_empty()
            || !find_all_sets(&self.board.cards()).is_empty()
        {
            return;
        }

        self.state = GameState::End;
        self.ticker_active = false;

        let result = GameResult::from_scores(self.scores);
        if result.is_tie() {
            log::debug!("tie at {} counted as a loss", self.scores.player);
        }
        log::info!(
            "game over: player {} computer {} ({})",
            self.scores.player,
            self.scores.computer,
            match result.verdict {
                Verdict::Win => "win",
                Verdict::Lose => "lose",
            }
        );
    }
}
