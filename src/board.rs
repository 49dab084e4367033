//! The 12-slot board of displayed cards.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;

/// Number of board slots.
pub const BOARD_SIZE: usize = 12;
/// Number of grid columns.
pub const COLUMNS: usize = 4;
/// Number of grid rows.
pub const ROWS: usize = 3;

/// Displayed cards. A slot is `None` only once the deck has run out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    slots: [Option<Card>; BOARD_SIZE],
}

/// Returns the `(row, column)` of a slot.
///
/// # Panics
///
/// Panics if `index` is not a board slot.
#[must_use]
pub const fn grid_position(index: usize) -> (usize, usize) {
    assert!(index < BOARD_SIZE, "board index out of range");
    (index / COLUMNS, index % COLUMNS)
}

/// Returns the slot at `(row, column)`, if it is on the grid.
#[must_use]
pub const fn slot_at(row: usize, column: usize) -> Option<usize> {
    if row < ROWS && column < COLUMNS {
        Some(row * COLUMNS + column)
    } else {
        None
    }
}

impl Board {
    /// Creates a board with every slot empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            slots: [None; BOARD_SIZE],
        }
    }

    /// Creates a board from explicit slot contents.
    #[must_use]
    pub const fn from_slots(slots: [Option<Card>; BOARD_SIZE]) -> Self {
        Self { slots }
    }

    /// Returns the card in a slot.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a board slot.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        assert!(index < BOARD_SIZE, "board index {index} out of range");
        self.slots[index]
    }

    /// Sets the contents of a slot.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a board slot.
    pub fn set(&mut self, index: usize, card: Option<Card>) {
        assert!(index < BOARD_SIZE, "board index {index} out of range");
        self.slots[index] = card;
    }

    /// Returns all slots in index order.
    #[must_use]
    pub const fn slots(&self) -> &[Option<Card>; BOARD_SIZE] {
        &self.slots
    }

    /// Refills each slot in `indices` from the front of `deck`, leaving it
    /// empty once the deck runs out.
    ///
    /// # Panics
    ///
    /// Panics if any index is not a board slot.
    pub fn replace(&mut self, indices: &[usize], deck: &mut Deck) {
        for &index in indices {
            self.set(index, deck.draw());
        }
    }

    /// Returns the occupied slots as `(slot, card)` pairs in slot order.
    #[must_use]
    pub fn occupied(&self) -> Vec<(usize, Card)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.map(|card| (index, card)))
            .collect()
    }

    /// Returns the non-empty cards in slot order.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.slots.iter().flatten().copied().collect()
    }

    /// Returns the number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Returns whether every slot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}
