//! The player's in-progress pick of board slots.

/// Up to two board slots waiting for a third.
///
/// Picking a third slot hands all three back and empties the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    slots: [usize; 2],
    len: usize,
}

/// Result of toggling a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The slot was added.
    Added,
    /// The slot was already selected and has been removed.
    Removed,
    /// The slot completed a triple, in pick order; the selection is now empty.
    Complete([usize; 3]),
}

impl Selection {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [0; 2],
            len: 0,
        }
    }

    /// Returns the selected slots in pick order.
    #[must_use]
    pub fn slots(&self) -> &[usize] {
        &self.slots[..self.len]
    }

    /// Returns whether a slot is selected.
    #[must_use]
    pub fn contains(&self, slot: usize) -> bool {
        self.slots().contains(&slot)
    }

    /// Returns the number of selected slots.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns whether nothing is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Selects `slot` if absent, deselects it if present.
    pub fn toggle(&mut self, slot: usize) -> Toggle {
        if let Some(position) = self.slots().iter().position(|&s| s == slot) {
            self.slots.copy_within(position + 1..self.len, position);
            self.len -= 1;
            return Toggle::Removed;
        }

        if self.len == 2 {
            let triple = [self.slots[0], self.slots[1], slot];
            self.clear();
            return Toggle::Complete(triple);
        }

        self.slots[self.len] = slot;
        self.len += 1;
        Toggle::Added
    }

    /// Removes any of `slots` from the selection.
    pub fn remove_all(&mut self, slots: &[usize]) {
        let mut kept = Self::new();
        for &slot in self.slots() {
            if !slots.contains(&slot) {
                kept.slots[kept.len] = slot;
                kept.len += 1;
            }
        }
        *self = kept;
    }

    /// Empties the selection.
    pub const fn clear(&mut self) {
        self.len = 0;
    }
}
