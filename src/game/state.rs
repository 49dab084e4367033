//! Game state, event and outcome types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Title screen where the round length is chosen.
    Home,
    /// A game is running and the countdown ticks.
    Playing,
    /// No sets remain and the deck is exhausted; final scores are shown.
    End,
}

/// A named UI control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Home: lengthen the round.
    MoreTime,
    /// Home: shorten the round.
    LessTime,
    /// Home: start a new game.
    Start,
    /// End: return to the Home screen.
    Replay,
}

/// An input event, delivered to the game in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The window was closed.
    Quit,
    /// One second elapsed.
    Tick,
    /// The player pressed a board slot.
    Select(usize),
    /// The player pressed a control.
    Control(Control),
}

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running in the given state.
    Continue(GameState),
    /// Stop the event loop.
    Quit,
}

/// What the computer did when a round ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputerMove {
    /// The computer claimed the set in these board slots.
    ClaimedSet([usize; 3]),
    /// No set was on the board; slots 0, 1 and 2 were replaced.
    ForcedReplace,
}

/// Result of a player pressing a board slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The slot was added to the selection.
    Selected,
    /// The slot was removed from the selection.
    Deselected,
    /// The three selected cards formed a set and were replaced.
    Claimed([usize; 3]),
    /// The three selected cards did not form a set.
    Rejected([usize; 3]),
}

/// What an event did, for front ends that announce moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    /// A tick expired the round and the computer moved.
    Computer(ComputerMove),
    /// The player pressed a board slot.
    Select(SelectOutcome),
}
