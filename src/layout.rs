//! Screen geometry for front ends: where board slots and controls are drawn,
//! and which event a pointer press maps to.
//!
//! The game itself never sees pixels. A front end draws with these
//! rectangles and feeds the result of [`hit_test`] into
//! [`Game::handle_event`](crate::Game::handle_event).

use crate::board::{self, BOARD_SIZE, COLUMNS};
use crate::game::{Control, Event, GameState};

/// Horizontal distance between slot origins.
pub const SLOT_PITCH_X: i32 = 250;
/// Vertical distance between slot origins.
pub const SLOT_PITCH_Y: i32 = 200;
/// Offset of a card image inside its slot.
pub const SLOT_MARGIN: i32 = 10;
/// Card image width.
pub const CARD_WIDTH: i32 = 150;
/// Card image height.
pub const CARD_HEIGHT: i32 = 100;

/// Home screen "more time" button.
pub const UP_BUTTON: Rect = Rect::new(600, 350, 40, 40);
/// Home screen "less time" button.
pub const DOWN_BUTTON: Rect = Rect::new(650, 350, 40, 40);
/// Home screen start button.
pub const START_BUTTON: Rect = Rect::new(450, 400, 150, 40);
/// End screen replay button.
pub const REPLAY_BUTTON: Rect = Rect::new(450, 500, 150, 40);

/// An axis-aligned rectangle. Edges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
}

impl Rect {
    /// Creates a rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns whether a point lies inside or on the edge.
    #[must_use]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Returns the rectangle a slot's card is drawn in.
///
/// # Panics
///
/// Panics if `index` is not a board slot.
#[must_use]
pub const fn slot_rect(index: usize) -> Rect {
    let (row, column) = board::grid_position(index);
    Rect::new(
        column as i32 * SLOT_PITCH_X + SLOT_MARGIN,
        row as i32 * SLOT_PITCH_Y + SLOT_MARGIN,
        CARD_WIDTH,
        CARD_HEIGHT,
    )
}

/// Returns the board slot whose grid cell contains a point.
///
/// Each slot owns a full `SLOT_PITCH_X` by `SLOT_PITCH_Y` cell, so presses
/// between card images still pick the nearest slot above and to the left.
#[must_use]
pub const fn slot_at_point(x: i32, y: i32) -> Option<usize> {
    if x < 0 || y < 0 {
        return None;
    }
    let column = (x / SLOT_PITCH_X) as usize;
    let row = (y / SLOT_PITCH_Y) as usize;
    if column >= COLUMNS {
        return None;
    }
    match board::slot_at(row, column) {
        Some(index) if index < BOARD_SIZE => Some(index),
        _ => None,
    }
}

/// Maps a pointer press to the event it triggers in `state`.
#[must_use]
pub const fn hit_test(state: GameState, x: i32, y: i32) -> Option<Event> {
    match state {
        GameState::Home => {
            if UP_BUTTON.contains(x, y) {
                Some(Event::Control(Control::MoreTime))
            } else if DOWN_BUTTON.contains(x, y) {
                Some(Event::Control(Control::LessTime))
            } else if START_BUTTON.contains(x, y) {
                Some(Event::Control(Control::Start))
            } else {
                None
            }
        }
        GameState::Playing => match slot_at_point(x, y) {
            Some(index) => Some(Event::Select(index)),
            None => None,
        },
        GameState::End => {
            if REPLAY_BUTTON.contains(x, y) {
                Some(Event::Control(Control::Replay))
            } else {
                None
            }
        }
    }
}
