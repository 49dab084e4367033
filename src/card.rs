//! Card types and attribute domains.

use alloc::string::String;
use core::fmt;

/// Card color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    /// Red.
    Red,
    /// Green.
    Green,
    /// Purple.
    Purple,
}

/// Symbol printed on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    /// Diamond.
    Diamond,
    /// Squiggle.
    Squiggle,
    /// Oval.
    Oval,
}

/// Shading of the symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shading {
    /// Outline only.
    Empty,
    /// Solid fill.
    Filled,
    /// Striped fill.
    Shaded,
}

/// Number of symbols on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Number {
    /// One symbol.
    One,
    /// Two symbols.
    Two,
    /// Three symbols.
    Three,
}

/// All colors in index order.
pub const ALL_COLORS: [Color; 3] = [Color::Red, Color::Green, Color::Purple];
/// All symbols in index order.
pub const ALL_SYMBOLS: [Symbol; 3] = [Symbol::Diamond, Symbol::Squiggle, Symbol::Oval];
/// All shadings in index order.
pub const ALL_SHADINGS: [Shading; 3] = [Shading::Empty, Shading::Filled, Shading::Shaded];
/// All numbers in index order.
pub const ALL_NUMBERS: [Number; 3] = [Number::One, Number::Two, Number::Three];

/// Number of cards in a deck (one per attribute combination).
pub const DECK_SIZE: usize = 81;

impl Color {
    /// Returns the attribute index in `0..3`.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the color word used in asset identifiers.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Purple => "purple",
        }
    }
}

impl Symbol {
    /// Returns the attribute index in `0..3`.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the symbol word used in asset identifiers.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Diamond => "diamond",
            Self::Squiggle => "squiggle",
            Self::Oval => "oval",
        }
    }
}

impl Shading {
    /// Returns the attribute index in `0..3`.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the shading word used in asset identifiers.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Filled => "filled",
            Self::Shaded => "shaded",
        }
    }
}

impl Number {
    /// Returns the attribute index in `0..3`.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the symbol count (1, 2 or 3).
    #[must_use]
    pub const fn count(self) -> u8 {
        self as u8 + 1
    }

    /// Converts a symbol count into a `Number`.
    #[must_use]
    pub const fn from_count(count: u8) -> Option<Self> {
        match count {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            _ => None,
        }
    }
}

/// A SET card.
///
/// Cards are plain values: every attribute comes from its three-valued
/// domain, so a `Card` can never be partially populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    /// The color of the symbols.
    pub color: Color,
    /// The symbol shape.
    pub symbol: Symbol,
    /// The symbol shading.
    pub shading: Shading,
    /// How many symbols are printed.
    pub number: Number,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(color: Color, symbol: Symbol, shading: Shading, number: Number) -> Self {
        Self {
            color,
            symbol,
            shading,
            number,
        }
    }

    /// Builds a card from its attribute vector.
    ///
    /// Returns `None` if any component is outside `0..3`.
    #[must_use]
    pub const fn from_vector(vector: [u8; 4]) -> Option<Self> {
        if vector[0] > 2 || vector[1] > 2 || vector[2] > 2 || vector[3] > 2 {
            return None;
        }
        Some(Self::new(
            ALL_COLORS[vector[0] as usize],
            ALL_SYMBOLS[vector[1] as usize],
            ALL_SHADINGS[vector[2] as usize],
            ALL_NUMBERS[vector[3] as usize],
        ))
    }

    /// Returns the attribute indices `(color, symbol, shading, number)`.
    #[must_use]
    pub const fn as_vector(&self) -> [u8; 4] {
        [
            self.color.index(),
            self.symbol.index(),
            self.shading.index(),
            self.number.index(),
        ]
    }

    /// Returns the canonical asset identifier, e.g. `redsquiggleempty3.gif`.
    #[must_use]
    pub fn asset_id(&self) -> String {
        alloc::format!("{self}.gif")
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.color.name(),
            self.symbol.name(),
            self.shading.name(),
            self.number.count()
        )
    }
}
