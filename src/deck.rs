//! Deck construction, shuffling and dealing.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::board::{BOARD_SIZE, Board};
use crate::card::{ALL_COLORS, ALL_NUMBERS, ALL_SHADINGS, ALL_SYMBOLS, Card, DECK_SIZE};

/// Builds the full 81-card deck in attribute order.
///
/// # Panics
///
/// Panics if the attribute domains do not produce exactly [`DECK_SIZE`] cards.
#[must_use]
pub fn build_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for color in ALL_COLORS {
        for symbol in ALL_SYMBOLS {
            for shading in ALL_SHADINGS {
                for number in ALL_NUMBERS {
                    cards.push(Card::new(color, symbol, shading, number));
                }
            }
        }
    }

    assert_eq!(cards.len(), DECK_SIZE, "deck must hold every combination");
    cards
}

/// Shuffles cards with a uniform random permutation.
pub fn shuffle<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    cards.shuffle(rng);
}

/// Deals the first [`BOARD_SIZE`] cards onto a board and keeps the rest,
/// in order, as the remaining deck.
#[must_use]
pub fn deal(cards: Vec<Card>) -> (Board, Deck) {
    let mut remaining: VecDeque<Card> = cards.into();
    let mut board = Board::empty();

    for index in 0..BOARD_SIZE {
        board.set(index, remaining.pop_front());
    }

    (board, Deck { cards: remaining })
}

/// Cards not yet dealt, drawn front to back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// Creates a deck whose first card is drawn first.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Draws the front card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the cards in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
