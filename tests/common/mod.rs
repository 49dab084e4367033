//! Board builders shared by the integration tests.

#![allow(dead_code)]

use setrs::{BOARD_SIZE, Board, Card, Color, Number, Shading, Symbol, build_deck, third_card};

pub const fn card(color: Color, symbol: Symbol, shading: Shading, number: Number) -> Card {
    Card::new(color, symbol, shading, number)
}

/// Extends `cards` with deck cards that complete no set with any pair
/// already chosen, until `len` cards are held.
///
/// Each chosen pair rules out a single card, so with at most 11 cards held
/// no more than 66 of the 81 are ever ruled out and the loop always finds
/// a candidate.
pub fn extend_without_sets(mut cards: Vec<Card>, len: usize) -> Vec<Card> {
    for candidate in build_deck() {
        if cards.len() >= len {
            break;
        }
        if cards.contains(&candidate) {
            continue;
        }
        let completes_set = cards.iter().enumerate().any(|(i, a)| {
            cards[i + 1..]
                .iter()
                .any(|b| third_card(a, b) == candidate)
        });
        if !completes_set {
            cards.push(candidate);
        }
    }
    assert_eq!(cards.len(), len);
    cards
}

/// Cards containing no set at all.
pub fn cards_without_sets(len: usize) -> Vec<Card> {
    extend_without_sets(Vec::new(), len)
}

/// A full board whose only set sits in `slots`.
pub fn board_with_one_set(slots: [usize; 3]) -> Board {
    let a = card(Color::Red, Symbol::Diamond, Shading::Empty, Number::One);
    let b = card(Color::Green, Symbol::Squiggle, Shading::Filled, Number::Two);
    let c = third_card(&a, &b);

    let cards = extend_without_sets(vec![a, b, c], BOARD_SIZE);
    let mut fillers = cards[3..].iter().copied();

    let mut board = Board::empty();
    for index in 0..BOARD_SIZE {
        let slot = match slots.iter().position(|&s| s == index) {
            Some(position) => cards[position],
            None => fillers.next().unwrap(),
        };
        board.set(index, Some(slot));
    }
    board
}

/// A full board with no set on it.
pub fn board_without_sets() -> Board {
    let mut slots = [None; BOARD_SIZE];
    for (slot, card) in slots.iter_mut().zip(cards_without_sets(BOARD_SIZE)) {
        *slot = Some(card);
    }
    Board::from_slots(slots)
}

/// Deck cards not already on `board`, in deck order.
pub fn cards_off_board(board: &Board, count: usize) -> Vec<Card> {
    let on_board = board.cards();
    build_deck()
        .into_iter()
        .filter(|card| !on_board.contains(card))
        .take(count)
        .collect()
}
