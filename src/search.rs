//! Set detection over a collection of cards.
//!
//! All functions here are pure: they read the cards they are given and
//! return indices into that same slice. Callers filter out empty board slots
//! before searching.

use alloc::vec::Vec;

use crate::card::Card;

/// Indices `(i, j, k)` of three cards with `i < j < k`.
pub type Triple = (usize, usize, usize);

const fn attribute_ok(a: u8, b: u8, c: u8) -> bool {
    let all_same = a == b && b == c;
    let all_different = a != b && b != c && a != c;
    all_same || all_different
}

/// Returns whether three cards form a set.
///
/// For each of the four attributes the cards must be either all equal or
/// all different.
#[must_use]
pub const fn is_set(a: &Card, b: &Card, c: &Card) -> bool {
    let (va, vb, vc) = (a.as_vector(), b.as_vector(), c.as_vector());
    let mut i = 0;
    while i < 4 {
        if !attribute_ok(va[i], vb[i], vc[i]) {
            return false;
        }
        i += 1;
    }
    true
}

/// Returns the unique card that completes a set with `a` and `b`.
///
/// For each attribute the missing value is the one making the three
/// indices sum to a multiple of three. If `a == b` the result is `a` itself.
#[must_use]
pub const fn third_card(a: &Card, b: &Card) -> Card {
    let (va, vb) = (a.as_vector(), b.as_vector());
    let mut vc = [0u8; 4];
    let mut i = 0;
    while i < 4 {
        vc[i] = (6 - va[i] - vb[i]) % 3;
        i += 1;
    }
    match Card::from_vector(vc) {
        Some(card) => card,
        None => unreachable!(),
    }
}

fn triples(len: usize) -> impl Iterator<Item = Triple> {
    (0..len).flat_map(move |i| {
        (i + 1..len).flat_map(move |j| (j + 1..len).map(move |k| (i, j, k)))
    })
}

/// Finds the first set in ascending `(i, j, k)` order.
///
/// Returns `None` when fewer than three cards are given or no triple
/// qualifies.
#[must_use]
pub fn find_one_set(cards: &[Card]) -> Option<Triple> {
    triples(cards.len()).find(|&(i, j, k)| is_set(&cards[i], &cards[j], &cards[k]))
}

/// Finds every set, in the same order as [`find_one_set`] scans.
#[must_use]
pub fn find_all_sets(cards: &[Card]) -> Vec<Triple> {
    triples(cards.len())
        .filter(|&(i, j, k)| is_set(&cards[i], &cards[j], &cards[k]))
        .collect()
}

