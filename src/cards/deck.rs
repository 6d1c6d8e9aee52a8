//! Deck/discard pairs and shuffling.
//!
//! A [`Pile`] is a draw pile plus its discard. Cards are drawn from the
//! front of the deck and discarded to the back of the discard. A card only
//! ever moves between the two (or out to a hand), so `deck + discard` is
//! conserved by draw-and-discard and by reshuffling.
//!
//! ```
//! use wildfire_engine::cards::{Draw, Pile};
//! use wildfire_engine::core::GameRng;
//!
//! let mut rng = GameRng::new(7);
//! let mut pile = Pile::new(vec![1, 2, 3]);
//!
//! assert_eq!(pile.draw(), Some(1));
//! pile.discard(1);
//! assert_eq!(pile.total(), 3);
//!
//! pile.draw();
//! pile.draw();
//! // Deck empty: the discard is shuffled back in.
//! assert_eq!(pile.draw_recycling(&mut rng), Draw::Card { card: 1, reshuffled: true });
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::RandomSource;

/// Unbiased in-place Fisher–Yates shuffle (decreasing-index swaps).
///
/// Reproducible for a given random source.
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}

/// Result of drawing with discard recycling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Draw<T> {
    /// A card was drawn. `reshuffled` is set when the discard had to be
    /// shuffled back into the deck first.
    Card { card: T, reshuffled: bool },
    /// Both the deck and the discard are empty.
    Exhausted,
}

impl<T> Draw<T> {
    /// The drawn card, if any.
    pub fn card(self) -> Option<T> {
        match self {
            Draw::Card { card, .. } => Some(card),
            Draw::Exhausted => None,
        }
    }
}

/// A deck and its discard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile<T: Clone> {
    deck: Vector<T>,
    discard: Vector<T>,
}

impl<T: Clone> Default for Pile<T> {
    fn default() -> Self {
        Self {
            deck: Vector::new(),
            discard: Vector::new(),
        }
    }
}

impl<T: Clone> Pile<T> {
    /// Create a pile with the given deck (front = next draw) and an empty
    /// discard.
    pub fn new(deck: impl IntoIterator<Item = T>) -> Self {
        Self {
            deck: deck.into_iter().collect(),
            discard: Vector::new(),
        }
    }

    /// Create a shuffled pile.
    pub fn shuffled<R: RandomSource + ?Sized>(cards: Vec<T>, rng: &mut R) -> Self {
        let mut cards = cards;
        shuffle(&mut cards, rng);
        Self::new(cards)
    }

    /// Cards left to draw, front first.
    #[must_use]
    pub fn deck(&self) -> &Vector<T> {
        &self.deck
    }

    /// Spent cards, oldest first.
    #[must_use]
    pub fn discarded(&self) -> &Vector<T> {
        &self.discard
    }

    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    /// Cards in deck and discard together.
    #[must_use]
    pub fn total(&self) -> usize {
        self.deck.len() + self.discard.len()
    }

    /// Both deck and discard are empty.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.deck.is_empty() && self.discard.is_empty()
    }

    /// Draw from the front of the deck. Never touches the discard.
    pub fn draw(&mut self) -> Option<T> {
        self.deck.pop_front()
    }

    /// Put a card on the back of the discard.
    pub fn discard(&mut self, card: T) {
        self.discard.push_back(card);
    }

    /// Shuffle the whole discard and append it to the deck.
    pub fn reshuffle<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        let mut cards: Vec<T> = std::mem::take(&mut self.discard).into_iter().collect();
        shuffle(&mut cards, rng);
        self.deck.extend(cards);
    }

    /// Draw, first reshuffling the discard into the deck if the deck is
    /// empty.
    pub fn draw_recycling<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Draw<T> {
        let mut reshuffled = false;
        if self.deck.is_empty() {
            if self.discard.is_empty() {
                return Draw::Exhausted;
            }
            self.reshuffle(rng);
            reshuffled = true;
        }
        match self.deck.pop_front() {
            Some(card) => Draw::Card { card, reshuffled },
            None => Draw::Exhausted,
        }
    }

    /// Empty both deck and discard.
    pub fn clear(&mut self) {
        self.deck.clear();
        self.discard.clear();
    }
}
