//! A single 52-card deck consumed while laying out a new game.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered deck of cards.
///
/// Cards are handed out from the front: the first card of [`Deck::cards`]
/// is the next one returned by [`Deck::take`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a deck with every card in suit-major order (clubs ace first).
    #[must_use]
    pub fn ordered() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Creates a shuffled deck from the given seed.
    ///
    /// The same seed always produces the same order.
    ///
    /// # Example
    ///
    /// ```
    /// use patience::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::shuffled(42);
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// assert_eq!(deck, Deck::shuffled(42));
    /// ```
    #[must_use]
    pub fn shuffled(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::shuffled_with(&mut rng)
    }

    /// Creates a deck shuffled with the provided random number generator.
    #[must_use]
    pub fn shuffled_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::ordered();
        deck.cards.shuffle(rng);
        deck
    }

    /// Creates a stacked deck. The first card is the first one taken.
    ///
    /// Note: the cards are not validated here. Games check them with
    /// [`Deck::check_complete`] before dealing.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Checks that the deck holds each of the 52 cards exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::UnexpectedSize`] if the deck does not hold 52
    /// cards and [`DeckError::DuplicateCard`] for the first repeated card.
    pub fn check_complete(&self) -> Result<(), DeckError> {
        if self.cards.len() != DECK_SIZE {
            return Err(DeckError::UnexpectedSize {
                expected: DECK_SIZE,
                actual: self.cards.len(),
            });
        }

        for (i, card) in self.cards.iter().enumerate() {
            if self.cards[..i].contains(card) {
                return Err(DeckError::DuplicateCard(*card));
            }
        }
        Ok(())
    }

    /// Removes the first `n` cards and returns them in order.
    ///
    /// The remaining cards keep their relative order.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvalidCount`] if `n` is zero and
    /// [`DeckError::NotEnoughCards`] if `n` exceeds the remaining cards. The
    /// deck is left untouched on error.
    pub fn take(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n == 0 {
            return Err(DeckError::InvalidCount);
        }
        if n > self.cards.len() {
            return Err(DeckError::NotEnoughCards {
                requested: n,
                remaining: self.cards.len(),
            });
        }

        Ok(self.cards.drain(..n).collect())
    }

    /// Returns the remaining cards in the order they will be taken.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
