//! Error types for deck, pile and game operations.

use thiserror::Error;

use crate::card::Card;
use crate::game::Category;

/// Errors that can occur while taking cards from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Zero cards were requested.
    #[error("card count must be greater than zero")]
    InvalidCount,
    /// More cards were requested than the deck holds.
    #[error("requested {requested} cards but only {remaining} remain")]
    NotEnoughCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
    /// A layout needs the deck to hold an exact number of cards.
    #[error("deck holds {actual} cards, expected {expected}")]
    UnexpectedSize {
        /// Number of cards the layout needs.
        expected: usize,
        /// Number of cards in the deck.
        actual: usize,
    },
    /// The deck holds the same card more than once.
    #[error("deck holds {0} more than once")]
    DuplicateCard(Card),
}

/// A call shape that a variant or pile category may not support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Removal without naming a destination category.
    Removal,
    /// Removal toward a named destination category.
    RemovalToDestination,
    /// Adding a card without a legality check.
    ForceAdd,
    /// The variant's special action (dealing from the stock).
    SpecialAction,
}

/// Errors that can occur while querying or moving cards.
///
/// A move that is simply not allowed is reported as `Ok(false)`, never as
/// an error. These variants describe calls that are malformed for the
/// active game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The game has no piles of this category.
    #[error("this game has no {0:?} piles")]
    UnknownCategory(Category),
    /// The position does not name a pile of the category.
    #[error("no {category:?} pile at position {pos}")]
    PileNotFound {
        /// The category searched.
        category: Category,
        /// The requested position.
        pos: usize,
    },
    /// The other top cards slice does not cover the rest of the group.
    #[error("expected {expected} other top cards, got {actual}")]
    OtherTopsLength {
        /// Group size minus one.
        expected: usize,
        /// Length passed in.
        actual: usize,
    },
    /// The destination category is not a valid target for this pile.
    #[error("{0:?} is not a valid destination")]
    InvalidDestination(Category),
    /// The operation is not supported by this game or pile category.
    ///
    /// This is a misuse of the call shape, not a rejected move; callers
    /// should fix the call rather than retry it.
    #[error("operation not supported: {0:?}")]
    Unsupported(Operation),
}

/// Errors that can occur when selecting a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The numeric id does not correspond to any game.
    #[error("unknown game id {0}")]
    UnknownGame(u32),
}
