//! A rules engine for three patience games with optional `no_std` support.
//!
//! The crate decides whether a card move is legal under Baker's Dozen,
//! Freecell or Aces Up rules and performs it only when it is. Each game owns
//! its piles grouped by [`Category`]; every group is controlled by a
//! [`PileStrategy`] holding that category's rules.
//!
//! # Example
//!
//! ```
//! use patience::{BakersDozenGame, Category, Game, PileRef};
//!
//! let mut game = BakersDozenGame::new(42);
//! let from = PileRef::new(Category::Tableau, 0);
//! let to = PileRef::new(Category::Homecell, 0);
//!
//! // Illegal moves leave every pile untouched.
//! let before = game.size(Category::Tableau, 0);
//! if !game.move_card(from, to).unwrap() {
//!     assert_eq!(game.size(Category::Tableau, 0), before);
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod pile;
pub mod strategy;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DeckError, GameError, MoveError, Operation};
pub use game::{
    AcesUpGame, BakersDozenGame, Category, FreecellGame, Game, GameKind, PileRef, new_game,
};
pub use options::GameOptions;
pub use pile::{Pile, PileGroup};
pub use strategy::{PileStrategy, StrategyKind};
