//! Rule strategies deciding layout and move legality for one pile category.
//!
//! Each variant binds one strategy per category. A strategy never mutates
//! piles itself; it only lays out the initial piles and answers legality
//! questions about top cards.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DeckError, MoveError, Operation};
use crate::game::Category;
use crate::pile::Pile;

mod aces_up;
mod bakers_dozen;
mod freecell;
mod homecell;

pub use aces_up::{AcesUpStock, AcesUpTableau};
pub use bakers_dozen::BakersDozenTableau;
pub use freecell::{FreecellFreecell, FreecellTableau};
pub use homecell::{AcesUpHomecell, HomecellStrategy};

/// Identifies a strategy implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Foundation piles built up by suit (Baker's Dozen and Freecell).
    Homecell,
    /// Baker's Dozen tableau.
    BakersDozenTableau,
    /// Freecell tableau.
    FreecellTableau,
    /// Freecell single-card cells.
    FreecellFreecell,
    /// Aces Up tableau.
    AcesUpTableau,
    /// Aces Up discard pile.
    AcesUpHomecell,
    /// Aces Up stock.
    AcesUpStock,
}

impl StrategyKind {
    /// Returns the category of piles the strategy controls.
    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            Self::BakersDozenTableau | Self::FreecellTableau | Self::AcesUpTableau => {
                Category::Tableau
            }
            Self::Homecell | Self::AcesUpHomecell => Category::Homecell,
            Self::FreecellFreecell => Category::Freecell,
            Self::AcesUpStock => Category::Stock,
        }
    }
}

/// Layout and legality rules for one pile category of one variant.
pub trait PileStrategy {
    /// Returns which strategy this is.
    fn kind(&self) -> StrategyKind;

    /// Builds the initial piles, taking cards from `deck` if the category
    /// starts with any.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck cannot supply the cards needed.
    fn initial_layout(&self, deck: &mut Deck) -> Result<Vec<Pile>, DeckError>;

    /// Returns whether `card` may be put on a pile whose top card is `top`
    /// (`None` for an empty pile).
    fn is_adding_legal(&self, card: Card, top: Option<Card>) -> bool;

    /// Returns whether the top card may leave its pile.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Unsupported`] if the category only decides
    /// removals toward a known destination.
    fn is_removing_legal(&self, top: Option<Card>) -> Result<bool, MoveError> {
        let _ = top;
        Err(MoveError::Unsupported(Operation::Removal))
    }

    /// Returns whether the top card may move to a pile of the `dest`
    /// category, given the top cards of the other piles in the group.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OtherTopsLength`] or
    /// [`MoveError::InvalidDestination`] for malformed arguments and
    /// [`MoveError::Unsupported`] if the category has no such rule.
    fn is_removing_legal_to(
        &self,
        top: Option<Card>,
        other_tops: &[Option<Card>],
        dest: Category,
    ) -> Result<bool, MoveError> {
        let _ = (top, other_tops, dest);
        Err(MoveError::Unsupported(Operation::RemovalToDestination))
    }
}

/// Creates `count` empty piles.
pub(crate) fn empty_piles(count: usize) -> Vec<Pile> {
    (0..count).map(|_| Pile::new()).collect()
}

/// Checks that `other_tops` covers every pile of a group of `group_size`.
pub(crate) const fn check_other_tops(
    other_tops: &[Option<Card>],
    group_size: usize,
) -> Result<(), MoveError> {
    let expected = group_size - 1;
    if other_tops.len() == expected {
        Ok(())
    } else {
        Err(MoveError::OtherTopsLength {
            expected,
            actual: other_tops.len(),
        })
    }
}
