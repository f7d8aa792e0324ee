use alloc::boxed::Box;

use log::info;

use crate::deck::Deck;
use crate::error::DeckError;
use crate::pile::PileGroup;
use crate::strategy::{BakersDozenTableau, HomecellStrategy};

use super::sealed::{Sealed, Token};
use super::{Game, GameKind};

/// A game of Baker's Dozen.
///
/// Thirteen tableau piles and four homecells. Every addition must pass the
/// legality check, so forced adds, destination-aware removals and the
/// special action are unsupported.
#[derive(Debug)]
pub struct BakersDozenGame {
    /// Tableau, then homecells.
    groups: [PileGroup; 2],
}

impl BakersDozenGame {
    /// Deals a new game from a deck shuffled with `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use patience::{BakersDozenGame, Category, Game};
    ///
    /// let game = BakersDozenGame::new(42);
    /// assert_eq!(game.pile_count(Category::Tableau), Ok(13));
    /// assert_eq!(game.size(Category::Tableau, 0), Ok(4));
    /// ```
    #[must_use]
    #[expect(
        clippy::missing_panics_doc,
        reason = "a full deck always covers the layout"
    )]
    pub fn new(seed: u64) -> Self {
        Self::from_deck(Deck::shuffled(seed))
            .expect("a full deck covers the Baker's Dozen layout")
    }

    /// Deals a new game from the given deck.
    ///
    /// # Errors
    ///
    /// Returns an error unless the deck holds each of the 52 cards exactly
    /// once; see [`Deck::check_complete`].
    pub fn from_deck(mut deck: Deck) -> Result<Self, DeckError> {
        deck.check_complete()?;
        let tableau = PileGroup::new(Box::new(BakersDozenTableau), &mut deck)?;
        let homecells = PileGroup::new(Box::new(HomecellStrategy), &mut deck)?;
        info!("dealt Baker's Dozen across {} tableau piles", tableau.len());

        Ok(Self {
            groups: [tableau, homecells],
        })
    }
}

impl Game for BakersDozenGame {
    fn kind(&self) -> GameKind {
        GameKind::BakersDozen
    }

    fn groups(&self) -> &[PileGroup] {
        &self.groups
    }
}

impl Sealed for BakersDozenGame {
    fn groups_mut(&mut self, _token: Token) -> &mut [PileGroup] {
        &mut self.groups
    }
}
