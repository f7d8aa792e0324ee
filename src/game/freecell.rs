use alloc::boxed::Box;

use log::info;

use crate::deck::Deck;
use crate::error::DeckError;
use crate::pile::PileGroup;
use crate::strategy::{FreecellFreecell, FreecellTableau, HomecellStrategy};

use super::sealed::{Sealed, Token};
use super::{Game, GameKind};

/// A game of Freecell.
///
/// Eight tableau piles, four homecells and four free cells. Like Baker's
/// Dozen, it has no forced adds, destination-aware removals or special
/// action.
#[derive(Debug)]
pub struct FreecellGame {
    /// Tableau, homecells, then free cells.
    groups: [PileGroup; 3],
}

impl FreecellGame {
    /// Deals a new game from a deck shuffled with `seed`.
    #[must_use]
    #[expect(
        clippy::missing_panics_doc,
        reason = "a full deck always covers the layout"
    )]
    pub fn new(seed: u64) -> Self {
        Self::from_deck(Deck::shuffled(seed)).expect("a full deck covers the Freecell layout")
    }

    /// Deals a new game from the given deck.
    ///
    /// # Errors
    ///
    /// Returns an error unless the deck holds each of the 52 cards exactly
    /// once; see [`Deck::check_complete`].
    pub fn from_deck(mut deck: Deck) -> Result<Self, DeckError> {
        deck.check_complete()?;
        let tableau = PileGroup::new(Box::new(FreecellTableau), &mut deck)?;
        let homecells = PileGroup::new(Box::new(HomecellStrategy), &mut deck)?;
        let freecells = PileGroup::new(Box::new(FreecellFreecell), &mut deck)?;
        info!("dealt Freecell across {} tableau piles", tableau.len());

        Ok(Self {
            groups: [tableau, homecells, freecells],
        })
    }
}

impl Game for FreecellGame {
    fn kind(&self) -> GameKind {
        GameKind::Freecell
    }

    fn groups(&self) -> &[PileGroup] {
        &self.groups
    }
}

impl Sealed for FreecellGame {
    fn groups_mut(&mut self, _token: Token) -> &mut [PileGroup] {
        &mut self.groups
    }
}
