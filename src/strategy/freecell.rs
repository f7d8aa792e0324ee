use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DeckError, MoveError};
use crate::pile::Pile;

use super::{PileStrategy, StrategyKind, empty_piles};

/// Number of tableau piles in Freecell.
pub const TABLEAU_PILES: usize = 8;
/// Number of free cells.
pub const FREECELL_PILES: usize = 4;

/// Freecell tableau rules.
///
/// Eight piles: even positions get six cards and odd positions seven. Cards
/// are built down in alternating colors and any card may fill an empty
/// pile.
#[derive(Debug, Clone, Copy, Default)]
pub struct FreecellTableau;

impl PileStrategy for FreecellTableau {
    fn kind(&self) -> StrategyKind {
        StrategyKind::FreecellTableau
    }

    fn initial_layout(&self, deck: &mut Deck) -> Result<Vec<Pile>, DeckError> {
        let mut piles = Vec::with_capacity(TABLEAU_PILES);
        for pos in 0..TABLEAU_PILES {
            let count = if pos % 2 == 0 { 6 } else { 7 };
            piles.push(Pile::from_cards(deck.take(count)?));
        }
        Ok(piles)
    }

    fn is_adding_legal(&self, card: Card, top: Option<Card>) -> bool {
        top.is_none_or(|top| {
            card.color() != top.color() && top.rank.value() == card.rank.value() + 1
        })
    }

    fn is_removing_legal(&self, top: Option<Card>) -> Result<bool, MoveError> {
        Ok(top.is_some())
    }
}

/// Free cell rules: four empty cells holding at most one card each.
#[derive(Debug, Clone, Copy, Default)]
pub struct FreecellFreecell;

impl PileStrategy for FreecellFreecell {
    fn kind(&self) -> StrategyKind {
        StrategyKind::FreecellFreecell
    }

    fn initial_layout(&self, _deck: &mut Deck) -> Result<Vec<Pile>, DeckError> {
        Ok(empty_piles(FREECELL_PILES))
    }

    fn is_adding_legal(&self, _card: Card, top: Option<Card>) -> bool {
        top.is_none()
    }

    fn is_removing_legal(&self, top: Option<Card>) -> Result<bool, MoveError> {
        Ok(top.is_some())
    }
}
