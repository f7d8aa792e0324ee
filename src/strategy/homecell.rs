use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::deck::Deck;
use crate::error::{DeckError, MoveError};
use crate::pile::Pile;

use super::{PileStrategy, StrategyKind, empty_piles};

/// Number of homecells in Baker's Dozen and Freecell.
pub const HOMECELL_PILES: usize = 4;

/// Homecell rules shared by Baker's Dozen and Freecell.
///
/// Four empty piles, each built up in suit from the ace. Cards never leave a
/// homecell.
#[derive(Debug, Clone, Copy, Default)]
pub struct HomecellStrategy;

impl PileStrategy for HomecellStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Homecell
    }

    fn initial_layout(&self, _deck: &mut Deck) -> Result<Vec<Pile>, DeckError> {
        Ok(empty_piles(HOMECELL_PILES))
    }

    fn is_adding_legal(&self, card: Card, top: Option<Card>) -> bool {
        top.map_or(card.rank == Rank::Ace, |top| {
            card.suit == top.suit && card.rank.value() == top.rank.value() + 1
        })
    }

    fn is_removing_legal(&self, _top: Option<Card>) -> Result<bool, MoveError> {
        Ok(false)
    }
}

/// Aces Up discard pile.
///
/// A single pile that accepts any card. It defines no removal rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcesUpHomecell;

impl PileStrategy for AcesUpHomecell {
    fn kind(&self) -> StrategyKind {
        StrategyKind::AcesUpHomecell
    }

    fn initial_layout(&self, _deck: &mut Deck) -> Result<Vec<Pile>, DeckError> {
        Ok(empty_piles(1))
    }

    fn is_adding_legal(&self, _card: Card, _top: Option<Card>) -> bool {
        true
    }
}
