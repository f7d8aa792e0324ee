use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::deck::Deck;
use crate::error::{DeckError, MoveError};
use crate::pile::Pile;

use super::{PileStrategy, StrategyKind};

/// Number of tableau piles in Baker's Dozen.
pub const TABLEAU_PILES: usize = 13;
/// Cards dealt to each Baker's Dozen tableau pile.
pub const CARDS_PER_PILE: usize = 4;

/// Baker's Dozen tableau rules.
///
/// Thirteen piles of four cards with kings moved to the bottom. A card may
/// go onto a card one rank higher regardless of suit, and never onto an
/// empty pile. Any top card may be removed.
#[derive(Debug, Clone, Copy, Default)]
pub struct BakersDozenTableau;

impl BakersDozenTableau {
    /// Moves kings to the bottom of a freshly dealt pile, keeping the
    /// relative order of both the kings and the other cards.
    fn kings_to_bottom(cards: Vec<Card>) -> Pile {
        let (kings, rest): (Vec<Card>, Vec<Card>) =
            cards.into_iter().partition(|card| card.rank == Rank::King);
        Pile::from_cards(kings.into_iter().chain(rest).collect())
    }
}

impl PileStrategy for BakersDozenTableau {
    fn kind(&self) -> StrategyKind {
        StrategyKind::BakersDozenTableau
    }

    fn initial_layout(&self, deck: &mut Deck) -> Result<Vec<Pile>, DeckError> {
        let mut piles = Vec::with_capacity(TABLEAU_PILES);
        for _ in 0..TABLEAU_PILES {
            piles.push(Self::kings_to_bottom(deck.take(CARDS_PER_PILE)?));
        }
        Ok(piles)
    }

    fn is_adding_legal(&self, card: Card, top: Option<Card>) -> bool {
        top.is_some_and(|top| top.rank.value() == card.rank.value() + 1)
    }

    fn is_removing_legal(&self, top: Option<Card>) -> Result<bool, MoveError> {
        Ok(top.is_some())
    }
}
