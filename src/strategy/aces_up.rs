use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::deck::Deck;
use crate::error::{DeckError, MoveError};
use crate::game::Category;
use crate::pile::Pile;

use super::{PileStrategy, StrategyKind, check_other_tops};

/// Number of tableau piles in Aces Up.
pub const TABLEAU_PILES: usize = 4;
/// Cards left in the stock once the tableau is dealt.
pub const STOCK_CARDS: usize = 48;

/// Aces Up tableau rules.
///
/// Four piles of one card. A card may only be put on an empty pile. The top
/// card may be discarded when another pile shows a higher card of the same
/// suit (aces rank highest), or moved when another pile is empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcesUpTableau;

impl AcesUpTableau {
    /// Returns whether `other` outranks `top` with aces counted high.
    fn outranks(other: Card, top: Card) -> bool {
        other.rank == Rank::Ace || other.rank > top.rank
    }
}

impl PileStrategy for AcesUpTableau {
    fn kind(&self) -> StrategyKind {
        StrategyKind::AcesUpTableau
    }

    fn initial_layout(&self, deck: &mut Deck) -> Result<Vec<Pile>, DeckError> {
        let mut piles = Vec::with_capacity(TABLEAU_PILES);
        for _ in 0..TABLEAU_PILES {
            piles.push(Pile::from_cards(deck.take(1)?));
        }
        Ok(piles)
    }

    fn is_adding_legal(&self, _card: Card, top: Option<Card>) -> bool {
        top.is_none()
    }

    fn is_removing_legal_to(
        &self,
        top: Option<Card>,
        other_tops: &[Option<Card>],
        dest: Category,
    ) -> Result<bool, MoveError> {
        check_other_tops(other_tops, TABLEAU_PILES)?;
        if !matches!(dest, Category::Tableau | Category::Homecell) {
            return Err(MoveError::InvalidDestination(dest));
        }

        let Some(top) = top else {
            return Ok(false);
        };

        if dest == Category::Tableau {
            return Ok(other_tops.iter().any(Option::is_none));
        }

        // An ace is never discarded.
        if top.rank == Rank::Ace {
            return Ok(false);
        }
        Ok(other_tops
            .iter()
            .flatten()
            .any(|&other| other.suit == top.suit && Self::outranks(other, top)))
    }
}

/// Aces Up stock rules.
///
/// One pile holding the 48 cards left after the tableau deal, with the next
/// deck card on top. Nothing may be added; the top card may only go to the
/// tableau.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcesUpStock;

impl PileStrategy for AcesUpStock {
    fn kind(&self) -> StrategyKind {
        StrategyKind::AcesUpStock
    }

    fn initial_layout(&self, deck: &mut Deck) -> Result<Vec<Pile>, DeckError> {
        if deck.len() != STOCK_CARDS {
            return Err(DeckError::UnexpectedSize {
                expected: STOCK_CARDS,
                actual: deck.len(),
            });
        }

        let mut cards = deck.take(STOCK_CARDS)?;
        cards.reverse();
        Ok(alloc::vec![Pile::from_cards(cards)])
    }

    fn is_adding_legal(&self, _card: Card, _top: Option<Card>) -> bool {
        false
    }

    fn is_removing_legal_to(
        &self,
        top: Option<Card>,
        other_tops: &[Option<Card>],
        dest: Category,
    ) -> Result<bool, MoveError> {
        check_other_tops(other_tops, 1)?;
        if dest == Category::Freecell {
            return Err(MoveError::InvalidDestination(dest));
        }
        Ok(top.is_some() && dest == Category::Tableau)
    }
}
