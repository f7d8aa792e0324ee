use alloc::boxed::Box;

use log::{debug, info, trace, warn};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DeckError, MoveError, Operation};
use crate::pile::PileGroup;
use crate::strategy::{AcesUpHomecell, AcesUpStock, AcesUpTableau};

use super::sealed::{Sealed, Token};
use super::{Category, Game, GameKind, PileRef, group_mut};

/// Number of tableau piles the stock deals to.
const DEAL_WIDTH: usize = 4;

/// A game of Aces Up.
///
/// Four tableau piles, one discard pile (the homecell) and the stock.
/// Removals always name their destination, and dealing from the stock is
/// the special action.
///
/// # Example
///
/// ```
/// use patience::{AcesUpGame, Category, Game};
///
/// let mut game = AcesUpGame::new(3);
/// assert_eq!(game.size(Category::Stock, 0), Ok(48));
///
/// assert_eq!(game.invoke_default_special_action(), Ok(4));
/// assert_eq!(game.size(Category::Stock, 0), Ok(44));
/// assert_eq!(game.size(Category::Tableau, 0), Ok(2));
/// ```
#[derive(Debug)]
pub struct AcesUpGame {
    /// Tableau, homecell, then stock.
    groups: [PileGroup; 3],
}

impl AcesUpGame {
    /// Deals a new game from a deck shuffled with `seed`.
    #[must_use]
    #[expect(
        clippy::missing_panics_doc,
        reason = "a full deck always covers the layout"
    )]
    pub fn new(seed: u64) -> Self {
        Self::from_deck(Deck::shuffled(seed)).expect("a full deck covers the Aces Up layout")
    }

    /// Deals a new game from the given deck.
    ///
    /// # Errors
    ///
    /// Returns an error unless the deck holds each of the 52 cards exactly
    /// once; see [`Deck::check_complete`].
    pub fn from_deck(mut deck: Deck) -> Result<Self, DeckError> {
        deck.check_complete()?;
        let tableau = PileGroup::new(Box::new(AcesUpTableau), &mut deck)?;
        let homecell = PileGroup::new(Box::new(AcesUpHomecell), &mut deck)?;
        let stock = PileGroup::new(Box::new(AcesUpStock), &mut deck)?;
        info!("dealt Aces Up with {} cards in stock", stock.size(0).unwrap_or(0));

        Ok(Self {
            groups: [tableau, homecell, stock],
        })
    }
}

impl Game for AcesUpGame {
    fn kind(&self) -> GameKind {
        GameKind::AcesUp
    }

    fn groups(&self) -> &[PileGroup] {
        &self.groups
    }

    /// Adds a card to a tableau pile without a legality check. `None` is
    /// ignored.
    fn force_add_card(
        &mut self,
        card: Option<Card>,
        category: Category,
        pos: usize,
    ) -> Result<(), MoveError> {
        if category != Category::Tableau {
            return Err(MoveError::Unsupported(Operation::ForceAdd));
        }
        let tableau = group_mut(self, category)?;
        match card {
            Some(card) => tableau.force_add_card(card, pos),
            // Still reject a bad position.
            None => tableau.size(pos).map(|_| ()),
        }
    }

    fn is_removing_legal(&self, _category: Category, _pos: usize) -> Result<bool, MoveError> {
        Err(MoveError::Unsupported(Operation::Removal))
    }

    fn remove_card(&mut self, _category: Category, _pos: usize) -> Result<bool, MoveError> {
        Err(MoveError::Unsupported(Operation::Removal))
    }

    /// Deals one stock card onto each tableau pile.
    ///
    /// A short stock deals what it has; an empty stock deals nothing.
    fn invoke_default_special_action(&mut self) -> Result<usize, MoveError> {
        let mut dealt = 0;
        for pos in 0..DEAL_WIDTH {
            let top = self.top_card(Category::Stock, 0)?;
            self.force_add_card(top, Category::Tableau, pos)?;
            if self.remove_card_to(Category::Stock, 0, Category::Tableau)? {
                dealt += 1;
            }
        }

        if dealt < DEAL_WIDTH {
            warn!("stock ran short, dealt {dealt} of {DEAL_WIDTH} cards");
        } else {
            debug!("dealt {dealt} cards from stock");
        }
        Ok(dealt)
    }

    /// Moves the top card of `from` onto `to`, using the destination-aware
    /// removal rule. The source card is removed before it is added.
    fn move_card(&mut self, from: PileRef, to: PileRef) -> Result<bool, MoveError> {
        let Some(card) = self.top_card(from.category, from.pos)? else {
            return Ok(false);
        };

        if !self.is_adding_legal(card, to.category, to.pos)?
            || !self.is_removing_legal_to(from.category, from.pos, to.category)?
        {
            trace!("rejected {card} from {from:?} to {to:?}");
            return Ok(false);
        }

        let removed = self.remove_card_to(from.category, from.pos, to.category)?;
        let added = self.add_card(card, to.category, to.pos)?;
        debug_assert!(removed && added, "checked move must apply");
        Ok(true)
    }
}

impl Sealed for AcesUpGame {
    fn groups_mut(&mut self, _token: Token) -> &mut [PileGroup] {
        &mut self.groups
    }
}
