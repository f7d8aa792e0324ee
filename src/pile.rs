//! Piles and groups of piles bound to a rule strategy.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DeckError, MoveError};
use crate::game::Category;
use crate::strategy::{PileStrategy, StrategyKind};

/// A last-in-first-out pile of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pile {
    /// Cards from bottom to top.
    cards: Vec<Card>,
}

impl Pile {
    /// Creates a new empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a pile from cards listed bottom to top.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Puts a card on top of the pile.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the top card, or `None` if the pile is empty.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Returns the cards from bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// All piles of one category, controlled by a single [`PileStrategy`].
///
/// The number of piles is fixed by the strategy's initial layout and never
/// changes afterwards. Every mutation goes through a legality check unless
/// it is an explicit forced add.
pub struct PileGroup {
    piles: Vec<Pile>,
    strategy: Box<dyn PileStrategy>,
}

impl PileGroup {
    /// Lays out a new group using the strategy and the deck.
    ///
    /// Categories that start empty leave the deck untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck cannot supply the cards the layout needs.
    pub fn new(strategy: Box<dyn PileStrategy>, deck: &mut Deck) -> Result<Self, DeckError> {
        let piles = strategy.initial_layout(deck)?;
        Ok(Self { piles, strategy })
    }

    /// Returns which strategy controls this group.
    #[must_use]
    pub fn strategy_kind(&self) -> StrategyKind {
        self.strategy.kind()
    }

    /// Returns the category of the piles in this group.
    #[must_use]
    pub fn category(&self) -> Category {
        self.strategy.kind().category()
    }

    /// Returns the number of piles in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.piles.len()
    }

    /// Returns whether the group has no piles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.piles.is_empty()
    }

    /// Returns the pile at `pos`.
    #[must_use]
    pub fn pile(&self, pos: usize) -> Option<&Pile> {
        self.piles.get(pos)
    }

    fn pile_at(&self, pos: usize) -> Result<&Pile, MoveError> {
        self.piles.get(pos).ok_or(MoveError::PileNotFound {
            category: self.category(),
            pos,
        })
    }

    fn pile_at_mut(&mut self, pos: usize) -> Result<&mut Pile, MoveError> {
        let category = self.category();
        self.piles
            .get_mut(pos)
            .ok_or(MoveError::PileNotFound { category, pos })
    }

    /// Returns the top card of the pile at `pos`.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no pile at `pos`.
    pub fn top_card(&self, pos: usize) -> Result<Option<Card>, MoveError> {
        Ok(self.pile_at(pos)?.top())
    }

    /// Returns the number of cards in the pile at `pos`.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no pile at `pos`.
    pub fn size(&self, pos: usize) -> Result<usize, MoveError> {
        Ok(self.pile_at(pos)?.len())
    }

    /// Returns the top cards of every pile except the one at `pos`, in
    /// ascending position order.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no pile at `pos`.
    pub fn other_top_cards(&self, pos: usize) -> Result<Vec<Option<Card>>, MoveError> {
        self.pile_at(pos)?;
        Ok(self
            .piles
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != pos)
            .map(|(_, pile)| pile.top())
            .collect())
    }

    /// Returns whether `card` may be added to the pile at `pos`.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no pile at `pos`.
    pub fn is_adding_legal(&self, card: Card, pos: usize) -> Result<bool, MoveError> {
        let top = self.top_card(pos)?;
        Ok(self.strategy.is_adding_legal(card, top))
    }

    /// Adds `card` to the pile at `pos` if legal.
    ///
    /// Returns `false` and leaves the pile unchanged if the move is illegal.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no pile at `pos`.
    pub fn add_card(&mut self, card: Card, pos: usize) -> Result<bool, MoveError> {
        if !self.is_adding_legal(card, pos)? {
            return Ok(false);
        }
        self.pile_at_mut(pos)?.push(card);
        Ok(true)
    }

    /// Adds `card` to the pile at `pos` without a legality check.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no pile at `pos`.
    pub fn force_add_card(&mut self, card: Card, pos: usize) -> Result<(), MoveError> {
        self.pile_at_mut(pos)?.push(card);
        Ok(())
    }

    /// Returns whether the top card of the pile at `pos` may be removed.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no pile at `pos` or the strategy needs
    /// a destination to decide.
    pub fn is_removing_legal(&self, pos: usize) -> Result<bool, MoveError> {
        let top = self.top_card(pos)?;
        self.strategy.is_removing_legal(top)
    }

    /// Returns whether the top card of the pile at `pos` may be moved to a
    /// pile of the `dest` category.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no pile at `pos`, `dest` is not a valid
    /// destination, or the strategy has no destination-aware rule.
    pub fn is_removing_legal_to(&self, pos: usize, dest: Category) -> Result<bool, MoveError> {
        let top = self.top_card(pos)?;
        let other_tops = self.other_top_cards(pos)?;
        self.strategy.is_removing_legal_to(top, &other_tops, dest)
    }

    /// Removes the top card of the pile at `pos` if legal.
    ///
    /// # Errors
    ///
    /// See [`PileGroup::is_removing_legal`].
    pub fn remove_card(&mut self, pos: usize) -> Result<bool, MoveError> {
        if !self.is_removing_legal(pos)? {
            return Ok(false);
        }
        Ok(self.pile_at_mut(pos)?.pop().is_some())
    }

    /// Removes the top card of the pile at `pos` toward `dest` if legal.
    ///
    /// # Errors
    ///
    /// See [`PileGroup::is_removing_legal_to`].
    pub fn remove_card_to(&mut self, pos: usize, dest: Category) -> Result<bool, MoveError> {
        if !self.is_removing_legal_to(pos, dest)? {
            return Ok(false);
        }
        Ok(self.pile_at_mut(pos)?.pop().is_some())
    }
}

impl core::fmt::Debug for PileGroup {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PileGroup")
            .field("strategy", &self.strategy.kind())
            .field("piles", &self.piles)
            .finish()
    }
}
