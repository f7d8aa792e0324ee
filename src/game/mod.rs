//! Game contract, variant identifiers and the concrete games.
//!
//! A game owns one [`PileGroup`] per category in a fixed order. Every query
//! and move is a function of the current pile contents only: the engine
//! keeps no selection state between calls.

use alloc::boxed::Box;
use alloc::vec::Vec;

use log::{debug, trace};

use crate::card::Card;
use crate::error::{GameError, MoveError, Operation};
use crate::options::GameOptions;
use crate::pile::PileGroup;

mod aces_up;
mod bakers_dozen;
mod freecell;

mod sealed {
    use crate::pile::PileGroup;

    /// Only constructible inside the crate.
    #[derive(Debug, Clone, Copy)]
    pub struct Token(pub(crate) ());

    /// Mutable group access, kept out of reach of callers so every change
    /// goes through the legality-checked methods of [`super::Game`].
    pub trait Sealed {
        /// Returns the pile groups in slot order, mutably.
        fn groups_mut(&mut self, token: Token) -> &mut [PileGroup];
    }
}

use sealed::{Sealed, Token};

pub use aces_up::AcesUpGame;
pub use bakers_dozen::BakersDozenGame;
pub use freecell::FreecellGame;

/// Role of a group of piles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Main playing piles.
    Tableau,
    /// Foundation piles (the discard pile in Aces Up).
    Homecell,
    /// Freecell's single-card cells.
    Freecell,
    /// Aces Up's undealt cards.
    Stock,
}

impl Category {
    /// Returns the stable numeric index used by callers.
    ///
    /// Freecell and Stock share index 2; no variant has both, so
    /// [`GameKind::category_at`] resolves the index per variant.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Tableau => 0,
            Self::Homecell => 1,
            Self::Freecell | Self::Stock => 2,
        }
    }
}

/// The supported variants, with their stable numeric ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameKind {
    /// Baker's Dozen (id 0).
    #[default]
    BakersDozen,
    /// Freecell (id 1).
    Freecell,
    /// Aces Up (id 2).
    AcesUp,
}

impl GameKind {
    /// All variants in id order.
    pub const ALL: [Self; 3] = [Self::BakersDozen, Self::Freecell, Self::AcesUp];

    /// Returns the variant's numeric id.
    #[must_use]
    pub const fn id(self) -> u32 {
        match self {
            Self::BakersDozen => 0,
            Self::Freecell => 1,
            Self::AcesUp => 2,
        }
    }

    /// Returns the variant's categories in slot order.
    #[must_use]
    pub const fn categories(self) -> &'static [Category] {
        match self {
            Self::BakersDozen => &[Category::Tableau, Category::Homecell],
            Self::Freecell => &[Category::Tableau, Category::Homecell, Category::Freecell],
            Self::AcesUp => &[Category::Tableau, Category::Homecell, Category::Stock],
        }
    }

    /// Resolves a numeric category index for this variant.
    #[must_use]
    pub fn category_at(self, index: usize) -> Option<Category> {
        self.categories().get(index).copied()
    }

    fn slot(self, category: Category) -> Option<usize> {
        self.categories().iter().position(|&c| c == category)
    }
}

impl TryFrom<u32> for GameKind {
    type Error = GameError;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == id)
            .ok_or(GameError::UnknownGame(id))
    }
}

/// Addresses one pile: its category and 0-based position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PileRef {
    /// The pile's category.
    pub category: Category,
    /// Position within the category.
    pub pos: usize,
}

impl PileRef {
    /// Creates a new pile reference.
    #[must_use]
    pub const fn new(category: Category, pos: usize) -> Self {
        Self { category, pos }
    }
}

/// Uniform query and move surface shared by every variant.
///
/// Most methods delegate to the [`PileGroup`] of the requested category.
/// A category the variant lacks yields [`MoveError::UnknownCategory`]; an
/// out-of-range position yields [`MoveError::PileNotFound`]. An illegal move
/// returns `Ok(false)` and changes nothing.
///
/// [`MoveError::Unsupported`] marks a call shape the variant does not have,
/// such as a forced add in Baker's Dozen. It is a caller bug, not a legality
/// outcome, and should not be handled like `Ok(false)`.
///
/// The trait is sealed: it is implemented only by the games in this crate,
/// and pile groups are handed out read-only, so no caller can push a card
/// past the legality checks.
///
/// ```compile_fail
/// use patience::{BakersDozenGame, Category, Game};
///
/// let mut game = BakersDozenGame::new(1);
/// let tableau = game.group_mut(Category::Tableau);
/// ```
pub trait Game: core::fmt::Debug + Sealed {
    /// Returns which variant this is.
    fn kind(&self) -> GameKind;

    /// Returns the pile groups in slot order.
    fn groups(&self) -> &[PileGroup];

    /// Returns the group of the given category.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::UnknownCategory`] if the variant has no such
    /// category.
    fn group(&self, category: Category) -> Result<&PileGroup, MoveError> {
        self.kind()
            .slot(category)
            .and_then(|slot| self.groups().get(slot))
            .ok_or(MoveError::UnknownCategory(category))
    }

    /// Returns the number of piles in a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the variant has no such category.
    fn pile_count(&self, category: Category) -> Result<usize, MoveError> {
        Ok(self.group(category)?.len())
    }

    /// Returns whether `card` may be added to the given pile.
    ///
    /// # Errors
    ///
    /// Returns an error if the pile does not exist.
    fn is_adding_legal(
        &self,
        card: Card,
        category: Category,
        pos: usize,
    ) -> Result<bool, MoveError> {
        self.group(category)?.is_adding_legal(card, pos)
    }

    /// Adds `card` to the given pile if legal.
    ///
    /// # Errors
    ///
    /// Returns an error if the pile does not exist.
    fn add_card(&mut self, card: Card, category: Category, pos: usize) -> Result<bool, MoveError> {
        let added = group_mut(self, category)?.add_card(card, pos)?;
        if added {
            debug!("added {card} to {category:?} {pos}");
        }
        Ok(added)
    }

    /// Adds a card without a legality check. `None` is ignored where
    /// supported.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Unsupported`] unless the variant allows bypassing
    /// legality for this category.
    fn force_add_card(
        &mut self,
        card: Option<Card>,
        category: Category,
        pos: usize,
    ) -> Result<(), MoveError> {
        let _ = (card, category, pos);
        Err(MoveError::Unsupported(Operation::ForceAdd))
    }

    /// Returns whether the top card of the given pile may be removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the pile does not exist or the category only
    /// decides removals toward a destination.
    fn is_removing_legal(&self, category: Category, pos: usize) -> Result<bool, MoveError> {
        self.group(category)?.is_removing_legal(pos)
    }

    /// Returns whether the top card of the given pile may move to a pile of
    /// the `dest` category.
    ///
    /// # Errors
    ///
    /// Returns an error if the pile does not exist, `dest` is not a valid
    /// destination, or the category has no destination-aware rule.
    fn is_removing_legal_to(
        &self,
        category: Category,
        pos: usize,
        dest: Category,
    ) -> Result<bool, MoveError> {
        self.group(category)?.is_removing_legal_to(pos, dest)
    }

    /// Removes the top card of the given pile if legal.
    ///
    /// # Errors
    ///
    /// See [`Game::is_removing_legal`].
    fn remove_card(&mut self, category: Category, pos: usize) -> Result<bool, MoveError> {
        let removed = group_mut(self, category)?.remove_card(pos)?;
        if removed {
            debug!("removed top card of {category:?} {pos}");
        }
        Ok(removed)
    }

    /// Removes the top card of the given pile toward `dest` if legal.
    ///
    /// # Errors
    ///
    /// See [`Game::is_removing_legal_to`].
    fn remove_card_to(
        &mut self,
        category: Category,
        pos: usize,
        dest: Category,
    ) -> Result<bool, MoveError> {
        let removed = group_mut(self, category)?.remove_card_to(pos, dest)?;
        if removed {
            debug!("removed top card of {category:?} {pos} toward {dest:?}");
        }
        Ok(removed)
    }

    /// Returns the top card of the given pile, `None` if it is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the pile does not exist.
    fn top_card(&self, category: Category, pos: usize) -> Result<Option<Card>, MoveError> {
        self.group(category)?.top_card(pos)
    }

    /// Returns the top cards of every other pile of the category.
    ///
    /// # Errors
    ///
    /// Returns an error if the pile does not exist.
    fn other_top_cards(
        &self,
        category: Category,
        pos: usize,
    ) -> Result<Vec<Option<Card>>, MoveError> {
        self.group(category)?.other_top_cards(pos)
    }

    /// Returns the number of cards in the given pile.
    ///
    /// # Errors
    ///
    /// Returns an error if the pile does not exist.
    fn size(&self, category: Category, pos: usize) -> Result<usize, MoveError> {
        self.group(category)?.size(pos)
    }

    /// Runs the variant's special action and returns the number of cards it
    /// moved.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Unsupported`] if the variant has none.
    fn invoke_default_special_action(&mut self) -> Result<usize, MoveError> {
        Err(MoveError::Unsupported(Operation::SpecialAction))
    }

    /// Moves the top card of `from` onto `to`.
    ///
    /// Both the add at `to` and the removal at `from` are checked first;
    /// either both happen or neither does. Returns `false` if `from` is
    /// empty or the move is illegal.
    ///
    /// # Errors
    ///
    /// Returns an error if either pile does not exist or the variant needs
    /// another call shape.
    fn move_card(&mut self, from: PileRef, to: PileRef) -> Result<bool, MoveError> {
        let Some(card) = self.top_card(from.category, from.pos)? else {
            return Ok(false);
        };

        if !self.is_adding_legal(card, to.category, to.pos)?
            || !self.is_removing_legal(from.category, from.pos)?
        {
            trace!("rejected {card} from {from:?} to {to:?}");
            return Ok(false);
        }

        let added = self.add_card(card, to.category, to.pos)?;
        let removed = self.remove_card(from.category, from.pos)?;
        debug_assert!(added && removed, "checked move must apply");
        Ok(true)
    }
}

/// Returns the group of the given category, mutably.
fn group_mut<G: Game + ?Sized>(
    game: &mut G,
    category: Category,
) -> Result<&mut PileGroup, MoveError> {
    let slot = game
        .kind()
        .slot(category)
        .ok_or(MoveError::UnknownCategory(category))?;
    game.groups_mut(Token(()))
        .get_mut(slot)
        .ok_or(MoveError::UnknownCategory(category))
}

/// Creates a freshly dealt game of the configured variant.
///
/// This replaces any notion of a shared "current game": the caller owns the
/// returned handle and drops it to start over.
///
/// # Example
///
/// ```
/// use patience::{Category, Game, GameKind, GameOptions, new_game};
///
/// let options = GameOptions::default().with_kind(GameKind::Freecell).with_seed(7);
/// let game = new_game(&options);
/// assert_eq!(game.pile_count(Category::Tableau), Ok(8));
/// ```
#[must_use]
pub fn new_game(options: &GameOptions) -> Box<dyn Game> {
    match options.kind {
        GameKind::BakersDozen => Box::new(BakersDozenGame::new(options.seed)),
        GameKind::Freecell => Box::new(FreecellGame::new(options.seed)),
        GameKind::AcesUp => Box::new(AcesUpGame::new(options.seed)),
    }
}
