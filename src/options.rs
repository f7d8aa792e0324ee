//! Game configuration options.

use crate::error::GameError;
use crate::game::GameKind;

/// Configuration for dealing a new game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use patience::{GameKind, GameOptions};
///
/// let options = GameOptions::default()
///     .with_kind(GameKind::AcesUp)
///     .with_seed(2024);
/// assert_eq!(options.kind, GameKind::AcesUp);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameOptions {
    /// Which variant to deal.
    pub kind: GameKind,
    /// Seed for the deck shuffle. Equal seeds deal equal games.
    pub seed: u64,
}

impl GameOptions {
    /// Builds options from a numeric game id.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownGame`] if the id does not name a variant.
    ///
    /// # Example
    ///
    /// ```
    /// use patience::{GameError, GameKind, GameOptions};
    ///
    /// assert_eq!(GameOptions::from_id(1, 9).map(|o| o.kind), Ok(GameKind::Freecell));
    /// assert_eq!(GameOptions::from_id(7, 9), Err(GameError::UnknownGame(7)));
    /// ```
    pub fn from_id(id: u32, seed: u64) -> Result<Self, GameError> {
        Ok(Self {
            kind: GameKind::try_from(id)?,
            seed,
        })
    }

    /// Sets the variant.
    #[must_use]
    pub const fn with_kind(mut self, kind: GameKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the shuffle seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
