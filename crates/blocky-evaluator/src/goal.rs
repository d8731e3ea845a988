//! Player goals and their assignment.

use std::fmt;

use blocky_engine::{Block, Colour};
use rand::{Rng, seq::SliceRandom as _};
use serde::{Deserialize, Serialize};

use crate::{blob, perimeter};

/// Scoring rule of a [`Goal`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::IsVariant,
)]
#[serde(rename_all = "kebab-case")]
pub enum GoalKind {
    /// Unit cells of the target colour on the board's border.
    Perimeter,
    /// Largest connected region of the target colour.
    Blob,
}

/// A target colour together with the rule that scores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Goal {
    kind: GoalKind,
    colour: Colour,
}

impl Goal {
    #[must_use]
    pub const fn new(kind: GoalKind, colour: Colour) -> Self {
        Self { kind, colour }
    }

    #[must_use]
    pub const fn perimeter(colour: Colour) -> Self {
        Self::new(GoalKind::Perimeter, colour)
    }

    #[must_use]
    pub const fn blob(colour: Colour) -> Self {
        Self::new(GoalKind::Blob, colour)
    }

    #[must_use]
    pub const fn kind(&self) -> GoalKind {
        self.kind
    }

    #[must_use]
    pub const fn colour(&self) -> Colour {
        self.colour
    }

    /// Scores `board` (or any subtree) against this goal.
    ///
    /// The block is flattened on every call; nothing is cached.
    #[must_use]
    pub fn score(&self, board: &Block) -> usize {
        let grid = board.flatten();
        match self.kind {
            GoalKind::Perimeter => perimeter::border_count(&grid, self.colour),
            GoalKind::Blob => blob::largest_blob(&grid, self.colour),
        }
    }

    /// Human-readable description of the goal.
    ///
    /// ```
    /// use blocky_engine::Colour;
    /// use blocky_evaluator::goal::Goal;
    ///
    /// assert_eq!(
    ///     Goal::blob(Colour::OLD_OLIVE).description(),
    ///     "Make the largest blob (area) of Old Olive"
    /// );
    /// ```
    #[must_use]
    pub fn description(&self) -> String {
        match self.kind {
            GoalKind::Perimeter => {
                format!("Make the largest {} border around the board", self.colour)
            }
            GoalKind::Blob => format!("Make the largest blob (area) of {}", self.colour),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GoalError {
    #[display("cannot assign {requested} goals with only {available} colours")]
    TooManyGoals { requested: usize, available: usize },
}

/// Creates `num_goals` goals of one randomly chosen kind, each with a distinct colour.
///
/// Fails when more goals are requested than there are colours in
/// [`Colour::PALETTE`].
pub fn generate_goals<R>(num_goals: usize, rng: &mut R) -> Result<Vec<Goal>, GoalError>
where
    R: Rng + ?Sized,
{
    let mut palette = Colour::PALETTE;
    if num_goals > palette.len() {
        return Err(GoalError::TooManyGoals {
            requested: num_goals,
            available: palette.len(),
        });
    }
    let kind = if rng.random_bool(0.5) {
        GoalKind::Perimeter
    } else {
        GoalKind::Blob
    };
    palette.shuffle(rng);
    Ok(palette[..num_goals]
        .iter()
        .map(|&colour| Goal::new(kind, colour))
        .collect())
}
