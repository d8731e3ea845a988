use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    BlockOpError, MoveError,
    core::{Block, BlockPath, Colour, RotateDirection, SwapDirection},
};

/// Everything a player can do on their turn.
///
/// Rotations and swaps carry a direction; the remaining actions do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    RotateClockwise,
    RotateCounterClockwise,
    SwapHorizontal,
    SwapVertical,
    Smash,
    Paint,
    Combine,
    Pass,
}

impl Action {
    /// Number of actions (8).
    pub const LEN: usize = 8;

    pub const ALL: [Self; Self::LEN] = [
        Self::RotateClockwise,
        Self::RotateCounterClockwise,
        Self::SwapHorizontal,
        Self::SwapVertical,
        Self::Smash,
        Self::Paint,
        Self::Combine,
        Self::Pass,
    ];

    /// Actions that change the board, i.e. all but [`Action::Pass`].
    pub const MUTATIONS: [Self; Self::LEN - 1] = [
        Self::RotateClockwise,
        Self::RotateCounterClockwise,
        Self::SwapHorizontal,
        Self::SwapVertical,
        Self::Smash,
        Self::Paint,
        Self::Combine,
    ];

    /// Name of the action as exposed with a move (`"rotate"`, `"swap"`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RotateClockwise | Self::RotateCounterClockwise => "rotate",
            Self::SwapHorizontal | Self::SwapVertical => "swap",
            Self::Smash => "smash",
            Self::Paint => "paint",
            Self::Combine => "combine",
            Self::Pass => "pass",
        }
    }

    #[must_use]
    pub const fn direction(self) -> Option<u8> {
        match self {
            Self::RotateClockwise => Some(RotateDirection::Clockwise.as_u8()),
            Self::RotateCounterClockwise => Some(RotateDirection::CounterClockwise.as_u8()),
            Self::SwapHorizontal => Some(SwapDirection::Horizontal.as_u8()),
            Self::SwapVertical => Some(SwapDirection::Vertical.as_u8()),
            Self::Smash | Self::Paint | Self::Combine | Self::Pass => None,
        }
    }

    /// Looks up an action by its name and direction.
    ///
    /// ```
    /// use blocky_engine::Action;
    ///
    /// assert_eq!(Action::from_parts("swap", Some(1)), Some(Action::SwapVertical));
    /// assert_eq!(Action::from_parts("smash", None), Some(Action::Smash));
    /// assert_eq!(Action::from_parts("rotate", Some(2)), None);
    /// ```
    #[must_use]
    pub fn from_parts(name: &str, direction: Option<u8>) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|action| action.name() == name && action.direction() == direction)
    }

    /// Samples one of [`Self::MUTATIONS`] uniformly.
    pub fn random_mutation<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self::MUTATIONS[rng.random_range(0..Self::MUTATIONS.len())]
    }

    /// Performs this action on `block`.
    ///
    /// `paint_colour` is used by [`Action::Paint`]; `rng` by [`Action::Smash`].
    /// [`Action::Pass`] always succeeds and changes nothing.
    pub fn apply<R>(
        self,
        block: &mut Block,
        paint_colour: Colour,
        rng: &mut R,
    ) -> Result<(), BlockOpError>
    where
        R: Rng + ?Sized,
    {
        match self {
            Self::RotateClockwise => block.rotate(RotateDirection::Clockwise),
            Self::RotateCounterClockwise => block.rotate(RotateDirection::CounterClockwise),
            Self::SwapHorizontal => block.swap(SwapDirection::Horizontal),
            Self::SwapVertical => block.swap(SwapDirection::Vertical),
            Self::Smash => block.smash(rng),
            Self::Paint => block.paint(paint_colour),
            Self::Combine => block.combine(),
            Self::Pass => Ok(()),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction() {
            Some(direction) => write!(f, "{}({direction})", self.name()),
            None => f.write_str(self.name()),
        }
    }
}

/// An action bound to the block it targets.
///
/// The target is a [`BlockPath`] from the board root, so a move found on a copy of the
/// board can be replayed on the board itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    action: Action,
    target: BlockPath,
}

impl Move {
    #[must_use]
    pub fn new(action: Action, target: BlockPath) -> Self {
        Self { action, target }
    }

    /// A pass, targeting the whole board.
    #[must_use]
    pub fn pass() -> Self {
        Self::new(Action::Pass, BlockPath::root())
    }

    #[must_use]
    pub fn action(&self) -> Action {
        self.action
    }

    #[must_use]
    pub fn target(&self) -> &BlockPath {
        &self.target
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.action.name()
    }

    #[must_use]
    pub fn direction(&self) -> Option<u8> {
        self.action.direction()
    }

    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.action == Action::Pass
    }

    /// Performs this move on `board`.
    pub fn apply<R>(
        &self,
        board: &mut Block,
        paint_colour: Colour,
        rng: &mut R,
    ) -> Result<(), MoveError>
    where
        R: Rng + ?Sized,
    {
        let block = board
            .get_mut(&self.target)
            .ok_or_else(|| MoveError::TargetNotFound(self.target.clone()))?;
        self.action
            .apply(block, paint_colour, rng)
            .map_err(MoveError::Rejected)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.action, self.target)
    }
}
