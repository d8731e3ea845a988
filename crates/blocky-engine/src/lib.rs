//! Core data structures and rules of the Blocky board game.
//!
//! The board is a perfect quadtree of [`Block`]s over a square region. Leaves carry a
//! [`Colour`]; internal blocks have exactly four children ordered
//! `[upper-right, upper-left, lower-left, lower-right]` (see [`Quadrant`]).
//!
//! - [`core`] - colours, geometry, the block tree and its mutators, flattening
//! - [`engine`] - actions and moves, board generation, seeds
//!
//! # Example
//!
//! ```
//! use blocky_engine::{Colour, Position, generate_board};
//! use rand::SeedableRng as _;
//! use rand_pcg::Pcg32;
//!
//! let mut rng = Pcg32::seed_from_u64(42);
//! let mut board = generate_board(2, 500, &mut rng);
//!
//! let unit = board
//!     .locate_path(Position::new(0, 0), 2)
//!     .expect("origin is on the board");
//! let cell = board.get_mut(&unit).unwrap();
//! if cell.is_unit() {
//!     let _ = cell.paint(Colour::REAL_RED);
//! }
//! assert_eq!(board.flatten().side(), 4);
//! ```

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Reason a block mutation was rejected.
///
/// Mutators never panic on an invalid request; they leave the block untouched and
/// report which precondition failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BlockOpError {
    #[display("block is already at maximum depth")]
    MaxDepth,
    #[display("block has no children")]
    NoChildren,
    #[display("block has children")]
    NotLeaf,
    #[display("block is not a unit cell")]
    NotUnitCell,
    #[display("block already has the target colour")]
    SameColour,
    #[display("block is not one level above maximum depth")]
    NotCombinable,
    #[display("children have no majority colour")]
    NoMajority,
    #[display("invalid direction: {_0}")]
    InvalidDirection(#[error(not(source))] u8),
}

/// Reason a [`Move`] could not be performed on a board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    #[display("no block at {_0}")]
    TargetNotFound(#[error(not(source))] BlockPath),
    #[display("move rejected: {_0}")]
    Rejected(BlockOpError),
}
