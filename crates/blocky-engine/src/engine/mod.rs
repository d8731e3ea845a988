//! Game-level plumbing on top of the block tree.
//!
//! - [`Action`] / [`Move`] - the action vocabulary and a move bound to a target block
//! - [`generate_board`] - random initial boards
//! - [`BoardSeed`] - seed for reproducible boards and player decisions

pub use self::{action::*, board_generator::*, seed::*};

mod action;
mod board_generator;
mod seed;
