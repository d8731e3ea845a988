//! Scoring of Blocky boards.
//!
//! Every player owns a [`goal::Goal`]: a target colour plus one of two scoring rules.
//!
//! - [`perimeter`] - counts border cells of the target colour
//! - [`blob`] - size of the largest connected region of the target colour
//!
//! Both rules work on the flattened board ([`blocky_engine::Grid`]), recomputed on every
//! call.
//!
//! # Example
//!
//! ```
//! use blocky_engine::{Block, Colour};
//! use blocky_evaluator::goal::Goal;
//!
//! let board = Block::root(500, 2, Colour::REAL_RED);
//! assert_eq!(Goal::perimeter(Colour::REAL_RED).score(&board), 16);
//! assert_eq!(Goal::blob(Colour::REAL_RED).score(&board), 16);
//! assert_eq!(Goal::blob(Colour::OLD_OLIVE).score(&board), 0);
//! ```

pub mod blob;
pub mod goal;
pub mod perimeter;
