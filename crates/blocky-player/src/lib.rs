//! Players of the Blocky game and a headless game driver.
//!
//! A [`Player`] pairs a [`blocky_evaluator::goal::Goal`] with one of three strategies:
//!
//! - human: moves come from [`InputEvent`]s (pointer, depth selection, action keys)
//! - random: the first legal move found by random sampling
//! - smart: the best of `difficulty` sampled legal moves, or a pass
//!
//! Players only *propose* [`blocky_engine::Move`]s; [`GameSession`] applies them to the
//! board it owns.

pub use self::{event::*, human::*, player::*, random::*, session::*, smart::*};

mod event;
mod human;
mod player;
mod candidate;
mod random;
mod session;
mod smart;
