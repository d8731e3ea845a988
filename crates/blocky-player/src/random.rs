use blocky_engine::{Block, Colour, Move};
use rand::Rng;
use serde::Serialize;

use crate::candidate;

/// Number of sampled moves tried before a random player gives up and passes.
pub const MAX_RANDOM_ATTEMPTS: usize = 10_000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RandomState {
    proceed: bool,
}

impl RandomState {
    #[must_use]
    pub fn is_triggered(&self) -> bool {
        self.proceed
    }

    pub(crate) fn trigger(&mut self) {
        self.proceed = true;
    }

    /// Returns the first sampled move that the board accepts.
    pub(crate) fn generate_move<R>(
        &mut self,
        board: &Block,
        paint_colour: Colour,
        rng: &mut R,
    ) -> Option<Move>
    where
        R: Rng + ?Sized,
    {
        if !self.proceed {
            return None;
        }
        self.proceed = false;

        for attempt in 1..=MAX_RANDOM_ATTEMPTS {
            if let Some(sampled) = candidate::sample(board, paint_colour, rng) {
                tracing::debug!(mv = %sampled.mv, attempt, "random move");
                return Some(sampled.mv);
            }
        }
        tracing::warn!(
            attempts = MAX_RANDOM_ATTEMPTS,
            "no legal random move found, passing"
        );
        Some(Move::pass())
    }
}
