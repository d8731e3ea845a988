use blocky_engine::{Block, Move};
use blocky_evaluator::goal::Goal;
use rand::Rng;
use serde::Serialize;

use crate::candidate::{self, Candidate};

/// Attempts allowed per probing round before the search gives up.
///
/// Rejected candidates do not count as rounds, so the cap only matters on boards where
/// almost every action is illegal.
pub const MAX_ATTEMPTS_PER_ROUND: usize = 1_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SmartState {
    difficulty: usize,
    proceed: bool,
}

impl SmartState {
    #[must_use]
    pub fn new(difficulty: usize) -> Self {
        Self {
            difficulty,
            proceed: false,
        }
    }

    /// Number of legal moves compared per turn.
    #[must_use]
    pub fn difficulty(&self) -> usize {
        self.difficulty
    }

    #[must_use]
    pub fn is_triggered(&self) -> bool {
        self.proceed
    }

    pub(crate) fn trigger(&mut self) {
        self.proceed = true;
    }

    /// Compares `difficulty` sampled legal moves and returns the best one.
    ///
    /// Each candidate is scored on its mutated copy of the target block. The first
    /// candidate with the highest score wins, and only if that score beats the score
    /// of the whole board as it stands; otherwise the player passes.
    pub(crate) fn generate_move<R>(
        &mut self,
        board: &Block,
        goal: Goal,
        rng: &mut R,
    ) -> Option<Move>
    where
        R: Rng + ?Sized,
    {
        if !self.proceed {
            return None;
        }
        self.proceed = false;
        Some(
            self.search(board, goal, rng)
                .map_or_else(Move::pass, |found| found.mv),
        )
    }

    /// Best sampled candidate that beats the current board score, if any.
    fn search<R>(&self, board: &Block, goal: Goal, rng: &mut R) -> Option<Candidate>
    where
        R: Rng + ?Sized,
    {
        let current_score = goal.score(board);
        let mut best = Best::new();
        let mut rounds = 0;
        let max_attempts = self.difficulty.saturating_mul(MAX_ATTEMPTS_PER_ROUND);
        for _ in 0..max_attempts {
            if rounds == self.difficulty {
                break;
            }
            let Some(sampled) = candidate::sample(board, goal.colour(), rng) else {
                continue;
            };
            rounds += 1;
            let score = goal.score(&sampled.result);
            tracing::trace!(mv = %sampled.mv, score, "candidate");
            best.offer(sampled, score);
        }

        let best_score = best.score;
        let found = best.improving_on(current_score);
        match &found {
            Some(found) => {
                tracing::debug!(mv = %found.mv, best_score, current_score, rounds, "smart move");
            }
            None => {
                tracing::debug!(
                    best_score,
                    current_score,
                    rounds,
                    "no improving move, passing"
                );
            }
        }
        found
    }
}

/// Highest-scoring item seen so far; ties keep the earlier item.
#[derive(Debug)]
struct Best<T> {
    score: usize,
    item: Option<T>,
}

impl<T> Best<T> {
    fn new() -> Self {
        Self {
            score: 0,
            item: None,
        }
    }

    fn offer(&mut self, item: T, score: usize) {
        if score > self.score {
            self.score = score;
            self.item = Some(item);
        }
    }

    /// The best item, if its score is above `current_score`.
    fn improving_on(self, current_score: usize) -> Option<T> {
        self.item.filter(|_| self.score > current_score)
    }
}
