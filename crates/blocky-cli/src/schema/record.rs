use blocky_engine::{BoardSeed, Square};
use blocky_evaluator::goal::Goal;
use blocky_player::{Player, Strategy, TurnRecord};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Recorded simulation with everything needed to inspect the game afterwards
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    /// Timestamp when recording was created (ISO 8601 format)
    pub recorded_at: DateTime<Utc>,
    /// Random seed used for the board, goals and players
    pub seed: BoardSeed,
    pub max_depth: u32,
    pub board_size: u32,
    pub players: Vec<PlayerInfo>,
    /// Leaves of the board before the first turn
    pub initial_board: Vec<Square>,
    pub turns: Vec<TurnRecord>,
    pub final_board: Vec<Square>,
    /// Score of each player at the end, in player order
    pub final_scores: Vec<usize>,
    /// Ids of the players sharing the highest final score
    pub winners: Vec<usize>,
}

/// Information about a player and its goal
#[derive(Debug, Clone, Serialize)]
pub struct PlayerInfo {
    pub id: usize,
    pub kind: PlayerKind,
    pub goal: Goal,
    pub description: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PlayerKind {
    Human,
    Random,
    Smart { difficulty: usize },
}

impl From<&Player> for PlayerInfo {
    fn from(player: &Player) -> Self {
        let kind = match player.strategy() {
            Strategy::Human(_) => PlayerKind::Human,
            Strategy::Random(_) => PlayerKind::Random,
            Strategy::Smart(state) => PlayerKind::Smart {
                difficulty: state.difficulty(),
            },
        };
        Self {
            id: player.id(),
            kind,
            goal: player.goal(),
            description: player.goal().description(),
        }
    }
}
