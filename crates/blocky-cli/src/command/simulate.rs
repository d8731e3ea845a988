use std::path::PathBuf;

use anyhow::Context as _;
use blocky_engine::{BoardSeed, generate_board};
use blocky_player::{GameSession, create_players};
use chrono::Utc;

use crate::{
    schema::record::{GameRecord, PlayerInfo},
    util::{self, Output},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    /// Maximum depth of the block tree
    #[arg(long, default_value_t = 3)]
    pub(crate) max_depth: u32,
    /// Side length of the board in pixels
    #[arg(long, default_value_t = 750)]
    pub(crate) board_size: u32,
    /// Number of random players
    #[arg(long, default_value_t = 1)]
    pub(crate) random_players: usize,
    /// Difficulty of each smart player
    #[arg(long, value_delimiter = ',', default_values_t = [5])]
    pub(crate) smart_players: Vec<usize>,
    /// Number of turns to play
    #[arg(long, default_value_t = 10)]
    pub(crate) turns: usize,
    /// Seed for the board, goals and players (32 hex digits); random if omitted
    #[arg(long)]
    pub(crate) seed: Option<BoardSeed>,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SimulateArg) -> anyhow::Result<()> {
    let SimulateArg {
        max_depth,
        board_size,
        random_players,
        ref smart_players,
        turns,
        seed,
        ref output,
    } = *arg;

    util::check_board_config(max_depth, board_size)?;
    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = seed.rng();

    let board = generate_board(max_depth, board_size, &mut rng);
    let initial_board = board.squares();
    let players = create_players(0, random_players, smart_players, &mut rng)
        .context("Failed to assign goals to players")?;
    let mut session = GameSession::new(board, players);

    tracing::info!(%seed, players = session.players().len(), turns, "starting simulation");
    let played = session.play(turns, &mut rng);
    eprintln!("Played {played} turns with seed {seed}");

    let record = GameRecord {
        recorded_at: Utc::now(),
        seed,
        max_depth,
        board_size,
        players: session.players().iter().map(PlayerInfo::from).collect(),
        initial_board,
        turns: session.history().to_vec(),
        final_board: session.board().squares(),
        final_scores: session.scores(),
        winners: session.winners(),
    };
    Output::save_json(&record, output.clone())?;
    Ok(())
}
