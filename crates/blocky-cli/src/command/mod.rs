use clap::{Parser, Subcommand};

use self::{show_board::ShowBoardArg, simulate::SimulateArg};

mod show_board;
mod simulate;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play a game between computer players and record it as JSON
    Simulate(#[clap(flatten)] SimulateArg),
    /// Generate a board and print its unit cells
    ShowBoard(#[clap(flatten)] ShowBoardArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Simulate(arg) => simulate::run(&arg)?,
        Mode::ShowBoard(arg) => show_board::run(&arg)?,
    }
    Ok(())
}
