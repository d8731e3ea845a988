use std::io::Write as _;

use anyhow::Context as _;
use blocky_engine::{BoardSeed, Colour, Grid, generate_board};

use crate::util::{self, Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ShowBoardArg {
    /// Maximum depth of the block tree
    #[arg(long, default_value_t = 3)]
    max_depth: u32,
    /// Side length of the board in pixels
    #[arg(long, default_value_t = 750)]
    board_size: u32,
    /// Seed for the board (32 hex digits); random if omitted
    #[arg(long)]
    seed: Option<BoardSeed>,
}

pub(crate) fn run(arg: &ShowBoardArg) -> anyhow::Result<()> {
    util::check_board_config(arg.max_depth, arg.board_size)?;
    let seed = arg.seed.unwrap_or_else(rand::random);
    let board = generate_board(arg.max_depth, arg.board_size, &mut seed.rng());

    let mut output = Output::stdout();
    writeln!(output, "seed: {seed}").context("Failed to write to stdout")?;
    writeln!(output, "leaves: {}", board.leaf_count()).context("Failed to write to stdout")?;
    for line in render_grid(&board.flatten()) {
        writeln!(output, "{line}").context("Failed to write to stdout")?;
    }
    for (colour, letter) in Colour::PALETTE.into_iter().zip(COLOUR_LETTERS) {
        writeln!(output, "{letter} = {colour}").context("Failed to write to stdout")?;
    }
    output.flush().context("Failed to flush stdout")?;
    Ok(())
}

const COLOUR_LETTERS: [char; Colour::PALETTE.len()] = ['P', 'R', 'O', 'D'];

fn colour_letter(colour: Colour) -> char {
    colour
        .palette_index()
        .map_or('?', |index| COLOUR_LETTERS[index])
}

/// One line per row, one letter per unit cell.
fn render_grid(grid: &Grid) -> Vec<String> {
    (0..grid.side())
        .map(|row| {
            grid.columns()
                .iter()
                .map(|column| colour_letter(column[row]))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use blocky_engine::{Block, Quadrant};

    use super::*;

    #[test]
    fn test_render_grid_rows() {
        let mut board = Block::root(100, 2, Colour::REAL_RED);
        board
            .subdivide([
                Colour::PACIFIC_POINT,
                Colour::REAL_RED,
                Colour::OLD_OLIVE,
                Colour::DAFFODIL_DELIGHT,
            ])
            .unwrap();
        board
            .child_mut(Quadrant::UpperRight)
            .unwrap()
            .subdivide([
                Colour::REAL_RED,
                Colour::PACIFIC_POINT,
                Colour::PACIFIC_POINT,
                Colour::PACIFIC_POINT,
            ])
            .unwrap();
        assert_eq!(
            render_grid(&board.flatten()),
            ["RRPR", "RRPP", "OODD", "OODD"]
        );
    }

    #[test]
    fn test_unknown_colour_letter() {
        assert_eq!(colour_letter(Colour::new(0, 0, 0)), '?');
        assert_eq!(colour_letter(Colour::DAFFODIL_DELIGHT), 'D');
    }
}
