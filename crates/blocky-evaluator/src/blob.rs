//! Blob scoring: size of the largest 4-connected region of the target colour.

use arrayvec::ArrayVec;
use blocky_engine::{Colour, Grid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Unvisited,
    Matching,
    NotMatching,
}

/// Returns the number of cells in the largest blob of `colour`.
///
/// Cells are connected through their up, down, left and right neighbours. Each cell is
/// visited at most once, so the cost is linear in the number of cells.
#[must_use]
pub fn largest_blob(grid: &Grid, colour: Colour) -> usize {
    let side = grid.side();
    let mut visited = vec![vec![Visit::Unvisited; side]; side];
    let mut largest = 0;
    for column in 0..side {
        for row in 0..side {
            let size = undiscovered_blob_size(grid, colour, (column, row), &mut visited);
            largest = largest.max(size);
        }
    }
    largest
}

/// Size of the blob containing `start`, counting only cells not visited before.
///
/// Marks every cell it reaches as matching or not matching.
fn undiscovered_blob_size(
    grid: &Grid,
    colour: Colour,
    start: (usize, usize),
    visited: &mut [Vec<Visit>],
) -> usize {
    let side = grid.side();
    let mut size = 0;
    let mut stack = vec![start];
    while let Some((column, row)) = stack.pop() {
        let visit = &mut visited[column][row];
        if *visit != Visit::Unvisited {
            continue;
        }
        if grid[(column, row)] != colour {
            *visit = Visit::NotMatching;
            continue;
        }
        *visit = Visit::Matching;
        size += 1;
        stack.extend(neighbours(column, row, side));
    }
    size
}

fn neighbours(column: usize, row: usize, side: usize) -> ArrayVec<(usize, usize), 4> {
    let mut cells = ArrayVec::new();
    if row > 0 {
        cells.push((column, row - 1));
    }
    if row + 1 < side {
        cells.push((column, row + 1));
    }
    if column > 0 {
        cells.push((column - 1, row));
    }
    if column + 1 < side {
        cells.push((column + 1, row));
    }
    cells
}
