//! Perimeter scoring: how much of the board's border has the target colour.

use blocky_engine::{Colour, Grid};

/// Counts border cells of `colour`.
///
/// Each of the four borders is counted separately, so a corner cell counts once for
/// each border it lies on. The maximum is `4 * side`.
#[must_use]
pub fn border_count(grid: &Grid, colour: Colour) -> usize {
    let side = grid.side();
    if side == 0 {
        return 0;
    }
    let last = side - 1;
    (0..side)
        .flat_map(|i| [(0, i), (last, i), (i, 0), (i, last)])
        .filter(|&cell| grid[cell] == colour)
        .count()
}

#[cfg(test)]
mod tests {
    use blocky_engine::{Block, Quadrant};

    use super::*;

    const C1: Colour = Colour::PALETTE[1];
    const C2: Colour = Colour::PALETTE[2];

    #[test]
    fn test_single_cell_counts_four_times() {
        let board = Block::root(10, 0, C1);
        assert_eq!(border_count(&board.flatten(), C1), 4);
    }

    #[test]
    fn test_corners_count_twice() {
        let mut board = Block::root(100, 2, C2);
        board.subdivide([C2, C2, C2, C2]).unwrap();
        board
            .child_mut(Quadrant::UpperLeft)
            .unwrap()
            .subdivide([C2, C1, C2, C2])
            .unwrap();
        // Only the top-left corner cell is C1.
        assert_eq!(border_count(&board.flatten(), C1), 2);
        assert_eq!(border_count(&board.flatten(), C2), 14);
    }
}
