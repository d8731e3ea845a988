use std::ops::Index;

use super::{
    block::{Block, Content},
    colour::Colour,
    geometry::Quadrant,
};

/// Unit-cell colours of a block, at maximum resolution.
///
/// Cells are stored column-major: `grid[(column, row)]`, with `(0, 0)` the top-left
/// cell. The grid is square with `2^(max_depth - level)` cells per side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    columns: Vec<Vec<Colour>>,
}

impl Grid {
    /// Number of cells along one edge.
    #[must_use]
    pub fn side(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn columns(&self) -> &[Vec<Colour>] {
        &self.columns
    }

    #[must_use]
    pub fn get(&self, column: usize, row: usize) -> Option<Colour> {
        self.columns.get(column)?.get(row).copied()
    }

    /// Iterates over all cells as `(column, row, colour)`, column by column.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Colour)> + '_ {
        self.columns.iter().enumerate().flat_map(|(column, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(row, colour)| (column, row, *colour))
        })
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = Colour;

    fn index(&self, (column, row): (usize, usize)) -> &Self::Output {
        &self.columns[column][row]
    }
}

impl Block {
    /// Converts this subtree into its grid of unit-cell colours.
    ///
    /// Left columns come from the upper-left and lower-left children (stacked top to
    /// bottom), right columns from the upper-right and lower-right children.
    ///
    /// ```
    /// use blocky_engine::{Block, Colour};
    ///
    /// let board = Block::root(100, 3, Colour::OLD_OLIVE);
    /// let grid = board.flatten();
    /// assert_eq!(grid.side(), 8);
    /// assert!(grid.cells().all(|(_, _, c)| c == Colour::OLD_OLIVE));
    /// ```
    #[must_use]
    pub fn flatten(&self) -> Grid {
        Grid {
            columns: flatten_columns(self),
        }
    }
}

fn flatten_columns(block: &Block) -> Vec<Vec<Colour>> {
    match block.content() {
        Content::Leaf(colour) => {
            let side = block.unit_cells_per_side();
            vec![vec![*colour; side]; side]
        }
        Content::Split(children) => {
            let [upper_right, upper_left, lower_left, lower_right] =
                Quadrant::ALL.map(|quadrant| flatten_columns(&children[quadrant.index()]));
            let stack = |top: Vec<Vec<Colour>>, bottom: Vec<Vec<Colour>>| {
                top.into_iter().zip(bottom).map(|(mut column, lower)| {
                    column.extend(lower);
                    column
                })
            };
            stack(upper_left, lower_left)
                .chain(stack(upper_right, lower_right))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const C0: Colour = Colour::PALETTE[0];
    const C1: Colour = Colour::PALETTE[1];
    const C2: Colour = Colour::PALETTE[2];
    const C3: Colour = Colour::PALETTE[3];

    #[test]
    fn test_unit_cell_flattens_to_single_cell() {
        let board = Block::root(500, 0, C2);
        let grid = board.flatten();
        assert_eq!(grid.side(), 1);
        assert_eq!(grid[(0, 0)], C2);
    }

    #[test]
    fn test_uniform_leaf_fills_grid() {
        for depth in 0..5 {
            let board = Block::root(640, depth, C1);
            let grid = board.flatten();
            assert_eq!(grid.side(), 1 << depth);
            assert!(grid.columns().iter().all(|c| c.len() == 1 << depth));
            assert!(grid.cells().all(|(_, _, colour)| colour == C1));
        }
    }

    #[test]
    fn test_flatten_depth1_quadrant_order() {
        let mut board = Block::root(500, 1, C0);
        board.subdivide([C0, C1, C2, C3]).unwrap();
        let grid = board.flatten();
        assert_eq!(grid.columns(), [vec![C1, C2], vec![C0, C3]]);
    }

    #[test]
    fn test_flatten_mixed_depths() {
        let mut board = Block::root(750, 2, C0);
        board.subdivide([C0, C2, C0, C3]).unwrap();
        board
            .child_mut(Quadrant::UpperRight)
            .unwrap()
            .subdivide([C0, C1, C1, C3])
            .unwrap();
        board
            .child_mut(Quadrant::LowerLeft)
            .unwrap()
            .subdivide([C1, C1, C0, C3])
            .unwrap();

        let grid = board.flatten();
        assert_eq!(
            grid.columns(),
            [
                vec![C2, C2, C1, C0],
                vec![C2, C2, C1, C3],
                vec![C1, C1, C3, C3],
                vec![C0, C3, C3, C3],
            ]
        );
    }

    #[test]
    fn test_flatten_depth3() {
        let (p, o, r, d) = (
            Colour::PACIFIC_POINT,
            Colour::OLD_OLIVE,
            Colour::REAL_RED,
            Colour::DAFFODIL_DELIGHT,
        );
        let mut board = Block::root(750, 3, r);
        board.subdivide([r, r, p, d]).unwrap();
        let upper_right = board.child_mut(Quadrant::UpperRight).unwrap();
        upper_right.subdivide([r, r, p, d]).unwrap();
        upper_right
            .child_mut(Quadrant::UpperRight)
            .unwrap()
            .subdivide([o, r, p, d])
            .unwrap();

        let grid = board.flatten();
        assert_eq!(
            grid.columns(),
            [
                vec![r, r, r, r, p, p, p, p],
                vec![r, r, r, r, p, p, p, p],
                vec![r, r, r, r, p, p, p, p],
                vec![r, r, r, r, p, p, p, p],
                vec![r, r, p, p, d, d, d, d],
                vec![r, r, p, p, d, d, d, d],
                vec![r, p, d, d, d, d, d, d],
                vec![o, d, d, d, d, d, d, d],
            ]
        );
    }

    #[test]
    fn test_flatten_subtree_uses_own_level() {
        let mut board = Block::root(500, 2, C0);
        board.subdivide([C1, C0, C0, C0]).unwrap();
        let grid = board.child(Quadrant::UpperRight).unwrap().flatten();
        assert_eq!(grid.side(), 2);
        assert_eq!(grid.get(1, 1), Some(C1));
        assert_eq!(grid.get(2, 0), None);
    }
}
