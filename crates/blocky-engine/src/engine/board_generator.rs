use rand::Rng;

use crate::core::{Block, Colour, Quadrant};

/// Builds a random board of the given depth and pixel size.
///
/// The root starts as a single random palette colour and is split. Every new child is
/// split again with probability `exp(-0.25 * level)`, `level` being the level of the
/// block that was split, as long as it is above maximum depth; otherwise it stays a leaf
/// with a random palette colour. A `max_depth` of 0 yields a single unit cell.
#[must_use]
pub fn generate_board<R>(max_depth: u32, size: u32, rng: &mut R) -> Block
where
    R: Rng + ?Sized,
{
    let mut board = Block::root(size, max_depth, rng.random::<Colour>());
    split_randomly(&mut board, rng);
    tracing::debug!(
        max_depth,
        size,
        leaves = board.leaf_count(),
        "generated board"
    );
    board
}

fn split_randomly<R>(block: &mut Block, rng: &mut R)
where
    R: Rng + ?Sized,
{
    if block.smash(rng).is_err() {
        return;
    }
    let probability = (-0.25 * f64::from(block.level())).exp();
    for quadrant in Quadrant::ALL {
        let Some(child) = block.child_mut(quadrant) else {
            continue;
        };
        if !child.is_unit() && rng.random_bool(probability) {
            split_randomly(child, rng);
        }
    }
}
