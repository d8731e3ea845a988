use blocky_engine::{Action, Block, Colour, Move, Position};
use rand::Rng;

/// Upper bound of sampled depths, keeping the grid-aligned coordinates in `u32`.
const MAX_SAMPLED_LEVEL: u32 = 31;

/// A legal move found by sampling, with the block it produces.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub(crate) mv: Move,
    /// Disposable copy of the target block after the action.
    pub(crate) result: Block,
}

/// Samples a depth, a grid-aligned coordinate on `board` and a mutating action, then
/// tries the action on a copy of the block found there.
///
/// Returns `None` when the action is rejected; `board` is never modified.
pub(crate) fn sample<R>(board: &Block, paint_colour: Colour, rng: &mut R) -> Option<Candidate>
where
    R: Rng + ?Sized,
{
    let max_level = board.max_depth().min(board.level() + MAX_SAMPLED_LEVEL);
    let level = rng.random_range(board.level()..=max_level);
    let depth = level - board.level();
    let cells = 1_u32 << depth;
    let dx = cell_offset(board.size(), depth, rng.random_range(0..cells));
    let dy = cell_offset(board.size(), depth, rng.random_range(0..cells));
    let origin = board.position();
    let point = Position::new(
        u32::try_from(u64::from(origin.x) + dx).ok()?,
        u32::try_from(u64::from(origin.y) + dy).ok()?,
    );
    let target = board.locate_path(point, level)?;
    let action = Action::random_mutation(rng);

    let mut result = board.get(&target)?.create_copy();
    if let Err(err) = action.apply(&mut result, paint_colour, rng) {
        tracing::trace!(%action, %target, %err, "candidate rejected");
        return None;
    }
    Some(Candidate {
        mv: Move::new(action, target),
        result,
    })
}

/// Offset of cell `index` along one axis of a block of `size` split `depth` times.
///
/// Child sizes round up at every level, so this is the sum of the halved sizes selected
/// by the bits of `index`, the same offsets the tree gives its children.
fn cell_offset(size: u32, depth: u32, index: u32) -> u64 {
    let mut half = size;
    let mut offset = 0;
    for bit in (0..depth).rev() {
        half = half.div_ceil(2);
        if (index >> bit) & 1 == 1 {
            offset += u64::from(half);
        }
    }
    offset
}
