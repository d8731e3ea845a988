use arrayvec::ArrayVec;
use rand::Rng;
use serde::Serialize;

use crate::BlockOpError;

use super::{
    colour::Colour,
    geometry::{BlockPath, Position, Quadrant},
};

/// What a block is made of: a single colour, or four sub-blocks.
///
/// Keeping the colour inside the leaf variant makes "a block has a colour if and only if
/// it has no children" hold by construction.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum Content {
    /// Uniformly coloured block.
    Leaf(Colour),
    /// Block split into four children, ordered as [`Quadrant::ALL`].
    Split(Box<[Block; Quadrant::LEN]>),
}

/// Direction of a [`Block::swap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SwapDirection {
    /// Exchange the left and right halves.
    Horizontal = 0,
    /// Exchange the top and bottom halves.
    Vertical = 1,
}

impl SwapDirection {
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for SwapDirection {
    type Error = BlockOpError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Horizontal),
            1 => Ok(Self::Vertical),
            _ => Err(BlockOpError::InvalidDirection(value)),
        }
    }
}

/// Direction of a [`Block::rotate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RotateDirection {
    Clockwise = 1,
    CounterClockwise = 3,
}

impl RotateDirection {
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for RotateDirection {
    type Error = BlockOpError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Clockwise),
            3 => Ok(Self::CounterClockwise),
            _ => Err(BlockOpError::InvalidDirection(value)),
        }
    }
}

/// A uniformly coloured square of the board, as drawn by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Square {
    pub colour: Colour,
    pub position: Position,
    pub size: u32,
}

/// A node of the board quadtree.
///
/// A block covers the square `[x, x + size) × [y, y + size)` starting at its
/// [`position`](Self::position). `level` is the distance from the root and `max_depth` is
/// shared by the whole tree; a block at `level == max_depth` is a unit cell and can
/// never be split.
///
/// Mutators work in place and return `Err` without touching the tree when their
/// preconditions do not hold. Children positions are always derived from the parent,
/// so moving a subtree regenerates the coordinates of every block below it.
///
/// `Clone` produces a fully independent deep copy and `PartialEq` compares position,
/// size, level, depth, colour and children recursively.
///
/// # Example
///
/// ```
/// use blocky_engine::{Block, Colour, SwapDirection};
///
/// let mut board = Block::root(500, 1, Colour::REAL_RED);
/// board
///     .subdivide([
///         Colour::REAL_RED,
///         Colour::OLD_OLIVE,
///         Colour::OLD_OLIVE,
///         Colour::OLD_OLIVE,
///     ])
///     .unwrap();
///
/// board.swap(SwapDirection::Horizontal).unwrap();
/// assert_eq!(board.children()[1].colour(), Some(Colour::REAL_RED));
///
/// board.combine().unwrap();
/// assert_eq!(board.colour(), Some(Colour::OLD_OLIVE));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    position: Position,
    size: u32,
    level: u32,
    max_depth: u32,
    content: Content,
}

impl Block {
    /// Creates a leaf block.
    ///
    /// # Panics
    ///
    /// Panics if `level > max_depth`.
    #[must_use]
    pub fn new_leaf(
        position: Position,
        size: u32,
        colour: Colour,
        level: u32,
        max_depth: u32,
    ) -> Self {
        assert!(
            level <= max_depth,
            "block level {level} exceeds max depth {max_depth}"
        );
        Self {
            position,
            size,
            level,
            max_depth,
            content: Content::Leaf(colour),
        }
    }

    /// Creates a single-colour root block at the origin.
    #[must_use]
    pub fn root(size: u32, max_depth: u32, colour: Colour) -> Self {
        Self::new_leaf(Position::ORIGIN, size, colour, 0, max_depth)
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Returns the colour of a leaf, or `None` for a block with children.
    #[must_use]
    pub fn colour(&self) -> Option<Colour> {
        match self.content {
            Content::Leaf(colour) => Some(colour),
            Content::Split(_) => None,
        }
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.content.is_leaf()
    }

    /// Returns `true` if this block is at maximum depth.
    #[must_use]
    pub fn is_unit(&self) -> bool {
        self.level == self.max_depth
    }

    /// Returns the children in [`Quadrant::ALL`] order, or an empty slice for a leaf.
    #[must_use]
    pub fn children(&self) -> &[Block] {
        match &self.content {
            Content::Leaf(_) => &[],
            Content::Split(children) => &children[..],
        }
    }

    #[must_use]
    pub fn child(&self, quadrant: Quadrant) -> Option<&Block> {
        self.children().get(quadrant.index())
    }

    pub fn child_mut(&mut self, quadrant: Quadrant) -> Option<&mut Block> {
        match &mut self.content {
            Content::Leaf(_) => None,
            Content::Split(children) => Some(&mut children[quadrant.index()]),
        }
    }

    /// Edge length of a child block: half of this block's size, rounded up.
    #[must_use]
    pub fn child_size(&self) -> u32 {
        self.size.div_ceil(2)
    }

    /// Top-left positions of the four children, in [`Quadrant::ALL`] order.
    #[must_use]
    pub fn children_positions(&self) -> [Position; Quadrant::LEN] {
        let half = self.child_size();
        Quadrant::ALL.map(|quadrant| {
            let (dx, dy) = quadrant.offset(half);
            self.position.offset(dx, dy)
        })
    }

    /// Number of unit cells along one edge of this block: `2^(max_depth - level)`.
    #[must_use]
    pub fn unit_cells_per_side(&self) -> usize {
        1 << (self.max_depth - self.level)
    }

    /// Number of leaves in this subtree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match &self.content {
            Content::Leaf(_) => 1,
            Content::Split(children) => children.iter().map(Block::leaf_count).sum(),
        }
    }

    /// Replaces this block's content with four leaves of the given colours.
    ///
    /// Existing children are discarded. `colours` is in [`Quadrant::ALL`] order.
    pub fn subdivide(&mut self, colours: [Colour; Quadrant::LEN]) -> Result<(), BlockOpError> {
        if self.is_unit() {
            return Err(BlockOpError::MaxDepth);
        }
        let size = self.child_size();
        let level = self.level + 1;
        let positions = self.children_positions();
        let children = std::array::from_fn(|i| {
            Block::new_leaf(positions[i], size, colours[i], level, self.max_depth)
        });
        self.content = Content::Split(Box::new(children));
        Ok(())
    }

    /// Splits this block into four leaves of independently sampled palette colours.
    ///
    /// Any existing children are discarded. Fails only at maximum depth.
    pub fn smash<R>(&mut self, rng: &mut R) -> Result<(), BlockOpError>
    where
        R: Rng + ?Sized,
    {
        if self.is_unit() {
            return Err(BlockOpError::MaxDepth);
        }
        let colours = std::array::from_fn(|_| rng.random());
        self.subdivide(colours)
    }

    /// Exchanges the contents of the children.
    ///
    /// Only the children's contents move; descendants keep their internal arrangement
    /// and get their coordinates regenerated for their new quadrant.
    pub fn swap(&mut self, direction: SwapDirection) -> Result<(), BlockOpError> {
        let children = self.children_array_mut()?;
        match direction {
            SwapDirection::Horizontal => {
                children.swap(0, 1);
                children.swap(2, 3);
            }
            SwapDirection::Vertical => {
                children.swap(0, 3);
                children.swap(1, 2);
            }
        }
        self.relocate_children();
        Ok(())
    }

    /// Rotates this block, and every block below it, by a quarter turn.
    pub fn rotate(&mut self, direction: RotateDirection) -> Result<(), BlockOpError> {
        self.children_array_mut()?;
        self.rotate_content(direction);
        self.relocate_children();
        Ok(())
    }

    /// Sets the colour of a unit cell.
    ///
    /// Only leaves at maximum depth can be painted, and only to a different colour.
    pub fn paint(&mut self, colour: Colour) -> Result<(), BlockOpError> {
        let Content::Leaf(current) = &mut self.content else {
            return Err(BlockOpError::NotLeaf);
        };
        if self.level != self.max_depth {
            return Err(BlockOpError::NotUnitCell);
        }
        if *current == colour {
            return Err(BlockOpError::SameColour);
        }
        *current = colour;
        Ok(())
    }

    /// Merges the four unit-cell children into one leaf of their majority colour.
    ///
    /// Valid only one level above maximum depth, and only when a single colour is held by
    /// more children than any other colour (a 2-2 split is rejected).
    pub fn combine(&mut self) -> Result<(), BlockOpError> {
        if self.level + 1 != self.max_depth {
            return Err(BlockOpError::NotCombinable);
        }
        let Content::Split(children) = &self.content else {
            return Err(BlockOpError::NoChildren);
        };
        let colour =
            majority_colour(children.iter().filter_map(Block::colour)).ok_or(BlockOpError::NoMajority)?;
        self.content = Content::Leaf(colour);
        Ok(())
    }

    /// Returns an independent deep copy of this subtree.
    #[must_use]
    pub fn create_copy(&self) -> Self {
        self.clone()
    }

    /// Returns `true` if `point` lies inside this block.
    ///
    /// Top and left edges are inside, bottom and right edges are not.
    #[must_use]
    pub fn contains(&self, point: Position) -> bool {
        let covers = |start: u32, p: u32| {
            p >= start && u64::from(p) < u64::from(start) + u64::from(self.size)
        };
        covers(self.position.x, point.x) && covers(self.position.y, point.y)
    }

    /// Finds the block at `level` that contains `point`, returning its path from `self`.
    ///
    /// If the tree stops above `level` at that point, the deepest block containing it
    /// is returned. Returns `None` if `point` is outside `self`.
    #[must_use]
    pub fn locate_path(&self, point: Position, level: u32) -> Option<BlockPath> {
        if !self.contains(point) {
            return None;
        }
        let mut path = BlockPath::root();
        let mut block = self;
        while block.level < level {
            let Some((quadrant, child)) = Quadrant::ALL
                .into_iter()
                .zip(block.children())
                .find(|(_, child)| child.contains(point))
            else {
                break;
            };
            path.push(quadrant);
            block = child;
        }
        Some(path)
    }

    /// Like [`Self::locate_path`], but returns the block itself.
    #[must_use]
    pub fn locate(&self, point: Position, level: u32) -> Option<&Block> {
        let path = self.locate_path(point, level)?;
        self.get(&path)
    }

    /// Follows `path` from this block.
    #[must_use]
    pub fn get(&self, path: &BlockPath) -> Option<&Block> {
        path.quadrants()
            .iter()
            .try_fold(self, |block, &quadrant| block.child(quadrant))
    }

    /// Follows `path` from this block, returning a mutable reference.
    pub fn get_mut(&mut self, path: &BlockPath) -> Option<&mut Block> {
        path.quadrants()
            .iter()
            .try_fold(self, |block, &quadrant| block.child_mut(quadrant))
    }

    /// Lists every leaf of this subtree as a coloured square.
    #[must_use]
    pub fn squares(&self) -> Vec<Square> {
        let mut squares = Vec::with_capacity(self.leaf_count());
        self.collect_squares(&mut squares);
        squares
    }

    fn collect_squares(&self, squares: &mut Vec<Square>) {
        match &self.content {
            Content::Leaf(colour) => squares.push(Square {
                colour: *colour,
                position: self.position,
                size: self.size,
            }),
            Content::Split(children) => {
                for child in children.iter() {
                    child.collect_squares(squares);
                }
            }
        }
    }

    fn children_array_mut(&mut self) -> Result<&mut [Block; Quadrant::LEN], BlockOpError> {
        match &mut self.content {
            Content::Leaf(_) => Err(BlockOpError::NoChildren),
            Content::Split(children) => Ok(children),
        }
    }

    fn rotate_content(&mut self, direction: RotateDirection) {
        let Content::Split(children) = &mut self.content else {
            return;
        };
        // Child order runs counter-clockwise, so a clockwise turn shifts contents left.
        match direction {
            RotateDirection::Clockwise => children.rotate_left(1),
            RotateDirection::CounterClockwise => children.rotate_right(1),
        }
        for child in children.iter_mut() {
            child.rotate_content(direction);
        }
    }

    fn relocate(&mut self, position: Position) {
        self.position = position;
        self.relocate_children();
    }

    fn relocate_children(&mut self) {
        let positions = self.children_positions();
        if let Content::Split(children) = &mut self.content {
            for (child, position) in children.iter_mut().zip(positions) {
                child.relocate(position);
            }
        }
    }
}

/// Returns the colour held by strictly more entries than any other colour.
fn majority_colour<I>(colours: I) -> Option<Colour>
where
    I: IntoIterator<Item = Colour>,
{
    let mut counts = ArrayVec::<(Colour, usize), { Quadrant::LEN }>::new();
    for colour in colours {
        if let Some((_, count)) = counts.iter_mut().find(|(c, _)| *c == colour) {
            *count += 1;
        } else {
            counts.try_push((colour, 1)).ok()?;
        }
    }
    let max = counts.iter().map(|(_, count)| *count).max()?;
    let mut winners = counts.iter().filter(|(_, count)| *count == max);
    let (colour, _) = winners.next()?;
    winners.next().is_none().then_some(*colour)
}
