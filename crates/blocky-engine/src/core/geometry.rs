use std::fmt;

use serde::{Deserialize, Serialize};

/// Pixel coordinate of a point on the board, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    pub const ORIGIN: Self = Self::new(0, 0);

    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn offset(self, dx: u32, dy: u32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(u32, u32)> for Position {
    fn from((x, y): (u32, u32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four quadrants of a block.
///
/// The discriminant is the index of the child occupying that quadrant, so children
/// are always stored as `[UpperRight, UpperLeft, LowerLeft, LowerRight]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Quadrant {
    UpperRight = 0,
    UpperLeft = 1,
    LowerLeft = 2,
    LowerRight = 3,
}

impl Quadrant {
    /// Number of quadrants (4).
    pub const LEN: usize = 4;

    /// All quadrants in child order.
    pub const ALL: [Self; Self::LEN] = [
        Self::UpperRight,
        Self::UpperLeft,
        Self::LowerLeft,
        Self::LowerRight,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::UpperRight),
            1 => Some(Self::UpperLeft),
            2 => Some(Self::LowerLeft),
            3 => Some(Self::LowerRight),
            _ => None,
        }
    }

    /// Offset of this quadrant's top-left corner from the parent's top-left corner.
    ///
    /// `half` is the edge length of one quadrant, in whatever unit the caller works in
    /// (pixels for positions, unit cells for flattening).
    #[must_use]
    pub const fn offset(self, half: u32) -> (u32, u32) {
        match self {
            Self::UpperRight => (half, 0),
            Self::UpperLeft => (0, 0),
            Self::LowerLeft => (0, half),
            Self::LowerRight => (half, half),
        }
    }
}

/// Route from a root block to one of its descendants, as a sequence of quadrants.
///
/// The empty path designates the root itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockPath(Vec<Quadrant>);

impl BlockPath {
    #[must_use]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// Depth of the designated block below the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn quadrants(&self) -> &[Quadrant] {
        &self.0
    }

    pub fn push(&mut self, quadrant: Quadrant) {
        self.0.push(quadrant);
    }

    #[must_use]
    pub fn child(&self, quadrant: Quadrant) -> Self {
        let mut path = self.clone();
        path.push(quadrant);
        path
    }
}

impl FromIterator<Quadrant> for BlockPath {
    fn from_iter<I: IntoIterator<Item = Quadrant>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for BlockPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("root")?;
        for quadrant in &self.0 {
            write!(f, "/{}", quadrant.index())?;
        }
        Ok(())
    }
}
