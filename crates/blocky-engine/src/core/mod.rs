pub use self::{block::*, colour::*, geometry::*, grid::*};

pub(crate) mod block;
pub(crate) mod colour;
pub(crate) mod geometry;
pub(crate) mod grid;
