//! Plain value types shared by the simulation: vectors, extents, rectangles and
//! the two moving bodies.

pub use self::{body::*, geometry::*};

mod body;
mod geometry;
