// src/geom.rs

//! Integer offset primitives.

use std::fmt;

/// A 2D offset with integer coordinates, relative to a sprite origin.
///
/// No bounds are enforced. This struct is `Copy`, so it can be passed
/// around cheaply by value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position.
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Position::new(x, y)
    }
}

impl From<Position> for (i32, i32) {
    fn from(p: Position) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Splits a sequence of positions into its X and Y projections, keeping order.
pub fn split_axes(positions: &[Position]) -> (Vec<i32>, Vec<i32>) {
    positions.iter().map(|p| (p.x, p.y)).unzip()
}
