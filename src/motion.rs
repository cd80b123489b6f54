use core::fmt;

use serde::{Deserialize, Serialize};

use crate::compass::Heading;

/// A grid cell. Signed so that a step off the low edge stays representable
/// and can be rejected by the plateau instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// One step from `position` towards `heading`. No bounds checking happens
/// here; the plateau owns that.
pub fn advance(position: Position, heading: Heading) -> Position {
    let Position { x, y } = position;
    match heading {
        Heading::North => Position::new(x, y + 1),
        Heading::East => Position::new(x + 1, y),
        Heading::South => Position::new(x, y - 1),
        Heading::West => Position::new(x - 1, y),
    }
}
