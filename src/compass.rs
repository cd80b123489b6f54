//! Headings and the rotations between them.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Cyclic order used for rotation arithmetic.
const CARDINALS: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rotation {
    Left,
    Right,
}

impl Heading {
    pub const ALL: [Heading; 4] = CARDINALS;

    /// Decodes a single-letter heading code (`N`, `E`, `S`, `W`).
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'N' => Some(Heading::North),
            'E' => Some(Heading::East),
            'S' => Some(Heading::South),
            'W' => Some(Heading::West),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
        }
    }

    /// Glyph drawn in plateau snapshots.
    pub fn glyph(self) -> char {
        match self {
            Heading::North => '^',
            Heading::East => '>',
            Heading::South => 'v',
            Heading::West => '<',
        }
    }

    #[must_use]
    pub fn rotate(self, rotation: Rotation) -> Self {
        rotate(self, rotation)
    }

    fn index(self) -> usize {
        match self {
            Heading::North => 0,
            Heading::East => 1,
            Heading::South => 2,
            Heading::West => 3,
        }
    }
}

impl Rotation {
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'L' => Some(Rotation::Left),
            'R' => Some(Rotation::Right),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            Rotation::Left => 'L',
            Rotation::Right => 'R',
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Turns `heading` one quarter step. Right walks forward through
/// N, E, S, W and Left walks backward, both wrapping.
pub fn rotate(heading: Heading, rotation: Rotation) -> Heading {
    let step = match rotation {
        Rotation::Right => 1,
        Rotation::Left => CARDINALS.len() - 1,
    };
    CARDINALS[(heading.index() + step) % CARDINALS.len()]
}
