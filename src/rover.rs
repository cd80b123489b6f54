use serde::{Deserialize, Serialize};

use crate::compass::{rotate, Heading, Rotation};
use crate::motion::{advance, Position};

pub const MOVE_CODE: char = 'M';

/// A single decoded rover instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Rotate(Rotation),
    Move,
}

impl Command {
    /// Decodes one command character. `None` means the character is not a
    /// command; the parser turns that into `MissionError::InvalidCommand`.
    pub fn from_code(code: char) -> Option<Self> {
        if code == MOVE_CODE {
            return Some(Command::Move);
        }
        Rotation::from_code(code).map(Command::Rotate)
    }

    pub fn code(self) -> char {
        match self {
            Command::Rotate(rotation) => rotation.code(),
            Command::Move => MOVE_CODE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rover {
    position: Position,
    heading: Heading,
}

impl Rover {
    pub fn new(position: Position, heading: Heading) -> Self {
        Self { position, heading }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn execute(&mut self, command: Command) {
        match command {
            Command::Rotate(rotation) => self.heading = rotate(self.heading, rotation),
            Command::Move => self.position = advance(self.position, self.heading),
        }
    }

    /// `"x y H"`, the format used in the positions report.
    pub fn state(&self) -> String {
        format!("{} {}", self.position, self.heading)
    }
}
