use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{MissionError, Result};
use crate::motion::Position;
use crate::rover::Rover;

pub const EMPTY_CELL_GLYPH: char = '•';

/// Index of a rover in landing order.
pub type RoverId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub columns: i32,
    pub rows: i32,
}

impl Bounds {
    pub fn contains(self, position: Position) -> bool {
        (0..self.columns).contains(&position.x) && (0..self.rows).contains(&position.y)
    }

    /// Fails with `OutOfBounds` unless `position` lies on the grid.
    pub fn check(self, position: Position) -> Result<()> {
        if self.contains(position) {
            return Ok(());
        }
        warn!(
            x = position.x,
            y = position.y,
            columns = self.columns,
            rows = self.rows,
            "position outside plateau"
        );
        Err(MissionError::OutOfBounds {
            x: position.x,
            y: position.y,
            columns: self.columns,
            rows: self.rows,
            line: None,
        })
    }
}

/// Fixed-size grid holding the landed rovers. Rover positions are read live
/// whenever the plateau renders, so movement never has to be reported back.
#[derive(Debug, Clone)]
pub struct Plateau {
    bounds: Bounds,
    rovers: Vec<Rover>,
}

impl Plateau {
    pub fn new(columns: i32, rows: i32) -> Self {
        Self {
            bounds: Bounds { columns, rows },
            rovers: Vec::new(),
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn land(&mut self, rover: Rover) -> Result<RoverId> {
        self.bounds.check(rover.position())?;
        let id = self.rovers.len();
        self.rovers.push(rover);
        info!(
            rover = id,
            x = rover.position().x,
            y = rover.position().y,
            heading = %rover.heading(),
            "rover landed"
        );
        Ok(id)
    }

    pub fn rovers(&self) -> &[Rover] {
        &self.rovers
    }

    pub fn rover(&self, id: RoverId) -> Result<&Rover> {
        self.rovers.get(id).ok_or(MissionError::RoverNotLanded(id))
    }

    pub fn rover_mut(&mut self, id: RoverId) -> Result<&mut Rover> {
        self.rovers.get_mut(id).ok_or(MissionError::RoverNotLanded(id))
    }

    pub fn locate(&self, id: RoverId) -> Result<Position> {
        self.rover(id).map(Rover::position)
    }

    /// The most recently landed rover standing on `position`, if any.
    pub fn occupant(&self, position: Position) -> Option<&Rover> {
        self.rovers
            .iter()
            .rev()
            .find(|rover| rover.position() == position)
    }

    /// Renders the grid with the highest row first. Cells are separated by a
    /// space, rows by a newline, with no trailing newline.
    pub fn snapshot(&self) -> String {
        let columns = self.bounds.columns.max(0) as usize;
        let rows = self.bounds.rows.max(0) as usize;
        let mut grid = vec![vec![EMPTY_CELL_GLYPH; columns]; rows];

        // Later landings overwrite earlier ones on shared cells.
        for rover in &self.rovers {
            let Position { x, y } = rover.position();
            if self.bounds.contains(rover.position()) {
                grid[y as usize][x as usize] = rover.heading().glyph();
            }
        }

        grid.iter()
            .rev()
            .map(|row| {
                row.iter()
                    .map(char::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `"x y H"` for every rover in landing order, joined by spaces.
    pub fn positions(&self) -> String {
        self.rovers
            .iter()
            .map(Rover::state)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
