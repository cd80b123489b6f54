//! Mission control: turns the textual mission description into a plan and
//! drives every rover across the plateau.
//!
//! Input layout, one item per line:
//!
//! ```text
//! 5 5          plateau upper-right corner (inclusive)
//! 1 2 N        rover 1 landing position and heading
//! LMLMLMLMM    rover 1 commands
//! 3 3 E        rover 2 landing ...
//! MMRMMRMRRM
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::compass::Heading;
use crate::error::{MissionError, Result};
use crate::motion::Position;
use crate::plateau::Plateau;
use crate::rover::{Command, Rover};

/// Landing parameters and command sequence for one rover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverPlan {
    pub position: Position,
    pub heading: Heading,
    pub commands: Vec<Command>,
    /// 1-based input line of the landing line.
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionPlan {
    pub max_x: i32,
    pub max_y: i32,
    pub rovers: Vec<RoverPlan>,
}

impl MissionPlan {
    /// Grid dimensions as `(columns, rows)`. The stated corner is inclusive,
    /// so a corner of `i32::MAX` has no representable size.
    pub fn dimensions(&self) -> Result<(i32, i32)> {
        grid_size(self.max_x, self.max_y)
            .ok_or_else(|| MissionError::malformed(1, "plateau corner is too large"))
    }
}

pub fn parse(input: &str) -> Result<MissionPlan> {
    // `lines` already drops the empty remainder after a final newline.
    let lines: Vec<(usize, &str)> = input
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .collect();

    let Some((&(bounds_line, bounds_text), plan_lines)) = lines.split_first() else {
        return Err(MissionError::malformed(1, "missing plateau bounds line"));
    };

    let (max_x, max_y) = parse_bounds(bounds_line, bounds_text)?;

    if plan_lines.len() % 2 != 0 {
        let (line, _) = plan_lines[plan_lines.len() - 1];
        return Err(MissionError::malformed(
            line,
            "rover landing line has no matching command line",
        ));
    }

    let rovers = plan_lines
        .chunks_exact(2)
        .map(|pair| -> Result<RoverPlan> {
            let (landing_line, landing_text) = pair[0];
            let (command_line, command_text) = pair[1];
            let (position, heading) = parse_landing(landing_line, landing_text)?;
            let commands = parse_commands(command_line, command_text)?;
            Ok(RoverPlan {
                position,
                heading,
                commands,
                line: landing_line,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    info!(max_x, max_y, rovers = rovers.len(), "mission plan parsed");

    Ok(MissionPlan {
        max_x,
        max_y,
        rovers,
    })
}

/// Lands and drives each rover in order; every rover finishes its commands
/// before the next one lands.
pub fn run(plan: &MissionPlan) -> Result<Plateau> {
    let (columns, rows) = plan.dimensions()?;
    let mut plateau = Plateau::new(columns, rows);
    let bounds = plateau.bounds();

    for rover_plan in &plan.rovers {
        let id = plateau
            .land(Rover::new(rover_plan.position, rover_plan.heading))
            .map_err(|e| e.for_rover_at(rover_plan.line))?;
        let rover = plateau.rover_mut(id)?;

        for command in &rover_plan.commands {
            let mut next = *rover;
            next.execute(*command);
            bounds
                .check(next.position())
                .map_err(|e| e.for_rover_at(rover_plan.line))?;
            *rover = next;
            debug!(
                rover = id,
                command = %command.code(),
                state = %rover.state(),
                "command executed"
            );
        }

        info!(rover = id, state = %rover.state(), "rover finished");
    }

    Ok(plateau)
}

/// Parses `input` and runs the resulting plan.
pub fn execute(input: &str) -> Result<Plateau> {
    let plan = parse(input)?;
    run(&plan)
}

fn parse_bounds(line: usize, text: &str) -> Result<(i32, i32)> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let [x, y] = tokens.as_slice() else {
        return Err(MissionError::malformed(
            line,
            format!("expected \"<maxX> <maxY>\", got {:?}", text),
        ));
    };
    let max_x = parse_int(line, x)?;
    let max_y = parse_int(line, y)?;
    if max_x < 0 || max_y < 0 {
        return Err(MissionError::malformed(
            line,
            format!("plateau corner must not be negative, got {:?}", text),
        ));
    }
    if grid_size(max_x, max_y).is_none() {
        return Err(MissionError::malformed(
            line,
            format!("plateau corner is too large, got {:?}", text),
        ));
    }
    Ok((max_x, max_y))
}

fn grid_size(max_x: i32, max_y: i32) -> Option<(i32, i32)> {
    Some((max_x.checked_add(1)?, max_y.checked_add(1)?))
}

fn parse_landing(line: usize, text: &str) -> Result<(Position, Heading)> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let [x, y, code] = tokens.as_slice() else {
        return Err(MissionError::malformed(
            line,
            format!("expected \"<x> <y> <heading>\", got {:?}", text),
        ));
    };
    let position = Position::new(parse_int(line, x)?, parse_int(line, y)?);
    let mut chars = code.chars();
    let heading = match (chars.next(), chars.next()) {
        (Some(c), None) => Heading::from_code(c),
        _ => None,
    }
    .ok_or_else(|| MissionError::malformed(line, format!("unknown heading {:?}", code)))?;
    Ok((position, heading))
}

fn parse_commands(line: usize, text: &str) -> Result<Vec<Command>> {
    text.chars()
        .enumerate()
        .map(|(idx, code)| {
            Command::from_code(code).ok_or(MissionError::InvalidCommand {
                line,
                column: idx + 1,
                code,
            })
        })
        .collect()
}

fn parse_int(line: usize, token: &str) -> Result<i32> {
    token
        .parse::<i32>()
        .map_err(|_| MissionError::malformed(line, format!("{:?} is not an integer", token)))
}
