use thiserror::Error;

use crate::plateau::RoverId;

pub type Result<T> = std::result::Result<T, MissionError>;

/// Every way a mission can fail. All of them are terminal for the run.
#[derive(Debug, Error)]
pub enum MissionError {
    #[error("malformed input on line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("position {x},{y} is outside the {columns}x{rows} plateau{}", line_suffix(.line.as_ref()))]
    OutOfBounds {
        x: i32,
        y: i32,
        columns: i32,
        rows: i32,
        /// Landing line of the offending rover, when known.
        line: Option<usize>,
    },

    #[error("invalid command '{code}' on line {line}, column {column}")]
    InvalidCommand {
        line: usize,
        column: usize,
        code: char,
    },

    #[error("rover {0} has not landed on the plateau")]
    RoverNotLanded(RoverId),

    #[error("failed to read mission input: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MissionError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        MissionError::MalformedInput {
            line,
            reason: reason.into(),
        }
    }

    /// Attaches the landing line of the rover being driven to an
    /// `OutOfBounds` error. Other variants pass through unchanged.
    #[must_use]
    pub fn for_rover_at(self, landing_line: usize) -> Self {
        match self {
            MissionError::OutOfBounds {
                x,
                y,
                columns,
                rows,
                line: None,
            } => MissionError::OutOfBounds {
                x,
                y,
                columns,
                rows,
                line: Some(landing_line),
            },
            other => other,
        }
    }
}

fn line_suffix(line: Option<&usize>) -> String {
    match line {
        Some(line) => format!(" (rover landed on line {line})"),
        None => String::new(),
    }
}
