//! # Mars Rover Mission Simulator
//!
//! A deterministic simulation of rovers landing on a rectangular plateau and
//! executing textual command sequences.
//!
//! ## Quick Start
//!
//! ```rust
//! use marsrover::mission;
//!
//! let plateau = mission::execute("5 5\n1 2 N\nLMLMLMLMM\n3 3 E\nMMRMMRMRRM").unwrap();
//! assert_eq!(plateau.positions(), "1 3 N 5 1 E");
//! println!("{}", plateau.snapshot());
//! ```
//!
//! ## Architecture
//!
//! - [`compass`] - Headings and quarter-turn rotation
//! - [`motion`] - Grid positions and single-step movement
//! - [`rover`] - Commands and the rover state machine
//! - [`plateau`] - The grid, landing, occupancy and rendering
//! - [`mission`] - Input parsing and the sequential mission run
//! - [`report`] - Final report in table, compact or JSON form

#![deny(warnings)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]

pub mod compass;
pub mod error;
pub mod mission;
pub mod motion;
pub mod plateau;
pub mod report;
pub mod rover;

pub use compass::{Heading, Rotation};
pub use error::{MissionError, Result};
pub use mission::{MissionPlan, RoverPlan};
pub use motion::Position;
pub use plateau::{Bounds, Plateau, RoverId};
pub use report::{MissionReport, OutputSelection, ReportFormat};
pub use rover::{Command, Rover};
