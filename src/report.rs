//! Final mission report and its text renderings.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::compass::Heading;
use crate::error::Result;
use crate::plateau::{Plateau, RoverId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverReport {
    pub id: RoverId,
    pub x: i32,
    pub y: i32,
    pub heading: Heading,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionReport {
    pub columns: i32,
    pub rows: i32,
    pub rovers: Vec<RoverReport>,
    pub positions: String,
    pub snapshot: String,
}

impl MissionReport {
    pub fn from_plateau(plateau: &Plateau) -> Self {
        let bounds = plateau.bounds();
        let rovers = plateau
            .rovers()
            .iter()
            .enumerate()
            .map(|(id, rover)| RoverReport {
                id,
                x: rover.position().x,
                y: rover.position().y,
                heading: rover.heading(),
            })
            .collect();

        Self {
            columns: bounds.columns,
            rows: bounds.rows,
            rovers,
            positions: plateau.positions(),
            snapshot: plateau.snapshot(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Table,
    Compact,
    Json,
}

impl ReportFormat {
    pub const NAMES: [&'static str; 3] = ["table", "compact", "json"];
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s {
            "table" => Ok(ReportFormat::Table),
            "compact" => Ok(ReportFormat::Compact),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("unknown report format: {}", other)),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportFormat::Table => "table",
            ReportFormat::Compact => "compact",
            ReportFormat::Json => "json",
        };
        f.write_str(name)
    }
}

/// Which parts of the report to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputSelection {
    Positions,
    Snapshot,
    Both,
}

impl OutputSelection {
    pub const NAMES: [&'static str; 3] = ["positions", "snapshot", "both"];

    fn positions(self) -> bool {
        matches!(self, OutputSelection::Positions | OutputSelection::Both)
    }

    fn snapshot(self) -> bool {
        matches!(self, OutputSelection::Snapshot | OutputSelection::Both)
    }
}

impl FromStr for OutputSelection {
    type Err = String;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s {
            "positions" => Ok(OutputSelection::Positions),
            "snapshot" => Ok(OutputSelection::Snapshot),
            "both" => Ok(OutputSelection::Both),
            other => Err(format!("unknown output selection: {}", other)),
        }
    }
}

pub fn render(
    report: &MissionReport,
    format: ReportFormat,
    selection: OutputSelection,
) -> Result<String> {
    let rendered = match format {
        ReportFormat::Compact => render_compact(report, selection),
        ReportFormat::Table => render_table(report, selection),
        ReportFormat::Json => serde_json::to_string_pretty(&json_view(report, selection))?,
    };
    Ok(rendered)
}

fn render_compact(report: &MissionReport, selection: OutputSelection) -> String {
    let mut parts = Vec::new();
    if selection.positions() {
        parts.push(report.positions.clone());
    }
    if selection.snapshot() {
        parts.push(report.snapshot.clone());
    }
    parts.join("\n")
}

fn render_table(report: &MissionReport, selection: OutputSelection) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Plateau {}x{}", report.columns, report.rows));

    if selection.positions() {
        for rover in &report.rovers {
            lines.push(format!(
                "Rover {}: {} {} {}",
                rover.id + 1,
                rover.x,
                rover.y,
                rover.heading
            ));
        }
    }
    if selection.snapshot() {
        lines.push(String::new());
        lines.push(report.snapshot.clone());
    }
    lines.join("\n")
}

fn json_view(report: &MissionReport, selection: OutputSelection) -> serde_json::Value {
    let mut value = serde_json::json!({
        "columns": report.columns,
        "rows": report.rows,
    });
    if selection.positions() {
        value["rovers"] = serde_json::json!(report.rovers);
        value["positions"] = serde_json::json!(report.positions);
    }
    if selection.snapshot() {
        value["snapshot"] = serde_json::json!(report.snapshot);
    }
    value
}
