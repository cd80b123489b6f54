use clap::{App, Arg};
use colored::*;
use marsrover::report::{self, MissionReport, OutputSelection, ReportFormat};
use marsrover::{mission, MissionError};
use std::fs;
use std::io::{self, Read};
use std::process;
use tracing::{debug, Level};

fn main() {
    let matches = App::new("rover")
        .version("0.1.0")
        .author("Space Systems Engineering Team")
        .about("Mars rover mission simulator")
        .long_about(
            "Reads a mission description (plateau corner, then landing/command line pairs \
             per rover), drives every rover in order and prints the final report.",
        )
        .arg(
            Arg::with_name("input")
                .value_name("INPUT")
                .help("Mission file to read, or '-' for stdin")
                .index(1)
                .default_value("-"),
        )
        .arg(
            Arg::with_name("format")
                .short("f")
                .long("format")
                .value_name("FORMAT")
                .help("Output format")
                .takes_value(true)
                .possible_values(&ReportFormat::NAMES)
                .default_value("compact"),
        )
        .arg(
            Arg::with_name("show")
                .short("s")
                .long("show")
                .value_name("PART")
                .help("Which parts of the report to print")
                .takes_value(true)
                .possible_values(&OutputSelection::NAMES)
                .default_value("both"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Log every landing and command to stderr"),
        )
        .get_matches();

    let verbose = matches.is_present("verbose");
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if verbose { Level::DEBUG } else { Level::WARN })
        .init();

    // clap has already validated both values against possible_values.
    let format = matches
        .value_of("format")
        .and_then(|f| f.parse().ok())
        .unwrap_or(ReportFormat::Compact);
    let selection = matches
        .value_of("show")
        .and_then(|s| s.parse().ok())
        .unwrap_or(OutputSelection::Both);
    let input = matches.value_of("input").unwrap_or("-");

    match run(input, format, selection) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e.to_string().bright_red());
            process::exit(1);
        }
    }
}

fn run(input: &str, format: ReportFormat, selection: OutputSelection) -> Result<String, MissionError> {
    let text = read_input(input)?;
    debug!(bytes = text.len(), source = input, "mission input read");

    let plateau = mission::execute(&text)?;
    let mission_report = MissionReport::from_plateau(&plateau);
    report::render(&mission_report, format, selection)
}

fn read_input(input: &str) -> Result<String, MissionError> {
    if input == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}
