use marsrover::*;

const SAMPLE_INPUT: &str = "5 5\n1 2 N\nLMLMLMLMM\n3 3 E\nMMRMMRMRRM";

#[test]
fn test_parse_sample_plan() {
    let plan = mission::parse(SAMPLE_INPUT).unwrap();

    assert_eq!(plan.max_x, 5);
    assert_eq!(plan.max_y, 5);
    assert_eq!(plan.dimensions().unwrap(), (6, 6));
    assert_eq!(plan.rovers.len(), 2);

    let first = &plan.rovers[0];
    assert_eq!(first.position, Position::new(1, 2));
    assert_eq!(first.heading, Heading::North);
    assert_eq!(first.commands.len(), 9);
    assert_eq!(first.line, 2);

    let second = &plan.rovers[1];
    assert_eq!(second.heading, Heading::East);
    assert_eq!(second.line, 4);
}

#[test]
fn test_single_rover_scenario() {
    let plateau = mission::execute("5 5\n1 2 N\nLMLMLMLMM").unwrap();
    assert_eq!(plateau.positions(), "1 3 N");
}

#[test]
fn test_two_rover_scenario() {
    let plateau = mission::execute(SAMPLE_INPUT).unwrap();
    assert_eq!(plateau.positions(), "1 3 N 5 1 E");

    let bounds = plateau.bounds();
    assert_eq!((bounds.columns, bounds.rows), (6, 6));
}

#[test]
fn test_two_rover_snapshot() {
    let plateau = mission::execute(SAMPLE_INPUT).unwrap();
    let expected = [
        "• • • • • •",
        "• • • • • •",
        "• ^ • • • •",
        "• • • • • •",
        "• • • • • >",
        "• • • • • •",
    ]
    .join("\n");
    assert_eq!(plateau.snapshot(), expected);
}

#[test]
fn test_minimal_plateau_snapshot() {
    let plateau = mission::execute("1 1\n0 0 N\n\n").unwrap();
    assert_eq!(plateau.snapshot(), "• •\n^ •");
    assert_eq!(plateau.positions(), "0 0 N");
}

#[test]
fn test_trailing_newline_is_ignored() {
    let plateau = mission::execute("5 5\n1 2 N\nLMLMLMLMM\n").unwrap();
    assert_eq!(plateau.positions(), "1 3 N");
}

#[test]
fn test_bounds_only_plan_has_no_rovers() {
    let plateau = mission::execute("2 3").unwrap();
    assert!(plateau.rovers().is_empty());
    assert_eq!(plateau.snapshot().lines().count(), 4);
}

#[test]
fn test_malformed_bounds_line() {
    for input in ["5", "5 5 5", "a 5", "", "5 x\n1 2 N\nM"] {
        match mission::parse(input) {
            Err(MissionError::MalformedInput { line, .. }) => assert_eq!(line, 1),
            other => panic!("expected MalformedInput for {:?}, got {:?}", input, other),
        }
    }
}

#[test]
fn test_malformed_landing_line() {
    for landing in ["1 2", "1 2 N E", "1 b N", "1 2 Q", "1 2 north", "1 2 NE", "1 2 n"] {
        let input = format!("5 5\n{}\nM", landing);
        match mission::parse(&input) {
            Err(MissionError::MalformedInput { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected MalformedInput for {:?}, got {:?}", landing, other),
        }
    }
}

#[test]
fn test_odd_plan_line_count() {
    let result = mission::parse("5 5\n1 2 N\nLMLMLMLMM\n3 3 E");
    assert!(matches!(
        result,
        Err(MissionError::MalformedInput { line: 4, .. })
    ));
}

#[test]
fn test_invalid_command_character() {
    let result = mission::parse("5 5\n1 2 N\nLMLMLMLMM\n3 3 E\nMMRXM");
    match result {
        Err(MissionError::InvalidCommand { line, column, code }) => {
            assert_eq!((line, column, code), (5, 4, 'X'));
        }
        other => panic!("expected InvalidCommand, got {:?}", other),
    }
}

#[test]
fn test_landing_out_of_bounds() {
    let result = mission::execute("5 5\n6 0 N\nM");
    assert!(matches!(
        result,
        Err(MissionError::OutOfBounds { x: 6, y: 0, columns: 6, rows: 6, line: Some(2) })
    ));
}

#[test]
fn test_move_off_plateau_aborts() {
    let plan = mission::parse("2 2\n0 2 N\nRM\n0 0 S\nM").unwrap();
    let result = mission::run(&plan);
    assert!(matches!(
        result,
        Err(MissionError::OutOfBounds { x: 0, y: -1, line: Some(4), .. })
    ));
}

#[test]
fn test_out_of_bounds_message_names_landing_line() {
    let err = mission::execute("1 1\n0 0 N\nMM").unwrap_err();
    assert_eq!(
        err.to_string(),
        "position 0,2 is outside the 2x2 plateau (rover landed on line 2)"
    );
}

#[test]
fn test_corner_too_large_for_grid() {
    for input in ["2147483647 2147483647", "2147483647 0", "0 2147483647\n0 0 N\nM"] {
        match mission::parse(input) {
            Err(MissionError::MalformedInput { line, .. }) => assert_eq!(line, 1),
            other => panic!("expected MalformedInput for {:?}, got {:?}", input, other),
        }
    }
}

#[test]
fn test_hand_built_plan_with_oversized_corner_fails() {
    // Plans built without `parse` still get a size check instead of overflowing.
    let plan = MissionPlan {
        max_x: i32::MAX,
        max_y: 0,
        rovers: Vec::new(),
    };
    assert!(matches!(
        mission::run(&plan),
        Err(MissionError::MalformedInput { line: 1, .. })
    ));
}

#[test]
fn test_move_to_edge_is_allowed() {
    let plateau = mission::execute("2 2\n0 0 E\nMMLMM").unwrap();
    assert_eq!(plateau.positions(), "2 2 N");
}

#[test]
fn test_shared_cell_shows_latest_rover() {
    // Collisions are not detected; the second rover drives onto the first.
    let plateau = mission::execute("1 0\n0 0 N\n\n1 0 W\nM").unwrap();
    assert_eq!(plateau.positions(), "0 0 N 0 0 W");
    assert_eq!(plateau.snapshot(), "< •");
}

#[test]
fn test_plan_serializes_to_json() {
    let plan = mission::parse("1 1\n0 0 N\nLM").unwrap();
    let json = serde_json::to_value(&plan).unwrap();

    assert_eq!(json["max_x"], 1);
    assert_eq!(json["rovers"][0]["heading"], "North");
    assert_eq!(json["rovers"][0]["commands"][0]["Rotate"], "Left");
    assert_eq!(json["rovers"][0]["commands"][1], "Move");
}
