//! Placement-rule verification tests.
//!
//! These tests pin down the full check-order contract — shape, digit range,
//! custom zones, rows, columns, boxes — with a solved board as the positive
//! exemplar.

use sudoku_rules::core::{Board, Coord};
use sudoku_rules::rules::{SudokuValidator, Verdict, Violation};
use sudoku_rules::zones::{parse_zone_list, Zone};

/// The canonical solved board.
fn solved_board() -> Vec<Vec<u8>> {
    vec![
        vec![5, 3, 4, 6, 7, 8, 9, 1, 2],
        vec![6, 7, 2, 1, 9, 5, 3, 4, 8],
        vec![1, 9, 8, 3, 4, 2, 5, 6, 7],
        vec![8, 5, 9, 7, 6, 1, 4, 2, 3],
        vec![4, 2, 6, 8, 5, 3, 7, 9, 1],
        vec![7, 1, 3, 9, 2, 4, 8, 5, 6],
        vec![9, 6, 1, 5, 3, 7, 2, 8, 4],
        vec![2, 8, 7, 4, 1, 9, 6, 3, 5],
        vec![3, 4, 5, 2, 8, 6, 1, 7, 9],
    ]
}

/// A full board where every row, column, and box is unique: each row is the
/// previous one shifted left by three.
fn cyclic_board() -> Vec<Vec<u8>> {
    vec![
        vec![1, 2, 3, 4, 5, 6, 7, 8, 9],
        vec![4, 5, 6, 7, 8, 9, 1, 2, 3],
        vec![7, 8, 9, 1, 2, 3, 4, 5, 6],
        vec![2, 3, 4, 5, 6, 7, 8, 9, 1],
        vec![5, 6, 7, 8, 9, 1, 2, 3, 4],
        vec![8, 9, 1, 2, 3, 4, 5, 6, 7],
        vec![3, 4, 5, 6, 7, 8, 9, 1, 2],
        vec![6, 7, 8, 9, 1, 2, 3, 4, 5],
        vec![9, 1, 2, 3, 4, 5, 6, 7, 8],
    ]
}

fn zone(coords: &[(u8, u8)]) -> Zone {
    Zone::new(coords.iter().map(|&(r, c)| Coord::new(r, c))).unwrap()
}

/// The 3x3 box with its top-left corner at (top, left), as a custom zone.
fn box_zone(top: u8, left: u8) -> Zone {
    Zone::new((0..3).flat_map(|r| (0..3).map(move |c| Coord::new(top + r, left + c)))).unwrap()
}

/// Nine cells no two of which share a row, column, or box.
fn scattered_zone() -> Zone {
    zone(&[
        (0, 0),
        (1, 3),
        (2, 6),
        (3, 1),
        (4, 4),
        (5, 7),
        (6, 2),
        (7, 5),
        (8, 8),
    ])
}

#[test]
fn test_solved_board_is_valid() {
    let validator = SudokuValidator::new();
    assert_eq!(validator.validate(&solved_board()), Verdict::Valid);
}

#[test]
fn test_solved_board_valid_with_box_zones() {
    // Registering two boxes as custom zones changes nothing: each box is
    // already internally unique.
    let validator = SudokuValidator::with_zones(vec![box_zone(0, 0), box_zone(6, 6)]);
    assert_eq!(validator.validate(&solved_board()), Verdict::Valid);
}

#[test]
fn test_short_board_is_bad_shape() {
    let grid = vec![vec![1u8, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
    let validator = SudokuValidator::new();
    assert_eq!(
        validator.validate(&grid),
        Verdict::Invalid(Violation::BadShape)
    );
}

#[test]
fn test_ragged_board_is_bad_shape() {
    let mut grid = solved_board();
    grid[5].pop();
    let validator = SudokuValidator::new();
    assert_eq!(
        validator.validate(&grid),
        Verdict::Invalid(Violation::BadShape)
    );
}

#[test]
fn test_out_of_range_digit() {
    let mut grid = cyclic_board();
    grid[0][8] = 10;
    let validator = SudokuValidator::new();
    assert_eq!(
        validator.validate(&grid),
        Verdict::Invalid(Violation::BadDigit { row: 0, col: 8, value: 10 })
    );
}

#[test]
fn test_row_duplicate() {
    let mut grid = cyclic_board();
    grid[0][0] = 2;
    let validator = SudokuValidator::new();
    assert_eq!(
        validator.validate(&grid),
        Verdict::Invalid(Violation::RowDuplicate { row: 0 })
    );
}

#[test]
fn test_adjacent_cells_equal_is_row_duplicate() {
    let mut grid = solved_board();
    grid[0][0] = grid[0][1];
    let validator = SudokuValidator::new();
    assert_eq!(
        validator.validate(&grid),
        Verdict::Invalid(Violation::RowDuplicate { row: 0 })
    );
}

#[test]
fn test_column_only_duplicate() {
    // Column 0 holds 1..=8 then 1 again; rows 0 and 8 never share a row or
    // box, so only the column check can catch this.
    let mut grid = vec![vec![0u8; 9]; 9];
    for r in 0..8 {
        grid[r][0] = r as u8 + 1;
    }
    grid[8][0] = 1;

    let validator = SudokuValidator::new();
    assert_eq!(
        validator.validate(&grid),
        Verdict::Invalid(Violation::ColumnDuplicate { col: 0 })
    );
}

#[test]
fn test_box_only_duplicate() {
    let mut grid = vec![vec![0u8; 9]; 9];
    grid[0][0] = 1;
    grid[1][1] = 1;

    let validator = SudokuValidator::new();
    assert_eq!(
        validator.validate(&grid),
        Verdict::Invalid(Violation::BoxDuplicate { box_row: 0, box_col: 0 })
    );
}

#[test]
fn test_custom_zone_only_duplicate() {
    // The repeated digit sits in cells that share no row, column, or box;
    // only the custom zone can catch it.
    let mut grid = vec![vec![0u8; 9]; 9];
    grid[0][0] = 5;
    grid[4][4] = 5;

    let validator = SudokuValidator::with_zones(vec![scattered_zone()]);
    assert_eq!(
        validator.validate(&grid),
        Verdict::Invalid(Violation::ZoneDuplicate { zone: 0 })
    );
}

#[test]
fn test_custom_zone_reported_before_row() {
    // Placing 5 at (0,0) breaks both row 0 (which already has a 5) and the
    // scattered zone (5 also at (4,4)); zones are checked first.
    let mut grid = cyclic_board();
    grid[0][0] = 5;
    grid[4][4] = 5;

    let validator = SudokuValidator::with_zones(vec![scattered_zone()]);
    let verdict = validator.validate(&grid);
    assert_eq!(
        verdict,
        Verdict::Invalid(Violation::ZoneDuplicate { zone: 0 })
    );
    assert_eq!(
        verdict.message().unwrap(),
        "Custom zone 1 does not contain unique digits 1-9."
    );
}

#[test]
fn test_all_zero_board_valid_under_any_zones() {
    let validator = SudokuValidator::with_zones(vec![
        scattered_zone(),
        box_zone(0, 0),
        box_zone(3, 3),
        box_zone(6, 6),
    ]);
    assert_eq!(validator.validate(&vec![vec![0u8; 9]; 9]), Verdict::Valid);
}

#[test]
fn test_empty_cells_repeat_freely_within_scopes() {
    // Several zeros in one row, column, and box; zeros are never checked
    // for uniqueness.
    let mut grid = vec![vec![0u8; 9]; 9];
    grid[0][0] = 1;
    grid[0][5] = 2;
    grid[5][0] = 3;

    let validator = SudokuValidator::with_zones(vec![scattered_zone()]);
    assert_eq!(validator.validate(&grid), Verdict::Valid);
}

#[test]
fn test_validation_is_idempotent() {
    let mut grid = cyclic_board();
    grid[0][0] = 2;

    let validator = SudokuValidator::new();
    let first = validator.validate(&grid);
    let second = validator.validate(&grid);
    assert_eq!(first, second);
}

#[test]
fn test_typed_board_agrees_with_raw_grid() {
    let grid = solved_board();
    let board = Board::from_rows(&grid).unwrap();

    let validator = SudokuValidator::with_zones(vec![box_zone(0, 0)]);
    assert_eq!(validator.validate(&grid), validator.validate_board(&board));
    assert!(validator.validate_board(&board).is_valid());
}

#[test]
fn test_parsed_zones_drive_validation() {
    // The form's text format, end to end: parse, configure, validate.
    let zones = parse_zone_list("0,0 1,3 2,6 3,1 4,4 5,7 6,2 7,5 8,8").unwrap();

    let mut grid = vec![vec![0u8; 9]; 9];
    grid[0][0] = 7;
    grid[8][8] = 7;

    let validator = SudokuValidator::with_zones(zones);
    assert_eq!(
        validator.validate(&grid),
        Verdict::Invalid(Violation::ZoneDuplicate { zone: 0 })
    );
}

#[test]
fn test_messages_match_display_contract() {
    let validator = SudokuValidator::new();

    let verdict = validator.validate(&vec![vec![0u8; 3]; 3]);
    assert_eq!(verdict.message().unwrap(), "Board must be 9x9.");

    let mut grid = cyclic_board();
    grid[0][0] = 2;
    let verdict = validator.validate(&grid);
    assert!(!verdict.is_valid());
    assert_eq!(
        verdict.message().unwrap(),
        "Row 1 does not contain unique digits 1-9."
    );
}
