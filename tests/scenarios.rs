//! Worked examples from the path-sum problem statements, loaded from text fixtures.

use std::thread;

use pathsum::{EndPolicy, Grid, PathConfig, PathSumError, StartPolicy, Triangle, path_sum, solve_path};
use rstest::{fixture, rstest};

const MATRIX: &str = include_str!("data/matrix_5x5.txt");

#[fixture]
fn matrix() -> Grid {
    MATRIX.parse().expect("fixture matrix parses")
}

#[rstest]
#[case::two_ways(PathConfig::two_ways(), 2427)]
#[case::three_ways(PathConfig::three_ways(), 994)]
#[case::four_ways(PathConfig::four_ways(), 2297)]
fn minimal_path_sums(matrix: Grid, #[case] config: PathConfig, #[case] expected: u64) {
    assert_eq!(path_sum(&matrix, &config).unwrap(), expected);
}

#[rstest]
fn more_freedom_never_costs_more(matrix: Grid) {
    let forward = path_sum(&matrix, &PathConfig::two_ways()).unwrap();
    let any = path_sum(&matrix, &PathConfig::four_ways()).unwrap();
    assert!(any <= forward);
}

#[rstest]
fn whitespace_copy_of_matrix_agrees(matrix: Grid) {
    let spaced: Grid = MATRIX.replace(',', "   ").parse().unwrap();
    assert_eq!(spaced, matrix);
    assert_eq!(path_sum(&spaced, &PathConfig::two_ways()).unwrap(), 2427);
}

#[rstest]
fn column_start_reaching_a_fixed_corner(matrix: Grid) {
    // entering anywhere on the left can only help
    let config = PathConfig::four_ways().with_start(StartPolicy::AnyInFirstColumn);
    let cost = path_sum(&matrix, &config).unwrap();
    assert!(cost <= 2297);

    let to_column = PathConfig::four_ways().with_end(EndPolicy::AnyInLastColumn);
    let path = solve_path(&matrix, &to_column).unwrap();
    assert_eq!(path.first(), Some(&131));
}

#[test]
fn small_triangle_maximum() {
    let triangle: Triangle = include_str!("data/triangle_4.txt").parse().unwrap();
    assert_eq!(triangle.max_path().unwrap(), vec![3, 7, 4, 9]);
    assert_eq!(triangle.max_path_sum().unwrap(), 23);
}

#[test]
fn fifteen_row_triangle_maximum() {
    let triangle: Triangle = include_str!("data/triangle_15.txt").parse().unwrap();
    assert_eq!(triangle.height(), 15);
    assert_eq!(triangle.max_path_sum().unwrap(), 1074);
}

#[rstest]
#[case::no_rows("")]
#[case::blank_lines("\n\n  \n")]
fn empty_grid_has_no_path(#[case] input: &str) {
    let grid: Grid = input.parse().unwrap();
    for config in [PathConfig::two_ways(), PathConfig::three_ways(), PathConfig::four_ways()] {
        assert!(matches!(solve_path(&grid, &config), Err(PathSumError::NoPathFound)));
    }
}

#[test]
fn ragged_file_rejected_at_load() {
    let ragged = MATRIX.replacen("18\n", "18,5\n", 1);
    assert!(matches!(ragged.parse::<Grid>(), Err(PathSumError::MalformedGrid { row: 1, .. })));
}

#[rstest]
fn independent_solves_on_threads(matrix: Grid) {
    let handles: Vec<_> = [PathConfig::two_ways(), PathConfig::three_ways(), PathConfig::four_ways()]
        .into_iter()
        .map(|config| {
            let grid = matrix.clone();
            thread::spawn(move || path_sum(&grid, &config).unwrap())
        })
        .collect();

    let sums: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(sums, vec![2427, 994, 2297]);
}
