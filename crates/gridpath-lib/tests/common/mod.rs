//! Common test utilities and fixture helpers.
//!
//! Shared by the integration tests: layout fixtures, a one-call search
//! helper and path validity checks.

use gridpath_lib::{parse_layout, Grid, Path, PathFinder, PathResult, Position, SearchAlgorithm};

/// A 7x5 grid with a wall spur that forces a detour.
#[allow(dead_code)]
pub const DETOUR_LAYOUT: &str = "
S......
.#####.
.#...#.
.#.T.#.
.......
";

/// Target boxed in on all four sides.
#[allow(dead_code)]
pub const ENCLOSED_LAYOUT: &str = "
S....
..#..
.#T#.
..#..
.....
";

/// Build a grid from a layout, panicking on malformed fixtures.
#[allow(dead_code)]
pub fn grid_from(layout: &str) -> Grid {
    parse_layout(layout).expect("fixture layout parses")
}

/// Open grid with the start at (0,0) and the target at `target`.
#[allow(dead_code)]
pub fn open_grid(columns: usize, rows: usize, target: Position) -> Grid {
    let mut grid = Grid::new(columns, rows).expect("valid dimensions");
    let id = grid.id_at(target).expect("target in bounds");
    grid.set_target(id).expect("target accepted");
    grid
}

/// Search from the grid's start to its target.
#[allow(dead_code)]
pub fn run(grid: &mut Grid, algorithm: SearchAlgorithm) -> (PathResult, PathFinder) {
    let mut finder = PathFinder::default();
    let (start, target) = (grid.start(), grid.target());
    let result = finder
        .search(algorithm, grid, start, target)
        .expect("search arguments are valid");
    (result, finder)
}

/// Assert that `path` avoids walls and forms an orthogonal chain from the
/// grid's start to its target.
#[allow(dead_code)]
pub fn assert_valid_path(grid: &Grid, path: &Path) {
    let mut chain = vec![grid[grid.start()].position()];
    chain.extend(path.positions(grid));

    for id in path.iter() {
        assert!(
            !grid[id].is_wall(),
            "path crosses wall at {}",
            grid[id].position()
        );
    }
    for pair in chain.windows(2) {
        assert!(
            pair[0].is_orthogonal_neighbor(&pair[1]),
            "{} and {} are not adjacent",
            pair[0],
            pair[1]
        );
    }
    let target = grid.target().expect("target set");
    assert_eq!(chain.last().copied(), Some(grid[target].position()));
}
