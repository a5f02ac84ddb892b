//! Text layouts and display classification for grids.
//!
//! A layout is one line per row, one glyph per cell:
//!
//! | Glyph | Meaning |
//! |---|---|
//! | `.` | open cell |
//! | `#` | wall |
//! | `S` | start |
//! | `T` | target |
//! | `*` `o` `+` | path / visited / queued (rendered output, read back as open) |
//!
//! Blank lines are ignored. A layout without `S` keeps the default start
//! at (0,0), and a `T` or `#` on that corner is then a parse error.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::grid::{CellId, Grid, Position};
use crate::path::Path;

/// What a host should draw for a cell.
///
/// When several apply, the earliest in this order wins: target, wall,
/// start, path, visited, queued, empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    Empty,
    Queued,
    Visited,
    Path,
    Start,
    Wall,
    Target,
}

impl CellState {
    pub fn glyph(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Queued => '+',
            CellState::Visited => 'o',
            CellState::Path => '*',
            CellState::Start => 'S',
            CellState::Wall => '#',
            CellState::Target => 'T',
        }
    }
}

/// Classify a cell for display. `path` marks the cells of a found path.
pub fn classify(grid: &Grid, path: Option<&Path>, id: CellId) -> CellState {
    let cell = &grid[id];
    if cell.is_target() {
        CellState::Target
    } else if cell.is_wall() {
        CellState::Wall
    } else if cell.is_start() {
        CellState::Start
    } else if path.is_some_and(|path| path.contains(id)) {
        CellState::Path
    } else if cell.is_visited() {
        CellState::Visited
    } else if cell.is_queued() {
        CellState::Queued
    } else {
        CellState::Empty
    }
}

/// Display states row by row.
pub fn classify_rows(grid: &Grid, path: Option<&Path>) -> Vec<Vec<CellState>> {
    let mut rows = Vec::with_capacity(grid.rows());
    let mut current = Vec::with_capacity(grid.columns());
    for (id, cell) in grid.cells() {
        current.push(classify(grid, path, id));
        if cell.position().x + 1 == grid.columns() {
            rows.push(std::mem::take(&mut current));
        }
    }
    rows
}

/// Render the grid as a layout, one line per row.
pub fn render_layout(grid: &Grid, path: Option<&Path>) -> String {
    let mut out = String::with_capacity((grid.columns() + 1) * grid.rows());
    for row in classify_rows(grid, path) {
        out.extend(row.into_iter().map(CellState::glyph));
        out.push('\n');
    }
    out
}

/// Build a grid from a text layout.
pub fn parse_layout(text: &str) -> Result<Grid> {
    let rows: Vec<(usize, Vec<char>)> = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_no, line)| (line_no, line.chars().collect()))
        .collect();

    let Some((first_line, first_row)) = rows.first() else {
        return Err(Error::LayoutParse {
            line: 0,
            message: "layout is empty".to_string(),
        });
    };
    let columns = first_row.len();
    if let Some((line, row)) = rows.iter().find(|(_, row)| row.len() != columns) {
        return Err(Error::LayoutParse {
            line: *line,
            message: format!(
                "row has {} cells but line {} has {}",
                row.len(),
                first_line,
                columns
            ),
        });
    }

    let mut grid = Grid::new(columns, rows.len())?;
    let mut start: Option<(usize, CellId)> = None;
    let mut target: Option<(usize, CellId)> = None;
    let mut walls = Vec::new();

    for (y, (line, row)) in rows.iter().enumerate() {
        for (x, glyph) in row.iter().enumerate() {
            let id = grid.id_at(Position::new(x, y))?;
            match glyph {
                '.' | '*' | 'o' | '+' => {}
                '#' => walls.push((*line, id)),
                'S' | 's' => {
                    if start.replace((*line, id)).is_some() {
                        return Err(Error::LayoutParse {
                            line: *line,
                            message: "more than one start cell".to_string(),
                        });
                    }
                }
                'T' | 't' => {
                    if target.replace((*line, id)).is_some() {
                        return Err(Error::LayoutParse {
                            line: *line,
                            message: "more than one target cell".to_string(),
                        });
                    }
                }
                other => {
                    return Err(Error::LayoutParse {
                        line: *line,
                        message: format!("unexpected glyph '{}' in column {}", other, x + 1),
                    });
                }
            }
        }
    }

    match start {
        Some((_, id)) => grid.set_start(id)?,
        None => {
            // Without an `S` the start stays at (0,0), so nothing else may sit there.
            let corner = grid.start();
            if let Some((line, _)) = target.filter(|(_, id)| *id == corner) {
                return Err(Error::LayoutParse {
                    line,
                    message: "target at (0,0) needs an explicit start elsewhere".to_string(),
                });
            }
            if let Some((line, _)) = walls.iter().find(|(_, id)| *id == corner) {
                return Err(Error::LayoutParse {
                    line: *line,
                    message: "wall at (0,0) needs an explicit start elsewhere".to_string(),
                });
            }
        }
    }
    if let Some((_, id)) = target {
        grid.set_target(id)?;
    }
    for (_, id) in walls {
        grid.set_wall(id)?;
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_roles_and_walls() {
        let grid = parse_layout(
            "
            .#T
            S#.
            ...
            ",
        )
        .unwrap();

        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid[grid.start()].position(), Position::new(0, 1));
        let target = grid.target().expect("target set");
        assert_eq!(grid[target].position(), Position::new(2, 0));
        assert_eq!(grid.walls().count(), 2);
        // The default start at (0,0) was released.
        assert!(!grid[grid.id_at(Position::new(0, 0)).unwrap()].is_start());
    }

    #[test]
    fn missing_start_keeps_the_default_corner() {
        let grid = parse_layout("..\n.T\n").unwrap();
        assert_eq!(grid[grid.start()].position(), Position::new(0, 0));
    }

    #[test]
    fn default_corner_clashes_report_the_line() {
        assert!(matches!(
            parse_layout("T.\n..\n"),
            Err(Error::LayoutParse { line: 1, .. })
        ));
        assert!(matches!(
            parse_layout("\n#T\n..\n"),
            Err(Error::LayoutParse { line: 2, .. })
        ));
        // An explicit start frees the corner.
        let grid = parse_layout("T.\n.S\n").unwrap();
        assert_eq!(grid[grid.start()].position(), Position::new(1, 1));
        assert_eq!(grid.target(), grid.id_at(Position::new(0, 0)).ok());
    }

    #[test]
    fn ragged_rows_are_rejected_with_the_line_number() {
        let error = parse_layout("S..\n..\n").unwrap_err();
        assert!(matches!(error, Error::LayoutParse { line: 2, .. }));
    }

    #[test]
    fn duplicate_roles_and_unknown_glyphs_are_rejected() {
        assert!(matches!(
            parse_layout("S.S\n"),
            Err(Error::LayoutParse { line: 1, .. })
        ));
        assert!(matches!(
            parse_layout("T\nT\n"),
            Err(Error::LayoutParse { line: 2, .. })
        ));
        assert!(matches!(
            parse_layout("S.x\n"),
            Err(Error::LayoutParse { .. })
        ));
        assert!(matches!(
            parse_layout("\n\n"),
            Err(Error::LayoutParse { line: 0, .. })
        ));
    }

    #[test]
    fn untouched_grid_renders_back_to_its_layout() {
        let text = "S.#\n.#.\n..T\n";
        let grid = parse_layout(text).unwrap();
        assert_eq!(render_layout(&grid, None), text);
    }

    #[test]
    fn classification_prefers_roles_over_search_state() {
        let mut grid = parse_layout("S.T\n").unwrap();
        let start = grid.start();
        let middle = grid.id_at(Position::new(1, 0)).unwrap();
        let target = grid.target().unwrap();
        grid.search_state_mut(middle).queued = true;
        grid.search_state_mut(target).visited = true;

        assert_eq!(classify(&grid, None, start), CellState::Start);
        assert_eq!(classify(&grid, None, middle), CellState::Queued);
        assert_eq!(classify(&grid, None, target), CellState::Target);

        grid.search_state_mut(middle).visited = true;
        assert_eq!(classify(&grid, None, middle), CellState::Visited);
    }
}
