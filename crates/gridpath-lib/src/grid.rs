use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Default number of columns used by hosts that do not pick their own size.
pub const DEFAULT_COLUMNS: usize = 25;
/// Default number of rows used by hosts that do not pick their own size.
pub const DEFAULT_ROWS: usize = 25;

/// Column/row coordinate of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Number of orthogonal moves between two positions on an open grid.
    pub fn manhattan_distance(&self, other: &Position) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Straight-line distance between the two cell centres.
    pub fn euclidean_distance(&self, other: &Position) -> f64 {
        let dx = self.x.abs_diff(other.x) as f64;
        let dy = self.y.abs_diff(other.y) as f64;
        dx.hypot(dy)
    }

    /// Whether `other` shares an edge with this position.
    pub fn is_orthogonal_neighbor(&self, other: &Position) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl FromStr for Position {
    type Err = Error;

    /// Parse `x,y`, optionally wrapped in parentheses.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidPosition {
            input: s.to_string(),
        };
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);
        let (x, y) = inner.split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse().map_err(|_| invalid())?;
        let y = y.trim().parse().map_err(|_| invalid())?;
        Ok(Position { x, y })
    }
}

/// Handle to a cell inside the [`Grid`] that issued it.
///
/// Handles are plain indices into the grid's cell storage; they never own
/// the cell and are meaningless for any other grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CellId(usize);

impl CellId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Per-cell bookkeeping written by a search run.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    /// The cell has been expanded (finalized) by the search.
    pub visited: bool,
    /// The cell has been inserted into the frontier at least once.
    pub queued: bool,
    /// Cell this one was reached from.
    pub predecessor: Option<CellId>,
    pub distance_from_start: f64,
    /// Priority used by A* (`distance + heuristic`); mirrors the distance
    /// for Dijkstra.
    pub estimated_total_cost: f64,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            visited: false,
            queued: false,
            predecessor: None,
            distance_from_start: f64::INFINITY,
            estimated_total_cost: f64::INFINITY,
        }
    }
}

/// One grid position with its role flags, search state and adjacency.
#[derive(Debug, Clone)]
pub struct Cell {
    position: Position,
    is_start: bool,
    is_wall: bool,
    is_target: bool,
    search: SearchState,
    neighbors: Vec<CellId>,
}

impl Cell {
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_start(&self) -> bool {
        self.is_start
    }

    pub fn is_wall(&self) -> bool {
        self.is_wall
    }

    pub fn is_target(&self) -> bool {
        self.is_target
    }

    pub fn is_visited(&self) -> bool {
        self.search.visited
    }

    pub fn is_queued(&self) -> bool {
        self.search.queued
    }

    pub fn predecessor(&self) -> Option<CellId> {
        self.search.predecessor
    }

    pub fn distance_from_start(&self) -> f64 {
        self.search.distance_from_start
    }

    pub fn estimated_total_cost(&self) -> f64 {
        self.search.estimated_total_cost
    }

    pub fn search_state(&self) -> &SearchState {
        &self.search
    }

    /// Orthogonal neighbours inside the grid, ordered west, east, north,
    /// south. Missing directions (grid edges) are skipped.
    pub fn neighbors(&self) -> &[CellId] {
        &self.neighbors
    }
}

/// Fixed-size rectangle of cells with exactly one start cell and at most
/// one target.
///
/// The grid owns every [`Cell`]; neighbour links are [`CellId`] handles
/// computed once at construction.
#[derive(Debug, Clone)]
pub struct Grid {
    columns: usize,
    rows: usize,
    cells: Vec<Cell>,
    start: CellId,
    target: Option<CellId>,
}

impl Grid {
    /// Allocate a `columns x rows` grid with the start at (0,0).
    pub fn new(columns: usize, rows: usize) -> Result<Self> {
        let len = columns
            .checked_mul(rows)
            .filter(|len| *len > 0)
            .ok_or(Error::InvalidDimensions { columns, rows })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| Error::InvalidDimensions { columns, rows })?;
        for y in 0..rows {
            for x in 0..columns {
                let index = y * columns + x;
                let mut neighbors = Vec::with_capacity(4);
                if x > 0 {
                    neighbors.push(CellId(index - 1));
                }
                if x + 1 < columns {
                    neighbors.push(CellId(index + 1));
                }
                if y > 0 {
                    neighbors.push(CellId(index - columns));
                }
                if y + 1 < rows {
                    neighbors.push(CellId(index + columns));
                }
                cells.push(Cell {
                    position: Position::new(x, y),
                    is_start: false,
                    is_wall: false,
                    is_target: false,
                    search: SearchState::default(),
                    neighbors,
                });
            }
        }

        let start = CellId(0);
        cells[0].is_start = true;
        cells[0].search.visited = true;

        Ok(Self {
            columns,
            rows,
            cells,
            start,
            target: None,
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total number of cells (`columns * rows`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `id` was issued by a grid of this size.
    pub fn contains(&self, id: CellId) -> bool {
        id.0 < self.cells.len()
    }

    pub(crate) fn validate(&self, id: CellId) -> Result<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(Error::UnknownCell {
                index: id.0,
                len: self.cells.len(),
            })
        }
    }

    /// Resolve a coordinate to its cell handle.
    pub fn id_at(&self, position: Position) -> Result<CellId> {
        if position.x >= self.columns || position.y >= self.rows {
            return Err(Error::OutOfBounds {
                x: position.x,
                y: position.y,
                columns: self.columns,
                rows: self.rows,
            });
        }
        Ok(CellId(position.y * self.columns + position.x))
    }

    pub fn cell(&self, id: CellId) -> Result<&Cell> {
        self.validate(id)?;
        Ok(&self.cells[id.0])
    }

    pub fn position(&self, id: CellId) -> Result<Position> {
        self.cell(id).map(Cell::position)
    }

    pub fn neighbors(&self, id: CellId) -> Result<&[CellId]> {
        self.cell(id).map(Cell::neighbors)
    }

    /// Iterate over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (CellId, &Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (CellId(index), cell))
    }

    pub fn walls(&self) -> impl Iterator<Item = CellId> + '_ {
        self.cells()
            .filter(|(_, cell)| cell.is_wall)
            .map(|(id, _)| id)
    }

    pub fn start(&self) -> CellId {
        self.start
    }

    pub fn target(&self) -> Option<CellId> {
        self.target
    }

    /// Mark a cell as an obstacle. The start and target cells are refused.
    pub fn set_wall(&mut self, id: CellId) -> Result<()> {
        self.validate(id)?;
        let cell = &self.cells[id.0];
        if cell.is_start {
            return Err(self.conflict(id, "the start cell cannot be a wall"));
        }
        if cell.is_target {
            return Err(self.conflict(id, "the target cell cannot be a wall"));
        }
        self.cells[id.0].is_wall = true;
        Ok(())
    }

    pub fn clear_wall(&mut self, id: CellId) -> Result<()> {
        self.validate(id)?;
        self.cells[id.0].is_wall = false;
        Ok(())
    }

    /// Remove every wall. Start, target and search state are kept.
    pub fn clear_walls(&mut self) {
        let mut cleared = 0usize;
        for cell in &mut self.cells {
            if cell.is_wall {
                cell.is_wall = false;
                cleared += 1;
            }
        }
        debug!(cleared, "walls cleared");
    }

    /// Flip the wall flag and return the new value.
    pub fn toggle_wall(&mut self, id: CellId) -> Result<bool> {
        if self.cell(id)?.is_wall {
            self.clear_wall(id)?;
            Ok(false)
        } else {
            self.set_wall(id)?;
            Ok(true)
        }
    }

    /// Move the start role to `id`.
    ///
    /// The previous start loses the visited flag it carried for display and
    /// the new start gains it. Any other search state is left untouched, so
    /// callers moving the start between searches should reset as well.
    pub fn set_start(&mut self, id: CellId) -> Result<()> {
        self.validate(id)?;
        if id == self.start {
            return Ok(());
        }
        let cell = &self.cells[id.0];
        if cell.is_wall {
            return Err(self.conflict(id, "a wall cannot be the start"));
        }
        if cell.is_target {
            return Err(self.conflict(id, "the target cell cannot also be the start"));
        }

        let previous = &mut self.cells[self.start.0];
        previous.is_start = false;
        previous.search.visited = false;

        let next = &mut self.cells[id.0];
        next.is_start = true;
        next.search.visited = true;
        self.start = id;
        Ok(())
    }

    /// Make `id` the single target, clearing the flag on any previous one.
    pub fn set_target(&mut self, id: CellId) -> Result<()> {
        self.validate(id)?;
        let cell = &self.cells[id.0];
        if cell.is_wall {
            return Err(self.conflict(id, "a wall cannot be the target"));
        }
        if cell.is_start {
            return Err(self.conflict(id, "the start cell cannot also be the target"));
        }

        self.clear_target();
        self.cells[id.0].is_target = true;
        self.target = Some(id);
        Ok(())
    }

    pub fn clear_target(&mut self) {
        if let Some(previous) = self.target.take() {
            self.cells[previous.0].is_target = false;
        }
    }

    /// Return every cell's search state to its defaults and re-mark the
    /// start as visited.
    pub fn reset_search_state(&mut self) {
        for cell in &mut self.cells {
            cell.search = SearchState::default();
        }
        self.cells[self.start.0].search.visited = true;
    }

    /// Clear walls, target and search state and move the start back to
    /// (0,0). Dimensions and adjacency are kept.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.is_start = false;
            cell.is_wall = false;
            cell.is_target = false;
        }
        self.target = None;
        self.start = CellId(0);
        self.cells[0].is_start = true;
        self.reset_search_state();
        debug!(columns = self.columns, rows = self.rows, "grid reset");
    }

    pub(crate) fn search_state_mut(&mut self, id: CellId) -> &mut SearchState {
        &mut self.cells[id.0].search
    }

    fn conflict(&self, id: CellId, reason: &'static str) -> Error {
        Error::RoleConflict {
            position: self.cells[id.0].position,
            reason,
        }
    }
}

impl Index<CellId> for Grid {
    type Output = Cell;

    /// Panics when `id` was not issued by this grid; use [`Grid::cell`] for
    /// a checked lookup.
    fn index(&self, id: CellId) -> &Cell {
        &self.cells[id.0]
    }
}
