//! Search orchestration for grid pathfinding.
//!
//! This module provides:
//! - [`SearchAlgorithm`] - Supported algorithms (BFS, Dijkstra, A*)
//! - [`PathResult`] - Outcome of a search
//! - [`PathFinder`] - Runs one algorithm against a grid and keeps the path
//!
//! # Strategy Pattern
//!
//! Each algorithm is a [`SearchStrategy`] that supplies its frontier and its
//! expansion rules; the shared driver [`crate::path::SearchRun`] owns the
//! pop/expand/terminate loop.
//!
//! # Example
//!
//! ```
//! use gridpath_lib::{Grid, PathFinder, Position, SearchAlgorithm};
//!
//! let mut grid = Grid::new(5, 5)?;
//! let target = grid.id_at(Position::new(4, 4))?;
//! grid.set_target(target)?;
//!
//! let mut finder = PathFinder::default();
//! let (start, target) = (grid.start(), grid.target());
//! let result = finder.search(SearchAlgorithm::AStar, &mut grid, start, target)?;
//! assert_eq!(result.path().map(|path| path.len()), Some(8));
//! # Ok::<(), gridpath_lib::Error>(())
//! ```

mod strategy;

pub use strategy::{select_strategy, AStarStrategy, BfsStrategy, DijkstraStrategy, SearchStrategy};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::grid::{CellId, Grid};
use crate::heuristic::Heuristic;
use crate::path::{Path, SearchRun, SearchStatus};

/// Supported search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SearchAlgorithm {
    /// Breadth-first search (FIFO frontier).
    Bfs,
    /// Dijkstra's algorithm (frontier ordered by distance).
    Dijkstra,
    /// A* search (frontier ordered by distance plus heuristic).
    #[default]
    #[serde(rename = "a-star", alias = "astar", alias = "a_star")]
    AStar,
}

impl SearchAlgorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [SearchAlgorithm; 3] = [
        SearchAlgorithm::Bfs,
        SearchAlgorithm::Dijkstra,
        SearchAlgorithm::AStar,
    ];

    /// Whether the frontier ordering consults a [`Heuristic`].
    pub fn uses_heuristic(self) -> bool {
        matches!(self, SearchAlgorithm::AStar)
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SearchAlgorithm::Bfs => "bfs",
            SearchAlgorithm::Dijkstra => "dijkstra",
            SearchAlgorithm::AStar => "a-star",
        };
        f.write_str(value)
    }
}

impl FromStr for SearchAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(SearchAlgorithm::Bfs),
            "dijkstra" => Ok(SearchAlgorithm::Dijkstra),
            "a-star" | "astar" | "a_star" | "a*" => Ok(SearchAlgorithm::AStar),
            _ => Err(Error::UnknownAlgorithm {
                name: s.to_string(),
            }),
        }
    }
}

/// Outcome of a search. An unreachable target is a normal outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathResult {
    Found(Path),
    NotFound,
}

impl PathResult {
    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found(_))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            PathResult::Found(path) => Some(path),
            PathResult::NotFound => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            PathResult::Found(path) => Some(path),
            PathResult::NotFound => None,
        }
    }
}

/// Runs searches against a grid and keeps the outcome of the latest run.
///
/// Nothing carries over between runs: every search resets the grid's
/// search state and replaces the stored path and visit order.
#[derive(Debug, Clone, Default)]
pub struct PathFinder {
    heuristic: Heuristic,
    path: Path,
    visit_order: Vec<CellId>,
}

impl PathFinder {
    pub fn new(heuristic: Heuristic) -> Self {
        Self {
            heuristic,
            ..Self::default()
        }
    }

    /// Heuristic handed to A*.
    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    pub fn set_heuristic(&mut self, heuristic: Heuristic) {
        self.heuristic = heuristic;
    }

    /// Path from the latest successful search; empty otherwise.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Cells expanded by the latest search, in order.
    pub fn visit_order(&self) -> &[CellId] {
        &self.visit_order
    }

    /// Forget the stored path and visit order.
    pub fn clear(&mut self) {
        self.path = Path::default();
        self.visit_order.clear();
    }

    /// Run `algorithm` from `start` to `target` to completion.
    ///
    /// The grid's search state is reset first and left describing the run
    /// afterwards (visited, queued, predecessor and cost fields). A missing
    /// target or a handle from another grid is an error; an unreachable
    /// target is [`PathResult::NotFound`].
    pub fn search(
        &mut self,
        algorithm: SearchAlgorithm,
        grid: &mut Grid,
        start: CellId,
        target: Option<CellId>,
    ) -> Result<PathResult> {
        self.clear();
        let Some(target) = target else {
            grid.reset_search_state();
            return Err(Error::MissingTarget);
        };

        if algorithm.uses_heuristic() && self.heuristic == Heuristic::Euclidean {
            warn!("euclidean heuristic selected; A* path length is only guaranteed with manhattan");
        }

        let strategy = select_strategy(algorithm, self.heuristic);
        let mut run = SearchRun::new(grid, strategy.as_ref(), start, target)?;
        debug!(
            %algorithm,
            start = %run.grid()[start].position(),
            target = %run.grid()[target].position(),
            "starting search"
        );

        let status = run.run();
        let path = run.path();
        self.visit_order = run.into_visit_order();

        let result = match (status, path) {
            (SearchStatus::Found, Some(path)) => {
                self.path = path.clone();
                PathResult::Found(path)
            }
            _ => PathResult::NotFound,
        };

        debug!(
            %algorithm,
            expanded = self.visit_order.len(),
            found = result.is_found(),
            path_len = self.path.len(),
            "search finished"
        );
        Ok(result)
    }
}
