//! Host-facing facade that owns a grid and its path finder.

use tracing::info;

use crate::config::EngineConfig;
use crate::error::Result;
use crate::finder::{PathFinder, PathResult, SearchAlgorithm};
use crate::grid::{Grid, Position};
use crate::heuristic::Heuristic;
use crate::output::SearchSummary;

/// A grid, a path finder and the selected algorithm, owned together.
///
/// Hosts mutate the grid through [`Engine::grid_mut`] and call
/// [`Engine::search`], which uses the grid's own start and target.
#[derive(Debug, Clone)]
pub struct Engine {
    grid: Grid,
    finder: PathFinder,
    algorithm: SearchAlgorithm,
}

impl Engine {
    pub fn new(config: &EngineConfig) -> Result<Self> {
        let grid = Grid::new(config.columns, config.rows)?;
        Ok(Self::with_grid(grid, config.algorithm, config.heuristic))
    }

    /// Wrap an existing grid, e.g. one parsed from a layout.
    pub fn with_grid(grid: Grid, algorithm: SearchAlgorithm, heuristic: Heuristic) -> Self {
        Self {
            grid,
            finder: PathFinder::new(heuristic),
            algorithm,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn finder(&self) -> &PathFinder {
        &self.finder
    }

    pub fn algorithm(&self) -> SearchAlgorithm {
        self.algorithm
    }

    /// Select the algorithm for the next search and drop the previous
    /// run's display state.
    pub fn set_algorithm(&mut self, algorithm: SearchAlgorithm) {
        self.algorithm = algorithm;
        self.reset_search_state();
    }

    pub fn heuristic(&self) -> Heuristic {
        self.finder.heuristic()
    }

    pub fn set_heuristic(&mut self, heuristic: Heuristic) {
        self.finder.set_heuristic(heuristic);
    }

    /// Convenience for the common host operations on coordinates.
    pub fn set_wall_at(&mut self, position: Position) -> Result<()> {
        let id = self.grid.id_at(position)?;
        self.grid.set_wall(id)
    }

    pub fn set_start_at(&mut self, position: Position) -> Result<()> {
        let id = self.grid.id_at(position)?;
        self.grid.set_start(id)
    }

    pub fn set_target_at(&mut self, position: Position) -> Result<()> {
        let id = self.grid.id_at(position)?;
        self.grid.set_target(id)
    }

    pub fn clear_walls(&mut self) {
        self.grid.clear_walls();
    }

    /// Run the selected algorithm from the grid's start to its target.
    pub fn search(&mut self) -> Result<PathResult> {
        let start = self.grid.start();
        let target = self.grid.target();
        self.finder
            .search(self.algorithm, &mut self.grid, start, target)
    }

    /// Summarise `result`, which should come from the latest
    /// [`Engine::search`].
    pub fn summary(&self, result: &PathResult) -> SearchSummary {
        SearchSummary::from_search(&self.grid, &self.finder, self.algorithm, result)
    }

    /// Clear search state and the stored path; roles and walls stay.
    pub fn reset_search_state(&mut self) {
        self.grid.reset_search_state();
        self.finder.clear();
    }

    /// Return to a fresh grid of the same size.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.finder.clear();
        info!(
            columns = self.grid.columns(),
            rows = self.grid.rows(),
            "engine reset"
        );
    }
}
