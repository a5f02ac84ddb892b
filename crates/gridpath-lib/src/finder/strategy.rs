//! Search strategies implementing the Strategy pattern.
//!
//! Each algorithm supplies its frontier, how the start is seeded, when a
//! popped entry is outdated and how a neighbour is reached. The shared
//! driver in [`crate::path::SearchRun`] does the rest.

use crate::grid::{Cell, CellId, Grid};
use crate::heuristic::Heuristic;
use crate::path::{FifoFrontier, Frontier, PriorityFrontier};

use super::SearchAlgorithm;

/// Cost of moving between two orthogonal neighbours.
const STEP_COST: f64 = 1.0;

/// Trait for search strategies.
pub trait SearchStrategy {
    /// The algorithm identifier for this strategy.
    fn algorithm(&self) -> SearchAlgorithm;

    /// A fresh, empty frontier of the kind this algorithm draws from.
    fn frontier(&self) -> Box<dyn Frontier>;

    /// Initialise the start cell's search state and return the priority it
    /// enters the frontier with.
    fn seed(&self, grid: &mut Grid, start: CellId, target: CellId) -> f64;

    /// Whether an entry popped with `priority` no longer reflects the best
    /// known cost of `cell`.
    fn is_stale(&self, cell: &Cell, priority: f64) -> bool;

    /// Try to reach `neighbor` from `current`.
    ///
    /// On success the neighbour's search state is updated and the priority
    /// to push it with is returned.
    fn relax(
        &self,
        grid: &mut Grid,
        current: CellId,
        neighbor: CellId,
        target: CellId,
    ) -> Option<f64>;
}

/// Breadth-first search over the unit-cost grid.
///
/// A cell is claimed by the first cell that discovers it; later discoveries
/// are ignored, so each predecessor link is written at most once.
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsStrategy;

impl SearchStrategy for BfsStrategy {
    fn algorithm(&self) -> SearchAlgorithm {
        SearchAlgorithm::Bfs
    }

    fn frontier(&self) -> Box<dyn Frontier> {
        Box::new(FifoFrontier::default())
    }

    fn seed(&self, grid: &mut Grid, start: CellId, _target: CellId) -> f64 {
        let state = grid.search_state_mut(start);
        state.queued = true;
        state.distance_from_start = 0.0;
        0.0
    }

    fn is_stale(&self, _cell: &Cell, _priority: f64) -> bool {
        false
    }

    fn relax(
        &self,
        grid: &mut Grid,
        current: CellId,
        neighbor: CellId,
        _target: CellId,
    ) -> Option<f64> {
        let candidate = &grid[neighbor];
        if candidate.is_wall() || candidate.is_queued() {
            return None;
        }

        let distance = grid[current].distance_from_start() + STEP_COST;
        let state = grid.search_state_mut(neighbor);
        state.queued = true;
        state.predecessor = Some(current);
        state.distance_from_start = distance;
        Some(distance)
    }
}

/// Dijkstra's algorithm ordered by distance from the start.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraStrategy;

impl SearchStrategy for DijkstraStrategy {
    fn algorithm(&self) -> SearchAlgorithm {
        SearchAlgorithm::Dijkstra
    }

    fn frontier(&self) -> Box<dyn Frontier> {
        Box::new(PriorityFrontier::default())
    }

    fn seed(&self, grid: &mut Grid, start: CellId, _target: CellId) -> f64 {
        seed_cost_ordered(grid, start, 0.0)
    }

    fn is_stale(&self, cell: &Cell, priority: f64) -> bool {
        priority > cell.distance_from_start()
    }

    fn relax(
        &self,
        grid: &mut Grid,
        current: CellId,
        neighbor: CellId,
        _target: CellId,
    ) -> Option<f64> {
        relax_cost_ordered(grid, current, neighbor, |_| 0.0)
    }
}

/// A* search ordered by `distance + heuristic`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarStrategy {
    heuristic: Heuristic,
}

impl AStarStrategy {
    pub fn new(heuristic: Heuristic) -> Self {
        Self { heuristic }
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }
}

impl SearchStrategy for AStarStrategy {
    fn algorithm(&self) -> SearchAlgorithm {
        SearchAlgorithm::AStar
    }

    fn frontier(&self) -> Box<dyn Frontier> {
        Box::new(PriorityFrontier::default())
    }

    fn seed(&self, grid: &mut Grid, start: CellId, target: CellId) -> f64 {
        let estimate = self
            .heuristic
            .estimate(grid[start].position(), grid[target].position());
        seed_cost_ordered(grid, start, estimate)
    }

    fn is_stale(&self, cell: &Cell, priority: f64) -> bool {
        priority > cell.estimated_total_cost()
    }

    fn relax(
        &self,
        grid: &mut Grid,
        current: CellId,
        neighbor: CellId,
        target: CellId,
    ) -> Option<f64> {
        let goal = grid[target].position();
        relax_cost_ordered(grid, current, neighbor, |cell| {
            self.heuristic.estimate(cell.position(), goal)
        })
    }
}

/// Create the strategy for `algorithm`. The heuristic only affects A*.
pub fn select_strategy(
    algorithm: SearchAlgorithm,
    heuristic: Heuristic,
) -> Box<dyn SearchStrategy> {
    match algorithm {
        SearchAlgorithm::Bfs => Box::new(BfsStrategy),
        SearchAlgorithm::Dijkstra => Box::new(DijkstraStrategy),
        SearchAlgorithm::AStar => Box::new(AStarStrategy::new(heuristic)),
    }
}

fn seed_cost_ordered(grid: &mut Grid, start: CellId, estimate: f64) -> f64 {
    let state = grid.search_state_mut(start);
    state.queued = true;
    state.distance_from_start = 0.0;
    state.estimated_total_cost = estimate;
    estimate
}

fn relax_cost_ordered(
    grid: &mut Grid,
    current: CellId,
    neighbor: CellId,
    estimate: impl Fn(&Cell) -> f64,
) -> Option<f64> {
    let candidate = &grid[neighbor];
    if candidate.is_wall() {
        return None;
    }

    let distance = grid[current].distance_from_start() + STEP_COST;
    if distance >= candidate.distance_from_start() {
        return None;
    }

    let total = distance + estimate(candidate);
    let state = grid.search_state_mut(neighbor);
    state.predecessor = Some(current);
    state.distance_from_start = distance;
    state.estimated_total_cost = total;
    state.queued = true;
    Some(total)
}
