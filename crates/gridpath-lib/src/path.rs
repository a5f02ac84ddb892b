use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use serde::Serialize;
use tracing::trace;

use crate::error::Result;
use crate::finder::SearchStrategy;
use crate::grid::{CellId, Grid, Position};

/// Open set of discovered-but-not-finalized cells.
pub trait Frontier {
    /// Insert `cell` with the given priority. FIFO frontiers ignore it.
    fn push(&mut self, cell: CellId, priority: f64);

    /// Remove the next cell together with the priority it was pushed with.
    fn pop(&mut self) -> Option<(CellId, f64)>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First-in first-out frontier used by breadth-first search.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<(CellId, f64)>,
}

impl Frontier for FifoFrontier {
    fn push(&mut self, cell: CellId, priority: f64) {
        self.queue.push_back((cell, priority));
    }

    fn pop(&mut self) -> Option<(CellId, f64)> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Min-priority frontier. Equal priorities pop in insertion order.
///
/// The same cell may be pushed several times at decreasing priorities;
/// callers discard the outdated entries when they surface.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<QueueEntry>,
    sequence: u64,
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, cell: CellId, priority: f64) {
        self.heap.push(QueueEntry {
            cell,
            priority: FloatOrd(priority),
            sequence: self.sequence,
        });
        self.sequence += 1;
    }

    fn pop(&mut self) -> Option<(CellId, f64)> {
        self.heap.pop().map(|entry| (entry.cell, entry.priority.0))
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Shortest path produced by a successful search.
///
/// Cells run from the target back toward the start; the start itself is
/// not included, so `len()` is the number of moves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Path {
    cells: Vec<CellId>,
}

impl Path {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in target-to-start order.
    pub fn cells(&self) -> &[CellId] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = CellId> + '_ {
        self.cells.iter().copied()
    }

    pub fn contains(&self, cell: CellId) -> bool {
        self.cells.contains(&cell)
    }

    /// Cells in start-to-target order (start still excluded).
    pub fn to_start_order(&self) -> Vec<CellId> {
        self.cells.iter().rev().copied().collect()
    }

    /// Coordinates in start-to-target order.
    pub fn positions(&self, grid: &Grid) -> Vec<Position> {
        self.cells
            .iter()
            .rev()
            .map(|id| grid[*id].position())
            .collect()
    }
}

/// Walk predecessor links from `target` and collect the path, dropping the
/// start cell.
pub fn reconstruct_path(grid: &Grid, start: CellId, target: CellId) -> Path {
    let mut cells = Vec::new();
    let mut current = Some(target);
    while let Some(cell) = current {
        if cell == start {
            break;
        }
        cells.push(cell);
        current = grid[cell].predecessor();
    }
    Path { cells }
}

/// Where a [`SearchRun`] currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    /// The frontier still holds cells to expand.
    Running,
    /// The target has been popped from the frontier.
    Found,
    /// The frontier emptied without reaching the target.
    Exhausted,
}

/// One search over a grid, advanced one frontier pop at a time.
///
/// Creating a run resets the grid's search state and seeds the frontier
/// with the start cell. The visited marker goes to the `start` passed in,
/// even when it is not the grid's start role. [`SearchRun::run`] drives it
/// to completion; [`SearchRun::step`] lets a host replay the exploration.
pub struct SearchRun<'a> {
    grid: &'a mut Grid,
    strategy: &'a dyn SearchStrategy,
    frontier: Box<dyn Frontier>,
    start: CellId,
    target: CellId,
    status: SearchStatus,
    visit_order: Vec<CellId>,
}

impl<'a> SearchRun<'a> {
    pub fn new(
        grid: &'a mut Grid,
        strategy: &'a dyn SearchStrategy,
        start: CellId,
        target: CellId,
    ) -> Result<Self> {
        grid.validate(start)?;
        grid.validate(target)?;
        grid.reset_search_state();
        if start != grid.start() {
            let marked = grid.start();
            grid.search_state_mut(marked).visited = false;
            grid.search_state_mut(start).visited = true;
        }

        let mut frontier = strategy.frontier();
        let status = if start == target {
            SearchStatus::Found
        } else {
            let priority = strategy.seed(grid, start, target);
            frontier.push(start, priority);
            SearchStatus::Running
        };

        Ok(Self {
            grid,
            strategy,
            frontier,
            start,
            target,
            status,
            visit_order: Vec::new(),
        })
    }

    /// Pop one frontier entry and expand it.
    ///
    /// Outdated duplicate entries are discarded without expansion; the call
    /// still counts as a step. Once the run has finished this is a no-op.
    pub fn step(&mut self) -> SearchStatus {
        if self.status != SearchStatus::Running {
            return self.status;
        }

        let Some((current, priority)) = self.frontier.pop() else {
            self.status = SearchStatus::Exhausted;
            return self.status;
        };

        if self.strategy.is_stale(&self.grid[current], priority) {
            trace!(cell = %self.grid[current].position(), priority, "discarding stale entry");
            return self.status;
        }

        self.grid.search_state_mut(current).visited = true;
        self.visit_order.push(current);
        trace!(cell = %self.grid[current].position(), priority, "expanding");

        if current == self.target {
            self.status = SearchStatus::Found;
            return self.status;
        }

        let degree = self.grid[current].neighbors().len();
        for slot in 0..degree {
            let neighbor = self.grid[current].neighbors()[slot];
            if let Some(priority) = self
                .strategy
                .relax(self.grid, current, neighbor, self.target)
            {
                self.frontier.push(neighbor, priority);
            }
        }

        self.status
    }

    /// Step until the target is found or the frontier is exhausted.
    pub fn run(&mut self) -> SearchStatus {
        while self.step() == SearchStatus::Running {}
        self.status
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Cells in the order they were expanded.
    pub fn visit_order(&self) -> &[CellId] {
        &self.visit_order
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn grid(&self) -> &Grid {
        &*self.grid
    }

    /// The reconstructed path once the target has been found.
    pub fn path(&self) -> Option<Path> {
        (self.status == SearchStatus::Found)
            .then(|| reconstruct_path(&*self.grid, self.start, self.target))
    }

    pub(crate) fn into_visit_order(self) -> Vec<CellId> {
        self.visit_order
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    cell: CellId,
    priority: FloatOrd,
    sequence: u64,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by priority, then
        // by insertion sequence.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
