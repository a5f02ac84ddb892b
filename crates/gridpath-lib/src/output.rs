use std::fmt::Write;

use serde::Serialize;

use crate::finder::{PathFinder, PathResult, SearchAlgorithm};
use crate::grid::{Grid, Position};
use crate::heuristic::Heuristic;
use crate::layout::render_layout;

/// Outcome label used in summaries.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SearchOutcome {
    Found,
    NotFound,
}

impl SearchOutcome {
    /// Human-readable label shown in textual renderings.
    pub fn label(self) -> &'static str {
        match self {
            SearchOutcome::Found => "path found",
            SearchOutcome::NotFound => "no path found",
        }
    }
}

/// Structured description of a finished search that hosts can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchSummary {
    pub algorithm: SearchAlgorithm,
    /// Only reported for algorithms that consult a heuristic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heuristic: Option<Heuristic>,
    pub columns: usize,
    pub rows: usize,
    pub start: Position,
    pub target: Option<Position>,
    pub outcome: SearchOutcome,
    /// Path cells in start-to-target order, start excluded.
    pub path: Vec<Position>,
    pub path_length: usize,
    /// Number of cells expanded.
    pub expanded: usize,
    /// Number of cells that ever entered the frontier.
    pub queued: usize,
    pub walls: usize,
}

impl SearchSummary {
    /// Summarise the latest search `finder` ran on `grid`.
    pub fn from_search(
        grid: &Grid,
        finder: &PathFinder,
        algorithm: SearchAlgorithm,
        result: &PathResult,
    ) -> Self {
        let path = result
            .path()
            .map(|path| path.positions(grid))
            .unwrap_or_default();
        let outcome = if result.is_found() {
            SearchOutcome::Found
        } else {
            SearchOutcome::NotFound
        };

        Self {
            algorithm,
            heuristic: algorithm.uses_heuristic().then_some(finder.heuristic()),
            columns: grid.columns(),
            rows: grid.rows(),
            start: grid[grid.start()].position(),
            target: grid.target().map(|id| grid[id].position()),
            outcome,
            path_length: path.len(),
            path,
            expanded: finder.visit_order().len(),
            queued: grid.cells().filter(|(_, cell)| cell.is_queued()).count(),
            walls: grid.walls().count(),
        }
    }

    pub fn is_found(&self) -> bool {
        self.outcome == SearchOutcome::Found
    }

    /// One-line description, e.g. `a-star: path found (8 steps, 25 expanded)`.
    pub fn headline(&self) -> String {
        let mut line = self.algorithm.to_string();
        if let Some(heuristic) = self.heuristic {
            let _ = write!(line, " [{heuristic}]");
        }
        let _ = write!(line, ": {}", self.outcome.label());
        if self.is_found() {
            let _ = write!(
                line,
                " ({} steps, {} expanded)",
                self.path_length, self.expanded
            );
        } else {
            let _ = write!(line, " ({} expanded)", self.expanded);
        }
        line
    }

    /// Plain-text rendering: headline, explored grid and path coordinates.
    pub fn render_plain_text(&self, grid: &Grid, result: &PathResult) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "{}", self.headline());
        buffer.push_str(&render_layout(grid, result.path()));
        if let Some(route) = self.route_line() {
            let _ = writeln!(buffer, "{route}");
        }
        buffer
    }

    /// `(0,0) -> (1,0) -> ...` from the start to the target, or `None` when
    /// there is no path or the start is the target.
    pub fn route_line(&self) -> Option<String> {
        if !self.is_found() || self.path.is_empty() {
            return None;
        }
        let mut line = self.start.to_string();
        for position in &self.path {
            let _ = write!(line, " -> {position}");
        }
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::parse_layout;

    #[test]
    fn summary_reports_path_in_start_order() {
        let mut grid = parse_layout("S.T\n").unwrap();
        let mut finder = PathFinder::default();
        let (start, target) = (grid.start(), grid.target());
        let result = finder
            .search(SearchAlgorithm::Bfs, &mut grid, start, target)
            .unwrap();

        let summary = SearchSummary::from_search(&grid, &finder, SearchAlgorithm::Bfs, &result);
        assert_eq!(summary.outcome, SearchOutcome::Found);
        assert_eq!(summary.path, vec![Position::new(1, 0), Position::new(2, 0)]);
        assert_eq!(summary.path_length, 2);
        assert_eq!(summary.expanded, 3);
        assert_eq!(summary.heuristic, None);
        assert_eq!(summary.headline(), "bfs: path found (2 steps, 3 expanded)");
    }

    #[test]
    fn not_found_summary_serializes_outcome() {
        let mut grid = parse_layout("S#T\n").unwrap();
        let mut finder = PathFinder::default();
        let (start, target) = (grid.start(), grid.target());
        let result = finder
            .search(SearchAlgorithm::AStar, &mut grid, start, target)
            .unwrap();

        let summary = SearchSummary::from_search(&grid, &finder, SearchAlgorithm::AStar, &result);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["outcome"], "not_found");
        assert_eq!(json["algorithm"], "a-star");
        assert_eq!(json["heuristic"], "manhattan");
        assert_eq!(json["path_length"], 0);
        assert_eq!(json["walls"], 1);
    }

    #[test]
    fn plain_text_lists_the_route() {
        let mut grid = parse_layout("S.T\n").unwrap();
        let mut finder = PathFinder::default();
        let (start, target) = (grid.start(), grid.target());
        let result = finder
            .search(SearchAlgorithm::Dijkstra, &mut grid, start, target)
            .unwrap();
        let summary =
            SearchSummary::from_search(&grid, &finder, SearchAlgorithm::Dijkstra, &result);

        let text = summary.render_plain_text(&grid, &result);
        assert!(text.starts_with("dijkstra: path found"));
        assert!(text.contains("S*T\n"));
        assert!(text.contains("(0,0) -> (1,0) -> (2,0)"));
    }
}
