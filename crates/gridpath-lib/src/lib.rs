//! gridpath library entry points.
//!
//! This crate models a fixed rectangular grid of cells with a start, an
//! optional target and walls, and runs shortest-path searches over it
//! (breadth-first search, Dijkstra and A*). Searches record their progress
//! in each cell so hosts can display what was explored. Higher-level
//! consumers (the CLI) should only depend on the items exported here.
//!

#![deny(warnings)]

pub mod config;
pub mod engine;
pub mod error;
pub mod finder;
pub mod grid;
pub mod heuristic;
pub mod layout;
pub mod output;
pub mod path;

pub use config::EngineConfig;
pub use engine::Engine;
pub use error::{Error, Result};
pub use finder::{PathFinder, PathResult, SearchAlgorithm};
pub use grid::{Cell, CellId, Grid, Position, SearchState, DEFAULT_COLUMNS, DEFAULT_ROWS};
pub use heuristic::Heuristic;
pub use layout::{classify, parse_layout, render_layout, CellState};
pub use output::{SearchOutcome, SearchSummary};
pub use path::{reconstruct_path, Path, SearchRun, SearchStatus};
