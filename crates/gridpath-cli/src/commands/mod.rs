//! Subcommand handlers. `main.rs` parses arguments and dispatches here.

pub mod compare;
pub mod search;

use std::fs;

use anyhow::{Context, Result};
use tracing::debug;

use gridpath_lib::{parse_layout, Engine, EngineConfig, Grid, Heuristic, SearchAlgorithm};

use crate::GridArgs;

/// Build an engine from the grid arguments.
///
/// Flags take precedence over the config file, which takes precedence over
/// the defaults. Roles are applied start first, then target, then walls.
pub fn build_engine(
    args: &GridArgs,
    algorithm: Option<SearchAlgorithm>,
    heuristic: Option<Heuristic>,
) -> Result<Engine> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::from_path(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(columns) = args.columns {
        config.columns = columns;
    }
    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    if let Some(algorithm) = algorithm {
        config.algorithm = algorithm;
    }
    if let Some(heuristic) = heuristic {
        config.heuristic = heuristic;
    }

    let mut engine = match &args.layout {
        Some(path) => {
            let grid = load_layout(path)?;
            Engine::with_grid(grid, config.algorithm, config.heuristic)
        }
        None => Engine::new(&config).context("failed to create grid")?,
    };

    if let Some(start) = args.start {
        engine
            .set_start_at(start)
            .with_context(|| format!("failed to place the start at {start}"))?;
    }
    if let Some(target) = args.target {
        engine
            .set_target_at(target)
            .with_context(|| format!("failed to place the target at {target}"))?;
    }
    for wall in &args.walls {
        engine
            .set_wall_at(*wall)
            .with_context(|| format!("failed to place a wall at {wall}"))?;
    }

    debug!(
        columns = engine.grid().columns(),
        rows = engine.grid().rows(),
        walls = engine.grid().walls().count(),
        "grid ready"
    );
    Ok(engine)
}

fn load_layout(path: &std::path::Path) -> Result<Grid> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read layout {}", path.display()))?;
    parse_layout(&text).with_context(|| format!("failed to parse layout {}", path.display()))
}
