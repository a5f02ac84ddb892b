//! `search` subcommand: one algorithm, drawn grid.

use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::info;

use gridpath_cli::output::{render_json, render_search_text, OutputFormat, SearchReport};
use gridpath_cli::terminal::ColorPalette;

use crate::commands::build_engine;
use crate::SearchArgs;

/// Exit status when the target cannot be reached.
pub const NOT_FOUND_EXIT_CODE: u8 = 2;

/// Handle the `search` subcommand.
///
/// Returns [`NOT_FOUND_EXIT_CODE`] when the search exhausts the grid
/// without reaching the target.
pub fn handle_search(args: &SearchArgs, format: OutputFormat) -> Result<ExitCode> {
    let mut engine = build_engine(&args.grid, args.algorithm, args.heuristic)?;
    let result = engine.search().context("search failed")?;
    let summary = engine.summary(&result);
    info!(
        algorithm = %summary.algorithm,
        outcome = summary.outcome.label(),
        expanded = summary.expanded,
        "search complete"
    );

    match format {
        OutputFormat::Json => {
            let report = SearchReport::new(&summary, engine.grid(), result.path());
            render_json(&report).context("failed to write JSON output")?;
        }
        OutputFormat::Text => {
            let palette = ColorPalette::detect();
            print!(
                "{}",
                render_search_text(&summary, engine.grid(), result.path(), &palette)
            );
        }
    }

    if result.is_found() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(NOT_FOUND_EXIT_CODE))
    }
}
