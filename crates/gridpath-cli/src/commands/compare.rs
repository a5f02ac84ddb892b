//! `compare` subcommand: every algorithm on the same grid.

use std::process::ExitCode;

use anyhow::{Context, Result};

use gridpath_cli::output::{render_comparison_table, render_json, OutputFormat};
use gridpath_cli::terminal::ColorPalette;
use gridpath_lib::SearchAlgorithm;

use crate::commands::build_engine;
use crate::GridArgs;

/// Handle the `compare` subcommand.
pub fn handle_compare(args: &GridArgs, format: OutputFormat) -> Result<ExitCode> {
    let mut engine = build_engine(args, None, None)?;

    let mut summaries = Vec::with_capacity(SearchAlgorithm::ALL.len());
    for algorithm in SearchAlgorithm::ALL {
        engine.set_algorithm(algorithm);
        let result = engine
            .search()
            .with_context(|| format!("{algorithm} search failed"))?;
        summaries.push(engine.summary(&result));
    }

    match format {
        OutputFormat::Json => render_json(&summaries).context("failed to write JSON output")?,
        OutputFormat::Text => {
            print!(
                "{}",
                render_comparison_table(&summaries, &ColorPalette::detect())
            );
        }
    }
    Ok(ExitCode::SUCCESS)
}
