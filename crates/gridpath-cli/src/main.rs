mod commands;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use gridpath_cli::output::{print_footer, print_logo, OutputFormat};
use gridpath_lib::{Heuristic, Position, SearchAlgorithm};

use crate::commands::compare::handle_compare;
use crate::commands::search::handle_search;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Shortest paths on a grid with BFS, Dijkstra and A*"
)]
struct Cli {
    /// Output format.
    #[arg(
        long,
        value_enum,
        default_value_t = OutputFormat::Text,
        global = true
    )]
    format: OutputFormat,

    /// Suppress the banner printed before text output.
    #[arg(long, global = true)]
    no_logo: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search for a path with one algorithm and draw the explored grid.
    Search(SearchArgs),
    /// Run every algorithm on the same grid and compare the results.
    Compare(GridArgs),
}

/// Where the grid comes from and how it is decorated.
#[derive(Args, Debug, Clone)]
pub struct GridArgs {
    /// Text layout file (`.` open, `#` wall, `S` start, `T` target).
    #[arg(long, conflicts_with_all = ["columns", "rows"])]
    pub layout: Option<PathBuf>,

    /// JSON engine config (columns, rows, algorithm, heuristic).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of columns (default 25).
    #[arg(long)]
    pub columns: Option<usize>,

    /// Number of rows (default 25).
    #[arg(long)]
    pub rows: Option<usize>,

    /// Start cell as `x,y`.
    #[arg(long)]
    pub start: Option<Position>,

    /// Target cell as `x,y`.
    #[arg(long)]
    pub target: Option<Position>,

    /// Wall cell as `x,y`; repeat for more walls.
    #[arg(long = "wall")]
    pub walls: Vec<Position>,
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub grid: GridArgs,

    /// Search algorithm: bfs, dijkstra or a-star.
    #[arg(long)]
    pub algorithm: Option<SearchAlgorithm>,

    /// A* heuristic: manhattan or euclidean.
    #[arg(long)]
    pub heuristic: Option<Heuristic>,
}

fn main() -> Result<ExitCode> {
    init_tracing()?;
    let cli = Cli::parse();
    let started = Instant::now();

    let show_banner = cli.format.is_text() && !cli.no_logo;
    if show_banner {
        print_logo();
    }

    let code = match &cli.command {
        Command::Search(args) => handle_search(args, cli.format)?,
        Command::Compare(args) => handle_compare(args, cli.format)?,
    };

    if show_banner {
        print_footer(started.elapsed());
    }
    Ok(code)
}

fn init_tracing() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;
    Ok(())
}
