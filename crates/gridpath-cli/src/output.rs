//! Output formatting for search results.
//!
//! Text renderings draw the explored grid with one colored glyph per cell;
//! JSON renderings serialize the library's [`SearchSummary`].

use std::fmt::Write as _;
use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use gridpath_lib::layout::classify_rows;
use gridpath_lib::{render_layout, Grid, Path, SearchSummary};

use crate::terminal::{colors, supports_color, supports_unicode, ColorPalette};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored grid and route summary.
    #[default]
    Text,
    /// Machine-readable JSON on stdout.
    Json,
}

impl OutputFormat {
    pub fn is_text(self) -> bool {
        self == OutputFormat::Text
    }
}

/// Print the CLI logo banner.
///
/// Uses box-drawing characters when the locale advertises UTF-8 and
/// respects `NO_COLOR` and `TERM=dumb`.
pub fn print_logo() {
    let (orange, cyan, reset) = if supports_color() {
        (colors::ORANGE, colors::CYAN, colors::RESET)
    } else {
        ("", "", "")
    };

    if supports_unicode() {
        println!(
            "{cyan}╭────────────────────────────────╮{reset}
{cyan}│{orange}  G R I D P A T H               {cyan}│{reset}
{cyan}│{orange}  shortest paths on a grid      {cyan}│{reset}
{cyan}╰────────────────────────────────╯{reset}"
        );
    } else {
        println!(
            "{orange}+--------------------------------+
|  GRIDPATH                      |
|  >> SHORTEST PATHS ON A GRID   |
+--------------------------------+{reset}"
        );
    }
}

/// Print the footer with elapsed time.
pub fn print_footer(elapsed: std::time::Duration) {
    let (gray, reset) = if supports_color() {
        (colors::GRAY, colors::RESET)
    } else {
        ("", "")
    };

    let elapsed_ms = elapsed.as_millis();
    let time_str = if elapsed_ms < 1000 {
        format!("{elapsed_ms}ms")
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    };

    println!("\n{gray}Completed in {time_str}{reset}");
}

/// Draw the grid one line per row. With a plain palette the result is
/// identical to [`render_layout`].
pub fn render_grid(grid: &Grid, path: Option<&Path>, palette: &ColorPalette) -> String {
    if palette.is_plain() {
        return render_layout(grid, path);
    }

    let mut out = String::new();
    for row in classify_rows(grid, path) {
        for state in row {
            let color = palette.for_state(state);
            if color.is_empty() {
                out.push(state.glyph());
            } else {
                let _ = write!(out, "{}{}{}", color, state.glyph(), palette.reset);
            }
        }
        out.push('\n');
    }
    out
}

/// Headline, explored grid and route for a single search.
pub fn render_search_text(
    summary: &SearchSummary,
    grid: &Grid,
    path: Option<&Path>,
    palette: &ColorPalette,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}{}{}",
        palette.white_bold,
        summary.headline(),
        palette.reset
    );
    out.push_str(&render_grid(grid, path, palette));
    if let Some(route) = summary.route_line() {
        let _ = writeln!(out, "\nRoute: {route}");
    }
    out
}

/// JSON document for `search`: the summary plus the rendered layout rows.
#[derive(Debug, Serialize)]
pub struct SearchReport<'a> {
    #[serde(flatten)]
    pub summary: &'a SearchSummary,
    pub layout: Vec<String>,
}

impl<'a> SearchReport<'a> {
    pub fn new(summary: &'a SearchSummary, grid: &Grid, path: Option<&Path>) -> Self {
        let layout = render_layout(grid, path)
            .lines()
            .map(str::to_string)
            .collect();
        Self { summary, layout }
    }
}

/// Side-by-side table for `compare`.
pub fn render_comparison_table(summaries: &[SearchSummary], palette: &ColorPalette) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}{:<10} {:<10} {:<14} {:>6} {:>9} {:>7}{}",
        palette.white_bold,
        "algorithm",
        "heuristic",
        "outcome",
        "length",
        "expanded",
        "queued",
        palette.reset
    );
    let _ = writeln!(out, "{}{}{}", palette.gray, "-".repeat(61), palette.reset);
    for summary in summaries {
        let heuristic = summary
            .heuristic
            .map(|heuristic| heuristic.to_string())
            .unwrap_or_else(|| "-".to_string());
        let length = if summary.is_found() {
            summary.path_length.to_string()
        } else {
            "-".to_string()
        };
        let _ = writeln!(
            out,
            "{:<10} {:<10} {:<14} {:>6} {:>9} {:>7}",
            summary.algorithm.to_string(),
            heuristic,
            summary.outcome.label(),
            length,
            summary.expanded,
            summary.queued
        );
    }
    out
}

/// Write `value` to stdout as pretty JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}
