//! gridpath CLI library.
//!
//! Terminal styling and output formatting shared by the `gridpath-cli`
//! subcommands.

pub mod output;
pub mod terminal;
