//! Distance estimates used to order the A* frontier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::grid::Position;

/// Estimate of the remaining cost from a cell to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heuristic {
    /// `|dx| + |dy|`. Exact on an open 4-connected grid and never
    /// overestimates with walls present, so A* paths are shortest paths.
    #[default]
    Manhattan,
    /// Straight-line distance. Alternate estimate kept for comparison; the
    /// shortest-path guarantee is only made for [`Heuristic::Manhattan`].
    Euclidean,
}

impl Heuristic {
    pub fn estimate(self, from: Position, to: Position) -> f64 {
        match self {
            Heuristic::Manhattan => from.manhattan_distance(&to) as f64,
            Heuristic::Euclidean => from.euclidean_distance(&to),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Heuristic::Manhattan => "manhattan",
            Heuristic::Euclidean => "euclidean",
        };
        f.write_str(value)
    }
}

impl FromStr for Heuristic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manhattan" | "taxicab" => Ok(Heuristic::Manhattan),
            "euclidean" => Ok(Heuristic::Euclidean),
            _ => Err(Error::UnknownHeuristic {
                name: s.to_string(),
            }),
        }
    }
}
