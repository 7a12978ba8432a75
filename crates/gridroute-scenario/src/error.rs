use std::fmt;

use gridroute_core::Coord;

/// Errors that can occur when choosing a scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioError {
    /// A fixed endpoint lies outside the grid.
    OutOfBounds { coord: Coord },
    /// The grid has no passable cell to sample from.
    NoPassableCells,
    /// Rejection sampling gave up without an acceptable pair.
    AttemptsExhausted { attempts: usize },
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { coord } => write!(f, "scenario: {coord} is outside the grid"),
            Self::NoPassableCells => write!(f, "scenario: grid has no passable cells"),
            Self::AttemptsExhausted { attempts } => {
                write!(f, "scenario: no acceptable start/end after {attempts} attempts")
            }
        }
    }
}

impl std::error::Error for ScenarioError {}
