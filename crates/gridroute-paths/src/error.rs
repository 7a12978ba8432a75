use std::fmt;

use gridroute_core::Coord;

/// Which end of a search request an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

/// Errors returned by a path search.
///
/// An unreachable goal is not an error: searches report it as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// An endpoint lies outside the grid.
    OutOfBounds {
        endpoint: Endpoint,
        coord: Coord,
        height: usize,
        width: usize,
    },
    /// The configured expansion limit was reached before the search finished.
    ExpansionLimit { limit: usize },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                endpoint,
                coord,
                height,
                width,
            } => write!(
                f,
                "{endpoint} {coord} is outside the {height}x{width} grid"
            ),
            Self::ExpansionLimit { limit } => {
                write!(f, "search gave up after expanding {limit} cells")
            }
        }
    }
}

impl std::error::Error for PathError {}
