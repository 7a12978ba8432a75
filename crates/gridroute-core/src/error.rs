use std::fmt;

/// Errors that can occur when building an [`OccupancyGrid`](crate::OccupancyGrid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The grid has no rows or no columns.
    Empty,
    /// A row's length differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A side is longer than [`MAX_SIDE`](crate::grid::MAX_SIDE), or the
    /// cell count overflows `usize`.
    TooLarge { height: usize, width: usize },
    /// A character in a text map is neither passable nor an obstacle.
    InvalidChar { ch: char, row: usize, col: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no rows or no columns"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} cells, expected {expected}"
            ),
            Self::TooLarge { height, width } => {
                write!(f, "grid: {height}x{width} is too large")
            }
            Self::InvalidChar { ch, row, col } => {
                write!(
                    f,
                    "grid contains invalid character \u{201c}{ch}\u{201d} at ({row}, {col})"
                )
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e = GridError::Ragged {
            row: 2,
            expected: 4,
            found: 3,
        };
        assert_eq!(e.to_string(), "grid: row 2 has 3 cells, expected 4");
        let e = GridError::InvalidChar {
            ch: '?',
            row: 0,
            col: 1,
        };
        assert!(e.to_string().contains("(0, 1)"));
    }
}
