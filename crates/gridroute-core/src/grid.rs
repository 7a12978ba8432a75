//! The [`OccupancyGrid`] type: a fixed-size 2D map of passable and blocked
//! [`Cell`]s.
//!
//! Unlike a view over shared storage, an occupancy grid owns its cells and is
//! immutable once built. It is `Send + Sync`, so a single grid can be handed
//! to several searches running on different threads.

use std::fmt;

use crate::error::GridError;
use crate::geom::Coord;

/// An occupancy value. `Cell(0)` is passable, anything else is an obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell(pub u8);

impl Cell {
    /// A passable cell.
    pub const FREE: Cell = Cell(0);
    /// An obstacle.
    pub const BLOCKED: Cell = Cell(1);

    /// Get the underlying value.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Whether the cell can be entered.
    #[inline]
    pub const fn is_passable(self) -> bool {
        self.0 == 0
    }
}

impl From<u8> for Cell {
    fn from(v: u8) -> Self {
        Self(v)
    }
}

impl From<Cell> for u8 {
    fn from(c: Cell) -> Self {
        c.0
    }
}

/// Largest height or width a grid may have, so every cell has an `i32`
/// [`Coord`].
pub const MAX_SIDE: usize = i32::MAX as usize;

fn check_size(height: usize, width: usize) -> Result<(), GridError> {
    if height == 0 || width == 0 {
        return Err(GridError::Empty);
    }
    if height > MAX_SIDE || width > MAX_SIDE || height.checked_mul(width).is_none() {
        return Err(GridError::TooLarge { height, width });
    }
    Ok(())
}

/// A rectangular, non-empty grid of [`Cell`]s stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    cells: Vec<Cell>,
    height: usize,
    width: usize,
}

impl OccupancyGrid {
    /// Create an all-passable grid with `height` rows and `width` columns.
    pub fn new(height: usize, width: usize) -> Result<Self, GridError> {
        check_size(height, width)?;
        Ok(Self {
            cells: vec![Cell::FREE; height * width],
            height,
            width,
        })
    }

    /// Build a grid from a list of rows, e.g. a literal map.
    ///
    /// Every row must have the same, non-zero length, and neither side may
    /// exceed [`MAX_SIDE`].
    pub fn from_rows<R, C>(rows: R) -> Result<Self, GridError>
    where
        R: IntoIterator<Item = C>,
        C: AsRef<[u8]>,
    {
        let mut cells = Vec::new();
        let mut height = 0;
        let mut width = 0;
        for (i, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            if i == 0 {
                width = row.len();
            } else if row.len() != width {
                return Err(GridError::Ragged {
                    row: i,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend(row.iter().copied().map(Cell));
            height += 1;
        }
        check_size(height, width)?;
        Ok(Self {
            cells,
            height,
            width,
        })
    }

    /// Parse a grid from text, one line per row.
    ///
    /// `.` and `0` are passable, `#` and `1` are obstacles. Leading and
    /// trailing whitespace of the whole string is trimmed, as is trailing
    /// whitespace (such as `\r`) of each line.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let mut rows = Vec::new();
        for (row, line) in s.trim().lines().enumerate() {
            let line = line.trim_end();
            let mut cells: Vec<u8> = Vec::with_capacity(line.len());
            for (col, ch) in line.chars().enumerate() {
                let v = match ch {
                    '.' | '0' => 0,
                    '#' | '1' => 1,
                    _ => return Err(GridError::InvalidChar { ch, row, col }),
                };
                cells.push(v);
            }
            rows.push(cells);
        }
        Self::from_rows(rows)
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.index(c).is_some()
    }

    /// Flat row-major index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, c: Coord) -> Option<usize> {
        if c.row < 0 || c.col < 0 {
            return None;
        }
        let (r, col) = (c.row as usize, c.col as usize);
        if r >= self.height || col >= self.width {
            return None;
        }
        Some(r * self.width + col)
    }

    /// Convert a flat index back to a coordinate. Lossless for indices below
    /// [`len`](Self::len), since both sides are at most [`MAX_SIDE`].
    #[inline]
    pub fn coord(&self, idx: usize) -> Coord {
        Coord::new((idx / self.width) as i32, (idx % self.width) as i32)
    }

    /// Get the cell at `c`, or `None` if out of bounds.
    pub fn at(&self, c: Coord) -> Option<Cell> {
        self.index(c).map(|i| self.cells[i])
    }

    /// Whether `c` is in bounds and passable.
    #[inline]
    pub fn is_passable(&self, c: Coord) -> bool {
        self.at(c).is_some_and(Cell::is_passable)
    }

    /// Count of passable cells.
    pub fn passable_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_passable()).count()
    }

    /// Iterate over `(Coord, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Coord, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (self.coord(i), cell))
    }

    /// Iterate over the rows as cell slices.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.width)
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let ch = if cell.is_passable() { '.' } else { '#' };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
