//! **gridroute-core**: the grid model shared by the *gridroute* crates.
//!
//! This crate provides the foundational types used across the workspace:
//! [`Coord`] cell coordinates, the [`Cell`] occupancy value and the
//! immutable [`OccupancyGrid`] that searches run over.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::Coord;
pub use grid::{Cell, MAX_SIDE, OccupancyGrid};
