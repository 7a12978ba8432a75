//! Shortest-path search on occupancy grids.
//!
//! This crate finds minimum-cost routes between two cells of an
//! [`OccupancyGrid`](gridroute_core::OccupancyGrid), moving in 8 directions
//! with Euclidean step costs (1 orthogonal, √2 diagonal):
//!
//! - **A\*** search with a lazy-deletion open list ([`PathFinder::find_path`],
//!   or the [`find_path`] shorthand)
//! - **Flood fill** reachability ([`reachable`], [`connected`])
//!
//! Every search owns its state and leaves its inputs untouched. An
//! unreachable goal is reported as `Ok(None)`; [`PathError`] is reserved for
//! invalid requests and the optional expansion limit.

mod astar;
mod config;
mod error;
mod heuristic;
mod neighbors;
mod node;
mod path;
mod reach;

pub use astar::{PathFinder, Search, SearchStats, find_path};
pub use config::{PathFinderConfig, TieBreak};
pub use error::{Endpoint, PathError};
pub use heuristic::euclidean;
pub use neighbors::Neighbors;
pub use path::{Path, path_cost};
pub use reach::{connected, reachable};
