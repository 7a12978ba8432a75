//! Scenario providers for gridroute: where a route starts and ends.
//!
//! A [`ScenarioProvider`] picks a [`Scenario`] for a grid. Two are provided:
//! [`FixedScenario`] always returns the same pair, and [`RandomScenario`]
//! samples random passable endpoints by rejection sampling.

pub mod error;
pub mod presets;
pub mod scenario;

pub use error::ScenarioError;
pub use presets::{DELIVERY_END, DELIVERY_START, delivery_grid};
pub use scenario::{FixedScenario, RandomScenario, RandomScenarioConfig, Scenario, ScenarioProvider};
