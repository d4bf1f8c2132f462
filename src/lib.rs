//! Spirit Garden Engine
//!
//! Ambient animation core for the memorial-garden frontend: a population of
//! autonomous butterfly agents that wander, land, take off, and drift across
//! a 2D viewport. The engine owns agent state and motion only; rendering,
//! storage, and page chrome are external collaborators that feed it record
//! lists and read back poses.
//!
//! Two components make up the core:
//!
//! - [`garden::population::Population`] derives agent state from externally
//!   owned records and keeps it authoritative.
//! - [`garden::sim_loop::Integrator`] advances every agent's state machine at
//!   a fixed physics rate and notifies observers at a throttled cadence.

pub mod config;
pub mod error;
pub mod garden;
pub mod util;

pub use config::EngineConfig;
pub use error::EngineError;
pub use garden::population::{Population, SharedPopulation};
pub use garden::record::AgentRecord;
pub use garden::sim_loop::Integrator;
pub use garden::state::{Butterfly, Phase, Viewport};
