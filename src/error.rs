use thiserror::Error;

/// Engine-level errors. Steady-state ticking never fails; these cover
/// configuration and loop lifecycle misuse only.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("simulation loop is already running")]
    AlreadyRunning,
}
