use thiserror::Error;

/// Failures surfaced by the physics core. All of them are caller or
/// configuration errors; nothing here is transient.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("invalid time step {dt}s (must be finite, > 0 and <= {max}s)")]
    InvalidTimeStep { dt: f64, max: f64 },
    #[error("invalid {name} command: {value}")]
    InvalidCommand { name: &'static str, value: f64 },
    #[error("invalid scenario: {0}")]
    InvalidScenario(String),
}

pub type SimResult<T> = Result<T, SimError>;
