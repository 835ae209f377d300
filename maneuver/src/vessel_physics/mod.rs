mod types;
mod environment;
mod propulsion;
mod terms;
mod forces;
mod dynamics;
pub mod docking;

pub use types::{ActuatorState, ControlCommands, ForceDebug, VesselState, THROTTLE_LIMIT_PCT};
pub use environment::{effective_wind_kts, sample_environment, EnvironmentSample, GUST_RATE};
pub use propulsion::{PropulsionModel, PropulsorOutput};
pub use forces::{compute_accelerations, compute_accelerations_dbg, Accelerations};
pub use dynamics::{
    advance_actuators, predict_track, step_vessel, step_vessel_dbg, validate_dt, PredictionSpec, MAX_DT,
};
pub use docking::{DockingEvaluator, DockingPhase, DockingResult, ScoreBreakdown};
