//! Harbour-approach physics core.
//!
//! This crate intentionally avoids any rendering or windowing types. It exposes
//! serializable scenario and vessel schemas, a deterministic 3-DOF force model
//! and a `Simulation` context that a frame driver or a headless runner can step.

mod math;
pub use math::{Vec2d, KNOTS_TO_MPS, MPS_TO_KNOTS};
mod error;
pub use error::{SimError, SimResult};
mod spec;
pub use spec::{BerthSpec, CurrentSpec, ScenarioSpec, StartPose, TrafficSpec, WindSpec, WorldSpec};

pub mod builtins;

pub mod vessel_physics;
pub use vessel_physics::{
    compute_accelerations, predict_track, step_vessel, step_vessel_dbg, Accelerations, ActuatorState,
    ControlCommands, DockingEvaluator, DockingPhase, DockingResult, ForceDebug, PredictionSpec, ScoreBreakdown,
    VesselState, MAX_DT,
};

mod vessel_specs;
pub use vessel_specs::{
    ActuatorRates, AzipodSpec, BankSuctionSpec, PropulsionSpec, RudderSpec, ShallowWaterSpec, VesselSpec,
    MIN_VELOCITY_RETENTION,
};
pub use vessel_specs::vesselspecs;

mod traffic;
pub use traffic::{advance_traffic, TrafficVessel, TRAFFIC_BORDER};
mod snapshot;
pub use snapshot::Snapshot;
mod simulation;
pub use simulation::Simulation;
