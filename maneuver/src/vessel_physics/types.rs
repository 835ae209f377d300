use serde::{Deserialize, Serialize};

use crate::math::{deg_to_rad, rad_to_deg, Vec2d, MPS_TO_KNOTS};
use crate::StartPose;

/// Range of the propulsion and lateral thruster commands (percent).
pub const THROTTLE_LIMIT_PCT: f64 = 100.0;

/// Target control inputs set from outside the core.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlCommands {
    /// Propulsion, -100..100 %.
    pub thrust: f64,
    /// Steering angle in degrees, ± the vessel's steer limit.
    /// Positive steering turns the bow toward increasing heading.
    pub steer_deg: f64,
    /// Lateral (bow) thruster, -100..100 %. Positive pushes to starboard.
    pub thruster: f64,
}

impl ControlCommands {
    /// Clamp every finite field into its declared range.
    pub fn clamped(self, steer_limit_deg: f64) -> Self {
        Self {
            thrust: self.thrust.clamp(-THROTTLE_LIMIT_PCT, THROTTLE_LIMIT_PCT),
            steer_deg: self.steer_deg.clamp(-steer_limit_deg, steer_limit_deg),
            thruster: self.thruster.clamp(-THROTTLE_LIMIT_PCT, THROTTLE_LIMIT_PCT),
        }
    }
}

/// Actual actuator output, trailing the commands through first-order lags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ActuatorState {
    pub thrust: f64,
    pub steer_deg: f64,
    pub thruster: f64,
}

/// Kinematic and control-lag state of the own ship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselState {
    /// Display units.
    pub position: Vec2d,
    /// Radians, world frame, 0 = +x.
    pub heading: f64,
    /// World-frame velocity in m/s.
    pub velocity: Vec2d,
    /// rad/s
    pub yaw_rate: f64,
    pub commands: ControlCommands,
    pub lagged: ActuatorState,
}

impl VesselState {
    /// Fresh state at a scenario start pose: at rest, all commands and lags zero.
    pub fn at_start(start: &StartPose) -> Self {
        Self {
            position: Vec2d::new(start.x, start.y),
            heading: deg_to_rad(start.heading_deg),
            velocity: Vec2d::ZERO,
            yaw_rate: 0.0,
            commands: ControlCommands::default(),
            lagged: ActuatorState::default(),
        }
    }

    pub fn speed_mps(&self) -> f64 { self.velocity.length() }

    /// Speed over ground in knots.
    pub fn sog_kts(&self) -> f64 { self.speed_mps() * MPS_TO_KNOTS }

    /// Rate of turn in degrees per minute.
    pub fn rate_of_turn_deg_min(&self) -> f64 { rad_to_deg(self.yaw_rate) * 60.0 }
}

/// Breakdown of one force-model evaluation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForceDebug {
    pub time: f64,
    pub mass: f64,
    pub inertia: f64,
    pub wind_kts: f64,
    // Water-relative velocity in body axes
    pub u: f64, // surge
    pub v: f64, // sway
    // Body-frame forces (x = surge, y = sway)
    pub f_propulsion: Vec2d,
    pub f_thruster: f64,
    pub f_drag: Vec2d,
    pub f_wind: Vec2d,
    pub f_bank: f64,
    pub f_squat: f64,
    pub f_body: Vec2d,
    pub f_world: Vec2d,
    // Yaw moments
    pub n_propulsion: f64,
    pub n_wind: f64,
    pub n_bank: f64,
    pub n_damping: f64,
    pub n_total: f64,
    pub bank_factor: f64,
    pub shallow_factor: f64,
}
