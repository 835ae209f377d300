use tracing::debug;

use super::docking::DockingEvaluator;
use super::forces::{compute_accelerations, compute_accelerations_dbg, Accelerations};
use super::types::{ActuatorState, ControlCommands, ForceDebug, VesselState};
use crate::error::{SimError, SimResult};
use crate::math::Vec2d;
use crate::{ActuatorRates, ScenarioSpec, VesselSpec};

/// Largest time step the integrator accepts (s).
pub const MAX_DT: f64 = 0.05;

/// Reject time steps that are not finite, not positive, or above `MAX_DT`.
pub fn validate_dt(dt: f64) -> SimResult<()> {
    if dt.is_finite() && dt > 0.0 && dt <= MAX_DT {
        Ok(())
    } else {
        Err(SimError::InvalidTimeStep { dt, max: MAX_DT })
    }
}

/// Exponential approach of each actuator toward its command.
/// With `rate * dt <= 1` a lag never passes its command.
pub fn advance_actuators(lagged: &mut ActuatorState, commands: &ControlCommands, rates: &ActuatorRates, dt: f64) {
    lagged.thrust += (commands.thrust - lagged.thrust) * dt * rates.thrust;
    lagged.steer_deg += (commands.steer_deg - lagged.steer_deg) * dt * rates.steer;
    lagged.thruster += (commands.thruster - lagged.thruster) * dt * rates.thruster;
}

/// Semi-implicit Euler: rates first, then pose from the updated rates.
pub(crate) fn advance_kinematics(state: &mut VesselState, acc: &Accelerations, dt: f64, px_per_m: f64) {
    state.velocity += acc.linear * dt;
    state.yaw_rate += acc.yaw * dt;
    state.position += state.velocity * (dt * px_per_m);
    state.heading += state.yaw_rate * dt;
}

/// Advance the own ship by one step and run the docking check.
/// See `step_vessel_dbg` for the force breakdown.
pub fn step_vessel(
    scenario: &ScenarioSpec,
    vessel: &VesselSpec,
    state: &mut VesselState,
    docking: &mut DockingEvaluator,
    dt: f64,
    time: f64,
) -> SimResult<Accelerations> {
    step_vessel_dbg(scenario, vessel, state, docking, dt, time, None)
}

/// Variant of `step_vessel` that fills out an optional force breakdown.
pub fn step_vessel_dbg(
    scenario: &ScenarioSpec,
    vessel: &VesselSpec,
    state: &mut VesselState,
    docking: &mut DockingEvaluator,
    dt: f64,
    time: f64,
    dbg: Option<&mut ForceDebug>,
) -> SimResult<Accelerations> {
    if let Err(e) = validate_dt(dt) {
        debug!(dt, "rejected time step");
        return Err(e);
    }

    let commands = state.commands;
    advance_actuators(&mut state.lagged, &commands, &vessel.lag, dt);

    let acc = match dbg {
        Some(d) => compute_accelerations_dbg(state, vessel, scenario, time, Some(d)),
        None => compute_accelerations(state, vessel, scenario, time),
    };
    advance_kinematics(state, &acc, dt, scenario.world.px_per_m);

    state.velocity *= vessel.velocity_retention;

    let w = &scenario.world;
    state.position.x = state.position.x.clamp(w.min_x(), w.max_x());
    state.position.y = state.position.y.clamp(w.min_y(), w.max_y());

    let speed = state.speed_mps();
    docking.evaluate(scenario, state, speed);
    Ok(acc)
}

/// Look-ahead settings for the predicted track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionSpec {
    pub steps: usize,
    pub dt: f64,
}

impl Default for PredictionSpec {
    fn default() -> Self { Self { steps: 45, dt: 0.4 } }
}

/// Project the current state forward on a scratch copy, holding the actuators
/// where they are. Returns the current position followed by one point per step.
pub fn predict_track(
    scenario: &ScenarioSpec,
    vessel: &VesselSpec,
    state: &VesselState,
    time: f64,
    prediction: PredictionSpec,
) -> Vec<Vec2d> {
    let mut scratch = state.clone();
    let mut track = Vec::with_capacity(prediction.steps + 1);
    track.push(scratch.position);
    for i in 0..prediction.steps {
        let t = time + i as f64 * prediction.dt;
        let acc = compute_accelerations(&scratch, vessel, scenario, t);
        advance_kinematics(&mut scratch, &acc, prediction.dt, scenario.world.px_per_m);
        track.push(scratch.position);
    }
    track
}
