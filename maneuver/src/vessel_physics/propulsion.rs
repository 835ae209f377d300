use crate::math::deg_to_rad;
use crate::{AzipodSpec, PropulsionSpec, RudderSpec};

use super::types::ActuatorState;

/// Body-frame output of the main propulsor.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PropulsorOutput {
    pub surge_n: f64,
    pub sway_n: f64,
    pub yaw_nm: f64,
}

/// Main propulsion strategy. Implementations must be pure.
pub trait PropulsionModel {
    /// Force and moment from the lagged actuators at the given water-relative surge speed.
    fn output(&self, actuators: &ActuatorState, surge_mps: f64, length_m: f64) -> PropulsorOutput;
}

impl PropulsionModel for AzipodSpec {
    fn output(&self, actuators: &ActuatorState, _surge_mps: f64, length_m: f64) -> PropulsorOutput {
        let force = actuators.thrust * self.thrust_per_pct;
        let (s, c) = deg_to_rad(actuators.steer_deg).sin_cos();
        let sway_n = s * force;
        PropulsorOutput {
            surge_n: c * force,
            sway_n,
            yaw_nm: sway_n * length_m * self.lever_arm_factor,
        }
    }
}

impl PropulsionModel for RudderSpec {
    fn output(&self, actuators: &ActuatorState, surge_mps: f64, length_m: f64) -> PropulsorOutput {
        // No flow past the blade, no steering
        let gate = (surge_mps / self.gate_speed_mps).clamp(-1.0, 1.0);
        let rudder_n = gate * actuators.steer_deg * self.rudder_per_deg;
        PropulsorOutput {
            surge_n: actuators.thrust * self.thrust_per_pct,
            sway_n: rudder_n,
            yaw_nm: rudder_n * length_m * self.lever_arm_factor,
        }
    }
}

impl PropulsionSpec {
    pub fn model(&self) -> &dyn PropulsionModel {
        match self {
            PropulsionSpec::Azipod(a) => a,
            PropulsionSpec::Rudder(r) => r,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn azipod() -> AzipodSpec { AzipodSpec { thrust_per_pct: 1000.0, lever_arm_factor: 0.35 } }

    fn rudder() -> RudderSpec {
        RudderSpec { thrust_per_pct: 1000.0, rudder_per_deg: 50.0, gate_speed_mps: 3.5, lever_arm_factor: 0.45 }
    }

    #[test]
    fn azipod_straight_ahead_has_no_side_force() {
        let out = azipod().output(&ActuatorState { thrust: 50.0, steer_deg: 0.0, thruster: 0.0 }, 0.0, 100.0);
        assert!((out.surge_n - 50_000.0).abs() < 1e-9);
        assert!(out.sway_n.abs() < 1e-9 && out.yaw_nm.abs() < 1e-9);
    }

    #[test]
    fn azipod_steers_even_when_stopped() {
        let out = azipod().output(&ActuatorState { thrust: 50.0, steer_deg: 30.0, thruster: 0.0 }, 0.0, 100.0);
        assert!((out.sway_n - 25_000.0).abs() < 1e-6);
        assert!((out.yaw_nm - 25_000.0 * 35.0).abs() < 1e-3);
    }

    #[test]
    fn rudder_is_speed_gated() {
        let act = ActuatorState { thrust: 0.0, steer_deg: 20.0, thruster: 0.0 };
        let stopped = rudder().output(&act, 0.0, 100.0);
        assert_eq!(stopped.sway_n, 0.0);
        assert_eq!(stopped.yaw_nm, 0.0);

        let slow = rudder().output(&act, 1.75, 100.0);
        assert!((slow.sway_n - 0.5 * 20.0 * 50.0).abs() < 1e-9);

        // Saturates at the gate speed
        let fast = rudder().output(&act, 10.0, 100.0);
        assert!((fast.sway_n - 20.0 * 50.0).abs() < 1e-9);
        assert!((fast.yaw_nm - 1000.0 * 45.0).abs() < 1e-9);
    }

    #[test]
    fn rudder_flips_when_going_astern() {
        let act = ActuatorState { thrust: -20.0, steer_deg: 20.0, thruster: 0.0 };
        let out = rudder().output(&act, -3.5, 100.0);
        assert!(out.sway_n < 0.0);
        assert!((out.surge_n + 20_000.0).abs() < 1e-9);
    }

    #[test]
    fn spec_dispatches_to_its_strategy() {
        let act = ActuatorState { thrust: 10.0, steer_deg: 10.0, thruster: 0.0 };
        let a = PropulsionSpec::Azipod(azipod()).model().output(&act, 0.0, 100.0);
        let r = PropulsionSpec::Rudder(rudder()).model().output(&act, 0.0, 100.0);
        assert!(a.sway_n > 0.0);
        assert_eq!(r.sway_n, 0.0);
    }
}
