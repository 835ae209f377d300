use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};
use crate::vessel_physics::MAX_DT;

/// Steerable pod: the thrust vector itself is rotated by the steering angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AzipodSpec {
    /// Newtons per percent of throttle.
    pub thrust_per_pct: f64,
    /// Lever arm of the pod's side force, as a fraction of hull length.
    pub lever_arm_factor: f64,
}

/// Fixed propeller plus a rudder whose side force needs water flowing past it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RudderSpec {
    pub thrust_per_pct: f64,
    /// Newtons of side force per degree of rudder at full authority.
    pub rudder_per_deg: f64,
    /// Surge speed (m/s) at which the rudder reaches full authority.
    pub gate_speed_mps: f64,
    pub lever_arm_factor: f64,
}

/// Main propulsor topology. One is picked per vessel configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PropulsionSpec {
    Azipod(AzipodSpec),
    Rudder(RudderSpec),
}

/// First-order lag rates (1/s) for each actuator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActuatorRates {
    pub thrust: f64,
    pub steer: f64,
    pub thruster: f64,
}

/// Close-quarters interaction with the quay next to the berth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BankSuctionSpec {
    /// Pier reference x = berth.x + pier_offset (display units).
    pub pier_offset: f64,
    /// Proximity falls to zero at this distance (display units).
    pub range: f64,
    /// Distances below this are treated as this value.
    pub min_distance: f64,
    pub sway_force_n: f64,
    pub yaw_moment_nm: f64,
}

/// Extra surge drag as the hull approaches the shallows along the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShallowWaterSpec {
    pub gain: f64,
    pub drag_coefficient: f64,
}

impl Default for BankSuctionSpec {
    fn default() -> Self {
        Self { pier_offset: 140.0, range: 280.0, min_distance: 20.0, sway_force_n: -62_000.0, yaw_moment_nm: -3.4e7 }
    }
}

impl Default for ShallowWaterSpec {
    fn default() -> Self { Self { gain: 0.2, drag_coefficient: 25_000.0 } }
}

/// Smallest accepted per-step velocity retention.
pub const MIN_VELOCITY_RETENTION: f64 = 0.999;

/// Hull and actuator parameters for a specific vessel class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselSpec {
    pub name: String,
    pub length_m: f64,
    pub beam_m: f64,
    pub draft_m: f64,
    pub displacement_t: f64,
    /// Radius of gyration as a fraction of length (yaw inertia = m·(L·k)²).
    pub gyration_factor: f64,
    pub propulsion: PropulsionSpec,
    /// Newtons per percent of lateral thruster command.
    pub thruster_per_pct: f64,
    pub drag_surge: f64,
    pub drag_sway: f64,
    pub wind_lateral_height_factor: f64,
    pub wind_lateral_shape: f64,
    pub wind_longitudinal_height_factor: f64,
    pub wind_longitudinal_shape: f64,
    /// Lever arm of the lateral wind force, as a fraction of hull length.
    pub wind_lever_factor: f64,
    pub yaw_damping: f64,
    pub lag: ActuatorRates,
    pub steer_limit_deg: f64,
    #[serde(default)]
    pub bank_suction: Option<BankSuctionSpec>,
    #[serde(default)]
    pub shallow_water: Option<ShallowWaterSpec>,
    /// Per-step multiplicative velocity retention (residual losses).
    pub velocity_retention: f64,
}

impl VesselSpec {
    pub fn mass_kg(&self) -> f64 { self.displacement_t * 1000.0 }

    pub fn yaw_inertia(&self) -> f64 {
        let r = self.length_m * self.gyration_factor;
        self.mass_kg() * r * r
    }

    pub fn validate(&self) -> SimResult<()> {
        let bad = |msg: String| Err(SimError::InvalidScenario(format!("vessel '{}': {msg}", self.name)));

        let (thrust_per_pct, lever_arm_factor) = match &self.propulsion {
            PropulsionSpec::Azipod(a) => (a.thrust_per_pct, a.lever_arm_factor),
            PropulsionSpec::Rudder(r) => (r.thrust_per_pct, r.lever_arm_factor),
        };
        let mut positive = vec![
            ("length_m", self.length_m),
            ("beam_m", self.beam_m),
            ("draft_m", self.draft_m),
            ("displacement_t", self.displacement_t),
            ("gyration_factor", self.gyration_factor),
            ("thrust_per_pct", thrust_per_pct),
            ("lever_arm_factor", lever_arm_factor),
            ("thruster_per_pct", self.thruster_per_pct),
            ("drag_surge", self.drag_surge),
            ("drag_sway", self.drag_sway),
            ("wind_lever_factor", self.wind_lever_factor),
            ("yaw_damping", self.yaw_damping),
            ("steer_limit_deg", self.steer_limit_deg),
        ];
        if let PropulsionSpec::Rudder(rudder) = &self.propulsion {
            positive.push(("rudder_per_deg", rudder.rudder_per_deg));
            positive.push(("gate_speed_mps", rudder.gate_speed_mps));
        }
        for (name, v) in positive {
            if !(v.is_finite() && v > 0.0) {
                return bad(format!("{name} must be positive, got {v}"));
            }
        }

        // Windage may be zero (no superstructure) but never negative
        let mut non_negative = vec![
            ("wind_lateral_height_factor", self.wind_lateral_height_factor),
            ("wind_lateral_shape", self.wind_lateral_shape),
            ("wind_longitudinal_height_factor", self.wind_longitudinal_height_factor),
            ("wind_longitudinal_shape", self.wind_longitudinal_shape),
        ];
        if let Some(shallow) = &self.shallow_water {
            non_negative.push(("shallow_water.gain", shallow.gain));
            non_negative.push(("shallow_water.drag_coefficient", shallow.drag_coefficient));
        }
        if let Some(bank) = &self.bank_suction {
            non_negative.push(("bank_suction.min_distance", bank.min_distance));
        }
        for (name, v) in non_negative {
            if !(v.is_finite() && v >= 0.0) {
                return bad(format!("{name} must be >= 0, got {v}"));
            }
        }

        if let Some(bank) = &self.bank_suction {
            if !(bank.range.is_finite() && bank.range > 0.0) {
                return bad(format!("bank suction range must be positive, got {}", bank.range));
            }
            for (name, v) in [
                ("pier_offset", bank.pier_offset),
                ("sway_force_n", bank.sway_force_n),
                ("yaw_moment_nm", bank.yaw_moment_nm),
            ] {
                if !v.is_finite() {
                    return bad(format!("bank_suction.{name} must be finite, got {v}"));
                }
            }
        }

        // Residual loss stays below 0.1 % per step
        if !(self.velocity_retention >= MIN_VELOCITY_RETENTION && self.velocity_retention <= 1.0) {
            return bad(format!(
                "velocity_retention must lie in [{MIN_VELOCITY_RETENTION}, 1], got {}",
                self.velocity_retention
            ));
        }
        for (name, rate) in [("thrust", self.lag.thrust), ("steer", self.lag.steer), ("thruster", self.lag.thruster)] {
            if !(rate.is_finite() && rate > 0.0) {
                return bad(format!("{name} lag rate must be positive, got {rate}"));
            }
            if rate * MAX_DT > 1.0 {
                return bad(format!("{name} lag rate {rate} would overshoot at dt={MAX_DT}"));
            }
        }
        Ok(())
    }
}

pub mod vesselspecs {
    use super::*;

    /// 310 m cruise ship on twin azipods, with bank suction and squat enabled.
    pub fn cruise_azipod_spec() -> VesselSpec {
        VesselSpec {
            name: "cruise_azipod".to_string(),
            length_m: 310.0,
            beam_m: 40.0,
            draft_m: 8.8,
            displacement_t: 130_000.0,
            gyration_factor: 0.33,
            propulsion: PropulsionSpec::Azipod(AzipodSpec { thrust_per_pct: 480_000.0, lever_arm_factor: 0.35 }),
            thruster_per_pct: 7_800.0,
            drag_surge: 98_000.0,
            drag_sway: 320_000.0,
            // Superstructure windage
            wind_lateral_height_factor: 2.9,
            wind_lateral_shape: 1.18,
            wind_longitudinal_height_factor: 2.2,
            wind_longitudinal_shape: 0.85,
            wind_lever_factor: 0.17,
            yaw_damping: 0.0008,
            lag: ActuatorRates { thrust: 0.32, steer: 0.9, thruster: 1.8 },
            steer_limit_deg: 35.0,
            bank_suction: Some(BankSuctionSpec::default()),
            shallow_water: Some(ShallowWaterSpec::default()),
            velocity_retention: 0.999,
        }
    }

    /// Conventional single-screw ferry with a rudder. No optional terms.
    pub fn ferry_rudder_spec() -> VesselSpec {
        VesselSpec {
            name: "ferry_rudder".to_string(),
            length_m: 180.0,
            beam_m: 28.0,
            draft_m: 6.5,
            displacement_t: 25_000.0,
            gyration_factor: 0.34,
            propulsion: PropulsionSpec::Rudder(RudderSpec {
                thrust_per_pct: 120_000.0,
                rudder_per_deg: 45_000.0,
                gate_speed_mps: 3.5,
                lever_arm_factor: 0.45,
            }),
            thruster_per_pct: 4_500.0,
            drag_surge: 30_000.0,
            drag_sway: 110_000.0,
            wind_lateral_height_factor: 2.4,
            wind_lateral_shape: 1.1,
            wind_longitudinal_height_factor: 2.0,
            wind_longitudinal_shape: 0.8,
            wind_lever_factor: 0.17,
            yaw_damping: 0.0008,
            lag: ActuatorRates { thrust: 0.5, steer: 1.2, thruster: 2.0 },
            steer_limit_deg: 35.0,
            bank_suction: None,
            shallow_water: None,
            velocity_retention: 0.999,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::vesselspecs::*;
    use super::*;

    #[test]
    fn builtin_vessels_validate() {
        cruise_azipod_spec().validate().expect("azipod");
        ferry_rudder_spec().validate().expect("rudder");
    }

    #[test]
    fn inertia_uses_gyration_radius() {
        let s = cruise_azipod_spec();
        let expected = 1.3e8 * (310.0_f64 * 0.33).powi(2);
        assert!((s.yaw_inertia() - expected).abs() / expected < 1e-12);
    }

    #[test]
    fn lag_rate_that_could_overshoot_is_rejected() {
        let mut s = cruise_azipod_spec();
        s.lag.thruster = 1.0 / MAX_DT + 1.0;
        assert!(s.validate().is_err());
    }

    #[test]
    fn non_finite_or_negative_coefficients_are_rejected() {
        let cases: [(&str, fn(&mut VesselSpec)); 12] = [
            ("nan thruster", |s| s.thruster_per_pct = f64::NAN),
            ("negative yaw damping", |s| s.yaw_damping = -0.5),
            ("zero yaw damping", |s| s.yaw_damping = 0.0),
            ("infinite wind shape", |s| s.wind_lateral_shape = f64::INFINITY),
            ("negative windage", |s| s.wind_longitudinal_height_factor = -1.0),
            ("nan wind lever", |s| s.wind_lever_factor = f64::NAN),
            ("nan pier offset", |s| {
                if let Some(b) = s.bank_suction.as_mut() {
                    b.pier_offset = f64::NAN;
                }
            }),
            ("nan bank moment", |s| {
                if let Some(b) = s.bank_suction.as_mut() {
                    b.yaw_moment_nm = f64::NAN;
                }
            }),
            ("negative squat drag", |s| {
                if let Some(w) = s.shallow_water.as_mut() {
                    w.drag_coefficient = -1.0;
                }
            }),
            ("zero pod thrust", |s| {
                if let PropulsionSpec::Azipod(a) = &mut s.propulsion {
                    a.thrust_per_pct = 0.0;
                }
            }),
            ("heavy retention loss", |s| s.velocity_retention = 0.5),
            ("retention above one", |s| s.velocity_retention = 1.01),
        ];
        for (label, mutate) in cases {
            let mut s = cruise_azipod_spec();
            mutate(&mut s);
            assert!(matches!(s.validate(), Err(SimError::InvalidScenario(_))), "{label} should be rejected");
        }
    }

    #[test]
    fn bad_rudder_gains_are_rejected() {
        for (gain, gate) in [(f64::NAN, 3.5), (-45_000.0, 3.5), (45_000.0, 0.0)] {
            let mut s = ferry_rudder_spec();
            if let PropulsionSpec::Rudder(r) = &mut s.propulsion {
                r.rudder_per_deg = gain;
                r.gate_speed_mps = gate;
            }
            assert!(s.validate().is_err(), "gain={gain} gate={gate}");
        }
    }

    #[test]
    fn lossless_retention_is_accepted() {
        let mut s = ferry_rudder_spec();
        s.velocity_retention = 1.0;
        s.validate().expect("no residual loss");
        s.velocity_retention = MIN_VELOCITY_RETENTION;
        s.validate().expect("boundary retention");
    }

    #[test]
    fn zero_length_hull_is_rejected() {
        let mut s = ferry_rudder_spec();
        s.length_m = 0.0;
        assert!(matches!(s.validate(), Err(SimError::InvalidScenario(_))));
    }
}
