use crate::math::{sign_or, signed_square, Vec2d};
use crate::{BankSuctionSpec, ScenarioSpec, ShallowWaterSpec, VesselSpec};

pub(super) const AIR_DENSITY: f64 = 1.225;

// ----- Body-frame forces -----

/// Quadratic hull drag opposing water-relative motion, per axis.
pub(super) fn hull_drag(spec: &VesselSpec, rel_body: Vec2d) -> Vec2d {
    Vec2d::new(
        -signed_square(rel_body.x) * spec.drag_surge,
        -signed_square(rel_body.y) * spec.drag_sway,
    )
}

/// Aerodynamic force on the hull and superstructure from body-frame wind components.
pub(super) fn wind_force(spec: &VesselSpec, wind_body: Vec2d) -> Vec2d {
    let area_lat = spec.length_m * spec.draft_m * spec.wind_lateral_height_factor;
    let area_lon = spec.beam_m * spec.draft_m * spec.wind_longitudinal_height_factor;
    Vec2d::new(
        0.5 * AIR_DENSITY * area_lon * spec.wind_longitudinal_shape * signed_square(wind_body.x),
        0.5 * AIR_DENSITY * area_lat * spec.wind_lateral_shape * signed_square(wind_body.y),
    )
}

pub(super) fn thruster_force(spec: &VesselSpec, thruster_lag: f64) -> f64 {
    thruster_lag * spec.thruster_per_pct
}

/// Proximity to the pier reference in [0, 1].
pub(super) fn bank_factor(bank: &BankSuctionSpec, scenario: &ScenarioSpec, x: f64) -> f64 {
    let pier_x = scenario.berth.x + bank.pier_offset;
    let dist = (pier_x - x).abs().max(bank.min_distance);
    (1.0 - dist / bank.range).clamp(0.0, 1.0)
}

/// Bank suction sway force and yaw moment. Sign follows lateral relative velocity.
pub(super) fn bank_suction(bank: &BankSuctionSpec, factor: f64, sway_mps: f64) -> (f64, f64) {
    let sign = sign_or(sway_mps, 1.0);
    (factor * bank.sway_force_n * sign, factor * bank.yaw_moment_nm * sign)
}

/// Proximity to the shallows along the top edge of the basin.
pub(super) fn shallow_factor(shallow: &ShallowWaterSpec, scenario: &ScenarioSpec, y: f64) -> f64 {
    (1.0 - y / scenario.world.height).clamp(0.0, 1.0) * shallow.gain
}

pub(super) fn squat_drag(shallow: &ShallowWaterSpec, factor: f64, surge_mps: f64) -> f64 {
    -signed_square(surge_mps) * factor * shallow.drag_coefficient
}

// ----- Yaw moments -----

pub(super) fn moment_wind(spec: &VesselSpec, wind_sway_n: f64) -> f64 {
    wind_sway_n * spec.length_m * spec.wind_lever_factor
}

/// Quadratic yaw damping, always opposing rotation.
pub(super) fn moment_yaw_damping(spec: &VesselSpec, inertia: f64, yaw_rate: f64) -> f64 {
    -signed_square(yaw_rate) * inertia * spec.yaw_damping
}
