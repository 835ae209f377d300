use super::environment::sample_environment;
use super::terms::*;
use super::types::{ForceDebug, VesselState};
use crate::math::{body_to_world, world_to_body, Vec2d};
use crate::{ScenarioSpec, VesselSpec};

/// Accelerations produced by one force-model evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Accelerations {
    /// World-frame linear acceleration (m/s²).
    pub linear: Vec2d,
    /// Yaw acceleration (rad/s²).
    pub yaw: f64,
    /// Effective wind speed used for this evaluation (kn).
    pub wind_kts: f64,
}

/// Net accelerations on the hull. Pure: the state is only read, so this is
/// safe to call for readouts and look-ahead on copies.
pub fn compute_accelerations(
    state: &VesselState,
    vessel: &VesselSpec,
    scenario: &ScenarioSpec,
    time: f64,
) -> Accelerations {
    compute_accelerations_dbg(state, vessel, scenario, time, None)
}

/// Variant of `compute_accelerations` that fills out an optional force breakdown.
pub fn compute_accelerations_dbg(
    state: &VesselState,
    vessel: &VesselSpec,
    scenario: &ScenarioSpec,
    time: f64,
    mut dbg: Option<&mut ForceDebug>,
) -> Accelerations {
    let mass = vessel.mass_kg();
    let inertia = vessel.yaw_inertia();
    let env = sample_environment(scenario, time, state.heading);

    // Water-relative velocity in body axes
    let rel = world_to_body(state.velocity - env.current, state.heading);
    let (u, v) = (rel.x, rel.y);

    let prop = vessel.propulsion.model().output(&state.lagged, u, vessel.length_m);
    let f_thruster = thruster_force(vessel, state.lagged.thruster);
    let f_drag = hull_drag(vessel, rel);
    let f_wind = wind_force(vessel, env.wind_body);

    let (bank_k, f_bank, n_bank) = match &vessel.bank_suction {
        Some(bank) => {
            let k = bank_factor(bank, scenario, state.position.x);
            let (f, n) = bank_suction(bank, k, v);
            (k, f, n)
        }
        None => (0.0, 0.0, 0.0),
    };
    let (shallow_k, f_squat) = match &vessel.shallow_water {
        Some(shallow) => {
            let k = shallow_factor(shallow, scenario, state.position.y);
            (k, squat_drag(shallow, k, u))
        }
        None => (0.0, 0.0),
    };

    let f_body = Vec2d::new(
        prop.surge_n + f_drag.x + f_wind.x + f_squat,
        prop.sway_n + f_thruster + f_drag.y + f_wind.y + f_bank,
    );

    let n_wind = moment_wind(vessel, f_wind.y);
    let n_damping = moment_yaw_damping(vessel, inertia, state.yaw_rate);
    let n_total = prop.yaw_nm + n_wind + n_bank + n_damping;

    let f_world = body_to_world(f_body, state.heading);

    if let Some(d) = dbg.as_mut() {
        d.time = time;
        d.mass = mass;
        d.inertia = inertia;
        d.wind_kts = env.wind_kts;
        d.u = u;
        d.v = v;
        d.f_propulsion = Vec2d::new(prop.surge_n, prop.sway_n);
        d.f_thruster = f_thruster;
        d.f_drag = f_drag;
        d.f_wind = f_wind;
        d.f_bank = f_bank;
        d.f_squat = f_squat;
        d.f_body = f_body;
        d.f_world = f_world;
        d.n_propulsion = prop.yaw_nm;
        d.n_wind = n_wind;
        d.n_bank = n_bank;
        d.n_damping = n_damping;
        d.n_total = n_total;
        d.bank_factor = bank_k;
        d.shallow_factor = shallow_k;
    }

    Accelerations { linear: f_world / mass, yaw: n_total / inertia, wind_kts: env.wind_kts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::calm_morning;
    use crate::vesselspecs::{cruise_azipod_spec, ferry_rudder_spec};
    use crate::StartPose;

    fn still_water() -> ScenarioSpec {
        let mut s = calm_morning();
        s.wind.speed_kts = 0.0;
        s.wind.gust_kts = 0.0;
        s.current.speed_kts = 0.0;
        s
    }

    fn state_at(x: f64, y: f64, heading_deg: f64) -> VesselState {
        VesselState::at_start(&StartPose { x, y, heading_deg })
    }

    #[test]
    fn at_rest_in_still_water_nothing_moves() {
        let s = still_water();
        let mut spec = cruise_azipod_spec();
        spec.shallow_water = None;
        let state = state_at(s.start.x, s.start.y, 0.0);
        let acc = compute_accelerations(&state, &spec, &s, 0.0);
        assert_eq!(acc.linear, Vec2d::ZERO);
        assert_eq!(acc.yaw, 0.0);
    }

    #[test]
    fn ahead_thrust_accelerates_along_heading() {
        let s = still_water();
        let spec = cruise_azipod_spec();
        let mut state = state_at(300.0, 400.0, 90.0);
        state.lagged.thrust = 50.0;
        let acc = compute_accelerations(&state, &spec, &s, 0.0);
        let expected = 50.0 * 480_000.0 / spec.mass_kg();
        assert!(acc.linear.x.abs() < 1e-9, "ax={}", acc.linear.x);
        assert!((acc.linear.y - expected).abs() < 1e-9, "ay={}", acc.linear.y);
    }

    #[test]
    fn thruster_pushes_pure_sway() {
        let s = still_water();
        let spec = cruise_azipod_spec();
        let mut state = state_at(300.0, 400.0, 0.0);
        state.lagged.thruster = 100.0;
        let mut dbg = ForceDebug::default();
        let acc = compute_accelerations_dbg(&state, &spec, &s, 0.0, Some(&mut dbg));
        assert!((dbg.f_body.y - 780_000.0).abs() < 1e-6);
        assert!(acc.linear.x.abs() < 1e-12);
        assert!(acc.linear.y > 0.0);
        assert_eq!(dbg.n_propulsion, 0.0);
    }

    #[test]
    fn stationary_rudder_has_no_authority() {
        let s = still_water();
        let spec = ferry_rudder_spec();
        let mut state = state_at(300.0, 400.0, 0.0);
        state.lagged.steer_deg = 35.0;
        let acc = compute_accelerations(&state, &spec, &s, 0.0);
        assert_eq!(acc.yaw, 0.0);
    }

    #[test]
    fn positive_steer_turns_toward_increasing_heading() {
        let s = still_water();
        for spec in [cruise_azipod_spec(), ferry_rudder_spec()] {
            let mut state = state_at(300.0, 400.0, 0.0);
            state.velocity = Vec2d::new(3.0, 0.0);
            state.lagged.thrust = 30.0;
            state.lagged.steer_deg = 20.0;
            let acc = compute_accelerations(&state, &spec, &s, 0.0);
            assert!(acc.yaw > 0.0, "{}: yaw acc {}", spec.name, acc.yaw);
        }
    }

    #[test]
    fn current_alone_drags_hull_downstream() {
        let mut s = still_water();
        s.current.speed_kts = 1.0;
        s.current.dir_deg = 90.0;
        let mut spec = cruise_azipod_spec();
        spec.bank_suction = None;
        let state = state_at(300.0, 400.0, 0.0);
        let acc = compute_accelerations(&state, &spec, &s, 0.0);
        // Hull at rest in water moving toward +y: relative flow pushes it along +y
        assert!(acc.linear.y > 0.0);
    }

    #[test]
    fn evaluation_is_pure() {
        let s = calm_morning();
        let spec = cruise_azipod_spec();
        let mut state = state_at(900.0, 300.0, 5.0);
        state.velocity = Vec2d::new(1.0, 0.2);
        state.yaw_rate = 0.01;
        state.lagged.thrust = 20.0;
        let before = state.clone();
        let a = compute_accelerations(&state, &spec, &s, 12.0);
        let b = compute_accelerations(&state, &spec, &s, 12.0);
        assert_eq!(state, before);
        assert_eq!(a, b);
    }

    #[test]
    fn bank_suction_only_near_pier() {
        let s = still_water();
        let mut spec = cruise_azipod_spec();
        spec.shallow_water = None;
        let far = state_at(200.0, 400.0, 0.0);
        let near = state_at(s.berth.x + 100.0, 400.0, 0.0);
        let acc_far = compute_accelerations(&far, &spec, &s, 0.0);
        let acc_near = compute_accelerations(&near, &spec, &s, 0.0);
        assert_eq!(acc_far.yaw, 0.0);
        assert!(acc_near.yaw < 0.0);
        assert!(acc_near.linear.y < 0.0);
    }
}
