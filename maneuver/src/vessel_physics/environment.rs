use crate::math::{unit_from_deg, world_to_body, Vec2d, KNOTS_TO_MPS};
use crate::ScenarioSpec;

/// Angular frequency (rad/s) of the gust oscillation.
pub const GUST_RATE: f64 = 0.12;

/// Wind and current at one instant, as felt by a hull at a given heading.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EnvironmentSample {
    /// Effective wind speed including gust (kn).
    pub wind_kts: f64,
    /// World-frame wind velocity (m/s).
    pub wind_world: Vec2d,
    /// Wind projected into body axes: x = longitudinal, y = lateral (m/s).
    pub wind_body: Vec2d,
    /// World-frame current velocity (m/s).
    pub current: Vec2d,
}

/// Effective wind speed at `time`, steady wind plus sinusoidal gust.
pub fn effective_wind_kts(scenario: &ScenarioSpec, time: f64) -> f64 {
    scenario.wind.speed_kts + scenario.wind.gust_kts * (GUST_RATE * time).sin()
}

/// Sample the environment. Pure; call as often as needed.
pub fn sample_environment(scenario: &ScenarioSpec, time: f64, heading: f64) -> EnvironmentSample {
    let wind_kts = effective_wind_kts(scenario, time);
    let wind_world = unit_from_deg(scenario.wind.dir_deg) * (wind_kts * KNOTS_TO_MPS);
    let current = unit_from_deg(scenario.current.dir_deg) * (scenario.current.speed_kts * KNOTS_TO_MPS);
    EnvironmentSample {
        wind_kts,
        wind_world,
        wind_body: world_to_body(wind_world, heading),
        current,
    }
}
