use crate::{BerthSpec, CurrentSpec, ScenarioSpec, StartPose, TrafficSpec, WindSpec, WorldSpec};

// All harbour layouts share the same berth footprint along the eastern quay.
const BERTH_LENGTH: f64 = 320.0;
const BERTH_WIDTH: f64 = 46.0;

fn traffic(x: f64, y: f64, vx: f64, vy: f64, heading_deg: f64, size: f64, kind: &str) -> TrafficSpec {
    TrafficSpec { x, y, vx, vy, heading_deg, size, kind: kind.to_string() }
}

fn berth(x: f64, y: f64) -> BerthSpec {
    BerthSpec { x, y, heading_deg: 0.0, length: BERTH_LENGTH, width: BERTH_WIDTH }
}

/// Light breeze, weak current; the gentlest approach.
pub fn calm_morning() -> ScenarioSpec {
    ScenarioSpec {
        name: "Calm Morning / Starboard Side-to".to_string(),
        wind: WindSpec { speed_kts: 6.0, dir_deg: 220.0, gust_kts: 2.0 },
        current: CurrentSpec { speed_kts: 0.3, dir_deg: 15.0 },
        start: StartPose { x: 180.0, y: 335.0, heading_deg: 2.0 },
        berth: berth(960.0, 350.0),
        world: WorldSpec::default(),
        traffic: vec![
            traffic(680.0, 180.0, 3.0, 0.6, 12.0, 48.0, "ferry"),
            traffic(510.0, 560.0, -1.8, -0.6, 184.0, 30.0, "tug"),
        ],
    }
}

/// Strong beam wind pushing off the quay.
pub fn crosswind_challenge() -> ScenarioSpec {
    ScenarioSpec {
        name: "Crosswind Challenge / Port Side-to".to_string(),
        wind: WindSpec { speed_kts: 24.0, dir_deg: 272.0, gust_kts: 5.0 },
        current: CurrentSpec { speed_kts: 0.9, dir_deg: 175.0 },
        start: StartPose { x: 165.0, y: 520.0, heading_deg: -8.0 },
        berth: berth(950.0, 455.0),
        world: WorldSpec::default(),
        traffic: vec![
            traffic(470.0, 250.0, 1.2, 1.8, 58.0, 42.0, "cargo"),
            traffic(770.0, 610.0, -3.0, -0.6, 192.0, 34.0, "pilot"),
        ],
    }
}

pub fn quartering_wind() -> ScenarioSpec {
    ScenarioSpec {
        name: "Quartering Wind + Current Shear".to_string(),
        wind: WindSpec { speed_kts: 18.0, dir_deg: 315.0, gust_kts: 4.0 },
        current: CurrentSpec { speed_kts: 1.2, dir_deg: 25.0 },
        start: StartPose { x: 215.0, y: 185.0, heading_deg: 9.0 },
        berth: berth(940.0, 250.0),
        world: WorldSpec::default(),
        traffic: vec![
            traffic(450.0, 480.0, 3.6, -1.2, 340.0, 36.0, "supply"),
            traffic(705.0, 128.0, -2.4, 0.6, 165.0, 28.0, "tug"),
        ],
    }
}

/// The scenario catalogue in menu order.
pub fn all() -> Vec<ScenarioSpec> {
    vec![calm_morning(), crosswind_challenge(), quartering_wind()]
}

/// Look up a built-in scenario by exact name (case-insensitive) or by menu index.
pub fn find(key: &str) -> Option<ScenarioSpec> {
    let all = all();
    if let Ok(idx) = key.trim().parse::<usize>() {
        return all.into_iter().nth(idx);
    }
    all.into_iter().find(|s| s.name.eq_ignore_ascii_case(key.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_by_name_and_index() {
        assert_eq!(find("0").map(|s| s.name), Some(calm_morning().name));
        assert_eq!(find("2").map(|s| s.name), Some(quartering_wind().name));
        assert_eq!(
            find("crosswind challenge / port side-to").map(|s| s.name),
            Some(crosswind_challenge().name)
        );
        assert!(find("7").is_none());
        assert!(find("Typhoon").is_none());
    }
}
