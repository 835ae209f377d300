use serde::Serialize;

use crate::math::Vec2d;
use crate::traffic::TrafficVessel;
use crate::vessel_physics::{ActuatorState, ControlCommands, DockingResult};

/// Read-only view of a simulation instant for instruments and rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub time: f64,
    pub position: Vec2d,
    /// Degrees in [0, 360).
    pub heading_deg: f64,
    pub sog_kts: f64,
    pub rate_of_turn_deg_min: f64,
    pub distance_to_berth_m: f64,
    pub commands: ControlCommands,
    pub lagged: ActuatorState,
    /// Readout label for the steering actuator, e.g. "Azipod Angle".
    pub steering_label: &'static str,
    pub wind_kts: f64,
    pub wind_dir_deg: f64,
    pub current_kts: f64,
    pub current_dir_deg: f64,
    pub docking: DockingResult,
    pub traffic: Vec<TrafficVessel>,
}

impl Snapshot {
    /// Instrument panel rows as (label, formatted value).
    pub fn instrument_lines(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Heading", format!("{:.1}°", self.heading_deg)),
            ("SOG", format!("{:.2} kn", self.sog_kts)),
            ("Rate of Turn", format!("{:.1} °/min", self.rate_of_turn_deg_min)),
            ("Distance to Berth C/L", format!("{:.0} m", self.distance_to_berth_m)),
            (self.steering_label, format!("{:.1}°", self.lagged.steer_deg)),
            ("Wind", format!("{:.1} kn @ {}°", self.wind_kts, self.wind_dir_deg)),
            ("Current", format!("{:.1} kn @ {}°", self.current_kts, self.current_dir_deg)),
        ]
    }
}
