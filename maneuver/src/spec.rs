use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindSpec {
    pub speed_kts: f64,
    /// Direction the air moves toward, in the world frame (0° = +x).
    pub dir_deg: f64,
    /// Peak additive gust oscillation (kn). Zero gives a steady wind.
    #[serde(default)]
    pub gust_kts: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentSpec {
    pub speed_kts: f64,
    pub dir_deg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StartPose {
    pub x: f64,
    pub y: f64,
    pub heading_deg: f64,
}

/// Docking slot: centreline pose plus the length/width tolerance envelope.
/// Position and dimensions are display units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BerthSpec {
    pub x: f64,
    pub y: f64,
    pub heading_deg: f64,
    pub length: f64,
    pub width: f64,
}

/// Bounded basin the vessel moves in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldSpec {
    pub width: f64,
    pub height: f64,
    /// Hard stop distance from each edge.
    pub edge_margin: f64,
    /// Display units per metre.
    pub px_per_m: f64,
}

impl Default for WorldSpec {
    fn default() -> Self {
        Self { width: 1200.0, height: 700.0, edge_margin: 20.0, px_per_m: 1.3 }
    }
}

impl WorldSpec {
    pub fn min_x(&self) -> f64 { self.edge_margin }
    pub fn max_x(&self) -> f64 { self.width - self.edge_margin }
    pub fn min_y(&self) -> f64 { self.edge_margin }
    pub fn max_y(&self) -> f64 { self.height - self.edge_margin }
}

/// Background vessel. Purely decorative: it never exerts forces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficSpec {
    pub x: f64,
    pub y: f64,
    /// Display units per second.
    pub vx: f64,
    pub vy: f64,
    pub heading_deg: f64,
    pub size: f64,
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub name: String,
    pub wind: WindSpec,
    pub current: CurrentSpec,
    pub start: StartPose,
    pub berth: BerthSpec,
    #[serde(default)]
    pub world: WorldSpec,
    #[serde(default)]
    pub traffic: Vec<TrafficSpec>,
}

fn finite(label: &str, values: &[f64]) -> SimResult<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(SimError::InvalidScenario(format!("{label} contains a non-finite value")))
    }
}

impl ScenarioSpec {
    /// Reject geometry and environment values the physics cannot run on.
    pub fn validate(&self) -> SimResult<()> {
        let w = &self.world;
        finite("world", &[w.width, w.height, w.edge_margin, w.px_per_m])?;
        if w.width <= 0.0 || w.height <= 0.0 || w.px_per_m <= 0.0 || w.edge_margin < 0.0 {
            return Err(SimError::InvalidScenario(format!(
                "world must have positive size and scale (width={}, height={}, px_per_m={}, edge_margin={})",
                w.width, w.height, w.px_per_m, w.edge_margin
            )));
        }
        if w.min_x() >= w.max_x() || w.min_y() >= w.max_y() {
            return Err(SimError::InvalidScenario("edge margin leaves no room to move".into()));
        }

        let b = &self.berth;
        finite("berth", &[b.x, b.y, b.heading_deg, b.length, b.width])?;
        if b.length <= 0.0 || b.width <= 0.0 {
            return Err(SimError::InvalidScenario(format!(
                "berth length and width must be positive (length={}, width={})",
                b.length, b.width
            )));
        }

        finite("wind", &[self.wind.speed_kts, self.wind.dir_deg, self.wind.gust_kts])?;
        finite("current", &[self.current.speed_kts, self.current.dir_deg])?;
        if self.wind.speed_kts < 0.0 || self.wind.gust_kts < 0.0 || self.current.speed_kts < 0.0 {
            return Err(SimError::InvalidScenario("wind, gust and current speeds must be >= 0".into()));
        }

        let s = &self.start;
        finite("start", &[s.x, s.y, s.heading_deg])?;
        if s.x < w.min_x() || s.x > w.max_x() || s.y < w.min_y() || s.y > w.max_y() {
            return Err(SimError::InvalidScenario(format!(
                "start position ({}, {}) lies outside the basin",
                s.x, s.y
            )));
        }

        for t in &self.traffic {
            finite("traffic", &[t.x, t.y, t.vx, t.vy, t.heading_deg, t.size])?;
        }
        Ok(())
    }
}
