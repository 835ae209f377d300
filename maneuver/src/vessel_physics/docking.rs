use serde::{Deserialize, Serialize};
use tracing::info;

use super::types::VesselState;
use crate::math::{deg_to_rad, rad_to_deg, round_tenth, world_to_body, wrap_deg_180, Vec2d, MPS_TO_KNOTS};
use crate::{BerthSpec, ScenarioSpec};

// Docking envelope
pub const LONGITUDINAL_ENVELOPE: f64 = 0.43;
pub const LATERAL_ENVELOPE: f64 = 0.62;
pub const MAX_SPEED_KTS: f64 = 0.3;
pub const MAX_HEADING_ERR_DEG: f64 = 5.0;

// Scoring
pub const LATERAL_WEIGHT: f64 = 0.45;
pub const HEADING_WEIGHT: f64 = 0.35;
pub const SPEED_WEIGHT: f64 = 0.20;
pub const LATERAL_PENALTY_PER_M: f64 = 2.2;
pub const HEADING_PENALTY_PER_DEG: f64 = 10.0;
pub const SPEED_PENALTY_PER_KT: f64 = 180.0;
pub const EXCELLENT_ABOVE: f64 = 85.0;

pub const EXCELLENT_MESSAGE: &str = "Excellent controlled landing. Proceed with mooring lines.";
pub const ACHIEVED_MESSAGE: &str = "Docking achieved. Review approach profile and force balancing.";

/// Vessel pose relative to the berth centreline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BerthOffsets {
    /// Along the berth (display units).
    pub longitudinal: f64,
    /// Across the berth (display units).
    pub lateral: f64,
    /// Absolute shortest-angle heading error (degrees).
    pub heading_err_deg: f64,
}

/// Absolute heading error in degrees via the shortest angle, never raw subtraction.
pub fn heading_error_deg(vessel_heading_deg: f64, berth_heading_deg: f64) -> f64 {
    wrap_deg_180(vessel_heading_deg - berth_heading_deg).abs()
}

pub fn berth_offsets(berth: &BerthSpec, position: Vec2d, heading: f64) -> BerthOffsets {
    let local = world_to_body(position - Vec2d::new(berth.x, berth.y), deg_to_rad(berth.heading_deg));
    BerthOffsets {
        longitudinal: local.x,
        lateral: local.y,
        heading_err_deg: heading_error_deg(rad_to_deg(heading), berth.heading_deg),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub lateral: f64,
    pub heading: f64,
    pub speed: f64,
    /// Weighted total, rounded to one decimal.
    pub total: f64,
}

fn sub_score(penalty: f64, error: f64) -> f64 {
    (100.0 - penalty * error.abs()).clamp(0.0, 100.0)
}

/// Score a docking from its error magnitudes.
pub fn score_docking(lateral_offset_m: f64, heading_err_deg: f64, speed_kts: f64) -> ScoreBreakdown {
    let lateral = sub_score(LATERAL_PENALTY_PER_M, lateral_offset_m);
    let heading = sub_score(HEADING_PENALTY_PER_DEG, heading_err_deg);
    let speed = sub_score(SPEED_PENALTY_PER_KT, speed_kts);
    let total = lateral * LATERAL_WEIGHT + heading * HEADING_WEIGHT + speed * SPEED_WEIGHT;
    ScoreBreakdown { lateral, heading, speed, total: round_tenth(total.clamp(0.0, 100.0)) }
}

pub fn grade_message(total: f64) -> &'static str {
    if total > EXCELLENT_ABOVE { EXCELLENT_MESSAGE } else { ACHIEVED_MESSAGE }
}

/// Operator hint shown while approaching.
pub fn target_hint(scenario: &ScenarioSpec) -> String {
    let lateral_m = LATERAL_ENVELOPE * scenario.berth.width / scenario.world.px_per_m;
    format!(
        "Target: speed < {MAX_SPEED_KTS} kn, heading error < {MAX_HEADING_ERR_DEG:.0}°, lateral offset < {lateral_m:.0} m"
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DockingPhase {
    Approaching,
    Scored(ScoreBreakdown),
}

/// Read-only view handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DockingResult {
    pub scored: bool,
    pub score: Option<f64>,
    pub message: String,
}

/// `Approaching → Scored` latch. Only `reset` leaves `Scored`.
#[derive(Debug, Clone, PartialEq)]
pub struct DockingEvaluator {
    phase: DockingPhase,
}

impl Default for DockingEvaluator {
    fn default() -> Self { Self::new() }
}

impl DockingEvaluator {
    pub fn new() -> Self { Self { phase: DockingPhase::Approaching } }

    pub fn reset(&mut self) { self.phase = DockingPhase::Approaching; }

    pub fn phase(&self) -> DockingPhase { self.phase }

    pub fn is_scored(&self) -> bool { matches!(self.phase, DockingPhase::Scored(_)) }

    /// Check the docking condition. Returns true on the step that latches a score.
    pub fn evaluate(&mut self, scenario: &ScenarioSpec, state: &VesselState, speed_mps: f64) -> bool {
        if self.is_scored() {
            return false;
        }
        let berth = &scenario.berth;
        let off = berth_offsets(berth, state.position, state.heading);
        let speed_kts = speed_mps * MPS_TO_KNOTS;

        let within_long = off.longitudinal.abs() < berth.length * LONGITUDINAL_ENVELOPE;
        let close_lat = off.lateral.abs() < berth.width * LATERAL_ENVELOPE;
        if !(within_long && close_lat && speed_kts < MAX_SPEED_KTS && off.heading_err_deg < MAX_HEADING_ERR_DEG) {
            return false;
        }

        let breakdown = score_docking(off.lateral / scenario.world.px_per_m, off.heading_err_deg, speed_kts);
        info!(
            score = breakdown.total,
            lateral_m = off.lateral / scenario.world.px_per_m,
            heading_err_deg = off.heading_err_deg,
            speed_kts,
            "docking scored"
        );
        self.phase = DockingPhase::Scored(breakdown);
        true
    }

    pub fn result(&self, scenario: &ScenarioSpec) -> DockingResult {
        match self.phase {
            DockingPhase::Approaching => DockingResult { scored: false, score: None, message: target_hint(scenario) },
            DockingPhase::Scored(b) => DockingResult {
                scored: true,
                score: Some(b.total),
                message: grade_message(b.total).to_string(),
            },
        }
    }
}
