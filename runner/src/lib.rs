use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use maneuver::{
    builtins, vesselspecs, BankSuctionSpec, DockingResult, ScenarioSpec, ShallowWaterSpec, Simulation, Snapshot,
    VesselSpec,
};

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "maneuver-runner")]
#[command(about = "Headless harbour-approach simulation runner", long_about = None)]
pub struct Args {
    /// Path to a TOML run config; built-in defaults are used when absent
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Built-in scenario name or menu index, overriding the config
    #[arg(long)]
    pub scenario: Option<String>,
    /// Simulated seconds to run, overriding the config
    #[arg(long)]
    pub duration: Option<f64>,
    /// Print the built-in scenarios and exit
    #[arg(long, default_value_t = false)]
    pub list_scenarios: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VesselKind {
    #[default]
    Azipod,
    Rudder,
}

/// Command changes applied once simulated time reaches `at_s`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptEntry {
    pub at_s: f64,
    #[serde(default)]
    pub thrust: Option<f64>,
    #[serde(default)]
    pub steer: Option<f64>,
    #[serde(default)]
    pub thruster: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Built-in scenario name or index. Ignored when `custom_scenario` is set.
    pub scenario: String,
    pub custom_scenario: Option<ScenarioSpec>,
    pub vessel: VesselKind,
    /// Force bank suction on or off regardless of the vessel default.
    pub bank_suction: Option<bool>,
    pub shallow_water: Option<bool>,
    /// Wall-clock frame length fed to the frame driver (s).
    pub frame_dt: f64,
    pub duration_s: f64,
    pub log_interval_s: f64,
    pub stop_when_scored: bool,
    pub script: Vec<ScriptEntry>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            scenario: builtins::calm_morning().name,
            custom_scenario: None,
            vessel: VesselKind::Azipod,
            bank_suction: None,
            shallow_water: None,
            frame_dt: 1.0 / 60.0,
            duration_s: 600.0,
            log_interval_s: 10.0,
            stop_when_scored: true,
            script: Vec::new(),
        }
    }
}

impl RunConfig {
    pub fn apply_overrides(&mut self, args: &Args) {
        if let Some(name) = &args.scenario {
            self.scenario = name.clone();
            self.custom_scenario = None;
        }
        if let Some(d) = args.duration {
            self.duration_s = d;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.frame_dt.is_finite() && self.frame_dt > 0.0) {
            bail!("frame_dt must be positive, got {}", self.frame_dt);
        }
        if !(self.duration_s.is_finite() && self.duration_s >= 0.0) {
            bail!("duration_s must be >= 0, got {}", self.duration_s);
        }
        if !(self.log_interval_s.is_finite() && self.log_interval_s > 0.0) {
            bail!("log_interval_s must be positive, got {}", self.log_interval_s);
        }
        for entry in &self.script {
            if !(entry.at_s.is_finite() && entry.at_s >= 0.0) {
                bail!("script entry time must be >= 0, got {}", entry.at_s);
            }
        }
        Ok(())
    }

    pub fn scenario_spec(&self) -> Result<ScenarioSpec> {
        if let Some(custom) = &self.custom_scenario {
            return Ok(custom.clone());
        }
        match builtins::find(&self.scenario) {
            Some(s) => Ok(s),
            None => bail!("unknown scenario '{}' (see --list-scenarios)", self.scenario),
        }
    }

    pub fn vessel_spec(&self) -> VesselSpec {
        let mut vessel = match self.vessel {
            VesselKind::Azipod => vesselspecs::cruise_azipod_spec(),
            VesselKind::Rudder => vesselspecs::ferry_rudder_spec(),
        };
        match self.bank_suction {
            Some(true) => vessel.bank_suction = vessel.bank_suction.or(Some(BankSuctionSpec::default())),
            Some(false) => vessel.bank_suction = None,
            None => {}
        }
        match self.shallow_water {
            Some(true) => vessel.shallow_water = vessel.shallow_water.or(Some(ShallowWaterSpec::default())),
            Some(false) => vessel.shallow_water = None,
            None => {}
        }
        vessel
    }
}

pub fn parse_config(src: &str) -> Result<RunConfig> {
    toml::from_str(src).context("Failed to parse run config")
}

pub fn load_config(path: Option<&Path>) -> Result<RunConfig> {
    let Some(path) = path else {
        return Ok(RunConfig::default());
    };
    let src = fs::read_to_string(path).with_context(|| format!("Failed to read config {}", path.display()))?;
    parse_config(&src).with_context(|| format!("Invalid config {}", path.display()))
}

pub fn build_simulation(cfg: &RunConfig) -> Result<Simulation> {
    let scenario = cfg.scenario_spec()?;
    let vessel = cfg.vessel_spec();
    Simulation::new(scenario, vessel).context("Failed to set up simulation")
}

/// Outcome of a headless run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub scenario: String,
    pub vessel: String,
    pub simulated_s: f64,
    pub steps: u64,
    pub docking: DockingResult,
    pub last: Snapshot,
}

fn apply_entry(sim: &mut Simulation, entry: &ScriptEntry) -> Result<()> {
    if let Some(t) = entry.thrust {
        sim.set_thrust(t)?;
    }
    if let Some(s) = entry.steer {
        sim.set_steer(s)?;
    }
    if let Some(t) = entry.thruster {
        sim.set_thruster(t)?;
    }
    debug!(at_s = entry.at_s, commands = ?sim.state().commands, "script entry applied");
    Ok(())
}

fn log_readout(sim: &Simulation) {
    let snap = sim.snapshot();
    info!(
        t = snap.time,
        heading_deg = snap.heading_deg,
        sog_kts = snap.sog_kts,
        rot_deg_min = snap.rate_of_turn_deg_min,
        berth_m = snap.distance_to_berth_m,
        wind_kts = snap.wind_kts,
        "readout"
    );
}

/// Drive a simulation with fixed-length frames, applying the command script
/// as time passes. Stops at `duration_s` or, optionally, on the first docking.
pub fn run(cfg: &RunConfig) -> Result<RunSummary> {
    cfg.validate()?;
    let mut sim = build_simulation(cfg)?;

    let mut script = cfg.script.clone();
    script.sort_by(|a, b| a.at_s.total_cmp(&b.at_s));
    let mut next_entry = 0;
    let mut next_log = 0.0;

    while sim.time() < cfg.duration_s {
        while let Some(entry) = script.get(next_entry).filter(|e| e.at_s <= sim.time()) {
            apply_entry(&mut sim, entry)?;
            next_entry += 1;
        }
        if sim.time() >= next_log {
            log_readout(&sim);
            next_log += cfg.log_interval_s;
        }

        let remaining = cfg.duration_s - sim.time();
        sim.advance_frame(cfg.frame_dt.min(remaining))?;

        if cfg.stop_when_scored && sim.is_scored() {
            break;
        }
    }

    let docking = sim.docking();
    info!(
        scenario = %sim.scenario().name,
        t = sim.time(),
        score = ?docking.score,
        message = %docking.message,
        "run finished"
    );
    Ok(RunSummary {
        scenario: sim.scenario().name.clone(),
        vessel: sim.vessel().name.clone(),
        simulated_s: sim.time(),
        steps: sim.steps(),
        last: sim.snapshot(),
        docking,
    })
}
