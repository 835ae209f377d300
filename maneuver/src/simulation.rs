use tracing::info;

use crate::error::{SimError, SimResult};
use crate::math::{normalize_deg_360, rad_to_deg, Vec2d};
use crate::snapshot::Snapshot;
use crate::traffic::{advance_traffic, TrafficVessel};
use crate::vessel_physics::{
    effective_wind_kts, predict_track, step_vessel, validate_dt, Accelerations, ControlCommands, DockingEvaluator,
    DockingResult, PredictionSpec, VesselState, MAX_DT, THROTTLE_LIMIT_PCT,
};
use crate::{PropulsionSpec, ScenarioSpec, VesselSpec};

/// Simulation context: the single owner of the own ship's state, its docking
/// latch and the decorative traffic. Every mutation goes through `&mut self`,
/// so a reset can never interleave with a step.
#[derive(Debug, Clone)]
pub struct Simulation {
    scenario: ScenarioSpec,
    vessel: VesselSpec,
    state: VesselState,
    docking: DockingEvaluator,
    traffic: Vec<TrafficVessel>,
    time: f64,
    steps: u64,
}

fn finite_command(name: &'static str, value: f64) -> SimResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SimError::InvalidCommand { name, value })
    }
}

impl Simulation {
    /// Validate both specs and start a fresh run at the scenario's start pose.
    pub fn new(scenario: ScenarioSpec, vessel: VesselSpec) -> SimResult<Self> {
        scenario.validate()?;
        vessel.validate()?;
        info!(scenario = %scenario.name, vessel = %vessel.name, "simulation created");
        Ok(Self {
            state: VesselState::at_start(&scenario.start),
            traffic: scenario.traffic.iter().map(TrafficVessel::from).collect(),
            docking: DockingEvaluator::new(),
            scenario,
            vessel,
            time: 0.0,
            steps: 0,
        })
    }

    /// Switch scenario. An invalid scenario leaves the current run untouched.
    pub fn load_scenario(&mut self, scenario: ScenarioSpec) -> SimResult<()> {
        scenario.validate()?;
        self.scenario = scenario;
        self.reset();
        Ok(())
    }

    /// Replace the vessel state, docking latch and traffic from the current scenario.
    pub fn reset(&mut self) {
        self.state = VesselState::at_start(&self.scenario.start);
        self.docking = DockingEvaluator::new();
        self.traffic = self.scenario.traffic.iter().map(TrafficVessel::from).collect();
        self.time = 0.0;
        self.steps = 0;
        info!(scenario = %self.scenario.name, "scenario reset");
    }

    pub fn scenario(&self) -> &ScenarioSpec { &self.scenario }
    pub fn vessel(&self) -> &VesselSpec { &self.vessel }
    pub fn state(&self) -> &VesselState { &self.state }
    pub fn traffic(&self) -> &[TrafficVessel] { &self.traffic }
    pub fn time(&self) -> f64 { self.time }
    pub fn steps(&self) -> u64 { self.steps }
    pub fn is_scored(&self) -> bool { self.docking.is_scored() }

    pub fn docking(&self) -> DockingResult { self.docking.result(&self.scenario) }

    /// Set all three commands. Finite values are clamped into range.
    pub fn set_commands(&mut self, commands: ControlCommands) -> SimResult<()> {
        let checked = ControlCommands {
            thrust: finite_command("thrust", commands.thrust)?,
            steer_deg: finite_command("steer", commands.steer_deg)?,
            thruster: finite_command("thruster", commands.thruster)?,
        };
        self.state.commands = checked.clamped(self.vessel.steer_limit_deg);
        Ok(())
    }

    pub fn set_thrust(&mut self, pct: f64) -> SimResult<()> {
        let pct = finite_command("thrust", pct)?;
        self.state.commands.thrust = pct.clamp(-THROTTLE_LIMIT_PCT, THROTTLE_LIMIT_PCT);
        Ok(())
    }

    pub fn set_steer(&mut self, deg: f64) -> SimResult<()> {
        let deg = finite_command("steer", deg)?;
        let limit = self.vessel.steer_limit_deg;
        self.state.commands.steer_deg = deg.clamp(-limit, limit);
        Ok(())
    }

    pub fn set_thruster(&mut self, pct: f64) -> SimResult<()> {
        let pct = finite_command("thruster", pct)?;
        self.state.commands.thruster = pct.clamp(-THROTTLE_LIMIT_PCT, THROTTLE_LIMIT_PCT);
        Ok(())
    }

    /// Centre steering and stop the lateral thruster; propulsion is left alone.
    pub fn center_controls(&mut self) {
        self.state.commands.steer_deg = 0.0;
        self.state.commands.thruster = 0.0;
    }

    /// One authoritative physics step. `dt` outside (0, MAX_DT] is rejected.
    pub fn step(&mut self, dt: f64) -> SimResult<Accelerations> {
        let acc = step_vessel(&self.scenario, &self.vessel, &mut self.state, &mut self.docking, dt, self.time)?;
        advance_traffic(&mut self.traffic, &self.scenario.world, dt);
        self.time += dt;
        self.steps += 1;
        Ok(acc)
    }

    /// Frame-driver entry point. Elapsed wall time above `MAX_DT` is clamped,
    /// so lost time is simply not simulated. Returns the simulated `dt`.
    pub fn advance_frame(&mut self, elapsed: f64) -> SimResult<f64> {
        if elapsed.is_nan() || elapsed < 0.0 {
            return Err(SimError::InvalidTimeStep { dt: elapsed, max: MAX_DT });
        }
        if elapsed == 0.0 {
            return Ok(0.0);
        }
        let dt = elapsed.min(MAX_DT);
        validate_dt(dt)?;
        self.step(dt)?;
        Ok(dt)
    }

    /// Look-ahead track for operator feedback. Never touches the live state.
    pub fn predict_track(&self) -> Vec<Vec2d> {
        predict_track(&self.scenario, &self.vessel, &self.state, self.time, PredictionSpec::default())
    }

    pub fn distance_to_berth_m(&self) -> f64 {
        let b = &self.scenario.berth;
        (self.state.position - Vec2d::new(b.x, b.y)).length() / self.scenario.world.px_per_m
    }

    pub fn snapshot(&self) -> Snapshot {
        let steering_label = match self.vessel.propulsion {
            PropulsionSpec::Azipod(_) => "Azipod Angle",
            PropulsionSpec::Rudder(_) => "Rudder Angle",
        };
        Snapshot {
            time: self.time,
            position: self.state.position,
            heading_deg: normalize_deg_360(rad_to_deg(self.state.heading)),
            sog_kts: self.state.sog_kts(),
            rate_of_turn_deg_min: self.state.rate_of_turn_deg_min(),
            distance_to_berth_m: self.distance_to_berth_m(),
            commands: self.state.commands,
            lagged: self.state.lagged,
            steering_label,
            wind_kts: effective_wind_kts(&self.scenario, self.time),
            wind_dir_deg: self.scenario.wind.dir_deg,
            current_kts: self.scenario.current.speed_kts,
            current_dir_deg: self.scenario.current.dir_deg,
            docking: self.docking(),
            traffic: self.traffic.clone(),
        }
    }
}
