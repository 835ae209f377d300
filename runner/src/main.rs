use anyhow::Result;
use clap::Parser;
use tracing::info;

use maneuver::builtins;
use runner::{load_config, run, Args};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if args.list_scenarios {
        for (i, s) in builtins::all().iter().enumerate() {
            println!("{i}: {}", s.name);
        }
        return Ok(());
    }

    let mut cfg = load_config(args.config.as_deref())?;
    cfg.apply_overrides(&args);
    info!(?cfg, "Run config loaded");

    let summary = run(&cfg)?;
    for (label, value) in summary.last.instrument_lines() {
        println!("{label:>22}: {value}");
    }
    match summary.docking.score {
        Some(score) => println!("Docking score {score:.1}: {}", summary.docking.message),
        None => println!("Not docked after {:.1} s. {}", summary.simulated_s, summary.docking.message),
    }
    Ok(())
}
