//! Trail client binary.
//!
//! Runs one seeded journey and prints what happened each day. The composition
//! root: it loads configuration, sets up logging, and assembles the
//! simulation from the runtime, the content catalog, and a guarded uplink.
//!
//! ```bash
//! TRAIL_SEED=7 TRAIL_DAYS=30 cargo run -p trail-client
//! ```
mod config;
mod logging;
mod uplink;

use anyhow::{Context, Result};
use game_content::{ConfigLoader, TrailConfig};
use game_core::{TrailState, derive_seed};
use runtime::{EventDirector, RuntimeConfig, Simulation, TurnReport};

use crate::config::ClientConfig;
use crate::uplink::FlakyUplink;

/// Stream index of the uplink's random source, kept apart from the journey's.
const UPLINK_STREAM: u64 = 1;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    let trail = match &config.config_path {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("loading trail config from {}", path.display()))?,
        None => TrailConfig::default(),
    };
    let seed = config.seed.unwrap_or_else(rand::random);

    tracing::info!(
        seed,
        days = config.days,
        party = config.party.len(),
        "Starting journey"
    );

    let uplink = FlakyUplink::new(
        config.request_failure_percent,
        derive_seed(seed, UPLINK_STREAM),
    );
    let runtime_config = RuntimeConfig {
        game: trail.game,
        breaker: trail.breaker,
        seed,
    };
    let mut simulation = Simulation::new(
        runtime_config,
        TrailState::new(&config.party),
        EventDirector::with_catalog(),
        uplink,
    )?;

    let reports = simulation.run(config.days)?;
    for report in &reports {
        print_day(report);
    }

    let state = simulation.state();
    println!();
    println!(
        "Journey ended on day {} after {} miles. {} of {} travellers survive.",
        state.day,
        state.mileage,
        state.party.living().count(),
        state.party.len()
    );
    println!(
        "Telegraph: {} requests attempted, circuit {}.",
        simulation.breaker().action().attempts(),
        simulation.breaker().state()
    );

    tracing::info!("Journey complete");
    Ok(())
}

fn print_day(report: &TurnReport) {
    for event in &report.events {
        println!("Day {:>3} [{}] {}", report.day, event.category, event.text);
    }
}
