mod app;
mod config;
mod engine;
mod error;
mod headless;
mod simulation;
mod ui;

use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use app::AntFarmApp;
use clap::Parser;
use config::{SimulationConfig, window_conf};
use error::ConfigError;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the ant farm.
#[derive(Parser)]
#[command(name = "AntFarm", version, about = "Ant colony pheromone simulation")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run without a window and log colony stats instead.
    #[arg(long)]
    headless: bool,

    /// Headless run length in seconds.
    #[arg(long, default_value_t = 30.0, requires = "headless")]
    duration: f64,

    /// Headless only: run on virtual time as fast as possible.
    #[arg(long, requires = "headless")]
    unlimited: bool,

    /// Seed for the random stream, overriding the config file.
    #[arg(long)]
    seed: Option<u64>,
}

/// Loads the simulation configuration from a TOML file or uses defaults.
fn load_config(path: Option<&Path>) -> Result<SimulationConfig, ConfigError> {
    match path {
        Some(path) => {
            let config = SimulationConfig::load(path)?;
            info!(path = %path.display(), "loaded config");
            info!(?config, "config");
            Ok(config)
        }
        None => {
            info!("no config file provided, using defaults");
            Ok(SimulationConfig::default())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }

    if cli.headless {
        let duration = Duration::try_from_secs_f64(cli.duration)
            .with_context(|| format!("invalid --duration {}", cli.duration))?;
        let stats = if cli.unlimited {
            headless::run_virtual(config, duration)?
        } else {
            headless::run_realtime(config, duration)?
        };
        info!(
            ants = stats.ant_count,
            sim_time_s = stats.sim_time_secs(),
            ticks = stats.ticks,
            "headless run finished"
        );
        return Ok(());
    }

    config.validate()?;
    macroquad::Window::from_config(window_conf(&config), async move {
        match AntFarmApp::new(config) {
            Ok(mut app) => app.run().await,
            Err(e) => error!("failed to start simulation: {}", e),
        }
    });
    Ok(())
}
