//! Process bootstrap for the bouncer daemon.

use std::path::PathBuf;

use clap::Parser;

use bouncer::config::{self, BouncerConfig};
use bouncer::lifecycle::{signals, Shutdown};
use bouncer::observability::{logging, metrics};
use bouncer::probe::HttpProber;
use bouncer::relay::{self, Relay};
use bouncer::timing::Jitter;
use bouncer::watchdog::{CheckPolicy, Watchdog};

#[derive(Parser)]
#[command(
    name = "bouncer",
    version,
    about = "Connectivity watchdog that power-cycles a relay when the network goes down"
)]
struct Cli {
    /// Path to the TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Force debug-level logging.
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Configuration problems are fatal before the loop ever starts.
    let config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => {
            let config = BouncerConfig::default();
            config::validate_config(&config).map_err(config::ConfigError::Validation)?;
            config
        }
    };

    logging::init(&config.observability, cli.debug.then_some("debug"));
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "bouncer starting");
    tracing::info!(
        sites = ?config.check.sites,
        check_interval_secs = config.check.check_interval_secs,
        failure_threshold = config.check.failures,
        "configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init(addr),
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "failed to parse metrics address"
            ),
        }
    }

    // Relay init failure is fatal; the loop assumes an initialized actuator.
    let relay = relay::init(&config.relay)?;
    let probe = HttpProber::new()?;
    let sites = config.check.parsed_sites()?;

    let shutdown = Shutdown::new();
    tokio::spawn(signals::shutdown_on_signal(shutdown.clone()));

    let watchdog = Watchdog::new(
        sites,
        CheckPolicy::from(&config.check),
        probe,
        relay,
        Jitter::new(),
    );
    let relay = watchdog.run(shutdown.subscribe()).await;

    relay.close()?;
    tracing::info!("shutdown complete");
    Ok(())
}
