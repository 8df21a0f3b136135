use clap::Parser;
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use env_logger::Env;
use log::{info, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

use netroute::config_loader::{self, CliOverrides};
use netroute::{orchestrator, scenario};

/// Route packets hop by hop over ring, torus and star topologies
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a YAML configuration file
    #[arg(short, long, conflicts_with = "scenario", required_unless_present = "scenario")]
    config: Option<PathBuf>,

    /// Path to a packet scenario CSV file
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Seed for randomized routing decisions
    #[arg(long)]
    seed: Option<u64>,

    /// Give up on a packet after this many hops
    #[arg(long)]
    max_hops: Option<usize>,

    /// Write the route report as JSON to this path
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    // Initialize logging. Without RUST_LOG the logger passes everything and the
    // facade's max level filters, so the config can set it once it is loaded
    let rust_log_set = std::env::var_os("RUST_LOG").is_some();
    env_logger::Builder::from_env(Env::default().default_filter_or("trace")).init();
    if let Some(level) = startup_level(rust_log_set, None) {
        log::set_max_level(level);
    }

    let mut config = match (&args.config, &args.scenario) {
        (Some(path), _) => config_loader::load_config(path)?,
        (None, Some(path)) => scenario::read_scenario_file(path)
            .wrap_err_with(|| format!("Failed to load scenario '{}'", path.display()))?,
        (None, None) => return Err(eyre!("either --config or --scenario is required")),
    };

    if let Some(level) = startup_level(rust_log_set, config.general().level_filter()?) {
        log::set_max_level(level);
    }

    config_loader::apply_overrides(
        &mut config,
        &CliOverrides {
            seed: args.seed,
            max_hops: args.max_hops,
        },
    )?;

    let mut rng = match config.general.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let report = orchestrator::run(&config, &mut rng).wrap_err("Routing run failed")?;

    for route in &report.routes {
        println!("packet {}: {} ({} hops)", route.packet, route.path.join(" -> "), route.hops);
    }
    if let Some(average) = report.average_route_length() {
        println!("average route length: {:.3}", average);
    }

    if let Some(output) = &args.output {
        report
            .write_json(output)
            .wrap_err_with(|| format!("Failed to write report '{}'", output.display()))?;
        info!("Report written to {:?}", output);
    }

    Ok(())
}

/// Level to cap the log facade at; `None` leaves RUST_LOG in charge
fn startup_level(rust_log_set: bool, configured: Option<LevelFilter>) -> Option<LevelFilter> {
    (!rust_log_set).then(|| configured.unwrap_or(LevelFilter::Info))
}
