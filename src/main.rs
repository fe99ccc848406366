use std::any::Any;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::Report;
use memswapcheck::check::StatusLevel;
use memswapcheck::config::{Config, load_config, load_config_from_path};
use memswapcheck::error::ConfigError;
use memswapcheck::logging;
use memswapcheck::probe::run_probe;
use memswapcheck::report::{self, Outcome};
use memswapcheck::system::SysinfoSource;

#[derive(Parser)]
#[command(
    name = "memswapcheck",
    version,
    about = "Check combined free memory and swap against warning/critical thresholds",
    allow_negative_numbers = true
)]
struct Cli {
    /// Warning when total free % drops below this value [default: 10]
    #[arg(short, long)]
    warning: Option<f64>,

    /// Critical when total free % drops below this value [default: 5]
    #[arg(short, long)]
    critical: Option<f64>,

    /// Print debug messages to stderr (`-d false` overrides the config file)
    #[arg(short, long, num_args = 0..=1, default_missing_value = "true")]
    debug: Option<bool>,

    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    if let Err(report) = color_eyre::install() {
        eprintln!("Error: {report:?}");
    }
    install_panic_guard();

    let cli = Cli::parse();
    let config = match load_config_for_cli(&cli) {
        Ok(config) => config,
        Err(err) => {
            let outcome = report::config_outcome(&err);
            eprintln!("Error: {:?}", Report::new(err));
            return emit(outcome);
        }
    };
    let dispatch = logging::dispatch(&config.log_settings());

    let result = tracing::dispatcher::with_default(&dispatch, || {
        tracing::debug!(thresholds = ?config.thresholds(), "starting probe");
        run_probe(&mut SysinfoSource::new(), &config.thresholds())
    });

    let outcome = report::probe_outcome(&result);
    if let Err(err) = result {
        eprintln!(
            "Error: {:?}",
            Report::new(err).wrap_err("failed to collect memory metrics")
        );
    }
    emit(outcome)
}

fn emit(outcome: Outcome) -> ExitCode {
    if let Some(line) = outcome.status_line {
        println!("{line}");
    }
    ExitCode::from(outcome.exit_code)
}

fn load_config_for_cli(cli: &Cli) -> Result<Config, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path)?,
        None => load_config()?,
    };

    if let Some(warning) = cli.warning {
        config.thresholds.warning = warning;
    }
    if let Some(critical) = cli.critical {
        config.thresholds.critical = critical;
    }
    if let Some(debug) = cli.debug {
        config.logging.debug = debug;
    }

    Ok(config)
}

/// A panic still produces a well-formed UNKNOWN result for the supervisor.
fn install_panic_guard() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        println!("{}", report::panic_line(panic_message(panic_info.payload())));
        original_hook(panic_info);
        std::process::exit(i32::from(StatusLevel::Unknown.exit_code()));
    }));
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown cause"
    }
}
