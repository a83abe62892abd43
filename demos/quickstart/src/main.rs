//! Configures the global logger from the command line and logs through every entry point.
//!
//! Usage: `quickstart [DIRECTORY] [LEVEL]`. Without a directory, lines go to standard output.

use log_facade::{Attr, Logger, LoggerError};

fn main() -> Result<(), LoggerError> {
    let mut args = std::env::args().skip(1);
    let directory = args.next().unwrap_or_default();
    let level = args.next().unwrap_or_else(|| "debug".to_string());

    log_facade::install_tracing_bridge()?;
    log_facade::configure(&directory, "quickstart.log", "day", &level, 7, 100, 1)?;

    log_facade::debug!("starting", "pid" => std::process::id());
    log_facade::infof!("hello {}", "world");
    log_facade::warn("disk usage high", &[Attr::new("percent", &91)]);
    log_facade::errorf(format_args!("giving up after {} attempts", 3));

    tracing::info!(component = "bridge", "tracing events share the same output");

    if let Some(logger) = log_facade::global() {
        run_job(&logger);
    }

    Ok(())
}

/// A component that receives its logger explicitly instead of using the global functions.
fn run_job(logger: &Logger) {
    for step in ["fetch", "transform", "store"] {
        logger.info("job step finished", &[Attr::new("step", &step)]);
    }
    logger.debugf(format_args!("job finished in {} steps", 3));
}
