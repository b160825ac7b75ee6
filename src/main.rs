mod cli;

use std::fs;
use std::io::IsTerminal;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, SharedLogger, TermLogger,
    TerminalMode, WriteLogger,
};

use cli::Cli;

fn setup_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .set_location_level(LevelFilter::Debug)
        .build();

    // No escape codes when stderr is piped or redirected.
    let color = if std::io::stderr().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    loggers.push(TermLogger::new(
        level,
        config.clone(),
        TerminalMode::Stderr,
        color,
    ));

    if let Some(path) = log_file {
        let file = fs::File::create(path)
            .with_context(|| format!("Failed to create log file {:?}", path))?;
        loggers.push(WriteLogger::new(level, config, file));
    }

    CombinedLogger::init(loggers).context("Failed to initialise logging")?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = setup_logging(cli.verbose, cli.log_file.as_deref()) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }

    let config = cli.fetch_config();
    info!("Downloading {} to {:?}", config.url, config.output_path);

    match spaceweather_fetch::run(&config).context("Download failed") {
        Ok(report) => {
            info!(
                "Saved {} ({} bytes, status {}) at {}",
                report.output_path.display(),
                report.bytes_written,
                report.status,
                report.fetched_at.to_rfc3339()
            );
        }
        Err(e) => {
            error!("{:#}", e);
            std::process::exit(1);
        }
    }
}
