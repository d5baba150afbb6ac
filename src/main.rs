use anyhow::{Context, Result};
use log::{error, info};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use std::fs;
use std::io;

use nba_elo_fetch::{Dataset, Fetcher};

fn setup_logging() -> Result<()> {
    let log_dir = directories::BaseDirs::new()
        .ok_or_else(|| anyhow::anyhow!("Failed to get base directories"))?
        .data_local_dir()
        .join("nba-elo-fetch")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join(format!(
        "fetch_{}.log",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    ));

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .set_location_level(LevelFilter::Debug)
        .build();

    WriteLogger::init(
        LevelFilter::Info,
        config,
        fs::File::create(log_file).context("Failed to create log file")?,
    )?;

    Ok(())
}

/// Stdout is reserved for the completion notice, so the fallback logs to
/// stderr and only at warn.
fn setup_stderr_logging() {
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let _ = TermLogger::init(
        LevelFilter::Warn,
        config,
        TerminalMode::Stderr,
        ColorChoice::Never,
    );
}

fn main() -> Result<()> {
    if let Err(e) = setup_logging() {
        setup_stderr_logging();
        log::warn!("File logging unavailable: {:#}", e);
    }

    info!("nba-elo-fetch starting");

    let fetcher = Fetcher::new(Dataset::nba_all_elo())?;
    info!("Dataset URL: {}", fetcher.dataset().url);
    info!("Destination: {:?}", fetcher.dataset().destination);

    match fetcher.run(&mut io::stdout().lock()) {
        Ok(report) => {
            match serde_json::to_string(&report) {
                Ok(json) => info!("Fetch report: {}", json),
                Err(e) => log::warn!("Failed to serialize fetch report: {}", e),
            }
            Ok(())
        }
        Err(e) => {
            error!("Download failed: {}", e);
            Err(e.into())
        }
    }
}
