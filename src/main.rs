//! CLI entry point for the charging-station availability logger.
//!
//! Each run polls the station once and appends one row to the log file.
//! Scheduling is left to cron or a systemd timer.

use anyhow::Result;
use clap::Parser;
use laadpaal_logger::config::Config;
use laadpaal_logger::poll::{Outcome, run_once};
use std::ffi::OsStr;
use std::path::Path;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "laadpaal_logger", version)]
#[command(
    about = "Log how many connectors of the Imbrexstraat charging station are available",
    long_about = None
)]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    Cli::parse();
    dotenvy::dotenv().ok();
    let _file_guard = init_tracing();

    let config = Config::default();
    match run_once(&config).await? {
        Outcome::Recorded(row) => println!(
            "Logged: {} of 2 charge points available (-1 = error).",
            row.aantal_beschikbaar_van_2
        ),
        Outcome::Skipped(e) => println!("No row written: {e}"),
    }

    Ok(())
}

/// Colored stderr output plus a JSON log file that rolls over daily.
fn init_tracing() -> WorkerGuard {
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/laadpaal_logger.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("laadpaal_logger.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive(LevelFilter::INFO.into()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive(LevelFilter::DEBUG.into()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    guard
}
