//! One fetch → interpret → append cycle.

use anyhow::Result;
use tracing::{error, info};

use crate::config::{Config, FailurePolicy};
use crate::error::PollError;
use crate::fetch::{HttpClient, browser_client, fetch_status};
use crate::output::{LogRow, append_record};
use crate::parser::parse_payload;
use crate::stats::Availability;

/// What a cycle did with the log file.
#[derive(Debug)]
pub enum Outcome {
    Recorded(LogRow),
    /// The poll failed under [`FailurePolicy::SkipRow`]; nothing was appended.
    Skipped(PollError),
}

/// Fetches the station status and counts available connectors.
#[tracing::instrument(skip(client, config), fields(url = %config.status_url()))]
pub async fn poll_once<C: HttpClient>(
    client: &C,
    config: &Config,
) -> Result<Availability, PollError> {
    let body = fetch_status(client, &config.status_url()).await?;
    let payload = parse_payload(&body)?;
    Availability::from_payload(&payload)
}

/// Runs a full cycle with the production client.
pub async fn run_once(config: &Config) -> Result<Outcome> {
    let polled = match browser_client(config) {
        Ok(client) => poll_once(&client, config).await,
        Err(e) => Err(e),
    };
    record(polled, config)
}

/// Runs a full cycle with a caller-supplied client.
pub async fn run_with<C: HttpClient>(client: &C, config: &Config) -> Result<Outcome> {
    record(poll_once(client, config).await, config)
}

/// Applies the failure policy and appends the row.
///
/// Only the file append can make this return `Err`.
fn record(polled: Result<Availability, PollError>, config: &Config) -> Result<Outcome> {
    let availability = match polled {
        Ok(availability) => availability,
        Err(e) => {
            error!(stage = e.stage(), error = %e, "Poll failed");
            match config.on_failure {
                FailurePolicy::RecordSentinel => Availability::Unknown,
                FailurePolicy::SkipRow => return Ok(Outcome::Skipped(e)),
            }
        }
    };

    let row = LogRow::now(availability, config.timezone);
    append_record(&config.csv_path, &row)?;
    info!(
        datum = %row.datum,
        tijd = %row.tijd,
        available = %row.aantal_beschikbaar_van_2,
        "Row appended"
    );

    Ok(Outcome::Recorded(row))
}
