//! Persistence of availability readings to the `;`-separated log file.

use anyhow::Result;
use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use csv::{Terminator, WriterBuilder};
use serde::Serialize;
use std::fs::OpenOptions;
use std::path::Path;
use tracing::debug;

use crate::stats::Availability;

/// One line of the log: local date, local time and the reading.
///
/// Field names double as the CSV header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRow {
    pub datum: String,
    pub tijd: String,
    pub aantal_beschikbaar_van_2: Availability,
}

impl LogRow {
    /// Stamps `availability` with the current wall-clock time in `tz`.
    pub fn now(availability: Availability, tz: Tz) -> Self {
        Self::at(availability, &Utc::now().with_timezone(&tz))
    }

    pub fn at<T: TimeZone>(availability: Availability, when: &DateTime<T>) -> Self
    where
        T::Offset: std::fmt::Display,
    {
        LogRow {
            datum: when.format("%Y-%m-%d").to_string(),
            tijd: when.format("%H:%M:%S").to_string(),
            aantal_beschikbaar_van_2: availability,
        }
    }
}

/// Appends `row` to the file at `path`.
///
/// Creates the file with the header line if it does not already exist. The
/// writer is flushed and the file closed before returning.
pub fn append_record(path: impl AsRef<Path>, row: &LogRow) -> Result<()> {
    let path = path.as_ref();
    let file_exists = path.exists();
    debug!(path = %path.display(), file_exists, "Appending CSV record");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .terminator(line_terminator())
        .has_headers(!file_exists)
        .from_writer(file);

    writer.serialize(row)?;
    writer.flush()?;

    Ok(())
}

fn line_terminator() -> Terminator {
    if cfg!(windows) {
        Terminator::CRLF
    } else {
        Terminator::Any(b'\n')
    }
}
