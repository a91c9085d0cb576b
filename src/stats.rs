use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

use crate::error::PollError;

/// Connector status meaning "free to charge".
///
/// Not documented by chargefinder; inferred from observed responses. Revisit
/// if the counts stop matching what the station shows.
pub const STATUS_AVAILABLE: i64 = 2;

/// Number of available connectors, or `Unknown` when the poll failed.
///
/// Written to the log as the count itself, or `-1` for `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Known(usize),
    Unknown,
}

impl Availability {
    /// Counts the available connectors in a decoded status payload.
    pub fn from_payload(payload: &Value) -> Result<Self, PollError> {
        let connectors = connectors(payload)?;
        tracing::debug!(connectors = connectors.len(), "Connectors in response");

        let available = connectors.iter().filter(|c| is_available(c)).count();
        tracing::debug!(available, "Available connectors");

        Ok(Availability::Known(available))
    }

    pub fn as_i64(self) -> i64 {
        match self {
            Availability::Known(n) => n as i64,
            Availability::Unknown => -1,
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i64())
    }
}

impl Serialize for Availability {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_i64())
    }
}

/// Finds the connector list: the `connectors` field of an object, or the
/// payload itself when it is a list. Any other payload has no connectors.
///
/// # Errors
///
/// Returns [`PollError::Shape`] when `connectors` is present but not a list.
pub fn connectors(payload: &Value) -> Result<&[Value], PollError> {
    match payload {
        Value::Object(map) => match map.get("connectors") {
            Some(Value::Array(list)) => Ok(list.as_slice()),
            Some(other) => Err(PollError::Shape(format!(
                "`connectors` is {}, expected a list",
                type_name(other)
            ))),
            None => Ok(&[][..]),
        },
        Value::Array(list) => Ok(list.as_slice()),
        _ => Ok(&[][..]),
    }
}

/// A connector is available when its `status` is numerically 2.
/// Elements that are not objects, or lack a numeric status, are not.
pub fn is_available(connector: &Value) -> bool {
    connector
        .get("status")
        .and_then(Value::as_f64)
        .is_some_and(|status| status == STATUS_AVAILABLE as f64)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
