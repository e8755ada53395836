//! Conversion between canonical result values and their display strings.
//!
//! Canonical units per [`ResultKind`]:
//! - `Time`: elapsed milliseconds
//! - `Distance`: meters, fractional part holds centimeters
//! - `Points` (and anything unrecognised): an opaque score shown as-is
//!
//! Everything here is pure and never logs; errors go back to the caller.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const MS_PER_HOUR: u64 = 3_600_000;
const MS_PER_MINUTE: u64 = 60_000;
const MS_PER_SECOND: u64 = 1_000;
const MS_PER_HUNDREDTH: u64 = 10;
// 2^64; anything at or above it saturates when cast to u64
const MAX_CANONICAL: f64 = u64::MAX as f64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeasurementError {
    #[error("invalid measurement: {0}")]
    InvalidMeasurement(String),
}

/// How a discipline's results are measured.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultKind {
    Time,
    Distance,
    Points,
    /// Any kind this crate does not know about. Treated like `Points`.
    #[serde(other)]
    Unknown,
}

impl ResultKind {
    /// Whether the codec has dedicated handling for this kind.
    pub fn is_supported(self) -> bool {
        !matches!(self, ResultKind::Unknown)
    }

    pub fn encode(self, value: f64) -> Result<String, MeasurementError> {
        encode(value, self)
    }

    pub fn decode(self, display: &str) -> Result<f64, MeasurementError> {
        decode(display, self)
    }
}

impl std::fmt::Display for ResultKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ResultKind::Time => "TIME",
            ResultKind::Distance => "DISTANCE",
            ResultKind::Points => "POINTS",
            ResultKind::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

/// Render a canonical value for display.
pub fn encode(value: f64, kind: ResultKind) -> Result<String, MeasurementError> {
    check_canonical(value)?;
    match kind {
        ResultKind::Time => Ok(encode_time(value)),
        ResultKind::Distance => Ok(encode_distance(value)),
        ResultKind::Points | ResultKind::Unknown => Ok(value.to_string()),
    }
}

/// Parse a display string back into its canonical value.
///
/// Only `Time` has a structured format. The other kinds are typed in as plain
/// numbers, so they are parsed as such.
pub fn decode(display: &str, kind: ResultKind) -> Result<f64, MeasurementError> {
    match kind {
        ResultKind::Time => decode_time(display).map(|ms| ms as f64),
        ResultKind::Distance | ResultKind::Points | ResultKind::Unknown => decode_plain(display),
    }
}

fn check_canonical(value: f64) -> Result<(), MeasurementError> {
    if !value.is_finite() {
        return Err(MeasurementError::InvalidMeasurement(format!(
            "value must be finite, got {value}"
        )));
    }
    if value < 0.0 {
        return Err(MeasurementError::InvalidMeasurement(format!(
            "value must not be negative, got {value}"
        )));
    }
    if value >= MAX_CANONICAL {
        return Err(MeasurementError::InvalidMeasurement(format!(
            "value {value} is out of range"
        )));
    }
    Ok(())
}

// Every field is truncated, never rounded.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn encode_time(value: f64) -> String {
    let ms = value.floor() as u64;
    let hours = ms / MS_PER_HOUR;
    let minutes = (ms % MS_PER_HOUR) / MS_PER_MINUTE;
    let seconds = (ms % MS_PER_MINUTE) / MS_PER_SECOND;
    let hundredths = (ms % MS_PER_SECOND) / MS_PER_HUNDREDTH;
    format!("{hours:02}:{minutes:02}:{seconds:02}.{hundredths:02}")
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn encode_distance(value: f64) -> String {
    let mut meters = value.floor() as u64;
    // f64::round is half-away-from-zero
    let mut centimeters = ((value - value.floor()) * 100.0).round() as u64;
    if centimeters >= 100 {
        meters += 1;
        centimeters -= 100;
    }
    format!("{meters} m {centimeters} cm")
}

/// `[[H:]M:]S[.CC]`, groups aligned from the right so the last `:` group is
/// always seconds.
fn decode_time(display: &str) -> Result<u64, MeasurementError> {
    let trimmed = display.trim();
    let groups: Vec<&str> = trimmed.split(':').collect();
    let (hours, minutes, seconds_group) = match groups.as_slice() {
        [s] => ("", "", *s),
        [m, s] => ("", *m, *s),
        [h, m, s] => (*h, *m, *s),
        _ => {
            return Err(MeasurementError::InvalidMeasurement(format!(
                "expected at most three ':' groups in {display:?}"
            )));
        }
    };

    let (seconds, hundredths) = seconds_group.split_once('.').unwrap_or((seconds_group, ""));
    if hundredths.len() > 2 {
        return Err(MeasurementError::InvalidMeasurement(format!(
            "hundredths must have at most two digits in {display:?}"
        )));
    }

    let parts = [
        (hours, MS_PER_HOUR),
        (minutes, MS_PER_MINUTE),
        (seconds, MS_PER_SECOND),
        (hundredths, MS_PER_HUNDREDTH),
    ];
    parts.into_iter().try_fold(0u64, |total, (group, unit)| {
        parse_group(group, display)?
            .checked_mul(unit)
            .and_then(|ms| total.checked_add(ms))
            .ok_or_else(|| {
                MeasurementError::InvalidMeasurement(format!("{display:?} is out of range"))
            })
    })
}

fn parse_group(group: &str, display: &str) -> Result<u64, MeasurementError> {
    if group.is_empty() {
        return Ok(0);
    }
    if !group.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MeasurementError::InvalidMeasurement(format!(
            "non-numeric group {group:?} in {display:?}"
        )));
    }
    group.parse::<u64>().map_err(|e| {
        MeasurementError::InvalidMeasurement(format!("group {group:?} in {display:?}: {e}"))
    })
}

fn decode_plain(display: &str) -> Result<f64, MeasurementError> {
    let trimmed = display.trim();
    let value = trimmed.parse::<f64>().map_err(|_| {
        MeasurementError::InvalidMeasurement(format!("not a number: {display:?}"))
    })?;
    check_canonical(value)?;
    Ok(value)
}
