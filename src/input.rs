// ABOUTME: Loads weather and symptom snapshots from JSON files for offline analysis
// ABOUTME: Validates every record and applies the same-day-replaces rule to weather input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barometer Contributors

//! Snapshot loading
//!
//! Both files hold a JSON array. Weather observations are keyed by date;
//! when the array holds several observations for one day the last one wins.

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{SymptomRecord, WeatherHistory, WeatherObservation};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Load a weather history from a JSON array of observations
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or holds
/// an implausible observation
pub fn load_weather(path: &Path) -> AppResult<WeatherHistory> {
    let contents = read_snapshot(path)?;
    let history = parse_weather(&contents).map_err(|e| with_path(path, e))?;
    info!(path = %path.display(), days = history.len(), "loaded weather history");
    Ok(history)
}

/// Load symptom records from a JSON array
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or holds
/// a record with an intensity outside the diary scale
pub fn load_symptoms(path: &Path) -> AppResult<Vec<SymptomRecord>> {
    let contents = read_snapshot(path)?;
    let records = parse_symptoms(&contents).map_err(|e| with_path(path, e))?;
    info!(path = %path.display(), records = records.len(), "loaded symptom records");
    Ok(records)
}

/// Parse and validate weather observations
///
/// # Errors
///
/// Returns `InvalidFormat` for malformed JSON and `ValueOutOfRange` for an
/// implausible observation
pub fn parse_weather(json: &str) -> AppResult<WeatherHistory> {
    let observations: Vec<WeatherObservation> =
        serde_json::from_str(json).map_err(invalid_format)?;

    let mut history = WeatherHistory::new();
    for observation in observations {
        observation.validate()?;
        let date = observation.date;
        if history.upsert(observation).is_some() {
            debug!(%date, "replaced earlier observation for the same day");
        }
    }
    Ok(history)
}

/// Parse and validate symptom records
///
/// # Errors
///
/// Returns `InvalidFormat` for malformed JSON and `ValueOutOfRange` for an
/// intensity outside 1-10
pub fn parse_symptoms(json: &str) -> AppResult<Vec<SymptomRecord>> {
    let records: Vec<SymptomRecord> = serde_json::from_str(json).map_err(invalid_format)?;
    for record in &records {
        record.validate()?;
    }
    Ok(records)
}

fn read_snapshot(path: &Path) -> AppResult<String> {
    fs::read_to_string(path).map_err(|e| with_path(path, AppError::from(e)))
}

/// Prefix the message with the offending file
fn with_path(path: &Path, error: AppError) -> AppError {
    AppError {
        message: format!("{}: {}", path.display(), error.message),
        ..error
    }
}

fn invalid_format(error: serde_json::Error) -> AppError {
    AppError::new(ErrorCode::InvalidFormat, error.to_string()).with_source(error)
}
