// ABOUTME: Tests for JSON snapshot loading and the barometer-cli binary
// ABOUTME: Writes snapshots to temporary directories and runs the analysis end to end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barometer Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use barometer::errors::ErrorCode;
use barometer::input::{load_symptoms, load_weather};
use barometer::intelligence::AnalysisResult;
use common::{symptoms_on, today, weather_series};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn write_json<T: serde::Serialize>(dir: &Path, name: &str, value: &T) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

/// Pressure-drop scenario written as CLI input files
fn pressure_scenario(dir: &Path) -> (PathBuf, PathBuf) {
    let weather = weather_series(today(), 90, |day, obs| {
        if (10..=15).contains(&day) {
            obs.pressure_hpa = 1000.0;
        }
    });
    let observations: Vec<_> = weather.iter().cloned().collect();
    let symptoms = symptoms_on(today(), 90, 11..=16);
    (
        write_json(dir, "weather.json", &observations),
        write_json(dir, "symptoms.json", &symptoms),
    )
}

#[test]
fn test_load_round_trip_through_files() {
    let dir = TempDir::new().unwrap();
    let (weather_path, symptoms_path) = pressure_scenario(dir.path());

    let weather = load_weather(&weather_path).unwrap();
    let symptoms = load_symptoms(&symptoms_path).unwrap();
    assert_eq!(weather.len(), 90);
    assert_eq!(symptoms.len(), 6);
    assert_eq!(symptoms[0].symptom.as_deref(), Some("migraine"));
}

#[test]
fn test_symptom_ids_are_optional() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("symptoms.json");
    fs::write(
        &path,
        r#"[{"timestamp": "2025-09-01T07:30:00Z", "intensity": 4},
            {"timestamp": "2025-09-02T21:10:00Z", "intensity": 8, "symptom": "joint pain"}]"#,
    )
    .unwrap();

    let records = load_symptoms(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert_ne!(records[0].id, records[1].id);
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let error = load_weather(&dir.path().join("absent.json")).unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert!(error.message.contains("absent.json"));
}

#[test]
fn test_implausible_pressure_rejected_with_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("weather.json");
    fs::write(
        &path,
        r#"[{"date": "2025-09-01", "temperature_celsius": 12.0, "humidity_percent": 70.0,
             "pressure_hpa": 101.3, "wind_speed_kmh": 5.0, "uv_index": 2.0,
             "precipitation_probability": 0.1}]"#,
    )
    .unwrap();

    let error = load_weather(&path).unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert!(error.message.contains("weather.json"));
    assert!(error.message.contains("pressure_hpa"));
}

#[test]
fn test_cli_analyze_json_output() {
    let dir = TempDir::new().unwrap();
    let (weather_path, symptoms_path) = pressure_scenario(dir.path());

    let output = Command::new(env!("CARGO_BIN_EXE_barometer-cli"))
        .arg("analyze")
        .arg("--weather")
        .arg(&weather_path)
        .arg("--symptoms")
        .arg(&symptoms_path)
        .args(["--today", "2025-09-30", "--format", "json"])
        .env_remove("BAROMETER_WINDOW_DAYS")
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let result: AnalysisResult = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result.quality.total_days, 90);
    assert!(result.strongest_significant().is_some());
}

#[test]
fn test_cli_reports_invalid_input_exit_code() {
    let dir = TempDir::new().unwrap();
    let weather_path = dir.path().join("weather.json");
    let symptoms_path = dir.path().join("symptoms.json");
    fs::write(&weather_path, "[]").unwrap();
    fs::write(&symptoms_path, "{ not json").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_barometer-cli"))
        .arg("analyze")
        .arg("--weather")
        .arg(&weather_path)
        .arg("--symptoms")
        .arg(&symptoms_path)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let expected = i32::from(ErrorCode::InvalidFormat.exit_code());
    assert_eq!(output.status.code(), Some(expected));
    assert!(String::from_utf8_lossy(&output.stderr).contains("symptoms.json"));
}

#[test]
fn test_cli_features_lists_every_day() {
    let dir = TempDir::new().unwrap();
    let (weather_path, symptoms_path) = pressure_scenario(dir.path());

    let output = Command::new(env!("CARGO_BIN_EXE_barometer-cli"))
        .arg("features")
        .arg("--weather")
        .arg(&weather_path)
        .arg("--symptoms")
        .arg(&symptoms_path)
        .args(["--today", "2025-09-30", "--window-days", "14"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    // Header plus one line per day
    assert_eq!(stdout.lines().count(), 15);
    assert!(stdout.contains("2025-09-30"));
}
