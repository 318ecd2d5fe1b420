// ABOUTME: Shared fixtures for integration tests: weather series and symptom diaries
// ABOUTME: Builds deterministic snapshots anchored on a fixed "today"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barometer Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `barometer`
//!
//! Day numbers are 1-based positions inside the window: day 1 is the first
//! (oldest) day and day `window` is `today`.

use barometer::models::{SymptomRecord, WeatherHistory, WeatherObservation};
use chrono::{Days, NaiveDate, TimeZone, Utc};

/// Fixed anchor for 90-day scenarios
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 30).unwrap()
}

/// Calendar date of a 1-based window day
pub fn window_day(today: NaiveDate, window: u32, day: u32) -> NaiveDate {
    today
        .checked_sub_days(Days::new(u64::from(window - day)))
        .unwrap()
}

/// Mild, unremarkable weather
pub fn calm_weather(date: NaiveDate) -> WeatherObservation {
    WeatherObservation {
        date,
        observed_at: None,
        temperature_celsius: 18.0,
        humidity_percent: 60.0,
        pressure_hpa: 1015.0,
        wind_speed_kmh: 10.0,
        uv_index: 4.0,
        precipitation_probability: 0.2,
    }
}

/// Weather for every day of the window, customised per day
pub fn weather_series(
    today: NaiveDate,
    window: u32,
    customise: impl Fn(u32, &mut WeatherObservation),
) -> WeatherHistory {
    (1..=window)
        .map(|day| {
            let mut observation = calm_weather(window_day(today, window, day));
            customise(day, &mut observation);
            observation
        })
        .collect()
}

/// Weather that varies on every axis without any relationship to symptoms
pub fn varied_weather(today: NaiveDate, window: u32) -> WeatherHistory {
    weather_series(today, window, |day, obs| {
        let phase = f64::from(day);
        obs.temperature_celsius = 8.0f64.mul_add((phase / 5.0).sin(), 15.0);
        obs.humidity_percent = 20.0f64.mul_add((phase / 3.0).cos(), 60.0);
        obs.pressure_hpa = 9.0f64.mul_add((phase / 7.0).sin(), 1012.0);
        obs.wind_speed_kmh = f64::from(day % 11) * 2.0;
        obs.uv_index = f64::from(day % 9);
        obs.precipitation_probability = f64::from(day % 10) / 10.0;
    })
}

/// One record at 09:00 UTC on each listed window day
pub fn symptoms_on(
    today: NaiveDate,
    window: u32,
    days: impl IntoIterator<Item = u32>,
) -> Vec<SymptomRecord> {
    days.into_iter()
        .map(|day| {
            let date = window_day(today, window, day);
            let timestamp = Utc
                .from_utc_datetime(&date.and_hms_opt(9, 0, 0).unwrap());
            SymptomRecord::new(timestamp, 6).with_symptom("migraine")
        })
        .collect()
}
