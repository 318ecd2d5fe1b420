// ABOUTME: Builds one DailyDataPoint per calendar day over the trailing analysis window
// ABOUTME: Joins symptom occurrence with derived weather features; history builds on itself day by day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barometer Contributors

//! Daily data point assembly.
//!
//! The output covers `[today - window + 1, today]` with exactly one point
//! per day, contiguous and sorted. Days without a weather observation get
//! a neutral feature vector and `has_weather_data = false`.

use crate::features::{FeatureDeriver, WeatherFeatureVector};
use barometer_core::constants::limits;
use barometer_core::models::{SymptomRecord, WeatherHistory, WeatherObservation};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// One calendar day of joined symptom and weather data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyDataPoint {
    /// Calendar day
    pub date: NaiveDate,
    /// At least one symptom record exists for this day
    pub symptom_occurred: bool,
    /// Intensity of the first record of the day
    pub intensity: Option<f64>,
    /// A weather observation existed for this day
    pub has_weather_data: bool,
    /// Derived features (neutral defaults when `has_weather_data` is false)
    pub features: WeatherFeatureVector,
    /// Day lies inside the analysis window
    pub in_range: bool,
}

impl DailyDataPoint {
    /// Occurrence as a 1.0/0.0 indicator
    #[must_use]
    pub fn occurrence_flag(&self) -> f64 {
        if self.symptom_occurred {
            1.0
        } else {
            0.0
        }
    }

    /// Point for a day with a weather observation
    #[must_use]
    pub fn with_weather(
        observation: &WeatherObservation,
        symptom_occurred: bool,
        intensity: Option<f64>,
        history: &[Self],
    ) -> Self {
        Self {
            date: observation.date,
            symptom_occurred,
            intensity,
            has_weather_data: true,
            features: FeatureDeriver::derive(observation, history),
            in_range: true,
        }
    }

    /// Point for a day without a weather observation
    #[must_use]
    pub fn without_weather(
        date: NaiveDate,
        symptom_occurred: bool,
        intensity: Option<f64>,
        history: &[Self],
    ) -> Self {
        Self {
            date,
            symptom_occurred,
            intensity,
            has_weather_data: false,
            features: FeatureDeriver::neutral(date, history),
            in_range: true,
        }
    }
}

/// Window assembly over immutable snapshots
pub struct DataPointAssembler;

impl DataPointAssembler {
    /// Assemble the trailing window ending at `today` (inclusive).
    ///
    /// The window is clamped to `[1, MAX_WINDOW_DAYS]` and never reaches
    /// back past the earliest representable date.
    #[must_use]
    pub fn assemble(
        symptoms: &[SymptomRecord],
        weather: &WeatherHistory,
        window_days: u32,
        today: NaiveDate,
    ) -> Vec<DailyDataPoint> {
        let start = Self::window_start(window_days, today);
        let first_records = Self::first_record_per_day(symptoms, start, today);

        let mut points: Vec<DailyDataPoint> = Vec::new();
        for date in start.iter_days().take_while(|date| *date <= today) {
            let record = first_records.get(&date);
            let occurred = record.is_some();
            let intensity = record.map(|r| f64::from(r.intensity));

            let point = weather.get(date).map_or_else(
                || DailyDataPoint::without_weather(date, occurred, intensity, &points),
                |observation| {
                    DailyDataPoint::with_weather(observation, occurred, intensity, &points)
                },
            );
            points.push(point);
        }

        debug!(
            start = %start,
            end = %today,
            days = points.len(),
            weather_days = points.iter().filter(|p| p.has_weather_data).count(),
            symptom_days = points.iter().filter(|p| p.symptom_occurred).count(),
            "assembled daily data points"
        );

        points
    }

    /// First day of the clamped window ending at `today`
    fn window_start(window_days: u32, today: NaiveDate) -> NaiveDate {
        let window_days = window_days.clamp(1, limits::MAX_WINDOW_DAYS);
        let span = i64::from(window_days - 1);
        let reachable = today.signed_duration_since(NaiveDate::MIN).num_days();
        let back = span.min(reachable).unsigned_abs();
        today.checked_sub_days(Days::new(back)).unwrap_or(today)
    }

    /// First record (by timestamp) for each day inside `[start, end]`.
    ///
    /// Ties on timestamp keep input order.
    fn first_record_per_day(
        symptoms: &[SymptomRecord],
        start: NaiveDate,
        end: NaiveDate,
    ) -> BTreeMap<NaiveDate, &SymptomRecord> {
        let mut by_day: BTreeMap<NaiveDate, &SymptomRecord> = BTreeMap::new();
        for record in symptoms {
            let date = record.date();
            if date < start || date > end {
                continue;
            }
            by_day
                .entry(date)
                .and_modify(|existing| {
                    if record.timestamp < existing.timestamp {
                        *existing = record;
                    }
                })
                .or_insert(record);
        }
        by_day
    }
}
