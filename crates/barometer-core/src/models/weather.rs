// ABOUTME: Daily weather observation model and a date-keyed history with replace-on-update semantics
// ABOUTME: Validates physical ranges so malformed provider data is rejected at ingestion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barometer Contributors

use crate::constants::limits::{MAX_PLAUSIBLE_PRESSURE_HPA, MIN_PLAUSIBLE_PRESSURE_HPA};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};

/// Hour used when an observation carries no explicit timestamp
const DEFAULT_OBSERVATION_HOUR: u32 = 12;

/// One day of weather as delivered by the weather data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Calendar day this observation describes
    pub date: NaiveDate,
    /// When the reading was taken; defaults to noon of `date`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_at: Option<DateTime<Utc>>,
    /// Air temperature in Celsius
    pub temperature_celsius: f64,
    /// Relative humidity (0-100)
    pub humidity_percent: f64,
    /// Barometric pressure in hPa
    pub pressure_hpa: f64,
    /// Wind speed in km/h
    pub wind_speed_kmh: f64,
    /// UV index
    pub uv_index: f64,
    /// Probability of precipitation (0.0-1.0)
    pub precipitation_probability: f64,
}

impl WeatherObservation {
    /// Timestamp of the reading, falling back to noon UTC of the observation day
    #[must_use]
    pub fn observation_time(&self) -> DateTime<Utc> {
        self.observed_at.unwrap_or_else(|| {
            let noon = NaiveTime::from_hms_opt(DEFAULT_OBSERVATION_HOUR, 0, 0).unwrap_or_default();
            self.date.and_time(noon).and_utc()
        })
    }

    /// Check that every field is finite and physically plausible
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` naming the first offending field
    pub fn validate(&self) -> AppResult<()> {
        let fields = [
            ("temperature_celsius", self.temperature_celsius),
            ("humidity_percent", self.humidity_percent),
            ("pressure_hpa", self.pressure_hpa),
            ("wind_speed_kmh", self.wind_speed_kmh),
            ("uv_index", self.uv_index),
            ("precipitation_probability", self.precipitation_probability),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(AppError::out_of_range(format!(
                "{name} is not a finite number on {}",
                self.date
            )));
        }

        if !(0.0..=100.0).contains(&self.humidity_percent) {
            return Err(AppError::out_of_range(format!(
                "humidity_percent {} outside 0-100 on {}",
                self.humidity_percent, self.date
            )));
        }
        if !(MIN_PLAUSIBLE_PRESSURE_HPA..=MAX_PLAUSIBLE_PRESSURE_HPA).contains(&self.pressure_hpa) {
            return Err(AppError::out_of_range(format!(
                "pressure_hpa {} outside {MIN_PLAUSIBLE_PRESSURE_HPA}-{MAX_PLAUSIBLE_PRESSURE_HPA} on {}",
                self.pressure_hpa, self.date
            )));
        }
        if self.wind_speed_kmh < 0.0 || self.uv_index < 0.0 {
            return Err(AppError::out_of_range(format!(
                "wind speed and UV index must be non-negative on {}",
                self.date
            )));
        }
        if !(0.0..=1.0).contains(&self.precipitation_probability) {
            return Err(AppError::out_of_range(format!(
                "precipitation_probability {} outside 0-1 on {}",
                self.precipitation_probability, self.date
            )));
        }
        Ok(())
    }
}

/// Weather observations keyed by calendar day.
///
/// At most one observation exists per day: a later observation for the same
/// day replaces the earlier one rather than being appended.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherHistory {
    by_date: BTreeMap<NaiveDate, WeatherObservation>,
}

impl WeatherHistory {
    /// Create an empty history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an observation, returning the one it replaced (if any)
    pub fn upsert(&mut self, observation: WeatherObservation) -> Option<WeatherObservation> {
        self.by_date.insert(observation.date, observation)
    }

    /// Observation recorded for `date`
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&WeatherObservation> {
        self.by_date.get(&date)
    }

    /// Number of days with an observation
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    /// True when no observations have been ingested
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    /// Observations in ascending date order
    pub fn iter(&self) -> btree_map::Values<'_, NaiveDate, WeatherObservation> {
        self.by_date.values()
    }
}

impl FromIterator<WeatherObservation> for WeatherHistory {
    fn from_iter<I: IntoIterator<Item = WeatherObservation>>(iter: I) -> Self {
        let mut history = Self::new();
        for observation in iter {
            history.upsert(observation);
        }
        history
    }
}

impl<'a> IntoIterator for &'a WeatherHistory {
    type Item = &'a WeatherObservation;
    type IntoIter = btree_map::Values<'a, NaiveDate, WeatherObservation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn observation(day: u32, pressure: f64) -> WeatherObservation {
        WeatherObservation {
            date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
            observed_at: None,
            temperature_celsius: 12.0,
            humidity_percent: 60.0,
            pressure_hpa: pressure,
            wind_speed_kmh: 8.0,
            uv_index: 3.0,
            precipitation_probability: 0.2,
        }
    }

    #[test]
    fn test_same_day_update_replaces() {
        let mut history = WeatherHistory::new();
        assert!(history.upsert(observation(4, 1012.0)).is_none());
        let replaced = history.upsert(observation(4, 1001.0));

        assert_eq!(replaced.map(|o| o.pressure_hpa), Some(1012.0));
        assert_eq!(history.len(), 1);
        let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        assert_eq!(history.get(date).map(|o| o.pressure_hpa), Some(1001.0));
    }

    #[test]
    fn test_iteration_is_date_ordered() {
        let history: WeatherHistory = vec![observation(9, 1010.0), observation(2, 1011.0)]
            .into_iter()
            .collect();
        let days: Vec<NaiveDate> = history.iter().map(|o| o.date).collect();
        assert!(days.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_default_observation_time_is_noon() {
        assert_eq!(observation(1, 1013.0).observation_time().hour(), 12);
    }

    #[test]
    fn test_validate_rejects_impossible_values() {
        let mut bad = observation(1, 1013.0);
        bad.humidity_percent = 140.0;
        assert!(bad.validate().is_err());

        let mut nan = observation(1, 1013.0);
        nan.temperature_celsius = f64::NAN;
        assert!(nan.validate().is_err());

        assert!(observation(1, 1013.0).validate().is_ok());
    }
}
