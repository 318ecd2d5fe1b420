// ABOUTME: Derives a daily weather feature vector from one observation plus prior assembled days
// ABOUTME: Apparent temperature, dew point, 24h deltas, pressure trend, seasonality, rolling symptom features
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barometer Contributors

//! Feature derivation for the correlation engine.
//!
//! `FeatureDeriver` is a pure function of one day's observation and the
//! already-built history. History is only ever read, newest entries last,
//! so rolling features for day *d* see strictly earlier days.

use crate::assembler::DailyDataPoint;
use crate::meteorological_constants::{
    dew_point, heat_index, neutral_defaults, pressure_trend, rolling_windows, wind_chill,
    SEASONAL_FACTOR_BY_MONTH,
};
use barometer_core::constants::unit_conversions::KMH_TO_MS_FACTOR;
use barometer_core::models::WeatherObservation;
use chrono::{Datelike, NaiveDate, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// Five-band classification of the 24h pressure change
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PressureTrend {
    /// Dropped more than 3 hPa
    RapidlyFalling,
    /// Dropped more than 1 hPa
    Falling,
    /// Within ±1 hPa
    #[default]
    Steady,
    /// Rose more than 1 hPa
    Rising,
    /// Rose more than 3 hPa
    RapidlyRising,
}

impl PressureTrend {
    /// Classify a 24h pressure change (hPa)
    #[must_use]
    pub fn from_change(change_hpa: f64) -> Self {
        if change_hpa > pressure_trend::RAPID_CHANGE_HPA {
            Self::RapidlyRising
        } else if change_hpa > pressure_trend::CHANGE_HPA {
            Self::Rising
        } else if change_hpa < -pressure_trend::RAPID_CHANGE_HPA {
            Self::RapidlyFalling
        } else if change_hpa < -pressure_trend::CHANGE_HPA {
            Self::Falling
        } else {
            Self::Steady
        }
    }
}

/// Everything the engine knows about one day's weather
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherFeatureVector {
    /// Air temperature (Celsius)
    pub temperature_celsius: f64,
    /// Relative humidity (percent)
    pub humidity_percent: f64,
    /// Barometric pressure (hPa)
    pub pressure_hpa: f64,
    /// Wind speed (km/h)
    pub wind_speed_kmh: f64,
    /// UV index
    pub uv_index: f64,
    /// Probability of precipitation (0-1)
    pub precipitation_probability: f64,
    /// Temperature change since the previous day with weather data
    pub temperature_change_24h: f64,
    /// Pressure change since the previous day with weather data
    pub pressure_change_24h: f64,
    /// Humidity change since the previous day with weather data
    pub humidity_change_24h: f64,
    /// Heat index / wind chill / raw temperature (Celsius)
    pub apparent_temperature_celsius: f64,
    /// Dew point (Celsius)
    pub dew_point_celsius: f64,
    /// Banded pressure change
    pub pressure_trend: PressureTrend,
    /// Hour of the observation (0-23)
    pub hour_of_day: u32,
    /// Weekday of the observation
    pub day_of_week: Weekday,
    /// Seasonal propensity (0-1)
    pub seasonal_factor: f64,
    /// A symptom occurred on any of the three previous days
    pub symptom_in_last_3_days: bool,
    /// Mean recorded intensity over the seven previous days (0 if none)
    pub avg_intensity_last_7_days: f64,
}

/// Stateless feature derivation
pub struct FeatureDeriver;

impl FeatureDeriver {
    /// Build the feature vector for an observed day
    #[must_use]
    pub fn derive(
        observation: &WeatherObservation,
        history: &[DailyDataPoint],
    ) -> WeatherFeatureVector {
        let previous = history
            .iter()
            .rev()
            .find(|point| point.has_weather_data)
            .map(|point| &point.features);

        let (temperature_change, pressure_change, humidity_change) =
            previous.map_or((0.0, 0.0, 0.0), |prev| {
                (
                    observation.temperature_celsius - prev.temperature_celsius,
                    observation.pressure_hpa - prev.pressure_hpa,
                    observation.humidity_percent - prev.humidity_percent,
                )
            });

        let observed_at = observation.observation_time();

        WeatherFeatureVector {
            temperature_celsius: observation.temperature_celsius,
            humidity_percent: observation.humidity_percent,
            pressure_hpa: observation.pressure_hpa,
            wind_speed_kmh: observation.wind_speed_kmh,
            uv_index: observation.uv_index,
            precipitation_probability: observation.precipitation_probability,
            temperature_change_24h: temperature_change,
            pressure_change_24h: pressure_change,
            humidity_change_24h: humidity_change,
            apparent_temperature_celsius: Self::apparent_temperature(
                observation.temperature_celsius,
                observation.humidity_percent,
                observation.wind_speed_kmh,
            ),
            dew_point_celsius: Self::dew_point(
                observation.temperature_celsius,
                observation.humidity_percent,
            ),
            pressure_trend: PressureTrend::from_change(pressure_change),
            hour_of_day: observed_at.hour(),
            day_of_week: observation.date.weekday(),
            seasonal_factor: Self::seasonal_factor(observation.date.month()),
            symptom_in_last_3_days: Self::symptom_in_recent_days(history),
            avg_intensity_last_7_days: Self::recent_average_intensity(history),
        }
    }

    /// Neutral vector for a day with no weather observation.
    ///
    /// Weather fields sit at fixed midpoints; the rolling symptom features
    /// are still computed so the history stays meaningful for later days.
    #[must_use]
    pub fn neutral(date: NaiveDate, history: &[DailyDataPoint]) -> WeatherFeatureVector {
        WeatherFeatureVector {
            temperature_celsius: neutral_defaults::TEMPERATURE_CELSIUS,
            humidity_percent: neutral_defaults::HUMIDITY_PERCENT,
            pressure_hpa: neutral_defaults::PRESSURE_HPA,
            wind_speed_kmh: neutral_defaults::WIND_SPEED_KMH,
            uv_index: neutral_defaults::UV_INDEX,
            precipitation_probability: neutral_defaults::PRECIPITATION_PROBABILITY,
            temperature_change_24h: 0.0,
            pressure_change_24h: 0.0,
            humidity_change_24h: 0.0,
            apparent_temperature_celsius: neutral_defaults::TEMPERATURE_CELSIUS,
            dew_point_celsius: Self::dew_point(
                neutral_defaults::TEMPERATURE_CELSIUS,
                neutral_defaults::HUMIDITY_PERCENT,
            ),
            pressure_trend: PressureTrend::Steady,
            hour_of_day: 12,
            day_of_week: date.weekday(),
            seasonal_factor: neutral_defaults::SEASONAL_FACTOR,
            symptom_in_last_3_days: Self::symptom_in_recent_days(history),
            avg_intensity_last_7_days: Self::recent_average_intensity(history),
        }
    }

    /// Apparent ("feels like") temperature in Celsius
    #[must_use]
    pub fn apparent_temperature(
        temperature_celsius: f64,
        humidity_percent: f64,
        wind_speed_kmh: f64,
    ) -> f64 {
        if temperature_celsius >= heat_index::MIN_TEMPERATURE_CELSIUS
            && humidity_percent >= heat_index::MIN_HUMIDITY_PERCENT
        {
            Self::heat_index(temperature_celsius, humidity_percent)
        } else if temperature_celsius <= wind_chill::MAX_TEMPERATURE_CELSIUS
            && wind_speed_kmh > wind_chill::MIN_WIND_SPEED_KMH
        {
            Self::wind_chill(temperature_celsius, wind_speed_kmh * KMH_TO_MS_FACTOR)
        } else {
            temperature_celsius
        }
    }

    /// Rothfusz heat index, evaluated in Fahrenheit and returned in Celsius
    fn heat_index(temperature_celsius: f64, humidity_percent: f64) -> f64 {
        let t = temperature_celsius.mul_add(9.0 / 5.0, 32.0);
        let rh = humidity_percent;

        let fahrenheit = heat_index::C9.mul_add(
            t * t * rh * rh,
            heat_index::C8.mul_add(
                t * rh * rh,
                heat_index::C7.mul_add(
                    t * t * rh,
                    heat_index::C6.mul_add(
                        rh * rh,
                        heat_index::C5.mul_add(
                            t * t,
                            heat_index::C4.mul_add(
                                t * rh,
                                heat_index::C3
                                    .mul_add(rh, heat_index::C2.mul_add(t, heat_index::C1)),
                            ),
                        ),
                    ),
                ),
            ),
        );

        (fahrenheit - 32.0) * 5.0 / 9.0
    }

    /// Wind chill with wind speed in m/s
    fn wind_chill(temperature_celsius: f64, wind_speed_ms: f64) -> f64 {
        let wind_term = wind_speed_ms.powf(wind_chill::WIND_EXPONENT);
        wind_chill::MIXED_COEF.mul_add(
            temperature_celsius * wind_term,
            wind_chill::WIND_COEF.mul_add(
                wind_term,
                wind_chill::TEMPERATURE_COEF.mul_add(temperature_celsius, wind_chill::BASE),
            ),
        )
    }

    /// Magnus-formula dew point in Celsius
    #[must_use]
    pub fn dew_point(temperature_celsius: f64, humidity_percent: f64) -> f64 {
        let rh = humidity_percent.clamp(dew_point::MIN_HUMIDITY_PERCENT, 100.0);
        let gamma = (dew_point::MAGNUS_A * temperature_celsius)
            / (dew_point::MAGNUS_B + temperature_celsius)
            + (rh / 100.0).ln();
        dew_point::MAGNUS_B * gamma / (dew_point::MAGNUS_A - gamma)
    }

    /// Seasonal propensity for a calendar month (1-12)
    #[must_use]
    pub fn seasonal_factor(month: u32) -> f64 {
        month
            .checked_sub(1)
            .and_then(|index| SEASONAL_FACTOR_BY_MONTH.get(index as usize))
            .copied()
            .unwrap_or(neutral_defaults::SEASONAL_FACTOR)
    }

    fn symptom_in_recent_days(history: &[DailyDataPoint]) -> bool {
        history
            .iter()
            .rev()
            .take(rolling_windows::RECENT_OCCURRENCE_DAYS)
            .any(|point| point.symptom_occurred)
    }

    fn recent_average_intensity(history: &[DailyDataPoint]) -> f64 {
        let intensities: Vec<f64> = history
            .iter()
            .rev()
            .take(rolling_windows::INTENSITY_AVERAGE_DAYS)
            .filter_map(|point| point.intensity)
            .collect();

        if intensities.is_empty() {
            0.0
        } else {
            intensities.iter().sum::<f64>() / intensities.len() as f64
        }
    }
}
