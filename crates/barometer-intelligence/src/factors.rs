// ABOUTME: Candidate weather factors tested independently against symptom occurrence
// ABOUTME: Each factor knows its display name and how to read its value from a feature vector
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barometer Contributors

use crate::features::WeatherFeatureVector;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single weather-derived scalar tested for correlation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherFactor {
    /// Air temperature
    Temperature,
    /// 24h temperature change
    TemperatureChange,
    /// Barometric pressure
    Pressure,
    /// 24h pressure change
    PressureChange,
    /// Relative humidity
    Humidity,
    /// Wind speed
    WindSpeed,
    /// UV index
    UvIndex,
    /// Probability of precipitation
    Precipitation,
}

impl WeatherFactor {
    /// Every candidate, in evaluation order
    pub const ALL: [Self; 8] = [
        Self::Temperature,
        Self::TemperatureChange,
        Self::Pressure,
        Self::PressureChange,
        Self::Humidity,
        Self::WindSpeed,
        Self::UvIndex,
        Self::Precipitation,
    ];

    /// Read this factor's value from a feature vector
    #[must_use]
    pub const fn value(self, features: &WeatherFeatureVector) -> f64 {
        match self {
            Self::Temperature => features.temperature_celsius,
            Self::TemperatureChange => features.temperature_change_24h,
            Self::Pressure => features.pressure_hpa,
            Self::PressureChange => features.pressure_change_24h,
            Self::Humidity => features.humidity_percent,
            Self::WindSpeed => features.wind_speed_kmh,
            Self::UvIndex => features.uv_index,
            Self::Precipitation => features.precipitation_probability,
        }
    }

    /// Human-readable name used in insights
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::TemperatureChange => "Temperature change",
            Self::Pressure => "Barometric pressure",
            Self::PressureChange => "Pressure change",
            Self::Humidity => "Humidity",
            Self::WindSpeed => "Wind speed",
            Self::UvIndex => "UV index",
            Self::Precipitation => "Precipitation chance",
        }
    }

    /// Unit suffix for threshold values
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Temperature | Self::TemperatureChange => "°C",
            Self::Pressure | Self::PressureChange => " hPa",
            Self::Humidity => "%",
            Self::WindSpeed => " km/h",
            Self::UvIndex | Self::Precipitation => "",
        }
    }
}

impl fmt::Display for WeatherFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
