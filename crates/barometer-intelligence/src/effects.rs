// ABOUTME: Heuristic effect-shape classification for a factor's relationship with occurrence
// ABOUTME: Threshold (pressure, humidity), extreme-value non-linear (temperature), or linear direction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barometer Contributors

//! Effect classification
//!
//! Not a formal statistical test: the classifier compares occurrence rates
//! on either side of a fixed split and calls it a threshold or non-linear
//! effect when one side exceeds the other by the configured bucket ratio.
//! Everything else falls back to the sign of the correlation.

use crate::config::EffectThresholdsConfig;
use crate::factors::WeatherFactor;
use serde::{Deserialize, Serialize};

/// Shape of a factor's relationship with symptom occurrence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum EffectClassification {
    /// Occurrence rises with the factor
    Positive,
    /// Occurrence falls as the factor rises
    Negative,
    /// Step change in occurrence when the factor crosses this value
    Threshold(f64),
    /// Extreme-value driven, or too weak to call directional
    Nonlinear,
}

impl EffectClassification {
    /// Threshold crossing value, if this is a threshold effect
    #[must_use]
    pub const fn threshold_value(self) -> Option<f64> {
        match self {
            Self::Threshold(value) => Some(value),
            _ => None,
        }
    }
}

/// Occurrence tally for one side of a split
#[derive(Debug, Default, Clone, Copy)]
struct Bucket {
    days: usize,
    occurrences: f64,
}

impl Bucket {
    fn add(&mut self, occurrence: f64) {
        self.days += 1;
        self.occurrences += occurrence;
    }

    fn rate(self) -> f64 {
        if self.days == 0 {
            0.0
        } else {
            self.occurrences / self.days as f64
        }
    }
}

/// Stateless effect classification
pub struct EffectClassifier;

impl EffectClassifier {
    /// Classify a factor given its paired (value, occurrence) series and correlation
    #[must_use]
    pub fn classify(
        factor: WeatherFactor,
        values: &[f64],
        occurrences: &[f64],
        correlation: f64,
        config: &EffectThresholdsConfig,
    ) -> EffectClassification {
        let heuristic = match factor {
            WeatherFactor::Pressure => {
                let threshold = config.pressure_threshold_hpa;
                let (low, high) = Self::split(values, occurrences, |v| v < threshold);
                Self::dominates(low, high, config.bucket_ratio)
                    .then_some(EffectClassification::Threshold(threshold))
            }
            WeatherFactor::Humidity => {
                let threshold = config.humidity_threshold_percent;
                let (humid, dry) = Self::split(values, occurrences, |v| v > threshold);
                Self::dominates(humid, dry, config.bucket_ratio)
                    .then_some(EffectClassification::Threshold(threshold))
            }
            WeatherFactor::Temperature => {
                let (cold, hot) = (config.extreme_cold_celsius, config.extreme_hot_celsius);
                let (extreme, normal) =
                    Self::split(values, occurrences, |v| v < cold || v > hot);
                Self::dominates(extreme, normal, config.bucket_ratio)
                    .then_some(EffectClassification::Nonlinear)
            }
            _ => None,
        };

        heuristic.unwrap_or_else(|| Self::linear(correlation, config.directional_correlation_floor))
    }

    /// Generic rule: too weak to call directional, else the sign of r
    #[must_use]
    pub fn linear(correlation: f64, directional_floor: f64) -> EffectClassification {
        if correlation.abs() < directional_floor {
            EffectClassification::Nonlinear
        } else if correlation > 0.0 {
            EffectClassification::Positive
        } else {
            EffectClassification::Negative
        }
    }

    /// Partition pairs into (matching, rest) buckets
    fn split(
        values: &[f64],
        occurrences: &[f64],
        predicate: impl Fn(f64) -> bool,
    ) -> (Bucket, Bucket) {
        let mut matching = Bucket::default();
        let mut rest = Bucket::default();
        for (&value, &occurrence) in values.iter().zip(occurrences) {
            if predicate(value) {
                matching.add(occurrence);
            } else {
                rest.add(occurrence);
            }
        }
        (matching, rest)
    }

    /// Both buckets populated and `candidate` rate above `ratio` times `baseline` rate
    fn dominates(candidate: Bucket, baseline: Bucket, ratio: f64) -> bool {
        candidate.days > 0 && baseline.days > 0 && candidate.rate() > ratio * baseline.rate()
    }
}
