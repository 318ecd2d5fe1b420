// ABOUTME: Tunable policy for the correlation engine: window, statistics, effect shapes, insights
// ABOUTME: Defaults reproduce the diary's established heuristics (0.05, 1.5x, 1.3x, 30/20 days)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barometer Contributors

//! Analysis Configuration Sections
//!
//! Every heuristic constant the engine uses lives here as named,
//! serialisable configuration. The bucket-ratio and seasonal-dominance
//! multipliers are empirical choices, not derived statistics.

use serde::{Deserialize, Serialize};

/// Which days count as "overlapping" (usable for correlation)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// Every day with weather data is in symptom context; a day without a
    /// diary record is an observed non-occurrence
    #[default]
    WeatherOnly,
    /// Only days that have weather data and at least one symptom record
    RequireSymptomRecord,
}

/// How the t statistic is mapped onto the normal distribution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PValueApproximation {
    /// `p = 2 * (1 - Phi(|t|))`, the large-sample normal approximation
    #[default]
    Normal,
    /// `p = 2 * (1 - Phi(|t| / sqrt(df)))`, the diary's legacy scaling
    DfScaled,
}

/// Analysis window and gating
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Trailing window length in days (ending today, inclusive)
    pub window_days: u32,
    /// Minimum overlapping days before correlation analysis runs
    pub min_overlapping_days: usize,
    /// Overlapping-day definition
    pub overlap_policy: OverlapPolicy,
}

/// Statistical test parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticalConfig {
    /// Minimum paired samples per factor; factors below this are omitted
    pub min_sample_size: usize,
    /// p-value below which a correlation is significant
    pub significance_threshold: f64,
    /// Mapping from t statistic to p-value
    pub p_value_approximation: PValueApproximation,
    /// Sample size at which the sample-size component of confidence saturates
    pub full_confidence_sample_size: usize,
    /// Confidence weight for sample-size adequacy
    pub sample_size_weight: f64,
    /// Confidence weight for (1 - p)
    pub significance_weight: f64,
    /// Confidence weight for |r|
    pub effect_size_weight: f64,
    /// Evaluate factors on the rayon pool
    pub parallel_factors: bool,
}

/// Effect-shape heuristics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectThresholdsConfig {
    /// Low-pressure split (hPa)
    pub pressure_threshold_hpa: f64,
    /// High-humidity split (percent)
    pub humidity_threshold_percent: f64,
    /// Temperatures below this are "extreme" (Celsius)
    pub extreme_cold_celsius: f64,
    /// Temperatures above this are "extreme" (Celsius)
    pub extreme_hot_celsius: f64,
    /// One bucket's occurrence rate must exceed the other's by this multiple
    pub bucket_ratio: f64,
    /// Below this |r| a relationship is too weak to call directional
    pub directional_correlation_floor: f64,
}

/// Insight text generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightConfig {
    /// Overlapping days below which a data-volume caveat is emitted
    pub low_overlap_caveat_days: usize,
    /// Coverage (0-1) below which a coverage caveat is emitted
    pub low_coverage_caveat: f64,
    /// Total days required before seasonal grouping is attempted
    pub seasonal_min_total_days: usize,
    /// Days a season needs to take part in the comparison
    pub seasonal_min_days_per_season: usize,
    /// Highest season must exceed the cross-season average by this multiple
    pub seasonal_dominance_ratio: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            window_days: 90,
            min_overlapping_days: 30,
            overlap_policy: OverlapPolicy::default(),
        }
    }
}

impl Default for StatisticalConfig {
    fn default() -> Self {
        Self {
            min_sample_size: 20,
            significance_threshold: 0.05,
            p_value_approximation: PValueApproximation::default(),
            full_confidence_sample_size: 50,
            sample_size_weight: 0.4,
            significance_weight: 0.4,
            effect_size_weight: 0.2,
            parallel_factors: true,
        }
    }
}

impl Default for EffectThresholdsConfig {
    fn default() -> Self {
        Self {
            pressure_threshold_hpa: 1005.0,
            humidity_threshold_percent: 80.0,
            extreme_cold_celsius: 5.0,
            extreme_hot_celsius: 35.0,
            bucket_ratio: 1.5,
            directional_correlation_floor: 0.1,
        }
    }
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            low_overlap_caveat_days: 30,
            low_coverage_caveat: 0.7,
            seasonal_min_total_days: 60,
            seasonal_min_days_per_season: 10,
            seasonal_dominance_ratio: 1.3,
        }
    }
}
