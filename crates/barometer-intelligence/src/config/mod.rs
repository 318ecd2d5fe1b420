// ABOUTME: Analysis configuration container with environment overrides and validation
// ABOUTME: Built explicitly and injected into the analyzer; there is no process-wide instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barometer Contributors

//! Analysis Configuration Module
//!
//! Configuration is organized into sections:
//! - `window` - analysis window length and the insufficient-data gate
//! - `statistics` - sample minimums, significance and confidence blend
//! - `effects` - effect-shape thresholds and bucket ratio
//! - `insights` - caveat limits and seasonal grouping

pub mod analysis;
pub mod error;

pub use analysis::{
    EffectThresholdsConfig, InsightConfig, OverlapPolicy, PValueApproximation, StatisticalConfig,
    WindowConfig,
};
pub use error::ConfigError;

use barometer_core::constants::{env_config, limits};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::debug;

/// Complete configuration for one analysis run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Window length and gating
    pub window: WindowConfig,
    /// Statistical test parameters
    pub statistics: StatisticalConfig,
    /// Effect-shape heuristics
    pub effects: EffectThresholdsConfig,
    /// Insight generation limits
    pub insights: InsightConfig,
}

impl AnalysisConfig {
    /// Load configuration: defaults, then environment overrides, then validation
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(?config, "analysis configuration loaded");
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.window_days == 0 {
            return Err(ConfigError::ValueOutOfRange("window_days must be at least 1"));
        }
        if self.window.window_days > limits::MAX_WINDOW_DAYS {
            return Err(ConfigError::ValueOutOfRange("window_days must not exceed 3660"));
        }

        let stats = &self.statistics;
        if stats.min_sample_size < 3 {
            // The t statistic needs n - 2 > 0 degrees of freedom
            return Err(ConfigError::ValueOutOfRange(
                "min_sample_size must be at least 3",
            ));
        }
        if !(stats.significance_threshold > 0.0 && stats.significance_threshold < 1.0) {
            return Err(ConfigError::InvalidRange(
                "significance_threshold must be between 0 and 1 (exclusive)",
            ));
        }
        if stats.full_confidence_sample_size == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "full_confidence_sample_size must be positive",
            ));
        }
        let weight_sum =
            stats.sample_size_weight + stats.significance_weight + stats.effect_size_weight;
        if (weight_sum - 1.0).abs() > 0.01 {
            return Err(ConfigError::InvalidWeights(
                "Confidence weights must sum to 1.0",
            ));
        }

        let effects = &self.effects;
        if effects.extreme_cold_celsius >= effects.extreme_hot_celsius {
            return Err(ConfigError::InvalidRange(
                "extreme_cold_celsius must be < extreme_hot_celsius",
            ));
        }
        if !(0.0..=100.0).contains(&effects.humidity_threshold_percent) {
            return Err(ConfigError::InvalidRange(
                "humidity_threshold_percent must be between 0 and 100",
            ));
        }
        if effects.bucket_ratio < 1.0 {
            return Err(ConfigError::ValueOutOfRange("bucket_ratio must be >= 1.0"));
        }
        if !(0.0..1.0).contains(&effects.directional_correlation_floor) {
            return Err(ConfigError::InvalidRange(
                "directional_correlation_floor must be in [0, 1)",
            ));
        }

        let insights = &self.insights;
        if !(0.0..=1.0).contains(&insights.low_coverage_caveat) {
            return Err(ConfigError::InvalidRange(
                "low_coverage_caveat must be between 0 and 1",
            ));
        }
        if insights.seasonal_dominance_ratio < 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "seasonal_dominance_ratio must be >= 1.0",
            ));
        }
        if insights.seasonal_min_days_per_season == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "seasonal_min_days_per_season must be positive",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: {val}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(env_config::WINDOW_DAYS, &mut self.window.window_days)?;
        Self::apply_env_var(
            env_config::MIN_OVERLAPPING_DAYS,
            &mut self.window.min_overlapping_days,
        )?;
        Self::apply_env_var(
            env_config::MIN_SAMPLE_SIZE,
            &mut self.statistics.min_sample_size,
        )?;
        Self::apply_env_var(
            env_config::SIGNIFICANCE_THRESHOLD,
            &mut self.statistics.significance_threshold,
        )?;
        Self::apply_env_var(
            env_config::PRESSURE_THRESHOLD_HPA,
            &mut self.effects.pressure_threshold_hpa,
        )?;
        Self::apply_env_var(
            env_config::HUMIDITY_THRESHOLD_PERCENT,
            &mut self.effects.humidity_threshold_percent,
        )?;
        Self::apply_env_var(env_config::BUCKET_RATIO, &mut self.effects.bucket_ratio)?;
        Self::apply_env_var(
            env_config::SEASONAL_DOMINANCE_RATIO,
            &mut self.insights.seasonal_dominance_ratio,
        )?;
        Ok(self)
    }
}
