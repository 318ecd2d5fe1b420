// ABOUTME: Application-wide constants for service identification, units, and environment keys
// ABOUTME: Grouped by domain so callers import only the namespace they need
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barometer Contributors

//! Constants shared by every crate in the workspace.

/// Service identification used in structured logs
pub mod service_names {
    /// Name reported by the CLI and logging layer
    pub const BAROMETER: &str = "barometer";
}

/// Unit conversion factors
pub mod unit_conversions {
    /// Multiply km/h by this to get m/s
    pub const KMH_TO_MS_FACTOR: f64 = 1.0 / 3.6;
}

/// Domain ranges used when validating external input
pub mod limits {
    /// Lowest intensity on the diary's ordinal scale
    pub const MIN_SYMPTOM_INTENSITY: u8 = 1;
    /// Highest intensity on the diary's ordinal scale
    pub const MAX_SYMPTOM_INTENSITY: u8 = 10;
    /// Plausible lower bound for sea-level pressure (hPa)
    pub const MIN_PLAUSIBLE_PRESSURE_HPA: f64 = 850.0;
    /// Plausible upper bound for sea-level pressure (hPa)
    pub const MAX_PLAUSIBLE_PRESSURE_HPA: f64 = 1100.0;
    /// Longest analysis window accepted, roughly ten years of daily data
    pub const MAX_WINDOW_DAYS: u32 = 3660;
}

/// Environment variable names recognised by the configuration loaders
pub mod env_config {
    /// Analysis window length in days
    pub const WINDOW_DAYS: &str = "BAROMETER_WINDOW_DAYS";
    /// Minimum overlapping days before correlation runs
    pub const MIN_OVERLAPPING_DAYS: &str = "BAROMETER_MIN_OVERLAPPING_DAYS";
    /// Minimum paired samples per factor
    pub const MIN_SAMPLE_SIZE: &str = "BAROMETER_MIN_SAMPLE_SIZE";
    /// p-value cutoff for significance
    pub const SIGNIFICANCE_THRESHOLD: &str = "BAROMETER_SIGNIFICANCE_THRESHOLD";
    /// Low-pressure split for the threshold heuristic
    pub const PRESSURE_THRESHOLD_HPA: &str = "BAROMETER_PRESSURE_THRESHOLD_HPA";
    /// High-humidity split for the threshold heuristic
    pub const HUMIDITY_THRESHOLD_PERCENT: &str = "BAROMETER_HUMIDITY_THRESHOLD_PERCENT";
    /// Occurrence-rate multiplier for bucket comparisons
    pub const BUCKET_RATIO: &str = "BAROMETER_BUCKET_RATIO";
    /// Occurrence-rate multiplier for the seasonal insight
    pub const SEASONAL_DOMINANCE_RATIO: &str = "BAROMETER_SEASONAL_DOMINANCE_RATIO";
}
