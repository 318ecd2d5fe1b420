// ABOUTME: Environmental correlation engine for the Barometer symptom diary
// ABOUTME: Joins daily weather with symptom occurrence and explains the relationships found
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barometer Contributors

#![deny(unsafe_code)]

//! # Barometer Intelligence
//!
//! Pure, synchronous analysis over immutable snapshots. Control flow for one
//! run of [`CorrelationAnalyzer`]:
//!
//! 1. [`DataPointAssembler`] builds one [`DailyDataPoint`] per day of the
//!    trailing window, calling [`FeatureDeriver`] once per day
//! 2. [`DataQualityAssessor`] measures coverage and gates the run
//! 3. [`CorrelationEngine`] correlates each [`WeatherFactor`] with occurrence,
//!    refined by [`EffectClassifier`]
//! 4. [`InsightGenerator`] turns the results into ordered findings

/// Analysis orchestration and result type
pub mod analyzer;
/// Trailing-window daily data point assembly
pub mod assembler;
/// Tunable analysis policy
pub mod config;
/// Per-factor correlation
pub mod correlation;
/// Effect-shape heuristics
pub mod effects;
/// Candidate weather factors
pub mod factors;
/// Derived meteorological and rolling features
pub mod features;
/// Natural-language findings
pub mod insights;
/// Meteorological formula coefficients and neutral defaults
pub mod meteorological_constants;
/// Coverage, consistency and overlap metrics
pub mod quality;
/// Pearson correlation, p-values and confidence scoring
pub mod statistical_analysis;

pub use analyzer::{AnalysisResult, CorrelationAnalyzer};
pub use assembler::{DailyDataPoint, DataPointAssembler};
pub use config::{AnalysisConfig, ConfigError, OverlapPolicy, PValueApproximation};
pub use correlation::{CorrelationEngine, CorrelationResult};
pub use effects::{EffectClassification, EffectClassifier};
pub use factors::WeatherFactor;
pub use features::{FeatureDeriver, PressureTrend, WeatherFeatureVector};
pub use insights::{InsightGenerator, Season, SeasonalRate};
pub use quality::{DataQualityAssessor, DataQualityMetrics};
pub use statistical_analysis::{CorrelationStrength, SignificanceLevel, StatisticalAnalyzer};
