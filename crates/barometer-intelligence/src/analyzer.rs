// ABOUTME: Orchestrates one correlation analysis: assemble, assess, gate, correlate, explain
// ABOUTME: Constructor-injected configuration; every call recomputes from immutable snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barometer Contributors

use crate::assembler::{DailyDataPoint, DataPointAssembler};
use crate::config::AnalysisConfig;
use crate::correlation::{CorrelationEngine, CorrelationResult};
use crate::insights::InsightGenerator;
use crate::quality::{DataQualityAssessor, DataQualityMetrics};
use barometer_core::models::{SymptomRecord, WeatherHistory};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Output of one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Per-factor results, descending |r|
    pub correlations: Vec<CorrelationResult>,
    /// Reliability of the analysed window
    pub quality: DataQualityMetrics,
    /// When the analysis ran
    pub analyzed_at: DateTime<Utc>,
    /// Ordered human-readable findings
    pub insights: Vec<String>,
}

impl AnalysisResult {
    /// Number of significant correlations
    #[must_use]
    pub fn significant_count(&self) -> usize {
        self.correlations.iter().filter(|c| c.is_significant).count()
    }

    /// Strongest significant correlation, if any
    #[must_use]
    pub fn strongest_significant(&self) -> Option<&CorrelationResult> {
        self.correlations.iter().find(|c| c.is_significant)
    }
}

/// Symptom/weather correlation analyzer
#[derive(Debug, Clone, Default)]
pub struct CorrelationAnalyzer {
    config: AnalysisConfig,
}

impl CorrelationAnalyzer {
    /// Create an analyzer with the given configuration
    #[must_use]
    pub const fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyse the window ending today (UTC)
    #[must_use]
    pub fn analyze(&self, symptoms: &[SymptomRecord], weather: &WeatherHistory) -> AnalysisResult {
        self.analyze_as_of(symptoms, weather, Utc::now().date_naive())
    }

    /// Analyse the window ending on `today` (inclusive)
    #[must_use]
    pub fn analyze_as_of(
        &self,
        symptoms: &[SymptomRecord],
        weather: &WeatherHistory,
        today: NaiveDate,
    ) -> AnalysisResult {
        let points = self.data_points(symptoms, weather, today);
        let quality = DataQualityAssessor::assess(&points, self.config.window.overlap_policy);
        let analyzed_at = Utc::now();

        let min_overlapping_days = self.config.window.min_overlapping_days;
        if !quality.has_sufficient_overlap(min_overlapping_days) {
            warn!(
                overlapping_days = quality.overlapping_days,
                required = min_overlapping_days,
                "insufficient overlapping data for correlation analysis"
            );
            let insight = InsightGenerator::insufficient_data(&quality, min_overlapping_days);
            return AnalysisResult {
                correlations: Vec::new(),
                quality,
                analyzed_at,
                insights: vec![insight],
            };
        }

        let correlations = CorrelationEngine::analyze(&points, &self.config);
        let insights = InsightGenerator::generate(&correlations, &points, &quality, &self.config);

        let result = AnalysisResult {
            correlations,
            quality,
            analyzed_at,
            insights,
        };
        info!(
            today = %today,
            overlapping_days = result.quality.overlapping_days,
            factors = result.correlations.len(),
            significant = result.significant_count(),
            strongest = ?result.strongest_significant().map(|c| c.factor),
            "correlation analysis complete"
        );
        result
    }

    /// Assembled window for inspection, without running the correlation stage
    #[must_use]
    pub fn data_points(
        &self,
        symptoms: &[SymptomRecord],
        weather: &WeatherHistory,
        today: NaiveDate,
    ) -> Vec<DailyDataPoint> {
        DataPointAssembler::assemble(symptoms, weather, self.config.window.window_days, today)
    }
}
