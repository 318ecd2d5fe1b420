// ABOUTME: Per-factor correlation of weather features against daily symptom occurrence
// ABOUTME: Pearson r, t-approximation p-value, blended confidence and effect shape per factor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barometer Contributors

use crate::assembler::DailyDataPoint;
use crate::config::AnalysisConfig;
use crate::effects::{EffectClassification, EffectClassifier};
use crate::factors::WeatherFactor;
use crate::statistical_analysis::{CorrelationStrength, SignificanceLevel, StatisticalAnalyzer};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// Correlation between one weather factor and symptom occurrence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    /// Factor tested
    pub factor: WeatherFactor,
    /// Pearson correlation coefficient (-1 to 1)
    pub correlation: f64,
    /// Two-sided p-value (0 to 1)
    pub p_value: f64,
    /// Paired samples used
    pub sample_size: usize,
    /// p below the significance threshold with the minimum sample size met
    pub is_significant: bool,
    /// Heuristic confidence blend (0 to 1)
    pub confidence: f64,
    /// Shape of the relationship
    pub effect: EffectClassification,
    /// Effect-size label for |r|
    pub strength: CorrelationStrength,
    /// Significance band for the p-value
    pub significance_level: SignificanceLevel,
}

/// Stateless correlation stage
pub struct CorrelationEngine;

impl CorrelationEngine {
    /// Correlate every candidate factor, strongest |r| first.
    ///
    /// Factors with fewer than `min_sample_size` weather days are omitted.
    #[must_use]
    pub fn analyze(points: &[DailyDataPoint], config: &AnalysisConfig) -> Vec<CorrelationResult> {
        let weather_days: Vec<&DailyDataPoint> =
            points.iter().filter(|p| p.has_weather_data).collect();

        let mut results: Vec<CorrelationResult> = if config.statistics.parallel_factors {
            WeatherFactor::ALL
                .par_iter()
                .filter_map(|factor| Self::correlate_factor(*factor, &weather_days, config))
                .collect()
        } else {
            WeatherFactor::ALL
                .iter()
                .filter_map(|factor| Self::correlate_factor(*factor, &weather_days, config))
                .collect()
        };

        results.sort_by(Self::by_strength);
        results
    }

    /// Paired (factor value, occurrence flag) series over days with weather data
    #[must_use]
    pub fn paired_values(
        points: &[&DailyDataPoint],
        factor: WeatherFactor,
    ) -> (Vec<f64>, Vec<f64>) {
        points
            .iter()
            .map(|point| (factor.value(&point.features), point.occurrence_flag()))
            .unzip()
    }

    fn correlate_factor(
        factor: WeatherFactor,
        weather_days: &[&DailyDataPoint],
        config: &AnalysisConfig,
    ) -> Option<CorrelationResult> {
        let stats = &config.statistics;
        let (values, occurrences) = Self::paired_values(weather_days, factor);
        let sample_size = values.len();

        if sample_size < stats.min_sample_size {
            debug!(%factor, sample_size, "skipping factor with too few samples");
            return None;
        }

        let correlation = StatisticalAnalyzer::pearson_correlation(&values, &occurrences);
        let p_value = StatisticalAnalyzer::correlation_p_value(
            correlation,
            sample_size,
            stats.p_value_approximation,
        );
        let confidence =
            StatisticalAnalyzer::confidence_score(sample_size, p_value, correlation, stats);
        let is_significant = p_value < stats.significance_threshold;
        let effect =
            EffectClassifier::classify(factor, &values, &occurrences, correlation, &config.effects);

        debug!(
            %factor,
            correlation,
            p_value,
            sample_size,
            is_significant,
            ?effect,
            "factor correlated"
        );

        Some(CorrelationResult {
            factor,
            correlation,
            p_value,
            sample_size,
            is_significant,
            confidence,
            effect,
            strength: CorrelationStrength::from_correlation(correlation),
            significance_level: SignificanceLevel::from_p_value(p_value),
        })
    }

    /// Descending |r|, ties in factor declaration order
    fn by_strength(a: &CorrelationResult, b: &CorrelationResult) -> Ordering {
        b.correlation
            .abs()
            .total_cmp(&a.correlation.abs())
            .then_with(|| a.factor.cmp(&b.factor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FeatureDeriver;
    use chrono::{Days, NaiveDate};

    fn day(offset: u64, pressure: f64, occurred: bool) -> DailyDataPoint {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .checked_add_days(Days::new(offset))
            .unwrap();
        let mut features = FeatureDeriver::neutral(date, &[]);
        features.pressure_hpa = pressure;
        DailyDataPoint {
            date,
            symptom_occurred: occurred,
            intensity: occurred.then_some(5.0),
            has_weather_data: true,
            features,
            in_range: true,
        }
    }

    #[test]
    fn test_too_few_samples_yields_nothing() {
        let points: Vec<DailyDataPoint> = (0..10).map(|i| day(i, 1010.0, i % 2 == 0)).collect();
        assert!(CorrelationEngine::analyze(&points, &AnalysisConfig::default()).is_empty());
    }

    #[test]
    fn test_days_without_weather_are_excluded() {
        let mut points: Vec<DailyDataPoint> =
            (0..25).map(|i| day(i, 1010.0 + i as f64, i % 3 == 0)).collect();
        points[0].has_weather_data = false;
        points[1].has_weather_data = false;
        let results = CorrelationEngine::analyze(&points, &AnalysisConfig::default());
        assert!(results.iter().all(|r| r.sample_size == 23));
    }

    #[test]
    fn test_results_sorted_by_absolute_correlation() {
        let points: Vec<DailyDataPoint> = (0..40)
            .map(|i| {
                let low = (10..16).contains(&i);
                day(i, if low { 998.0 } else { 1016.0 }, low)
            })
            .collect();
        let results = CorrelationEngine::analyze(&points, &AnalysisConfig::default());

        assert_eq!(results.len(), WeatherFactor::ALL.len());
        assert!(results
            .windows(2)
            .all(|w| w[0].correlation.abs() >= w[1].correlation.abs()));
        assert_eq!(results[0].factor, WeatherFactor::Pressure);
        assert!((results[0].correlation + 1.0).abs() < 1e-9);
        assert!(results[0].is_significant);
        assert_eq!(results[0].effect, EffectClassification::Threshold(1005.0));
    }

    #[test]
    fn test_ties_keep_factor_order() {
        // Every feature is constant: all r = 0
        let points: Vec<DailyDataPoint> = (0..30).map(|i| day(i, 1013.0, i % 2 == 0)).collect();
        let results = CorrelationEngine::analyze(&points, &AnalysisConfig::default());
        let order: Vec<WeatherFactor> = results.iter().map(|r| r.factor).collect();
        assert_eq!(order, WeatherFactor::ALL.to_vec());
        assert!(results.iter().all(|r| !r.is_significant));
    }

    #[test]
    fn test_sequential_matches_parallel() {
        let points: Vec<DailyDataPoint> = (0..60)
            .map(|i| day(i, 1000.0 + (i % 17) as f64, i % 5 == 0))
            .collect();
        let parallel = AnalysisConfig::default();
        let mut sequential = AnalysisConfig::default();
        sequential.statistics.parallel_factors = false;

        assert_eq!(
            CorrelationEngine::analyze(&points, &parallel),
            CorrelationEngine::analyze(&points, &sequential)
        );
    }
}
