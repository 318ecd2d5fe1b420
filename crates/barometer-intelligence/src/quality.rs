// ABOUTME: Data quality assessment over the assembled window: coverage, consistency, overlap
// ABOUTME: Determines whether enough overlapping days exist for correlation analysis to proceed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barometer Contributors

use crate::assembler::DailyDataPoint;
use crate::config::OverlapPolicy;
use serde::{Deserialize, Serialize};

/// Below this many total days consistency is not judged
const MIN_DAYS_FOR_CONSISTENCY: usize = 8;

/// Consistency reported when there is too little data to judge
const DEFAULT_CONSISTENCY: f64 = 0.5;

/// Average gap (days) at which consistency reaches zero
const GAP_NORMALIZATION_DAYS: f64 = 7.0;

/// Reliability metrics for one analysis window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataQualityMetrics {
    /// Days in the window
    pub total_days: usize,
    /// Days with a weather observation
    pub days_with_weather_data: usize,
    /// Days with at least one symptom record
    pub days_with_symptom_data: usize,
    /// Days usable for correlation
    pub overlapping_days: usize,
    /// Overlapping days / total days (0-1)
    pub coverage_percentage: f64,
    /// Regularity of covered days (0-1)
    pub consistency_score: f64,
}

impl DataQualityMetrics {
    /// Whether the correlation stage may run
    #[must_use]
    pub const fn has_sufficient_overlap(&self, min_overlapping_days: usize) -> bool {
        self.overlapping_days >= min_overlapping_days
    }
}

/// Stateless quality assessment
pub struct DataQualityAssessor;

impl DataQualityAssessor {
    /// Compute quality metrics for an assembled window
    #[must_use]
    pub fn assess(points: &[DailyDataPoint], policy: OverlapPolicy) -> DataQualityMetrics {
        let total_days = points.len();
        let days_with_weather_data = points.iter().filter(|p| p.has_weather_data).count();
        let days_with_symptom_data = points.iter().filter(|p| p.symptom_occurred).count();

        let mut covered: Vec<&DailyDataPoint> = points
            .iter()
            .filter(|p| Self::is_overlapping(p, policy))
            .collect();
        let overlapping_days = covered.len();

        let coverage_percentage = if total_days == 0 {
            0.0
        } else {
            overlapping_days as f64 / total_days as f64
        };

        let consistency_score = if total_days < MIN_DAYS_FOR_CONSISTENCY {
            DEFAULT_CONSISTENCY
        } else {
            covered.sort_by_key(|p| p.date);
            Self::consistency(&covered)
        };

        DataQualityMetrics {
            total_days,
            days_with_weather_data,
            days_with_symptom_data,
            overlapping_days,
            coverage_percentage,
            consistency_score,
        }
    }

    /// Whether a single day is usable for correlation under `policy`
    #[must_use]
    pub const fn is_overlapping(point: &DailyDataPoint, policy: OverlapPolicy) -> bool {
        match policy {
            OverlapPolicy::WeatherOnly => point.has_weather_data,
            OverlapPolicy::RequireSymptomRecord => point.has_weather_data && point.symptom_occurred,
        }
    }

    /// `max(0, 1 - average_gap / 7)` over gaps longer than one day
    fn consistency(covered: &[&DailyDataPoint]) -> f64 {
        let gaps: Vec<f64> = covered
            .windows(2)
            .map(|pair| (pair[1].date - pair[0].date).num_days())
            .filter(|days| *days > 1)
            .map(|days| days as f64)
            .collect();

        if gaps.is_empty() {
            return 1.0;
        }

        let average_gap = gaps.iter().sum::<f64>() / gaps.len() as f64;
        (1.0 - average_gap / GAP_NORMALIZATION_DAYS).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FeatureDeriver;
    use chrono::{Days, NaiveDate};

    fn points(weather_days: &[u64], symptom_days: &[u64], total: u64) -> Vec<DailyDataPoint> {
        let start = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        (0..total)
            .map(|offset| {
                let date = start.checked_add_days(Days::new(offset)).unwrap();
                DailyDataPoint {
                    date,
                    symptom_occurred: symptom_days.contains(&offset),
                    intensity: None,
                    has_weather_data: weather_days.contains(&offset),
                    features: FeatureDeriver::neutral(date, &[]),
                    in_range: true,
                }
            })
            .collect()
    }

    #[test]
    fn test_full_coverage_is_perfectly_consistent() {
        let all: Vec<u64> = (0..20).collect();
        let metrics =
            DataQualityAssessor::assess(&points(&all, &[], 20), OverlapPolicy::WeatherOnly);
        assert_eq!(metrics.overlapping_days, 20);
        assert!((metrics.coverage_percentage - 1.0).abs() < f64::EPSILON);
        assert!((metrics.consistency_score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gaps_reduce_consistency() {
        // Covered every third day: gaps of 3 days
        let sparse: Vec<u64> = (0..30).step_by(3).collect();
        let metrics =
            DataQualityAssessor::assess(&points(&sparse, &[], 30), OverlapPolicy::WeatherOnly);
        assert!((metrics.consistency_score - (1.0 - 3.0 / 7.0)).abs() < 1e-9);
    }

    #[test]
    fn test_short_window_uses_default_consistency() {
        let metrics =
            DataQualityAssessor::assess(&points(&[0, 5], &[], 6), OverlapPolicy::WeatherOnly);
        assert!((metrics.consistency_score - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_symptom_policy_requires_both() {
        let all: Vec<u64> = (0..10).collect();
        let metrics = DataQualityAssessor::assess(
            &points(&all, &[2, 3, 4], 10),
            OverlapPolicy::RequireSymptomRecord,
        );
        assert_eq!(metrics.overlapping_days, 3);
        assert_eq!(metrics.days_with_weather_data, 10);
        assert_eq!(metrics.days_with_symptom_data, 3);
    }

    #[test]
    fn test_empty_window() {
        let metrics = DataQualityAssessor::assess(&[], OverlapPolicy::WeatherOnly);
        assert_eq!(metrics.total_days, 0);
        assert!(metrics.coverage_percentage.abs() < f64::EPSILON);
        assert!(!metrics.has_sufficient_overlap(30));
    }
}
