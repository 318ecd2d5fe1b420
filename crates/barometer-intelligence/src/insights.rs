// ABOUTME: Turns correlation results, data quality and seasonal grouping into ordered findings
// ABOUTME: Strongest correlation first, then thresholds, non-linear factors, caveats and seasonality
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barometer Contributors

//! Insight generation
//!
//! Output order is fixed:
//! 1. strongest significant correlation
//! 2. one line per significant threshold effect
//! 3. one combined line for significant non-linear effects
//! 4. "nothing significant yet" caveat, when applicable
//! 5. data-quality caveats
//! 6. seasonal pattern

use crate::assembler::DailyDataPoint;
use crate::config::{AnalysisConfig, InsightConfig};
use crate::correlation::CorrelationResult;
use crate::effects::EffectClassification;
use crate::factors::WeatherFactor;
use crate::quality::DataQualityMetrics;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed three-month seasons (northern hemisphere)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    /// December to February
    Winter,
    /// March to May
    Spring,
    /// June to August
    Summer,
    /// September to November
    Autumn,
}

impl Season {
    /// All seasons in reporting order
    pub const ALL: [Self; 4] = [Self::Winter, Self::Spring, Self::Summer, Self::Autumn];

    /// Season for a calendar month (1-12)
    #[must_use]
    pub const fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Self::Spring,
            6..=8 => Self::Summer,
            9..=11 => Self::Autumn,
            _ => Self::Winter,
        }
    }

    /// Lowercase name used in insight text
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Winter => "winter",
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Autumn => "autumn",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Winter => 0,
            Self::Spring => 1,
            Self::Summer => 2,
            Self::Autumn => 3,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Occurrence rate of one season over the window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonalRate {
    /// Season
    pub season: Season,
    /// Days of the window falling in this season
    pub days: usize,
    /// Fraction of those days with a symptom (0-1)
    pub occurrence_rate: f64,
}

/// Stateless insight text generation
pub struct InsightGenerator;

impl InsightGenerator {
    /// Ordered findings for a completed analysis
    #[must_use]
    pub fn generate(
        correlations: &[CorrelationResult],
        points: &[DailyDataPoint],
        quality: &DataQualityMetrics,
        config: &AnalysisConfig,
    ) -> Vec<String> {
        let significant: Vec<&CorrelationResult> =
            correlations.iter().filter(|c| c.is_significant).collect();
        let mut insights = Vec::new();

        // Correlations arrive sorted by |r|, so the first significant one is the strongest
        if let Some(strongest) = significant.first() {
            insights.push(Self::strongest_correlation(strongest));
        }

        insights.extend(
            significant
                .iter()
                .filter_map(|c| c.effect.threshold_value().map(|v| Self::threshold(c.factor, v))),
        );

        let nonlinear: Vec<WeatherFactor> = significant
            .iter()
            .filter(|c| c.effect == EffectClassification::Nonlinear)
            .map(|c| c.factor)
            .collect();
        if !nonlinear.is_empty() {
            insights.push(Self::nonlinear(&nonlinear));
        }

        if significant.is_empty() {
            insights.push(
                "No statistically significant weather correlations found yet; more data may be needed"
                    .to_owned(),
            );
        }

        insights.extend(Self::quality_caveats(quality, &config.insights));

        if let Some(line) = Self::seasonal_pattern(points, &config.insights) {
            insights.push(line);
        }

        insights
    }

    /// The single advisory line of an insufficient-data result
    #[must_use]
    pub fn insufficient_data(quality: &DataQualityMetrics, min_overlapping_days: usize) -> String {
        format!(
            "Need at least {min_overlapping_days} days with both weather and symptom data for correlation analysis (currently {})",
            quality.overlapping_days
        )
    }

    /// Occurrence rate per season, in [`Season::ALL`] order, seasons without days omitted
    #[must_use]
    pub fn seasonal_rates(points: &[DailyDataPoint]) -> Vec<SeasonalRate> {
        let mut days = [0_usize; 4];
        let mut occurrences = [0_usize; 4];
        for point in points {
            let index = Season::from_month(point.date.month()).index();
            days[index] += 1;
            if point.symptom_occurred {
                occurrences[index] += 1;
            }
        }

        Season::ALL
            .iter()
            .filter(|season| days[season.index()] > 0)
            .map(|&season| {
                let index = season.index();
                SeasonalRate {
                    season,
                    days: days[index],
                    occurrence_rate: occurrences[index] as f64 / days[index] as f64,
                }
            })
            .collect()
    }

    fn strongest_correlation(result: &CorrelationResult) -> String {
        let direction = if result.correlation > 0.0 {
            "increase"
        } else {
            "decrease"
        };
        format!(
            "{} {direction} correlates with symptom occurrence (r={:.2})",
            result.factor.display_name(),
            result.correlation
        )
    }

    fn threshold(factor: WeatherFactor, value: f64) -> String {
        let crossing = match factor {
            WeatherFactor::Pressure => "drops below",
            _ => "rises above",
        };
        format!(
            "Symptoms are more frequent when {} {crossing} {value:.0}{}",
            factor.display_name().to_lowercase(),
            factor.unit()
        )
    }

    fn nonlinear(factors: &[WeatherFactor]) -> String {
        let names: Vec<String> = factors
            .iter()
            .map(|f| f.display_name().to_lowercase())
            .collect();
        format!(
            "Non-linear relationship with {}: symptoms cluster at extreme values",
            names.join(", ")
        )
    }

    fn quality_caveats(quality: &DataQualityMetrics, config: &InsightConfig) -> Vec<String> {
        let mut caveats = Vec::new();
        if quality.overlapping_days < config.low_overlap_caveat_days {
            caveats.push(format!(
                "Limited data: only {} overlapping days; findings may change as more data is collected",
                quality.overlapping_days
            ));
        }
        if quality.coverage_percentage < config.low_coverage_caveat {
            caveats.push(format!(
                "Usable data covers only {:.0}% of the analysis window; gaps reduce reliability",
                quality.coverage_percentage * 100.0
            ));
        }
        caveats
    }

    /// Highest-rate season when it dominates the cross-season average
    fn seasonal_pattern(points: &[DailyDataPoint], config: &InsightConfig) -> Option<String> {
        if points.len() < config.seasonal_min_total_days {
            return None;
        }

        let qualifying: Vec<SeasonalRate> = Self::seasonal_rates(points)
            .into_iter()
            .filter(|rate| rate.days >= config.seasonal_min_days_per_season)
            .collect();
        if qualifying.len() < 2 {
            return None;
        }

        let average =
            qualifying.iter().map(|r| r.occurrence_rate).sum::<f64>() / qualifying.len() as f64;
        let highest = qualifying.iter().fold(None::<&SeasonalRate>, |best, rate| match best {
            Some(b) if b.occurrence_rate >= rate.occurrence_rate => Some(b),
            _ => Some(rate),
        })?;

        (highest.occurrence_rate > config.seasonal_dominance_ratio * average).then(|| {
            format!(
                "Symptoms occur most often in {} ({:.0}% of days vs {:.0}% average across seasons)",
                highest.season,
                highest.occurrence_rate * 100.0,
                average * 100.0
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FeatureDeriver;
    use crate::statistical_analysis::{CorrelationStrength, SignificanceLevel};
    use chrono::{Days, NaiveDate};

    fn result(
        factor: WeatherFactor,
        r: f64,
        significant: bool,
        effect: EffectClassification,
    ) -> CorrelationResult {
        let p_value = if significant { 0.001 } else { 0.5 };
        CorrelationResult {
            factor,
            correlation: r,
            p_value,
            sample_size: 90,
            is_significant: significant,
            confidence: 0.8,
            effect,
            strength: CorrelationStrength::from_correlation(r),
            significance_level: SignificanceLevel::from_p_value(p_value),
        }
    }

    fn quality(overlapping: usize, coverage: f64) -> DataQualityMetrics {
        DataQualityMetrics {
            total_days: 90,
            days_with_weather_data: overlapping,
            days_with_symptom_data: 10,
            overlapping_days: overlapping,
            coverage_percentage: coverage,
            consistency_score: 1.0,
        }
    }

    fn window(
        start: NaiveDate,
        len: u64,
        occurred: impl Fn(NaiveDate) -> bool,
    ) -> Vec<DailyDataPoint> {
        (0..len)
            .map(|offset| {
                let date = start.checked_add_days(Days::new(offset)).unwrap();
                DailyDataPoint {
                    date,
                    symptom_occurred: occurred(date),
                    intensity: None,
                    has_weather_data: true,
                    features: FeatureDeriver::neutral(date, &[]),
                    in_range: true,
                }
            })
            .collect()
    }

    #[test]
    fn test_season_months() {
        assert_eq!(Season::from_month(12), Season::Winter);
        assert_eq!(Season::from_month(2), Season::Winter);
        assert_eq!(Season::from_month(3), Season::Spring);
        assert_eq!(Season::from_month(8), Season::Summer);
        assert_eq!(Season::from_month(11), Season::Autumn);
    }

    #[test]
    fn test_ordering_of_findings() {
        let correlations = vec![
            result(WeatherFactor::Pressure, -0.62, true, EffectClassification::Threshold(1005.0)),
            result(WeatherFactor::Temperature, 0.35, true, EffectClassification::Nonlinear),
            result(WeatherFactor::Humidity, 0.3, true, EffectClassification::Threshold(80.0)),
            result(WeatherFactor::WindSpeed, 0.05, false, EffectClassification::Nonlinear),
        ];
        let insights = InsightGenerator::generate(
            &correlations,
            &[],
            &quality(90, 1.0),
            &AnalysisConfig::default(),
        );

        assert_eq!(
            insights,
            vec![
                "Barometric pressure decrease correlates with symptom occurrence (r=-0.62)",
                "Symptoms are more frequent when barometric pressure drops below 1005 hPa",
                "Symptoms are more frequent when humidity rises above 80%",
                "Non-linear relationship with temperature: symptoms cluster at extreme values",
            ]
        );
    }

    #[test]
    fn test_caveats_when_nothing_significant() {
        let correlations = vec![result(
            WeatherFactor::Temperature,
            0.0,
            false,
            EffectClassification::Nonlinear,
        )];
        let insights = InsightGenerator::generate(
            &correlations,
            &[],
            &quality(25, 0.5),
            &AnalysisConfig::default(),
        );
        assert_eq!(insights.len(), 3);
        assert!(insights[0].contains("more data may be needed"));
        assert!(insights[1].contains("only 25 overlapping days"));
        assert_eq!(
            insights[2],
            "Usable data covers only 50% of the analysis window; gaps reduce reliability"
        );
    }

    #[test]
    fn test_winter_dominance_reported() {
        // 30 winter days at 80%, 30 spring days at 10%
        let start = NaiveDate::from_ymd_opt(2026, 1, 30).unwrap();
        let points = window(start, 60, |date| {
            let day = date.day();
            if date.month() == 3 {
                day <= 3
            } else {
                // Jan 30, 31 and Feb 1-22 occur: 24 of 30
                date.month() == 1 || day <= 22
            }
        });

        let rates = InsightGenerator::seasonal_rates(&points);
        assert_eq!(rates.len(), 2);
        assert!((rates[0].occurrence_rate - 0.8).abs() < 1e-9);

        let line = InsightGenerator::seasonal_pattern(&points, &InsightConfig::default()).unwrap();
        assert!(line.contains("winter"));
        assert!(line.contains("80%"));
    }

    #[test]
    fn test_uniform_seasons_not_reported() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 30).unwrap();
        let points = window(start, 60, |date| date.day() % 2 == 0);
        assert!(InsightGenerator::seasonal_pattern(&points, &InsightConfig::default()).is_none());
    }

    #[test]
    fn test_short_window_has_no_seasonal_line() {
        let start = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();
        let points = window(start, 40, |date| date.month() == 2);
        assert!(InsightGenerator::seasonal_pattern(&points, &InsightConfig::default()).is_none());
    }

    #[test]
    fn test_insufficient_data_message_names_minimum() {
        let message = InsightGenerator::insufficient_data(&quality(12, 0.13), 30);
        assert!(message.contains("at least 30 days"));
        assert!(message.contains("currently 12"));
    }
}
