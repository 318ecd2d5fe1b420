// ABOUTME: End-to-end analysis scenarios: pressure drops, empty diaries, seasonality, gating
// ABOUTME: Runs CorrelationAnalyzer over synthetic snapshots anchored on a fixed day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barometer Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use barometer::intelligence::{
    AnalysisConfig, CorrelationAnalyzer, EffectClassification, OverlapPolicy,
    PValueApproximation, WeatherFactor,
};
use barometer::models::WeatherHistory;
use chrono::{Datelike, NaiveDate};
use common::{symptoms_on, today, varied_weather, weather_series};

#[test]
fn test_low_pressure_days_produce_threshold_effect() {
    // Pressure below 1005 hPa on days 10-15, symptoms on days 11-16
    let weather = weather_series(today(), 90, |day, obs| {
        if (10..=15).contains(&day) {
            obs.pressure_hpa = 1000.0;
        }
    });
    let symptoms = symptoms_on(today(), 90, 11..=16);

    let result = CorrelationAnalyzer::default().analyze_as_of(&symptoms, &weather, today());

    assert_eq!(result.quality.overlapping_days, 90);
    let pressure = result
        .correlations
        .iter()
        .find(|c| c.factor == WeatherFactor::Pressure)
        .expect("pressure correlated");
    assert!(pressure.correlation < -0.8);
    assert!(pressure.is_significant);
    assert_eq!(pressure.effect, EffectClassification::Threshold(1005.0));

    assert_eq!(result.correlations[0].factor, WeatherFactor::Pressure);
    assert!(result.insights[0].starts_with("Barometric pressure decrease"));
    assert!(result
        .insights
        .iter()
        .any(|line| line.contains("drops below 1005 hPa")));
}

#[test]
fn test_df_scaled_p_value_misses_low_pressure_days() {
    let weather = weather_series(today(), 90, |day, obs| {
        if (10..=15).contains(&day) {
            obs.pressure_hpa = 1000.0;
        }
    });
    let symptoms = symptoms_on(today(), 90, 11..=16);
    let mut config = AnalysisConfig::default();
    config.statistics.p_value_approximation = PValueApproximation::DfScaled;

    let result = CorrelationAnalyzer::new(config).analyze_as_of(&symptoms, &weather, today());

    let pressure = result
        .correlations
        .iter()
        .find(|c| c.factor == WeatherFactor::Pressure)
        .expect("pressure correlated");
    assert!(pressure.correlation < -0.8);
    assert!(pressure.p_value > 0.1 && pressure.p_value < 0.2);
    assert!(!pressure.is_significant);
}

#[test]
fn test_empty_diary_finds_nothing() {
    let result =
        CorrelationAnalyzer::default().analyze_as_of(&[], &varied_weather(today(), 90), today());

    assert_eq!(result.correlations.len(), WeatherFactor::ALL.len());
    for correlation in &result.correlations {
        assert!(correlation.correlation.abs() < f64::EPSILON);
        assert!(!correlation.is_significant);
    }
    assert!(result
        .insights
        .iter()
        .any(|line| line.contains("more data may be needed")));
}

#[test]
fn test_insufficient_overlap_gates_analysis() {
    let weather = weather_series(today(), 20, |_, _| {});
    let symptoms = symptoms_on(today(), 20, [3, 4, 5]);

    let result = CorrelationAnalyzer::default().analyze_as_of(&symptoms, &weather, today());

    assert!(result.correlations.is_empty());
    assert_eq!(result.insights.len(), 1);
    assert!(result.insights[0].contains("at least 30"));
    assert_eq!(result.quality.total_days, 90);
    assert_eq!(result.quality.overlapping_days, 20);
}

#[test]
fn test_symptom_context_policy_gates_sparse_diary() {
    let mut config = AnalysisConfig::default();
    config.window.overlap_policy = OverlapPolicy::RequireSymptomRecord;
    let analyzer = CorrelationAnalyzer::new(config);

    let symptoms = symptoms_on(today(), 90, (1..=90).step_by(4));
    let result = analyzer.analyze_as_of(&symptoms, &varied_weather(today(), 90), today());

    // 23 diary days: below the 30-day minimum
    assert_eq!(result.quality.overlapping_days, 23);
    assert!(result.correlations.is_empty());
    assert_eq!(result.insights.len(), 1);
}

#[test]
fn test_winter_season_named() {
    // 30 winter days (Jan 30 - Feb 28) then 30 spring days (Mar 1 - Mar 30)
    let today = NaiveDate::from_ymd_opt(2026, 3, 30).unwrap();
    let mut config = AnalysisConfig::default();
    config.window.window_days = 60;
    let analyzer = CorrelationAnalyzer::new(config);

    let weather = weather_series(today, 60, |_, _| {});
    // 24 of 30 winter days, 3 of 30 spring days
    let winter_days = 1..=24;
    let spring_days = [31, 41, 51];
    let symptoms = symptoms_on(today, 60, winter_days.chain(spring_days));

    let points = analyzer.data_points(&symptoms, &weather, today);
    assert_eq!(points.iter().filter(|p| p.date.month() != 3).count(), 30);

    let result = analyzer.analyze_as_of(&symptoms, &weather, today);
    let seasonal = result
        .insights
        .iter()
        .find(|line| line.contains("most often"))
        .expect("seasonal line");
    assert!(seasonal.contains("winter"));
    assert!(seasonal.contains("80%"));
}

#[test]
fn test_window_is_complete_for_sparse_input() {
    let analyzer = CorrelationAnalyzer::default();
    let sparse: WeatherHistory = weather_series(today(), 90, |_, _| {})
        .iter()
        .filter(|obs| obs.date.day() % 9 == 0)
        .cloned()
        .collect();
    let symptoms = symptoms_on(today(), 90, [2, 50]);

    for weather in [WeatherHistory::new(), sparse] {
        let points = analyzer.data_points(&symptoms, &weather, today());
        assert_eq!(points.len(), 90);
        assert_eq!(points.last().map(|p| p.date), Some(today()));
        assert!(points
            .windows(2)
            .all(|pair| pair[0].date.succ_opt() == Some(pair[1].date)));
        assert_eq!(points.iter().filter(|p| p.symptom_occurred).count(), 2);
    }
}

#[test]
fn test_repeated_and_sequential_runs_agree() {
    let weather = varied_weather(today(), 90);
    let symptoms = symptoms_on(today(), 90, (1..=90).filter(|d| d % 7 == 0 || d % 11 == 0));

    let parallel = CorrelationAnalyzer::default();
    let mut config = AnalysisConfig::default();
    config.statistics.parallel_factors = false;
    let sequential = CorrelationAnalyzer::new(config);

    let first = parallel.analyze_as_of(&symptoms, &weather, today());
    let second = parallel.analyze_as_of(&symptoms, &weather, today());
    let third = sequential.analyze_as_of(&symptoms, &weather, today());

    assert_eq!(first.correlations, second.correlations);
    assert_eq!(first.correlations, third.correlations);
    assert_eq!(first.insights, third.insights);
    assert_eq!(first.quality, third.quality);
}
