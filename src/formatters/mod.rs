// ABOUTME: Output format abstraction for rendering analysis results
// ABOUTME: Supports a human-readable report (default) and pretty-printed JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barometer Contributors

//! Output Format Abstraction Layer
//!
//! `AnalysisResult` is designed to be rendered as-is. JSON output is the
//! serde representation; the text report is for people reading a terminal.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use barometer::formatters::{format_report, OutputFormat};
//!
//! let text = format_report(&result, OutputFormat::Pretty)?;
//! println!("{text}");
//! ```

use crate::intelligence::{
    AnalysisResult, CorrelationResult, DailyDataPoint, DataQualityMetrics, EffectClassification,
};
use serde::Serialize;
use std::fmt;

/// Width of report separators
const RULE_WIDTH: usize = 78;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text report
    #[default]
    Pretty,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Pretty` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Pretty,
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pretty => "pretty",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl std::error::Error for FormatError {}

/// Render an analysis result
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails
pub fn format_report(result: &AnalysisResult, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Json => to_json(result, format),
        OutputFormat::Pretty => Ok(render_report(result)),
    }
}

/// Render assembled data points
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails
pub fn format_data_points(
    points: &[DailyDataPoint],
    format: OutputFormat,
) -> Result<String, FormatError> {
    match format {
        OutputFormat::Json => to_json(&points, format),
        OutputFormat::Pretty => Ok(render_data_points(points)),
    }
}

fn to_json<T: Serialize>(data: &T, format: OutputFormat) -> Result<String, FormatError> {
    serde_json::to_string_pretty(data).map_err(|e| FormatError {
        message: e.to_string(),
        format,
    })
}

fn render_report(result: &AnalysisResult) -> String {
    let mut lines = vec![
        format!(
            "Barometer correlation analysis ({})",
            result.analyzed_at.format("%Y-%m-%d %H:%M UTC")
        ),
        "=".repeat(RULE_WIDTH),
    ];

    lines.extend(quality_lines(&result.quality));

    lines.push(String::new());
    lines.push("Correlations".to_owned());
    if result.correlations.is_empty() {
        lines.push("  (none computed)".to_owned());
    } else {
        lines.push(format!(
            "  {:<22} {:>6} {:>8} {:>4} {:>6}  {}",
            "Factor", "r", "p", "n", "conf", "effect"
        ));
        lines.extend(result.correlations.iter().map(correlation_line));
    }

    lines.push(String::new());
    lines.push("Insights".to_owned());
    lines.extend(result.insights.iter().map(|insight| format!("  - {insight}")));

    lines.join("\n")
}

fn quality_lines(quality: &DataQualityMetrics) -> Vec<String> {
    vec![
        "Data quality".to_owned(),
        format!("  Days in window:      {}", quality.total_days),
        format!("  Days with weather:   {}", quality.days_with_weather_data),
        format!("  Days with symptoms:  {}", quality.days_with_symptom_data),
        format!("  Overlapping days:    {}", quality.overlapping_days),
        format!(
            "  Coverage:            {:.0}%",
            quality.coverage_percentage * 100.0
        ),
        format!("  Consistency:         {:.2}", quality.consistency_score),
    ]
}

fn correlation_line(result: &CorrelationResult) -> String {
    let marker = if result.is_significant { " *" } else { "" };
    format!(
        "  {:<22} {:>6.2} {:>8.4} {:>4} {:>6.2}  {}{marker}",
        result.factor.display_name(),
        result.correlation,
        result.p_value,
        result.sample_size,
        result.confidence,
        describe_effect(result),
    )
}

fn describe_effect(result: &CorrelationResult) -> String {
    match result.effect {
        EffectClassification::Positive => "positive".to_owned(),
        EffectClassification::Negative => "negative".to_owned(),
        EffectClassification::Threshold(value) => {
            format!("threshold at {value:.0}{}", result.factor.unit())
        }
        EffectClassification::Nonlinear => "non-linear".to_owned(),
    }
}

fn render_data_points(points: &[DailyDataPoint]) -> String {
    let mut lines = vec![format!(
        "{:<10} {:>7} {:>9} {:>7} {:>7} {:>6} {:>5}  {}",
        "date", "symptom", "intensity", "temp", "hPa", "RH%", "wind", "trend"
    )];
    lines.extend(points.iter().map(|point| {
        if point.has_weather_data {
            let f = &point.features;
            format!(
                "{:<10} {:>7} {:>9} {:>7.1} {:>7.1} {:>6.0} {:>5.0}  {:?}",
                point.date,
                if point.symptom_occurred { "yes" } else { "-" },
                point.intensity.map_or_else(|| "-".to_owned(), |i| format!("{i:.0}")),
                f.temperature_celsius,
                f.pressure_hpa,
                f.humidity_percent,
                f.wind_speed_kmh,
                f.pressure_trend,
            )
        } else {
            format!(
                "{:<10} {:>7} {:>9}  (no weather data)",
                point.date,
                if point.symptom_occurred { "yes" } else { "-" },
                point.intensity.map_or_else(|| "-".to_owned(), |i| format!("{i:.0}")),
            )
        }
    }));
    lines.join("\n")
}
