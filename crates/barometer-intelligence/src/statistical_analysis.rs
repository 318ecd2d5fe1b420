// ABOUTME: Statistical primitives for the correlation engine: Pearson r, t-based p-values, confidence
// ABOUTME: Normal CDF via the Abramowitz-Stegun 7.1.26 error-function approximation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barometer Contributors

use crate::config::{PValueApproximation, StatisticalConfig};
use serde::{Deserialize, Serialize};

/// Statistical significance levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignificanceLevel {
    /// No statistical significance (p >= 0.1)
    NotSignificant,
    /// Weak significance (p < 0.1)
    Weak,
    /// Moderate significance (p < 0.05)
    Moderate,
    /// Strong significance (p < 0.01)
    Strong,
    /// Very strong significance (p < 0.001)
    VeryStrong,
}

impl SignificanceLevel {
    /// Create significance level from p-value
    #[must_use]
    pub fn from_p_value(p_value: f64) -> Self {
        if p_value < 0.001 {
            Self::VeryStrong
        } else if p_value < 0.01 {
            Self::Strong
        } else if p_value < 0.05 {
            Self::Moderate
        } else if p_value < 0.1 {
            Self::Weak
        } else {
            Self::NotSignificant
        }
    }
}

/// Conventional effect-size label for |r|
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationStrength {
    /// |r| < 0.1
    Negligible,
    /// |r| < 0.3
    Weak,
    /// |r| < 0.5
    Moderate,
    /// |r| >= 0.5
    Strong,
}

impl CorrelationStrength {
    /// Label a correlation coefficient
    #[must_use]
    pub fn from_correlation(correlation: f64) -> Self {
        match correlation.abs() {
            r if r < 0.1 => Self::Negligible,
            r if r < 0.3 => Self::Weak,
            r if r < 0.5 => Self::Moderate,
            _ => Self::Strong,
        }
    }
}

/// Stateless statistical routines
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Pearson correlation of two equal-length series.
    ///
    /// `r = (nΣxy − ΣxΣy) / sqrt((nΣx² − (Σx)²)(nΣy² − (Σy)²))`, defined as
    /// 0 when either series has zero variance or fewer than two pairs exist.
    /// Extra elements in the longer series are ignored.
    #[must_use]
    pub fn pearson_correlation(x_values: &[f64], y_values: &[f64]) -> f64 {
        let len = x_values.len().min(y_values.len());
        if len < 2 {
            return 0.0;
        }
        let x_values = &x_values[..len];
        let y_values = &y_values[..len];
        let n = len as f64;

        let sum_x = x_values.iter().sum::<f64>();
        let sum_y = y_values.iter().sum::<f64>();
        let sum_xx = x_values.iter().map(|x| x * x).sum::<f64>();
        let sum_yy = y_values.iter().map(|y| y * y).sum::<f64>();
        let sum_x_y = x_values
            .iter()
            .zip(y_values)
            .map(|(x, y)| x * y)
            .sum::<f64>();

        let numerator = n.mul_add(sum_x_y, -(sum_x * sum_y));
        let variance_x = n.mul_add(sum_xx, -(sum_x * sum_x));
        let variance_y = n.mul_add(sum_yy, -(sum_y * sum_y));
        let denominator = (variance_x * variance_y).sqrt();

        // Cancellation can leave tiny negative variances for constant series
        if variance_x <= 0.0 || variance_y <= 0.0 || !denominator.is_finite() || denominator == 0.0
        {
            return 0.0;
        }

        let correlation = numerator / denominator;
        if correlation.is_finite() {
            correlation.clamp(-1.0, 1.0)
        } else {
            0.0
        }
    }

    /// Two-sided p-value for a correlation from `n` pairs, clamped to [0, 1]
    #[must_use]
    pub fn correlation_p_value(
        correlation: f64,
        sample_size: usize,
        approximation: PValueApproximation,
    ) -> f64 {
        if sample_size <= 2 {
            return 1.0;
        }
        let r = correlation.clamp(-1.0, 1.0);
        let residual = r.mul_add(-r, 1.0);
        if residual <= 0.0 {
            return 0.0;
        }

        let degrees_of_freedom = (sample_size - 2) as f64;
        let t_stat = r * degrees_of_freedom.sqrt() / residual.sqrt();
        let z = match approximation {
            PValueApproximation::Normal => t_stat.abs(),
            PValueApproximation::DfScaled => t_stat.abs() / degrees_of_freedom.sqrt(),
        };

        (2.0 * (1.0 - Self::standard_normal_cdf(z))).clamp(0.0, 1.0)
    }

    /// Heuristic confidence blend of sample adequacy, significance and effect size
    #[must_use]
    pub fn confidence_score(
        sample_size: usize,
        p_value: f64,
        correlation: f64,
        config: &StatisticalConfig,
    ) -> f64 {
        let adequacy =
            (sample_size as f64 / config.full_confidence_sample_size.max(1) as f64).min(1.0);
        let score = config.effect_size_weight.mul_add(
            correlation.abs(),
            config
                .sample_size_weight
                .mul_add(adequacy, config.significance_weight * (1.0 - p_value)),
        );
        score.clamp(0.0, 1.0)
    }

    /// Standard normal cumulative distribution function
    #[must_use]
    pub fn standard_normal_cdf(x: f64) -> f64 {
        0.5 * (1.0 + Self::erf(x / std::f64::consts::SQRT_2))
    }

    /// Error function, Abramowitz and Stegun 7.1.26 (|error| <= 1.5e-7)
    #[must_use]
    pub fn erf(x: f64) -> f64 {
        const P: f64 = 0.327_591_1;
        const A1: f64 = 0.254_829_592;
        const A2: f64 = -0.284_496_736;
        const A3: f64 = 1.421_413_741;
        const A4: f64 = -1.453_152_027;
        const A5: f64 = 1.061_405_429;

        let sign = if x < 0.0 { -1.0 } else { 1.0 };
        let x = x.abs();

        let t = 1.0 / P.mul_add(x, 1.0);
        let poly = t * t.mul_add(t.mul_add(t.mul_add(t.mul_add(A5, A4), A3), A2), A1);
        let y = poly.mul_add(-(-x * x).exp(), 1.0);

        sign * y
    }
}
