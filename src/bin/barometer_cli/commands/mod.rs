// ABOUTME: Command implementations for barometer-cli
// ABOUTME: Shared snapshot loading and configuration for the analyze and features commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barometer Contributors

pub mod analyze;
pub mod features;

use crate::InputArgs;
use anyhow::{Context, Result};
use barometer::errors::AppError;
use barometer::input::{load_symptoms, load_weather};
use barometer::intelligence::{AnalysisConfig, CorrelationAnalyzer};
use barometer::models::{SymptomRecord, WeatherHistory};
use chrono::{NaiveDate, Utc};
use tracing::debug;

/// Everything a command needs to run one analysis
pub struct Session {
    pub analyzer: CorrelationAnalyzer,
    pub weather: WeatherHistory,
    pub symptoms: Vec<SymptomRecord>,
    pub today: NaiveDate,
}

impl Session {
    /// Load configuration and both snapshots
    pub fn open(input: &InputArgs) -> Result<Self> {
        let mut config = AnalysisConfig::load().map_err(AppError::from)?;
        if let Some(window_days) = input.window_days {
            config.window.window_days = window_days;
            config
                .validate()
                .map_err(AppError::from)
                .context("--window-days")?;
        }

        let weather = load_weather(&input.weather).context("loading weather snapshot")?;
        let symptoms = load_symptoms(&input.symptoms).context("loading symptom snapshot")?;
        let today = input.today.unwrap_or_else(|| Utc::now().date_naive());
        debug!(%today, window_days = config.window.window_days, "session ready");

        Ok(Self {
            analyzer: CorrelationAnalyzer::new(config),
            weather,
            symptoms,
            today,
        })
    }
}
