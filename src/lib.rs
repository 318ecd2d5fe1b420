// ABOUTME: Main library entry point for the Barometer symptom diary analysis toolkit
// ABOUTME: Re-exports the engine crates and adds input loading, report formatting and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barometer Contributors

#![deny(unsafe_code)]

//! # Barometer
//!
//! Finds out whether the weather is associated with when symptoms occur.
//! A daily weather series and a symptom diary are joined over a trailing
//! window, each candidate weather factor is correlated with symptom
//! occurrence, and the findings are summarised as plain-language insights.
//!
//! ## Architecture
//!
//! - **`barometer-core`**: errors, constants and input models
//! - **`barometer-intelligence`**: the pure analysis engine
//! - this crate: JSON snapshot loading, report rendering, logging setup and
//!   the `barometer-cli` binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use barometer::input::{load_symptoms, load_weather};
//! use barometer::intelligence::{AnalysisConfig, CorrelationAnalyzer};
//! use barometer::errors::AppResult;
//! use std::path::Path;
//!
//! fn main() -> AppResult<()> {
//!     let weather = load_weather(Path::new("weather.json"))?;
//!     let symptoms = load_symptoms(Path::new("symptoms.json"))?;
//!
//!     let analyzer = CorrelationAnalyzer::new(AnalysisConfig::load()?);
//!     let result = analyzer.analyze(&symptoms, &weather);
//!     for insight in &result.insights {
//!         println!("{insight}");
//!     }
//!     Ok(())
//! }
//! ```

/// Application constants (re-exported from `barometer-core`)
pub use barometer_core::constants;

/// Unified error handling (re-exported from `barometer-core`)
pub use barometer_core::errors;

/// Input snapshot models (re-exported from `barometer-core`)
pub use barometer_core::models;

/// Report rendering for analysis results
pub mod formatters;

/// JSON snapshot loading and validation
pub mod input;

/// Correlation analysis engine
pub mod intelligence;

/// Structured logging setup
pub mod logging;
