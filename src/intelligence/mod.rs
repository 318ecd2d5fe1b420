// ABOUTME: Intelligence module re-exports from the barometer-intelligence crate
// ABOUTME: Lets applications import the whole engine through the root crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barometer Contributors

//! # Intelligence Module
//!
//! Symptom/weather correlation analysis. Everything here lives in the
//! `barometer-intelligence` crate so the engine compiles without the CLI.

// Re-export all public items from barometer-intelligence
pub use barometer_intelligence::*;

// Re-export submodules for path-based access (e.g., crate::intelligence::config::InsightConfig)
pub use barometer_intelligence::{
    analyzer, assembler, config, correlation, effects, factors, features, insights,
    meteorological_constants, quality, statistical_analysis,
};
