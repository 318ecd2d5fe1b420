// ABOUTME: Core types and constants for the Barometer symptom/weather correlation engine
// ABOUTME: Foundation crate with error handling, input models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barometer Contributors

#![deny(unsafe_code)]

//! # Barometer Core
//!
//! Foundation crate providing shared types for the Barometer symptom diary
//! analysis engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Input snapshots delivered by external collaborators
//!   (weather observations and symptom records)

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Input data models (weather observations, symptom records)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{SymptomRecord, WeatherHistory, WeatherObservation};
