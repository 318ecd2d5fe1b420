// ABOUTME: Input data models delivered by external collaborators to the analysis engine
// ABOUTME: Weather observations keyed by day and immutable symptom diary records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barometer Contributors

//! Snapshot models consumed by the correlation engine.
//!
//! Both types are immutable once ingested: the engine only ever reads
//! them, and every analysis run starts from a fresh snapshot.

mod symptom;
mod weather;

pub use symptom::SymptomRecord;
pub use weather::{WeatherHistory, WeatherObservation};
