// ABOUTME: Immutable symptom diary record with timestamp and ordinal intensity
// ABOUTME: Records are bucketed by UTC calendar day by the analysis engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barometer Contributors

use crate::constants::limits::{MAX_SYMPTOM_INTENSITY, MIN_SYMPTOM_INTENSITY};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single symptom entry from the diary store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomRecord {
    /// Store identifier
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// When the symptom was logged
    pub timestamp: DateTime<Utc>,
    /// Ordinal intensity (1-10)
    pub intensity: u8,
    /// Optional free-text symptom name ("migraine", "joint pain")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symptom: Option<String>,
}

impl SymptomRecord {
    /// Create a record with a fresh identifier
    #[must_use]
    pub fn new(timestamp: DateTime<Utc>, intensity: u8) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            intensity,
            symptom: None,
        }
    }

    /// Attach a symptom name
    #[must_use]
    pub fn with_symptom(mut self, symptom: impl Into<String>) -> Self {
        self.symptom = Some(symptom.into());
        self
    }

    /// Calendar day (UTC) the record belongs to
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    /// Check the intensity is on the diary's scale
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when the intensity is outside 1-10
    pub fn validate(&self) -> AppResult<()> {
        if (MIN_SYMPTOM_INTENSITY..=MAX_SYMPTOM_INTENSITY).contains(&self.intensity) {
            Ok(())
        } else {
            Err(AppError::out_of_range(format!(
                "symptom {} has intensity {} outside {MIN_SYMPTOM_INTENSITY}-{MAX_SYMPTOM_INTENSITY}",
                self.id, self.intensity
            )))
        }
    }
}
