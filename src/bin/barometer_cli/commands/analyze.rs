// ABOUTME: `analyze` command - runs the correlation analysis and prints the result
// ABOUTME: Text report by default, the serialized AnalysisResult with --format json
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barometer Contributors

use super::Session;
use crate::InputArgs;
use anyhow::Result;
use barometer::formatters::{format_report, OutputFormat};

pub fn run(input: &InputArgs, format: &str) -> Result<()> {
    let session = Session::open(input)?;
    let result = session
        .analyzer
        .analyze_as_of(&session.symptoms, &session.weather, session.today);

    let output = format_report(&result, OutputFormat::from_str_param(format))?;
    println!("{output}");
    Ok(())
}
