// ABOUTME: `features` command - prints the assembled daily data points for inspection
// ABOUTME: Shows what the correlation stage would see without running it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barometer Contributors

use super::Session;
use crate::InputArgs;
use anyhow::Result;
use barometer::formatters::{format_data_points, OutputFormat};

pub fn run(input: &InputArgs, format: &str) -> Result<()> {
    let session = Session::open(input)?;
    let points = session
        .analyzer
        .data_points(&session.symptoms, &session.weather, session.today);

    let output = format_data_points(&points, OutputFormat::from_str_param(format))?;
    println!("{output}");
    Ok(())
}
