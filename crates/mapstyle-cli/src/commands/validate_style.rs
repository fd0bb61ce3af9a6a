// Mapstyle - Map Style & Expression Toolkit
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Validate-style command - structural style checks

use super::{display_name, print_diagnostics, read_file, to_pretty_json, OutputFormat};
use crate::error::CliError;
use colored::Colorize;
use mapstyle_lint::StyleValidationResult;

/// Validate a style document file.
///
/// # Arguments
///
/// * `file` - Path to the style JSON file
/// * `format` - Text report or pretty JSON
/// * `warn_error` - Treat warnings as failures
///
/// # Errors
///
/// Returns [`CliError::ValidationFailed`] when the style has errors, or
/// warnings while `warn_error` is set.
pub fn validate_style(file: &str, format: OutputFormat, warn_error: bool) -> Result<(), CliError> {
    let content = read_file(file)?;
    let result = mapstyle_lint::validate_style(content);

    match format {
        OutputFormat::Json => println!("{}", to_pretty_json(&result)?),
        OutputFormat::Text => print_text(file, &result),
    }

    let errors = result.errors.len();
    let warnings = result.warnings.len();
    if errors > 0 || (warn_error && warnings > 0) {
        return Err(CliError::ValidationFailed { errors, warnings });
    }
    Ok(())
}

fn print_text(file: &str, result: &StyleValidationResult) {
    let name = display_name(file);
    let summary = &result.summary;

    if result.valid {
        println!(
            "{} {} ({} layers, {} sources)",
            "✓".green().bold(),
            name,
            summary.layer_count,
            summary.source_count
        );
    } else {
        println!(
            "{} {} ({} errors)",
            "✗".red().bold(),
            name,
            result.errors.len()
        );
    }

    if result.warnings.is_empty() && result.errors.is_empty() && result.info.is_empty() {
        return;
    }

    print_diagnostics(
        result
            .errors
            .iter()
            .chain(&result.warnings)
            .chain(&result.info),
    );

    println!(
        "\n{} error(s), {} warning(s), {} info",
        result.errors.len(),
        result.warnings.len(),
        result.info.len()
    );
}
