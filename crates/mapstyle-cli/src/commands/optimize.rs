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

//! Optimize command - run optimization passes over a style

use super::{read_file, to_pretty_json, write_output};
use crate::error::CliError;
use colored::Colorize;
use mapstyle_optimize::{OptimizationResult, OptimizeConfig, Optimizer};

/// Optimize a style document and write the optimized style.
///
/// # Arguments
///
/// * `file` - Path to the style JSON file
/// * `output` - Output path; stdout when `None`
/// * `passes` - Pass names to run in order; all passes when empty
/// * `report` - Print the per-pass report to stderr
///
/// # Errors
///
/// Returns [`CliError::InvalidArgument`] for an unknown pass name, and
/// [`CliError::InputParse`] or [`CliError::InvalidDocument`] when the input
/// cannot be decoded as a style.
pub fn optimize(
    file: &str,
    output: Option<&str>,
    passes: &[String],
    report: bool,
) -> Result<(), CliError> {
    let config =
        OptimizeConfig::from_names(passes).map_err(|e| CliError::InvalidArgument(e.message))?;

    let content = read_file(file)?;
    let result = Optimizer::new(&config).run(content)?;

    write_output(&to_pretty_json(&result.optimized_style)?, output)?;

    if report {
        print_report(&result);
    }
    Ok(())
}

// The report goes to stderr so stdout stays valid JSON.
fn print_report(result: &OptimizationResult) {
    for record in &result.optimizations {
        let count = if record.count > 0 {
            record.count.to_string().green().bold()
        } else {
            record.count.to_string().dimmed()
        };
        eprintln!("  {:<24} {}", record.kind, count);
    }

    let s = &result.summary;
    eprintln!(
        "{} {} optimization(s): {} -> {} bytes ({}%), layers {} -> {}, sources {} -> {}",
        "✓".green().bold(),
        s.total_optimizations,
        s.original_size,
        s.optimized_size,
        s.percent_reduction,
        s.original_layers,
        s.optimized_layers,
        s.original_sources,
        s.optimized_sources
    );
}
