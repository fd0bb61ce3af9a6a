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

//! Validate-expr command - expression grammar checks

use super::{print_diagnostics, read_file, to_pretty_json, OutputFormat};
use crate::error::CliError;
use colored::Colorize;
use mapstyle_core::{validate_expression, ExpressionContext, ValidationResult};

/// Validate a single expression.
///
/// `input` is JSON text, or `@path` to read the expression from a file.
/// Malformed JSON is reported as a validation error, not a usage error.
///
/// # Errors
///
/// Returns [`CliError::ValidationFailed`] when the expression has errors,
/// [`CliError::InvalidArgument`] for an unknown `context`.
pub fn validate_expr(
    input: &str,
    context: Option<&str>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let context = context
        .map(|c| c.parse::<ExpressionContext>())
        .transpose()
        .map_err(|e| CliError::InvalidArgument(e.message))?;

    let text = match input.strip_prefix('@') {
        Some(path) => read_file(path)?,
        None => input.to_string(),
    };

    let result = validate_expression(text, context);

    match format {
        OutputFormat::Json => println!("{}", to_pretty_json(&result)?),
        OutputFormat::Text => print_text(&result),
    }

    if result.valid {
        Ok(())
    } else {
        Err(CliError::ValidationFailed {
            errors: result.errors.len(),
            warnings: result.warnings.len(),
        })
    }
}

fn print_text(result: &ValidationResult) {
    let meta = &result.metadata;
    let kind = meta.expression_type.unwrap_or("unknown");

    if result.valid {
        println!("{} valid {}", "✓".green().bold(), kind);
    } else {
        println!("{} invalid {}", "✗".red().bold(), kind);
    }

    if let Some(return_type) = &meta.return_type {
        println!("  returns: {}", return_type);
    }
    println!("  depth: {}", meta.depth);
    if let Some(context) = &meta.context {
        println!("  context: {}", context);
    }

    print_diagnostics(
        result
            .errors
            .iter()
            .chain(&result.warnings)
            .chain(&result.info),
    );
}
