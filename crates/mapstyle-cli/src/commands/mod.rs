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

//! Command implementations for the mapstyle CLI.

mod bbox;
mod optimize;
mod tool;
mod validate_expr;
mod validate_style;

pub use bbox::bbox;
pub use optimize::optimize;
pub use tool::{list_tools, tool};
pub use validate_expr::validate_expr;
pub use validate_style::validate_style;

use crate::error::CliError;
use clap::ValueEnum;
use colored::Colorize;
use mapstyle_core::{Diagnostic, Severity};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// Default maximum input file size (100 MB).
/// Can be overridden via the `MAPSTYLE_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn get_max_file_size() -> u64 {
    std::env::var("MAPSTYLE_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file into a string, refusing files larger than the configured
/// maximum before any content is loaded.
///
/// # Errors
///
/// - [`CliError::FileTooLarge`] when the file exceeds `MAPSTYLE_MAX_FILE_SIZE`
/// - [`CliError::Io`] when metadata or content cannot be read
pub fn read_file(path: &str) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max = get_max_file_size();
    if metadata.len() > max {
        return Err(CliError::file_too_large(path, metadata.len(), max));
    }

    debug!("Reading {} ({} bytes)", path, metadata.len());
    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Write to a file when `path` is given, stdout otherwise.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|_| stdout.write_all(b"\n"))
                .map_err(|e| CliError::io_error("<stdout>", e))
        }
    }
}

/// Serialize a report as pretty JSON.
pub(crate) fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CliError::InvalidDocument(format!("JSON serialization error: {}", e)))
}

/// Display name for an input path.
pub(crate) fn display_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path)
}

/// Print diagnostics grouped as errors, warnings, then info.
pub(crate) fn print_diagnostics<'a>(diagnostics: impl IntoIterator<Item = &'a Diagnostic>) {
    for diag in diagnostics {
        let severity = match diag.severity() {
            Severity::Error => "error".red().bold(),
            Severity::Warning => "warning".yellow().bold(),
            Severity::Info => "info".blue(),
        };

        match diag.path() {
            Some(path) => println!(
                "  {}[{}] {}: {}",
                severity,
                diag.rule_id(),
                path.bold(),
                diag.message()
            ),
            None => println!("  {}[{}] {}", severity, diag.rule_id(), diag.message()),
        }

        if let Some(suggestion) = diag.suggestion() {
            println!("    {} {}", "suggestion:".cyan(), suggestion);
        }
    }
}
