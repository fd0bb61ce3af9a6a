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

//! Error types for the mapstyle command-line interface.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by CLI commands.
///
/// Every variant renders a single human-readable line; `main` prints it after
/// an `Error: ` prefix and exits with a failure status.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CliError {
    /// Reading or writing a file failed.
    #[error("I/O error for '{}': {message}", path.display())]
    Io { path: PathBuf, message: String },

    /// Input file exceeds `MAPSTYLE_MAX_FILE_SIZE`.
    #[error(
        "File '{}' is too large ({actual} bytes, maximum {max} bytes / {max_mb} MB). \
         Set MAPSTYLE_MAX_FILE_SIZE to raise the limit",
        path.display()
    )]
    FileTooLarge {
        path: PathBuf,
        actual: u64,
        max: u64,
        max_mb: u64,
    },

    /// Input text is not well-formed JSON.
    #[error("Failed to parse input: {0}")]
    InputParse(String),

    /// Input is JSON but not a usable style or GeoJSON document.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// A command-line argument was rejected.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Validation ran and reported failures.
    #[error("Validation failed with {errors} error(s) and {warnings} warning(s)")]
    ValidationFailed { errors: usize, warnings: usize },

    /// The tool adapter rejected the call or reported an error result.
    #[error("Tool error: {0}")]
    Tool(String),
}

impl CliError {
    pub fn io_error(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }
}

impl From<mapstyle_core::StyleError> for CliError {
    fn from(err: mapstyle_core::StyleError) -> Self {
        match err.kind {
            mapstyle_core::StyleErrorKind::InputParse => Self::InputParse(err.message),
            _ => Self::InvalidDocument(err.to_string()),
        }
    }
}

impl From<mapstyle_geojson::GeoJsonError> for CliError {
    fn from(err: mapstyle_geojson::GeoJsonError) -> Self {
        match err {
            mapstyle_geojson::GeoJsonError::InputParse(message) => Self::InputParse(message),
            other => Self::InvalidDocument(other.to_string()),
        }
    }
}

impl From<mapstyle_mcp::McpError> for CliError {
    fn from(err: mapstyle_mcp::McpError) -> Self {
        Self::Tool(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_too_large_message() {
        let err = CliError::file_too_large("big.json", 300, 200);
        let msg = err.to_string();
        assert!(msg.contains("big.json"));
        assert!(msg.contains("MAPSTYLE_MAX_FILE_SIZE"));
    }

    #[test]
    fn test_style_error_conversion() {
        let err: CliError = mapstyle_core::StyleError::input_parse("EOF").into();
        assert_eq!(err, CliError::InputParse("EOF".to_string()));
    }

    #[test]
    fn test_geojson_error_conversion() {
        let err: CliError = mapstyle_geojson::GeoJsonError::NoCoordinates.into();
        assert_eq!(err.to_string(), "Invalid document: No valid coordinates found");
    }
}
