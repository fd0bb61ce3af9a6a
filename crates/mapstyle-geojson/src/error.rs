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

//! Error types for GeoJSON analysis.

use mapstyle_core::StyleError;
use thiserror::Error;

/// GeoJSON analysis error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoJsonError {
    /// Input text was not valid JSON.
    #[error("{0}")]
    InputParse(String),

    /// The `type` member names something that is not a GeoJSON object.
    #[error("Unsupported GeoJSON type: {0}")]
    UnsupportedType(String),

    /// A known object with malformed members.
    #[error("Invalid geometry at {path}: {message}")]
    InvalidGeometry { path: String, message: String },

    /// The document was well formed but contained no positions.
    #[error("No valid coordinates found")]
    NoCoordinates,
}

/// Result type for GeoJSON operations.
pub type GeoJsonResult<T> = Result<T, GeoJsonError>;

impl GeoJsonError {
    pub fn invalid(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Error category name, shared with the style diagnostics vocabulary.
    pub fn category(&self) -> &'static str {
        match self {
            Self::InputParse(_) => "InputParseError",
            Self::UnsupportedType(_) | Self::InvalidGeometry { .. } => "SchemaViolation",
            Self::NoCoordinates => "NoCoordinates",
        }
    }
}

impl From<StyleError> for GeoJsonError {
    fn from(err: StyleError) -> Self {
        Self::InputParse(err.message)
    }
}
