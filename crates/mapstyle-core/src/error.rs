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

//! Error types for style and expression processing.

use std::fmt;
use thiserror::Error;

/// The kind of error that occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleErrorKind {
    /// Malformed JSON text at the outer input boundary.
    InputParse,
    /// Input is well-formed JSON but does not have the expected structure.
    Schema,
    /// Internal inconsistency (e.g. in the operator grammar table).
    Internal,
}

impl fmt::Display for StyleErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputParse => write!(f, "InputParseError"),
            Self::Schema => write!(f, "SchemaViolation"),
            Self::Internal => write!(f, "InternalInvariantBreak"),
        }
    }
}

/// An error raised while decoding or processing a style document.
#[derive(Debug, Clone, Error)]
pub struct StyleError {
    /// The kind of error.
    pub kind: StyleErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// JSON path of the offending value, when known (e.g. `layers[2].id`).
    pub path: Option<String>,
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{} at {}: {}", self.kind, path, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl StyleError {
    /// Create a new error.
    pub fn new(kind: StyleErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            path: None,
        }
    }

    /// Attach the JSON path of the offending value.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn input_parse(message: impl Into<String>) -> Self {
        Self::new(StyleErrorKind::InputParse, message)
    }

    pub fn schema(message: impl Into<String>) -> Self {
        Self::new(StyleErrorKind::Schema, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StyleErrorKind::Internal, message)
    }

    /// Whether this error came from the outer JSON parse step.
    pub fn is_input_parse(&self) -> bool {
        self.kind == StyleErrorKind::InputParse
    }
}

/// Result type for style operations.
pub type StyleResult<T> = Result<T, StyleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(format!("{}", StyleErrorKind::InputParse), "InputParseError");
        assert_eq!(format!("{}", StyleErrorKind::Schema), "SchemaViolation");
        assert_eq!(
            format!("{}", StyleErrorKind::Internal),
            "InternalInvariantBreak"
        );
    }

    #[test]
    fn test_error_display_without_path() {
        let err = StyleError::input_parse("expected value at line 1 column 1");
        let msg = format!("{}", err);
        assert!(msg.starts_with("InputParseError: "));
        assert!(msg.contains("line 1 column 1"));
    }

    #[test]
    fn test_error_display_with_path() {
        let err = StyleError::schema("invalid type: integer, expected a string")
            .with_path("layers[2].id");
        let msg = format!("{}", err);
        assert!(msg.contains("SchemaViolation at layers[2].id"));
    }

    #[test]
    fn test_is_input_parse() {
        assert!(StyleError::input_parse("x").is_input_parse());
        assert!(!StyleError::schema("x").is_input_parse());
    }

    #[test]
    fn test_error_kind_equality() {
        assert_eq!(StyleErrorKind::Schema, StyleErrorKind::Schema);
        assert_ne!(StyleErrorKind::Schema, StyleErrorKind::Internal);
    }
}
