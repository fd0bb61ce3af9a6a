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

//! Diagnostic types shared by the expression and style validators.

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Severity level for diagnostics.
///
/// Only [`Severity::Error`] makes a result invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Informational note
    Info,
    /// Warning - valid but risky
    Warning,
    /// Error - definitely an issue
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Kind of diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Malformed JSON text at the input boundary
    InputParse,
    /// Input decoded but does not have the expected structure
    InvalidStructure,
    /// Array whose first element is not an operator name
    InvalidOperator,
    /// Operator not present in the grammar table
    UnknownOperator,
    /// Argument count outside the operator's bounds
    ArgumentCount,
    /// Expression nested deeper than the configured limit
    ExcessiveDepth,
    /// Expression whose result type does not fit its context
    TypeMismatch,
    /// Style `version` is not 8
    InvalidVersion,
    /// Required top-level field missing
    MissingField,
    /// Style has no layers
    EmptyLayers,
    /// Two layers share an id
    DuplicateLayerId,
    /// Layer refers to a source that is not declared, or declares none
    DanglingSource,
    /// `source-layer` present where forbidden or missing where required
    SourceLayerMismatch,
    /// Unknown layer type
    UnknownLayerType,
    /// Zoom bounds out of range or inverted
    InvalidZoomRange,
    /// Layer with neither paint nor layout properties
    EmptyLayer,
    /// Grammar table entry with inconsistent bounds
    GrammarInconsistency,
    /// Custom rule violation
    Custom(String),
}

impl DiagnosticKind {
    /// Stable kebab-case code used in serialized output.
    pub fn code(&self) -> &str {
        match self {
            Self::InputParse => "input-parse",
            Self::InvalidStructure => "invalid-structure",
            Self::InvalidOperator => "invalid-operator",
            Self::UnknownOperator => "unknown-operator",
            Self::ArgumentCount => "argument-count",
            Self::ExcessiveDepth => "excessive-depth",
            Self::TypeMismatch => "type-mismatch",
            Self::InvalidVersion => "invalid-version",
            Self::MissingField => "missing-field",
            Self::EmptyLayers => "empty-layers",
            Self::DuplicateLayerId => "duplicate-layer-id",
            Self::DanglingSource => "dangling-source",
            Self::SourceLayerMismatch => "source-layer-mismatch",
            Self::UnknownLayerType => "unknown-layer-type",
            Self::InvalidZoomRange => "invalid-zoom-range",
            Self::EmptyLayer => "empty-layer",
            Self::GrammarInconsistency => "grammar-inconsistency",
            Self::Custom(code) => code,
        }
    }
}

/// A single reported issue.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Severity level
    severity: Severity,
    /// Kind of issue
    kind: DiagnosticKind,
    /// Human-readable message
    message: String,
    /// Location in bracket/dot notation relative to the root (e.g. `[1][2]`)
    path: Option<String>,
    /// Rule ID that generated this diagnostic
    rule_id: String,
    /// Suggested fix (if any)
    suggestion: Option<String>,
}

impl Diagnostic {
    fn new(
        severity: Severity,
        kind: DiagnosticKind,
        message: impl Into<String>,
        rule_id: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            kind,
            message: message.into(),
            path: None,
            rule_id: rule_id.into(),
            suggestion: None,
        }
    }

    pub fn error(
        kind: DiagnosticKind,
        message: impl Into<String>,
        rule_id: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Error, kind, message, rule_id)
    }

    pub fn warning(
        kind: DiagnosticKind,
        message: impl Into<String>,
        rule_id: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Warning, kind, message, rule_id)
    }

    pub fn info(
        kind: DiagnosticKind,
        message: impl Into<String>,
        rule_id: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Info, kind, message, rule_id)
    }

    /// Set the path. An empty path means the root and is stored as `None`.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        self.path = if path.is_empty() { None } else { Some(path) };
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Prefix the path, e.g. `layers[0].filter` + `[1]` -> `layers[0].filter[1]`.
    pub fn with_path_prefix(mut self, prefix: &str) -> Self {
        self.path = Some(match self.path.take() {
            Some(path) => format!("{}{}", prefix, path),
            None => prefix.to_string(),
        });
        self
    }

    /// Attribute the diagnostic to another rule, e.g. one that merges
    /// diagnostics produced elsewhere.
    pub fn with_rule_id(mut self, rule_id: impl Into<String>) -> Self {
        self.rule_id = rule_id.into();
        self
    }

    /// Prefix the message, e.g. with the owning layer.
    pub fn with_message_prefix(mut self, prefix: &str) -> Self {
        self.message = format!("{}{}", prefix, self.message);
        self
    }

    // Public getters
    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn kind(&self) -> &DiagnosticKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn rule_id(&self) -> &str {
        &self.rule_id
    }

    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }

    /// Escalate the severity to error level (used by lint runner).
    pub fn escalate_to_error(&mut self) {
        self.severity = Severity::Error;
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: ", path)?;
        }

        write!(f, "[{}] {}: {}", self.rule_id, self.severity, self.message)?;

        if let Some(ref suggestion) = self.suggestion {
            write!(f, " ({})", suggestion)?;
        }

        Ok(())
    }
}

impl Serialize for Diagnostic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut len = 4;
        len += usize::from(self.path.is_some());
        len += usize::from(self.suggestion.is_some());

        let mut state = serializer.serialize_struct("Diagnostic", len)?;
        state.serialize_field("severity", &self.severity)?;
        state.serialize_field("code", self.kind.code())?;
        state.serialize_field("message", &self.message)?;
        if let Some(ref path) = self.path {
            state.serialize_field("path", path)?;
        }
        if let Some(ref suggestion) = self.suggestion {
            state.serialize_field("suggestion", suggestion)?;
        }
        state.serialize_field("rule", &self.rule_id)?;
        state.end()
    }
}

/// Split diagnostics into (errors, warnings, info), preserving order.
pub fn partition_by_severity(
    diagnostics: Vec<Diagnostic>,
) -> (Vec<Diagnostic>, Vec<Diagnostic>, Vec<Diagnostic>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut info = Vec::new();
    for diag in diagnostics {
        match diag.severity() {
            Severity::Error => errors.push(diag),
            Severity::Warning => warnings.push(diag),
            Severity::Info => info.push(diag),
        }
    }
    (errors, warnings, info)
}
