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

//! Style validation report

use crate::runner::{LintConfig, LintRunner};
use mapstyle_core::{
    partition_by_severity, Diagnostic, DiagnosticKind, JsonInput, StyleDocument, StyleError,
};
use serde::Serialize;
use serde_json::Value;

const RULE_ID: &str = "style-structure";

/// Overview of a style's top-level shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSummary {
    /// The `version` value as given (null when absent).
    pub version: Option<Value>,
    pub layer_count: usize,
    pub source_count: usize,
    pub has_sprite: bool,
    pub has_glyphs: bool,
}

impl StyleSummary {
    /// Summarize a raw JSON style. Non-object input yields an empty summary.
    pub fn from_value(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            return Self::default();
        };
        Self {
            version: map.get("version").cloned(),
            layer_count: map
                .get("layers")
                .and_then(Value::as_array)
                .map_or(0, Vec::len),
            source_count: map
                .get("sources")
                .and_then(Value::as_object)
                .map_or(0, |s| s.len()),
            has_sprite: map.get("sprite").is_some_and(|v| !v.is_null()),
            has_glyphs: map.get("glyphs").is_some_and(|v| !v.is_null()),
        }
    }
}

/// Outcome of validating a style document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleValidationResult {
    /// `true` iff `errors` is empty.
    pub valid: bool,
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
    pub info: Vec<Diagnostic>,
    pub summary: StyleSummary,
}

impl StyleValidationResult {
    fn new(diagnostics: Vec<Diagnostic>, summary: StyleSummary) -> Self {
        let (errors, warnings, info) = partition_by_severity(diagnostics);
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
            info,
            summary,
        }
    }

    fn from_error(err: StyleError, summary: StyleSummary) -> Self {
        let kind = if err.is_input_parse() {
            DiagnosticKind::InputParse
        } else {
            DiagnosticKind::InvalidStructure
        };
        let mut diag = Diagnostic::error(kind, err.message, RULE_ID);
        if let Some(path) = err.path {
            diag = diag.with_path(path);
        }
        Self::new(vec![diag], summary)
    }

    /// Number of diagnostics of every severity.
    pub fn diagnostic_count(&self) -> usize {
        self.errors.len() + self.warnings.len() + self.info.len()
    }
}

/// Validate a style document given as JSON text or a parsed value.
///
/// Malformed JSON text, or a document whose known fields have the wrong
/// shape, produces a single error; otherwise every enabled rule runs.
pub fn validate_style(input: impl Into<JsonInput>) -> StyleValidationResult {
    validate_style_with_config(input, LintConfig::default())
}

/// Like [`validate_style`], with a custom rule configuration.
pub fn validate_style_with_config(
    input: impl Into<JsonInput>,
    config: LintConfig,
) -> StyleValidationResult {
    let value = match input.into().into_value() {
        Ok(value) => value,
        Err(err) => return StyleValidationResult::from_error(err, StyleSummary::default()),
    };

    let summary = StyleSummary::from_value(&value);
    let style = match StyleDocument::from_value(value) {
        Ok(style) => style,
        Err(err) => return StyleValidationResult::from_error(err, summary),
    };

    let diagnostics = LintRunner::new(config).run(&style);
    StyleValidationResult::new(diagnostics, summary)
}
