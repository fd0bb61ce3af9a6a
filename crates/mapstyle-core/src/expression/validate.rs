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

//! Expression validation.

use super::ast::Expression;
use super::grammar::{self, ValueType};
use crate::diagnostic::{partition_by_severity, Diagnostic, DiagnosticKind};
use crate::error::StyleError;
use crate::input::JsonInput;
use crate::limits::Limits;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const RULE_ID: &str = "expression";

/// Where an expression is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionContext {
    Style,
    Filter,
    Layout,
    Paint,
}

impl ExpressionContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Style => "style",
            Self::Filter => "filter",
            Self::Layout => "layout",
            Self::Paint => "paint",
        }
    }
}

impl fmt::Display for ExpressionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpressionContext {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "style" => Ok(Self::Style),
            "filter" => Ok(Self::Filter),
            "layout" => Ok(Self::Layout),
            "paint" => Ok(Self::Paint),
            other => Err(StyleError::schema(format!(
                "Unknown expression context '{}' (expected style, filter, layout or paint)",
                other
            ))),
        }
    }
}

impl Serialize for ExpressionContext {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Facts about a validated expression.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression_type: Option<&'static str>,
    /// Result type of the top-level operator, when fixed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<ValueType>,
    /// Deepest array nesting seen (root is 0).
    pub depth: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ExpressionContext>,
}

/// Outcome of validating one expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    /// `true` iff `errors` is empty.
    pub valid: bool,
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
    pub info: Vec<Diagnostic>,
    pub metadata: ExpressionMetadata,
}

impl ValidationResult {
    fn from_diagnostics(diagnostics: Vec<Diagnostic>, metadata: ExpressionMetadata) -> Self {
        let (errors, warnings, info) = partition_by_severity(diagnostics);
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
            info,
            metadata,
        }
    }

    /// A result holding a single error for input that could not be decoded.
    pub fn from_error(err: StyleError, context: Option<ExpressionContext>) -> Self {
        let kind = if err.is_input_parse() {
            DiagnosticKind::InputParse
        } else {
            DiagnosticKind::InvalidStructure
        };
        let mut diag = Diagnostic::error(kind, err.message, RULE_ID);
        if let Some(path) = err.path {
            diag = diag.with_path(path);
        }
        Self::from_diagnostics(
            vec![diag],
            ExpressionMetadata {
                context,
                ..ExpressionMetadata::default()
            },
        )
    }

    /// All diagnostics, errors first.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        let mut all = self.errors;
        all.extend(self.warnings);
        all.extend(self.info);
        all
    }
}

/// Validate an expression given as JSON text or a parsed value.
///
/// ```
/// use mapstyle_core::{validate_expression, ExpressionContext};
/// use serde_json::json;
///
/// let result = validate_expression(json!(["==", ["get", "class"], "park"]), Some(ExpressionContext::Filter));
/// assert!(result.valid);
/// assert_eq!(result.metadata.depth, 1);
///
/// let result = validate_expression(json!(["bogus_op", 1]), None);
/// assert_eq!(result.errors.len(), 1);
/// ```
pub fn validate_expression(
    input: impl Into<JsonInput>,
    context: Option<ExpressionContext>,
) -> ValidationResult {
    validate_expression_with_limits(input, context, &Limits::default())
}

/// Like [`validate_expression`], with explicit limits.
pub fn validate_expression_with_limits(
    input: impl Into<JsonInput>,
    context: Option<ExpressionContext>,
    limits: &Limits,
) -> ValidationResult {
    match input.into().into_value() {
        Ok(value) => validate_expression_tree(&Expression::from_value(value), context, limits),
        Err(err) => ValidationResult::from_error(err, context),
    }
}

/// Validate an already-built expression tree.
pub fn validate_expression_tree(
    expr: &Expression,
    context: Option<ExpressionContext>,
    limits: &Limits,
) -> ValidationResult {
    let mut walker = Walker::new(limits);
    if let Err(err) = grammar::table_check() {
        walker.diagnostics.push(grammar_diagnostic(err, ""));
    }
    walker.visit(expr, "", 0);

    let return_type = match expr {
        Expression::Call { operator, .. } => grammar::lookup(operator).and_then(|s| s.return_type),
        _ => None,
    };

    if context == Some(ExpressionContext::Filter) {
        if let (Some(operator), Some(ty)) = (expr.operator(), return_type) {
            if ty != ValueType::Boolean {
                walker.diagnostics.push(
                    Diagnostic::warning(
                        DiagnosticKind::TypeMismatch,
                        format!(
                            "Filter expressions should evaluate to a boolean, but '{}' returns {}",
                            operator, ty
                        ),
                        RULE_ID,
                    )
                    .with_suggestion("Wrap the value in a comparison such as [\"==\", ...]"),
                );
            }
        }
    }

    let metadata = ExpressionMetadata {
        expression_type: Some(expr.expression_type()),
        return_type,
        depth: walker.max_depth,
        context,
    };
    ValidationResult::from_diagnostics(walker.diagnostics, metadata)
}

/// An inconsistent grammar entry, reported as an internal invariant break.
fn grammar_diagnostic(err: &StyleError, path: &str) -> Diagnostic {
    Diagnostic::error(DiagnosticKind::GrammarInconsistency, err.to_string(), RULE_ID)
        .with_path(path)
}

struct Walker<'a> {
    limits: &'a Limits,
    diagnostics: Vec<Diagnostic>,
    max_depth: usize,
    depth_warned: bool,
    traversal_cut: bool,
}

impl<'a> Walker<'a> {
    fn new(limits: &'a Limits) -> Self {
        Self {
            limits,
            diagnostics: Vec::new(),
            max_depth: 0,
            depth_warned: false,
            traversal_cut: false,
        }
    }

    fn visit(&mut self, expr: &Expression, path: &str, depth: usize) {
        if depth > self.limits.max_recursion_depth {
            if !self.traversal_cut {
                self.traversal_cut = true;
                self.diagnostics.push(
                    Diagnostic::warning(
                        DiagnosticKind::ExcessiveDepth,
                        format!(
                            "Maximum traversal depth of {} exceeded; nested expressions were not checked",
                            self.limits.max_recursion_depth
                        ),
                        RULE_ID,
                    )
                    .with_path(path),
                );
            }
            return;
        }

        self.max_depth = self.max_depth.max(depth);

        if depth > self.limits.max_expression_depth && !self.depth_warned {
            self.depth_warned = true;
            self.diagnostics.push(
                Diagnostic::warning(
                    DiagnosticKind::ExcessiveDepth,
                    format!(
                        "Expression nesting depth {} exceeds the recommended maximum of {}",
                        depth, self.limits.max_expression_depth
                    ),
                    RULE_ID,
                )
                .with_path(path)
                .with_suggestion("Consider simplifying the expression"),
            );
        }

        match expr {
            Expression::Literal(_) | Expression::LiteralObject(_) => {}
            Expression::Malformed(_) => {
                self.diagnostics.push(
                    Diagnostic::error(
                        DiagnosticKind::InvalidOperator,
                        "Expression operator must be a string",
                        RULE_ID,
                    )
                    .with_path(path)
                    .with_suggestion("The first element of an expression array names its operator"),
                );
            }
            Expression::Call { operator, args } => {
                let Some(spec) = grammar::lookup(operator) else {
                    self.diagnostics.push(
                        Diagnostic::error(
                            DiagnosticKind::UnknownOperator,
                            format!("Unknown expression operator '{}'", operator),
                            RULE_ID,
                        )
                        .with_path(path)
                        .with_suggestion(format!(
                            "Use a valid operator such as {}",
                            grammar::common_operators().join(", ")
                        )),
                    );
                    return;
                };
                if let Err(err) = spec.check() {
                    self.diagnostics.push(grammar_diagnostic(&err, path));
                    return;
                }

                if args.len() < spec.min_args {
                    self.diagnostics.push(
                        Diagnostic::error(
                            DiagnosticKind::ArgumentCount,
                            format!(
                                "Operator '{}' requires at least {} arguments, got {}",
                                operator,
                                spec.min_args,
                                args.len()
                            ),
                            RULE_ID,
                        )
                        .with_path(path),
                    );
                }
                if let Some(max) = spec.max_args {
                    if args.len() > max {
                        self.diagnostics.push(
                            Diagnostic::error(
                                DiagnosticKind::ArgumentCount,
                                format!(
                                    "Operator '{}' accepts at most {} arguments, got {}",
                                    operator,
                                    max,
                                    args.len()
                                ),
                                RULE_ID,
                            )
                            .with_path(path),
                        );
                    }
                }

                for (i, arg) in args.iter().enumerate() {
                    if arg.is_array() {
                        let child = format!("{}[{}]", path, i + 1);
                        self.visit(arg, &child, depth + 1);
                    }
                }
            }
        }
    }
}
