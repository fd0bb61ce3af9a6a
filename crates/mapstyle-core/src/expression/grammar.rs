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

//! Operator grammar table.
//!
//! A static, read-only table of every expression operator the validator
//! recognises, with its argument-count bounds and (where fixed) its result
//! type. The table is built once and shared by all callers.

use crate::error::{StyleError, StyleResult};
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Result type of an operator, when it does not depend on its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Boolean,
    Number,
    String,
    Color,
    Object,
    Array,
    Collator,
    Formatted,
    ResolvedImage,
}

impl ValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Color => "color",
            Self::Object => "object",
            Self::Array => "array",
            Self::Collator => "collator",
            Self::Formatted => "formatted",
            Self::ResolvedImage => "resolvedImage",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ValueType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Grammar entry for a single operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorSpec {
    pub name: &'static str,
    /// Minimum number of arguments (operator name excluded).
    pub min_args: usize,
    /// Maximum number of arguments; `None` means unbounded.
    pub max_args: Option<usize>,
    pub return_type: Option<ValueType>,
}

impl OperatorSpec {
    const fn new(
        name: &'static str,
        min_args: usize,
        max_args: Option<usize>,
        return_type: Option<ValueType>,
    ) -> Self {
        Self {
            name,
            min_args,
            max_args,
            return_type,
        }
    }

    /// Reject an entry whose maximum is below its minimum.
    pub fn check(&self) -> StyleResult<()> {
        match self.max_args {
            Some(max) if max < self.min_args => Err(StyleError::internal(format!(
                "Operator '{}' has maxArgs {} below minArgs {}",
                self.name, max, self.min_args
            ))),
            _ => Ok(()),
        }
    }

    /// Whether `count` arguments satisfy this operator's bounds.
    pub fn accepts(&self, count: usize) -> bool {
        count >= self.min_args && self.max_args.map_or(true, |max| count <= max)
    }
}

use ValueType as T;

const fn op(
    name: &'static str,
    min: usize,
    max: Option<usize>,
    ret: Option<ValueType>,
) -> OperatorSpec {
    OperatorSpec::new(name, min, max, ret)
}

const N: Option<usize> = None;

/// All known operators, grouped as in the style expression reference.
pub static OPERATORS: &[OperatorSpec] = &[
    // Types
    op("array", 1, Some(3), Some(T::Array)),
    op("boolean", 1, N, Some(T::Boolean)),
    op("collator", 1, Some(1), Some(T::Collator)),
    op("format", 1, N, Some(T::Formatted)),
    op("image", 1, Some(1), Some(T::ResolvedImage)),
    op("literal", 1, Some(1), None),
    op("number", 1, N, Some(T::Number)),
    op("number-format", 2, Some(2), Some(T::String)),
    op("object", 1, N, Some(T::Object)),
    op("string", 1, N, Some(T::String)),
    op("to-boolean", 1, Some(1), Some(T::Boolean)),
    op("to-color", 1, N, Some(T::Color)),
    op("to-number", 1, N, Some(T::Number)),
    op("to-string", 1, Some(1), Some(T::String)),
    op("typeof", 1, Some(1), Some(T::String)),
    // Feature data
    op("accumulated", 0, Some(0), Some(T::Number)),
    op("feature-state", 1, Some(1), None),
    op("geometry-type", 0, Some(0), Some(T::String)),
    op("id", 0, Some(0), None),
    op("line-progress", 0, Some(0), Some(T::Number)),
    op("properties", 0, Some(0), Some(T::Object)),
    // Lookup
    op("at", 2, Some(2), None),
    op("config", 1, Some(2), None),
    op("get", 1, Some(2), None),
    op("has", 1, Some(2), Some(T::Boolean)),
    op("in", 2, Some(2), Some(T::Boolean)),
    op("index-of", 2, Some(3), Some(T::Number)),
    op("length", 1, Some(1), Some(T::Number)),
    op("slice", 2, Some(3), None),
    // Decision
    op("!", 1, Some(1), Some(T::Boolean)),
    op("!=", 2, Some(3), Some(T::Boolean)),
    op("<", 2, Some(3), Some(T::Boolean)),
    op("<=", 2, Some(3), Some(T::Boolean)),
    op("==", 2, Some(3), Some(T::Boolean)),
    op(">", 2, Some(3), Some(T::Boolean)),
    op(">=", 2, Some(3), Some(T::Boolean)),
    op("all", 0, N, Some(T::Boolean)),
    op("any", 0, N, Some(T::Boolean)),
    op("case", 3, N, None),
    op("coalesce", 1, N, None),
    op("match", 4, N, None),
    op("within", 1, Some(1), Some(T::Boolean)),
    // Ramps, scales, curves
    op("interpolate", 4, N, None),
    op("interpolate-hcl", 4, N, Some(T::Color)),
    op("interpolate-lab", 4, N, Some(T::Color)),
    op("step", 3, N, None),
    // Variable binding
    op("let", 3, N, None),
    op("var", 1, Some(1), None),
    // String
    op("concat", 1, N, Some(T::String)),
    op("downcase", 1, Some(1), Some(T::String)),
    op("is-supported-script", 1, Some(1), Some(T::Boolean)),
    op("resolved-locale", 1, Some(1), Some(T::String)),
    op("upcase", 1, Some(1), Some(T::String)),
    // Color
    op("hsl", 3, Some(3), Some(T::Color)),
    op("hsla", 4, Some(4), Some(T::Color)),
    op("rgb", 3, Some(3), Some(T::Color)),
    op("rgba", 4, Some(4), Some(T::Color)),
    op("to-rgba", 1, Some(1), Some(T::Array)),
    // Math
    op("-", 1, Some(2), Some(T::Number)),
    op("*", 2, N, Some(T::Number)),
    op("/", 2, Some(2), Some(T::Number)),
    op("%", 2, Some(2), Some(T::Number)),
    op("^", 2, Some(2), Some(T::Number)),
    op("+", 2, N, Some(T::Number)),
    op("abs", 1, Some(1), Some(T::Number)),
    op("acos", 1, Some(1), Some(T::Number)),
    op("asin", 1, Some(1), Some(T::Number)),
    op("atan", 1, Some(1), Some(T::Number)),
    op("ceil", 1, Some(1), Some(T::Number)),
    op("cos", 1, Some(1), Some(T::Number)),
    op("distance", 1, Some(1), Some(T::Number)),
    op("e", 0, Some(0), Some(T::Number)),
    op("floor", 1, Some(1), Some(T::Number)),
    op("ln", 1, Some(1), Some(T::Number)),
    op("ln2", 0, Some(0), Some(T::Number)),
    op("log10", 1, Some(1), Some(T::Number)),
    op("log2", 1, Some(1), Some(T::Number)),
    op("max", 1, N, Some(T::Number)),
    op("min", 1, N, Some(T::Number)),
    op("pi", 0, Some(0), Some(T::Number)),
    op("random", 3, Some(3), Some(T::Number)),
    op("round", 1, Some(1), Some(T::Number)),
    op("sin", 1, Some(1), Some(T::Number)),
    op("sqrt", 1, Some(1), Some(T::Number)),
    op("tan", 1, Some(1), Some(T::Number)),
    // Camera
    op("distance-from-center", 0, Some(0), Some(T::Number)),
    op("pitch", 0, Some(0), Some(T::Number)),
    op("zoom", 0, Some(0), Some(T::Number)),
    // Heatmap
    op("heatmap-density", 0, Some(0), Some(T::Number)),
];

fn operator_index() -> &'static HashMap<&'static str, &'static OperatorSpec> {
    static INDEX: OnceLock<HashMap<&'static str, &'static OperatorSpec>> = OnceLock::new();
    INDEX.get_or_init(|| OPERATORS.iter().map(|spec| (spec.name, spec)).collect())
}

/// Look up an operator by name.
pub fn lookup(name: &str) -> Option<&'static OperatorSpec> {
    operator_index().get(name).copied()
}

/// Check the table for inconsistent entries.
///
/// Returns an `Internal` error naming the first entry whose bounds are
/// inverted or whose name appears twice.
pub fn verify_table() -> StyleResult<()> {
    if operator_index().len() != OPERATORS.len() {
        let mut seen = std::collections::HashSet::new();
        for spec in OPERATORS {
            if !seen.insert(spec.name) {
                return Err(StyleError::internal(format!(
                    "Operator '{}' is declared more than once",
                    spec.name
                )));
            }
        }
    }

    OPERATORS.iter().try_for_each(OperatorSpec::check)
}

/// [`verify_table`], evaluated once.
pub fn table_check() -> &'static StyleResult<()> {
    static CHECK: OnceLock<StyleResult<()>> = OnceLock::new();
    CHECK.get_or_init(verify_table)
}

/// A few common operators, used in suggestions for unknown names.
pub fn common_operators() -> &'static [&'static str] {
    &["get", "==", "all", "any", "case", "match", "interpolate", "step"]
}
