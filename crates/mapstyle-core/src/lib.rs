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

//! Core types for map style and expression analysis.
//!
//! This crate provides the pieces every other mapstyle crate builds on:
//!
//! - [`Diagnostic`] and [`Severity`] for reporting issues as data
//! - [`JsonInput`] for accepting either JSON text or a parsed value
//! - The [`expression`] module: operator grammar table, [`Expression`] tree
//!   and [`validate_expression`]
//! - The [`style`] module: the typed [`StyleDocument`] model, which keeps
//!   unrecognised keys so documents survive a decode/encode round trip
//!
//! # Example
//!
//! ```rust
//! use mapstyle_core::{validate_expression, Severity};
//!
//! let result = validate_expression(r#"["rgba", 1, 2, 3]"#, None);
//! assert!(!result.valid);
//! assert_eq!(result.errors[0].severity(), Severity::Error);
//! ```

mod diagnostic;
mod error;
pub mod expression;
mod input;
mod limits;
pub mod style;

pub use diagnostic::{partition_by_severity, Diagnostic, DiagnosticKind, Severity};
pub use error::{StyleError, StyleErrorKind, StyleResult};
pub use expression::{
    validate_expression, validate_expression_tree, validate_expression_with_limits, Expression,
    ExpressionContext, ExpressionMetadata, ValidationResult, ValueType,
};
pub use input::{parse_json_text, JsonInput};
pub use limits::{Limits, DEFAULT_MAX_EXPRESSION_DEPTH, DEFAULT_MAX_RECURSION_DEPTH};
pub use style::{LayerKind, LayerSpec, PropertyMap, SourceKind, SourceSpec, StyleDocument};
