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

//! Declarative macros for JSON schema generation.
//!
//! Input schemas use identifier keys (`tool_schema!`); output schemas use
//! string-literal keys (`output_schema!`) because result fields are
//! camelCase and include names such as `type`.
//!
//! # Examples
//!
//! ```text
//! let input = tool_schema! {
//!     required: ["style"],
//!     properties: {
//!         style: document_arg!("Mapbox GL style document"),
//!         passes: pass_list_arg!()
//!     }
//! };
//!
//! let output = output_schema! {
//!     required: ["valid", "errors"],
//!     properties: {
//!         "valid": schema_type!("boolean", "Whether no errors were found"),
//!         "errors": schema_type!("array", "Error diagnostics")
//!     }
//! };
//! ```

/// Generate a JSON schema object with type "string" and description.
#[macro_export]
macro_rules! schema_string {
    ($description:expr) => {
        serde_json::json!({
            "type": "string",
            "description": $description
        })
    };
}

/// Generate a schema fragment of a single JSON type.
///
/// # Usage
/// ```text
/// schema_type!("array", "Diagnostics")
/// schema_type!(["array", "null"], "Bounding box when known")
/// ```
#[macro_export]
macro_rules! schema_type {
    ([$($ty:expr),+ $(,)?], $description:expr) => {
        serde_json::json!({
            "type": [$($ty),+],
            "description": $description
        })
    };
    ($ty:expr, $description:expr) => {
        serde_json::json!({
            "type": $ty,
            "description": $description
        })
    };
}

/// Generate a JSON schema object with string enum constraints.
#[macro_export]
macro_rules! schema_enum {
    ([$($variant:expr),+ $(,)?], $description:expr) => {
        serde_json::json!({
            "type": "string",
            "enum": [$($variant),+],
            "description": $description
        })
    };
    ([$($variant:expr),+ $(,)?], $description:expr, default: $default:expr) => {
        serde_json::json!({
            "type": "string",
            "enum": [$($variant),+],
            "description": $description,
            "default": $default
        })
    };
}

/// Generate a JSON schema object with string array type, optionally
/// restricted to an enum.
#[macro_export]
macro_rules! schema_string_array {
    ($description:expr) => {
        serde_json::json!({
            "type": "array",
            "items": { "type": "string" },
            "description": $description
        })
    };
    ($description:expr, items: [$($variant:expr),+ $(,)?]) => {
        serde_json::json!({
            "type": "array",
            "items": {
                "type": "string",
                "enum": [$($variant),+]
            },
            "description": $description
        })
    };
}

/// Generate a complete input schema with properties and required fields.
#[macro_export]
macro_rules! tool_schema {
    (
        required: [$($req:expr),* $(,)?],
        properties: {
            $($field:ident: $schema:expr),+ $(,)?
        }
    ) => {
        serde_json::json!({
            "type": "object",
            "properties": {
                $(stringify!($field): $schema),+
            },
            "required": [$($req),*]
        })
    };
}

/// Generate a complete output schema keyed by string literals.
#[macro_export]
macro_rules! output_schema {
    (
        required: [$($req:expr),* $(,)?],
        properties: {
            $($field:literal: $schema:expr),+ $(,)?
        }
    ) => {
        serde_json::json!({
            "type": "object",
            "properties": {
                $($field: $schema),+
            },
            "required": [$($req),*]
        })
    };
}

/// Schema for a JSON document argument: either JSON text or an object.
#[macro_export]
macro_rules! document_arg {
    ($description:expr) => {
        serde_json::json!({
            "type": ["string", "object"],
            "description": $description
        })
    };
}

/// Schema for an expression argument: any JSON value, or JSON text.
#[macro_export]
macro_rules! expression_arg {
    () => {
        serde_json::json!({
            "description": "Expression as JSON (array, literal or object) or as JSON text"
        })
    };
}

/// Schema for the expression context argument.
#[macro_export]
macro_rules! context_arg {
    () => {
        $crate::schema_enum!(
            ["style", "filter", "layout", "paint"],
            "Where the expression is used; filters are expected to return a boolean"
        )
    };
}

/// Schema for the optimization pass list argument.
#[macro_export]
macro_rules! pass_list_arg {
    () => {
        $crate::schema_string_array!(
            "Passes to run, in order (all passes in default order when omitted)",
            items: [
                "remove-unused-sources",
                "remove-duplicate-layers",
                "simplify-expressions",
                "remove-empty-layers",
                "consolidate-filters"
            ]
        )
    };
}

/// Output schema shared by the two diagnostic-report tools.
#[macro_export]
macro_rules! diagnostics_output {
    ($extra:literal: $extra_schema:expr) => {
        $crate::output_schema! {
            required: ["valid", "errors", "warnings", "info", $extra],
            properties: {
                "valid": $crate::schema_type!("boolean", "True when there are no error diagnostics"),
                "errors": $crate::schema_type!("array", "Error diagnostics"),
                "warnings": $crate::schema_type!("array", "Warning diagnostics"),
                "info": $crate::schema_type!("array", "Informational diagnostics"),
                $extra: $extra_schema
            }
        }
    };
}
