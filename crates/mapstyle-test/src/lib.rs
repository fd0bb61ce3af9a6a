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

//! Shared test fixtures for mapstyle crates.
//!
//! Fixtures are plain [`serde_json::Value`]s so they can be fed to any entry
//! point, as values or (via [`as_text`]) as JSON text.
//!
//! # Quick Start
//!
//! ```rust
//! use mapstyle_test::fixtures;
//!
//! let style = fixtures::streets_style();        // Valid multi-source style
//! let broken = fixtures::errors::invalid_styles(); // (name, style) pairs
//! let point = fixtures::point();                 // GeoJSON Point
//! let text = mapstyle_test::as_text(&style);
//! assert!(text.starts_with('{'));
//! ```

pub mod fixtures;

use serde_json::Value;

/// Type alias for a list of fixture functions (name, generator).
pub type FixtureList = Vec<(&'static str, fn() -> Value)>;

/// Serialize a fixture to compact JSON text.
pub fn as_text(value: &Value) -> String {
    value.to_string()
}

/// Build an expression nested `depth` levels below the root.
///
/// The innermost node is `["get", "x"]`, wrapped in `to-number` calls.
pub fn nested_expression(depth: usize) -> Value {
    let mut expr = serde_json::json!(["get", "x"]);
    for _ in 0..depth {
        expr = serde_json::json!(["to-number", expr]);
    }
    expr
}
