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

//! Input handling shared by every entry point.
//!
//! All operations accept either raw JSON text or an already-parsed
//! [`serde_json::Value`]. Text is parsed exactly once, here; a parse failure is
//! reported as an [`StyleErrorKind::InputParse`](crate::StyleErrorKind) error and
//! no further processing happens.

use crate::error::{StyleError, StyleResult};
use serde_json::Value;

/// A JSON document supplied either as text or as a parsed value.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonInput {
    /// Raw JSON text, parsed on [`JsonInput::into_value`].
    Text(String),
    /// Already-parsed JSON.
    Value(Value),
}

impl JsonInput {
    /// Resolve the input to a JSON value, parsing text if needed.
    pub fn into_value(self) -> StyleResult<Value> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Text(text) => parse_json_text(&text),
        }
    }

    /// Size of the input in bytes when it was supplied as text.
    pub fn text_len(&self) -> Option<usize> {
        match self {
            Self::Text(text) => Some(text.len()),
            Self::Value(_) => None,
        }
    }
}

impl From<Value> for JsonInput {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<&Value> for JsonInput {
    fn from(value: &Value) -> Self {
        Self::Value(value.clone())
    }
}

impl From<String> for JsonInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for JsonInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Parse JSON text into a value, mapping failures to `InputParse`.
pub fn parse_json_text(text: &str) -> StyleResult<Value> {
    serde_json::from_str(text)
        .map_err(|e| StyleError::input_parse(format!("Invalid JSON input: {}", e)))
}
