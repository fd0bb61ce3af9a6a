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

//! Shared types for tools.

use serde::Deserialize;
use serde_json::Value as JsonValue;

/// Maximum input size in bytes for JSON text arguments (10 MB).
pub const MAX_INPUT_SIZE: usize = 10 * 1024 * 1024;

// ============ Argument Structures ============

#[derive(Debug, Deserialize)]
pub struct ValidateExpressionArgs {
    pub expression: JsonValue,
    #[serde(default)]
    pub context: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ValidateStyleArgs {
    pub style: JsonValue,
}

#[derive(Debug, Deserialize)]
pub struct OptimizeStyleArgs {
    pub style: JsonValue,
    /// Pass names in execution order; omitted or empty means every pass.
    #[serde(default)]
    pub passes: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct GeoJsonArgs {
    pub geojson: JsonValue,
}
