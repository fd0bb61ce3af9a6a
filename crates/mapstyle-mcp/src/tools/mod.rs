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

//! Map style tools for AI agents.
//!
//! Available tools:
//! - `validate_expression_tool`: Validate a style expression against the operator grammar
//! - `validate_style_tool`: Validate a style document's structure and expressions
//! - `optimize_style_tool`: Run optimization passes over a style document
//! - `bounding_box_tool`: Compute the bounding box of a GeoJSON document
//! - `geojson_summary_tool`: Summarize a GeoJSON document

#[macro_use]
mod schema_macros;
mod expression;
mod geojson;
mod helpers;
mod style;
mod types;

pub use expression::execute_validate_expression;
pub use geojson::{execute_bounding_box, execute_geojson_summary};
pub use helpers::{check_output, structured_result};
pub use style::{execute_optimize_style, execute_validate_style};
pub use types::MAX_INPUT_SIZE;

use crate::error::{McpError, McpResult};
use crate::protocol::{CallToolResult, Tool};
use serde_json::Value as JsonValue;
use tracing::debug;

/// Get all available tools.
pub fn get_tools() -> Vec<Tool> {
    vec![
        Tool {
            name: expression::NAME.to_string(),
            description: "Validate a Mapbox GL style expression. Checks operator names against the expression grammar, argument counts and nesting depth, and reports the expression's return type.".to_string(),
            input_schema: tool_schema! {
                required: ["expression"],
                properties: {
                    expression: expression_arg!(),
                    context: context_arg!()
                }
            },
            output_schema: expression::output_schema(),
        },
        Tool {
            name: style::VALIDATE_NAME.to_string(),
            description: "Validate a Mapbox GL style document: version, sources, layer ids, source references, source-layer pairing, zoom ranges and every filter and property expression.".to_string(),
            input_schema: tool_schema! {
                required: ["style"],
                properties: {
                    style: document_arg!("Style document as JSON text or object")
                }
            },
            output_schema: style::validate_output_schema(),
        },
        Tool {
            name: style::OPTIMIZE_NAME.to_string(),
            description: "Optimize a Mapbox GL style document: remove unused sources, duplicate and empty layers, fold constant boolean filters and report layers sharing a filter.".to_string(),
            input_schema: tool_schema! {
                required: ["style"],
                properties: {
                    style: document_arg!("Style document as JSON text or object"),
                    passes: pass_list_arg!()
                }
            },
            output_schema: style::optimize_output_schema(),
        },
        Tool {
            name: geojson::BBOX_NAME.to_string(),
            description: "Compute the bounding box [minX, minY, maxX, maxY] and center of a GeoJSON geometry, feature or feature collection.".to_string(),
            input_schema: tool_schema! {
                required: ["geojson"],
                properties: {
                    geojson: document_arg!("GeoJSON as JSON text or object")
                }
            },
            output_schema: geojson::bbox_output_schema(),
        },
        Tool {
            name: geojson::SUMMARY_NAME.to_string(),
            description: "Summarize a GeoJSON document: feature and position counts, geometry types, bounding box, center and coordinates outside WGS84 bounds.".to_string(),
            input_schema: tool_schema! {
                required: ["geojson"],
                properties: {
                    geojson: document_arg!("GeoJSON as JSON text or object")
                }
            },
            output_schema: geojson::summary_output_schema(),
        },
    ]
}

/// Execute a tool by name.
pub fn execute_tool(name: &str, arguments: Option<JsonValue>) -> McpResult<CallToolResult> {
    debug!("Executing tool {}", name);
    match name {
        expression::NAME => execute_validate_expression(arguments),
        style::VALIDATE_NAME => execute_validate_style(arguments),
        style::OPTIMIZE_NAME => execute_optimize_style(arguments),
        geojson::BBOX_NAME => execute_bounding_box(arguments),
        geojson::SUMMARY_NAME => execute_geojson_summary(arguments),
        _ => Err(McpError::ToolNotFound(name.to_string())),
    }
}
