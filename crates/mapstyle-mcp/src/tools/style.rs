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

//! Style validation and optimization tools.

use crate::error::{McpError, McpResult};
use crate::protocol::CallToolResult;
use crate::tools::helpers::{document_input, error_result, parse_args, structured_result};
use crate::tools::types::{OptimizeStyleArgs, ValidateStyleArgs};
use mapstyle_core::DiagnosticKind;
use mapstyle_lint::validate_style;
use mapstyle_optimize::{OptimizeConfig, Optimizer};
use serde_json::Value as JsonValue;

pub const VALIDATE_NAME: &str = "validate_style_tool";
pub const OPTIMIZE_NAME: &str = "optimize_style_tool";

pub fn validate_output_schema() -> JsonValue {
    diagnostics_output!("summary": schema_type!("object", "Version, layer and source counts, sprite and glyphs presence"))
}

pub fn optimize_output_schema() -> JsonValue {
    output_schema! {
        required: ["optimizedStyle", "optimizations", "summary"],
        properties: {
            "optimizedStyle": schema_type!("object", "The optimized style document"),
            "optimizations": schema_type!("array", "One record per pass: type, description, count"),
            "summary": schema_type!("object", "Size and layer/source counts before and after")
        }
    }
}

/// Execute validate_style_tool.
pub fn execute_validate_style(args: Option<JsonValue>) -> McpResult<CallToolResult> {
    let args: ValidateStyleArgs = parse_args(args)?;
    let result = validate_style(document_input(args.style)?);
    let parse_failed = result
        .errors
        .iter()
        .any(|d| d.kind() == &DiagnosticKind::InputParse);

    structured_result(VALIDATE_NAME, &validate_output_schema(), &result, parse_failed)
}

/// Execute optimize_style_tool.
pub fn execute_optimize_style(args: Option<JsonValue>) -> McpResult<CallToolResult> {
    let args: OptimizeStyleArgs = parse_args(args)?;
    let names = args.passes.unwrap_or_default();
    let config = OptimizeConfig::from_names(names.as_slice())
        .map_err(|e| McpError::InvalidArguments(e.message))?;

    match Optimizer::new(&config).run(document_input(args.style)?) {
        Ok(result) => structured_result(OPTIMIZE_NAME, &optimize_output_schema(), &result, false),
        Err(e) => error_result(&e.kind.to_string(), &e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(result: &CallToolResult) -> JsonValue {
        serde_json::from_str(result.first_text().unwrap()).unwrap()
    }

    #[test]
    fn test_validate_style_version() {
        let result = execute_validate_style(Some(json!({
            "style": {"version": 7, "sources": {}, "layers": []}
        })))
        .unwrap();
        assert!(!result.is_error());
        let body = body(&result);
        assert_eq!(body["valid"], false);
        assert_eq!(body["errors"][0]["path"], "version");
        assert!(result.structured_content.is_some());
    }

    #[test]
    fn test_validate_style_text_parse_error() {
        let result = execute_validate_style(Some(json!({"style": "{\"version\": 8"}))).unwrap();
        assert!(result.is_error());
        let body = body(&result);
        assert_eq!(body["errors"].as_array().unwrap().len(), 1);
        assert_eq!(body["errors"][0]["code"], "input-parse");
    }

    #[test]
    fn test_optimize_style() {
        let result = execute_optimize_style(Some(json!({
            "style": {
                "version": 8,
                "sources": {"a": {"type": "geojson", "data": {}}, "b": {"type": "geojson", "data": {}}},
                "layers": [{"id": "l", "type": "fill", "source": "a", "paint": {"fill-color": "#000"}}]
            }
        })))
        .unwrap();
        assert!(!result.is_error());
        let body = body(&result);
        assert!(body["optimizedStyle"]["sources"].get("b").is_none());
        assert_eq!(body["optimizations"][0]["type"], "remove-unused-sources");
        assert_eq!(body["optimizations"][0]["count"], 1);
        assert_eq!(body["summary"]["optimizedSources"], 1);
    }

    #[test]
    fn test_optimize_selected_passes() {
        let result = execute_optimize_style(Some(json!({
            "style": {"version": 8, "sources": {}, "layers": []},
            "passes": ["remove-empty-layers"]
        })))
        .unwrap();
        let body = body(&result);
        assert_eq!(body["optimizations"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_optimize_unknown_pass() {
        let err = execute_optimize_style(Some(json!({
            "style": {"version": 8, "sources": {}, "layers": []},
            "passes": ["minify"]
        })))
        .unwrap_err();
        match err {
            McpError::InvalidArguments(msg) => assert!(msg.contains("minify")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_optimize_parse_error() {
        let result = execute_optimize_style(Some(json!({"style": "not json"}))).unwrap();
        assert!(result.is_error());
        assert_eq!(body(&result)["error"]["kind"], "InputParseError");
    }

    #[test]
    fn test_optimize_misshaped_layer_passes_through() {
        let style = json!({"version": 8, "sources": {}, "layers": [{"id": 3, "type": "fill"}]});
        let result = execute_optimize_style(Some(json!({"style": style}))).unwrap();
        assert!(!result.is_error());
        let data = body(&result);
        assert_eq!(data["optimizedStyle"]["layers"], json!([]));
        assert_eq!(data["optimizations"][3]["count"], 1);
    }
}
