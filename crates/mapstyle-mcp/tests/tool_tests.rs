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

//! Integration tests for the tool adapter.

use mapstyle_mcp::{execute_tool, get_tools, CallToolParams, ListToolsResult, MAX_INPUT_SIZE};
use mapstyle_test::fixtures;
use serde_json::{json, Value};

fn body(text: Option<&str>) -> Value {
    serde_json::from_str(text.unwrap()).unwrap()
}

#[test]
fn test_valid_results_carry_structured_content() {
    let calls = [
        ("validate_expression_tool", json!({"expression": ["get", "name"]})),
        ("validate_style_tool", json!({"style": fixtures::streets_style()})),
        ("optimize_style_tool", json!({"style": fixtures::optimizable_style()})),
        ("bounding_box_tool", json!({"geojson": fixtures::feature_collection()})),
        ("geojson_summary_tool", json!({"geojson": fixtures::geometry_collection()})),
    ];
    for (name, args) in calls {
        let result = execute_tool(name, Some(args)).unwrap();
        assert!(!result.is_error(), "{}", name);
        let structured = result.structured_content.clone();
        assert!(structured.is_some(), "{}", name);
        assert_eq!(structured.unwrap(), body(result.first_text()), "{}", name);
    }
}

#[test]
fn test_output_matches_declared_schema() {
    let tools = get_tools();
    let schema = |name: &str| {
        tools
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.output_schema.clone())
            .unwrap()
    };
    let result = execute_tool(
        "optimize_style_tool",
        Some(json!({"style": fixtures::optimizable_style()})),
    )
    .unwrap();
    let data = result.structured_content.unwrap();
    assert!(mapstyle_mcp::tools::check_output(&schema("optimize_style_tool"), &data).is_ok());
}

#[test]
fn test_text_arguments_parsed_once() {
    let text = mapstyle_test::as_text(&fixtures::minimal_style());
    let result = execute_tool("validate_style_tool", Some(json!({"style": text}))).unwrap();
    assert_eq!(body(result.first_text())["valid"], true);
}

#[test]
fn test_malformed_text_is_single_parse_diagnostic() {
    for (name, text) in fixtures::errors::malformed_json_samples() {
        let result = execute_tool("validate_style_tool", Some(json!({"style": text}))).unwrap();
        assert!(result.is_error(), "{}", name);
        let errors = body(result.first_text())["errors"].clone();
        assert_eq!(errors.as_array().unwrap().len(), 1, "{}", name);
        assert_eq!(errors[0]["code"], "input-parse", "{}", name);
    }
}

#[test]
fn test_oversized_text_rejected() {
    let big = " ".repeat(MAX_INPUT_SIZE + 1);
    let err = execute_tool("bounding_box_tool", Some(json!({"geojson": big}))).unwrap_err();
    assert_eq!(err.code(), -32600);
}

#[test]
fn test_call_params_round_trip() {
    let params: CallToolParams = serde_json::from_value(json!({
        "name": "validate_expression_tool",
        "arguments": {"expression": ["zoom"]}
    }))
    .unwrap();
    let result = execute_tool(&params.name, params.arguments).unwrap();
    assert!(!result.is_error());
}

#[test]
fn test_list_tools_serialization() {
    let list = ListToolsResult { tools: get_tools() };
    let value = serde_json::to_value(&list).unwrap();
    let first = &value["tools"][0];
    assert!(first.get("inputSchema").is_some());
    assert!(first.get("outputSchema").is_some());
}
