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

//! Helper functions shared across tools.

use crate::error::{McpError, McpResult};
use crate::protocol::CallToolResult;
use crate::tools::types::MAX_INPUT_SIZE;
use mapstyle_core::JsonInput;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tracing::warn;

/// Parse JSON arguments into a typed structure.
pub fn parse_args<T: for<'de> Deserialize<'de>>(args: Option<JsonValue>) -> McpResult<T> {
    let args = args.unwrap_or(JsonValue::Object(serde_json::Map::new()));
    serde_json::from_value(args).map_err(|e| McpError::InvalidArguments(e.to_string()))
}

/// Validate input size to prevent memory exhaustion.
pub fn validate_input_size(input: &str, max_size: usize) -> McpResult<()> {
    if input.len() > max_size {
        return Err(McpError::InvalidRequest(format!(
            "Input size exceeds maximum: {} bytes (max: {} bytes)",
            input.len(),
            max_size
        )));
    }
    Ok(())
}

/// Turn a document argument into engine input.
///
/// Strings are JSON text, size-checked here and parsed once by the engine;
/// anything else is an already-parsed document.
pub fn document_input(arg: JsonValue) -> McpResult<JsonInput> {
    match arg {
        JsonValue::String(text) => {
            validate_input_size(&text, MAX_INPUT_SIZE)?;
            Ok(JsonInput::Text(text))
        }
        other => Ok(JsonInput::Value(other)),
    }
}

/// Check `data` against an output schema: an object carrying every
/// `required` key, each with the JSON type its property declares.
pub fn check_output(schema: &JsonValue, data: &JsonValue) -> Result<(), String> {
    let Some(obj) = data.as_object() else {
        return Err(format!("expected an object, got {}", json_type(data)));
    };
    let required = schema["required"].as_array().map(Vec::as_slice).unwrap_or(&[]);
    for key in required.iter().filter_map(JsonValue::as_str) {
        let Some(value) = obj.get(key) else {
            return Err(format!("missing required field '{}'", key));
        };
        let declared = &schema["properties"][key]["type"];
        if !type_matches(declared, value) {
            return Err(format!(
                "field '{}' should be {}, got {}",
                key,
                declared,
                json_type(value)
            ));
        }
    }
    Ok(())
}

fn json_type(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(n) if n.is_f64() => "number",
        JsonValue::Number(_) => "integer",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

fn type_matches(declared: &JsonValue, value: &JsonValue) -> bool {
    let single = |ty: &str| {
        let actual = json_type(value);
        ty == actual || (ty == "number" && actual == "integer")
    };
    match declared {
        JsonValue::Null => true,
        JsonValue::String(ty) => single(ty),
        JsonValue::Array(types) => types.iter().filter_map(JsonValue::as_str).any(single),
        _ => false,
    }
}

/// Serialize engine output and wrap it as a tool result.
///
/// When the data matches `schema` it is attached as structured content as
/// well as text. Otherwise a warning is logged and only the raw text is
/// returned.
pub fn structured_result<T: Serialize>(
    tool: &str,
    schema: &JsonValue,
    data: &T,
    is_error: bool,
) -> McpResult<CallToolResult> {
    let data = serde_json::to_value(data)?;
    let text = serde_json::to_string_pretty(&data)?;
    let mut result = CallToolResult::text(text, is_error);
    match check_output(schema, &data) {
        Ok(()) => result.structured_content = Some(data),
        Err(reason) => warn!(
            "Output schema validation failed for {}: {}; returning raw data",
            tool, reason
        ),
    }
    Ok(result)
}

/// Error result for engine failures that produce no report.
pub fn error_result(category: &str, message: impl std::fmt::Display) -> McpResult<CallToolResult> {
    let body = json!({"error": {"kind": category, "message": message.to_string()}});
    Ok(CallToolResult::text(serde_json::to_string_pretty(&body)?, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_args_valid() {
        #[derive(Debug, serde::Deserialize, PartialEq)]
        struct TestArgs {
            name: String,
            count: i32,
        }

        let parsed: TestArgs = parse_args(Some(json!({"name": "test", "count": 42}))).unwrap();
        assert_eq!(parsed.name, "test");
        assert_eq!(parsed.count, 42);
    }

    #[test]
    fn test_parse_args_missing_required() {
        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct TestArgs {
            required_field: String,
        }

        let result: McpResult<TestArgs> = parse_args(Some(json!({})));
        assert!(matches!(result, Err(McpError::InvalidArguments(_))));
    }

    #[test]
    fn test_parse_args_none() {
        #[derive(Debug, serde::Deserialize, Default)]
        struct TestArgs {
            #[serde(default)]
            optional: String,
        }

        let parsed: TestArgs = parse_args(None).unwrap();
        assert_eq!(parsed.optional, "");
    }

    #[test]
    fn test_validate_input_size() {
        assert!(validate_input_size("small input", 1024).is_ok());
        let input = "x".repeat(1000);
        assert!(matches!(
            validate_input_size(&input, 100),
            Err(McpError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_document_input() {
        assert_eq!(
            document_input(json!("{\"a\":1}")).unwrap(),
            JsonInput::Text("{\"a\":1}".into())
        );
        assert_eq!(
            document_input(json!({"a": 1})).unwrap(),
            JsonInput::Value(json!({"a": 1}))
        );
    }

    #[test]
    fn test_check_output() {
        let schema = json!({
            "type": "object",
            "properties": {
                "valid": {"type": "boolean"},
                "size": {"type": "number"},
                "bbox": {"type": ["array", "null"]}
            },
            "required": ["valid", "size", "bbox"]
        });
        assert!(check_output(&schema, &json!({"valid": true, "size": 3, "bbox": null})).is_ok());
        assert!(check_output(&schema, &json!({"valid": true, "size": 3.5, "bbox": [1]})).is_ok());

        let err = check_output(&schema, &json!({"valid": true, "size": 1})).unwrap_err();
        assert!(err.contains("bbox"));
        let err = check_output(&schema, &json!({"valid": "yes", "size": 1, "bbox": null})).unwrap_err();
        assert!(err.contains("valid"));
        assert!(check_output(&schema, &json!([1, 2])).is_err());
    }

    #[test]
    fn test_structured_result_fallback() {
        let schema = json!({"type": "object", "properties": {"x": {"type": "string"}}, "required": ["x"]});

        let ok = structured_result("t", &schema, &json!({"x": "y"}), false).unwrap();
        assert_eq!(ok.structured_content, Some(json!({"x": "y"})));

        let fallback = structured_result("t", &schema, &json!({"x": 1}), false).unwrap();
        assert!(fallback.structured_content.is_none());
        let text: JsonValue = serde_json::from_str(fallback.first_text().unwrap()).unwrap();
        assert_eq!(text, json!({"x": 1}));
        assert!(!fallback.is_error());
    }

    #[test]
    fn test_error_result() {
        let result = error_result("InputParseError", "bad").unwrap();
        assert!(result.is_error());
        let body: JsonValue = serde_json::from_str(result.first_text().unwrap()).unwrap();
        assert_eq!(body["error"]["kind"], "InputParseError");
        assert_eq!(body["error"]["message"], "bad");
    }
}
