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

//! Expression validation tool.

use crate::error::{McpError, McpResult};
use crate::protocol::CallToolResult;
use crate::tools::helpers::{document_input, parse_args, structured_result};
use crate::tools::types::ValidateExpressionArgs;
use mapstyle_core::{validate_expression, DiagnosticKind, ExpressionContext};
use serde_json::Value as JsonValue;

pub const NAME: &str = "validate_expression_tool";

pub fn output_schema() -> JsonValue {
    diagnostics_output!("metadata": schema_type!("object", "Expression type, return type, depth and context"))
}

/// Execute validate_expression_tool.
pub fn execute_validate_expression(args: Option<JsonValue>) -> McpResult<CallToolResult> {
    let args: ValidateExpressionArgs = parse_args(args)?;
    let context = args
        .context
        .as_deref()
        .map(str::parse::<ExpressionContext>)
        .transpose()
        .map_err(|e| McpError::InvalidArguments(e.message))?;

    let result = validate_expression(document_input(args.expression)?, context);
    let parse_failed = result
        .errors
        .iter()
        .any(|d| d.kind() == &DiagnosticKind::InputParse);

    structured_result(NAME, &output_schema(), &result, parse_failed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(args: JsonValue) -> (CallToolResult, JsonValue) {
        let result = execute_validate_expression(Some(args)).unwrap();
        let body = serde_json::from_str(result.first_text().unwrap()).unwrap();
        (result, body)
    }

    #[test]
    fn test_valid_expression() {
        let (result, body) = run(json!({"expression": ["get", "name"]}));
        assert!(!result.is_error());
        assert_eq!(body["valid"], true);
        assert_eq!(body["metadata"]["expressionType"], "expression");
        assert!(result.structured_content.is_some());
    }

    #[test]
    fn test_unknown_operator() {
        let (result, body) = run(json!({"expression": ["bogus_op", 1]}));
        assert!(!result.is_error());
        assert_eq!(body["valid"], false);
        assert_eq!(body["errors"].as_array().unwrap().len(), 1);
        assert!(body["errors"][0]["message"].as_str().unwrap().contains("bogus_op"));
    }

    #[test]
    fn test_text_expression_and_parse_error() {
        let (_, body) = run(json!({"expression": "[\"zoom\"]"}));
        assert_eq!(body["valid"], true);

        let (result, body) = run(json!({"expression": "[\"zoom\""}));
        assert!(result.is_error());
        assert_eq!(body["errors"][0]["code"], "input-parse");
    }

    #[test]
    fn test_context() {
        let (_, body) = run(json!({"expression": ["to-number", "1"], "context": "filter"}));
        assert_eq!(body["metadata"]["context"], "filter");
        assert_eq!(body["warnings"].as_array().unwrap().len(), 1);

        let err = execute_validate_expression(Some(json!({"expression": 1, "context": "sky"})))
            .unwrap_err();
        assert!(matches!(err, McpError::InvalidArguments(_)));
    }

    #[test]
    fn test_missing_expression() {
        let err = execute_validate_expression(Some(json!({}))).unwrap_err();
        assert!(matches!(err, McpError::InvalidArguments(_)));
    }
}
