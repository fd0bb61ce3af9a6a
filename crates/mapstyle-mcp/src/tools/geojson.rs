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

//! GeoJSON analysis tools.

use crate::error::McpResult;
use crate::protocol::CallToolResult;
use crate::tools::helpers::{document_input, error_result, parse_args, structured_result};
use crate::tools::types::GeoJsonArgs;
use mapstyle_geojson::{analyze, bounding_box};
use serde_json::{json, Value as JsonValue};

pub const BBOX_NAME: &str = "bounding_box_tool";
pub const SUMMARY_NAME: &str = "geojson_summary_tool";

pub fn bbox_output_schema() -> JsonValue {
    output_schema! {
        required: ["bbox", "center"],
        properties: {
            "bbox": schema_type!("array", "[minX, minY, maxX, maxY]"),
            "center": schema_type!("array", "[lng, lat] midpoint of the box")
        }
    }
}

pub fn summary_output_schema() -> JsonValue {
    output_schema! {
        required: ["type", "featureCount", "geometryCounts", "positionCount", "outOfRange"],
        properties: {
            "type": schema_type!("string", "Top-level GeoJSON type"),
            "bbox": schema_type!(["array", "null"], "[minX, minY, maxX, maxY], null without positions"),
            "center": schema_type!(["array", "null"], "[lng, lat], null without positions"),
            "featureCount": schema_type!("integer", "Number of features"),
            "geometryCounts": schema_type!("object", "Occurrences per geometry type"),
            "positionCount": schema_type!("integer", "Number of positions visited"),
            "outOfRange": schema_type!("array", "Paths of positions outside WGS84 bounds")
        }
    }
}

/// Execute bounding_box_tool.
pub fn execute_bounding_box(args: Option<JsonValue>) -> McpResult<CallToolResult> {
    let args: GeoJsonArgs = parse_args(args)?;
    match bounding_box(document_input(args.geojson)?) {
        Ok(bbox) => {
            let data = json!({"bbox": bbox, "center": bbox.center()});
            structured_result(BBOX_NAME, &bbox_output_schema(), &data, false)
        }
        Err(e) => error_result(e.category(), &e),
    }
}

/// Execute geojson_summary_tool.
pub fn execute_geojson_summary(args: Option<JsonValue>) -> McpResult<CallToolResult> {
    let args: GeoJsonArgs = parse_args(args)?;
    match analyze(document_input(args.geojson)?) {
        Ok(summary) => structured_result(SUMMARY_NAME, &summary_output_schema(), &summary, false),
        Err(e) => error_result(e.category(), &e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(result: &CallToolResult) -> JsonValue {
        serde_json::from_str(result.first_text().unwrap()).unwrap()
    }

    #[test]
    fn test_bbox_point() {
        let result = execute_bounding_box(Some(json!({
            "geojson": {"type": "Point", "coordinates": [-122.4194, 37.7749]}
        })))
        .unwrap();
        assert!(!result.is_error());
        assert_eq!(body(&result)["bbox"], json!([-122.4194, 37.7749, -122.4194, 37.7749]));
        assert!(result.structured_content.is_some());
    }

    #[test]
    fn test_bbox_text_input() {
        let result = execute_bounding_box(Some(json!({
            "geojson": "{\"type\":\"MultiPoint\",\"coordinates\":[[0,0],[10,10]]}"
        })))
        .unwrap();
        assert_eq!(body(&result)["center"], json!([5.0, 5.0]));
    }

    #[test]
    fn test_bbox_empty_collection() {
        let result = execute_bounding_box(Some(json!({
            "geojson": {"type": "FeatureCollection", "features": []}
        })))
        .unwrap();
        assert!(result.is_error());
        let body = body(&result);
        assert_eq!(body["error"]["message"], "No valid coordinates found");
    }

    #[test]
    fn test_bbox_unsupported_type() {
        let result = execute_bounding_box(Some(json!({"geojson": {"type": "Circle"}}))).unwrap();
        assert!(result.is_error());
        assert!(body(&result)["error"]["message"].as_str().unwrap().contains("Circle"));
    }

    #[test]
    fn test_summary() {
        let result = execute_geojson_summary(Some(json!({
            "geojson": {
                "type": "FeatureCollection",
                "features": [
                    {"type": "Feature", "geometry": {"type": "Point", "coordinates": [19.937, 50.0619]}},
                    {"type": "Feature", "geometry": {"type": "Point", "coordinates": [999, 999]}}
                ]
            }
        })))
        .unwrap();
        assert!(!result.is_error());
        assert!(result.structured_content.is_some());
        let body = body(&result);
        assert_eq!(body["featureCount"], 2);
        assert_eq!(body["outOfRange"], json!(["features[1].geometry.coordinates"]));
    }

    #[test]
    fn test_summary_without_positions_is_not_error() {
        let result = execute_geojson_summary(Some(json!({
            "geojson": {"type": "FeatureCollection", "features": []}
        })))
        .unwrap();
        assert!(!result.is_error());
        assert!(body(&result)["bbox"].is_null());
        assert!(result.structured_content.is_some());
    }
}
