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

//! Invalid inputs for error-handling tests.

use serde_json::{json, Value};

/// Malformed JSON text samples.
pub fn malformed_json_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("empty", ""),
        ("truncated_object", "{\"version\": 8,"),
        ("truncated_array", "[\"get\", "),
        ("bare_word", "style"),
        ("trailing_comma", "{\"a\": 1,}"),
        ("single_quotes", "{'version': 8}"),
    ]
}

/// Invalid styles with the rule expected to flag them.
pub fn invalid_styles() -> Vec<(&'static str, Value, &'static str)> {
    vec![
        (
            "wrong_version",
            json!({"version": 7, "sources": {}, "layers": [{"id": "bg", "type": "background"}]}),
            "version",
        ),
        ("missing_sources", json!({"version": 8, "layers": []}), "required-fields"),
        (
            "duplicate_ids",
            json!({
                "version": 8,
                "sources": {},
                "layers": [
                    {"id": "bg", "type": "background"},
                    {"id": "bg", "type": "background"}
                ]
            }),
            "duplicate-layer-id",
        ),
        (
            "dangling_source",
            json!({
                "version": 8,
                "sources": {},
                "layers": [{"id": "x", "type": "fill", "source": "missing", "paint": {"fill-color": "#000"}}]
            }),
            "source-reference",
        ),
        (
            "vector_without_source_layer",
            json!({
                "version": 8,
                "sources": {"v": {"type": "vector", "url": "mapbox://x"}},
                "layers": [{"id": "x", "type": "fill", "source": "v", "paint": {"fill-color": "#000"}}]
            }),
            "source-layer",
        ),
        (
            "geojson_with_source_layer",
            json!({
                "version": 8,
                "sources": {"g": {"type": "geojson", "data": {"type": "FeatureCollection", "features": []}}},
                "layers": [{"id": "x", "type": "fill", "source": "g", "source-layer": "y", "paint": {"fill-color": "#000"}}]
            }),
            "source-layer",
        ),
        (
            "bad_filter",
            json!({
                "version": 8,
                "sources": {},
                "layers": [{"id": "bg", "type": "background", "filter": ["bogus_op"]}]
            }),
            "layer-expressions",
        ),
    ]
}

/// GeoJSON inputs with no usable position, or an unsupported type.
pub fn invalid_geojson() -> Vec<(&'static str, Value)> {
    vec![
        ("unknown_type", json!({"type": "Circle", "coordinates": [0, 0]})),
        ("missing_type", json!({"coordinates": [0, 0]})),
        ("empty_collection", json!({"type": "FeatureCollection", "features": []})),
        ("null_geometry", json!({"type": "Feature", "geometry": null})),
        ("empty_line", json!({"type": "LineString", "coordinates": []})),
    ]
}
