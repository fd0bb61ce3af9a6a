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

//! GeoJSON fixtures.

use serde_json::{json, Value};

pub fn point() -> Value {
    json!({"type": "Point", "coordinates": [-122.4194, 37.7749]})
}

pub fn line_string() -> Value {
    json!({"type": "LineString", "coordinates": [[-122.5, 37.7], [-122.3, 37.9], [-122.4, 37.8]]})
}

pub fn polygon() -> Value {
    json!({
        "type": "Polygon",
        "coordinates": [[[0.0, 0.0], [4.0, 0.0], [4.0, 3.0], [0.0, 3.0], [0.0, 0.0]]]
    })
}

pub fn multi_polygon() -> Value {
    json!({
        "type": "MultiPolygon",
        "coordinates": [
            [[[0, 0], [1, 0], [1, 1], [0, 0]]],
            [[[10, 10], [12, 10], [12, 12], [10, 10]]]
        ]
    })
}

pub fn geometry_collection() -> Value {
    json!({
        "type": "GeometryCollection",
        "geometries": [
            {"type": "Point", "coordinates": [5, -5]},
            {"type": "MultiPoint", "coordinates": [[-5, 5], [2, 2]]}
        ]
    })
}

pub fn feature() -> Value {
    json!({
        "type": "Feature",
        "properties": {"name": "Ferry Building"},
        "geometry": {"type": "Point", "coordinates": [-122.3937, 37.7955]}
    })
}

/// Two points at (0, 0) and (10, 10).
pub fn feature_collection() -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "properties": {}, "geometry": {"type": "Point", "coordinates": [0, 0]}},
            {"type": "Feature", "properties": {}, "geometry": {"type": "Point", "coordinates": [10, 10]}}
        ]
    })
}

pub fn empty_feature_collection() -> Value {
    json!({"type": "FeatureCollection", "features": []})
}
