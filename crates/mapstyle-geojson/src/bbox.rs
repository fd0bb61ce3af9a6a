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

//! Bounding box accumulation.

use crate::error::{GeoJsonError, GeoJsonResult};
use crate::geometry::GeoJson;
use mapstyle_core::JsonInput;
use serde::{Serialize, Serializer};

/// An axis-aligned box in longitude/latitude order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// `[min_x, min_y, max_x, max_y]`
    pub fn to_array(&self) -> [f64; 4] {
        [self.min_x, self.min_y, self.max_x, self.max_y]
    }

    /// Midpoint as `[lng, lat]`.
    pub fn center(&self) -> [f64; 2] {
        [
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        ]
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

impl Serialize for BoundingBox {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_array().serialize(serializer)
    }
}

/// Running min/max over visited positions.
///
/// Starts at the sentinel extremes; [`Accumulator::finish`] refuses to turn
/// an untouched accumulator into a box.
#[derive(Debug, Clone, Copy)]
pub struct Accumulator {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
    visited: usize,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
            visited: 0,
        }
    }
}

impl Accumulator {
    /// Extend with one position; ordinates past the second are ignored.
    pub fn add(&mut self, position: &[f64]) {
        if let [x, y, ..] = *position {
            self.min_x = self.min_x.min(x);
            self.min_y = self.min_y.min(y);
            self.max_x = self.max_x.max(x);
            self.max_y = self.max_y.max(y);
            self.visited += 1;
        }
    }

    /// Number of positions added.
    pub fn visited(&self) -> usize {
        self.visited
    }

    pub fn finish(&self) -> Option<BoundingBox> {
        (self.visited > 0).then_some(BoundingBox {
            min_x: self.min_x,
            min_y: self.min_y,
            max_x: self.max_x,
            max_y: self.max_y,
        })
    }
}

impl GeoJson {
    /// Bounding box of every position in the document, if there is any.
    pub fn bbox(&self) -> Option<BoundingBox> {
        let mut acc = Accumulator::default();
        self.visit_positions(&mut |_, p| acc.add(p));
        acc.finish()
    }
}

/// Compute the bounding box of a GeoJSON document given as text or a value.
///
/// Features with a `null` geometry contribute nothing. A document without a
/// single position is [`GeoJsonError::NoCoordinates`].
pub fn bounding_box(input: impl Into<JsonInput>) -> GeoJsonResult<BoundingBox> {
    let value = input.into().into_value()?;
    GeoJson::from_value(&value)?
        .bbox()
        .ok_or(GeoJsonError::NoCoordinates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_point_bbox() {
        let bbox = bounding_box(json!({"type": "Point", "coordinates": [-122.4194, 37.7749]})).unwrap();
        assert_eq!(bbox.to_array(), [-122.4194, 37.7749, -122.4194, 37.7749]);
        assert_eq!(bbox.width(), 0.0);
    }

    #[test]
    fn test_feature_collection_bbox() {
        let bbox = bounding_box(json!({
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "geometry": {"type": "Point", "coordinates": [0, 0]}},
                {"type": "Feature", "geometry": {"type": "Point", "coordinates": [10, 10]}}
            ]
        }))
        .unwrap();
        assert_eq!(bbox.to_array(), [0.0, 0.0, 10.0, 10.0]);
        assert_eq!(bbox.center(), [5.0, 5.0]);
    }

    #[test]
    fn test_empty_collection_is_error() {
        let err = bounding_box(json!({"type": "FeatureCollection", "features": []})).unwrap_err();
        assert_eq!(err, GeoJsonError::NoCoordinates);
    }

    #[test]
    fn test_null_geometry_skipped() {
        let bbox = bounding_box(json!({
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "geometry": null},
                {"type": "Feature", "geometry": {"type": "LineString", "coordinates": [[1, 2], [3, -4]]}}
            ]
        }))
        .unwrap();
        assert_eq!(bbox.to_array(), [1.0, -4.0, 3.0, 2.0]);
    }

    #[test]
    fn test_third_ordinate_ignored() {
        let bbox = bounding_box(json!({"type": "MultiPoint", "coordinates": [[0, 0, 100], [1, 1, -100]]}))
            .unwrap();
        assert_eq!(bbox.to_array(), [0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_text_input() {
        let bbox = bounding_box(r#"{"type":"Point","coordinates":[3,4]}"#).unwrap();
        assert_eq!(bbox.to_array(), [3.0, 4.0, 3.0, 4.0]);
        assert!(matches!(bounding_box("{oops"), Err(GeoJsonError::InputParse(_))));
    }

    #[test]
    fn test_serializes_as_array() {
        let bbox = BoundingBox {
            min_x: 1.0,
            min_y: 2.0,
            max_x: 3.0,
            max_y: 4.0,
        };
        assert_eq!(serde_json::to_value(bbox).unwrap(), json!([1.0, 2.0, 3.0, 4.0]));
    }

    #[test]
    fn test_accumulator_sentinel() {
        let acc = Accumulator::default();
        assert_eq!(acc.visited(), 0);
        assert!(acc.finish().is_none());
    }
}
