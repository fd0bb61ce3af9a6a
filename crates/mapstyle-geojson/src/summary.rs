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

//! Whole-document GeoJSON summary.

use crate::bbox::{Accumulator, BoundingBox};
use crate::error::GeoJsonResult;
use crate::geometry::GeoJson;
use mapstyle_core::JsonInput;
use serde::Serialize;
use std::collections::BTreeMap;

/// Valid longitude range in degrees.
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);
/// Valid latitude range in degrees.
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);

/// Counts, extent and coordinate sanity for one GeoJSON document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoJsonSummary {
    /// Top-level `type`.
    #[serde(rename = "type")]
    pub root_type: &'static str,
    /// `None` when the document has no positions.
    pub bbox: Option<BoundingBox>,
    pub center: Option<[f64; 2]>,
    pub feature_count: usize,
    /// Geometry type name to occurrences, nested collections included.
    pub geometry_counts: BTreeMap<&'static str, usize>,
    pub position_count: usize,
    /// Paths of positions outside the WGS84 longitude/latitude ranges.
    pub out_of_range: Vec<String>,
}

impl GeoJsonSummary {
    /// Whether every position lies within WGS84 bounds.
    pub fn coordinates_in_range(&self) -> bool {
        self.out_of_range.is_empty()
    }
}

fn in_range(value: f64, (lo, hi): (f64, f64)) -> bool {
    (lo..=hi).contains(&value)
}

/// Summarize a parsed document.
pub fn summarize(doc: &GeoJson) -> GeoJsonSummary {
    let mut geometry_counts = BTreeMap::new();
    for (_, geometry) in doc.geometries() {
        geometry.visit_geometries(&mut |g| {
            *geometry_counts.entry(g.type_name()).or_insert(0) += 1;
        });
    }

    let mut acc = Accumulator::default();
    let mut out_of_range = Vec::new();
    doc.visit_positions(&mut |path, p| {
        acc.add(p);
        if let [x, y, ..] = *p {
            if !in_range(x, LONGITUDE_RANGE) || !in_range(y, LATITUDE_RANGE) {
                out_of_range.push(path.to_string());
            }
        }
    });

    let bbox = acc.finish();
    GeoJsonSummary {
        root_type: doc.type_name(),
        bbox,
        center: bbox.map(|b| b.center()),
        feature_count: doc.feature_count(),
        geometry_counts,
        position_count: acc.visited(),
        out_of_range,
    }
}

/// Parse and summarize a GeoJSON document given as text or a value.
///
/// Unlike [`bounding_box`](crate::bounding_box), a document without positions
/// is not an error; `bbox` and `center` are simply absent.
pub fn analyze(input: impl Into<JsonInput>) -> GeoJsonResult<GeoJsonSummary> {
    let value = input.into().into_value()?;
    Ok(summarize(&GeoJson::from_value(&value)?))
}
