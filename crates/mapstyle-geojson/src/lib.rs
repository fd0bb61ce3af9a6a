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

//! GeoJSON analysis
//!
//! Decodes GeoJSON into a typed tree and walks every position to compute a
//! bounding box or a full summary.
//!
//! ```rust
//! use mapstyle_geojson::bounding_box;
//! use serde_json::json;
//!
//! let bbox = bounding_box(json!({"type": "Point", "coordinates": [-122.4194, 37.7749]})).unwrap();
//! assert_eq!(bbox.to_array(), [-122.4194, 37.7749, -122.4194, 37.7749]);
//! ```
//!
//! An empty document is an error, never an infinite box:
//!
//! ```rust
//! use mapstyle_geojson::{bounding_box, GeoJsonError};
//! use serde_json::json;
//!
//! let err = bounding_box(json!({"type": "FeatureCollection", "features": []})).unwrap_err();
//! assert_eq!(err, GeoJsonError::NoCoordinates);
//! ```

mod bbox;
mod error;
mod geometry;
mod summary;

pub use bbox::{bounding_box, Accumulator, BoundingBox};
pub use error::{GeoJsonError, GeoJsonResult};
pub use geometry::{Feature, GeoJson, Geometry, Position};
pub use summary::{analyze, summarize, GeoJsonSummary, LATITUDE_RANGE, LONGITUDE_RANGE};
