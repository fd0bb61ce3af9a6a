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

//! Canonical fixtures, by category:
//!
//! - **styles**: valid style documents
//! - **expressions**: valid and invalid expressions
//! - **geojson**: geometries, features and collections
//! - **errors**: invalid styles and malformed JSON text

pub mod errors;
mod expressions;
mod geojson;
mod styles;

pub use expressions::*;
pub use geojson::*;
pub use styles::*;

use crate::FixtureList;

/// Returns all valid style fixtures for iteration.
pub fn all_styles() -> FixtureList {
    vec![
        ("minimal_style", minimal_style),
        ("streets_style", streets_style),
        ("geojson_style", geojson_style),
        ("optimizable_style", optimizable_style),
    ]
}

/// Returns all GeoJSON fixtures that have at least one position.
pub fn all_geojson() -> FixtureList {
    vec![
        ("point", point),
        ("line_string", line_string),
        ("polygon", polygon),
        ("multi_polygon", multi_polygon),
        ("geometry_collection", geometry_collection),
        ("feature", feature),
        ("feature_collection", feature_collection),
    ]
}
