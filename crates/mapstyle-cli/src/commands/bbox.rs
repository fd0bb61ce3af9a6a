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

//! Bbox command - GeoJSON extent and summary

use super::{read_file, to_pretty_json};
use crate::error::CliError;
use mapstyle_geojson::{analyze, bounding_box};

/// Print the bounding box of a GeoJSON file as `[minX, minY, maxX, maxY]`,
/// or the full summary as pretty JSON with `summary`.
///
/// # Errors
///
/// Returns [`CliError::InvalidDocument`] for unsupported types, invalid
/// geometries and (without `summary`) documents with no coordinates.
pub fn bbox(file: &str, summary: bool) -> Result<(), CliError> {
    let content = read_file(file)?;

    if summary {
        let summary = analyze(content)?;
        println!("{}", to_pretty_json(&summary)?);
    } else {
        let bbox = bounding_box(content)?;
        println!("{}", to_pretty_json(&bbox)?);
    }
    Ok(())
}
