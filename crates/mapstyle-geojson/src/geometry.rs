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

//! Typed GeoJSON tree.
//!
//! Decoding is strict about the members that carry coordinates and lenient
//! about everything else: `properties`, `id`, `bbox` and foreign members are
//! kept or ignored but never rejected. Decoding errors carry the JSON path of
//! the offending value.

use crate::error::{GeoJsonError, GeoJsonResult};
use serde_json::{Map, Value};

/// A single position: longitude, latitude and optional extra ordinates.
pub type Position = Vec<f64>;

/// A GeoJSON geometry object.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Position),
    MultiPoint(Vec<Position>),
    LineString(Vec<Position>),
    MultiLineString(Vec<Vec<Position>>),
    Polygon(Vec<Vec<Position>>),
    MultiPolygon(Vec<Vec<Vec<Position>>>),
    GeometryCollection(Vec<Geometry>),
}

/// A GeoJSON feature. A `null` or missing geometry decodes to `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub id: Option<Value>,
    pub geometry: Option<Geometry>,
    pub properties: Option<Map<String, Value>>,
}

/// Any top-level GeoJSON object.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoJson {
    Geometry(Geometry),
    Feature(Feature),
    FeatureCollection(Vec<Feature>),
}

impl Geometry {
    /// The GeoJSON `type` name.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Point(_) => "Point",
            Self::MultiPoint(_) => "MultiPoint",
            Self::LineString(_) => "LineString",
            Self::MultiLineString(_) => "MultiLineString",
            Self::Polygon(_) => "Polygon",
            Self::MultiPolygon(_) => "MultiPolygon",
            Self::GeometryCollection(_) => "GeometryCollection",
        }
    }

    /// Decode a geometry object found at `path`.
    pub fn from_value(value: &Value, path: &str) -> GeoJsonResult<Self> {
        let obj = as_object(value, path)?;
        let type_name = type_member(obj)?;
        if type_name == "GeometryCollection" {
            let geometries_path = join(path, "geometries");
            let items = obj
                .get("geometries")
                .and_then(Value::as_array)
                .ok_or_else(|| GeoJsonError::invalid(&geometries_path, "expected an array"))?;
            let geometries = items
                .iter()
                .enumerate()
                .map(|(i, g)| Self::from_value(g, &format!("{}[{}]", geometries_path, i)))
                .collect::<GeoJsonResult<_>>()?;
            return Ok(Self::GeometryCollection(geometries));
        }

        let coords_path = join(path, "coordinates");
        let parse = |coords: &Value| -> GeoJsonResult<Self> {
            Ok(match type_name {
                "Point" => Self::Point(position(coords, &coords_path)?),
                "MultiPoint" => Self::MultiPoint(positions(coords, &coords_path)?),
                "LineString" => Self::LineString(positions(coords, &coords_path)?),
                "MultiLineString" => Self::MultiLineString(nested(coords, &coords_path, positions)?),
                "Polygon" => Self::Polygon(nested(coords, &coords_path, positions)?),
                "MultiPolygon" => Self::MultiPolygon(nested(coords, &coords_path, |v, p| {
                    nested(v, p, positions)
                })?),
                other => return Err(GeoJsonError::UnsupportedType(other.to_string())),
            })
        };
        match obj.get("coordinates") {
            Some(coords) => parse(coords),
            None if is_geometry_type(type_name) => {
                Err(GeoJsonError::invalid(&coords_path, "missing 'coordinates'"))
            }
            None => Err(GeoJsonError::UnsupportedType(type_name.to_string())),
        }
    }

    /// Call `f` for every position with its JSON path, in document order.
    pub fn visit_positions<F: FnMut(&str, &[f64])>(&self, path: &str, f: &mut F) {
        let coords = join(path, "coordinates");
        match self {
            Self::Point(p) => f(coords.as_str(), p.as_slice()),
            Self::MultiPoint(line) | Self::LineString(line) => visit_line(line, &coords, f),
            Self::MultiLineString(rings) | Self::Polygon(rings) => {
                for (i, ring) in rings.iter().enumerate() {
                    visit_line(ring, &format!("{}[{}]", coords, i), f);
                }
            }
            Self::MultiPolygon(polygons) => {
                for (i, rings) in polygons.iter().enumerate() {
                    for (j, ring) in rings.iter().enumerate() {
                        visit_line(ring, &format!("{}[{}][{}]", coords, i, j), f);
                    }
                }
            }
            Self::GeometryCollection(geometries) => {
                for (i, g) in geometries.iter().enumerate() {
                    g.visit_positions(&format!("{}[{}]", join(path, "geometries"), i), f);
                }
            }
        }
    }

    /// Call `f` for this geometry and every nested geometry.
    pub fn visit_geometries<F: FnMut(&Geometry)>(&self, f: &mut F) {
        f(self);
        if let Self::GeometryCollection(geometries) = self {
            for g in geometries {
                g.visit_geometries(f);
            }
        }
    }
}

impl Feature {
    /// Decode a feature object found at `path`.
    pub fn from_value(value: &Value, path: &str) -> GeoJsonResult<Self> {
        let obj = as_object(value, path)?;
        match type_member(obj)? {
            "Feature" => {}
            other => return Err(GeoJsonError::UnsupportedType(other.to_string())),
        }
        let geometry = match obj.get("geometry") {
            None | Some(Value::Null) => None,
            Some(g) => Some(Geometry::from_value(g, &join(path, "geometry"))?),
        };
        Ok(Self {
            id: obj.get("id").cloned(),
            geometry,
            properties: obj.get("properties").and_then(Value::as_object).cloned(),
        })
    }
}

impl GeoJson {
    /// Decode any top-level GeoJSON object.
    pub fn from_value(value: &Value) -> GeoJsonResult<Self> {
        let obj = as_object(value, "")?;
        match type_member(obj)? {
            "Feature" => Ok(Self::Feature(Feature::from_value(value, "")?)),
            "FeatureCollection" => {
                let features = obj
                    .get("features")
                    .and_then(Value::as_array)
                    .ok_or_else(|| GeoJsonError::invalid("features", "expected an array"))?;
                let features = features
                    .iter()
                    .enumerate()
                    .map(|(i, f)| Feature::from_value(f, &format!("features[{}]", i)))
                    .collect::<GeoJsonResult<_>>()?;
                Ok(Self::FeatureCollection(features))
            }
            _ => Ok(Self::Geometry(Geometry::from_value(value, "")?)),
        }
    }

    /// The top-level `type` name.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Geometry(g) => g.type_name(),
            Self::Feature(_) => "Feature",
            Self::FeatureCollection(_) => "FeatureCollection",
        }
    }

    /// Every geometry reachable from the root with its JSON path. Null
    /// feature geometries are skipped.
    pub fn geometries(&self) -> Vec<(String, &Geometry)> {
        match self {
            Self::Geometry(g) => vec![(String::new(), g)],
            Self::Feature(feature) => feature
                .geometry
                .iter()
                .map(|g| ("geometry".to_string(), g))
                .collect(),
            Self::FeatureCollection(features) => features
                .iter()
                .enumerate()
                .filter_map(|(i, feature)| {
                    feature
                        .geometry
                        .as_ref()
                        .map(|g| (format!("features[{}].geometry", i), g))
                })
                .collect(),
        }
    }

    /// Number of features: 0 for a bare geometry.
    pub fn feature_count(&self) -> usize {
        match self {
            Self::Geometry(_) => 0,
            Self::Feature(_) => 1,
            Self::FeatureCollection(features) => features.len(),
        }
    }

    /// Call `f` for every position in the document with its JSON path.
    pub fn visit_positions<F: FnMut(&str, &[f64])>(&self, f: &mut F) {
        for (path, geometry) in self.geometries() {
            geometry.visit_positions(&path, f);
        }
    }
}

fn is_geometry_type(name: &str) -> bool {
    matches!(
        name,
        "Point" | "MultiPoint" | "LineString" | "MultiLineString" | "Polygon" | "MultiPolygon"
    )
}

fn join(path: &str, member: &str) -> String {
    if path.is_empty() {
        member.to_string()
    } else {
        format!("{}.{}", path, member)
    }
}

fn as_object<'a>(value: &'a Value, path: &str) -> GeoJsonResult<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| {
        let at = if path.is_empty() { "." } else { path };
        GeoJsonError::invalid(at, "expected a GeoJSON object")
    })
}

fn type_member(obj: &Map<String, Value>) -> GeoJsonResult<&str> {
    match obj.get("type") {
        Some(Value::String(name)) => Ok(name),
        Some(other) => Err(GeoJsonError::UnsupportedType(other.to_string())),
        None => Err(GeoJsonError::UnsupportedType("(missing)".to_string())),
    }
}

fn position(value: &Value, path: &str) -> GeoJsonResult<Position> {
    let items = value
        .as_array()
        .ok_or_else(|| GeoJsonError::invalid(path, "position must be an array of numbers"))?;
    if items.len() < 2 {
        return Err(GeoJsonError::invalid(
            path,
            format!("position needs at least 2 numbers, got {}", items.len()),
        ));
    }
    items
        .iter()
        .enumerate()
        .map(|(i, n)| {
            n.as_f64().ok_or_else(|| {
                GeoJsonError::invalid(format!("{}[{}]", path, i), "expected a number")
            })
        })
        .collect()
}

fn positions(value: &Value, path: &str) -> GeoJsonResult<Vec<Position>> {
    nested(value, path, position)
}

fn nested<T, F>(value: &Value, path: &str, item: F) -> GeoJsonResult<Vec<T>>
where
    F: Fn(&Value, &str) -> GeoJsonResult<T>,
{
    let items = value
        .as_array()
        .ok_or_else(|| GeoJsonError::invalid(path, "expected an array"))?;
    items
        .iter()
        .enumerate()
        .map(|(i, v)| item(v, &format!("{}[{}]", path, i)))
        .collect()
}

fn visit_line<F: FnMut(&str, &[f64])>(line: &[Position], path: &str, f: &mut F) {
    for (i, p) in line.iter().enumerate() {
        f(format!("{}[{}]", path, i).as_str(), p.as_slice());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_point() {
        let g = GeoJson::from_value(&json!({"type": "Point", "coordinates": [1, 2]})).unwrap();
        assert_eq!(g, GeoJson::Geometry(Geometry::Point(vec![1.0, 2.0])));
        assert_eq!(g.type_name(), "Point");
    }

    #[test]
    fn test_decode_polygon_with_altitude() {
        let g = Geometry::from_value(
            &json!({"type": "Polygon", "coordinates": [[[0, 0, 5], [1, 0, 5], [1, 1, 5], [0, 0, 5]]]}),
            "",
        )
        .unwrap();
        match g {
            Geometry::Polygon(rings) => {
                assert_eq!(rings.len(), 1);
                assert_eq!(rings[0][0], vec![0.0, 0.0, 5.0]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_unknown_and_missing_type() {
        assert_eq!(
            GeoJson::from_value(&json!({"type": "Circle", "coordinates": [0, 0]})),
            Err(GeoJsonError::UnsupportedType("Circle".into()))
        );
        assert_eq!(
            GeoJson::from_value(&json!({"coordinates": [0, 0]})),
            Err(GeoJsonError::UnsupportedType("(missing)".into()))
        );
    }

    #[test]
    fn test_unknown_type_inside_collection() {
        let err = GeoJson::from_value(&json!({
            "type": "GeometryCollection",
            "geometries": [{"type": "Blob", "coordinates": []}]
        }))
        .unwrap_err();
        assert_eq!(err, GeoJsonError::UnsupportedType("Blob".into()));
    }

    #[test]
    fn test_invalid_position_path() {
        let err = GeoJson::from_value(&json!({
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "geometry": {"type": "LineString", "coordinates": [[0, 0], [1, "x"]]}}
            ]
        }))
        .unwrap_err();
        assert_eq!(
            err,
            GeoJsonError::invalid("features[0].geometry.coordinates[1][1]", "expected a number")
        );
    }

    #[test]
    fn test_short_position() {
        let err = GeoJson::from_value(&json!({"type": "Point", "coordinates": [1]})).unwrap_err();
        assert!(matches!(err, GeoJsonError::InvalidGeometry { ref path, .. } if path == "coordinates"));
    }

    #[test]
    fn test_missing_coordinates() {
        let err = GeoJson::from_value(&json!({"type": "Point"})).unwrap_err();
        assert_eq!(err, GeoJsonError::invalid("coordinates", "missing 'coordinates'"));
    }

    #[test]
    fn test_null_geometry_feature() {
        let g = GeoJson::from_value(&json!({"type": "Feature", "geometry": null, "properties": {"a": 1}}))
            .unwrap();
        assert!(g.geometries().is_empty());
        assert_eq!(g.feature_count(), 1);
    }

    #[test]
    fn test_visit_positions_paths() {
        let g = GeoJson::from_value(&json!({
            "type": "GeometryCollection",
            "geometries": [
                {"type": "Point", "coordinates": [1, 1]},
                {"type": "MultiPolygon", "coordinates": [[[[0, 0], [2, 2]]]]}
            ]
        }))
        .unwrap();
        let mut paths = Vec::new();
        g.visit_positions(&mut |path, _| paths.push(path.to_string()));
        assert_eq!(
            paths,
            vec![
                "geometries[0].coordinates",
                "geometries[1].coordinates[0][0][0]",
                "geometries[1].coordinates[0][0][1]",
            ]
        );
    }

    #[test]
    fn test_visit_geometries_includes_nested() {
        let g = Geometry::from_value(
            &json!({
                "type": "GeometryCollection",
                "geometries": [{"type": "GeometryCollection", "geometries": [{"type": "Point", "coordinates": [0, 0]}]}]
            }),
            "",
        )
        .unwrap();
        let mut names = Vec::new();
        g.visit_geometries(&mut |g| names.push(g.type_name()));
        assert_eq!(names, vec!["GeometryCollection", "GeometryCollection", "Point"]);
    }
}
