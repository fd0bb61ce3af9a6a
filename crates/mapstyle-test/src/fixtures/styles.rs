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

//! Style document fixtures.

use serde_json::{json, Value};

/// Smallest valid style: one background layer.
pub fn minimal_style() -> Value {
    json!({
        "version": 8,
        "name": "Minimal",
        "sources": {},
        "layers": [
            {"id": "background", "type": "background", "paint": {"background-color": "#f8f4f0"}}
        ]
    })
}

/// A realistic vector style with sprite, glyphs and expressions.
pub fn streets_style() -> Value {
    json!({
        "version": 8,
        "name": "Streets",
        "metadata": {"editor": "fixtures"},
        "sources": {
            "composite": {"type": "vector", "url": "mapbox://mapbox.mapbox-streets-v8"},
            "satellite": {"type": "raster", "url": "mapbox://mapbox.satellite", "tileSize": 256}
        },
        "sprite": "mapbox://sprites/mapbox/streets-v12",
        "glyphs": "mapbox://fonts/mapbox/{fontstack}/{range}.pbf",
        "layers": [
            {"id": "background", "type": "background", "paint": {"background-color": "#f8f4f0"}},
            {
                "id": "imagery",
                "type": "raster",
                "source": "satellite",
                "source-layer": "imagery",
                "maxzoom": 12,
                "paint": {"raster-opacity": 0.6}
            },
            {
                "id": "water",
                "type": "fill",
                "source": "composite",
                "source-layer": "water",
                "paint": {"fill-color": "#a0c8f0"}
            },
            {
                "id": "parks",
                "type": "fill",
                "source": "composite",
                "source-layer": "landuse",
                "filter": ["==", ["get", "class"], "park"],
                "paint": {
                    "fill-color": ["match", ["get", "type"], "garden", "#c8e6a0", "#d8e8c8"],
                    "fill-opacity": ["step", ["zoom"], 0.2, 12, 0.8]
                }
            },
            {
                "id": "roads",
                "type": "line",
                "source": "composite",
                "source-layer": "road",
                "minzoom": 5,
                "filter": ["all", ["==", ["geometry-type"], "LineString"], ["has", "class"]],
                "layout": {"line-cap": "round", "line-join": "round"},
                "paint": {"line-color": "#ffffff", "line-width": ["*", 2, ["to-number", ["get", "lanes"]]]}
            },
            {
                "id": "labels",
                "type": "symbol",
                "source": "composite",
                "source-layer": "place_label",
                "layout": {"text-field": ["get", "name"], "text-size": 12}
            }
        ]
    })
}

/// A style over a GeoJSON source (no source-layer allowed).
pub fn geojson_style() -> Value {
    json!({
        "version": 8,
        "sources": {
            "points": {
                "type": "geojson",
                "data": {"type": "FeatureCollection", "features": []}
            }
        },
        "layers": [
            {
                "id": "points",
                "type": "circle",
                "source": "points",
                "paint": {"circle-radius": 4, "circle-color": ["rgb", 200, 30, 30]}
            }
        ]
    })
}

/// A style every optimization pass has something to do with:
/// an unused source, a duplicate layer, foldable filters, an empty layer
/// and two layers sharing a filter.
pub fn optimizable_style() -> Value {
    json!({
        "version": 8,
        "sources": {
            "used": {"type": "geojson", "data": {"type": "FeatureCollection", "features": []}},
            "unused": {"type": "vector", "url": "mapbox://unused"}
        },
        "layers": [
            {"id": "background", "type": "background", "paint": {"background-color": "#fff"}},
            {
                "id": "a",
                "type": "fill",
                "source": "used",
                "filter": ["all", true],
                "paint": {"fill-color": "#f00"}
            },
            {
                "id": "a-copy",
                "type": "fill",
                "source": "used",
                "filter": ["all", true],
                "paint": {"fill-color": "#f00"}
            },
            {
                "id": "b",
                "type": "line",
                "source": "used",
                "filter": ["!", false],
                "paint": {"line-color": "#00f"}
            },
            {"id": "empty", "type": "line", "source": "used", "paint": {}}
        ]
    })
}
