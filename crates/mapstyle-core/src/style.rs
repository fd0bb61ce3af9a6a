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

//! Typed style document model.
//!
//! Known fields are decoded into typed slots; every other key, and any known
//! key whose value is `null`, is kept in an `extra` map. Each object also
//! records its original key order, so decoding and re-encoding a document
//! neither loses data nor reorders it.
//!
//! [`StyleDocument::from_value`] rejects known fields of the wrong shape with
//! a path-carrying `Schema` error. [`StyleDocument::from_value_lenient`]
//! never fails on an object: mis-shaped known fields are moved to `extra`
//! and read as absent.

use crate::error::{StyleError, StyleResult};
use crate::expression::Expression;
use indexmap::IndexMap;
use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::ser::{Error as _, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;

/// The only supported style version.
pub const STYLE_VERSION: u64 = 8;

/// Property map of a layer's `paint` or `layout` block.
pub type PropertyMap = IndexMap<String, Expression>;

/// How known fields of the wrong shape are handled while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Strict,
    Lenient,
}

/// A complete style document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleDocument {
    pub version: Option<Value>,
    pub name: Option<String>,
    pub metadata: Option<Value>,
    pub sources: Option<IndexMap<String, SourceSpec>>,
    pub sprite: Option<Value>,
    pub glyphs: Option<String>,
    pub layers: Option<Vec<LayerSpec>>,
    /// Unrecognised top-level keys and `null` or mis-shaped known fields.
    pub extra: Map<String, Value>,
    key_order: Vec<String>,
}

impl StyleDocument {
    /// Decode a style from JSON.
    ///
    /// Failures are `Schema` errors carrying the path of the offending value,
    /// e.g. `layers[2]` or `sources.streets`.
    pub fn from_value(value: Value) -> StyleResult<Self> {
        match value {
            Value::Object(map) => Self::from_map(map, Mode::Strict),
            other => Err(StyleError::schema(format!(
                "Style must be a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Decode a style without rejecting mis-shaped known fields.
    ///
    /// A `sources` object or `layers` array holding an entry that is not an
    /// object is kept verbatim in `extra`. Only a non-object document fails.
    pub fn from_value_lenient(value: Value) -> StyleResult<Self> {
        match value {
            Value::Object(map) => Self::from_map(map, Mode::Lenient),
            other => Err(StyleError::schema(format!(
                "Style must be a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }

    fn from_map(map: Map<String, Value>, mode: Mode) -> StyleResult<Self> {
        let key_order = map.keys().cloned().collect();
        let mut fields = FieldReader::new(map, "", mode);

        let version = fields.raw("version");
        let name = fields.optional("name")?;
        let metadata = fields.raw("metadata");
        let sprite = fields.raw("sprite");
        let glyphs = fields.optional("glyphs")?;
        let sources = fields.sources()?;
        let layers = fields.layers()?;

        Ok(Self {
            version,
            name,
            metadata,
            sources,
            sprite,
            glyphs,
            layers,
            extra: fields.finish(),
            key_order,
        })
    }

    /// Encode back to JSON, keys in their original order.
    pub fn to_value(&self) -> StyleResult<Value> {
        self.to_map()
            .map(Value::Object)
            .map_err(|e| StyleError::internal(format!("Failed to encode style: {}", e)))
    }

    fn to_map(&self) -> serde_json::Result<Map<String, Value>> {
        let mut map = self.extra.clone();
        put(&mut map, "version", &self.version)?;
        put(&mut map, "name", &self.name)?;
        put(&mut map, "metadata", &self.metadata)?;
        put(&mut map, "sources", &self.sources)?;
        put(&mut map, "sprite", &self.sprite)?;
        put(&mut map, "glyphs", &self.glyphs)?;
        put(&mut map, "layers", &self.layers)?;
        Ok(in_document_order(map, &self.key_order))
    }

    /// Layers, or an empty slice when the field is absent.
    pub fn layers(&self) -> &[LayerSpec] {
        self.layers.as_deref().unwrap_or(&[])
    }

    pub fn source(&self, name: &str) -> Option<&SourceSpec> {
        self.sources.as_ref().and_then(|s| s.get(name))
    }

    pub fn source_count(&self) -> usize {
        self.sources.as_ref().map_or(0, IndexMap::len)
    }

    pub fn layer_count(&self) -> usize {
        self.layers().len()
    }
}

impl Serialize for StyleDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_map().map_err(S::Error::custom)?.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for StyleDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(D::Error::custom)
    }
}

/// A single rendering layer.
///
/// `id` and `kind` are always present after a strict decode.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayerSpec {
    pub id: Option<String>,
    pub kind: Option<LayerKind>,
    pub source: Option<String>,
    pub source_layer: Option<String>,
    pub minzoom: Option<Number>,
    pub maxzoom: Option<Number>,
    pub filter: Option<Expression>,
    pub layout: Option<PropertyMap>,
    pub paint: Option<PropertyMap>,
    pub extra: Map<String, Value>,
    key_order: Vec<String>,
}

impl LayerSpec {
    fn from_map(map: Map<String, Value>, path: &str, mode: Mode) -> StyleResult<Self> {
        let key_order = map.keys().cloned().collect();
        let mut fields = FieldReader::new(map, path, mode);
        Ok(Self {
            id: fields.required("id")?,
            kind: fields.required::<String>("type")?.map(LayerKind::from),
            source: fields.optional("source")?,
            source_layer: fields.optional("source-layer")?,
            minzoom: fields.optional("minzoom")?,
            maxzoom: fields.optional("maxzoom")?,
            filter: fields.optional("filter")?,
            layout: fields.optional("layout")?,
            paint: fields.optional("paint")?,
            extra: fields.finish(),
            key_order,
        })
    }

    fn to_map(&self) -> serde_json::Result<Map<String, Value>> {
        let mut map = self.extra.clone();
        put(&mut map, "id", &self.id)?;
        put(&mut map, "type", &self.kind)?;
        put(&mut map, "source", &self.source)?;
        put(&mut map, "source-layer", &self.source_layer)?;
        put(&mut map, "minzoom", &self.minzoom)?;
        put(&mut map, "maxzoom", &self.maxzoom)?;
        put(&mut map, "filter", &self.filter)?;
        put(&mut map, "layout", &self.layout)?;
        put(&mut map, "paint", &self.paint)?;
        Ok(in_document_order(map, &self.key_order))
    }

    /// Layer id, or `""` when absent.
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    /// Layer `type` as written, or `""` when absent.
    pub fn type_name(&self) -> &str {
        self.kind.as_ref().map_or("", LayerKind::as_str)
    }

    pub fn is_background(&self) -> bool {
        self.kind == Some(LayerKind::Background)
    }

    /// Whether the layer has at least one paint or layout property.
    pub fn has_properties(&self) -> bool {
        let non_empty = |m: &Option<PropertyMap>| m.as_ref().is_some_and(|m| !m.is_empty());
        non_empty(&self.paint) || non_empty(&self.layout)
    }

    /// Every expression-valued field with its path relative to the layer:
    /// `filter`, then `layout.<name>`, then `paint.<name>`.
    pub fn expression_fields(&self) -> Vec<(String, &Expression)> {
        let mut fields = Vec::new();
        if let Some(filter) = &self.filter {
            fields.push(("filter".to_string(), filter));
        }
        for (block, props) in [("layout", &self.layout), ("paint", &self.paint)] {
            if let Some(props) = props {
                for (name, expr) in props {
                    fields.push((format!("{}.{}", block, name), expr));
                }
            }
        }
        fields
    }

    /// Mutable counterpart of [`LayerSpec::expression_fields`].
    pub fn expression_fields_mut(&mut self) -> Vec<(String, &mut Expression)> {
        let mut fields = Vec::new();
        if let Some(filter) = &mut self.filter {
            fields.push(("filter".to_string(), filter));
        }
        for (block, props) in [("layout", &mut self.layout), ("paint", &mut self.paint)] {
            if let Some(props) = props {
                for (name, expr) in props.iter_mut() {
                    fields.push((format!("{}.{}", block, name), expr));
                }
            }
        }
        fields
    }

    /// Zoom bounds as floats, when present.
    pub fn zoom_range(&self) -> (Option<f64>, Option<f64>) {
        (
            self.minzoom.as_ref().and_then(Number::as_f64),
            self.maxzoom.as_ref().and_then(Number::as_f64),
        )
    }
}

impl Serialize for LayerSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_map().map_err(S::Error::custom)?.serialize(serializer)
    }
}

/// Layer `type`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LayerKind {
    Background,
    Fill,
    Line,
    Symbol,
    Circle,
    Heatmap,
    FillExtrusion,
    Raster,
    Hillshade,
    Sky,
    Model,
    /// Any other value, kept verbatim.
    Other(String),
}

impl LayerKind {
    /// Every recognised layer type name.
    pub const KNOWN: &'static [&'static str] = &[
        "background",
        "fill",
        "line",
        "symbol",
        "circle",
        "heatmap",
        "fill-extrusion",
        "raster",
        "hillshade",
        "sky",
        "model",
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Background => "background",
            Self::Fill => "fill",
            Self::Line => "line",
            Self::Symbol => "symbol",
            Self::Circle => "circle",
            Self::Heatmap => "heatmap",
            Self::FillExtrusion => "fill-extrusion",
            Self::Raster => "raster",
            Self::Hillshade => "hillshade",
            Self::Sky => "sky",
            Self::Model => "model",
            Self::Other(s) => s,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for LayerKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "background" => Self::Background,
            "fill" => Self::Fill,
            "line" => Self::Line,
            "symbol" => Self::Symbol,
            "circle" => Self::Circle,
            "heatmap" => Self::Heatmap,
            "fill-extrusion" => Self::FillExtrusion,
            "raster" => Self::Raster,
            "hillshade" => Self::Hillshade,
            "sky" => Self::Sky,
            "model" => Self::Model,
            _ => Self::Other(s),
        }
    }
}

impl From<LayerKind> for String {
    fn from(kind: LayerKind) -> Self {
        match kind {
            LayerKind::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named data source.
///
/// `kind` is always present after a strict decode.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SourceSpec {
    pub kind: Option<SourceKind>,
    pub extra: Map<String, Value>,
    key_order: Vec<String>,
}

impl SourceSpec {
    fn from_map(map: Map<String, Value>, path: &str, mode: Mode) -> StyleResult<Self> {
        let key_order = map.keys().cloned().collect();
        let mut fields = FieldReader::new(map, path, mode);
        Ok(Self {
            kind: fields.required::<String>("type")?.map(SourceKind::from),
            extra: fields.finish(),
            key_order,
        })
    }

    fn to_map(&self) -> serde_json::Result<Map<String, Value>> {
        let mut map = self.extra.clone();
        put(&mut map, "type", &self.kind)?;
        Ok(in_document_order(map, &self.key_order))
    }

    /// Source `type` as written, or `""` when absent.
    pub fn type_name(&self) -> &str {
        self.kind.as_ref().map_or("", SourceKind::as_str)
    }

    /// Tiled sources whose layers must name a `source-layer`.
    pub fn requires_source_layer(&self) -> bool {
        self.kind.as_ref().is_some_and(SourceKind::requires_source_layer)
    }

    /// Sources whose layers must not name a `source-layer`.
    pub fn forbids_source_layer(&self) -> bool {
        self.kind.as_ref().is_some_and(SourceKind::forbids_source_layer)
    }
}

impl Serialize for SourceSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_map().map_err(S::Error::custom)?.serialize(serializer)
    }
}

/// Source `type`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SourceKind {
    Vector,
    Raster,
    RasterDem,
    GeoJson,
    Image,
    Video,
    Other(String),
}

impl SourceKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Vector => "vector",
            Self::Raster => "raster",
            Self::RasterDem => "raster-dem",
            Self::GeoJson => "geojson",
            Self::Image => "image",
            Self::Video => "video",
            Self::Other(s) => s,
        }
    }

    /// Tiled sources whose layers must name a `source-layer`.
    pub fn requires_source_layer(&self) -> bool {
        matches!(self, Self::Vector | Self::Raster)
    }

    /// Sources whose layers must not name a `source-layer`.
    pub fn forbids_source_layer(&self) -> bool {
        matches!(self, Self::GeoJson)
    }
}

impl From<String> for SourceKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "vector" => Self::Vector,
            "raster" => Self::Raster,
            "raster-dem" => Self::RasterDem,
            "geojson" => Self::GeoJson,
            "image" => Self::Image,
            "video" => Self::Video,
            _ => Self::Other(s),
        }
    }
}

impl From<SourceKind> for String {
    fn from(kind: SourceKind) -> Self {
        match kind {
            SourceKind::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name of a JSON value's type, for messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Pulls known fields out of a JSON object, leaving the rest as `extra`.
struct FieldReader<'a> {
    map: Map<String, Value>,
    extra: Map<String, Value>,
    path: &'a str,
    mode: Mode,
}

impl<'a> FieldReader<'a> {
    fn new(map: Map<String, Value>, path: &'a str, mode: Mode) -> Self {
        Self {
            map,
            extra: Map::new(),
            path,
            mode,
        }
    }

    fn field_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    /// A field kept as raw JSON, `null` included.
    fn raw(&mut self, key: &str) -> Option<Value> {
        self.map.shift_remove(key)
    }

    /// An optional typed field. `null` always goes to `extra`.
    fn optional<T: DeserializeOwned>(&mut self, key: &str) -> StyleResult<Option<T>> {
        match self.map.shift_remove(key) {
            None => Ok(None),
            Some(Value::Null) => {
                self.extra.insert(key.to_string(), Value::Null);
                Ok(None)
            }
            Some(value) => self.typed(key, value),
        }
    }

    /// A field a strict decode requires.
    fn required<T: DeserializeOwned>(&mut self, key: &str) -> StyleResult<Option<T>> {
        match self.map.shift_remove(key) {
            Some(value) => self.typed(key, value),
            None if self.mode == Mode::Lenient => Ok(None),
            None => Err(StyleError::schema(format!("missing field `{}`", key))
                .with_path(self.path)),
        }
    }

    fn typed<T: DeserializeOwned>(&mut self, key: &str, value: Value) -> StyleResult<Option<T>> {
        match self.mode {
            Mode::Strict => decode(value, &self.field_path(key)).map(Some),
            Mode::Lenient => match T::deserialize(&value) {
                Ok(typed) => Ok(Some(typed)),
                Err(_) => {
                    self.extra.insert(key.to_string(), value);
                    Ok(None)
                }
            },
        }
    }

    fn sources(&mut self) -> StyleResult<Option<IndexMap<String, SourceSpec>>> {
        let entries = match self.map.shift_remove("sources") {
            None => return Ok(None),
            Some(Value::Object(entries))
                if self.mode == Mode::Strict || entries.values().all(Value::is_object) =>
            {
                entries
            }
            Some(other) => return self.misfit("sources", other, "an object"),
        };

        let mut sources = IndexMap::with_capacity(entries.len());
        for (key, value) in entries {
            let path = format!("sources.{}", key);
            let spec = match value {
                Value::Object(map) => SourceSpec::from_map(map, &path, self.mode)?,
                other => return Err(not_an_object(&path, &other)),
            };
            sources.insert(key, spec);
        }
        Ok(Some(sources))
    }

    fn layers(&mut self) -> StyleResult<Option<Vec<LayerSpec>>> {
        let items = match self.map.shift_remove("layers") {
            None => return Ok(None),
            Some(Value::Array(items))
                if self.mode == Mode::Strict || items.iter().all(Value::is_object) =>
            {
                items
            }
            Some(other) => return self.misfit("layers", other, "an array"),
        };

        let mut layers = Vec::with_capacity(items.len());
        for (i, value) in items.into_iter().enumerate() {
            let path = format!("layers[{}]", i);
            match value {
                Value::Object(map) => layers.push(LayerSpec::from_map(map, &path, self.mode)?),
                other => return Err(not_an_object(&path, &other)),
            }
        }
        Ok(Some(layers))
    }

    /// A container field that cannot be decoded; `null` is never an error.
    fn misfit<T>(&mut self, key: &str, value: Value, expected: &str) -> StyleResult<Option<T>> {
        if self.mode == Mode::Strict && !value.is_null() {
            return Err(StyleError::schema(format!(
                "Field '{}' must be {}, got {}",
                key,
                expected,
                json_type_name(&value)
            ))
            .with_path(key));
        }
        self.extra.insert(key.to_string(), value);
        Ok(None)
    }

    /// `extra` plus every key that was never read.
    fn finish(mut self) -> Map<String, Value> {
        self.extra.append(&mut self.map);
        self.extra
    }
}

fn not_an_object(path: &str, value: &Value) -> StyleError {
    StyleError::schema(format!("Expected an object, got {}", json_type_name(value))).with_path(path)
}

fn put<T: Serialize>(map: &mut Map<String, Value>, key: &str, value: &Option<T>) -> serde_json::Result<()> {
    if let Some(value) = value {
        map.insert(key.to_string(), serde_json::to_value(value)?);
    }
    Ok(())
}

/// Reorder `map` to follow `order`; keys not in `order` keep their place at the end.
fn in_document_order(mut map: Map<String, Value>, order: &[String]) -> Map<String, Value> {
    let mut ordered = Map::with_capacity(map.len());
    for key in order {
        if let Some(value) = map.shift_remove(key) {
            ordered.insert(key.clone(), value);
        }
    }
    ordered.append(&mut map);
    ordered
}

fn decode<T: DeserializeOwned>(value: Value, base: &str) -> StyleResult<T> {
    serde_path_to_error::deserialize(value).map_err(|err| {
        let inner = err.path().to_string();
        let path = if inner == "." {
            base.to_string()
        } else if inner.starts_with('[') {
            format!("{}{}", base, inner)
        } else {
            format!("{}.{}", base, inner)
        };
        StyleError::schema(err.into_inner().to_string()).with_path(path)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StyleErrorKind;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "version": 8,
            "name": "Sample",
            "sources": {
                "streets": {"type": "vector", "url": "mapbox://mapbox.mapbox-streets-v8"},
                "points": {"type": "geojson", "data": {"type": "FeatureCollection", "features": []}}
            },
            "layers": [
                {"id": "bg", "type": "background", "paint": {"background-color": "#fff"}},
                {
                    "id": "roads",
                    "type": "line",
                    "source": "streets",
                    "source-layer": "road",
                    "minzoom": 5,
                    "filter": ["==", ["get", "class"], "primary"],
                    "paint": {"line-width": 2, "line-color": ["rgb", 1, 2, 3]},
                    "x-custom": {"keep": true}
                }
            ],
            "terrain": {"source": "dem"}
        })
    }

    #[test]
    fn test_decode_sample() {
        let doc = StyleDocument::from_value(sample()).unwrap();
        assert_eq!(doc.version, Some(json!(8)));
        assert_eq!(doc.name.as_deref(), Some("Sample"));
        assert_eq!(doc.layer_count(), 2);
        assert_eq!(doc.source_count(), 2);
        assert_eq!(doc.source("streets").unwrap().kind, Some(SourceKind::Vector));
        assert!(doc.extra.contains_key("terrain"));

        let roads = &doc.layers()[1];
        assert_eq!(roads.kind, Some(LayerKind::Line));
        assert_eq!(roads.id(), "roads");
        assert_eq!(roads.source_layer.as_deref(), Some("road"));
        assert_eq!(roads.zoom_range(), (Some(5.0), None));
        assert!(roads.extra.contains_key("x-custom"));
    }

    #[test]
    fn test_round_trip_keeps_unknown_fields() {
        let doc = StyleDocument::from_value(sample()).unwrap();
        let value = doc.to_value().unwrap();
        assert_eq!(value["terrain"], json!({"source": "dem"}));
        assert_eq!(value["layers"][1]["x-custom"], json!({"keep": true}));
        assert_eq!(value["layers"][1]["minzoom"], json!(5));
        assert_eq!(value["sources"]["streets"]["url"], sample()["sources"]["streets"]["url"]);
        assert_eq!(value, reencode(&value));
    }

    fn reencode(value: &Value) -> Value {
        StyleDocument::from_value(value.clone())
            .unwrap()
            .to_value()
            .unwrap()
    }

    #[test]
    fn test_round_trip_keeps_nulls_and_key_order() {
        let input = json!({
            "version": 8,
            "name": null,
            "center": [0, 0],
            "sources": {"a": {"url": "x", "type": "geojson"}},
            "layers": [{
                "paint": {"fill-color": "#000"},
                "id": "l",
                "filter": null,
                "source": null,
                "type": "fill",
                "layout": null
            }],
            "zoom": 2
        });
        let doc = StyleDocument::from_value(input.clone()).unwrap();
        assert!(doc.name.is_none());
        assert!(doc.layers()[0].filter.is_none());
        assert!(doc.layers()[0].source.is_none());

        let output = doc.to_value().unwrap();
        assert_eq!(
            serde_json::to_string(&output).unwrap(),
            serde_json::to_string(&input).unwrap()
        );
    }

    #[test]
    fn test_new_fields_appended() {
        let mut doc = StyleDocument::from_value(json!({
            "layers": [{"type": "fill", "id": "l"}],
            "version": 8
        }))
        .unwrap();
        doc.name = Some("Added".to_string());
        let layers = doc.layers.as_mut().unwrap();
        layers[0].paint = Some(PropertyMap::new());

        let keys: Vec<String> = doc.to_value().unwrap().as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["layers", "version", "name"]);
        let layer = &doc.to_value().unwrap()["layers"][0];
        let layer_keys: Vec<&String> = layer.as_object().unwrap().keys().collect();
        assert_eq!(layer_keys, vec!["type", "id", "paint"]);
    }

    #[test]
    fn test_lenient_keeps_misshaped_fields() {
        let input = json!({
            "version": 8,
            "glyphs": 12,
            "sources": {"s": {"url": "x"}},
            "layers": [
                {"id": "a", "minzoom": "5", "paint": {"fill-color": "#000"}},
                {"id": 7, "type": "line", "layout": []}
            ]
        });
        assert!(StyleDocument::from_value(input.clone()).is_err());

        let doc = StyleDocument::from_value_lenient(input.clone()).unwrap();
        assert!(doc.glyphs.is_none());
        assert_eq!(doc.extra["glyphs"], json!(12));
        assert_eq!(doc.source("s").unwrap().kind, None);

        let first = &doc.layers()[0];
        assert_eq!(first.kind, None);
        assert_eq!(first.minzoom, None);
        assert_eq!(first.extra["minzoom"], json!("5"));
        assert!(first.has_properties());

        let second = &doc.layers()[1];
        assert_eq!(second.id, None);
        assert_eq!(second.id(), "");
        assert_eq!(second.kind, Some(LayerKind::Line));
        assert_eq!(second.extra["id"], json!(7));

        assert_eq!(doc.to_value().unwrap(), input);
    }

    #[test]
    fn test_lenient_keeps_non_object_entries() {
        let input = json!({
            "sources": {"a": {"type": "geojson"}, "b": 3},
            "layers": [{"id": "x", "type": "fill"}, "oops"]
        });
        let doc = StyleDocument::from_value_lenient(input.clone()).unwrap();
        assert!(doc.sources.is_none());
        assert!(doc.layers.is_none());
        assert_eq!(doc.to_value().unwrap(), input);

        let err = StyleDocument::from_value(input).unwrap_err();
        assert_eq!(err.path.as_deref(), Some("sources.b"));
    }

    #[test]
    fn test_lenient_rejects_non_object_document() {
        let err = StyleDocument::from_value_lenient(json!("style")).unwrap_err();
        assert_eq!(err.kind, StyleErrorKind::Schema);
    }

    #[test]
    fn test_not_an_object() {
        let err = StyleDocument::from_value(json!([1, 2])).unwrap_err();
        assert_eq!(err.kind, StyleErrorKind::Schema);
        assert!(err.message.contains("array"));
    }

    #[test]
    fn test_layer_error_path() {
        let err = StyleDocument::from_value(json!({
            "version": 8,
            "sources": {},
            "layers": [{"id": "a", "type": "fill"}, {"type": "fill"}]
        }))
        .unwrap_err();
        assert_eq!(err.kind, StyleErrorKind::Schema);
        assert!(err.path.as_deref().unwrap().starts_with("layers[1]"));
        assert!(err.message.contains("id"));
    }

    #[test]
    fn test_source_error_path() {
        let err = StyleDocument::from_value(json!({
            "version": 8,
            "sources": {"s": {"url": "x"}},
            "layers": []
        }))
        .unwrap_err();
        assert!(err.path.as_deref().unwrap().starts_with("sources.s"));
    }

    #[test]
    fn test_layers_wrong_type() {
        let err = StyleDocument::from_value(json!({"version": 8, "layers": {}})).unwrap_err();
        assert_eq!(err.path.as_deref(), Some("layers"));
    }

    #[test]
    fn test_missing_optional_fields() {
        let doc = StyleDocument::from_value(json!({"version": 7})).unwrap();
        assert!(doc.sources.is_none());
        assert!(doc.layers.is_none());
        assert!(doc.layers().is_empty());
    }

    #[test]
    fn test_layer_kinds() {
        assert_eq!(LayerKind::from("fill-extrusion".to_string()), LayerKind::FillExtrusion);
        let other = LayerKind::from("custom".to_string());
        assert!(!other.is_known());
        assert_eq!(String::from(other), "custom");
        for name in LayerKind::KNOWN {
            assert!(LayerKind::from(name.to_string()).is_known(), "{}", name);
        }
    }

    #[test]
    fn test_source_kinds() {
        assert!(SourceKind::Vector.requires_source_layer());
        assert!(SourceKind::Raster.requires_source_layer());
        assert!(!SourceKind::GeoJson.requires_source_layer());
        assert!(SourceKind::GeoJson.forbids_source_layer());
        assert_eq!(SourceKind::from("raster-dem".to_string()), SourceKind::RasterDem);
    }

    #[test]
    fn test_expression_fields() {
        let doc = StyleDocument::from_value(sample()).unwrap();
        let fields = doc.layers()[1].expression_fields();
        let names: Vec<_> = fields.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["filter", "paint.line-width", "paint.line-color"]);
    }

    #[test]
    fn test_has_properties() {
        let mut doc = StyleDocument::from_value(sample()).unwrap();
        let layers = doc.layers.as_mut().unwrap();
        assert!(layers[1].has_properties());
        layers[1].paint = Some(PropertyMap::new());
        assert!(!layers[1].has_properties());
        layers[1].paint = None;
        assert!(!layers[1].has_properties());
    }

    #[test]
    fn test_deserialize_impl() {
        let doc: StyleDocument = serde_json::from_value(sample()).unwrap();
        assert_eq!(doc.layer_count(), 2);
    }
}
