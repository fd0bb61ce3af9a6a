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

//! Optimization passes

use mapstyle_core::{Expression, LayerSpec, StyleDocument};
use serde::Serialize;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

/// Trait for optimization passes
pub trait OptimizationPass: Send + Sync {
    /// Pass identifier, reported as the record `type`
    fn id(&self) -> &str;

    /// Pass description
    fn description(&self) -> &str;

    /// Apply the pass, returning how many changes (or findings) it made
    fn apply(&self, style: &mut StyleDocument) -> usize;
}

/// Names of the built-in passes, in default execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PassName {
    RemoveUnusedSources,
    RemoveDuplicateLayers,
    SimplifyExpressions,
    RemoveEmptyLayers,
    ConsolidateFilters,
}

impl PassName {
    /// Every pass, in default order.
    pub const ALL: [PassName; 5] = [
        Self::RemoveUnusedSources,
        Self::RemoveDuplicateLayers,
        Self::SimplifyExpressions,
        Self::RemoveEmptyLayers,
        Self::ConsolidateFilters,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RemoveUnusedSources => "remove-unused-sources",
            Self::RemoveDuplicateLayers => "remove-duplicate-layers",
            Self::SimplifyExpressions => "simplify-expressions",
            Self::RemoveEmptyLayers => "remove-empty-layers",
            Self::ConsolidateFilters => "consolidate-filters",
        }
    }

    /// Instantiate the pass.
    pub fn pass(&self) -> Box<dyn OptimizationPass> {
        match self {
            Self::RemoveUnusedSources => Box::new(RemoveUnusedSources),
            Self::RemoveDuplicateLayers => Box::new(RemoveDuplicateLayers),
            Self::SimplifyExpressions => Box::new(SimplifyExpressions),
            Self::RemoveEmptyLayers => Box::new(RemoveEmptyLayers),
            Self::ConsolidateFilters => Box::new(ConsolidateFilters),
        }
    }
}

impl fmt::Display for PassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PassName {
    type Err = mapstyle_core::StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(PassName::as_str).collect();
                mapstyle_core::StyleError::schema(format!(
                    "Unknown optimization pass '{}' (expected one of: {})",
                    s,
                    known.join(", ")
                ))
            })
    }
}

impl Serialize for PassName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Serialized form used for order-sensitive structural comparison.
fn canonical_json<T: Serialize>(value: &T) -> Option<String> {
    serde_json::to_string(value).ok()
}

/// Pass: delete sources no layer references
pub struct RemoveUnusedSources;

impl OptimizationPass for RemoveUnusedSources {
    fn id(&self) -> &str {
        PassName::RemoveUnusedSources.as_str()
    }
    fn description(&self) -> &str {
        "Remove sources that no layer references"
    }

    fn apply(&self, style: &mut StyleDocument) -> usize {
        let referenced: HashSet<String> = style
            .layers()
            .iter()
            .filter_map(|layer| layer.source.clone())
            .collect();

        let Some(sources) = style.sources.as_mut() else {
            return 0;
        };
        let before = sources.len();
        sources.retain(|name, _| referenced.contains(name));
        before - sources.len()
    }
}

/// Pass: drop layers identical to an earlier one in everything but `id`
pub struct RemoveDuplicateLayers;

fn layer_without_id(layer: &LayerSpec) -> Option<String> {
    let mut value = serde_json::to_value(layer).ok()?;
    if let Value::Object(map) = &mut value {
        map.shift_remove("id");
    }
    canonical_json(&value)
}

impl OptimizationPass for RemoveDuplicateLayers {
    fn id(&self) -> &str {
        PassName::RemoveDuplicateLayers.as_str()
    }
    fn description(&self) -> &str {
        "Remove layers that duplicate an earlier layer except for their id"
    }

    fn apply(&self, style: &mut StyleDocument) -> usize {
        let Some(layers) = style.layers.as_mut() else {
            return 0;
        };
        let before = layers.len();
        let mut seen = HashSet::new();
        layers.retain(|layer| match layer_without_id(layer) {
            Some(key) => seen.insert(key),
            None => true,
        });
        before - layers.len()
    }
}

/// Pass: fold the four boolean identities in filters and expression properties
///
/// `["all", true]` and `["!", false]` become `true`; `["any", false]` and
/// `["!", true]` become `false`. Nothing else is rewritten.
pub struct SimplifyExpressions;

/// Apply one identity to a single node whose arguments are already folded.
pub fn simplify_node(node: Expression) -> Expression {
    let folded = match &node {
        Expression::Call { operator, args } if args.len() == 1 => {
            match (operator.as_str(), args[0].as_bool()) {
                ("all", Some(true)) => Some(true),
                ("any", Some(false)) => Some(false),
                ("!", Some(b)) => Some(!b),
                _ => None,
            }
        }
        _ => None,
    };
    match folded {
        Some(b) => Expression::Literal(Value::Bool(b)),
        None => node,
    }
}

/// Fold an expression tree bottom-up with [`simplify_node`].
pub fn simplify_expression(expr: Expression) -> Expression {
    expr.fold_bottom_up(&mut simplify_node)
}

impl OptimizationPass for SimplifyExpressions {
    fn id(&self) -> &str {
        PassName::SimplifyExpressions.as_str()
    }
    fn description(&self) -> &str {
        "Fold constant boolean sub-expressions in filters and properties"
    }

    fn apply(&self, style: &mut StyleDocument) -> usize {
        let Some(layers) = style.layers.as_mut() else {
            return 0;
        };

        let mut changed = 0;
        for layer in layers.iter_mut() {
            for (field, expr) in layer.expression_fields_mut() {
                if field != "filter" && !expr.is_array() {
                    continue;
                }
                let before = canonical_json(&*expr);
                let simplified = simplify_expression(std::mem::replace(
                    expr,
                    Expression::Literal(Value::Null),
                ));
                *expr = simplified;
                if canonical_json(&*expr) != before {
                    changed += 1;
                }
            }
        }
        changed
    }
}

/// Pass: drop non-background layers without paint or layout properties
pub struct RemoveEmptyLayers;

impl OptimizationPass for RemoveEmptyLayers {
    fn id(&self) -> &str {
        PassName::RemoveEmptyLayers.as_str()
    }
    fn description(&self) -> &str {
        "Remove non-background layers with no paint or layout properties"
    }

    fn apply(&self, style: &mut StyleDocument) -> usize {
        let Some(layers) = style.layers.as_mut() else {
            return 0;
        };
        let before = layers.len();
        layers.retain(|layer| layer.is_background() || layer.has_properties());
        before - layers.len()
    }
}

/// Pass: report groups of layers sharing an identical filter
///
/// Analysis only; the style is left unchanged. Filters are compared by their
/// serialized text, so object key order matters.
pub struct ConsolidateFilters;

impl ConsolidateFilters {
    /// Ids of layers sharing each repeated filter, in first-seen order.
    pub fn groups(style: &StyleDocument) -> Vec<Vec<String>> {
        let mut order: Vec<String> = Vec::new();
        let mut groups: HashMap<String, Vec<String>> = HashMap::new();

        for layer in style.layers() {
            let Some(key) = layer.filter.as_ref().and_then(|f| canonical_json(f)) else {
                continue;
            };
            let entry = groups.entry(key.clone()).or_default();
            if entry.is_empty() {
                order.push(key);
            }
            entry.push(layer.id().to_string());
        }

        order
            .into_iter()
            .filter_map(|key| groups.remove(&key))
            .filter(|ids| ids.len() > 1)
            .collect()
    }
}

impl OptimizationPass for ConsolidateFilters {
    fn id(&self) -> &str {
        PassName::ConsolidateFilters.as_str()
    }
    fn description(&self) -> &str {
        "Find layers with identical filters that could be merged"
    }

    fn apply(&self, style: &mut StyleDocument) -> usize {
        Self::groups(style).len()
    }
}

/// Get all built-in passes, in default order.
pub fn default_passes() -> Vec<Box<dyn OptimizationPass>> {
    PassName::ALL.iter().map(PassName::pass).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn style(value: Value) -> StyleDocument {
        StyleDocument::from_value(value).unwrap()
    }

    fn expr(value: Value) -> Expression {
        Expression::from_value(value)
    }

    // ==================== PassName tests ====================

    #[test]
    fn test_pass_name_round_trip() {
        for name in PassName::ALL {
            assert_eq!(name.as_str().parse::<PassName>().unwrap(), name);
            assert_eq!(name.pass().id(), name.as_str());
        }
    }

    #[test]
    fn test_unknown_pass_name() {
        let err = "minify".parse::<PassName>().unwrap_err();
        assert!(err.message.contains("minify"));
        assert!(err.message.contains("remove-unused-sources"));
    }

    // ==================== simplify tests ====================

    #[test]
    fn test_simplify_identities() {
        assert_eq!(simplify_expression(expr(json!(["all", true]))), expr(json!(true)));
        assert_eq!(simplify_expression(expr(json!(["any", false]))), expr(json!(false)));
        assert_eq!(simplify_expression(expr(json!(["!", false]))), expr(json!(true)));
        assert_eq!(simplify_expression(expr(json!(["!", true]))), expr(json!(false)));
    }

    #[test]
    fn test_simplify_double_negation() {
        assert_eq!(
            simplify_expression(expr(json!(["!", ["!", false]]))),
            expr(json!(false))
        );
        assert_eq!(
            simplify_expression(expr(json!(["!", ["!", ["!", false]]]))),
            expr(json!(true))
        );
    }

    #[test]
    fn test_simplify_nested_fold_enables_parent() {
        assert_eq!(
            simplify_expression(expr(json!(["all", ["!", false]]))),
            expr(json!(true))
        );
    }

    #[test]
    fn test_simplify_leaves_other_forms() {
        for value in [
            json!(["all", true, true]),
            json!(["all", false]),
            json!(["any", true]),
            json!(["all"]),
            json!(["==", ["get", "a"], true]),
            json!(["!", ["get", "a"]]),
        ] {
            assert_eq!(simplify_expression(expr(value.clone())), expr(value));
        }
    }

    #[test]
    fn test_simplify_pass_counts_changed_fields() {
        let mut doc = style(json!({
            "layers": [{
                "id": "x",
                "type": "fill",
                "filter": ["all", ["!", false]],
                "paint": {
                    "fill-color": ["case", ["any", false], "#f00", "#0f0"],
                    "fill-opacity": 1
                }
            }]
        }));
        assert_eq!(SimplifyExpressions.apply(&mut doc), 2);
        let layer = &doc.layers()[0];
        assert_eq!(layer.filter, Some(expr(json!(true))));
        let paint = layer.paint.as_ref().unwrap();
        assert_eq!(paint["fill-color"], expr(json!(["case", false, "#f00", "#0f0"])));
        assert_eq!(SimplifyExpressions.apply(&mut doc), 0);
    }

    // ==================== source / layer passes ====================

    #[test]
    fn test_remove_unused_sources() {
        let mut doc = style(json!({
            "sources": {"a": {"type": "geojson"}, "b": {"type": "geojson"}},
            "layers": [{"id": "l", "type": "fill", "source": "a"}]
        }));
        assert_eq!(RemoveUnusedSources.apply(&mut doc), 1);
        assert!(doc.source("a").is_some());
        assert!(doc.source("b").is_none());
        assert_eq!(RemoveUnusedSources.apply(&mut doc), 0);
    }

    #[test]
    fn test_remove_unused_sources_without_sources() {
        let mut doc = style(json!({"layers": []}));
        assert_eq!(RemoveUnusedSources.apply(&mut doc), 0);
    }

    #[test]
    fn test_remove_duplicate_layers_keeps_first() {
        let mut doc = style(json!({
            "layers": [
                {"id": "a", "type": "fill", "paint": {"fill-color": "#000"}},
                {"id": "b", "type": "line", "paint": {"line-color": "#000"}},
                {"id": "c", "type": "fill", "paint": {"fill-color": "#000"}},
                {"id": "d", "type": "line", "paint": {"line-color": "#000"}}
            ]
        }));
        assert_eq!(RemoveDuplicateLayers.apply(&mut doc), 2);
        let ids: Vec<_> = doc.layers().iter().map(LayerSpec::id).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_duplicate_detection_is_order_sensitive() {
        let mut doc = style(json!({
            "layers": [
                {"id": "a", "type": "fill", "paint": {"fill-color": "#000", "fill-opacity": 1}},
                {"id": "b", "type": "fill", "paint": {"fill-opacity": 1, "fill-color": "#000"}}
            ]
        }));
        assert_eq!(RemoveDuplicateLayers.apply(&mut doc), 0);
    }

    #[test]
    fn test_remove_empty_layers() {
        let mut doc = style(json!({
            "layers": [
                {"id": "bg", "type": "background"},
                {"id": "e1", "type": "fill"},
                {"id": "e2", "type": "fill", "paint": {}, "layout": {}},
                {"id": "ok", "type": "fill", "layout": {"visibility": "visible"}}
            ]
        }));
        assert_eq!(RemoveEmptyLayers.apply(&mut doc), 2);
        let ids: Vec<_> = doc.layers().iter().map(LayerSpec::id).collect();
        assert_eq!(ids, vec!["bg", "ok"]);
    }

    // ==================== consolidate-filters ====================

    #[test]
    fn test_consolidate_filters_reports_groups() {
        let mut doc = style(json!({
            "layers": [
                {"id": "a", "type": "fill", "filter": ["==", "class", "park"]},
                {"id": "b", "type": "line", "filter": ["==", "class", "park"]},
                {"id": "c", "type": "line", "filter": ["has", "name"]},
                {"id": "d", "type": "symbol", "filter": ["has", "name"]},
                {"id": "e", "type": "symbol", "filter": ["has", "ref"]},
                {"id": "f", "type": "symbol"}
            ]
        }));
        let before = doc.clone();
        assert_eq!(ConsolidateFilters.apply(&mut doc), 2);
        assert_eq!(doc, before);
        assert_eq!(
            ConsolidateFilters::groups(&doc),
            vec![vec!["a".to_string(), "b".to_string()], vec!["c".to_string(), "d".to_string()]]
        );
    }

    #[test]
    fn test_consolidate_filters_key_order_matters() {
        let mut doc = style(json!({
            "layers": [
                {"id": "a", "type": "fill", "filter": ["within", {"type": "Polygon", "coordinates": []}]},
                {"id": "b", "type": "fill", "filter": ["within", {"coordinates": [], "type": "Polygon"}]}
            ]
        }));
        assert_eq!(ConsolidateFilters.apply(&mut doc), 0);
    }

    #[test]
    fn test_default_passes_order() {
        let ids: Vec<String> = default_passes().iter().map(|p| p.id().to_string()).collect();
        assert_eq!(
            ids,
            vec![
                "remove-unused-sources",
                "remove-duplicate-layers",
                "simplify-expressions",
                "remove-empty-layers",
                "consolidate-filters"
            ]
        );
    }
}
