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

//! Integration tests for mapstyle-optimize.

use mapstyle_optimize::{optimize, PassName};
use mapstyle_test::fixtures;
use proptest::prelude::*;
use serde_json::{json, Value};

// =============================================================================
// Individual passes through `optimize`
// =============================================================================

#[test]
fn test_unused_source_removed_others_untouched() {
    let input = json!({
        "version": 8,
        "sources": {
            "a": {"type": "geojson", "data": {"type": "FeatureCollection", "features": []}},
            "b": {"type": "vector", "url": "mapbox://b"}
        },
        "layers": [
            {"id": "fill", "type": "fill", "source": "a", "paint": {"fill-color": "#123456"}}
        ]
    });
    let result = optimize(&input, None).unwrap();
    assert_eq!(result.count(PassName::RemoveUnusedSources), Some(1));

    let out = &result.optimized_style;
    assert!(out["sources"].get("b").is_none());
    assert_eq!(out["sources"]["a"], input["sources"]["a"]);
    assert_eq!(out["layers"], input["layers"]);
}

#[test]
fn test_round_trip_preserves_nulls_and_order() {
    let input = json!({
        "version": 8,
        "name": null,
        "center": [0, 0],
        "sources": {"a": {"type": "geojson", "data": {"type": "FeatureCollection", "features": []}}},
        "layers": [
            {"id": "l", "type": "fill", "source": "a", "filter": null, "paint": {"fill-color": "#000"}}
        ]
    });
    for passes in [None, Some(&[PassName::ConsolidateFilters][..])] {
        let result = optimize(&input, passes).unwrap();
        assert_eq!(
            serde_json::to_string(&result.optimized_style).unwrap(),
            serde_json::to_string(&input).unwrap()
        );
        assert_eq!(result.summary.size_reduction, 0);
    }
}

#[test]
fn test_misshaped_known_fields_do_not_stop_passes() {
    let input = json!({
        "version": 8,
        "sources": {"used": {"type": "geojson"}, "unused": {"type": "geojson"}},
        "layers": [
            {"id": "untyped", "source": "used", "paint": {"fill-color": "#000"}},
            {"id": "stringzoom", "type": "fill", "source": "used", "minzoom": "5", "layout": {"visibility": "visible"}}
        ]
    });
    let result = optimize(&input, None).unwrap();
    assert_eq!(result.count(PassName::RemoveUnusedSources), Some(1));
    assert_eq!(result.optimized_style["layers"], input["layers"]);
}

#[test]
fn test_duplicates_keep_first_and_order() {
    let input = json!({
        "version": 8,
        "sources": {},
        "layers": [
            {"id": "one", "type": "background", "paint": {"background-color": "#000"}},
            {"id": "two", "type": "background", "paint": {"background-color": "#fff"}},
            {"id": "one-again", "type": "background", "paint": {"background-color": "#000"}},
            {"id": "three", "type": "background", "paint": {"background-color": "#888"}}
        ]
    });
    let result = optimize(&input, Some(&[PassName::RemoveDuplicateLayers][..])).unwrap();
    assert_eq!(result.count(PassName::RemoveDuplicateLayers), Some(1));
    let ids: Vec<&str> = result.optimized_style["layers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["one", "two", "three"]);
}

#[test]
fn test_simplify_filters() {
    let cases = [
        (json!(["all", true]), json!(true)),
        (json!(["any", false]), json!(false)),
        (json!(["!", false]), json!(true)),
        (json!(["!", true]), json!(false)),
    ];
    for (filter, expected) in cases {
        let input = json!({
            "version": 8,
            "sources": {},
            "layers": [{"id": "bg", "type": "background", "filter": filter, "paint": {"background-color": "#000"}}]
        });
        let result = optimize(&input, Some(&[PassName::SimplifyExpressions][..])).unwrap();
        assert_eq!(result.count(PassName::SimplifyExpressions), Some(1));
        assert_eq!(result.optimized_style["layers"][0]["filter"], expected);
    }
}

#[test]
fn test_empty_paint_object_removed() {
    let input = json!({
        "version": 8,
        "sources": {"g": {"type": "geojson", "data": {}}},
        "layers": [
            {"id": "placeholder", "type": "fill", "source": "g", "paint": {}},
            {"id": "real", "type": "fill", "source": "g", "paint": {"fill-color": "#000"}}
        ]
    });
    let result = optimize(&input, None).unwrap();
    assert_eq!(result.count(PassName::RemoveEmptyLayers), Some(1));
    assert_eq!(result.summary.optimized_layers, 1);
}

#[test]
fn test_consolidate_filters_does_not_mutate() {
    let input = json!({
        "version": 8,
        "sources": {},
        "layers": [
            {"id": "a", "type": "background", "filter": ["has", "x"], "paint": {"background-color": "#000"}},
            {"id": "b", "type": "background", "filter": ["has", "x"], "paint": {"background-color": "#fff"}}
        ]
    });
    let result = optimize(&input, Some(&[PassName::ConsolidateFilters][..])).unwrap();
    assert_eq!(result.count(PassName::ConsolidateFilters), Some(1));
    assert_eq!(result.optimized_style, input);
}

// =============================================================================
// Whole-pipeline behavior
// =============================================================================

#[test]
fn test_optimizable_fixture() {
    let result = optimize(fixtures::optimizable_style(), None).unwrap();
    assert_eq!(result.count(PassName::RemoveUnusedSources), Some(1));
    assert_eq!(result.count(PassName::RemoveDuplicateLayers), Some(1));
    // "a" keeps ["all", true]; "b" has ["!", false].
    assert_eq!(result.count(PassName::SimplifyExpressions), Some(2));
    assert_eq!(result.count(PassName::RemoveEmptyLayers), Some(1));
    assert_eq!(result.count(PassName::ConsolidateFilters), Some(1));
    assert_eq!(result.summary.total_optimizations, 6);
    assert_eq!(result.summary.original_layers, 5);
    assert_eq!(result.summary.optimized_layers, 3);
}

#[test]
fn test_idempotent_on_optimized_output() {
    let first = optimize(fixtures::optimizable_style(), None).unwrap();
    let second = optimize(&first.optimized_style, None).unwrap();
    for pass in [
        PassName::RemoveDuplicateLayers,
        PassName::RemoveUnusedSources,
        PassName::RemoveEmptyLayers,
        PassName::SimplifyExpressions,
    ] {
        assert_eq!(second.count(pass), Some(0), "{}", pass);
    }
    assert_eq!(second.optimized_style, first.optimized_style);
}

#[test]
fn test_unknown_fields_survive() {
    let input = json!({
        "version": 8,
        "sources": {},
        "terrain": {"exaggeration": 1.5},
        "layers": [
            {"id": "bg", "type": "background", "paint": {"background-color": "#000"}, "x-note": "keep"}
        ]
    });
    let result = optimize(&input, None).unwrap();
    assert_eq!(result.optimized_style["terrain"], json!({"exaggeration": 1.5}));
    assert_eq!(result.optimized_style["layers"][0]["x-note"], "keep");
}

#[test]
fn test_text_input_parse_error() {
    assert!(optimize("not json", None).is_err());
}

// =============================================================================
// Properties
// =============================================================================

fn layer_strategy() -> impl Strategy<Value = Value> {
    (
        0usize..4,
        prop_oneof![Just("fill"), Just("line"), Just("background")],
        prop::option::of(0usize..3),
        prop_oneof![
            Just(None),
            Just(Some(json!(["all", true]))),
            Just(Some(json!(["!", ["!", false]]))),
            Just(Some(json!(["has", "name"]))),
        ],
        any::<bool>(),
    )
        .prop_map(|(color, kind, source, filter, with_paint)| {
            let mut layer = json!({"id": "", "type": kind});
            // Sources are only attached to layers that survive empty-layer
            // removal, which runs after unused-source removal.
            if let (Some(src), true) = (source, with_paint) {
                layer["source"] = json!(format!("s{}", src));
            }
            if let Some(filter) = filter {
                layer["filter"] = filter;
            }
            if with_paint {
                layer["paint"] = json!({"fill-color": format!("#00000{}", color)});
            }
            layer
        })
}

fn style_strategy() -> impl Strategy<Value = Value> {
    prop::collection::vec(layer_strategy(), 0..8).prop_map(|layers| {
        let layers: Vec<Value> = layers
            .into_iter()
            .enumerate()
            .map(|(i, mut layer)| {
                layer["id"] = json!(format!("layer-{}", i));
                layer
            })
            .collect();
        json!({
            "version": 8,
            "sources": {
                "s0": {"type": "geojson", "data": {}},
                "s1": {"type": "geojson", "data": {}},
                "s2": {"type": "geojson", "data": {}},
                "s3": {"type": "geojson", "data": {}}
            },
            "layers": layers
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: removal passes find nothing on their own output.
    #[test]
    fn prop_removal_passes_idempotent(style in style_strategy()) {
        let first = optimize(&style, None).unwrap();
        let second = optimize(&first.optimized_style, None).unwrap();
        prop_assert_eq!(second.count(PassName::RemoveDuplicateLayers), Some(0));
        prop_assert_eq!(second.count(PassName::RemoveUnusedSources), Some(0));
        prop_assert_eq!(second.count(PassName::RemoveEmptyLayers), Some(0));
        prop_assert_eq!(second.count(PassName::SimplifyExpressions), Some(0));
    }

    /// Property: optimization never adds layers or sources.
    #[test]
    fn prop_never_grows(style in style_strategy()) {
        let result = optimize(&style, None).unwrap();
        prop_assert!(result.summary.optimized_layers <= result.summary.original_layers);
        prop_assert!(result.summary.optimized_sources <= result.summary.original_sources);
    }

    /// Property: every pass is reported, in the default order.
    #[test]
    fn prop_all_records_present(style in style_strategy()) {
        let result = optimize(&style, None).unwrap();
        let kinds: Vec<&str> = result.optimizations.iter().map(|r| r.kind.as_str()).collect();
        let expected: Vec<&str> = PassName::ALL.iter().map(PassName::as_str).collect();
        prop_assert_eq!(kinds, expected);
    }
}
