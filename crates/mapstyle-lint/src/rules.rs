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

//! Style rules

use crate::runner::LintContext;
use mapstyle_core::style::STYLE_VERSION;
use mapstyle_core::{
    validate_expression_tree, Diagnostic, DiagnosticKind, ExpressionContext, LayerKind,
    StyleDocument,
};
use std::collections::HashMap;

/// Configuration for a single rule
#[derive(Debug, Clone)]
pub struct RuleConfig {
    /// Whether the rule is enabled
    pub enabled: bool,
    /// Whether to treat warnings as errors
    pub error: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            error: false,
        }
    }
}

/// Trait for style rules
pub trait StyleRule: Send + Sync {
    /// Rule identifier
    fn id(&self) -> &str;

    /// Rule description
    fn description(&self) -> &str;

    /// Run the rule on a style document
    fn check(&self, style: &StyleDocument, context: &LintContext) -> Vec<Diagnostic>;
}

/// Lowest and highest zoom levels a layer may declare.
pub const ZOOM_RANGE: (f64, f64) = (0.0, 24.0);

fn layer_path(index: usize) -> String {
    format!("layers[{}]", index)
}

/// Rule: the style version must be 8
pub struct VersionRule;

impl StyleRule for VersionRule {
    fn id(&self) -> &str {
        "version"
    }
    fn description(&self) -> &str {
        "Style version must be 8"
    }

    fn check(&self, style: &StyleDocument, _context: &LintContext) -> Vec<Diagnostic> {
        match &style.version {
            Some(v) if v.as_f64() == Some(STYLE_VERSION as f64) => vec![],
            Some(v) => vec![Diagnostic::error(
                DiagnosticKind::InvalidVersion,
                format!("Field 'version' must be {}, got {}", STYLE_VERSION, v),
                self.id(),
            )
            .with_path("version")
            .with_suggestion(format!("Set \"version\": {}", STYLE_VERSION))],
            None => vec![Diagnostic::error(
                DiagnosticKind::MissingField,
                format!(
                    "Missing required field 'version' (must be {})",
                    STYLE_VERSION
                ),
                self.id(),
            )
            .with_path("version")],
        }
    }
}

/// Rule: `sources` and `layers` must be present; an empty layer list is a warning
pub struct RequiredFieldsRule;

impl StyleRule for RequiredFieldsRule {
    fn id(&self) -> &str {
        "required-fields"
    }
    fn description(&self) -> &str {
        "Style must declare sources and layers"
    }

    fn check(&self, style: &StyleDocument, _context: &LintContext) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        if style.sources.is_none() {
            diagnostics.push(
                Diagnostic::error(
                    DiagnosticKind::MissingField,
                    "Missing required field 'sources'",
                    self.id(),
                )
                .with_path("sources"),
            );
        }

        match &style.layers {
            None => diagnostics.push(
                Diagnostic::error(
                    DiagnosticKind::MissingField,
                    "Missing required field 'layers'",
                    self.id(),
                )
                .with_path("layers"),
            ),
            Some(layers) if layers.is_empty() => diagnostics.push(
                Diagnostic::warning(
                    DiagnosticKind::EmptyLayers,
                    "Style has no layers and will render nothing",
                    self.id(),
                )
                .with_path("layers"),
            ),
            Some(_) => {}
        }

        diagnostics
    }
}

/// Rule: layer ids must be unique
pub struct DuplicateLayerIdRule;

impl StyleRule for DuplicateLayerIdRule {
    fn id(&self) -> &str {
        "duplicate-layer-id"
    }
    fn description(&self) -> &str {
        "Layer ids must be unique within a style"
    }

    fn check(&self, style: &StyleDocument, _context: &LintContext) -> Vec<Diagnostic> {
        let mut first_seen: HashMap<&str, usize> = HashMap::new();
        let mut diagnostics = Vec::new();

        for (index, layer) in style.layers().iter().enumerate() {
            match first_seen.get(layer.id()) {
                Some(&first) => diagnostics.push(
                    Diagnostic::error(
                        DiagnosticKind::DuplicateLayerId,
                        format!(
                            "Duplicate layer id '{}' at {} (first defined at {})",
                            layer.id(),
                            layer_path(index),
                            layer_path(first)
                        ),
                        self.id(),
                    )
                    .with_path(format!("{}.id", layer_path(index)))
                    .with_suggestion("Give each layer a unique id"),
                ),
                None => {
                    first_seen.insert(layer.id(), index);
                }
            }
        }

        diagnostics
    }
}

/// Rule: non-background layers must reference a declared source
pub struct SourceReferenceRule;

impl StyleRule for SourceReferenceRule {
    fn id(&self) -> &str {
        "source-reference"
    }
    fn description(&self) -> &str {
        "Non-background layers must reference a declared source"
    }

    fn check(&self, style: &StyleDocument, _context: &LintContext) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for (index, layer) in style.layers().iter().enumerate() {
            if layer.is_background() {
                continue;
            }
            let path = format!("{}.source", layer_path(index));
            match &layer.source {
                None => diagnostics.push(
                    Diagnostic::error(
                        DiagnosticKind::DanglingSource,
                        format!(
                            "Layer '{}' of type '{}' has no source",
                            layer.id(),
                            layer.type_name()
                        ),
                        self.id(),
                    )
                    .with_path(path),
                ),
                Some(name) if style.source(name).is_none() => {
                    let declared: Vec<&str> = style
                        .sources
                        .iter()
                        .flat_map(|s| s.keys().map(String::as_str))
                        .collect();
                    let mut diag = Diagnostic::error(
                        DiagnosticKind::DanglingSource,
                        format!("Layer '{}' references undefined source '{}'", layer.id(), name),
                        self.id(),
                    )
                    .with_path(path);
                    if !declared.is_empty() {
                        diag = diag.with_suggestion(format!(
                            "Declared sources: {}",
                            declared.join(", ")
                        ));
                    }
                    diagnostics.push(diag);
                }
                Some(_) => {}
            }
        }

        diagnostics
    }
}

/// Rule: `source-layer` must match the kind of the referenced source
pub struct SourceLayerRule;

impl StyleRule for SourceLayerRule {
    fn id(&self) -> &str {
        "source-layer"
    }
    fn description(&self) -> &str {
        "Vector and raster sources need source-layer; GeoJSON sources forbid it"
    }

    fn check(&self, style: &StyleDocument, _context: &LintContext) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for (index, layer) in style.layers().iter().enumerate() {
            if layer.is_background() {
                continue;
            }
            let Some(source) = layer.source.as_deref().and_then(|name| style.source(name)) else {
                continue;
            };

            if source.requires_source_layer() && layer.source_layer.is_none() {
                diagnostics.push(
                    Diagnostic::error(
                        DiagnosticKind::SourceLayerMismatch,
                        format!(
                            "Layer '{}' uses {} source '{}' but has no 'source-layer'",
                            layer.id(),
                            source.type_name(),
                            layer.source.as_deref().unwrap_or_default()
                        ),
                        self.id(),
                    )
                    .with_path(layer_path(index))
                    .with_suggestion("Add \"source-layer\" naming a layer inside the tileset"),
                );
            } else if source.forbids_source_layer() && layer.source_layer.is_some() {
                diagnostics.push(
                    Diagnostic::error(
                        DiagnosticKind::SourceLayerMismatch,
                        format!(
                            "Layer '{}' uses GeoJSON source '{}' and must not set 'source-layer'",
                            layer.id(),
                            layer.source.as_deref().unwrap_or_default()
                        ),
                        self.id(),
                    )
                    .with_path(format!("{}.source-layer", layer_path(index)))
                    .with_suggestion("Remove \"source-layer\""),
                );
            }
        }

        diagnostics
    }
}

/// Rule: filters and array-valued paint/layout properties must be valid expressions
pub struct LayerExpressionsRule;

impl StyleRule for LayerExpressionsRule {
    fn id(&self) -> &str {
        "layer-expressions"
    }
    fn description(&self) -> &str {
        "Validate layer filters and expression-valued properties"
    }

    fn check(&self, style: &StyleDocument, context: &LintContext) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for (index, layer) in style.layers().iter().enumerate() {
            let message_prefix = format!("Layer '{}': ", layer.id());
            for (field, expr) in layer.expression_fields() {
                let expr_context = if field == "filter" {
                    ExpressionContext::Filter
                } else if field.starts_with("layout.") {
                    ExpressionContext::Layout
                } else {
                    ExpressionContext::Paint
                };
                if expr_context != ExpressionContext::Filter && !expr.is_array() {
                    continue;
                }

                let path_prefix = format!("{}.{}", layer_path(index), field);
                let result = validate_expression_tree(expr, Some(expr_context), &context.limits);
                diagnostics.extend(result.into_diagnostics().into_iter().map(|diag| {
                    diag.with_rule_id(self.id())
                        .with_path_prefix(&path_prefix)
                        .with_message_prefix(&message_prefix)
                }));
            }
        }

        diagnostics
    }
}

/// Rule: zoom bounds must lie in [0, 24] and minzoom must not exceed maxzoom
pub struct ZoomRangeRule;

impl StyleRule for ZoomRangeRule {
    fn id(&self) -> &str {
        "zoom-range"
    }
    fn description(&self) -> &str {
        "Layer zoom bounds must be within 0-24 and ordered"
    }

    fn check(&self, style: &StyleDocument, _context: &LintContext) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let (lowest, highest) = ZOOM_RANGE;

        for (index, layer) in style.layers().iter().enumerate() {
            let (min, max) = layer.zoom_range();

            for (name, value) in [("minzoom", min), ("maxzoom", max)] {
                if let Some(z) = value {
                    if !(lowest..=highest).contains(&z) {
                        diagnostics.push(
                            Diagnostic::warning(
                                DiagnosticKind::InvalidZoomRange,
                                format!(
                                    "Layer '{}' has {} {} outside the range {}-{}",
                                    layer.id(), name, z, lowest, highest
                                ),
                                self.id(),
                            )
                            .with_path(format!("{}.{}", layer_path(index), name)),
                        );
                    }
                }
            }

            if let (Some(min), Some(max)) = (min, max) {
                if min > max {
                    diagnostics.push(
                        Diagnostic::error(
                            DiagnosticKind::InvalidZoomRange,
                            format!(
                                "Layer '{}' has minzoom {} greater than maxzoom {}",
                                layer.id(), min, max
                            ),
                            self.id(),
                        )
                        .with_path(layer_path(index)),
                    );
                }
            }
        }

        diagnostics
    }
}

/// Rule: note layers that would render nothing
pub struct EmptyLayerRule;

impl StyleRule for EmptyLayerRule {
    fn id(&self) -> &str {
        "empty-layer"
    }
    fn description(&self) -> &str {
        "Report non-background layers without paint or layout properties"
    }

    fn check(&self, style: &StyleDocument, _context: &LintContext) -> Vec<Diagnostic> {
        style
            .layers()
            .iter()
            .enumerate()
            .filter(|(_, layer)| !layer.is_background() && !layer.has_properties())
            .map(|(index, layer)| {
                Diagnostic::info(
                    DiagnosticKind::EmptyLayer,
                    format!("Layer '{}' has no paint or layout properties", layer.id()),
                    self.id(),
                )
                .with_path(layer_path(index))
                .with_suggestion("The remove-empty-layers optimization would drop this layer")
            })
            .collect()
    }
}

/// Rule: layer types must be known
pub struct LayerTypeRule;

impl StyleRule for LayerTypeRule {
    fn id(&self) -> &str {
        "layer-type"
    }
    fn description(&self) -> &str {
        "Layer type must be one of the known layer types"
    }

    fn check(&self, style: &StyleDocument, _context: &LintContext) -> Vec<Diagnostic> {
        style
            .layers()
            .iter()
            .enumerate()
            .filter(|(_, layer)| !layer.kind.as_ref().is_some_and(LayerKind::is_known))
            .map(|(index, layer)| {
                Diagnostic::warning(
                    DiagnosticKind::UnknownLayerType,
                    format!(
                        "Layer '{}' has unknown type '{}'",
                        layer.id(),
                        layer.type_name()
                    ),
                    self.id(),
                )
                .with_path(format!("{}.type", layer_path(index)))
                .with_suggestion(format!("Valid types: {}", LayerKind::KNOWN.join(", ")))
            })
            .collect()
    }
}

/// Get all default rules, in reporting order.
pub fn default_rules() -> Vec<Box<dyn StyleRule>> {
    vec![
        Box::new(VersionRule),
        Box::new(RequiredFieldsRule),
        Box::new(DuplicateLayerIdRule),
        Box::new(SourceReferenceRule),
        Box::new(SourceLayerRule),
        Box::new(LayerExpressionsRule),
        Box::new(ZoomRangeRule),
        Box::new(EmptyLayerRule),
        Box::new(LayerTypeRule),
    ]
}
