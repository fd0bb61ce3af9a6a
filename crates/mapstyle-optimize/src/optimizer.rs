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

//! Optimizer driver

use crate::passes::{OptimizationPass, PassName};
use mapstyle_core::{JsonInput, StyleDocument, StyleError, StyleResult};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Which passes to run, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizeConfig {
    pub passes: Vec<PassName>,
}

impl Default for OptimizeConfig {
    fn default() -> Self {
        Self {
            passes: PassName::ALL.to_vec(),
        }
    }
}

impl OptimizeConfig {
    /// Build a config from pass names; an empty list means the default order.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> StyleResult<Self> {
        if names.is_empty() {
            return Ok(Self::default());
        }
        let passes = names
            .iter()
            .map(|name| name.as_ref().parse())
            .collect::<StyleResult<Vec<PassName>>>()?;
        Ok(Self { passes })
    }
}

/// One pass's outcome. Emitted for every pass that ran, even with `count == 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptimizationRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub count: usize,
}

/// Size and count comparison between input and output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationSummary {
    /// Serialized byte length of the input.
    pub original_size: usize,
    /// Serialized byte length of the output.
    pub optimized_size: usize,
    pub size_reduction: i64,
    /// Percentage of `original_size`, rounded to one decimal.
    pub percent_reduction: f64,
    pub original_layers: usize,
    pub optimized_layers: usize,
    pub original_sources: usize,
    pub optimized_sources: usize,
    /// Sum of all record counts.
    pub total_optimizations: usize,
}

/// Output of [`Optimizer::run`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    pub optimized_style: Value,
    pub optimizations: Vec<OptimizationRecord>,
    pub summary: OptimizationSummary,
}

impl OptimizationResult {
    /// Count reported by the named pass, if it ran.
    pub fn count(&self, pass: PassName) -> Option<usize> {
        self.optimizations
            .iter()
            .find(|r| r.kind == pass.as_str())
            .map(|r| r.count)
    }

    /// Records with a non-zero count.
    pub fn applied(&self) -> impl Iterator<Item = &OptimizationRecord> {
        self.optimizations.iter().filter(|r| r.count > 0)
    }
}

/// Runs an ordered list of passes over a copy of a style.
pub struct Optimizer {
    passes: Vec<Box<dyn OptimizationPass>>,
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::new(&OptimizeConfig::default())
    }
}

impl Optimizer {
    /// Create an optimizer running the configured built-in passes
    pub fn new(config: &OptimizeConfig) -> Self {
        Self {
            passes: config.passes.iter().map(PassName::pass).collect(),
        }
    }

    /// Create an optimizer with custom passes
    pub fn with_passes(passes: Vec<Box<dyn OptimizationPass>>) -> Self {
        Self { passes }
    }

    /// Add a custom pass at the end
    pub fn add_pass(&mut self, pass: Box<dyn OptimizationPass>) {
        self.passes.push(pass);
    }

    /// Optimize a style given as JSON text or a parsed value.
    ///
    /// The input is never modified; passes work on an owned copy. Malformed
    /// JSON text is an `InputParse` error and stops before any pass runs.
    /// Known fields of the wrong shape, and explicit `null`s, are carried
    /// through untouched, and keys keep their original order. A document
    /// that is not an object is returned as-is with every pass reporting
    /// zero changes.
    pub fn run(&self, input: impl Into<JsonInput>) -> StyleResult<OptimizationResult> {
        let original = input.into().into_value()?;
        let original_size = serialized_len(&original)?;

        if !original.is_object() {
            debug!("Style is not an object; no pass applies");
            return Ok(self.unchanged(original, original_size));
        }
        let mut style = StyleDocument::from_value_lenient(original)?;
        let original_layers = style.layer_count();
        let original_sources = style.source_count();

        let mut optimizations = Vec::with_capacity(self.passes.len());
        for pass in &self.passes {
            let count = pass.apply(&mut style);
            debug!("Optimization pass {} made {} change(s)", pass.id(), count);
            optimizations.push(OptimizationRecord {
                kind: pass.id().to_string(),
                description: pass.description().to_string(),
                count,
            });
        }

        let optimized_style = style.to_value()?;
        let optimized_size = serialized_len(&optimized_style)?;
        let size_reduction = original_size as i64 - optimized_size as i64;
        let percent_reduction = if original_size == 0 {
            0.0
        } else {
            (size_reduction as f64 / original_size as f64 * 1000.0).round() / 10.0
        };

        let summary = OptimizationSummary {
            original_size,
            optimized_size,
            size_reduction,
            percent_reduction,
            original_layers,
            optimized_layers: style.layer_count(),
            original_sources,
            optimized_sources: style.source_count(),
            total_optimizations: optimizations.iter().map(|r| r.count).sum(),
        };

        Ok(OptimizationResult {
            optimized_style,
            optimizations,
            summary,
        })
    }

    fn unchanged(&self, style: Value, size: usize) -> OptimizationResult {
        let optimizations = self
            .passes
            .iter()
            .map(|pass| OptimizationRecord {
                kind: pass.id().to_string(),
                description: pass.description().to_string(),
                count: 0,
            })
            .collect();
        OptimizationResult {
            optimized_style: style,
            optimizations,
            summary: OptimizationSummary {
                original_size: size,
                optimized_size: size,
                size_reduction: 0,
                percent_reduction: 0.0,
                original_layers: 0,
                optimized_layers: 0,
                original_sources: 0,
                optimized_sources: 0,
                total_optimizations: 0,
            },
        }
    }
}

fn serialized_len(value: &Value) -> StyleResult<usize> {
    serde_json::to_string(value)
        .map(|s| s.len())
        .map_err(|e| StyleError::internal(format!("Failed to serialize style: {}", e)))
}
