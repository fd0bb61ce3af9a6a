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

//! Style Optimization
//!
//! Structural rewrites of map style documents, run as an ordered list of
//! passes over a copy of the input:
//!
//! 1. `remove-unused-sources`
//! 2. `remove-duplicate-layers`
//! 3. `simplify-expressions`
//! 4. `remove-empty-layers`
//! 5. `consolidate-filters` (report only)
//!
//! ## Quick Start
//!
//! ```rust
//! use mapstyle_optimize::{optimize, PassName};
//! use serde_json::json;
//!
//! let style = json!({
//!     "version": 8,
//!     "sources": {
//!         "a": {"type": "geojson", "data": {"type": "FeatureCollection", "features": []}},
//!         "b": {"type": "geojson", "data": {"type": "FeatureCollection", "features": []}}
//!     },
//!     "layers": [{"id": "fill", "type": "fill", "source": "a", "paint": {"fill-color": "#000"}}]
//! });
//!
//! let result = optimize(&style, None).unwrap();
//! assert_eq!(result.count(PassName::RemoveUnusedSources), Some(1));
//! assert!(result.optimized_style["sources"].get("b").is_none());
//! ```
//!
//! ## Custom Passes
//!
//! ```rust
//! use mapstyle_optimize::{OptimizationPass, Optimizer};
//! use mapstyle_core::StyleDocument;
//!
//! struct StripName;
//!
//! impl OptimizationPass for StripName {
//!     fn id(&self) -> &str { "strip-name" }
//!     fn description(&self) -> &str { "Remove the style name" }
//!     fn apply(&self, style: &mut StyleDocument) -> usize {
//!         usize::from(style.name.take().is_some())
//!     }
//! }
//!
//! let mut optimizer = Optimizer::default();
//! optimizer.add_pass(Box::new(StripName));
//! ```

mod optimizer;
mod passes;

pub use optimizer::{
    OptimizationRecord, OptimizationResult, OptimizationSummary, OptimizeConfig, Optimizer,
};
pub use passes::{
    default_passes, simplify_expression, simplify_node, ConsolidateFilters, OptimizationPass,
    PassName, RemoveDuplicateLayers, RemoveEmptyLayers, RemoveUnusedSources, SimplifyExpressions,
};

use mapstyle_core::{JsonInput, StyleResult};

/// Optimize a style with the given passes, or all passes in default order
/// when `passes` is `None` or empty.
pub fn optimize(
    input: impl Into<JsonInput>,
    passes: Option<&[PassName]>,
) -> StyleResult<OptimizationResult> {
    let config = match passes {
        Some(passes) if !passes.is_empty() => OptimizeConfig {
            passes: passes.to_vec(),
        },
        _ => OptimizeConfig::default(),
    };
    Optimizer::new(&config).run(input)
}
