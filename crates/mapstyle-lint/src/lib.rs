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

//! Style Validation
//!
//! Rule-based structural validation of map style documents.
//!
//! ## Quick Start
//!
//! ```rust
//! use mapstyle_lint::validate_style;
//! use serde_json::json;
//!
//! let result = validate_style(json!({
//!     "version": 8,
//!     "sources": {"streets": {"type": "vector", "url": "mapbox://mapbox.mapbox-streets-v8"}},
//!     "layers": [{
//!         "id": "roads",
//!         "type": "line",
//!         "source": "streets",
//!         "source-layer": "road",
//!         "paint": {"line-color": "#888"}
//!     }]
//! }));
//! assert!(result.valid);
//! assert_eq!(result.summary.layer_count, 1);
//! ```
//!
//! ## Custom Configuration
//!
//! ```rust
//! use mapstyle_lint::{validate_style_with_config, LintConfig};
//! use mapstyle_core::Severity;
//! use serde_json::json;
//!
//! let mut config = LintConfig::default();
//! config.disable_rule("empty-layer");
//! config.set_rule_error("zoom-range");
//! config.min_severity = Severity::Warning;
//!
//! let result = validate_style_with_config(json!({"version": 8, "sources": {}, "layers": []}), config);
//! assert!(result.valid);
//! assert_eq!(result.warnings.len(), 1);
//! ```
//!
//! ## Custom Rules
//!
//! ```rust
//! use mapstyle_lint::{LintConfig, LintContext, LintRunner, StyleRule};
//! use mapstyle_core::{Diagnostic, StyleDocument};
//!
//! struct MyCustomRule;
//!
//! impl StyleRule for MyCustomRule {
//!     fn id(&self) -> &str { "my-custom-rule" }
//!     fn description(&self) -> &str { "Custom validation logic" }
//!     fn check(&self, style: &StyleDocument, context: &LintContext) -> Vec<Diagnostic> {
//!         vec![]
//!     }
//! }
//!
//! let mut runner = LintRunner::new(LintConfig::default());
//! runner.add_rule(Box::new(MyCustomRule));
//! ```

mod report;
mod rules;
mod runner;

pub use report::{validate_style, validate_style_with_config, StyleSummary, StyleValidationResult};
pub use rules::{default_rules, RuleConfig, StyleRule, ZOOM_RANGE};
pub use runner::{LintConfig, LintContext, LintRunner};

use mapstyle_core::{Diagnostic, StyleDocument};

/// Run all default rules on a decoded style
pub fn lint(style: &StyleDocument) -> Vec<Diagnostic> {
    let runner = LintRunner::new(LintConfig::default());
    runner.run(style)
}

/// Run rules with custom configuration
pub fn lint_with_config(style: &StyleDocument, config: LintConfig) -> Vec<Diagnostic> {
    let runner = LintRunner::new(config);
    runner.run(style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lint_valid_style() {
        let style = StyleDocument::from_value(json!({
            "version": 8,
            "sources": {},
            "layers": [{"id": "bg", "type": "background", "paint": {"background-color": "#fff"}}]
        }))
        .unwrap();
        assert!(lint(&style).is_empty());
    }

    #[test]
    fn test_lint_with_config_disables() {
        let style = StyleDocument::from_value(json!({"version": 7, "sources": {}, "layers": []}))
            .unwrap();
        let mut config = LintConfig::default();
        config.disable_rule("version");
        config.disable_rule("required-fields");
        assert!(lint_with_config(&style, config).is_empty());
    }
}
