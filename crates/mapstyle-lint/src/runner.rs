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

//! Lint runner

use crate::rules::{default_rules, RuleConfig, StyleRule};
use mapstyle_core::{Diagnostic, DiagnosticKind, Limits, Severity, StyleDocument};
use std::collections::HashMap;

/// Context passed to style rules
#[derive(Debug, Clone, Default)]
pub struct LintContext {
    /// Limits applied to embedded expressions
    pub limits: Limits,
}

impl LintContext {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }
}

/// Maximum number of diagnostics to collect before stopping.
///
/// A style with thousands of broken layers could otherwise produce an
/// unbounded report.
const MAX_DIAGNOSTICS: usize = 10_000;

/// Configuration for the lint runner
#[derive(Debug, Clone)]
pub struct LintConfig {
    /// Rule configurations by rule ID
    pub rules: HashMap<String, RuleConfig>,
    /// Minimum severity to report
    pub min_severity: Severity,
    /// Maximum number of diagnostics to collect (default: 10,000)
    pub max_diagnostics: usize,
    /// Limits for expression validation
    pub limits: Limits,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            rules: HashMap::new(),
            min_severity: Severity::Info,
            max_diagnostics: MAX_DIAGNOSTICS,
            limits: Limits::default(),
        }
    }
}

impl LintConfig {
    /// Validate configuration (checks rule ID lengths and limits).
    pub fn validate(&self) -> Result<(), String> {
        const MAX_RULE_ID_LENGTH: usize = 100;
        const MAX_RULES: usize = 1000;

        if self.rules.len() > MAX_RULES {
            return Err(format!(
                "Too many rule configurations: {} (max: {})",
                self.rules.len(),
                MAX_RULES
            ));
        }

        for id in self.rules.keys() {
            if id.is_empty() {
                return Err("Empty rule ID not allowed".to_string());
            }
            if id.len() > MAX_RULE_ID_LENGTH {
                return Err(format!(
                    "Rule ID too long: {} bytes (max: {})",
                    id.len(),
                    MAX_RULE_ID_LENGTH
                ));
            }
        }

        if self.max_diagnostics == 0 {
            return Err("max_diagnostics must be at least 1".to_string());
        }

        Ok(())
    }

    /// Disable a specific rule
    pub fn disable_rule(&mut self, rule_id: &str) {
        self.rules.insert(
            rule_id.to_string(),
            RuleConfig {
                enabled: false,
                error: false,
            },
        );
    }

    /// Enable a specific rule
    pub fn enable_rule(&mut self, rule_id: &str) {
        self.rules.insert(
            rule_id.to_string(),
            RuleConfig {
                enabled: true,
                error: false,
            },
        );
    }

    /// Set a rule to error level
    pub fn set_rule_error(&mut self, rule_id: &str) {
        self.rules.insert(
            rule_id.to_string(),
            RuleConfig {
                enabled: true,
                error: true,
            },
        );
    }
}

/// Lint runner
pub struct LintRunner {
    config: LintConfig,
    rules: Vec<Box<dyn StyleRule>>,
}

impl LintRunner {
    /// Create a new lint runner with default rules
    pub fn new(config: LintConfig) -> Self {
        Self {
            config,
            rules: default_rules(),
        }
    }

    /// Create a lint runner with custom rules
    pub fn with_rules(config: LintConfig, rules: Vec<Box<dyn StyleRule>>) -> Self {
        Self { config, rules }
    }

    /// Add a custom rule
    pub fn add_rule(&mut self, rule: Box<dyn StyleRule>) {
        self.rules.push(rule);
    }

    /// Ids of the rules this runner will consider.
    pub fn rule_ids(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    /// Run all enabled rules on a style.
    ///
    /// At most `config.max_diagnostics` diagnostics are collected; when the
    /// limit is hit a warning is appended and the remaining rules are skipped.
    /// The result is sorted errors first, keeping rule order within a severity.
    pub fn run(&self, style: &StyleDocument) -> Vec<Diagnostic> {
        let context = LintContext::new(self.config.limits.clone());
        let mut diagnostics = Vec::new();
        let mut limit_exceeded = false;

        for rule in &self.rules {
            if diagnostics.len() >= self.config.max_diagnostics {
                limit_exceeded = true;
                break;
            }

            let rule_config = self
                .config
                .rules
                .get(rule.id())
                .cloned()
                .unwrap_or_default();

            if !rule_config.enabled {
                continue;
            }

            let mut rule_diagnostics = rule.check(style, &context);

            for diag in &mut rule_diagnostics {
                if rule_config.error && diag.severity() == Severity::Warning {
                    diag.escalate_to_error();
                }
            }

            for diag in rule_diagnostics
                .into_iter()
                .filter(|d| d.severity() >= self.config.min_severity)
            {
                if diagnostics.len() >= self.config.max_diagnostics {
                    limit_exceeded = true;
                    break;
                }
                diagnostics.push(diag);
            }

            if limit_exceeded {
                break;
            }
        }

        if limit_exceeded {
            diagnostics.push(Diagnostic::warning(
                DiagnosticKind::Custom("diagnostic-limit-exceeded".to_string()),
                format!(
                    "Diagnostic limit of {} exceeded. Further diagnostics have been suppressed.",
                    self.config.max_diagnostics
                ),
                "lint-runner",
            ));
        }

        // Errors first
        diagnostics.sort_by(|a, b| b.severity().cmp(&a.severity()));

        diagnostics
    }

    /// Check if any errors were found
    pub fn has_errors(&self, diagnostics: &[Diagnostic]) -> bool {
        diagnostics.iter().any(|d| d.severity() == Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn broken_style() -> StyleDocument {
        StyleDocument::from_value(json!({
            "version": 7,
            "sources": {},
            "layers": [
                {"id": "a", "type": "fill", "source": "nope", "paint": {"fill-color": "#000"}},
                {"id": "a", "type": "weird", "source": "nope"}
            ]
        }))
        .unwrap()
    }

    // ==================== LintConfig tests ====================

    #[test]
    fn test_lint_config_default() {
        let config = LintConfig::default();
        assert_eq!(config.min_severity, Severity::Info);
        assert_eq!(config.max_diagnostics, 10_000);
        assert!(config.rules.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_disable_rule() {
        let mut config = LintConfig::default();
        config.disable_rule("version");
        assert!(!config.rules.get("version").unwrap().enabled);
    }

    #[test]
    fn test_enable_rule() {
        let mut config = LintConfig::default();
        config.disable_rule("version");
        config.enable_rule("version");
        assert!(config.rules.get("version").unwrap().enabled);
    }

    #[test]
    fn test_set_rule_error() {
        let mut config = LintConfig::default();
        config.set_rule_error("layer-type");
        let rule = config.rules.get("layer-type").unwrap();
        assert!(rule.enabled);
        assert!(rule.error);
    }

    #[test]
    fn test_validate_rejects_empty_id() {
        let mut config = LintConfig::default();
        config.disable_rule("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_long_id() {
        let mut config = LintConfig::default();
        config.disable_rule(&"x".repeat(101));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_limit() {
        let config = LintConfig {
            max_diagnostics: 0,
            ..LintConfig::default()
        };
        assert!(config.validate().is_err());
    }

    // ==================== LintRunner tests ====================

    #[test]
    fn test_runner_sorts_errors_first() {
        let runner = LintRunner::new(LintConfig::default());
        let diags = runner.run(&broken_style());
        assert!(runner.has_errors(&diags));
        let first_non_error = diags
            .iter()
            .position(|d| d.severity() != Severity::Error)
            .unwrap_or(diags.len());
        assert!(diags[first_non_error..]
            .iter()
            .all(|d| d.severity() != Severity::Error));
    }

    #[test]
    fn test_runner_disabled_rule() {
        let mut config = LintConfig::default();
        config.disable_rule("version");
        let runner = LintRunner::new(config);
        let diags = runner.run(&broken_style());
        assert!(diags.iter().all(|d| d.rule_id() != "version"));
    }

    #[test]
    fn test_runner_escalates_warnings() {
        let mut config = LintConfig::default();
        config.set_rule_error("layer-type");
        let runner = LintRunner::new(config);
        let diags = runner.run(&broken_style());
        let layer_type: Vec<_> = diags.iter().filter(|d| d.rule_id() == "layer-type").collect();
        assert_eq!(layer_type.len(), 1);
        assert_eq!(layer_type[0].severity(), Severity::Error);
    }

    #[test]
    fn test_runner_min_severity() {
        let config = LintConfig {
            min_severity: Severity::Error,
            ..LintConfig::default()
        };
        let runner = LintRunner::new(config);
        let diags = runner.run(&broken_style());
        assert!(diags.iter().all(|d| d.severity() == Severity::Error));
    }

    #[test]
    fn test_runner_diagnostic_limit() {
        let config = LintConfig {
            max_diagnostics: 2,
            ..LintConfig::default()
        };
        let runner = LintRunner::new(config);
        let diags = runner.run(&broken_style());
        assert_eq!(diags.len(), 3);
        assert!(diags
            .iter()
            .any(|d| d.rule_id() == "lint-runner" && d.severity() == Severity::Warning));
    }

    #[test]
    fn test_runner_custom_rule() {
        struct NoNameRule;
        impl StyleRule for NoNameRule {
            fn id(&self) -> &str {
                "style-name"
            }
            fn description(&self) -> &str {
                "Styles should be named"
            }
            fn check(&self, style: &StyleDocument, _context: &LintContext) -> Vec<Diagnostic> {
                if style.name.is_none() {
                    vec![Diagnostic::info(
                        DiagnosticKind::Custom("unnamed".to_string()),
                        "Style has no name",
                        self.id(),
                    )]
                } else {
                    vec![]
                }
            }
        }

        let mut runner = LintRunner::with_rules(LintConfig::default(), vec![]);
        runner.add_rule(Box::new(NoNameRule));
        assert_eq!(runner.rule_ids(), vec!["style-name"]);
        let diags = runner.run(&broken_style());
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].kind().code(), "unnamed");
    }
}
