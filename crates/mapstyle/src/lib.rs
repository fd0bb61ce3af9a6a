//! # Mapstyle - Map Style & Expression Toolkit
//!
//! Validation, optimization and analysis for map style documents and the
//! expressions and GeoJSON they carry. Every entry point is a pure function
//! taking either JSON text or an already-parsed `serde_json::Value`.
//!
//! ## Quick Start
//!
//! ```rust
//! use mapstyle::{bounding_box, optimize_style, validate_expression, validate_style};
//! use serde_json::json;
//!
//! let result = validate_expression(json!(["get", "name"]), None);
//! assert!(result.valid);
//!
//! let style = json!({
//!     "version": 8,
//!     "sources": {"a": {"type": "geojson", "data": {"type": "FeatureCollection", "features": []}}},
//!     "layers": [{"id": "fill", "type": "fill", "source": "a", "paint": {"fill-color": "#000"}}]
//! });
//! assert!(validate_style(&style).valid);
//! assert_eq!(optimize_style(&style, None).unwrap().summary.total_optimizations, 0);
//!
//! let bbox = bounding_box(r#"{"type": "Point", "coordinates": [-122.4194, 37.7749]}"#).unwrap();
//! assert_eq!(bbox, [-122.4194, 37.7749, -122.4194, 37.7749]);
//! ```
//!
//! ## Modules
//!
//! - [`expression`]: Expression AST and validator
//! - [`lint`](mod@lint): Rule-based style validation
//! - [`optimize`](mod@optimize): Optimization passes
//! - [`geojson`]: Bounding box and summary analysis

pub use mapstyle_core::{
    Diagnostic, DiagnosticKind, JsonInput, Limits, Severity, StyleDocument, StyleError,
    StyleErrorKind, StyleResult,
};
pub use mapstyle_geojson::{GeoJsonError, GeoJsonResult};
pub use mapstyle_lint::StyleValidationResult;
pub use mapstyle_optimize::{OptimizationResult, PassName};

mod error_ext;
pub use error_ext::StyleResultExt;

pub mod expression {
    //! Expression AST and validation
    pub use mapstyle_core::{
        validate_expression_tree, validate_expression_with_limits, Expression, ExpressionContext,
        ExpressionMetadata, ValidationResult, ValueType,
    };
}

pub mod lint {
    //! Style validation rules
    pub use mapstyle_lint::{
        default_rules, validate_style_with_config, LintConfig, LintContext, LintRunner,
        RuleConfig, StyleRule, StyleSummary,
    };
}

pub mod optimize {
    //! Optimization passes
    pub use mapstyle_optimize::{
        default_passes, simplify_expression, OptimizationPass, OptimizationRecord,
        OptimizationSummary, OptimizeConfig, Optimizer,
    };
}

pub mod geojson {
    //! GeoJSON analysis
    pub use mapstyle_geojson::{
        analyze, Accumulator, BoundingBox, Feature, GeoJson, GeoJsonSummary, Geometry,
    };
}

/// Validate one expression against the operator grammar.
///
/// Malformed JSON text yields a result with a single `input-parse` error.
///
/// # Examples
///
/// ```rust
/// use mapstyle::validate_expression;
/// use serde_json::json;
///
/// let result = validate_expression(json!(["rgba", 1, 2, 3]), None);
/// assert_eq!(result.errors.len(), 1);
/// assert!(result.errors[0].message().contains("requires at least 4"));
/// ```
#[inline]
pub fn validate_expression(
    input: impl Into<JsonInput>,
    context: Option<expression::ExpressionContext>,
) -> expression::ValidationResult {
    mapstyle_core::validate_expression(input, context)
}

/// Validate a style document with the default rule set.
#[inline]
pub fn validate_style(input: impl Into<JsonInput>) -> StyleValidationResult {
    mapstyle_lint::validate_style(input)
}

/// Optimize a style document with the given passes, in order, or every pass
/// in the default order when `passes` is `None` or empty.
///
/// The input is not modified. Unrecognised keys, explicit `null`s and known
/// fields of the wrong shape are carried through in their original order.
///
/// # Errors
///
/// `InputParse` for malformed JSON text; no pass runs in that case.
#[inline]
pub fn optimize_style(
    input: impl Into<JsonInput>,
    passes: Option<&[PassName]>,
) -> StyleResult<OptimizationResult> {
    mapstyle_optimize::optimize(input, passes)
}

/// Compute `[minX, minY, maxX, maxY]` over every position in a GeoJSON
/// document.
///
/// # Errors
///
/// [`GeoJsonError::NoCoordinates`] when no position was visited; never an
/// infinite box.
#[inline]
pub fn bounding_box(input: impl Into<JsonInput>) -> GeoJsonResult<[f64; 4]> {
    mapstyle_geojson::bounding_box(input).map(|bbox| bbox.to_array())
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
