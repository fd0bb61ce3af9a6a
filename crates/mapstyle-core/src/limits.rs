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

//! Traversal limits for expression and style analysis.

/// Default nesting depth past which an expression draws a warning.
pub const DEFAULT_MAX_EXPRESSION_DEPTH: usize = 10;

/// Hard bound on recursive traversal depth.
///
/// JSON parsed from text is already bounded by the parser, but values built
/// programmatically are not. Nodes below this depth are not visited.
pub const DEFAULT_MAX_RECURSION_DEPTH: usize = 1000;

/// Configurable limits for expression analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Depth past which a nesting warning is emitted (default: 10).
    pub max_expression_depth: usize,
    /// Depth past which traversal stops (default: 1000).
    pub max_recursion_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_expression_depth: DEFAULT_MAX_EXPRESSION_DEPTH,
            max_recursion_depth: DEFAULT_MAX_RECURSION_DEPTH,
        }
    }
}

impl Limits {
    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_expression_depth: usize::MAX,
            max_recursion_depth: usize::MAX,
        }
    }
}
