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

//! Mapstyle Tool Adapter
//!
//! Exposes the mapstyle engine as agent-callable tools, each with an input
//! schema and an output schema:
//!
//! - **Validate expressions** against the operator grammar
//! - **Validate styles** with per-layer diagnostics
//! - **Optimize styles** with selectable passes
//! - **Analyze GeoJSON** bounding boxes and summaries
//!
//! Arguments holding a document accept either JSON text or a JSON value.
//! Text is size-checked against [`MAX_INPUT_SIZE`] and parsed exactly once;
//! a parse failure comes back as a result with `is_error` set rather than as
//! an [`McpError`].
//!
//! ```rust
//! use mapstyle_mcp::execute_tool;
//! use serde_json::json;
//!
//! let result = execute_tool(
//!     "bounding_box_tool",
//!     Some(json!({"geojson": {"type": "Point", "coordinates": [1.0, 2.0]}})),
//! )
//! .unwrap();
//! assert!(!result.is_error());
//! assert_eq!(result.structured_content.unwrap()["bbox"], json!([1.0, 2.0, 1.0, 2.0]));
//! ```

mod error;
mod protocol;
pub mod tools;

pub use error::{McpError, McpResult};
pub use protocol::*;
pub use tools::{execute_tool, get_tools, MAX_INPUT_SIZE};

/// Adapter version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Adapter name
pub const SERVER_NAME: &str = "mapstyle-mcp";
