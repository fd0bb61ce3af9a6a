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

//! Mapstyle CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! ## Styles
//!
//! - **validate-expr**: Validate one expression against the operator grammar
//! - **validate-style**: Validate a style document
//! - **optimize**: Run optimization passes and write the optimized style
//!
//! ## GeoJSON
//!
//! - **bbox**: Bounding box or full summary of a GeoJSON document
//!
//! ## Tool Adapter
//!
//! - **tool**: Invoke an agent tool with JSON arguments
//! - **tools**: List the available tools
//!
//! # Limits
//!
//! Input files larger than `MAPSTYLE_MAX_FILE_SIZE` bytes (default 100 MB)
//! are refused before they are read.

pub mod cli;
pub mod commands;
pub mod error;

pub use error::CliError;
