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

//! Tool commands - run the agent tool adapter from the shell

use super::read_file;
use crate::error::CliError;
use colored::Colorize;
use mapstyle_mcp::{execute_tool, get_tools};
use serde_json::Value;

/// Invoke a tool by name and print the text of its result.
///
/// `args` is a JSON object, or `@path` to read it from a file.
///
/// # Errors
///
/// Returns [`CliError::InvalidArgument`] when `args` is not JSON and
/// [`CliError::Tool`] when the adapter rejects the call or the result is
/// flagged as an error. The result text is printed in both success and
/// error-result cases.
pub fn tool(name: &str, args: Option<&str>) -> Result<(), CliError> {
    let arguments = args
        .map(|raw| {
            let text = match raw.strip_prefix('@') {
                Some(path) => read_file(path)?,
                None => raw.to_string(),
            };
            serde_json::from_str::<Value>(&text)
                .map_err(|e| CliError::InvalidArgument(format!("--args is not valid JSON: {}", e)))
        })
        .transpose()?;

    let result = execute_tool(name, arguments)?;
    if let Some(text) = result.first_text() {
        println!("{}", text);
    }

    if result.is_error() {
        return Err(CliError::Tool(format!("{} returned an error result", name)));
    }
    Ok(())
}

/// Print every available tool with its description.
pub fn list_tools() -> Result<(), CliError> {
    for tool in get_tools() {
        println!("{}", tool.name.bold());
        println!("    {}", tool.description);
    }
    Ok(())
}
