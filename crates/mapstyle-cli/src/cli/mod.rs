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

//! CLI command definitions and argument parsing.
//!
//! - [`style`]: style commands (validate-expr, validate-style, optimize)
//! - [`data`]: GeoJSON and tool adapter commands (bbox, tool, tools)

mod data;
mod style;

use crate::error::CliError;
use clap::Subcommand;

pub use data::DataCommands;
pub use style::StyleCommands;

/// Top-level CLI commands.
///
/// ```no_run
/// use clap::Parser;
/// use mapstyle_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    // Style commands - flattened to appear at top level
    #[command(flatten)]
    Style(StyleCommands),

    // Data commands - flattened to appear at top level
    #[command(flatten)]
    Data(DataCommands),
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` when file I/O fails, the input cannot be decoded,
    /// validation reports failures or the tool adapter rejects a call.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Style(cmd) => cmd.execute(),
            Commands::Data(cmd) => cmd.execute(),
        }
    }
}
