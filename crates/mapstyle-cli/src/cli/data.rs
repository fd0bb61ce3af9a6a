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

//! GeoJSON and tool adapter commands.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum DataCommands {
    /// Compute the bounding box of a GeoJSON file
    Bbox {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Print the full summary (counts, center, out-of-range positions)
        #[arg(short, long)]
        summary: bool,
    },

    /// Run an agent tool and print its result
    Tool {
        /// Tool name (see `mapstyle tools`)
        #[arg(value_name = "NAME")]
        name: String,

        /// Tool arguments as a JSON object, or @FILE
        #[arg(short, long, value_name = "JSON")]
        args: Option<String>,
    },

    /// List available agent tools
    Tools,
}

impl DataCommands {
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            DataCommands::Bbox { file, summary } => commands::bbox(&file, summary),
            DataCommands::Tool { name, args } => commands::tool(&name, args.as_deref()),
            DataCommands::Tools => commands::list_tools(),
        }
    }
}
