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

//! Style document and expression commands.

use crate::commands::{self, OutputFormat};
use crate::error::CliError;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum StyleCommands {
    /// Validate a style expression
    ///
    /// Checks operator names against the expression grammar, argument counts
    /// and nesting depth. Pass the expression as JSON text, or `@FILE` to read
    /// it from a file.
    ValidateExpr {
        /// Expression JSON, or @FILE
        #[arg(value_name = "EXPR")]
        expression: String,

        /// Where the expression is used (style, filter, layout, paint)
        #[arg(short, long)]
        context: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Validate a style document
    ///
    /// Checks version, sources, layer ids, source references, zoom ranges
    /// and every filter and property expression.
    ValidateStyle {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Treat warnings as errors
        #[arg(short = 'W', long)]
        warn_error: bool,
    },

    /// Optimize a style document
    ///
    /// Runs the optimization passes in order and writes the optimized style
    /// as pretty JSON.
    Optimize {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Pass to run (repeatable; defaults to all passes)
        #[arg(short, long = "pass", value_name = "NAME")]
        passes: Vec<String>,

        /// Print the per-pass report to stderr
        #[arg(short, long)]
        report: bool,
    },
}

impl StyleCommands {
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            StyleCommands::ValidateExpr {
                expression,
                context,
                format,
            } => commands::validate_expr(&expression, context.as_deref(), format),
            StyleCommands::ValidateStyle {
                file,
                format,
                warn_error,
            } => commands::validate_style(&file, format, warn_error),
            StyleCommands::Optimize {
                file,
                output,
                passes,
                report,
            } => commands::optimize(&file, output.as_deref(), &passes, report),
        }
    }
}
