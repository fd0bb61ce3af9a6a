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

//! Error context helpers.
//!
//! ```rust
//! use mapstyle::{optimize_style, StyleResultExt};
//!
//! let err = optimize_style("{\"version\": 8", None)
//!     .context("while optimizing streets.json")
//!     .unwrap_err();
//! assert!(err.message.starts_with("while optimizing streets.json: "));
//! ```

use crate::{StyleError, StyleResult};
use std::fmt;

/// Extension methods for [`StyleResult`].
pub trait StyleResultExt<T> {
    /// Prefix the error message with `context`. The error kind and path are
    /// kept as they were.
    fn context<C>(self, context: C) -> StyleResult<T>
    where
        C: fmt::Display;

    /// Like [`context`](StyleResultExt::context), evaluating the message only
    /// on error.
    fn with_context<C, F>(self, f: F) -> StyleResult<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C;
}

impl<T> StyleResultExt<T> for Result<T, StyleError> {
    fn context<C>(self, context: C) -> StyleResult<T>
    where
        C: fmt::Display,
    {
        self.map_err(|err| prefix(err, context))
    }

    fn with_context<C, F>(self, f: F) -> StyleResult<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|err| prefix(err, f()))
    }
}

fn prefix(mut err: StyleError, context: impl fmt::Display) -> StyleError {
    err.message = format!("{}: {}", context, err.message);
    err
}
