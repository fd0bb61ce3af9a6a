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

//! Expression tree.
//!
//! Expressions are built permissively from JSON: any value maps to some
//! [`Expression`], and validity is decided separately by the validator.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use serde_json::{Map, Value};

/// A node of the expression language.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// String, number, boolean or null.
    Literal(Value),
    /// Operator application: `[operator, arg1, arg2, ...]`.
    Call {
        operator: String,
        args: Vec<Expression>,
    },
    /// A bare JSON object. Its values are not interpreted.
    LiteralObject(Map<String, Value>),
    /// An array that does not start with an operator name (empty, or headed
    /// by a non-string). Kept verbatim so it re-serializes unchanged.
    Malformed(Vec<Value>),
}

impl Expression {
    /// Build an expression tree from any JSON value.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Array(items) => {
                let mut items = items.into_iter();
                match items.next() {
                    Some(Value::String(operator)) => Self::Call {
                        operator,
                        args: items.map(Self::from_value).collect(),
                    },
                    Some(head) => Self::Malformed(std::iter::once(head).chain(items).collect()),
                    None => Self::Malformed(Vec::new()),
                }
            }
            Value::Object(map) => Self::LiteralObject(map),
            other => Self::Literal(other),
        }
    }

    /// Convert back to JSON. Exact inverse of [`Expression::from_value`].
    pub fn to_value(&self) -> Value {
        match self {
            Self::Literal(value) => value.clone(),
            Self::Call { operator, args } => {
                let mut items = Vec::with_capacity(args.len() + 1);
                items.push(Value::String(operator.clone()));
                items.extend(args.iter().map(Self::to_value));
                Value::Array(items)
            }
            Self::LiteralObject(map) => Value::Object(map.clone()),
            Self::Malformed(items) => Value::Array(items.clone()),
        }
    }

    /// `"literal"`, `"literal-object"` or `"expression"`.
    pub fn expression_type(&self) -> &'static str {
        match self {
            Self::Literal(_) => "literal",
            Self::LiteralObject(_) => "literal-object",
            Self::Call { .. } | Self::Malformed(_) => "expression",
        }
    }

    /// Whether this node came from a JSON array.
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Call { .. } | Self::Malformed(_))
    }

    pub fn operator(&self) -> Option<&str> {
        match self {
            Self::Call { operator, .. } => Some(operator),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Literal(Value::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    /// Rewrite the tree bottom-up: the arguments of a call are rewritten
    /// before `f` sees the call itself.
    pub fn fold_bottom_up<F>(self, f: &mut F) -> Expression
    where
        F: FnMut(Expression) -> Expression,
    {
        let node = match self {
            Self::Call { operator, args } => Self::Call {
                operator,
                args: args.into_iter().map(|arg| arg.fold_bottom_up(f)).collect(),
            },
            leaf => leaf,
        };
        f(node)
    }

    /// Nesting depth of array nodes below this one (a literal or a call with
    /// only literal arguments has depth 0).
    pub fn max_depth(&self) -> usize {
        match self {
            Self::Call { args, .. } => args
                .iter()
                .filter(|arg| arg.is_array())
                .map(|arg| arg.max_depth() + 1)
                .max()
                .unwrap_or(0),
            _ => 0,
        }
    }
}

impl From<Value> for Expression {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

impl Serialize for Expression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Literal(value) => value.serialize(serializer),
            Self::Call { operator, args } => {
                let mut seq = serializer.serialize_seq(Some(args.len() + 1))?;
                seq.serialize_element(operator)?;
                for arg in args {
                    seq.serialize_element(arg)?;
                }
                seq.end()
            }
            Self::LiteralObject(map) => map.serialize(serializer),
            Self::Malformed(items) => items.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Expression {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}
