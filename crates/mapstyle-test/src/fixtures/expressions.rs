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

//! Expression fixtures.

use serde_json::{json, Value};

/// Valid expressions with a short description.
pub fn valid_expressions() -> Vec<(&'static str, Value)> {
    vec![
        ("literal_string", json!("#ff0000")),
        ("literal_number", json!(42)),
        ("literal_object", json!({"stops": [[0, 1], [10, 2]]})),
        ("get", json!(["get", "name"])),
        ("comparison", json!(["==", ["get", "class"], "park"])),
        ("all", json!(["all", [">=", ["zoom"], 10], ["has", "name"]])),
        ("empty_all", json!(["all"])),
        ("case", json!(["case", ["has", "a"], 1, 0])),
        ("rgba", json!(["rgba", 255, 0, 0, 0.5])),
        ("step", json!(["step", ["zoom"], 1, 10, 2])),
    ]
}

/// Invalid expressions with the text expected in the first error.
pub fn invalid_expressions() -> Vec<(&'static str, Value, &'static str)> {
    vec![
        ("unknown_operator", json!(["bogus_op", 1]), "bogus_op"),
        ("too_few", json!(["rgba", 1, 2, 3]), "requires at least 4"),
        ("too_many", json!(["rgba", 1, 2, 3, 4, 5]), "accepts at most 4"),
        ("numeric_head", json!([1, 2, 3]), "operator must be a string"),
        ("empty_array", json!([]), "operator must be a string"),
        ("nested_unknown", json!(["all", ["nope"]]), "nope"),
    ]
}
