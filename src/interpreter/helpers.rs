/*
 * ==========================================================================
 * GScript - a tiny scripting language
 * ==========================================================================
 *
 * File:     interpreter/helpers.rs
 * Purpose:  Small value predicates shared by the evaluator.
 *
 * License:
 * This file is part of the GScript programming language project.
 *
 * GScript is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use crate::value::Value;

/// Determines whether a runtime `Value` is considered **truthy** in GScript.
///
/// Used by `if`, `while` and the `for` condition.
///
/// # Truthiness Rules
/// The following values are considered **false**:
/// - `Value::Null`
/// - `Value::Number(0)`
/// - `Value::String("")` (empty string)
///
/// Everything else is **true**.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Number(n) => *n != 0.0,
        Value::String(s) => !s.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness_rules() {
        assert!(is_truthy(&Value::Number(1.0)));
        assert!(is_truthy(&Value::Number(-0.5)));
        assert!(!is_truthy(&Value::Number(0.0)));
        assert!(is_truthy(&Value::from("x")));
        assert!(!is_truthy(&Value::from("")));
        assert!(!is_truthy(&Value::Null));
    }
}
