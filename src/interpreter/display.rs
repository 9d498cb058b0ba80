/*
 * ==========================================================================
 * GScript - a tiny scripting language
 * ==========================================================================
 *
 * File:     interpreter/display.rs
 * Purpose:  Human-readable rendering of runtime values.
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

/// ============================================================================
/// value_to_string
/// ============================================================================
/// Converts a GScript runtime `Value` into the text `print` writes.
///
/// Examples:
///   - Number(6.0)      → "6"
///   - Number(2.5)      → "2.5"
///   - String("cat")    → "cat"
///   - Null             → "null"
/// ============================================================================
pub fn value_to_string(val: &Value) -> String {
    match val {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
    }
}
