/*
 * ============================================================================
 *  GScript - a tiny scripting language
 * ============================================================================
 *
 *  File:     interpreter/environment.rs
 *  Purpose:  Variable storage for one activation.
 *
 *  There is no scope chain: a call works on a snapshot copy of its caller's
 *  variables, and the caller's map is put back when the call finishes. An
 *  unbound name reads as `0`.
 *
 *  License:
 *  This file is part of the GScript programming language project.
 *
 *  GScript is dual-licensed under the terms of:
 *    - The MIT license
 *    - The Apache License, Version 2.0
 *
 *  You may choose either license to govern your use of this software.
 *
 *  Unless required by applicable law or agreed to in writing, software
 *  distributed under these licenses is distributed on an "AS IS" BASIS,
 *  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ============================================================================
 */

use std::collections::HashMap;

use crate::value::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    values: HashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a variable; unbound names yield `Number(0)`.
    pub fn get(&self, name: &str) -> Value {
        self.values
            .get(name)
            .cloned()
            .unwrap_or(Value::Number(0.0))
    }

    /// Reads a variable without the unbound default.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Removes a binding so the name reads as unbound again.
    pub fn unbind(&mut self, name: &str) {
        self.values.remove(name);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
