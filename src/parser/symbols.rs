/*
 * ==========================================================================
 * GScript - a tiny scripting language
 * ==========================================================================
 *
 * File:     parser/symbols.rs
 * Purpose:  Function name → definition table.
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

use std::collections::HashMap;
use std::sync::Arc;

use crate::ast::FunctionDef;

/// Maps function names to their parameter list and body.
///
/// The parser fills one table while it reads definitions, and consults it to
/// decide whether `name(...)` at statement start is a call. The interpreter
/// keeps a second table that is filled as definitions execute.
///
/// Entries are only ever written by function definitions; a redefinition
/// overwrites the previous entry.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    functions: HashMap<String, Arc<FunctionDef>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name`, returning the definition it replaced, if any.
    pub fn define(&mut self, name: impl Into<String>, def: Arc<FunctionDef>) -> Option<Arc<FunctionDef>> {
        self.functions.insert(name.into(), def)
    }

    pub fn get(&self, name: &str) -> Option<Arc<FunctionDef>> {
        self.functions.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Defined names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Block;

    fn def(params: &[&str]) -> Arc<FunctionDef> {
        Arc::new(FunctionDef {
            params: params.iter().map(|p| p.to_string()).collect(),
            body: Block::default(),
        })
    }

    #[test]
    fn redefinition_overwrites() {
        let mut table = SymbolTable::new();
        assert!(table.define("f", def(&["a"])).is_none());
        assert!(table.define("f", def(&["a", "b"])).is_some());

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("f").map(|d| d.params.len()), Some(2));
    }

    #[test]
    fn names_are_sorted() {
        let mut table = SymbolTable::new();
        table.define("zeta", def(&[]));
        table.define("alpha", def(&[]));

        assert_eq!(table.names(), vec!["alpha", "zeta"]);
        assert!(!table.contains("beta"));
    }
}
