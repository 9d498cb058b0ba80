/*
 * ==========================================================================
 * GScript - a tiny scripting language
 * ==========================================================================
 *
 * File:     config.rs
 * Purpose:  Interpreter limits and error policy, loadable from JSON.
 *
 * Every field has a default, so an empty object `{}` is a valid
 * configuration. Unknown keys are rejected to catch typos.
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

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GscriptError, GscriptResult};
use crate::parser::DEFAULT_MAX_NESTING;

/// Default bound on nested user-function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Deepest allowed chain of user-function calls.
    pub max_call_depth: usize,

    /// Deepest allowed nesting of blocks, parentheses and unary minus.
    pub max_nesting: usize,

    /// Keep running later top-level statements after a runtime error.
    pub continue_on_error: bool,

    /// Write `trace:` lines for function definitions and calls to stderr.
    pub trace: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            max_nesting: DEFAULT_MAX_NESTING,
            continue_on_error: false,
            trace: false,
        }
    }
}

impl Config {
    pub fn from_json(text: &str) -> GscriptResult<Self> {
        serde_json::from_str(text).map_err(|e| GscriptError::config_error(e.to_string()))
    }

    /// Reads and parses a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> GscriptResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            GscriptError::io_error(format!("cannot read '{}': {}", path.display(), e))
        })?;

        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn empty_object_uses_defaults() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn fields_can_be_overridden_individually() {
        let config = Config::from_json(r#"{ "continue_on_error": true, "max_call_depth": 10 }"#)
            .unwrap();

        assert!(config.continue_on_error);
        assert_eq!(config.max_call_depth, 10);
        assert_eq!(config.max_nesting, DEFAULT_MAX_NESTING);
        assert!(!config.trace);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = Config::from_json(r#"{ "max_depth": 3 }"#).unwrap_err();
        assert_eq!(err.code(), "E_CONFIG");
        assert!(matches!(err.kind, ErrorKind::Config(ref msg) if msg.contains("max_depth")));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Config::load("/nonexistent/gscript.json").unwrap_err();
        assert_eq!(err.code(), "E_IO");
    }
}
