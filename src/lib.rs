/*
 * ==========================================================================
 * GScript - a tiny scripting language
 * ==========================================================================
 *
 * File:     lib.rs
 * Purpose:  Crate root and one-call entry points.
 *
 * Pipeline:
 *   Source → Lexer → Tokens → Parser → Program → Interpreter
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

use std::io::Write;

/// Source locations carried by tokens and errors.
pub mod span;

/// Regex-driven tokenizer:
/// - token kinds and whole-word keywords
/// - comment and whitespace skipping
pub mod lexer;

/// Syntax tree produced by the parser.
pub mod ast;

/// Ordered-choice parser built from independent grammar rules.
pub mod parser;

/// Tree-walking evaluator.
pub mod interpreter;

/// Runtime values.
pub mod value;

/// Typed errors with stable codes.
pub mod error;

/// Rustc-style error rendering.
pub mod diagnostics;

/// Interpreter limits and error policy.
pub mod config;

pub use config::Config;
pub use diagnostics::DiagnosticPrinter;
pub use error::{ErrorKind, GscriptError, GscriptResult};
pub use interpreter::Interpreter;
pub use parser::Program;
pub use value::Value;

/// Tokenizes and parses `source` with the nesting limit from `config`.
pub fn parse_source(source: &str, config: &Config) -> GscriptResult<Program> {
    let tokens = lexer::tokenize(source);
    parser::parse_with_limit(&tokens, config.max_nesting)
}

/// Parses and runs `source`, writing `print` output to `out`.
///
/// Returns the runtime errors that were recovered from when
/// `continue_on_error` is set; otherwise the first error is returned as
/// `Err`. Syntax errors always abort before anything runs.
///
/// The program runs on its own thread (see [`Interpreter::run`]), so `out`
/// must be `Send`.
///
/// # Example
/// ```rust
/// let mut out = Vec::new();
/// gscript::run_source("print(1 + 2);", gscript::Config::default(), &mut out).unwrap();
/// assert_eq!(out, b"3\n");
/// ```
pub fn run_source<W: Write + Send>(
    source: &str,
    config: Config,
    out: W,
) -> GscriptResult<Vec<GscriptError>> {
    let program = parse_source(source, &config)?;
    Interpreter::new(config, out).run(&program)
}
