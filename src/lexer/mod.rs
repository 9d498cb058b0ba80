/*
 * ==========================================================================
 * GScript - a tiny scripting language
 * ==========================================================================
 *
 * File:     lexer/mod.rs
 * Purpose:  Root module for lexical analysis.
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

/// Token and token-kind definitions.
pub mod token;

/// Reserved word lookup.
pub mod keywords;

/// The regex-driven scanner.
pub mod lexer;

pub use token::{Token, TokenKind};

/// Converts source text into an ordered, `Eof`-terminated token sequence.
///
/// ```text
/// Source → Lexer → Tokens → Parser → AST → Interpreter
/// ```
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = lexer::Lexer::new(source);
    lexer.scan_tokens();
    lexer.tokens
}
