/*
 * ==========================================================================
 * GScript - a tiny scripting language
 * ==========================================================================
 *
 * File:     parser/mod.rs
 * Purpose:  Root module for the GScript rule-based parser.
 *
 * This module wires together all parser sub-modules, including:
 *   - The rule engine and its public entry points
 *   - The ordered rule registry
 *   - Statement and expression grammar
 *   - Shared helper utilities
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

/// Core parser orchestration:
/// - Owns the `Parser` struct
/// - Exposes the main `parse(tokens)` entry point
pub mod parser;

/// Rule registry:
/// - the ordered list of statement forms
/// - parse contexts (top level, block, function body)
pub mod rules;

/// Statement-level parsing:
/// - function / var / assignment
/// - if / while / for / return
/// - blocks
pub mod statements;

/// Expression-level parsing:
/// - comma → comparison → expression → term → factor
/// - calls and literals
pub mod expressions;

/// Shared parser helpers:
/// - token matching
/// - lookahead checks
/// - error construction
pub mod helpers;

/// Function symbols collected while parsing.
pub mod symbols;

pub use parser::{parse, parse_with_limit, Parser, Program, DEFAULT_MAX_NESTING};
pub use rules::{Context, Rule, REGISTRY};
pub use symbols::SymbolTable;
