/*
 * ==========================================================================
 * GScript - a tiny scripting language
 * ==========================================================================
 *
 * File:      keywords.rs
 * Purpose:   Defines all reserved keywords for the GScript language.
 *
 * License:
 * This file is part of the GScript programming language project.
 *
 * GScript is dual-licensed under the terms of:
 *   - The MIT License
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

use crate::lexer::token::TokenKind;

/// Maps a scanned word to its keyword token kind.
///
/// Keywords are matched on the **whole word**, so `format` and `iffy`
/// stay identifiers. `var` and `print` are deliberately absent: they are
/// ordinary identifiers that the grammar and the evaluator give meaning to.
///
/// # Returns
/// - `Some(kind)` if the word is reserved
/// - `None` if the word is a plain identifier
pub fn keyword_kind(word: &str) -> Option<TokenKind> {
    match word {
        "return" => Some(TokenKind::Return),
        "if" => Some(TokenKind::If),
        "else" => Some(TokenKind::Else),
        "while" => Some(TokenKind::While),
        "for" => Some(TokenKind::For),
        "function" => Some(TokenKind::Function),
        _ => None,
    }
}

