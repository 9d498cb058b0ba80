/*
 * ==========================================================================
 * GScript - a tiny scripting language
 * ==========================================================================
 *
 * File:      token.rs
 * Purpose:   Defines the lexical token types produced by the GScript lexer
 *            and consumed by the grammar rules.
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

use std::fmt;

use serde::Serialize;

use crate::span::Span;

/// Represents the **category of a lexical token** in GScript.
///
/// The set is closed: every grammar rule matches on these kinds, and the
/// lexer never produces anything else.
///
/// # Compiler Pipeline Role
/// ```text
/// Source Code → Lexer → TokenKind → Grammar Rules → AST
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    /// A numeric literal: `42`, `3.14`, `7.`
    Number,

    /// A double-quoted string literal. The lexeme keeps its quotes.
    String,

    /// A user-defined name (variables, functions, and the contextual
    /// words `var` and `print`).
    Identifier,

    /// `=`
    Assign,

    /// `;` statement terminator.
    End,

    Return,
    If,
    Else,
    While,
    For,
    Function,

    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `==`
    EqualEqual,

    /// One of the arithmetic operators `+ - * /`.
    Operator,

    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,

    /// A character no other pattern accepts.
    ///
    /// The lexer never skips input silently: the parser reports this token
    /// as a syntax error at its position.
    Mismatch,

    /// End-of-file marker, always the **final token**.
    Eof,
}

impl TokenKind {
    /// Returns `true` for the five relational operators.
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            TokenKind::Less
                | TokenKind::LessEqual
                | TokenKind::Greater
                | TokenKind::GreaterEqual
                | TokenKind::EqualEqual
        )
    }
}

/// Represents a **single lexical token** produced by the GScript lexer.
///
/// # Example Tokens
/// ```text
/// x   →  { kind: Identifier, lexeme: "x",  span: 1:0 }
/// =   →  { kind: Assign,     lexeme: "=",  span: 1:2 }
/// 42  →  { kind: Number,     lexeme: "42", span: 1:4 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token.
    pub lexeme: String,

    /// Where the token starts in the source.
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }
}

impl fmt::Display for Token {
    /// Formats a token for **user-facing output**.
    ///
    /// Only the lexeme is printed, so error messages show what the user
    /// wrote rather than the internal structure. `Eof` has an empty lexeme
    /// and is shown as `end of input`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of input"),
            _ => write!(f, "{}", self.lexeme),
        }
    }
}
