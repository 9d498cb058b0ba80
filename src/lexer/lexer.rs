/*
 * ==========================================================================
 * GScript - a tiny scripting language
 * ==========================================================================
 *
 * File:      lexer.rs
 * Purpose:   Regex-driven scanner turning GScript source text into tokens.
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

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::lexer::keywords::keyword_kind;
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

/// Ordered token patterns.
///
/// The alternation is leftmost-first, so order matters: comments before the
/// `/` operator, two-character comparisons before `<` and `>`, and the
/// catch-all `MISMATCH` last.
const TOKEN_PATTERNS: &[(&str, &str)] = &[
    ("NUMBER", r"\d+(?:\.\d*)?"),
    ("STRING", r#""[^"]*""#),
    ("COMMENT", r"//[^\n]*"),
    ("WORD", r"[A-Za-z_][A-Za-z0-9_]*"),
    ("COMPARE", r"<=|>=|==|<|>"),
    ("ASSIGN", r"="),
    ("END", r";"),
    ("OPERATOR", r"[+\-*/]"),
    ("LPAREN", r"\("),
    ("RPAREN", r"\)"),
    ("LBRACE", r"\{"),
    ("RBRACE", r"\}"),
    ("COMMA", r","),
    ("NEWLINE", r"\n"),
    ("SKIP", r"[ \t\r]+"),
    ("MISMATCH", r"."),
];

fn token_regex() -> &'static Regex {
    static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();

    TOKEN_REGEX.get_or_init(|| {
        let pattern = TOKEN_PATTERNS
            .iter()
            .map(|(name, pattern)| format!("(?P<{}>{})", name, pattern))
            .collect::<Vec<_>>()
            .join("|");

        Regex::new(&pattern).expect("token patterns form a valid regex")
    })
}

pub struct Lexer<'src> {
    source: &'src str,
    line: usize,
    line_start: usize,
    pub tokens: Vec<Token>,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer over raw source code.
    ///
    /// # Returns
    /// A lexer with:
    /// - Line counter set to `1`
    /// - Empty token output buffer
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            line: 1,
            line_start: 0,
            tokens: Vec::new(),
        }
    }

    /// Performs complete lexical analysis over the entire source input.
    ///
    /// # Behavior
    /// - Drops whitespace, newlines and `//` comments
    /// - Emits a `Mismatch` token for every unrecognized character
    /// - Guarantees a terminating `TokenKind::Eof` marker
    pub fn scan_tokens(&mut self) {
        for caps in token_regex().captures_iter(self.source) {
            let Some((group, text, start)) = matched_group(&caps) else {
                continue;
            };

            let span = Span::new(self.line, start - self.line_start);

            if let Some(kind) = classify(group, text) {
                self.tokens.push(Token::new(kind, text, span));
            }

            self.track_newlines(text, start);
        }

        self.tokens.push(Token::new(
            TokenKind::Eof,
            "",
            Span::new(self.line, self.source.len() - self.line_start),
        ));
    }

    /// Keeps line/column bookkeeping in sync with consumed text.
    ///
    /// Newlines can appear inside string literals, so every match is scanned,
    /// not only `NEWLINE`.
    fn track_newlines(&mut self, text: &str, start: usize) {
        for (offset, ch) in text.char_indices() {
            if ch == '\n' {
                self.line += 1;
                self.line_start = start + offset + 1;
            }
        }
    }
}

/// Finds which named group produced the match.
fn matched_group<'t>(caps: &Captures<'t>) -> Option<(&'static str, &'t str, usize)> {
    TOKEN_PATTERNS.iter().find_map(|(name, _)| {
        caps.name(name).map(|m| (*name, m.as_str(), m.start()))
    })
}

/// Maps a pattern group to a token kind; `None` means the text is dropped.
fn classify(group: &str, text: &str) -> Option<TokenKind> {
    let kind = match group {
        "NUMBER" => TokenKind::Number,
        "STRING" => TokenKind::String,
        "WORD" => keyword_kind(text).unwrap_or(TokenKind::Identifier),
        "COMPARE" => match text {
            "<=" => TokenKind::LessEqual,
            ">=" => TokenKind::GreaterEqual,
            "==" => TokenKind::EqualEqual,
            "<" => TokenKind::Less,
            _ => TokenKind::Greater,
        },
        "ASSIGN" => TokenKind::Assign,
        "END" => TokenKind::End,
        "OPERATOR" => TokenKind::Operator,
        "LPAREN" => TokenKind::LParen,
        "RPAREN" => TokenKind::RParen,
        "LBRACE" => TokenKind::LBrace,
        "RBRACE" => TokenKind::RBrace,
        "COMMA" => TokenKind::Comma,
        "MISMATCH" => TokenKind::Mismatch,
        // COMMENT, NEWLINE, SKIP
        _ => return None,
    };

    Some(kind)
}
