/*
 * ==========================================================================
 * GScript - a tiny scripting language
 * ==========================================================================
 *
 * File:     parser/helpers.rs
 * Purpose:  Token inspection shared by all grammar rules.
 *
 * Every helper takes an explicit position and never moves the cursor, so
 * rules can look ahead freely and only the engine commits progress.
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

use crate::error::{GscriptError, GscriptResult};
use crate::lexer::{Token, TokenKind};
use crate::parser::parser::Parser;

impl<'a> Parser<'a> {
    /// Returns the token at `pos`, or `Eof` past the end.
    pub fn token_at(&self, pos: usize) -> &Token {
        self.tokens.get(pos).unwrap_or(&self.eof)
    }

    pub fn kind_at(&self, pos: usize) -> TokenKind {
        self.token_at(pos).kind
    }

    /// Checks the kind at `pos` without consuming anything.
    pub fn check(&self, pos: usize, kind: TokenKind) -> bool {
        self.kind_at(pos) == kind
    }

    /// Checks for an identifier with the exact text `word`.
    pub fn check_word(&self, pos: usize, word: &str) -> bool {
        let token = self.token_at(pos);
        token.kind == TokenKind::Identifier && token.lexeme == word
    }

    /// Checks for an arithmetic operator with the exact text `op`.
    pub fn check_operator(&self, pos: usize, op: &str) -> bool {
        let token = self.token_at(pos);
        token.kind == TokenKind::Operator && token.lexeme == op
    }

    /// Returns true if `pos` is at (or past) the end of input.
    pub fn is_at_end(&self, pos: usize) -> bool {
        self.check(pos, TokenKind::Eof)
    }

    /// Skips one optional `;`.
    pub fn skip_terminator(&self, pos: usize) -> usize {
        if self.check(pos, TokenKind::End) {
            pos + 1
        } else {
            pos
        }
    }

    /// Requires `kind` at `pos` and returns the position after it.
    ///
    /// `what` describes the expected token for the error message, e.g.
    /// `"')' after condition"`.
    pub fn expect(&self, pos: usize, kind: TokenKind, what: &str) -> GscriptResult<usize> {
        if self.check(pos, kind) {
            Ok(pos + 1)
        } else {
            Err(self.error_at(pos, &format!("expected {}", what)))
        }
    }

    /// Requires an identifier at `pos`, returning its text and the next position.
    pub fn expect_identifier(&self, pos: usize, what: &str) -> GscriptResult<(String, usize)> {
        let token = self.token_at(pos);
        if token.kind == TokenKind::Identifier {
            Ok((token.lexeme.clone(), pos + 1))
        } else {
            Err(self.error_at(pos, &format!("expected {}", what)))
        }
    }

    /// Builds "`expected X`, found `Y`" style syntax errors.
    ///
    /// A stray character is reported as such rather than as a wrong token.
    pub fn error_at(&self, pos: usize, expected: &str) -> GscriptError {
        let token = self.token_at(pos);
        if token.kind == TokenKind::Mismatch {
            return self.unexpected(pos);
        }

        let found = match token.kind {
            TokenKind::Eof => "end of input".to_string(),
            _ => format!("'{}'", token),
        };

        GscriptError::syntax_error(pos, token, format!("{}, found {}", expected, found))
    }

    /// The error reported when no rule matches at `pos`.
    pub fn unexpected(&self, pos: usize) -> GscriptError {
        let token = self.token_at(pos);

        match token.kind {
            TokenKind::Mismatch => GscriptError::syntax_error(
                pos,
                token,
                format!("unrecognized character '{}'", token),
            ),
            TokenKind::Eof => GscriptError::syntax_error(pos, token, "unexpected end of input"),
            TokenKind::Function => {
                GscriptError::syntax_error(pos, token, "unexpected token 'function'")
                    .with_help("functions can only be defined at the top level")
            }
            TokenKind::Else => GscriptError::syntax_error(pos, token, "unexpected token 'else'")
                .with_help("'else' must directly follow the closing '}' of an 'if' block"),
            _ => GscriptError::syntax_error(pos, token, format!("unexpected token '{}'", token)),
        }
    }
}
