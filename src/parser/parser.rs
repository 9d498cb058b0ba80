/*
 * ==========================================================================
 * GScript - a tiny scripting language
 * ==========================================================================
 *
 * Core Parser Engine
 *
 * This file defines the `Parser` structure and the public `parse()` driver
 * that turns a token sequence into a `Program`.
 *
 * The engine itself knows no syntax. It repeatedly offers the current cursor
 * position to the grammar rules in registration order (`rules.rs`) and
 * commits the first one that matches:
 * - `statements.rs`   → statement grammar and the block parser
 * - `expressions.rs`  → arithmetic, comparison, comma lists, calls
 * - `helpers.rs`      → position-based token inspection and errors
 *
 * --------------------------------------------------------------------------
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

use crate::ast::Stmt;
use crate::error::{GscriptError, GscriptResult};
use crate::lexer::{Token, TokenKind};
use crate::parser::rules::{Context, REGISTRY};
use crate::parser::symbols::SymbolTable;
use crate::span::Span;

/// Default bound on nested blocks, parentheses and unary minus.
pub const DEFAULT_MAX_NESTING: usize = 128;

/// Result of a single parse attempt at a position.
///
/// - `Ok(Some((node, next)))` → matched, `next >= position`
/// - `Ok(None)`               → no match, nothing changed
/// - `Err(_)`                 → committed to a form that turned out malformed
pub type Parsed<T> = GscriptResult<Option<(T, usize)>>;

/// A fully parsed program plus the functions defined while parsing it.
#[derive(Debug, Clone)]
pub struct Program {
    pub statements: Vec<Stmt>,

    /// Parse-time only: it decides how call statements parse. The
    /// interpreter keeps its own table, filled as `function` statements
    /// execute, and never reads this one.
    pub symbols: SymbolTable,
}

/// The GScript parser engine.
///
/// Holds:
/// - The token sequence (never modified)
/// - The committed cursor
/// - The symbol table that function definitions write into
/// - The nesting guard
pub struct Parser<'a> {
    pub(crate) tokens: &'a [Token],
    pub(crate) current: usize,
    pub(crate) symbols: &'a mut SymbolTable,
    pub(crate) eof: Token,
    nesting: usize,
    max_nesting: usize,
}

/// Public entry point for the parsing phase.
///
/// # Pipeline
/// ```text
/// Source → Lexer → Tokens → Parser → AST → Interpreter
/// ```
///
/// # Example
/// ```rust
/// let tokens = gscript::lexer::tokenize("x = 1 + 2;");
/// let program = gscript::parser::parse(&tokens).unwrap();
/// assert_eq!(program.statements.len(), 1);
/// ```
pub fn parse(tokens: &[Token]) -> GscriptResult<Program> {
    parse_with_limit(tokens, DEFAULT_MAX_NESTING)
}

/// Same as [`parse`] with an explicit nesting limit.
pub fn parse_with_limit(tokens: &[Token], max_nesting: usize) -> GscriptResult<Program> {
    let mut symbols = SymbolTable::new();
    let statements = Parser::new(tokens, &mut symbols)
        .with_max_nesting(max_nesting)
        .parse()?;

    Ok(Program {
        statements,
        symbols,
    })
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token], symbols: &'a mut SymbolTable) -> Self {
        let eof_span = tokens.last().map(|t| t.span).unwrap_or_default();

        Self {
            tokens,
            current: 0,
            symbols,
            eof: Token::new(TokenKind::Eof, "", eof_span),
            nesting: 0,
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }

    pub fn with_max_nesting(mut self, max_nesting: usize) -> Self {
        self.max_nesting = max_nesting;
        self
    }

    /// Parses the entire token sequence into top-level statements.
    ///
    /// This is the **main driver**: rule trial at the cursor until the
    /// sequence is exhausted. Each success commits the rule's position and
    /// then swallows one optional `;`.
    ///
    /// # Errors
    /// `E_SYNTAX` naming the token and position where no rule matched.
    pub fn parse(&mut self) -> GscriptResult<Vec<Stmt>> {
        let mut statements = Vec::new();

        while !self.is_at_end(self.current) {
            let Some((stmt, next)) = self.try_rules(self.current, Context::TopLevel)? else {
                return Err(self.unexpected(self.current));
            };

            statements.push(stmt);
            self.current = self.skip_terminator(next);
        }

        Ok(statements)
    }

    /// Ordered choice: the first rule (in registration order) that matches
    /// at `pos` wins.
    pub(crate) fn try_rules(&mut self, pos: usize, context: Context) -> Parsed<Stmt> {
        for rule in REGISTRY {
            if !rule.allowed_in(context) {
                continue;
            }

            if let Some((stmt, next)) = rule.try_parse(self, pos, context)? {
                debug_assert!(next > pos, "rule {} did not advance", rule.name());
                return Ok(Some((stmt, next)));
            }
        }

        Ok(None)
    }

    /// Runs `f` one nesting level deeper, failing once the limit is reached.
    pub(crate) fn nested<T>(
        &mut self,
        pos: usize,
        f: impl FnOnce(&mut Self) -> GscriptResult<T>,
    ) -> GscriptResult<T> {
        if self.nesting >= self.max_nesting {
            return Err(GscriptError::recursion_limit(self.max_nesting)
                .with_span(self.span_at(pos))
                .with_help("reduce the nesting depth of blocks and parentheses"));
        }

        self.nesting += 1;
        let result = f(self);
        self.nesting -= 1;
        result
    }

    pub(crate) fn span_at(&self, pos: usize) -> Span {
        self.token_at(pos).span
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinaryOp, Expr};
    use crate::error::ErrorKind;
    use crate::lexer::tokenize;

    fn parse_source(source: &str) -> GscriptResult<Program> {
        parse(&tokenize(source))
    }

    #[test]
    fn statements_are_committed_in_order() {
        let program = parse_source("x = 1; y = x + 2; y;").unwrap();
        assert_eq!(program.statements.len(), 3);
        assert!(matches!(program.statements[2], Stmt::Expression(Expr::Variable(_))));
    }

    #[test]
    fn terminator_is_optional_after_expressions() {
        let program = parse_source("1 + 2\n3").unwrap();
        assert_eq!(program.statements.len(), 2);
    }

    #[test]
    fn assignment_shadows_expression_rule() {
        let program = parse_source("x = 1;").unwrap();
        assert_eq!(
            program.statements,
            vec![Stmt::Assign {
                name: "x".to_string(),
                value: Expr::Number(1.0),
            }]
        );
    }

    #[test]
    fn malformed_assignment_names_a_position() {
        let err = parse_source("x = ;").unwrap_err();
        match err.kind {
            ErrorKind::Syntax { position, token, .. } => {
                assert_eq!(position, 2);
                assert_eq!(token, ";");
            }
            other => panic!("expected syntax error, got {:?}", other),
        }
    }

    #[test]
    fn unmatched_token_is_reported() {
        let err = parse_source("x = 1; ) y = 2;").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Syntax { position: 4, .. }));
    }

    #[test]
    fn mismatch_tokens_are_syntax_errors() {
        let err = parse_source("x = 1;\n@").unwrap_err();
        assert!(err.to_string().starts_with("unrecognized character '@'"));
        assert_eq!(err.span, Some(Span::new(2, 0)));
    }

    #[test]
    fn empty_input_parses_to_nothing() {
        let program = parse_source("  // nothing here\n").unwrap();
        assert!(program.statements.is_empty());
        assert!(program.symbols.is_empty());
    }

    #[test]
    fn parsing_is_deterministic() {
        let source = "function f(a, b) { return a * b; } x = f(2, 3) - 1; if (x > 2) { x = 0; }";
        assert_eq!(
            parse_source(source).unwrap().statements,
            parse_source(source).unwrap().statements
        );
    }

    #[test]
    fn nesting_limit_is_enforced() {
        let source = format!("x = {}1{};", "(".repeat(20), ")".repeat(20));
        let tokens = tokenize(&source);

        assert!(parse_with_limit(&tokens, 32).is_ok());
        let err = parse_with_limit(&tokens, 8).unwrap_err();
        assert_eq!(err.kind, ErrorKind::RecursionLimit { limit: 8 });
    }

    #[test]
    fn works_without_trailing_eof_token() {
        let mut tokens = tokenize("x = 2 * 3;");
        tokens.pop();

        let program = parse(&tokens).unwrap();
        assert_eq!(
            program.statements[0],
            Stmt::Assign {
                name: "x".to_string(),
                value: Expr::Binary {
                    op: BinaryOp::Mul,
                    left: Box::new(Expr::Number(2.0)),
                    right: Box::new(Expr::Number(3.0)),
                },
            }
        );
    }
}
