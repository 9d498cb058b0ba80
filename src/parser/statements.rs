/*
 * ==========================================================================
 * GScript - a tiny scripting language
 * ==========================================================================
 *
 * File:     parser/statements.rs
 * Purpose:  Statement-level grammar rules and the block parser.
 *
 * Keyword-led forms (`function`, `if`, `while`, `for`, `return`) commit as
 * soon as their keyword matches: no other rule starts with those tokens, so
 * a malformed remainder is reported where it occurs. Identifier-led forms
 * return `None` and let the next rule try.
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

use std::sync::Arc;

use crate::ast::{Block, Expr, FunctionDef, Stmt};
use crate::error::{GscriptError, GscriptResult};
use crate::lexer::TokenKind;
use crate::parser::parser::{Parsed, Parser};
use crate::parser::rules::Context;

/// How an assignment ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// `x = 1;` as a statement or `for` initializer.
    Required,

    /// `x = x + 1` as a `for` step, which stops before `)`.
    Omitted,
}

impl<'a> Parser<'a> {
    /// assignment → IDENTIFIER "=" ( NUMBER | known-call | expression ) ";"
    ///
    /// The right-hand side is tried in that order; a bare number or a call
    /// only wins when the terminator follows it directly.
    pub fn assignment(&mut self, pos: usize, terminator: Terminator) -> Parsed<Stmt> {
        if !self.check(pos, TokenKind::Identifier) || !self.check(pos + 1, TokenKind::Assign) {
            return Ok(None);
        }

        let name = self.token_at(pos).lexeme.clone();
        let rhs = pos + 2;

        let (value, next) = if self.check(rhs, TokenKind::Number)
            && self.ends_assignment(rhs + 1, terminator)
        {
            (Expr::Number(self.number_literal(rhs)?), rhs + 1)
        } else if let Some((call, next)) = self
            .known_call(rhs)?
            .filter(|(_, next)| self.ends_assignment(*next, terminator))
        {
            (Expr::Call(call), next)
        } else if let Some(found) = self.expression(rhs)? {
            found
        } else {
            return Err(self.error_at(rhs, "expected expression after '='"));
        };

        let next = match terminator {
            Terminator::Required => self.expect(next, TokenKind::End, "';' after assignment")?,
            Terminator::Omitted => next,
        };

        Ok(Some((Stmt::Assign { name, value }, next)))
    }

    fn ends_assignment(&self, pos: usize, terminator: Terminator) -> bool {
        match terminator {
            Terminator::Required => self.check(pos, TokenKind::End),
            Terminator::Omitted => {
                self.check(pos, TokenKind::RParen) || self.check(pos, TokenKind::End)
            }
        }
    }

    /// var → "var" ( assignment | expression )
    pub fn var_declaration(&mut self, pos: usize) -> Parsed<Stmt> {
        if !self.check_word(pos, "var") {
            return Ok(None);
        }

        if let Some((assign, next)) = self.assignment(pos + 1, Terminator::Required)? {
            return Ok(Some((Stmt::Var(Box::new(assign)), next)));
        }

        let declared = self
            .expression(pos + 1)?
            .map(|(expr, next)| (Stmt::Var(Box::new(Stmt::Expression(expr))), next));

        Ok(declared)
    }

    /// conditional → "if" "(" comparison ")" block ( "else" ( block | conditional ) )?
    pub fn condition(&mut self, pos: usize, context: Context) -> Parsed<Stmt> {
        if !self.check(pos, TokenKind::If) {
            return Ok(None);
        }

        let (cond, then_block, mut pos) = self.guarded_block(pos, "if", context)?;

        let else_block = if self.check(pos, TokenKind::Else) {
            if self.check(pos + 1, TokenKind::If) {
                let Some((nested, next)) = self.condition(pos + 1, context)? else {
                    return Err(self.unexpected(pos + 1));
                };
                pos = next;
                Some(Block {
                    statements: vec![nested],
                })
            } else {
                let (block, next) = self.required_block(pos + 1, context)?;
                pos = next;
                Some(block)
            }
        } else {
            None
        };

        Ok(Some((
            Stmt::Condition {
                cond,
                then_block,
                else_block,
            },
            pos,
        )))
    }

    /// loop → "while" "(" comparison ")" block
    ///      | "for" "(" assignment comparison ";" assignment ";"? ")" block
    pub fn loop_statement(&mut self, pos: usize, context: Context) -> Parsed<Stmt> {
        match self.kind_at(pos) {
            TokenKind::While => {
                let (cond, body, next) = self.guarded_block(pos, "while", context)?;
                Ok(Some((Stmt::While { cond, body }, next)))
            }
            TokenKind::For => self.for_loop(pos, context).map(Some),
            _ => Ok(None),
        }
    }

    fn for_loop(&mut self, pos: usize, context: Context) -> GscriptResult<(Stmt, usize)> {
        let pos = self.expect(pos + 1, TokenKind::LParen, "'(' after 'for'")?;

        let Some((init, pos)) = self.assignment(pos, Terminator::Required)? else {
            return Err(self.error_at(pos, "expected assignment in for-loop initializer"));
        };

        let (cond, pos) = self.comparison(pos)?;
        let pos = self.expect(pos, TokenKind::End, "';' after for-loop condition")?;

        let Some((step, pos)) = self.assignment(pos, Terminator::Omitted)? else {
            return Err(self.error_at(pos, "expected assignment in for-loop step"));
        };

        let pos = self.skip_terminator(pos);
        let pos = self.expect(pos, TokenKind::RParen, "')' after for-loop header")?;
        let (body, next) = self.required_block(pos, context)?;

        let stmt = Stmt::For {
            init: Box::new(init),
            cond,
            step: Box::new(step),
            body,
        };

        Ok((stmt, next))
    }

    /// Shared head of `if` and `while`: `keyword "(" comparison ")" block`.
    fn guarded_block(
        &mut self,
        pos: usize,
        keyword: &str,
        context: Context,
    ) -> GscriptResult<(Expr, Block, usize)> {
        let pos = self.expect(pos + 1, TokenKind::LParen, &format!("'(' after '{}'", keyword))?;
        let (cond, pos) = self.comparison(pos)?;
        let pos = self.expect(pos, TokenKind::RParen, "')' after condition")?;
        let (block, next) = self.required_block(pos, context)?;

        Ok((cond, block, next))
    }

    /// return → "return" expression
    pub fn return_statement(&mut self, pos: usize, context: Context) -> Parsed<Stmt> {
        if !self.check(pos, TokenKind::Return) {
            return Ok(None);
        }

        if context != Context::FunctionBody {
            return Err(GscriptError::syntax_error(
                pos,
                self.token_at(pos),
                "'return' outside of a function body",
            ));
        }

        let Some((expr, next)) = self.expression(pos + 1)? else {
            return Err(self.error_at(pos + 1, "expected expression after 'return'"));
        };

        Ok(Some((Stmt::Return(expr), next)))
    }

    /// function → "function" IDENTIFIER "(" ( IDENTIFIER ( "," IDENTIFIER )* )? ")" block
    ///
    /// Registers the function in the symbol table. The signature goes in
    /// before the body is parsed, so the body can call itself; the complete
    /// definition replaces it afterwards.
    pub fn function_definition(&mut self, pos: usize) -> Parsed<Stmt> {
        if !self.check(pos, TokenKind::Function) {
            return Ok(None);
        }

        let (name, pos) = self.expect_identifier(pos + 1, "function name after 'function'")?;
        let mut pos = self.expect(pos, TokenKind::LParen, "'(' after function name")?;

        let mut params = Vec::new();
        if !self.check(pos, TokenKind::RParen) {
            loop {
                let (param, next) = self.expect_identifier(pos, "parameter name")?;
                params.push(param);
                pos = next;

                if !self.check(pos, TokenKind::Comma) {
                    break;
                }
                pos += 1;
            }
        }
        let pos = self.expect(pos, TokenKind::RParen, "')' after parameters")?;

        self.symbols.define(
            name.clone(),
            Arc::new(FunctionDef {
                params: params.clone(),
                body: Block::default(),
            }),
        );

        let (body, next) = self.required_block(pos, Context::FunctionBody)?;
        let def = Arc::new(FunctionDef { params, body });
        self.symbols.define(name.clone(), Arc::clone(&def));

        Ok(Some((Stmt::FunctionDef { name, def }, next)))
    }

    /// A call statement to an already defined function, `f(1);`.
    ///
    /// Only matches when the call is the whole statement; `f(1) + 2;` is left
    /// to the expression rule.
    pub fn function_call_statement(&mut self, pos: usize) -> Parsed<Stmt> {
        let Some((call, next)) = self.known_call(pos)? else {
            return Ok(None);
        };

        let ends_statement = matches!(
            self.kind_at(next),
            TokenKind::End | TokenKind::RBrace | TokenKind::Eof
        );

        Ok(ends_statement.then(|| (Stmt::FunctionCall(call), next)))
    }

    /// expression-statement → comma
    pub fn expression_statement(&mut self, pos: usize) -> Parsed<Stmt> {
        Ok(self
            .comma_expression(pos)?
            .map(|(expr, next)| (Stmt::Expression(expr), next)))
    }

    /// block → "{" statement* "}"
    ///
    /// The reusable block parser. Statements are tried against every rule
    /// except function definitions, each followed by an optional `;`. Once
    /// the `{` is seen, anything that is not a statement is an error.
    pub fn block(&mut self, pos: usize, context: Context) -> Parsed<Block> {
        if !self.check(pos, TokenKind::LBrace) {
            return Ok(None);
        }

        let inner = context.nested();

        self.nested(pos, |p| {
            let mut statements = Vec::new();
            let mut pos = pos + 1;

            loop {
                if p.check(pos, TokenKind::RBrace) {
                    return Ok(Some((Block { statements }, pos + 1)));
                }

                if p.is_at_end(pos) {
                    return Err(p.error_at(pos, "expected '}'"));
                }

                let Some((stmt, next)) = p.try_rules(pos, inner)? else {
                    return Err(p.unexpected(pos));
                };

                statements.push(stmt);
                pos = p.skip_terminator(next);
            }
        })
    }

    fn required_block(&mut self, pos: usize, context: Context) -> GscriptResult<(Block, usize)> {
        match self.block(pos, context)? {
            Some(found) => Ok(found),
            None => Err(self.error_at(pos, "expected '{'")),
        }
    }
}
