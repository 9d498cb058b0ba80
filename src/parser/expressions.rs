/*
 * ==========================================================================
 * GScript - a tiny scripting language
 * ==========================================================================
 *
 * File:     parser/expressions.rs
 * Purpose:  Expression-level grammar.
 *
 * Precedence, lowest to highest:
 *
 *   comma → comparison → expression (+ -) → term (* /) → factor
 *
 * Binary operators are left-associative. Parenthesized groups recurse into
 * `expression`. Identifiers stay symbolic and are resolved at run time.
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

use crate::ast::{BinaryOp, Call, CompareOp, Expr};
use crate::error::GscriptResult;
use crate::lexer::TokenKind;
use crate::parser::parser::{Parsed, Parser};

impl<'a> Parser<'a> {
    /// comma → expression ( "," expression )*
    ///
    /// A single element is returned as itself, not wrapped.
    pub fn comma_expression(&mut self, pos: usize) -> Parsed<Expr> {
        let Some((first, mut pos)) = self.expression(pos)? else {
            return Ok(None);
        };

        let mut items = vec![first];
        while self.check(pos, TokenKind::Comma) {
            let Some((next, after)) = self.expression(pos + 1)? else {
                return Err(self.error_at(pos + 1, "expected expression after ','"));
            };
            items.push(next);
            pos = after;
        }

        if items.len() == 1 {
            Ok(items.pop().map(|expr| (expr, pos)))
        } else {
            Ok(Some((Expr::Comma(items), pos)))
        }
    }

    /// comparison → expression ( "<" | "<=" | ">" | ">=" | "==" ) expression
    ///
    /// Exactly one operator; only used inside `if`, `while` and `for`
    /// headers, so a missing piece is always an error.
    pub fn comparison(&mut self, pos: usize) -> GscriptResult<(Expr, usize)> {
        let Some((left, pos)) = self.expression(pos)? else {
            return Err(self.error_at(pos, "expected condition"));
        };

        let op = match self.kind_at(pos) {
            TokenKind::Less => CompareOp::Less,
            TokenKind::LessEqual => CompareOp::LessEqual,
            TokenKind::Greater => CompareOp::Greater,
            TokenKind::GreaterEqual => CompareOp::GreaterEqual,
            TokenKind::EqualEqual => CompareOp::Equal,
            _ => return Err(self.error_at(pos, "expected comparison operator")),
        };

        let Some((right, next)) = self.expression(pos + 1)? else {
            return Err(self.error_at(pos + 1, &format!("expected expression after '{}'", op)));
        };

        let expr = Expr::Compare {
            op,
            left: Box::new(left),
            right: Box::new(right),
        };

        Ok((expr, next))
    }

    /// expression → term ( ( "+" | "-" ) term )*
    pub fn expression(&mut self, pos: usize) -> Parsed<Expr> {
        self.binary_level(pos, &["+", "-"], Self::term)
    }

    /// term → factor ( ( "*" | "/" ) factor )*
    fn term(&mut self, pos: usize) -> Parsed<Expr> {
        self.binary_level(pos, &["*", "/"], Self::factor)
    }

    /// One left-associative precedence tier.
    fn binary_level(
        &mut self,
        pos: usize,
        operators: &[&str],
        operand: fn(&mut Self, usize) -> Parsed<Expr>,
    ) -> Parsed<Expr> {
        let Some((mut expr, mut pos)) = operand(self, pos)? else {
            return Ok(None);
        };

        while let Some(op) = self.operator_in(pos, operators) {
            let Some((right, next)) = operand(self, pos + 1)? else {
                return Err(self.error_at(pos + 1, &format!("expected operand after '{}'", op)));
            };

            expr = Expr::Binary {
                op,
                left: Box::new(expr),
                right: Box::new(right),
            };
            pos = next;
        }

        Ok(Some((expr, pos)))
    }

    fn operator_in(&self, pos: usize, operators: &[&str]) -> Option<BinaryOp> {
        let token = self.token_at(pos);
        if token.kind != TokenKind::Operator || !operators.contains(&token.lexeme.as_str()) {
            return None;
        }
        BinaryOp::from_lexeme(&token.lexeme)
    }

    /// factor → NUMBER | STRING | "(" expression ")" | "-" factor
    ///        | IDENTIFIER "(" arguments ")" | IDENTIFIER
    fn factor(&mut self, pos: usize) -> Parsed<Expr> {
        match self.kind_at(pos) {
            TokenKind::Number => Ok(Some((Expr::Number(self.number_literal(pos)?), pos + 1))),

            TokenKind::String => Ok(Some((Expr::Str(self.string_literal(pos)), pos + 1))),

            TokenKind::LParen => self.nested(pos, |p| {
                let Some((inner, next)) = p.expression(pos + 1)? else {
                    return Err(p.error_at(pos + 1, "expected expression after '('"));
                };
                let next = p.expect(next, TokenKind::RParen, "')'")?;
                Ok(Some((inner, next)))
            }),

            TokenKind::Operator if self.check_operator(pos, "-") => self.nested(pos, |p| {
                let Some((operand, next)) = p.factor(pos + 1)? else {
                    return Err(p.error_at(pos + 1, "expected operand after '-'"));
                };
                Ok(Some((negate(operand), next)))
            }),

            TokenKind::Identifier if self.check(pos + 1, TokenKind::LParen) => {
                let (call, next) = self.call(pos)?;
                Ok(Some((Expr::Call(call), next)))
            }

            TokenKind::Identifier => {
                let name = self.token_at(pos).lexeme.clone();
                Ok(Some((Expr::Variable(name), pos + 1)))
            }

            _ => Ok(None),
        }
    }

    /// call → IDENTIFIER "(" ( expression ( "," expression )* )? ")"
    ///
    /// The caller has already seen `IDENTIFIER "("`; whether the name is
    /// defined is decided at run time.
    pub fn call(&mut self, pos: usize) -> GscriptResult<(Call, usize)> {
        let name_token = self.token_at(pos);
        let name = name_token.lexeme.clone();
        let span = name_token.span;

        self.nested(pos, |p| {
            let mut args = Vec::new();
            let mut pos = pos + 2;

            if !p.check(pos, TokenKind::RParen) {
                loop {
                    let Some((arg, next)) = p.expression(pos)? else {
                        return Err(p.error_at(pos, "expected argument"));
                    };
                    args.push(arg);
                    pos = next;

                    if !p.check(pos, TokenKind::Comma) {
                        break;
                    }
                    pos += 1;
                }
            }

            let pos = p.expect(pos, TokenKind::RParen, "')' after arguments")?;
            Ok((Call { name, args, span }, pos))
        })
    }

    /// Parses a call only when `name` is already in the symbol table.
    pub fn known_call(&mut self, pos: usize) -> Parsed<Call> {
        let token = self.token_at(pos);
        let is_known = token.kind == TokenKind::Identifier && self.symbols.contains(&token.lexeme);

        if !is_known || !self.check(pos + 1, TokenKind::LParen) {
            return Ok(None);
        }

        self.call(pos).map(Some)
    }

    pub fn number_literal(&self, pos: usize) -> GscriptResult<f64> {
        self.token_at(pos)
            .lexeme
            .parse::<f64>()
            .map_err(|_| self.error_at(pos, "expected a number"))
    }

    fn string_literal(&self, pos: usize) -> String {
        let lexeme = &self.token_at(pos).lexeme;
        lexeme.trim_start_matches('"').trim_end_matches('"').to_string()
    }
}

/// `-5` folds to a literal; anything else becomes `0 - operand`.
fn negate(operand: Expr) -> Expr {
    match operand {
        Expr::Number(n) => Expr::Number(-n),
        other => Expr::Binary {
            op: BinaryOp::Sub,
            left: Box::new(Expr::Number(0.0)),
            right: Box::new(other),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::lexer::{tokenize, Token};
    use crate::parser::symbols::SymbolTable;

    fn with_parser<T>(source: &str, f: impl FnOnce(&mut Parser<'_>) -> T) -> T {
        let tokens: Vec<Token> = tokenize(source);
        let mut symbols = SymbolTable::new();
        let mut parser = Parser::new(&tokens, &mut symbols);
        f(&mut parser)
    }

    fn expr(source: &str) -> Expr {
        with_parser(source, |p| p.comma_expression(0).unwrap().unwrap().0)
    }

    fn num(n: f64) -> Box<Expr> {
        Box::new(Expr::Number(n))
    }

    #[test]
    fn multiplication_binds_tighter() {
        assert_eq!(
            expr("2 + 3 * 4"),
            Expr::Binary {
                op: BinaryOp::Add,
                left: num(2.0),
                right: Box::new(Expr::Binary {
                    op: BinaryOp::Mul,
                    left: num(3.0),
                    right: num(4.0),
                }),
            }
        );
    }

    #[test]
    fn same_tier_is_left_associative() {
        assert_eq!(
            expr("8 - 3 - 1"),
            Expr::Binary {
                op: BinaryOp::Sub,
                left: Box::new(Expr::Binary {
                    op: BinaryOp::Sub,
                    left: num(8.0),
                    right: num(3.0),
                }),
                right: num(1.0),
            }
        );
    }

    #[test]
    fn parentheses_override_precedence() {
        match &expr("(2 + 3) * 4") {
            Expr::Binary { op: BinaryOp::Mul, left, .. } => {
                assert!(matches!(**left, Expr::Binary { op: BinaryOp::Add, .. }));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn identifiers_stay_symbolic() {
        assert_eq!(expr("y"), Expr::Variable("y".to_string()));
    }

    #[test]
    fn unary_minus_folds_literals() {
        assert_eq!(expr("-5"), Expr::Number(-5.0));
        assert_eq!(
            expr("-n"),
            Expr::Binary {
                op: BinaryOp::Sub,
                left: num(0.0),
                right: Box::new(Expr::Variable("n".to_string())),
            }
        );
    }

    #[test]
    fn comma_lists_collect_elements() {
        assert_eq!(
            expr("1, \"two\", x"),
            Expr::Comma(vec![
                Expr::Number(1.0),
                Expr::Str("two".to_string()),
                Expr::Variable("x".to_string()),
            ])
        );
    }

    #[test]
    fn calls_parse_inside_arithmetic() {
        match &expr("f(1, 2) * 3") {
            Expr::Binary { left, .. } => match &**left {
                Expr::Call(call) => {
                    assert_eq!(call.name, "f");
                    assert_eq!(call.args, vec![Expr::Number(1.0), Expr::Number(2.0)]);
                }
                other => panic!("unexpected {:?}", other),
            },
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn known_call_requires_a_definition() {
        with_parser("f(1)", |p| {
            assert!(p.known_call(0).unwrap().is_none());
        });
    }

    #[test]
    fn comparison_requires_exactly_one_operator() {
        let (cmp, next) = with_parser("a <= b + 1", |p| p.comparison(0).unwrap());
        assert!(matches!(cmp, Expr::Compare { op: CompareOp::LessEqual, .. }));
        assert_eq!(next, 5);

        let err = with_parser("a + 1", |p| p.comparison(0).unwrap_err());
        assert!(matches!(err.kind, ErrorKind::Syntax { position: 3, .. }));
    }

    #[test]
    fn dangling_operator_is_an_error() {
        let err = with_parser("1 +", |p| p.expression(0).unwrap_err());
        assert_eq!(err.to_string(), "expected operand after '+', found end of input at position 2");
    }

    #[test]
    fn unclosed_parenthesis_is_an_error() {
        let err = with_parser("(1 + 2", |p| p.expression(0).unwrap_err());
        assert!(matches!(err.kind, ErrorKind::Syntax { position: 4, .. }));
    }

    #[test]
    fn non_expression_start_is_no_match() {
        assert!(with_parser("; x", |p| p.expression(0).unwrap()).is_none());
    }
}
