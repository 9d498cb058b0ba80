/*
 * ==========================================================================
 * GScript - a tiny scripting language
 * ==========================================================================
 *
 * File:     interpreter/expressions.rs
 * Purpose:  Expression evaluation, arithmetic and comparisons.
 *
 * Arithmetic is defined on numbers only and uses real division. Comparisons
 * produce `1` or `0`; numbers order numerically and strings
 * lexicographically.
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

use std::cmp::Ordering;
use std::io::Write;

use crate::ast::{BinaryOp, CompareOp, Expr};
use crate::error::{ArithmeticFault, GscriptError, GscriptResult};
use crate::interpreter::Interpreter;
use crate::value::Value;

impl<W: Write> Interpreter<W> {
    /// Evaluates an expression against the current environment.
    pub fn eval_expr(&mut self, expr: &Expr) -> GscriptResult<Value> {
        match expr {
            Expr::Number(n) => Ok(Value::Number(*n)),
            Expr::Str(s) => Ok(Value::String(s.clone())),
            Expr::Variable(name) => Ok(self.env.get(name)),

            Expr::Binary { .. } => self.eval_chain(expr),

            Expr::Compare { op, left, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                compare(*op, left, right)
            }

            Expr::Comma(items) => {
                let mut last = Value::Null;
                for item in items {
                    last = self.eval_expr(item)?;
                }
                Ok(last)
            }

            Expr::Call(call) => self.eval_call(call),
        }
    }

    /// Evaluates a left-leaning run of `Binary` nodes in a loop.
    ///
    /// `a + b + c` nests to the left, so the spine is walked down to the
    /// leftmost operand first and then folded back up, left to right.
    fn eval_chain(&mut self, expr: &Expr) -> GscriptResult<Value> {
        let mut spine = Vec::new();
        let mut leftmost = expr;
        while let Expr::Binary { op, left, right } = leftmost {
            spine.push((*op, right.as_ref()));
            leftmost = left;
        }

        let mut acc = self.eval_expr(leftmost)?;
        for (op, right) in spine.into_iter().rev() {
            let right = self.eval_expr(right)?;
            acc = arithmetic(op, acc, right)?;
        }
        Ok(acc)
    }
}

/// Applies `+ - * /` to two evaluated operands.
pub fn arithmetic(op: BinaryOp, left: Value, right: Value) -> GscriptResult<Value> {
    let (Some(a), Some(b)) = (left.as_number(), right.as_number()) else {
        return Err(GscriptError::arithmetic_error(
            op.symbol(),
            left,
            right,
            ArithmeticFault::NonNumericOperand,
        ));
    };

    let result = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => {
            if b == 0.0 {
                return Err(GscriptError::arithmetic_error(
                    op.symbol(),
                    left,
                    right,
                    ArithmeticFault::DivisionByZero,
                ));
            }
            a / b
        }
    };

    Ok(Value::Number(result))
}

/// Evaluates a single comparison to `Number(1)` or `Number(0)`.
///
/// `==` between different kinds is simply false; ordering them is an error.
/// Numbers use IEEE rules, so any comparison involving NaN is false.
pub fn compare(op: CompareOp, left: Value, right: Value) -> GscriptResult<Value> {
    if let (Value::Number(a), Value::Number(b)) = (&left, &right) {
        let holds = match op {
            CompareOp::Less => a < b,
            CompareOp::LessEqual => a <= b,
            CompareOp::Greater => a > b,
            CompareOp::GreaterEqual => a >= b,
            CompareOp::Equal => a == b,
        };
        return Ok(Value::from_bool(holds));
    }

    let ordering = match (&left, &right) {
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Null, Value::Null) => Some(Ordering::Equal),
        _ => None,
    };

    let holds = match (op, ordering) {
        (CompareOp::Equal, ordering) => ordering == Some(Ordering::Equal),
        (_, None) => {
            return Err(GscriptError::arithmetic_error(
                op.symbol(),
                left,
                right,
                ArithmeticFault::Incomparable,
            ))
        }
        (CompareOp::Less, Some(o)) => o == Ordering::Less,
        (CompareOp::LessEqual, Some(o)) => o != Ordering::Greater,
        (CompareOp::Greater, Some(o)) => o == Ordering::Greater,
        (CompareOp::GreaterEqual, Some(o)) => o != Ordering::Less,
    };

    Ok(Value::from_bool(holds))
}
