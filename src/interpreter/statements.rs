/*
 * ==========================================================================
 * GScript - a tiny scripting language
 * ==========================================================================
 *
 * File:     interpreter/statements.rs
 * Purpose:  Statement execution and control-flow signalling.
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

use std::io::Write;
use std::sync::Arc;

use crate::ast::{Block, Expr, Stmt};
use crate::error::GscriptResult;
use crate::interpreter::helpers::is_truthy;
use crate::interpreter::Interpreter;
use crate::value::Value;

/* ============================================================================
 * Execution Control Signals
 * ============================================================================
 */

/// Internal control flow signal used by the interpreter.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecSignal {
    /// Normal fall-through execution.
    Normal,

    /// A `return` is unwinding towards the enclosing call.
    Returning(Value),
}

impl<W: Write> Interpreter<W> {
    /// Executes a single statement.
    ///
    /// This is the **core dispatch function for all statement execution**.
    pub fn exec_stmt(&mut self, stmt: &Stmt) -> GscriptResult<ExecSignal> {
        match stmt {
            Stmt::Assign { name, value } => {
                let value = self.eval_expr(value)?;
                self.env.set(name.as_str(), value);
                Ok(ExecSignal::Normal)
            }

            // `var` only marks a declaration; it runs like what it wraps.
            Stmt::Var(inner) => self.exec_stmt(inner),

            Stmt::Expression(expr) => {
                self.eval_expr(expr)?;
                Ok(ExecSignal::Normal)
            }

            Stmt::FunctionCall(call) => {
                self.eval_call(call)?;
                Ok(ExecSignal::Normal)
            }

            Stmt::Condition {
                cond,
                then_block,
                else_block,
            } => {
                if self.condition_holds(cond)? {
                    self.exec_block(then_block)
                } else if let Some(else_block) = else_block {
                    self.exec_block(else_block)
                } else {
                    Ok(ExecSignal::Normal)
                }
            }

            Stmt::While { cond, body } => {
                while self.condition_holds(cond)? {
                    if let signal @ ExecSignal::Returning(_) = self.exec_block(body)? {
                        return Ok(signal);
                    }
                }
                Ok(ExecSignal::Normal)
            }

            Stmt::For {
                init,
                cond,
                step,
                body,
            } => {
                self.exec_stmt(init)?;

                while self.condition_holds(cond)? {
                    if let signal @ ExecSignal::Returning(_) = self.exec_block(body)? {
                        return Ok(signal);
                    }
                    self.exec_stmt(step)?;
                }
                Ok(ExecSignal::Normal)
            }

            Stmt::FunctionDef { name, def } => {
                self.trace(format_args!("define {}({})", name, def.params.join(", ")));
                self.functions.define(name.as_str(), Arc::clone(def));
                Ok(ExecSignal::Normal)
            }

            Stmt::Return(expr) => Ok(ExecSignal::Returning(self.eval_expr(expr)?)),
        }
    }

    /// Runs statements in order, stopping at the first `Returning` signal.
    pub fn exec_block(&mut self, block: &Block) -> GscriptResult<ExecSignal> {
        for stmt in &block.statements {
            match self.exec_stmt(stmt)? {
                ExecSignal::Normal => {}
                signal => return Ok(signal),
            }
        }

        Ok(ExecSignal::Normal)
    }

    fn condition_holds(&mut self, cond: &Expr) -> GscriptResult<bool> {
        Ok(is_truthy(&self.eval_expr(cond)?))
    }
}
