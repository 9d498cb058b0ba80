/*
 * ==========================================================================
 * GScript - a tiny scripting language
 * ==========================================================================
 *
 * Interpreter Entry & Runtime State
 * ---------------------------------
 * This module is the **primary runtime entrypoint** for GScript. It owns:
 *
 *  - The current variable environment
 *  - The runtime function table, filled as definitions execute
 *  - The output writer used by `print`
 *  - The call-depth guard and the error policy
 *
 * Host entry points (`run`, `call`) execute on a dedicated thread whose
 * stack is sized from `max_call_depth`, so hitting the configured limit is
 * reported as `E_RECURSION_LIMIT` instead of overflowing the caller's stack.
 *
 * All actual evaluation logic is delegated to the following submodules:
 *
 *  - statements.rs  → Statement execution (exec_stmt / exec_block)
 *  - expressions.rs → Expression evaluation (eval_expr)
 *  - calls.rs       → User functions and the `print` builtin
 *  - display.rs     → Value formatting utilities
 *  - helpers.rs     → Truthiness
 *
 * --------------------------------------------------------------------------
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

pub mod calls;
pub mod display;
pub mod environment;
pub mod expressions;
pub mod helpers;
pub mod statements;

use std::io::Write;
use std::panic;
use std::thread;

use crate::config::Config;
use crate::error::{GscriptError, GscriptResult};
use crate::parser::{Program, SymbolTable};
use crate::value::Value;

pub use environment::Environment;
pub use statements::ExecSignal;

/// Stack reserved for the interpreter thread before any calls are made.
const BASE_STACK_SIZE: usize = 32 * 1024 * 1024;

/// Extra stack reserved per allowed level of call depth.
const STACK_PER_CALL: usize = 256 * 1024;

/// Tree-walking evaluator for parsed programs.
///
/// `W` receives everything `print` writes: stdout in the CLI, a `Vec<u8>`
/// in tests.
pub struct Interpreter<W: Write> {
    config: Config,
    out: W,
    env: Environment,
    functions: SymbolTable,
    depth: usize,
}

impl<W: Write> Interpreter<W> {
    pub fn new(config: Config, out: W) -> Self {
        Self {
            config,
            out,
            env: Environment::new(),
            functions: SymbolTable::new(),
            depth: 0,
        }
    }

    fn run_statements(&mut self, program: &Program) -> GscriptResult<Vec<GscriptError>> {
        let mut errors = Vec::new();

        for stmt in &program.statements {
            match self.exec_stmt(stmt) {
                Ok(ExecSignal::Normal) => {}
                // Top-level `return` is rejected by the parser.
                Ok(ExecSignal::Returning(_)) => break,
                Err(err) if self.config.continue_on_error => {
                    self.trace(format_args!("recovered from {}: {}", err.code(), err));
                    errors.push(err);
                }
                Err(err) => return Err(err),
            }
        }

        self.out.flush()?;
        Ok(errors)
    }

    /// Current value of a global variable, if bound.
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.env.lookup(name)
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Names of the functions whose definitions have executed.
    pub fn functions(&self) -> Vec<&str> {
        self.functions.names()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub(crate) fn trace(&self, message: std::fmt::Arguments<'_>) {
        if self.config.trace {
            eprintln!("trace: {}{}", "  ".repeat(self.depth), message);
        }
    }

    /// Stack size for the interpreter thread under the current config.
    pub fn stack_size(&self) -> usize {
        self.config
            .max_call_depth
            .saturating_mul(STACK_PER_CALL)
            .saturating_add(BASE_STACK_SIZE)
    }
}

impl<W: Write + Send> Interpreter<W> {
    /// Executes every top-level statement of `program` in order.
    ///
    /// With `continue_on_error` off the first runtime error is returned as
    /// `Err`. With it on, a failing statement is abandoned, the run moves on
    /// to the next one, and all collected errors are returned as `Ok`.
    pub fn run(&mut self, program: &Program) -> GscriptResult<Vec<GscriptError>> {
        self.on_interpreter_stack(|interp| interp.run_statements(program))
    }

    /// Calls a function by name with already-evaluated arguments.
    ///
    /// # Errors
    /// - `E_UNDEFINED_FUNCTION` if no definition for `name` has executed
    /// - `E_RECURSION_LIMIT` past `max_call_depth` nested calls
    /// - anything the body raises
    pub fn call(&mut self, name: &str, args: Vec<Value>) -> GscriptResult<Value> {
        self.on_interpreter_stack(|interp| interp.call_function(name, args))
    }

    /// Runs `f` on a scoped thread with room for `max_call_depth` calls.
    ///
    /// A panic on that thread is resumed on the caller's.
    fn on_interpreter_stack<T, F>(&mut self, f: F) -> GscriptResult<T>
    where
        T: Send,
        F: FnOnce(&mut Self) -> GscriptResult<T> + Send,
    {
        let stack_size = self.stack_size();

        thread::scope(|scope| {
            let handle = thread::Builder::new()
                .name("gscript-interpreter".to_string())
                .stack_size(stack_size)
                .spawn_scoped(scope, move || f(self))?;

            match handle.join() {
                Ok(result) => result,
                Err(payload) => panic::resume_unwind(payload),
            }
        })
    }
}
