/*
 * ==========================================================================
 * GScript - a tiny scripting language
 * ==========================================================================
 *
 * File:     interpreter/calls.rs
 * Purpose:  User-defined function invocation and the `print` builtin.
 *
 * A call runs on a copy of the caller's variables with the parameter names
 * removed and then rebound positionally. Whatever the body assigns is
 * discarded when the caller's environment is restored.
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
use std::mem;

use crate::ast::{Call, FunctionDef};
use crate::error::{GscriptError, GscriptResult};
use crate::interpreter::display::value_to_string;
use crate::interpreter::{ExecSignal, Interpreter};
use crate::value::Value;

/// Name of the output builtin. A user function with the same name wins.
pub const PRINT: &str = "print";

impl<W: Write> Interpreter<W> {
    /// Evaluates a call expression: arguments first, in the caller's
    /// environment, then the callee.
    ///
    /// Errors raised by the call carry the call site's location unless they
    /// already have a more precise one.
    pub fn eval_call(&mut self, call: &Call) -> GscriptResult<Value> {
        let args = call
            .args
            .iter()
            .map(|arg| self.eval_expr(arg))
            .collect::<GscriptResult<Vec<_>>>()?;

        self.call_function(&call.name, args)
            .map_err(|err| err.with_span(call.span))
    }

    /// Dispatches to a user function, then to `print`, on the current thread.
    pub(crate) fn call_function(&mut self, name: &str, args: Vec<Value>) -> GscriptResult<Value> {
        if let Some(def) = self.functions.get(name) {
            return self.call_user_function(name, &def, args);
        }

        if name == PRINT {
            return self.print(&args);
        }

        Err(GscriptError::undefined_function(name))
    }

    fn call_user_function(
        &mut self,
        name: &str,
        def: &FunctionDef,
        args: Vec<Value>,
    ) -> GscriptResult<Value> {
        if self.depth >= self.config.max_call_depth {
            return Err(GscriptError::recursion_limit(self.config.max_call_depth)
                .with_help(format!("'{}' recursed too deeply; check its base case", name)));
        }

        let mut call_env = self.env.clone();
        for param in &def.params {
            call_env.unbind(param);
        }
        // Extra arguments are ignored; missing ones stay unbound.
        for (param, value) in def.params.iter().zip(args) {
            call_env.set(param.as_str(), value);
        }

        self.trace(format_args!("call {}", name));

        let saved = mem::replace(&mut self.env, call_env);
        self.depth += 1;
        let result = self.exec_block(&def.body);
        self.depth -= 1;
        self.env = saved;

        let value = match result? {
            ExecSignal::Returning(value) => value,
            ExecSignal::Normal => Value::Null,
        };

        self.trace(format_args!("{} returned {}", name, value));
        Ok(value)
    }

    fn print(&mut self, args: &[Value]) -> GscriptResult<Value> {
        let line = args
            .iter()
            .map(value_to_string)
            .collect::<Vec<_>>()
            .join(" ");

        writeln!(self.out, "{}", line)?;
        Ok(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::ErrorKind;
    use crate::lexer::tokenize;
    use crate::parser::parse;
    use crate::span::Span;

    fn interpreter(source: &str, config: Config) -> (Interpreter<Vec<u8>>, GscriptResult<()>) {
        let program = parse(&tokenize(source)).unwrap();
        let mut interp = Interpreter::new(config, Vec::new());
        let result = interp.run(&program).map(|_| ());
        (interp, result)
    }

    fn output(interp: Interpreter<Vec<u8>>) -> String {
        String::from_utf8(interp.into_output()).unwrap()
    }

    #[test]
    fn arguments_bind_positionally() {
        let (interp, result) = interpreter(
            "function sub(a, b) { return a - b; } x = sub(10, 4);",
            Config::default(),
        );
        result.unwrap();
        assert_eq!(interp.variable("x"), Some(&Value::Number(6.0)));
    }

    #[test]
    fn missing_arguments_read_as_zero_and_extras_are_ignored() {
        let (interp, result) = interpreter(
            "function pair(a, b) { return a * 10 + b; } x = pair(3); y = pair(1, 2, 3);",
            Config::default(),
        );
        result.unwrap();
        assert_eq!(interp.variable("x"), Some(&Value::Number(30.0)));
        assert_eq!(interp.variable("y"), Some(&Value::Number(12.0)));
    }

    #[test]
    fn parameters_shadow_and_do_not_leak() {
        let (interp, result) = interpreter(
            "a = 100; function f(a) { b = a; return a + 1; } r = f(1);",
            Config::default(),
        );
        result.unwrap();
        assert_eq!(interp.variable("a"), Some(&Value::Number(100.0)));
        assert_eq!(interp.variable("r"), Some(&Value::Number(2.0)));
        assert_eq!(interp.variable("b"), None);
    }

    #[test]
    fn missing_argument_hides_a_global_of_the_same_name() {
        let (interp, result) = interpreter(
            "b = 7; function g(a, b) { return b; } r = g(1);",
            Config::default(),
        );
        result.unwrap();
        assert_eq!(interp.variable("r"), Some(&Value::Number(0.0)));
    }

    #[test]
    fn callee_sees_caller_globals_as_a_snapshot() {
        let (interp, result) = interpreter(
            "k = 5; function f() { k = k + 1; return k; } r = f();",
            Config::default(),
        );
        result.unwrap();
        assert_eq!(interp.variable("r"), Some(&Value::Number(6.0)));
        assert_eq!(interp.variable("k"), Some(&Value::Number(5.0)));
    }

    #[test]
    fn function_without_return_yields_null() {
        let (interp, result) = interpreter("function f() { x = 1; } r = f();", Config::default());
        result.unwrap();
        assert_eq!(interp.variable("r"), Some(&Value::Null));
    }

    #[test]
    fn recursion_works() {
        let (interp, result) = interpreter(
            "function fact(n) { if (n <= 1) { return 1; } return n * fact(n - 1); } r = fact(5);",
            Config::default(),
        );
        result.unwrap();
        assert_eq!(interp.variable("r"), Some(&Value::Number(120.0)));
    }

    #[test]
    fn runaway_recursion_hits_the_limit() {
        let config = Config {
            max_call_depth: 16,
            ..Config::default()
        };
        let (interp, result) = interpreter("function f(n) { return f(n + 1); } f(0);", config);

        let err = result.unwrap_err();
        assert_eq!(err.kind, ErrorKind::RecursionLimit { limit: 16 });
        assert!(err.help.is_some());
        assert!(interp.environment().is_empty());
    }

    #[test]
    fn caller_environment_is_restored_after_an_error() {
        let config = Config {
            continue_on_error: true,
            ..Config::default()
        };
        let (interp, result) = interpreter(
            "x = 1; function bad(x) { y = 2; return x / 0; } bad(5); z = x;",
            config,
        );
        result.unwrap();
        assert_eq!(interp.variable("z"), Some(&Value::Number(1.0)));
        assert_eq!(interp.variable("y"), None);
    }

    #[test]
    fn calling_before_definition_is_undefined() {
        let (_, result) = interpreter("r = later(); function later() { return 1; }", Config::default());
        let err = result.unwrap_err();

        assert!(matches!(err.kind, ErrorKind::UndefinedFunction { ref name } if name == "later"));
        assert_eq!(err.span, Some(Span::new(1, 4)));
    }

    #[test]
    fn print_writes_space_separated_line() {
        let (interp, result) = interpreter("print(\"sum:\", 1 + 2, 2.5); print();", Config::default());
        result.unwrap();
        assert_eq!(output(interp), "sum: 3 2.5\n\n");
    }

    #[test]
    fn user_function_named_print_wins() {
        let (interp, result) = interpreter(
            "function print(x) { return x * 2; } r = print(4);",
            Config::default(),
        );
        result.unwrap();
        assert_eq!(interp.variable("r"), Some(&Value::Number(8.0)));
        assert_eq!(output(interp), "");
    }

    #[test]
    fn host_can_call_functions_directly() {
        let (mut interp, result) =
            interpreter("function add(a, b) { return a + b; }", Config::default());
        result.unwrap();

        let sum = interp.call("add", vec![2.0.into(), 3.0.into()]).unwrap();
        assert_eq!(sum, Value::Number(5.0));

        let err = interp.call("missing", vec![]).unwrap_err();
        assert_eq!(err.code(), "E_UNDEFINED_FUNCTION");
    }
}
