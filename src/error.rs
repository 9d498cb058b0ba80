/*
 * ==========================================================================
 * GScript - a tiny scripting language
 * ==========================================================================
 *
 * File:     error.rs
 * Purpose:  The single error type shared by the parser, the interpreter,
 *           configuration loading and the CLI.
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

use std::fmt;

use crate::lexer::Token;
use crate::span::Span;
use crate::value::Value;

/// Why an arithmetic or comparison operation could not be performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticFault {
    DivisionByZero,
    NonNumericOperand,
    Incomparable,
}

/// The typed failure categories.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    /// No grammar rule matched at `position` (an index into the token
    /// sequence), or a committed rule found a malformed remainder there.
    Syntax {
        position: usize,
        token: String,
        message: String,
    },

    /// A call targets a name with no function definition.
    UndefinedFunction { name: String },

    /// Division by zero, a non-numeric operand, or incomparable operands.
    Arithmetic {
        operator: String,
        left: Value,
        right: Value,
        fault: ArithmeticFault,
    },

    /// Call depth or parser nesting exceeded the configured limit.
    RecursionLimit { limit: usize },

    /// Writing program output or reading a file failed.
    Io(String),

    /// A configuration file could not be understood.
    Config(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GscriptError {
    pub kind: ErrorKind,

    /// Primary source location, when one is known.
    pub span: Option<Span>,

    /// Optional note / help text
    pub help: Option<String>,
}

pub type GscriptResult<T> = Result<T, GscriptError>;

impl GscriptError {
    /// Generic constructor
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            span: None,
            help: None,
        }
    }

    /// Syntax error at a token. `message` already names the token.
    pub fn syntax_error(position: usize, token: &Token, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Syntax {
            position,
            token: token.to_string(),
            message: message.into(),
        })
        .with_span(token.span)
    }

    pub fn undefined_function(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UndefinedFunction { name: name.into() })
    }

    pub fn arithmetic_error(
        operator: impl Into<String>,
        left: Value,
        right: Value,
        fault: ArithmeticFault,
    ) -> Self {
        Self::new(ErrorKind::Arithmetic {
            operator: operator.into(),
            left,
            right,
            fault,
        })
    }

    pub fn recursion_limit(limit: usize) -> Self {
        Self::new(ErrorKind::RecursionLimit { limit })
    }

    pub fn io_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config(message.into()))
    }

    /// Stable error code (E_SYNTAX, E_ARITHMETIC, …)
    pub fn code(&self) -> &'static str {
        match self.kind {
            ErrorKind::Syntax { .. } => "E_SYNTAX",
            ErrorKind::UndefinedFunction { .. } => "E_UNDEFINED_FUNCTION",
            ErrorKind::Arithmetic { .. } => "E_ARITHMETIC",
            ErrorKind::RecursionLimit { .. } => "E_RECURSION_LIMIT",
            ErrorKind::Io(_) => "E_IO",
            ErrorKind::Config(_) => "E_CONFIG",
        }
    }

    /// Attach a source location (builder-style). An existing span is kept.
    pub fn with_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
        }
        self
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Syntax { position, message, .. } => {
                write!(f, "{} at position {}", message, position)
            }
            ErrorKind::UndefinedFunction { name } => {
                write!(f, "undefined function '{}'", name)
            }
            ErrorKind::Arithmetic {
                operator,
                left,
                right,
                fault,
            } => {
                let reason = match fault {
                    ArithmeticFault::DivisionByZero => "division by zero",
                    ArithmeticFault::NonNumericOperand => "non-numeric operand",
                    ArithmeticFault::Incomparable => "operands cannot be compared",
                };
                write!(
                    f,
                    "{} in {} {} {}",
                    reason,
                    quoted(left),
                    operator,
                    quoted(right)
                )
            }
            ErrorKind::RecursionLimit { limit } => {
                write!(f, "recursion limit of {} exceeded", limit)
            }
            ErrorKind::Io(message) => write!(f, "i/o error: {}", message),
            ErrorKind::Config(message) => write!(f, "invalid configuration: {}", message),
        }
    }
}

/// Strings are shown quoted so `"1" + 2` reads unambiguously.
fn quoted(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", s),
        other => other.to_string(),
    }
}

impl fmt::Display for GscriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for GscriptError {}

impl From<std::io::Error> for GscriptError {
    fn from(err: std::io::Error) -> Self {
        GscriptError::io_error(err.to_string())
    }
}
