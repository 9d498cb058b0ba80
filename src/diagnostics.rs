/*
 * ==========================================================================
 * GScript - a tiny scripting language
 * ==========================================================================
 *
 * File:     diagnostics.rs
 * Purpose:  Compiler-style rendering of errors against their source.
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

use std::fmt::Write;

use crate::error::GscriptError;
use crate::span::Span;

/// Responsible for rendering human-friendly, compiler-style diagnostics
/// for GScript errors.
///
/// This printer:
/// - Formats errors with file/line/column information
/// - Displays the offending source line
/// - Highlights the exact error position using a caret (`^`)
/// - Optionally shows a helpful follow-up hint
///
/// Errors without a location (configuration, i/o) render as the header
/// line plus any help.
pub struct DiagnosticPrinter {
    /// Full source code of the script being interpreted.
    source: String,

    /// Name shown after `-->`: a file path, or `<inline>` for scripts
    /// given on the command line.
    file_name: String,
}

impl DiagnosticPrinter {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Renders a diagnostic to a string.
    ///
    /// # Output Example
    /// ```text
    /// error[E_SYNTAX]: expected ')' after condition, found '{' at position 9
    ///   --> demo.gs:2:11
    ///    |
    ///   2 | if (x < 1 { y = 2; }
    ///    |           ^
    /// ```
    pub fn render(&self, error: &GscriptError) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "error[{}]: {}", error.code(), error);

        if let Some(Span { line, column }) = error.span {
            // Lines are 1-indexed; `saturating_sub` guards a zero line.
            let src_line = self.source.lines().nth(line.saturating_sub(1)).unwrap_or("");

            let _ = writeln!(out, "  --> {}:{}:{}", self.file_name, line, column + 1);
            let _ = writeln!(out, "   |");
            let _ = writeln!(out, "{:>3} | {}", line, src_line);
            let _ = writeln!(out, "   | {}^", " ".repeat(column));
        }

        if let Some(help) = &error.help {
            let _ = writeln!(out, "help: {}", help);
        }

        out
    }

    /// Prints a formatted error diagnostic to stderr.
    pub fn print(&self, error: &GscriptError) {
        eprint!("{}", self.render(error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::parser::parse;

    #[test]
    fn renders_source_line_and_caret() {
        let source = "x = 1;\nif (x < 1 { y = 2; }";
        let err = parse(&tokenize(source)).unwrap_err();
        let printer = DiagnosticPrinter::new("demo.gs", source);

        let expected = "\
error[E_SYNTAX]: expected ')' after condition, found '{' at position 9
  --> demo.gs:2:11
   |
  2 | if (x < 1 { y = 2; }
   |           ^
";
        assert_eq!(printer.render(&err), expected);
    }

    #[test]
    fn help_is_appended() {
        let source = "function f() { function g() { } }";
        let err = parse(&tokenize(source)).unwrap_err();
        let rendered = DiagnosticPrinter::new("<inline>", source).render(&err);

        assert!(rendered.starts_with("error[E_SYNTAX]: unexpected token 'function'"));
        assert!(rendered.ends_with("help: functions can only be defined at the top level\n"));
    }

    #[test]
    fn errors_without_location_render_header_only() {
        let err = GscriptError::config_error("expected value");
        let rendered = DiagnosticPrinter::new("gscript.json", "").render(&err);

        assert_eq!(rendered, "error[E_CONFIG]: invalid configuration: expected value\n");
    }
}
