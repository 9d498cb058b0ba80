/*
 * ==========================================================================
 * GScript - a tiny scripting language
 * ==========================================================================
 *
 * File:     parser/rules.rs
 * Purpose:  The ordered registry of statement-level grammar rules.
 *
 * Every rule is tried through the same entry point, `Rule::try_parse`,
 * which receives the parser and a cursor position and either returns a
 * node plus the position after it, or `None` without touching any state.
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

use crate::ast::Stmt;
use crate::parser::parser::{Parsed, Parser};
use crate::parser::statements::Terminator;

/// Where a statement is being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    /// Directly in the program.
    TopLevel,

    /// Inside a block that is not part of a function body.
    Block,

    /// Anywhere inside a function body, at any block depth.
    FunctionBody,
}

impl Context {
    /// The context for statements of a block opened in this context.
    pub fn nested(self) -> Self {
        match self {
            Context::TopLevel | Context::Block => Context::Block,
            Context::FunctionBody => Context::FunctionBody,
        }
    }
}

/// One syntactic statement form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    FunctionDef,
    Var,
    Assignment,
    Condition,
    Loop,
    Return,
    FunctionCall,
    Expression,
}

/// Registration order. Earlier rules shadow later ones: `Assignment` must
/// precede `FunctionCall` and `Expression`, and `FunctionCall` must precede
/// `Expression`.
pub const REGISTRY: [Rule; 8] = [
    Rule::FunctionDef,
    Rule::Var,
    Rule::Assignment,
    Rule::Condition,
    Rule::Loop,
    Rule::Return,
    Rule::FunctionCall,
    Rule::Expression,
];

impl Rule {
    pub fn name(self) -> &'static str {
        match self {
            Rule::FunctionDef => "function-definition",
            Rule::Var => "variable-declaration",
            Rule::Assignment => "assignment",
            Rule::Condition => "conditional",
            Rule::Loop => "loop",
            Rule::Return => "return",
            Rule::FunctionCall => "function-call",
            Rule::Expression => "expression",
        }
    }

    /// Blocks try every rule except function definitions.
    pub fn allowed_in(self, context: Context) -> bool {
        match self {
            Rule::FunctionDef => context == Context::TopLevel,
            _ => true,
        }
    }

    pub fn try_parse(self, parser: &mut Parser<'_>, pos: usize, context: Context) -> Parsed<Stmt> {
        match self {
            Rule::FunctionDef => parser.function_definition(pos),
            Rule::Var => parser.var_declaration(pos),
            Rule::Assignment => parser.assignment(pos, Terminator::Required),
            Rule::Condition => parser.condition(pos, context),
            Rule::Loop => parser.loop_statement(pos, context),
            Rule::Return => parser.return_statement(pos, context),
            Rule::FunctionCall => parser.function_call_statement(pos),
            Rule::Expression => parser.expression_statement(pos),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::parser::symbols::SymbolTable;

    #[test]
    fn assignment_comes_before_calls_and_expressions() {
        let index = |rule| REGISTRY.iter().position(|r| *r == rule);
        assert!(index(Rule::Assignment) < index(Rule::FunctionCall));
        assert!(index(Rule::FunctionCall) < index(Rule::Expression));
    }

    #[test]
    fn function_definitions_are_top_level_only() {
        assert!(Rule::FunctionDef.allowed_in(Context::TopLevel));
        assert!(!Rule::FunctionDef.allowed_in(Context::Block));
        assert!(!Rule::FunctionDef.allowed_in(Context::FunctionBody));
        assert!(Rule::Return.allowed_in(Context::FunctionBody));
    }

    #[test]
    fn nested_context_remembers_function_bodies() {
        assert_eq!(Context::TopLevel.nested(), Context::Block);
        assert_eq!(Context::FunctionBody.nested(), Context::FunctionBody);
    }

    #[test]
    fn rules_fail_without_side_effects() {
        let tokens = tokenize("y + 1;");
        let mut symbols = SymbolTable::new();
        let mut parser = Parser::new(&tokens, &mut symbols);

        for rule in [Rule::FunctionDef, Rule::Var, Rule::Assignment, Rule::FunctionCall] {
            assert!(rule.try_parse(&mut parser, 0, Context::TopLevel).unwrap().is_none());
        }
        assert_eq!(parser.current, 0);

        let (_, next) = Rule::Expression
            .try_parse(&mut parser, 0, Context::TopLevel)
            .unwrap()
            .unwrap();
        assert_eq!(next, 3);
        assert_eq!(parser.current, 0);
    }
}
