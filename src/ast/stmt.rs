/*
 * ==========================================================================
 * GScript - a tiny scripting language
 * ==========================================================================
 *
 * File:     ast/stmt.rs
 * Purpose:  Statement nodes produced by the grammar rules.
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

use serde::Serialize;

use crate::ast::{Call, Expr};

/// A brace-delimited statement sequence.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

/// Parameter names and body of a user function.
///
/// Shared between the AST, the parse-time symbol table and the interpreter's
/// runtime function table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionDef {
    pub params: Vec<String>,
    pub body: Block,
}

/// All executable GScript statements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Stmt {
    /* ----------------------------- */
    /* VARIABLES                     */
    /* ----------------------------- */

    Assign {
        name: String,
        value: Expr,
    },

    /// `var <assignment | expression>`: no scoping of its own.
    Var(Box<Stmt>),

    /* ----------------------------- */
    /* EXPRESSIONS                   */
    /* ----------------------------- */

    Expression(Expr),

    FunctionCall(Call),

    /* ----------------------------- */
    /* CONTROL FLOW                  */
    /* ----------------------------- */

    Condition {
        cond: Expr,
        then_block: Block,
        else_block: Option<Block>,
    },

    While {
        cond: Expr,
        body: Block,
    },

    For {
        init: Box<Stmt>,
        cond: Expr,
        step: Box<Stmt>,
        body: Block,
    },

    /* ----------------------------- */
    /* FUNCTIONS                     */
    /* ----------------------------- */

    FunctionDef {
        name: String,
        def: Arc<FunctionDef>,
    },

    Return(Expr),
}
