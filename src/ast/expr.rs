/*
 * ==========================================================================
 * LAMBDA-SYNTAX - Front end for the lambda expression language
 * ==========================================================================
 * 
 * File:      expr.rs
 * Purpose:   AST node definitions produced by the parser.
 * 
 * License:
 * This file is part of the lambda-syntax project.
 * 
 * lambda-syntax is dual-licensed under the terms of:
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

use serde::Serialize;

/// A parsed program: an ordered list of top-level expressions.
///
/// Also used for `{ ... }` blocks holding two or more expressions, which
/// appear in the tree as [`Expr::Program`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Program {
    #[serde(rename = "prog")]
    pub body: Vec<Expr>,
}

/// An expression node.
///
/// Every child is owned by its parent, so the tree is acyclic and
/// immutable once the parser hands it over.
///
/// Serializes to the structured form downstream tools consume, tagged by
/// a short `"type"` name:
/// ```text
/// 1 + x   →  { "type": "binary", "operator": "+",
///              "left":  { "type": "num", "value": 1.0 },
///              "right": { "type": "var", "value": "x" } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Expr {
    #[serde(rename = "num")]
    Number { value: f64 },

    #[serde(rename = "str")]
    String { value: String },

    #[serde(rename = "bool")]
    Bool { value: bool },

    #[serde(rename = "var")]
    Var {
        #[serde(rename = "value")]
        name: String,
    },

    /// `target = value`. The target is always an [`Expr::Var`].
    #[serde(rename = "assign")]
    Assign {
        #[serde(rename = "left")]
        target: Box<Expr>,
        #[serde(rename = "right")]
        value: Box<Expr>,
    },

    #[serde(rename = "binary")]
    Binary {
        operator: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    #[serde(rename = "if")]
    If {
        cond: Box<Expr>,
        #[serde(rename = "then")]
        then_branch: Box<Expr>,
        #[serde(rename = "else", skip_serializing_if = "Option::is_none")]
        else_branch: Option<Box<Expr>>,
    },

    /// Anonymous function. Parameter names are not checked for
    /// duplicates.
    #[serde(rename = "lambda")]
    Lambda {
        #[serde(rename = "vars")]
        params: Vec<String>,
        body: Box<Expr>,
    },

    /// Function application. The callee is any expression, so
    /// `f(x)(y)` nests a call inside a call.
    #[serde(rename = "call")]
    Call {
        #[serde(rename = "func")]
        callee: Box<Expr>,
        args: Vec<Expr>,
    },

    /// A `{ a; b; ... }` block with at least two expressions.
    #[serde(rename = "prog")]
    Program(Program),
}

impl Expr {
    pub fn number(value: f64) -> Self {
        Expr::Number { value }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expr::String {
            value: value.into(),
        }
    }

    pub fn bool(value: bool) -> Self {
        Expr::Bool { value }
    }

    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var { name: name.into() }
    }

    pub fn assign(target: Expr, value: Expr) -> Self {
        Expr::Assign {
            target: Box::new(target),
            value: Box::new(value),
        }
    }

    pub fn binary(operator: impl Into<String>, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            operator: operator.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn if_else(cond: Expr, then_branch: Expr, else_branch: Option<Expr>) -> Self {
        Expr::If {
            cond: Box::new(cond),
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
        }
    }

    pub fn lambda(params: Vec<String>, body: Expr) -> Self {
        Expr::Lambda {
            params,
            body: Box::new(body),
        }
    }

    pub fn call(callee: Expr, args: Vec<Expr>) -> Self {
        Expr::Call {
            callee: Box::new(callee),
            args,
        }
    }

    pub fn program(body: Vec<Expr>) -> Self {
        Expr::Program(Program { body })
    }

    /// True for the only form that may stand on the left of `=`.
    pub fn is_assignable(&self) -> bool {
        matches!(self, Expr::Var { .. })
    }
}

impl Program {
    pub fn new(body: Vec<Expr>) -> Self {
        Self { body }
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Compact JSON form of the tree.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.tagged())
    }

    /// Indented JSON form of the tree.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.tagged())
    }

    /// The top-level program carries the same `"type": "prog"` tag as a
    /// nested block.
    fn tagged(&self) -> TaggedProgram<'_> {
        TaggedProgram {
            kind: "prog",
            program: self,
        }
    }
}

#[derive(Serialize)]
struct TaggedProgram<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(flatten)]
    program: &'a Program,
}
