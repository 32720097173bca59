/*
 * ==========================================================================
 * LAMBDA-SYNTAX - Front end for the lambda expression language
 * ==========================================================================
 * 
 * File:      lib.rs
 * Purpose:   Crate root: lexer, parser and AST for the lambda language.
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

//! Front end for a small expression-oriented language with variables,
//! numbers, strings, booleans, `if`, first-class lambdas, calls,
//! assignment and `{ ...; ... }` blocks.
//!
//! ```text
//! Source → InputStream → Lexer → Parser → Program (AST)
//! ```
//!
//! Parsing is synchronous and single-pass. The first problem found is
//! returned as a [`SyntaxError`]; there is no recovery and no partial tree.
//!
//! ```rust
//! use lambda_syntax::{parse, Expr};
//!
//! let program = parse("a = b = 1").unwrap();
//! assert_eq!(
//!     program.body,
//!     vec![Expr::assign(Expr::var("a"), Expr::assign(Expr::var("b"), Expr::number(1.0)))]
//! );
//! ```

pub mod ast;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod options;
pub mod parser;
pub mod span;

pub use ast::{Expr, Program};
pub use diagnostics::DiagnosticPrinter;
pub use error::SyntaxError;
pub use lexer::{tokenize, Lexer, Token, TokenKind};
pub use options::ParseOptions;
pub use parser::{parse, parse_with_options, Parser};
pub use span::Span;
