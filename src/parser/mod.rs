/*
 * ==========================================================================
 * LAMBDA-SYNTAX - Front end for the lambda expression language
 * ==========================================================================
 * 
 * File:      mod.rs
 * Purpose:   Parsing: token stream to AST.
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

/// Core parser orchestration:
/// - Owns the `Parser` struct
/// - Exposes the `parse` entry points
#[allow(clippy::module_inception)]
pub mod parser;

/// Expression grammar:
/// - precedence climbing over atoms
/// - call postfix, blocks, `if`, lambdas
pub mod expressions;

/// Shared parser helpers:
/// - token matching and lookahead checks
/// - punctuation / keyword consumption
/// - delimited lists
pub mod helpers;

pub use expressions::precedence;
pub use parser::{parse, parse_with_options, Parser};
