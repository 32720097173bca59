/*
 * ==========================================================================
 * LAMBDA-SYNTAX - Front end for the lambda expression language
 * ==========================================================================
 * 
 * File:      error.rs
 * Purpose:   The single fatal error kind raised while lexing or parsing.
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

use crate::span::Span;
use thiserror::Error;

/// A fatal syntax error.
///
/// This is the only error the front end produces. It is raised by the
/// character cursor, the lexer or the parser and travels up unchanged
/// through `?`; nothing in the crate catches or wraps it, and no partial
/// AST is ever returned alongside it.
///
/// The `Display` form is `message (line:column)`:
/// ```text
/// Can't handle character: $ (1:4)
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message} ({span})")]
pub struct SyntaxError {
    /// Human-readable error message
    pub message: String,

    /// Where the failure was detected
    pub span: Span,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }

    /// 1-based line of the failure.
    pub fn line(&self) -> usize {
        self.span.line
    }

    /// 0-based column of the failure.
    pub fn column(&self) -> usize {
        self.span.column
    }
}

pub type Result<T> = std::result::Result<T, SyntaxError>;
