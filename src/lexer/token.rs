/*
 * ==========================================================================
 * LAMBDA-SYNTAX - Front end for the lambda expression language
 * ==========================================================================
 * 
 * File:      token.rs
 * Purpose:   Lexical tokens produced by the lexer and consumed by the parser.
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

use crate::lexer::keywords::Keyword;
use crate::span::Span;
use serde::Serialize;
use std::fmt;

/// The category of a lexical token, together with its payload.
///
/// # Pipeline Role
/// ```text
/// Source → InputStream → Lexer → TokenKind → Parser → AST
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum TokenKind {
    /// A numeric literal such as `42` or `3.14`.
    Number(f64),

    /// A double-quoted string literal, escapes already resolved.
    String(String),

    /// A variable name.
    Identifier(String),

    /// A reserved word (see `keywords.rs`).
    Keyword(Keyword),

    /// One of `, ; ( ) { } [ ]`.
    Punctuation(char),

    /// A maximal run of `+ - * / % = & | < > !`.
    Operator(String),
}

/// A classified token and the position where it starts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn is_punctuation(&self, ch: char) -> bool {
        self.kind == TokenKind::Punctuation(ch)
    }

    pub fn is_keyword(&self, kw: Keyword) -> bool {
        self.kind == TokenKind::Keyword(kw)
    }

    /// Returns the operator text if this is an operator token.
    pub fn operator(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Operator(op) => Some(op),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    /// Prints the token the way it would appear in source, for error
    /// messages such as `Unexpected token: )`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "{}", n),
            TokenKind::String(s) => write!(f, "{:?}", s),
            TokenKind::Identifier(name) => f.write_str(name),
            TokenKind::Keyword(kw) => write!(f, "{}", kw),
            TokenKind::Punctuation(ch) => write!(f, "{}", ch),
            TokenKind::Operator(op) => f.write_str(op),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prints_source_form() {
        assert_eq!(TokenKind::Number(1.5).to_string(), "1.5");
        assert_eq!(TokenKind::Number(2.0).to_string(), "2");
        assert_eq!(TokenKind::String("hi".into()).to_string(), "\"hi\"");
        assert_eq!(TokenKind::Keyword(Keyword::LambdaSymbol).to_string(), "λ");
        assert_eq!(TokenKind::Punctuation(')').to_string(), ")");
        assert_eq!(TokenKind::Operator("<=".into()).to_string(), "<=");
    }

    #[test]
    fn serializes_with_type_tag() {
        let token = TokenKind::Keyword(Keyword::If);
        assert_eq!(
            serde_json::to_value(&token).unwrap(),
            serde_json::json!({ "type": "keyword", "value": "if" })
        );
    }
}
