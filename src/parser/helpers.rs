/*
 * ==========================================================================
 * LAMBDA-SYNTAX - Front end for the lambda expression language
 * ==========================================================================
 * 
 * File:      helpers.rs
 * Purpose:   Token matching, consumption and list helpers for the parser.
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

use crate::error::{Result, SyntaxError};
use crate::lexer::Keyword;
use crate::parser::parser::Parser;
use tracing::debug;

impl Parser {
    /// Checks the next token for a punctuation character without consuming it.
    pub(crate) fn is_punctuation(&mut self, ch: char) -> Result<bool> {
        Ok(matches!(self.lexer.peek()?, Some(token) if token.is_punctuation(ch)))
    }

    /// Checks the next token for a keyword without consuming it.
    pub(crate) fn is_keyword(&mut self, kw: Keyword) -> Result<bool> {
        Ok(matches!(self.lexer.peek()?, Some(token) if token.is_keyword(kw)))
    }

    /// Checks for either spelling of the lambda keyword.
    pub(crate) fn is_lambda(&mut self) -> Result<bool> {
        Ok(self.is_keyword(Keyword::Lambda)? || self.is_keyword(Keyword::LambdaSymbol)?)
    }

    /// Returns the text of the next token if it is an operator.
    pub(crate) fn peek_operator(&mut self) -> Result<Option<String>> {
        Ok(self
            .lexer
            .peek()?
            .and_then(|token| token.operator())
            .map(str::to_owned))
    }

    /// Consumes a required punctuation character or fails.
    pub(crate) fn skip_punctuation(&mut self, ch: char) -> Result<()> {
        if self.is_punctuation(ch)? {
            self.lexer.next()?;
            Ok(())
        } else {
            Err(self.error(format!("Expecting punctuation: \"{}\"", ch)))
        }
    }

    /// Consumes a required keyword or fails.
    pub(crate) fn skip_keyword(&mut self, kw: Keyword) -> Result<()> {
        if self.is_keyword(kw)? {
            self.lexer.next()?;
            Ok(())
        } else {
            Err(self.error(format!("Expecting keyword: \"{}\"", kw)))
        }
    }

    /// Builds an error at the next token, or at the end of input when
    /// there is none.
    pub(crate) fn error(&mut self, message: impl Into<String>) -> SyntaxError {
        let message = message.into();
        let span = match self.lexer.peek() {
            Ok(Some(token)) => token.span,
            _ => self.lexer.position(),
        };

        debug!(%span, %message, "syntax error");
        SyntaxError::new(message, span)
    }

    /// Parses a bracketed, separated list such as `(a, b, c)`.
    ///
    /// # Behavior
    /// - Requires `start` and `end`
    /// - Elements are separated by `separator`
    /// - A separator directly before `end` is tolerated
    /// - Each element is produced by `element`
    pub(crate) fn delimited<T>(
        &mut self,
        start: char,
        end: char,
        separator: char,
        mut element: impl FnMut(&mut Self) -> Result<T>,
    ) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut first = true;

        self.skip_punctuation(start)?;

        while !self.lexer.eof()? {
            if self.is_punctuation(end)? {
                break;
            }

            if first {
                first = false;
            } else {
                self.skip_punctuation(separator)?;
            }

            // trailing separator
            if self.is_punctuation(end)? {
                break;
            }

            items.push(element(self)?);
        }

        self.skip_punctuation(end)?;

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::Lexer;
    use crate::parser::parser::Parser;
    use crate::span::Span;

    fn parser(source: &str) -> Parser {
        Parser::new(Lexer::new(source))
    }

    #[test]
    fn delimited_accepts_trailing_separator() {
        let mut p = parser("(1, 2, 3,)");
        let items = p.delimited('(', ')', ',', Parser::parse_expression).unwrap();
        assert_eq!(items.len(), 3);
        assert!(p.lexer.eof().unwrap());
    }

    #[test]
    fn delimited_empty_list() {
        let mut p = parser("()");
        let items = p.delimited('(', ')', ',', Parser::parse_expression).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn delimited_requires_separator() {
        let mut p = parser("(a b)");
        let err = p.delimited('(', ')', ',', Parser::parse_expression).unwrap_err();
        assert_eq!(err.message, "Expecting punctuation: \",\"");
        assert_eq!(err.span, Span::new(1, 3));
    }

    #[test]
    fn delimited_unclosed_fails_at_end() {
        let mut p = parser("(a, b");
        let err = p.delimited('(', ')', ',', Parser::parse_expression).unwrap_err();
        assert_eq!(err.message, "Expecting punctuation: \")\"");
        assert_eq!(err.span, Span::new(1, 5));
    }
}
