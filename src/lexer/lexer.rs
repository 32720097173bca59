/*
 * ==========================================================================
 * LAMBDA-SYNTAX - Front end for the lambda expression language
 * ==========================================================================
 * 
 * File:      lexer.rs
 * Purpose:   Turns the character stream into a pull-based token stream.
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
use crate::lexer::input::InputStream;
use crate::lexer::keywords::keyword;
use crate::lexer::token::{Token, TokenKind};
use crate::options::ParseOptions;
use crate::span::Span;
use tracing::trace;

/// Pull-based tokenizer with one token of lookahead.
///
/// Tokens are produced on demand: nothing is scanned until the parser
/// calls [`Lexer::peek`] or [`Lexer::next`], and at most one scanned token
/// is held back at any time.
pub struct Lexer {
    input: InputStream,

    /// The token returned by the last `peek`, not yet handed out.
    current: Option<Token>,

    options: ParseOptions,

    /// Set once an error has been yielded through `Iterator`.
    failed: bool,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self::with_options(source, ParseOptions::default())
    }

    pub fn with_options(source: &str, options: ParseOptions) -> Self {
        Self {
            input: InputStream::new(source),
            current: None,
            options,
            failed: false,
        }
    }

    /// Returns the next token without consuming it.
    ///
    /// Repeated calls return the same token until [`Lexer::next`] is
    /// called. `Ok(None)` means the input is exhausted.
    pub fn peek(&mut self) -> Result<Option<&Token>> {
        if self.current.is_none() {
            self.current = self.read_next_token()?;
        }
        Ok(self.current.as_ref())
    }

    /// Consumes and returns the next token, or `Ok(None)` at end of input.
    pub fn next(&mut self) -> Result<Option<Token>> {
        match self.current.take() {
            Some(token) => Ok(Some(token)),
            None => self.read_next_token(),
        }
    }

    /// True when no tokens remain. Forces a peek.
    pub fn eof(&mut self) -> Result<bool> {
        Ok(self.peek()?.is_none())
    }

    /// Position the character cursor has reached.
    pub fn position(&self) -> Span {
        self.input.position()
    }

    /// Builds an error located at the character cursor.
    pub fn error(&self, message: impl Into<String>) -> SyntaxError {
        self.input.error(message)
    }

    /// Scans one token.
    ///
    /// # Behavior
    /// - Skips whitespace (space, tab, newline)
    /// - Skips `#` comments through the end of the line
    /// - Dispatches on the first character to the specialised readers
    /// - Raises `Can't handle character: X` for anything else
    fn read_next_token(&mut self) -> Result<Option<Token>> {
        loop {
            self.read_while(is_whitespace);

            let start = self.input.position();
            let ch = match self.input.peek() {
                Some(ch) => ch,
                None => return Ok(None),
            };

            if ch == '#' {
                self.skip_comment();
                continue;
            }

            let kind = if ch == '"' {
                self.read_string()?
            } else if is_digit(ch) {
                self.read_number()?
            } else if is_identifier_start(ch) {
                self.read_identifier()
            } else if is_punctuation(ch) {
                self.input.next();
                TokenKind::Punctuation(ch)
            } else if is_operator(ch) {
                TokenKind::Operator(self.read_while(is_operator))
            } else {
                return Err(self.input.error(format!("Can't handle character: {}", ch)));
            };

            trace!(token = %kind, %start, "scanned token");
            return Ok(Some(Token::new(kind, start)));
        }
    }

    /// Consumes everything up to and including the next newline.
    fn skip_comment(&mut self) {
        self.read_while(|ch| ch != '\n');
        self.input.next();
    }

    /// Reads a `"`-delimited string.
    ///
    /// A backslash makes the following character literal; there are no
    /// named escapes, so `\n` is just `n`.
    fn read_string(&mut self) -> Result<TokenKind> {
        let mut value = String::new();
        let mut escaped = false;
        let mut closed = false;

        // opening quote
        self.input.next();

        while let Some(ch) = self.input.next() {
            if escaped {
                value.push(ch);
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                closed = true;
                break;
            } else {
                value.push(ch);
            }
        }

        if !closed && self.options.strict_strings {
            return Err(self.input.error("Unterminated string literal"));
        }

        Ok(TokenKind::String(value))
    }

    /// Reads digits with at most one decimal point.
    ///
    /// A second `.` ends the number and is left in the input.
    fn read_number(&mut self) -> Result<TokenKind> {
        let mut has_dot = false;

        let text = self.read_while(|ch| {
            if ch == '.' {
                if has_dot {
                    return false;
                }
                has_dot = true;
                return true;
            }
            is_digit(ch)
        });

        text.parse::<f64>()
            .map(TokenKind::Number)
            .map_err(|_| self.input.error(format!("Invalid number: {}", text)))
    }

    fn read_identifier(&mut self) -> TokenKind {
        let text = self.read_while(is_identifier);

        match keyword(&text) {
            Some(kw) => TokenKind::Keyword(kw),
            None => TokenKind::Identifier(text),
        }
    }

    fn read_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> String {
        let mut text = String::new();

        while let Some(ch) = self.input.peek() {
            if !predicate(ch) {
                break;
            }
            text.push(ch);
            self.input.next();
        }

        text
    }
}

impl Iterator for Lexer {
    type Item = Result<Token>;

    /// Yields tokens until end of input. After an error is yielded the
    /// iterator is finished.
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        match Lexer::next(self) {
            Ok(token) => token.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

/// Scans the whole source into a token vector.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    Lexer::new(source).collect()
}

fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n')
}

fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || matches!(ch, 'λ' | 'Λ' | '_')
}

fn is_identifier(ch: char) -> bool {
    is_identifier_start(ch) || is_digit(ch) || matches!(ch, '?' | '!' | '-' | '<' | '>' | '=')
}

fn is_operator(ch: char) -> bool {
    matches!(ch, '+' | '-' | '*' | '/' | '%' | '=' | '&' | '|' | '<' | '>' | '!')
}

fn is_punctuation(ch: char) -> bool {
    matches!(ch, ',' | ';' | '(' | ')' | '{' | '}' | '[' | ']')
}
