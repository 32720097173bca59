/*
 * ==========================================================================
 * LAMBDA-SYNTAX - Front end for the lambda expression language
 * ==========================================================================
 * 
 * File:      input.rs
 * Purpose:   Character cursor over the raw source text.
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

use crate::error::SyntaxError;
use crate::span::Span;

/// A forward-only cursor over the characters of the source.
///
/// The lexer pulls characters from here one at a time and asks it to
/// build errors, so every lexical error carries the position the cursor
/// had reached when the problem was spotted.
pub struct InputStream {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
}

impl InputStream {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 0,
        }
    }

    /// Consumes and returns the next character, tracking line and column.
    ///
    /// Returns `None` once the input is exhausted; the position does not
    /// move past the end.
    pub fn next(&mut self) -> Option<char> {
        let ch = *self.chars.get(self.pos)?;
        self.pos += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Returns the next character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    pub fn eof(&self) -> bool {
        self.peek().is_none()
    }

    pub fn position(&self) -> Span {
        Span::new(self.line, self.column)
    }

    /// Builds a fatal error located at the current position.
    pub fn error(&self, message: impl Into<String>) -> SyntaxError {
        SyntaxError::new(message, self.position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_lines_and_columns() {
        let mut input = InputStream::new("ab\nc");
        assert_eq!(input.position(), Span::new(1, 0));

        assert_eq!(input.next(), Some('a'));
        assert_eq!(input.next(), Some('b'));
        assert_eq!(input.position(), Span::new(1, 2));

        assert_eq!(input.next(), Some('\n'));
        assert_eq!(input.position(), Span::new(2, 0));

        assert_eq!(input.peek(), Some('c'));
        assert_eq!(input.next(), Some('c'));
        assert!(input.eof());
        assert_eq!(input.position(), Span::new(2, 1));
    }

    #[test]
    fn next_at_end_does_not_move() {
        let mut input = InputStream::new("");
        assert_eq!(input.next(), None);
        assert_eq!(input.next(), None);
        assert_eq!(input.position(), Span::new(1, 0));
    }

    #[test]
    fn columns_count_characters_not_bytes() {
        let mut input = InputStream::new("λx");
        input.next();
        assert_eq!(input.position(), Span::new(1, 1));
    }

    #[test]
    fn error_carries_current_position() {
        let mut input = InputStream::new("x\ny");
        input.next();
        input.next();
        let err = input.error("boom");
        assert_eq!(err.message, "boom");
        assert_eq!(err.span, Span::new(2, 0));
    }
}
