/*
 * ==========================================================================
 * LAMBDA-SYNTAX - Front end for the lambda expression language
 * ==========================================================================
 * 
 * File:      diagnostics.rs
 * Purpose:   Compiler-style rendering of syntax errors against their source.
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
use std::fmt::Write;

/// Renders human-friendly, compiler-style diagnostics for syntax errors.
///
/// The output shows the file name and position, the offending source
/// line, and a caret (`^`) under the column where parsing stopped. It is
/// modelled on `rustc` output but stays readable without colour.
pub struct DiagnosticPrinter {
    /// Full source text the error was raised against.
    source: String,

    /// Display name of the source (e.g. `main.lambda`).
    file_name: String,
}

impl DiagnosticPrinter {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Formats an error diagnostic.
    ///
    /// # Output Example
    /// ```text
    /// error: Expecting keyword: "then"
    ///   --> main.lambda:1:6
    ///     |
    ///   1 | if x y
    ///     |      ^
    /// ```
    ///
    /// The header column is 1-based like other compiler output; the
    /// error's own `column` stays 0-based.
    pub fn render(&self, error: &SyntaxError) -> String {
        let Span { line, column } = error.span;

        // Lines are 1-indexed; `saturating_sub` guards against line 0.
        let src_line = self.source.lines().nth(line.saturating_sub(1)).unwrap_or("");

        let mut out = String::new();

        // Writing to a String cannot fail.
        let _ = writeln!(out, "error: {}", error.message);
        let _ = writeln!(out, "  --> {}:{}:{}", self.file_name, line, column + 1);
        let _ = writeln!(out, "    |");
        let _ = writeln!(out, "{:>3} | {}", line, src_line);
        let _ = writeln!(out, "    | {}^", " ".repeat(column));

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn renders_caret_under_column() {
        let source = "a = 1;\nif x y";
        let err = parse(source).unwrap_err();
        let printer = DiagnosticPrinter::new("main.lambda", source);

        assert_eq!(
            printer.render(&err),
            "error: Expecting keyword: \"then\"\n\
             \x20 --> main.lambda:2:6\n\
             \x20   |\n\
             \x20 2 | if x y\n\
             \x20   |      ^\n"
        );
    }

    #[test]
    fn error_past_last_line_renders_empty_source() {
        let err = SyntaxError::new("Unexpected end of input", Span::new(3, 0));
        let printer = DiagnosticPrinter::new("f", "1 +\n");
        assert!(printer.render(&err).contains("  3 | \n"));
    }
}
