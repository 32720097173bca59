/*
 * ==========================================================================
 * LAMBDA-SYNTAX - Front end for the lambda expression language
 * ==========================================================================
 * 
 * File:      parser.rs
 * Purpose:   Parser state and the top-level parse entry points.
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

use crate::ast::Program;
use crate::error::Result;
use crate::lexer::Lexer;
use crate::options::ParseOptions;
use tracing::debug;

/// The recursive-descent, precedence-climbing parser.
///
/// The parser owns its lexer and pulls tokens from it on demand; the
/// lexer's one-token lookahead is the only buffered state. The grammar
/// itself lives in `expressions.rs` and `helpers.rs` as further
/// `impl Parser` blocks.
pub struct Parser {
    pub(crate) lexer: Lexer,
}

/// Parses source text into a [`Program`] using the default options.
///
/// # Pipeline
/// ```text
/// Source → InputStream → Lexer → Parser → Program
/// ```
///
/// # Example
/// ```rust
/// let program = lambda_syntax::parse("sum = lambda (a, b) a + b; sum(1, 2)").unwrap();
/// assert_eq!(program.body.len(), 2);
/// ```
pub fn parse(source: &str) -> Result<Program> {
    parse_with_options(source, ParseOptions::default())
}

/// Parses source text into a [`Program`] with explicit options.
pub fn parse_with_options(source: &str, options: ParseOptions) -> Result<Program> {
    Parser::new(Lexer::with_options(source, options)).parse_program()
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        Self { lexer }
    }

    /// Parses `;`-separated expressions until end of input.
    ///
    /// # Behavior
    /// - Empty input yields an empty program, not an error
    /// - A trailing `;` before end of input is optional
    /// - Two expressions without a `;` between them are fatal
    pub fn parse_program(&mut self) -> Result<Program> {
        let mut body = Vec::new();

        while !self.lexer.eof()? {
            body.push(self.parse_expression()?);

            if !self.lexer.eof()? {
                self.skip_punctuation(';')?;
            }
        }

        debug!(expressions = body.len(), "parsed program");
        Ok(Program::new(body))
    }
}
