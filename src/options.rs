/*
 * ==========================================================================
 * LAMBDA-SYNTAX - Front end for the lambda expression language
 * ==========================================================================
 * 
 * File:      options.rs
 * Purpose:   Knobs that adjust how strictly source text is accepted.
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

/// Configuration shared by the lexer and parser.
///
/// The default mirrors the language's historical behaviour. Every parse
/// gets its own copy; there is no global configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject string literals that reach end of input without a closing
    /// quote. When `false` the characters read so far become the string's
    /// value and no error is raised.
    pub strict_strings: bool,
}

impl ParseOptions {
    /// Options with every optional check turned on.
    pub fn strict() -> Self {
        Self {
            strict_strings: true,
        }
    }

    pub fn with_strict_strings(mut self, strict: bool) -> Self {
        self.strict_strings = strict;
        self
    }
}
