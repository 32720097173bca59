/*
 * ==========================================================================
 * LAMBDA-SYNTAX - Front end for the lambda expression language
 * ==========================================================================
 * 
 * File:      mod.rs
 * Purpose:   Lexical analysis: character cursor, tokens, keywords, lexer.
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

/// Character cursor with line/column tracking.
pub mod input;

/// Reserved word table.
pub mod keywords;

/// Token types.
pub mod token;

/// The tokenizer itself.
#[allow(clippy::module_inception)]
pub mod lexer;

pub use input::InputStream;
pub use keywords::Keyword;
pub use lexer::{tokenize, Lexer};
pub use token::{Token, TokenKind};
