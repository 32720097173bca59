/*
 * ==========================================================================
 * LAMBDA-SYNTAX - Front end for the lambda expression language
 * ==========================================================================
 * 
 * File:      keywords.rs
 * Purpose:   Reserved words of the lambda language.
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

use serde::Serialize;
use std::fmt;

/// A reserved word.
///
/// `lambda` and `λ` are distinct spellings of the same keyword; both are
/// kept so a token can always be printed the way it was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "&'static str")]
pub enum Keyword {
    If,
    Then,
    Else,
    Lambda,
    LambdaSymbol,
    True,
    False,
}

impl Keyword {
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::If => "if",
            Keyword::Then => "then",
            Keyword::Else => "else",
            Keyword::Lambda => "lambda",
            Keyword::LambdaSymbol => "λ",
            Keyword::True => "true",
            Keyword::False => "false",
        }
    }

    /// True for either spelling of the lambda keyword.
    pub fn is_lambda(self) -> bool {
        matches!(self, Keyword::Lambda | Keyword::LambdaSymbol)
    }
}

impl From<Keyword> for &'static str {
    fn from(kw: Keyword) -> Self {
        kw.as_str()
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a scanned identifier as a keyword, if it is one.
///
/// Matching is exact: `If` and `TRUE` are ordinary identifiers.
pub fn keyword(word: &str) -> Option<Keyword> {
    match word {
        "if" => Some(Keyword::If),
        "then" => Some(Keyword::Then),
        "else" => Some(Keyword::Else),
        "lambda" => Some(Keyword::Lambda),
        "λ" => Some(Keyword::LambdaSymbol),
        "true" => Some(Keyword::True),
        "false" => Some(Keyword::False),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_every_keyword() {
        for word in ["if", "then", "else", "lambda", "λ", "true", "false"] {
            let kw = keyword(word).unwrap();
            assert_eq!(kw.as_str(), word);
        }
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert_eq!(keyword("If"), None);
        assert_eq!(keyword("TRUE"), None);
        assert_eq!(keyword("lambdas"), None);
    }

    #[test]
    fn both_lambda_spellings() {
        assert!(Keyword::Lambda.is_lambda());
        assert!(Keyword::LambdaSymbol.is_lambda());
        assert!(!Keyword::If.is_lambda());
    }
}
