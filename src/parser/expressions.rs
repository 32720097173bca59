/*
 * ==========================================================================
 * LAMBDA-SYNTAX - Front end for the lambda expression language
 * ==========================================================================
 * 
 * File:      expressions.rs
 * Purpose:   The expression grammar: atoms, calls, operators, blocks, lambdas.
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

use crate::ast::Expr;
use crate::error::{Result, SyntaxError};
use crate::lexer::{Keyword, TokenKind};
use crate::parser::parser::Parser;

/// Binding strength of a binary operator; higher binds tighter.
///
/// Operators missing from this table are not binary operators and end
/// operator climbing wherever they appear.
pub fn precedence(operator: &str) -> Option<u8> {
    match operator {
        "=" => Some(1),
        "||" => Some(2),
        "&&" => Some(3),
        "<" | ">" | "<=" | ">=" | "==" | "!=" => Some(7),
        "+" | "-" => Some(10),
        "*" | "/" | "%" => Some(20),
        _ => None,
    }
}

impl Parser {
    /// expression → call-postfix( climb( atom, 0 ) )
    pub fn parse_expression(&mut self) -> Result<Expr> {
        let atom = self.parse_atom()?;
        let expr = self.maybe_binary(atom, 0)?;
        self.maybe_call(expr)
    }

    /// Wraps `expr` in calls for as long as an argument list follows, so
    /// `f(x)(y)` becomes a call whose callee is `f(x)`.
    fn maybe_call(&mut self, mut expr: Expr) -> Result<Expr> {
        while self.is_punctuation('(')? {
            let args = self.delimited('(', ')', ',', Self::parse_expression)?;
            expr = Expr::call(expr, args);
        }

        Ok(expr)
    }

    /// Precedence climbing.
    ///
    /// Folds operators whose precedence is strictly above `min_precedence`
    /// into `left`. The right operand of an ordinary operator is climbed
    /// at that operator's own precedence, which makes it left-associative;
    /// `=` climbs its right operand one level lower so that assignment
    /// chains nest to the right.
    fn maybe_binary(&mut self, mut left: Expr, min_precedence: u8) -> Result<Expr> {
        loop {
            let operator = match self.peek_operator()? {
                Some(operator) => operator,
                None => return Ok(left),
            };

            let prec = match precedence(&operator) {
                Some(prec) if prec > min_precedence => prec,
                _ => return Ok(left),
            };

            let op_span = match self.lexer.next()? {
                Some(token) => token.span,
                None => self.lexer.position(),
            };

            let is_assign = operator == "=";
            let right_precedence = if is_assign { prec - 1 } else { prec };

            let atom = self.parse_atom()?;
            let right = self.maybe_binary(atom, right_precedence)?;

            left = if is_assign {
                if !left.is_assignable() {
                    return Err(SyntaxError::new(format!("Cannot assign to {}", left), op_span));
                }
                Expr::assign(left, right)
            } else {
                Expr::binary(operator, left, right)
            };
        }
    }

    /// atom → call-postfix( primary )
    fn parse_atom(&mut self) -> Result<Expr> {
        let expr = self.parse_primary()?;
        self.maybe_call(expr)
    }

    /// primary → "(" expression ")"
    ///         | block
    ///         | if
    ///         | "true" | "false"
    ///         | lambda
    ///         | number | string | identifier
    fn parse_primary(&mut self) -> Result<Expr> {
        if self.is_punctuation('(')? {
            self.lexer.next()?;
            let expr = self.parse_expression()?;
            self.skip_punctuation(')')?;
            return Ok(expr);
        }

        if self.is_punctuation('{')? {
            return self.parse_block();
        }

        if self.is_keyword(Keyword::If)? {
            return self.parse_if();
        }

        if self.is_keyword(Keyword::True)? || self.is_keyword(Keyword::False)? {
            return self.parse_bool();
        }

        if self.is_lambda()? {
            self.lexer.next()?;
            return self.parse_lambda();
        }

        let token = match self.lexer.next()? {
            Some(token) => token,
            None => return Err(self.error("Unexpected end of input")),
        };

        match token.kind {
            TokenKind::Number(value) => Ok(Expr::number(value)),
            TokenKind::String(value) => Ok(Expr::string(value)),
            TokenKind::Identifier(name) => Ok(Expr::var(name)),
            other => Err(SyntaxError::new(
                format!("Unexpected token: {}", other),
                token.span,
            )),
        }
    }

    /// if → "if" expression ( "then" | <before "{"> ) expression ( "else" expression )?
    fn parse_if(&mut self) -> Result<Expr> {
        self.skip_keyword(Keyword::If)?;

        let cond = self.parse_expression()?;

        if !self.is_punctuation('{')? {
            self.skip_keyword(Keyword::Then)?;
        }

        let then_branch = self.parse_expression()?;

        let else_branch = if self.is_keyword(Keyword::Else)? {
            self.lexer.next()?;
            Some(self.parse_expression()?)
        } else {
            None
        };

        Ok(Expr::if_else(cond, then_branch, else_branch))
    }

    fn parse_bool(&mut self) -> Result<Expr> {
        let value = matches!(self.lexer.next()?, Some(token) if token.is_keyword(Keyword::True));
        Ok(Expr::bool(value))
    }

    /// lambda → ( "lambda" | "λ" ) "(" names ")" expression
    ///
    /// The keyword has already been consumed.
    fn parse_lambda(&mut self) -> Result<Expr> {
        let params = self.delimited('(', ')', ',', Self::parse_var_name)?;
        let body = self.parse_expression()?;
        Ok(Expr::lambda(params, body))
    }

    fn parse_var_name(&mut self) -> Result<String> {
        match self.lexer.next()? {
            Some(token) => match token.kind {
                TokenKind::Identifier(name) => Ok(name),
                _ => Err(SyntaxError::new("Expecting variable name", token.span)),
            },
            None => Err(self.error("Expecting variable name")),
        }
    }

    /// block → "{" expression ( ";" expression )* ";"? "}"
    fn parse_block(&mut self) -> Result<Expr> {
        let body = self.delimited('{', '}', ';', Self::parse_expression)?;
        Ok(desugar_block(body))
    }
}

/// Collapses a parsed block: no expressions become `false`, a single
/// expression stands for itself, anything longer stays a nested program.
fn desugar_block(mut body: Vec<Expr>) -> Expr {
    if body.len() > 1 {
        return Expr::program(body);
    }

    body.pop().unwrap_or(Expr::bool(false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::span::Span;

    /// Helper to parse a single top-level expression.
    fn expr(source: &str) -> Expr {
        let mut body = parse(source).unwrap().body;
        assert_eq!(body.len(), 1, "expected one expression in {:?}", source);
        body.remove(0)
    }

    fn num(value: f64) -> Expr {
        Expr::number(value)
    }

    fn var(name: &str) -> Expr {
        Expr::var(name)
    }

    #[test]
    fn multiplication_binds_tighter() {
        assert_eq!(
            expr("1 + 2 * 3"),
            Expr::binary("+", num(1.0), Expr::binary("*", num(2.0), num(3.0)))
        );
        assert_eq!(
            expr("1 * 2 + 3"),
            Expr::binary("+", Expr::binary("*", num(1.0), num(2.0)), num(3.0))
        );
    }

    #[test]
    fn binary_operators_are_left_associative() {
        assert_eq!(
            expr("a - b - c"),
            Expr::binary("-", Expr::binary("-", var("a"), var("b")), var("c"))
        );
    }

    #[test]
    fn precedence_ladder() {
        assert_eq!(
            expr("a || b && c < d + e * f"),
            Expr::binary(
                "||",
                var("a"),
                Expr::binary(
                    "&&",
                    var("b"),
                    Expr::binary(
                        "<",
                        var("c"),
                        Expr::binary("+", var("d"), Expr::binary("*", var("e"), var("f")))
                    )
                )
            )
        );
    }

    #[test]
    fn assignment_is_right_associative() {
        assert_eq!(
            expr("a = b = 1"),
            Expr::assign(var("a"), Expr::assign(var("b"), num(1.0)))
        );
    }

    #[test]
    fn assignment_takes_whole_right_side() {
        assert_eq!(
            expr("x = a || b"),
            Expr::assign(var("x"), Expr::binary("||", var("a"), var("b")))
        );
    }

    #[test]
    fn assignment_target_must_be_variable() {
        let err = parse("a + b = c").unwrap_err();
        assert_eq!(err.message, "Cannot assign to (a + b)");
        assert_eq!(err.span, Span::new(1, 6));
    }

    #[test]
    fn parentheses_group() {
        assert_eq!(
            expr("(1 + 2) * 3"),
            Expr::binary("*", Expr::binary("+", num(1.0), num(2.0)), num(3.0))
        );
    }

    #[test]
    fn unknown_operator_stops_climbing() {
        let err = parse("a ! b").unwrap_err();
        assert_eq!(err.message, "Expecting punctuation: \";\"");
        assert_eq!(err.span, Span::new(1, 2));
    }

    #[test]
    fn chained_calls() {
        assert_eq!(
            expr("f(x)(y)"),
            Expr::call(Expr::call(var("f"), vec![var("x")]), vec![var("y")])
        );
        assert_eq!(
            expr("f()(1)(2)"),
            Expr::call(
                Expr::call(Expr::call(var("f"), vec![]), vec![num(1.0)]),
                vec![num(2.0)]
            )
        );
    }

    #[test]
    fn call_arguments_are_full_expressions() {
        assert_eq!(
            expr("f(a + 1, g(b),)"),
            Expr::call(
                var("f"),
                vec![
                    Expr::binary("+", var("a"), num(1.0)),
                    Expr::call(var("g"), vec![var("b")]),
                ]
            )
        );
    }

    #[test]
    fn call_binds_tighter_than_operators() {
        assert_eq!(
            expr("a + f(b)"),
            Expr::binary("+", var("a"), Expr::call(var("f"), vec![var("b")]))
        );
    }

    #[test]
    fn lambda_with_block_body_unwraps() {
        assert_eq!(
            expr("lambda (a, b) { a + b }"),
            Expr::lambda(
                vec!["a".into(), "b".into()],
                Expr::binary("+", var("a"), var("b"))
            )
        );
    }

    #[test]
    fn lambda_symbol_spelling() {
        assert_eq!(
            expr("λ (x) x"),
            Expr::lambda(vec!["x".into()], var("x"))
        );
    }

    #[test]
    fn lambda_params_may_repeat() {
        assert_eq!(
            expr("lambda (x, x) 1"),
            Expr::lambda(vec!["x".into(), "x".into()], num(1.0))
        );
    }

    #[test]
    fn lambda_params_must_be_names() {
        let err = parse("lambda (a, 1) a").unwrap_err();
        assert_eq!(err.message, "Expecting variable name");
        assert_eq!(err.span, Span::new(1, 11));
    }

    #[test]
    fn immediately_invoked_lambda() {
        assert_eq!(
            expr("(lambda (x) x)(1)"),
            Expr::call(Expr::lambda(vec!["x".into()], var("x")), vec![num(1.0)])
        );
    }

    #[test]
    fn empty_block_is_false() {
        assert_eq!(expr("{}"), Expr::bool(false));
    }

    #[test]
    fn single_expression_block_unwraps() {
        assert_eq!(expr("{ 1 }"), num(1.0));
        assert_eq!(expr("{ 1; }"), num(1.0));
    }

    #[test]
    fn multi_expression_block_nests_program() {
        assert_eq!(
            expr("x = {1;2;3}"),
            Expr::assign(var("x"), Expr::program(vec![num(1.0), num(2.0), num(3.0)]))
        );
    }

    #[test]
    fn if_then_else() {
        assert_eq!(
            expr("if a then b else c"),
            Expr::if_else(var("a"), var("b"), Some(var("c")))
        );
    }

    #[test]
    fn if_with_block_needs_no_then() {
        assert_eq!(
            expr("if a { b; c } else d"),
            Expr::if_else(
                var("a"),
                Expr::program(vec![var("b"), var("c")]),
                Some(var("d"))
            )
        );
        assert_eq!(expr("if a then b"), Expr::if_else(var("a"), var("b"), None));
    }

    #[test]
    fn if_without_then_is_fatal() {
        let err = parse("if x").unwrap_err();
        assert_eq!(err.message, "Expecting keyword: \"then\"");
        assert_eq!(err.span, Span::new(1, 4));

        let err = parse("if x y").unwrap_err();
        assert_eq!(err.span, Span::new(1, 5));
    }

    #[test]
    fn booleans() {
        assert_eq!(expr("true"), Expr::bool(true));
        assert_eq!(expr("false"), Expr::bool(false));
    }

    #[test]
    fn unexpected_tokens() {
        let err = parse(")").unwrap_err();
        assert_eq!(err.message, "Unexpected token: )");
        assert_eq!(err.span, Span::new(1, 0));

        let err = parse("x = else").unwrap_err();
        assert_eq!(err.message, "Unexpected token: else");
        assert_eq!(err.span, Span::new(1, 4));

        let err = parse("1 +").unwrap_err();
        assert_eq!(err.message, "Unexpected end of input");
        assert_eq!(err.span, Span::new(1, 3));
    }

    #[test]
    fn precedence_table() {
        assert_eq!(precedence("="), Some(1));
        assert_eq!(precedence("!="), Some(7));
        assert_eq!(precedence("%"), Some(20));
        assert_eq!(precedence("!"), None);
        assert_eq!(precedence("=>"), None);
    }
}
