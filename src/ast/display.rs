/*
 * ==========================================================================
 * LAMBDA-SYNTAX - Front end for the lambda expression language
 * ==========================================================================
 * 
 * File:      display.rs
 * Purpose:   Deterministic source printer for the AST.
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

use crate::ast::expr::{Expr, Program};
use std::fmt;

/// Prints an expression as source text that parses back to the same tree.
///
/// Compound forms (assignment, binary, `if`, `lambda`) are always wrapped
/// in parentheses, so the printer never has to reason about precedence or
/// about where a greedy sub-expression ends.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number { value } => write!(f, "{}", value),
            Expr::String { value } => write_string(f, value),
            Expr::Bool { value } => write!(f, "{}", value),
            Expr::Var { name } => f.write_str(name),

            Expr::Assign { target, value } => write!(f, "({} = {})", target, value),

            Expr::Binary {
                operator,
                left,
                right,
            } => write!(f, "({} {} {})", left, operator, right),

            Expr::If {
                cond,
                then_branch,
                else_branch,
            } => {
                write!(f, "(if {} then {}", cond, then_branch)?;
                if let Some(else_branch) = else_branch {
                    write!(f, " else {}", else_branch)?;
                }
                f.write_str(")")
            }

            Expr::Lambda { params, body } => {
                write!(f, "(lambda ({}) {})", params.join(", "), body)
            }

            Expr::Call { callee, args } => {
                write!(f, "{}(", callee)?;
                write_separated(f, args, ", ")?;
                f.write_str(")")
            }

            Expr::Program(program) => {
                f.write_str("{")?;
                write_separated(f, &program.body, "; ")?;
                f.write_str("}")
            }
        }
    }
}

/// Prints a top-level program, one `;`-terminated expression per line.
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for expr in &self.body {
            writeln!(f, "{};", expr)?;
        }
        Ok(())
    }
}

/// Quotes a string, escaping the two characters the lexer treats
/// specially inside a literal.
fn write_string(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_str("\"")?;
    for ch in value.chars() {
        if ch == '"' || ch == '\\' {
            f.write_str("\\")?;
        }
        write!(f, "{}", ch)?;
    }
    f.write_str("\"")
}

fn write_separated(f: &mut fmt::Formatter<'_>, items: &[Expr], separator: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_literals() {
        assert_eq!(Expr::number(3.0).to_string(), "3");
        assert_eq!(Expr::number(0.25).to_string(), "0.25");
        assert_eq!(Expr::bool(false).to_string(), "false");
        assert_eq!(Expr::string(r#"say "hi" \ bye"#).to_string(), r#""say \"hi\" \\ bye""#);
    }

    #[test]
    fn parenthesises_compound_forms() {
        let expr = Expr::assign(
            Expr::var("x"),
            Expr::binary("*", Expr::var("a"), Expr::binary("+", Expr::var("b"), Expr::number(1.0))),
        );
        assert_eq!(expr.to_string(), "(x = (a * (b + 1)))");
    }

    #[test]
    fn prints_lambda_call_and_if() {
        let expr = Expr::call(
            Expr::lambda(vec!["a".into(), "b".into()], Expr::var("a")),
            vec![Expr::number(1.0), Expr::if_else(Expr::var("c"), Expr::number(2.0), Some(Expr::number(3.0)))],
        );
        assert_eq!(
            expr.to_string(),
            "(lambda (a, b) a)(1, (if c then 2 else 3))"
        );
    }

    #[test]
    fn prints_blocks_and_programs() {
        let program = Program::new(vec![
            Expr::program(vec![Expr::number(1.0), Expr::number(2.0)]),
            Expr::call(Expr::var("f"), vec![]),
        ]);
        assert_eq!(program.to_string(), "{1; 2};\nf();\n");
    }
}
