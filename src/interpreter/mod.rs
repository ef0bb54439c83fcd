//! The tree-walking evaluator: executes a parsed [`Program`] against an
//! [`Environment`], performing side effects (printing, diagnostics) as it
//! goes. Statements have no value; expressions yield a [`Value`].

mod environment;
mod value;

pub use environment::Environment;
pub use value::Value;

use crate::ast::{Expr, Program, Stmt};
use crate::diagnostics::{Diagnostic, Diagnostics};

/// A single `mgbe` loop may evaluate its condition at most this many times
/// before the interpreter gives up and reports a possible infinite loop.
const WHILE_ITERATION_CAP: usize = 10_000;

pub struct Interpreter {
    environment: Environment,
    diagnostics: Diagnostics,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// The default, lenient interpreter: diagnostics print to stderr and
    /// execution continues with a defined fallback.
    pub fn new() -> Self {
        Self {
            environment: Environment::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    /// An interpreter whose diagnostics are hard failures instead of
    /// printed-and-continued. Useful for tests asserting a program is
    /// entirely clean.
    pub fn strict() -> Self {
        Self {
            environment: Environment::new(),
            diagnostics: Diagnostics::strict(),
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Execute every statement in `program`, in source order.
    pub fn run(&mut self, program: &Program) -> Result<(), Diagnostic> {
        self.exec_block(program)
    }

    fn exec_block(&mut self, block: &[Stmt]) -> Result<(), Diagnostic> {
        for stmt in block {
            self.exec_stmt(stmt)?;
        }
        Ok(())
    }

    fn exec_stmt(&mut self, stmt: &Stmt) -> Result<(), Diagnostic> {
        match stmt {
            Stmt::VarDecl { name, value } => {
                let value = self.eval(value)?;
                self.environment.set(name.clone(), value);
            }
            Stmt::Print { value } => {
                let value = self.eval(value)?;
                println!("{value}");
            }
            Stmt::If {
                condition,
                then_block,
                else_block,
            } => {
                let condition = self.eval(condition)?;
                if condition.is_truthy() {
                    self.exec_block(then_block)?;
                } else if let Some(else_block) = else_block {
                    self.exec_block(else_block)?;
                }
            }
            Stmt::While { condition, body } => self.exec_while(condition, body)?,
            Stmt::Expression(expr) => {
                self.eval(expr)?;
            }
        }
        Ok(())
    }

    fn exec_while(&mut self, condition: &Expr, body: &[Stmt]) -> Result<(), Diagnostic> {
        let mut iterations = 0usize;

        loop {
            if iterations > WHILE_ITERATION_CAP {
                self.diagnostics
                    .report("Possible infinite loop detected", None)?;
                break;
            }
            iterations += 1;

            let condition_value = self.eval(condition)?;
            if !condition_value.is_truthy() {
                break;
            }

            self.exec_block(body)?;
        }

        Ok(())
    }

    fn eval(&mut self, expr: &Expr) -> Result<Value, Diagnostic> {
        match expr {
            Expr::Number { text, .. } => Ok(Value::Number(
                text.parse().expect("lexer only emits digit runs"),
            )),
            Expr::Str { value, .. } => Ok(Value::Str(value.clone())),
            Expr::Bool { value, .. } => Ok(Value::Bool(*value)),
            Expr::Identifier { name, line } => match self.environment.get(name) {
                Some(value) => Ok(value.clone()),
                None => {
                    self.diagnostics
                        .report(format!("Undefined variable '{name}'"), Some(*line))?;
                    Ok(Value::Number(0.0))
                }
            },
            Expr::Binary { op, lhs, rhs, line } => {
                let lhs = self.eval(lhs)?;
                let rhs = self.eval(rhs)?;
                self.eval_binary(op, lhs, rhs, *line)
            }
        }
    }

    fn eval_binary(
        &mut self,
        op: &str,
        lhs: Value,
        rhs: Value,
        line: usize,
    ) -> Result<Value, Diagnostic> {
        match op {
            "+" => match (&lhs, &rhs) {
                (Value::Str(_), _) | (_, Value::Str(_)) => Ok(Value::Str(format!(
                    "{}{}",
                    lhs.coerce_to_text(),
                    rhs.coerce_to_text()
                ))),
                (Value::Number(l), Value::Number(r)) => Ok(Value::Number(l + r)),
                _ => {
                    self.diagnostics
                        .report("Operands must be numbers for '+'", Some(line))?;
                    Ok(Value::Number(0.0))
                }
            },
            "-" | "*" | "/" => {
                let (Value::Number(l), Value::Number(r)) = (&lhs, &rhs) else {
                    self.diagnostics.report(
                        format!("Operands must be numbers for '{op}'"),
                        Some(line),
                    )?;
                    return Ok(Value::Number(0.0));
                };
                Ok(Value::Number(match op {
                    "-" => l - r,
                    "*" => l * r,
                    "/" => l / r,
                    _ => unreachable!(),
                }))
            }
            "==" | "!=" => {
                let equal = match (&lhs, &rhs) {
                    (Value::Str(l), Value::Str(r)) => l == r,
                    (Value::Number(l), Value::Number(r)) => l == r,
                    (Value::Bool(l), Value::Bool(r)) => l == r,
                    _ => {
                        self.diagnostics
                            .report(format!("Type mismatch for '{op}'"), Some(line))?;
                        return Ok(Value::Bool(false));
                    }
                };
                Ok(Value::Bool(if op == "==" { equal } else { !equal }))
            }
            "<" | ">" | "<=" | ">=" => {
                let (Value::Number(l), Value::Number(r)) = (&lhs, &rhs) else {
                    self.diagnostics.report(
                        "Operands must be numbers for comparison",
                        Some(line),
                    )?;
                    return Ok(Value::Bool(false));
                };
                Ok(Value::Bool(match op {
                    "<" => l < r,
                    ">" => l > r,
                    "<=" => l <= r,
                    ">=" => l >= r,
                    _ => unreachable!(),
                }))
            }
            _ => {
                self.diagnostics
                    .report("Unknown binary operator", Some(line))?;
                Ok(Value::Number(0.0))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::parser::Parser;

    fn run(source: &str) -> Interpreter {
        let diagnostics = Diagnostics::new();
        let tokens = tokenize(source, &diagnostics).unwrap();
        let program = Parser::new(tokens, diagnostics).parse_program().unwrap();
        let mut interpreter = Interpreter::new();
        interpreter.run(&program).unwrap();
        interpreter
    }

    #[test]
    fn left_associative_subtraction() {
        let interpreter = run("dee a = 10 dee b = 3 dee c = 2 dee r = a - b - c");
        assert_eq!(interpreter.environment().get("r"), Some(&Value::Number(5.0)));
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let interpreter = run("dee a = 1 dee b = 2 dee c = 3 dee r = a + b * c");
        assert_eq!(interpreter.environment().get("r"), Some(&Value::Number(7.0)));
    }

    #[test]
    fn string_number_concatenation_is_order_sensitive() {
        let interpreter = run("dee a = \"x\" + 1 dee b = 1 + \"x\"");
        assert_eq!(interpreter.environment().get("a"), Some(&Value::Str("x1".into())));
        assert_eq!(interpreter.environment().get("b"), Some(&Value::Str("1x".into())));
    }

    #[test]
    fn rebind_changes_printed_value() {
        let interpreter = run("dee x = 1 dee x = \"a\"");
        assert_eq!(interpreter.environment().get("x"), Some(&Value::Str("a".into())));
    }

    #[test]
    fn undefined_variable_yields_zero_and_reports() {
        let diagnostics = Diagnostics::strict();
        let tokens = tokenize("gosi(unknown)", &diagnostics).unwrap();
        let program = Parser::new(tokens, diagnostics).parse_program().unwrap();
        let mut interpreter = Interpreter::strict();
        let err = interpreter.run(&program).unwrap_err();
        assert_eq!(err.message, "Undefined variable 'unknown'");
        assert_eq!(err.line, Some(1));
    }

    #[test]
    fn while_loop_counts_to_three() {
        let interpreter = run("dee i = 0 mgbe i < 3 { dee i = i + 1 }");
        assert_eq!(interpreter.environment().get("i"), Some(&Value::Number(3.0)));
    }

    #[test]
    fn division_by_zero_follows_host_float_semantics() {
        let interpreter = run("dee r = 1 / 0");
        assert_eq!(interpreter.environment().get("r"), Some(&Value::Number(f64::INFINITY)));
    }

    #[test]
    fn boolean_equality_uses_igbo_words() {
        let interpreter = run("dee b = eziokwu == ụgha");
        assert_eq!(interpreter.environment().get("b"), Some(&Value::Bool(false)));
    }

    #[test]
    fn adding_a_bool_to_a_number_reports_instead_of_panicking() {
        let diagnostics = Diagnostics::strict();
        let tokens = tokenize("dee x = eziokwu + 1", &diagnostics).unwrap();
        let program = Parser::new(tokens, diagnostics).parse_program().unwrap();
        let err = Interpreter::strict().run(&program).unwrap_err();
        assert_eq!(err.message, "Operands must be numbers for '+'");
    }

    #[test]
    fn adding_two_bools_reports_instead_of_panicking() {
        let diagnostics = Diagnostics::strict();
        let tokens = tokenize("dee x = eziokwu + ụgha", &diagnostics).unwrap();
        let program = Parser::new(tokens, diagnostics).parse_program().unwrap();
        let err = Interpreter::strict().run(&program).unwrap_err();
        assert_eq!(err.message, "Operands must be numbers for '+'");
    }
}
