use std::io::{self, Write};

use crate::{
    ast::{BinaryOperator, Expr, Statement},
    error::RuntimeError,
    interpreter::evaluator::symbol_table::SymbolTable,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the variable store and the sink
/// that `print` statements write to. The binary runs with standard output as
/// the sink; tests substitute an in-memory buffer to observe program output
/// without touching the process streams.
///
/// ## Usage
///
/// A `Context` is created fresh for one evaluation run, drives the whole
/// program through [`Context::run`], and is discarded afterward.
pub struct Context<W: Write> {
    /// The variable store, exclusively owned by this run.
    pub variables: SymbolTable,
    out:           W,
}

#[allow(clippy::new_without_default)]
impl Context<io::Stdout> {
    /// Creates a new evaluation context with an empty variable store,
    /// printing to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl<W: Write> Context<W> {
    /// Creates a context that prints to the given sink.
    ///
    /// # Example
    /// ```
    /// use minilang::{ast::{Expr, Statement}, interpreter::evaluator::core::Context};
    ///
    /// let program = vec![Statement::Print { expr: Expr::Literal { value: 42,
    ///                                                             line:  1, },
    ///                                       line: 1, }];
    ///
    /// let mut context = Context::with_output(Vec::new());
    /// context.run(&program).unwrap();
    ///
    /// assert_eq!(context.into_output(), b"42\n".to_vec());
    /// ```
    pub const fn with_output(out: W) -> Self {
        Self { variables: SymbolTable::new(),
               out }
    }

    /// Consumes the context and returns its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Executes a program: every statement, in source order.
    ///
    /// Execution stops at the first runtime error. Statements executed
    /// before the error keep their effects; output already written remains
    /// written.
    ///
    /// # Errors
    /// The first [`RuntimeError`] raised by any statement.
    pub fn run(&mut self, program: &[Statement]) -> EvalResult<()> {
        for statement in program {
            self.eval_statement(statement)?;
        }
        Ok(())
    }

    /// Executes a single statement.
    ///
    /// Assignments evaluate their expression and then update the variable
    /// store. Print statements evaluate their expression and write the
    /// result followed by a line break. Bare expression statements are
    /// evaluated and their result is discarded.
    ///
    /// # Errors
    /// Any [`RuntimeError`] raised while evaluating the contained
    /// expression, updating the store, or writing output.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::Assignment { name, value, line } => {
                let value = self.eval(value)?;
                self.variables.set(name, value, *line)
            },
            Statement::Print { expr, line } => {
                let value = self.eval(expr)?;
                writeln!(self.out, "{value}").map_err(|_| RuntimeError::WriteFailed { line: *line })
            },
            Statement::Expression { expr, .. } => {
                self.eval(expr)?;
                Ok(())
            },
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Literals yield their value. Variable references are looked up in the
    /// store. Binary operations evaluate their left operand first, then the
    /// right, then apply the operator.
    ///
    /// # Errors
    /// - [`RuntimeError::UnknownVariable`] for a name that was never
    ///   assigned.
    /// - [`RuntimeError::DivisionByZero`] when the right operand of `/` is
    ///   zero.
    ///
    /// # Example
    /// ```
    /// use minilang::{ast::Expr, interpreter::evaluator::core::Context};
    ///
    /// let mut context = Context::with_output(Vec::new());
    /// let expr = Expr::Literal { value: 7,
    ///                            line:  1, };
    ///
    /// assert_eq!(context.eval(&expr).unwrap(), 7);
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<i64> {
        match expr {
            Expr::Literal { value, .. } => Ok(*value),
            Expr::Variable { name, line } => {
                self.variables
                    .get(name)
                    .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone(),
                                                                   line: *line, })
            },
            Expr::BinaryOp { op, left, right, line } => {
                let left_value = self.eval(left)?;
                let right_value = self.eval(right)?;
                Self::eval_binary(*op, left_value, right_value, *line)
            },
        }
    }

    /// Applies a binary operator to two evaluated operands.
    ///
    /// Addition, subtraction and multiplication wrap on overflow, matching
    /// the two's-complement semantics of the 64-bit value type. Division
    /// truncates toward zero; a zero right operand is a runtime error.
    ///
    /// # Example
    /// ```
    /// use std::io::Stdout;
    ///
    /// use minilang::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// let result = Context::<Stdout>::eval_binary(BinaryOperator::Div, 7, 2, 1).unwrap();
    /// assert_eq!(result, 3);
    /// ```
    pub const fn eval_binary(op: BinaryOperator,
                             left: i64,
                             right: i64,
                             line: usize)
                             -> EvalResult<i64> {
        match op {
            BinaryOperator::Add => Ok(left.wrapping_add(right)),
            BinaryOperator::Sub => Ok(left.wrapping_sub(right)),
            BinaryOperator::Mul => Ok(left.wrapping_mul(right)),
            BinaryOperator::Div => {
                if right == 0 {
                    Err(RuntimeError::DivisionByZero { line })
                } else {
                    Ok(left.wrapping_div(right))
                }
            },
        }
    }
}
