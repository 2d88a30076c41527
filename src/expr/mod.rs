//! Expression compiler collaborator.
//!
//! The plotting core only depends on the [`ExpressionCompiler`] and
//! [`Evaluable`] traits. [`BuiltinCompiler`] is the default implementation:
//! a small infix language over the single variable `x`.

mod builtins;
mod lexer;
mod parser;
mod program;

pub use builtins::Builtin;
pub use parser::VARIABLE;
pub use program::{BinaryOp, Instruction, Program};

use crate::error::{CompileError, EvaluationError};

/// A compiled expression that can be evaluated at any `x`.
pub trait Evaluable {
    fn evaluate(&self, x: f64) -> Result<f64, EvaluationError>;
}

impl<F> Evaluable for F
where
    F: Fn(f64) -> f64,
{
    fn evaluate(&self, x: f64) -> Result<f64, EvaluationError> {
        Ok(self(x))
    }
}

/// Turns expression text into an [`Evaluable`].
pub trait ExpressionCompiler {
    fn compile(&self, text: &str) -> Result<Box<dyn Evaluable>, CompileError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCompiler;

impl BuiltinCompiler {
    /// Compiles `text` into a concrete [`Program`].
    pub fn compile_program(&self, text: &str) -> Result<Program, CompileError> {
        let tokens = lexer::tokenize(text)?;
        parser::parse(tokens)
    }
}

impl ExpressionCompiler for BuiltinCompiler {
    fn compile(&self, text: &str) -> Result<Box<dyn Evaluable>, CompileError> {
        Ok(Box::new(self.compile_program(text)?))
    }
}

/// Evaluates and folds non-finite results into [`EvaluationError::NonFinite`].
pub fn evaluate_finite(evaluable: &dyn Evaluable, x: f64) -> Result<f64, EvaluationError> {
    let value = evaluable.evaluate(x)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvaluationError::NonFinite { value })
    }
}
