use smallvec::SmallVec;

use crate::error::EvaluationError;

use super::Evaluable;
use super::builtins::Builtin;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    pub(super) const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 4,
        }
    }

    pub(super) const fn is_right_associative(self) -> bool {
        matches!(self, Self::Pow)
    }

    fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
            Self::Pow => lhs.powf(rhs),
        }
    }
}

/// Precedence of prefix negation: looser than `^`, tighter than `*`.
pub(super) const NEGATE_PRECEDENCE: u8 = 3;

/// One step of a postfix program.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instruction {
    Const(f64),
    Var,
    Negate,
    Binary(BinaryOp),
    Call(Builtin),
}

impl Instruction {
    /// Number of stack values consumed and produced.
    const fn stack_effect(self) -> (usize, usize) {
        match self {
            Self::Const(_) | Self::Var => (0, 1),
            Self::Negate => (1, 1),
            Self::Binary(_) => (2, 1),
            Self::Call(builtin) => (builtin.arity(), 1),
        }
    }
}

type EvalStack = SmallVec<[f64; 16]>;

/// Postfix program compiled from one expression in `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Builds a program, returning `None` unless it leaves exactly one value
    /// on the stack without ever underflowing.
    pub(super) fn new(instructions: Vec<Instruction>) -> Option<Self> {
        let mut depth = 0usize;
        for instruction in &instructions {
            let (pops, pushes) = instruction.stack_effect();
            depth = depth.checked_sub(pops)? + pushes;
        }
        (depth == 1).then_some(Self { instructions })
    }

    #[must_use]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    fn run(&self, x: f64) -> Result<f64, EvaluationError> {
        let mut stack = EvalStack::new();
        for instruction in &self.instructions {
            match *instruction {
                Instruction::Const(value) => stack.push(value),
                Instruction::Var => stack.push(x),
                Instruction::Negate => {
                    let value = pop(&mut stack);
                    stack.push(-value);
                }
                Instruction::Binary(op) => {
                    let rhs = pop(&mut stack);
                    let lhs = pop(&mut stack);
                    stack.push(op.apply(lhs, rhs));
                }
                Instruction::Call(builtin) => {
                    let split = stack.len().saturating_sub(builtin.arity());
                    let args: SmallVec<[f64; 2]> = stack.drain(split..).collect();
                    stack.push(builtin.apply(&args)?);
                }
            }
        }
        Ok(pop(&mut stack))
    }
}

// Balance is checked in `Program::new`; NaN only shows up if that invariant
// is broken and then surfaces as a non-finite sample.
fn pop(stack: &mut EvalStack) -> f64 {
    stack.pop().unwrap_or(f64::NAN)
}

impl Evaluable for Program {
    fn evaluate(&self, x: f64) -> Result<f64, EvaluationError> {
        self.run(x)
    }
}

#[cfg(test)]
mod tests {
    use super::{BinaryOp, Instruction, Program};

    #[test]
    fn rejects_unbalanced_programs() {
        assert!(Program::new(vec![]).is_none());
        assert!(Program::new(vec![Instruction::Var, Instruction::Var]).is_none());
        assert!(Program::new(vec![Instruction::Binary(BinaryOp::Add)]).is_none());
    }

    #[test]
    fn accepts_balanced_postfix() {
        let program = Program::new(vec![
            Instruction::Var,
            Instruction::Const(2.0),
            Instruction::Binary(BinaryOp::Pow),
        ]);
        assert!(program.is_some());
    }
}
