// Shunting-yard conversion from infix tokens to a postfix `Program`.

use crate::error::CompileError;

use super::builtins::{self, Builtin};
use super::lexer::{Token, TokenKind};
use super::program::{BinaryOp, Instruction, NEGATE_PRECEDENCE, Program};

/// Name of the single free variable.
pub const VARIABLE: &str = "x";

enum Pending {
    Binary(BinaryOp),
    Negate,
    Group { offset: usize },
    Call { builtin: Builtin, args: usize, offset: usize },
}

impl Pending {
    fn precedence(&self) -> Option<u8> {
        match self {
            Self::Binary(op) => Some(op.precedence()),
            Self::Negate => Some(NEGATE_PRECEDENCE),
            Self::Group { .. } | Self::Call { .. } => None,
        }
    }

    fn into_instruction(self) -> Option<Instruction> {
        match self {
            Self::Binary(op) => Some(Instruction::Binary(op)),
            Self::Negate => Some(Instruction::Negate),
            Self::Group { .. } | Self::Call { .. } => None,
        }
    }
}

struct Parser {
    output: Vec<Instruction>,
    pending: Vec<Pending>,
    expect_operand: bool,
}

pub(super) fn parse(tokens: Vec<Token>) -> Result<Program, CompileError> {
    if tokens.is_empty() {
        return Err(CompileError::Empty);
    }

    let mut parser = Parser {
        output: Vec::with_capacity(tokens.len()),
        pending: Vec::new(),
        expect_operand: true,
    };

    let mut tokens = tokens.into_iter().peekable();
    while let Some(token) = tokens.next() {
        let Token { kind, offset } = token;
        match kind {
            TokenKind::Number(value) => parser.operand(Instruction::Const(value), offset, &kind)?,
            TokenKind::Ident(ref name) => {
                if name == VARIABLE {
                    parser.operand(Instruction::Var, offset, &kind)?;
                } else if let Some(value) = builtins::constant(name) {
                    parser.operand(Instruction::Const(value), offset, &kind)?;
                } else if let Some(builtin) = Builtin::lookup(name) {
                    if !parser.expect_operand {
                        return Err(unexpected(&kind, offset));
                    }
                    match tokens.next() {
                        Some(Token {
                            kind: TokenKind::OpenParen,
                            ..
                        }) => parser.pending.push(Pending::Call {
                            builtin,
                            args: 1,
                            offset,
                        }),
                        Some(next) => return Err(unexpected(&next.kind, next.offset)),
                        None => return Err(CompileError::UnexpectedEnd),
                    }
                } else {
                    return Err(CompileError::UnknownIdentifier {
                        name: name.clone(),
                        offset,
                    });
                }
            }
            TokenKind::Minus if parser.expect_operand => parser.pending.push(Pending::Negate),
            // Unary plus is the identity.
            TokenKind::Plus if parser.expect_operand => {}
            TokenKind::Plus => parser.binary(BinaryOp::Add),
            TokenKind::Minus => parser.binary(BinaryOp::Sub),
            TokenKind::Star | TokenKind::Slash | TokenKind::Caret => {
                if parser.expect_operand {
                    return Err(unexpected(&kind, offset));
                }
                let op = match kind {
                    TokenKind::Star => BinaryOp::Mul,
                    TokenKind::Slash => BinaryOp::Div,
                    _ => BinaryOp::Pow,
                };
                parser.binary(op);
            }
            TokenKind::OpenParen => {
                if !parser.expect_operand {
                    return Err(unexpected(&kind, offset));
                }
                parser.pending.push(Pending::Group { offset });
            }
            TokenKind::Comma => {
                if parser.expect_operand {
                    return Err(unexpected(&kind, offset));
                }
                parser.drain_operators();
                match parser.pending.last_mut() {
                    Some(Pending::Call { args, .. }) => *args += 1,
                    _ => return Err(unexpected(&kind, offset)),
                }
                parser.expect_operand = true;
            }
            TokenKind::CloseParen => {
                if parser.expect_operand {
                    return Err(unexpected(&kind, offset));
                }
                parser.drain_operators();
                match parser.pending.pop() {
                    Some(Pending::Group { .. }) => {}
                    Some(Pending::Call { builtin, args, .. }) => {
                        if args != builtin.arity() {
                            return Err(CompileError::WrongArity {
                                name: builtin.name(),
                                expected: builtin.arity(),
                                found: args,
                            });
                        }
                        parser.output.push(Instruction::Call(builtin));
                    }
                    _ => return Err(CompileError::UnbalancedParenthesis { offset }),
                }
            }
        }
    }

    if parser.expect_operand {
        return Err(CompileError::UnexpectedEnd);
    }

    while let Some(pending) = parser.pending.pop() {
        match pending {
            Pending::Group { offset } | Pending::Call { offset, .. } => {
                return Err(CompileError::UnbalancedParenthesis { offset });
            }
            operator => parser.output.extend(operator.into_instruction()),
        }
    }

    Program::new(parser.output).ok_or(CompileError::UnexpectedEnd)
}

impl Parser {
    fn operand(
        &mut self,
        instruction: Instruction,
        offset: usize,
        kind: &TokenKind,
    ) -> Result<(), CompileError> {
        if !self.expect_operand {
            // Implicit multiplication (`2x`) is not supported.
            return Err(unexpected(kind, offset));
        }
        self.output.push(instruction);
        self.expect_operand = false;
        Ok(())
    }

    fn binary(&mut self, op: BinaryOp) {
        let precedence = op.precedence();
        while let Some(top) = self.pending.last().and_then(Pending::precedence) {
            let pops = top > precedence || (top == precedence && !op.is_right_associative());
            if !pops {
                break;
            }
            if let Some(instruction) = self.pending.pop().and_then(Pending::into_instruction) {
                self.output.push(instruction);
            }
        }
        self.pending.push(Pending::Binary(op));
        self.expect_operand = true;
    }

    /// Moves operators to the output up to the innermost group or call.
    fn drain_operators(&mut self) {
        while self
            .pending
            .last()
            .is_some_and(|top| top.precedence().is_some())
        {
            if let Some(instruction) = self.pending.pop().and_then(Pending::into_instruction) {
                self.output.push(instruction);
            }
        }
    }
}

fn unexpected(kind: &TokenKind, offset: usize) -> CompileError {
    CompileError::UnexpectedToken {
        token: kind.describe(),
        offset,
    }
}
