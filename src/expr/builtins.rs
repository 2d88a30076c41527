use std::f64::consts;

use crate::error::EvaluationError;

/// Functions callable from expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Sqrt,
    Cbrt,
    Abs,
    Exp,
    Ln,
    Log,
    Log10,
    Log2,
    Floor,
    Ceil,
    Round,
    Sign,
    Min,
    Max,
    Pow,
}

impl Builtin {
    pub const ALL: [Self; 24] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Asin,
        Self::Acos,
        Self::Atan,
        Self::Sinh,
        Self::Cosh,
        Self::Tanh,
        Self::Sqrt,
        Self::Cbrt,
        Self::Abs,
        Self::Exp,
        Self::Ln,
        Self::Log,
        Self::Log10,
        Self::Log2,
        Self::Floor,
        Self::Ceil,
        Self::Round,
        Self::Sign,
        Self::Min,
        Self::Max,
        Self::Pow,
    ];

    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|builtin| builtin.name() == name)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Sqrt => "sqrt",
            Self::Cbrt => "cbrt",
            Self::Abs => "abs",
            Self::Exp => "exp",
            Self::Ln => "ln",
            Self::Log => "log",
            Self::Log10 => "log10",
            Self::Log2 => "log2",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
            Self::Round => "round",
            Self::Sign => "sign",
            Self::Min => "min",
            Self::Max => "max",
            Self::Pow => "pow",
        }
    }

    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Min | Self::Max | Self::Pow => 2,
            _ => 1,
        }
    }

    /// Applies the function to `args`, which holds exactly `arity()` values
    /// in call order.
    pub fn apply(self, args: &[f64]) -> Result<f64, EvaluationError> {
        let a = args.first().copied().unwrap_or(f64::NAN);
        let b = args.get(1).copied().unwrap_or(f64::NAN);
        let value = match self {
            Self::Sin => a.sin(),
            Self::Cos => a.cos(),
            Self::Tan => a.tan(),
            Self::Asin => self.require(a, (-1.0..=1.0).contains(&a))?.asin(),
            Self::Acos => self.require(a, (-1.0..=1.0).contains(&a))?.acos(),
            Self::Atan => a.atan(),
            Self::Sinh => a.sinh(),
            Self::Cosh => a.cosh(),
            Self::Tanh => a.tanh(),
            Self::Sqrt => self.require(a, a >= 0.0)?.sqrt(),
            Self::Cbrt => a.cbrt(),
            Self::Abs => a.abs(),
            Self::Exp => a.exp(),
            Self::Ln | Self::Log => self.require(a, a > 0.0)?.ln(),
            Self::Log10 => self.require(a, a > 0.0)?.log10(),
            Self::Log2 => self.require(a, a > 0.0)?.log2(),
            Self::Floor => a.floor(),
            Self::Ceil => a.ceil(),
            Self::Round => a.round(),
            Self::Sign => {
                if a == 0.0 {
                    0.0
                } else {
                    a.signum()
                }
            }
            Self::Min => a.min(b),
            Self::Max => a.max(b),
            Self::Pow => a.powf(b),
        };
        Ok(value)
    }

    fn require(self, argument: f64, in_domain: bool) -> Result<f64, EvaluationError> {
        if in_domain {
            Ok(argument)
        } else {
            Err(EvaluationError::Domain {
                function: self.name(),
                argument,
            })
        }
    }
}

#[must_use]
pub(super) fn constant(name: &str) -> Option<f64> {
    match name {
        "pi" => Some(consts::PI),
        "tau" => Some(consts::TAU),
        "e" => Some(consts::E),
        _ => None,
    }
}
