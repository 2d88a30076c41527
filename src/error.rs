use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid canvas size: width={width}, height={height}")]
    InvalidCanvas { width: u32, height: u32 },

    #[error("invalid viewport: {0}")]
    InvalidViewport(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("render backend failure: {0}")]
    Backend(String),

    #[error(transparent)]
    Compile(#[from] CompileError),
}

/// Failure to turn expression text into an evaluable program.
///
/// Offsets are byte offsets into the submitted text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    #[error("expression is empty")]
    Empty,

    #[error("unexpected character `{ch}` at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    #[error("invalid number `{text}` at offset {offset}")]
    InvalidNumber { text: String, offset: usize },

    #[error("unknown identifier `{name}` at offset {offset}")]
    UnknownIdentifier { name: String, offset: usize },

    #[error("unexpected `{token}` at offset {offset}")]
    UnexpectedToken { token: String, offset: usize },

    #[error("unbalanced parenthesis at offset {offset}")]
    UnbalancedParenthesis { offset: usize },

    #[error("function `{name}` expects {expected} argument(s), found {found}")]
    WrongArity {
        name: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("expression ends unexpectedly")]
    UnexpectedEnd,
}

/// Failure to produce a usable value at one specific `x`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EvaluationError {
    #[error("`{function}` is undefined for argument {argument}")]
    Domain {
        function: &'static str,
        argument: f64,
    },

    #[error("result is not finite ({value})")]
    NonFinite { value: f64 },
}
