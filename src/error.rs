use thiserror::Error;

/// Errors raised while building numbers or approximating them
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A value was constructed from invalid parts, e.g. a non-positive denominator
    #[error("invalid construction: {0}")]
    Construction(String),

    /// Division, inversion or negative exponentiation of zero
    #[error("division by zero")]
    DivisionByZero,

    /// The operand is not an integer, a finite real or a rational
    #[error("must be int, float or Rational, not {0}")]
    OperandType(String),

    /// The approximation method or policy is invalid or ambiguous
    #[error("{0}")]
    Configuration(String),
}

pub type Result<T> = std::result::Result<T, Error>;
