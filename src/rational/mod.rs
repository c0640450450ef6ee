//! Data structures and algorithms implementations related to
//! exact rational numbers.
//!
//! 1. [Rational][Rational] is a fraction of two arbitrary precision integers. It's never
//!    reduced implicitly, and two fractions compare equal only if they share numerator and denominator.
//! 2. [Operand][Operand] is the tagged union of values a fraction can be combined with,
//!    an integer, a real number or another fraction.

mod fraction;
mod operand;

pub use fraction::*;
pub use operand::*;

pub(crate) use operand::describe_real;
