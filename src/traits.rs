use crate::approx::{Method, Policy};
use crate::error::Result;
use crate::rational::Rational;

/// The result of an approximation, tagged by whether it equals the approximated value
#[derive(PartialEq, Debug, Clone)]
pub enum Approximation<T> {
    Approximated(T),
    Exact(T),
}

impl<T> Approximation<T> {
    /// Get the approximated value, discarding the exactness
    #[inline]
    pub fn value(self) -> T {
        match self {
            Approximation::Approximated(v) | Approximation::Exact(v) => v,
        }
    }

    #[inline]
    pub fn value_ref(&self) -> &T {
        match self {
            Approximation::Approximated(v) | Approximation::Exact(v) => v,
        }
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        matches!(self, Approximation::Exact(_))
    }
}

// note: the approximation always goes through the exact rational value of the number,
//       so a real number is approximated as the binary fraction it's stored as
pub trait RationalApproximation {
    /// Return the best rational approximation of the number under the policy, found by the method
    fn approx_rational(&self, method: Method, policy: &Policy) -> Result<Approximation<Rational>>;
}
