//! Implementation of finite simple continued fractions

use super::block::Block;
use crate::error::{Error, Result};
use crate::rational::Rational;
use core::ops::{Bound, Index, RangeBounds};
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use std::fmt;

/// This struct represents a finite simple continued fraction `a0 + 1/(a1 + 1/(a2 + ... + 1/an))`
/// Where a0 is an signed integer, a1, a2, .., an are positive integers.
///
/// Equality is structural as for [Rational]: `[0; 1, 1]` and `[0; 2]` are both `1/2`
/// but they are different continued fractions. The fractions created by
/// [from_rational][ContinuedFraction::from_rational] are canonical (the last coefficient
/// is not one, unless it's the only coefficient).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContinuedFraction {
    /// Coefficients a0, a1, .., an
    coeffs: Vec<BigInt>,
}

impl ContinuedFraction {
    /// Create a continued fraction from its coefficients
    ///
    /// # Errors
    /// [Error::Construction] if no coefficient is given, or a coefficient
    /// other than the first one is not positive.
    pub fn new<T: Into<BigInt>>(coeffs: Vec<T>) -> Result<Self> {
        let coeffs: Vec<BigInt> = coeffs.into_iter().map(Into::into).collect();
        if coeffs.is_empty() {
            return Err(Error::Construction(
                "at least one coefficient is required".to_string(),
            ));
        }
        if let Some(a) = coeffs.iter().skip(1).find(|a| !a.is_positive()) {
            return Err(Error::Construction(format!(
                "coefficients after the first one must be positive, got {}",
                a
            )));
        }
        Ok(ContinuedFraction { coeffs })
    }

    #[inline]
    pub fn coeffs(&self) -> &[BigInt] {
        &self.coeffs[..]
    }

    /// Number of coefficients, including a0
    #[inline]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    #[inline]
    pub fn last_term(&self) -> &BigInt {
        &self.coeffs[self.coeffs.len() - 1]
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.coeffs.len() == 1
    }

    /// Zero is either `[0]`, or `[-1; 1]` in the non-canonical form
    pub fn is_zero(&self) -> bool {
        match &self.coeffs[..] {
            [a0] => a0.is_zero(),
            [a0, a1] => a1.is_one() && (a0 + 1u32).is_zero(),
            _ => false,
        }
    }

    /// Evaluate the continued fraction from the last coefficient backward
    pub fn as_rational(&self) -> Rational {
        let mut iter = self.coeffs.iter().rev();
        let mut value = Rational::from_integer(self.last_term().clone());
        iter.next();

        // every coefficient folded before a0 is positive, so is the value
        for a in iter {
            value = value.inverse_nonzero() + a.clone();
        }
        value
    }

    /// Returns the continued fraction of `1 / self`
    pub fn inverse(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let a0 = &self.coeffs[0];
        if a0.is_zero() {
            // [0; a1, a2, ..] -> [a1; a2, ..]
            Ok(ContinuedFraction { coeffs: self.coeffs[1..].to_vec() })
        } else if a0.is_positive() {
            // [a0; a1, ..] -> [0; a0, a1, ..]
            let mut coeffs = Vec::with_capacity(self.coeffs.len() + 1);
            coeffs.push(BigInt::zero());
            coeffs.extend(self.coeffs.iter().cloned());
            Ok(ContinuedFraction { coeffs })
        } else {
            // prepending a zero would leave a negative a1, expand the inverse again
            Ok(Self::from_rational(&self.as_rational().inverse_nonzero()))
        }
    }

    /// Expand a rational number, taking the floor as the next coefficient and
    /// continuing with the inverse of the remainder until it vanishes
    pub fn from_rational(r: &Rational) -> Self {
        Self::expand(r.clone(), usize::MAX)
    }

    /// Expand the value stored in a float to `n + 1` coefficients `[a0; a1, .., an]`.
    /// The expansion stops earlier if the remainder becomes exactly zero, which happens
    /// after finitely many terms since every finite float is a binary fraction.
    ///
    /// # Errors
    /// [Error::OperandType] if the number is not finite.
    pub fn truncate(x: f64, n: usize) -> Result<Self> {
        Ok(Self::expand(Rational::from_f64(x)?, n))
    }

    // at most `n + 1` coefficients of the expansion of `r`
    fn expand(mut r: Rational, n: usize) -> Self {
        let mut coeffs = Vec::new();
        loop {
            let a = r.floor();
            let rem = r - a.clone();
            coeffs.push(a);
            if rem.is_zero() || coeffs.len() > n {
                break;
            }
            r = rem.inverse_nonzero();
        }
        ContinuedFraction { coeffs }
    }

    /// Returns a copy with the last coefficient set to `v`
    pub fn replace_last_term(&self, v: BigInt) -> Result<Self> {
        let mut coeffs = self.coeffs.clone();
        let last = coeffs.len() - 1;
        coeffs[last] = v;
        Self::new(coeffs)
    }

    /// Returns the continued fraction with the coefficients in `range`, where the first
    /// coefficient in the range becomes a0. Returns None if the range is empty or out of bounds.
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Option<Self> {
        let bounds: (Bound<usize>, Bound<usize>) =
            (range.start_bound().cloned(), range.end_bound().cloned());
        match self.coeffs.get(bounds) {
            Some(coeffs) if !coeffs.is_empty() => Some(ContinuedFraction {
                coeffs: coeffs.to_vec(),
            }),
            _ => None,
        }
    }

    /// Returns an iterator of the convergents, each of them is reduced
    pub fn convergents(&self) -> Convergents<'_> {
        Convergents {
            coeffs: self.coeffs.iter(),
            block: Block::identity(),
        }
    }

    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.as_rational().to_f64()
    }
}

/// Iterator of convergents of a [ContinuedFraction]
#[derive(Debug, Clone)]
pub struct Convergents<'a> {
    coeffs: std::slice::Iter<'a, BigInt>,
    block: Block<BigInt>,
}

impl<'a> Iterator for Convergents<'a> {
    type Item = Rational;

    fn next(&mut self) -> Option<Self::Item> {
        let a = self.coeffs.next()?;
        let (p, q) = self.block.advance(a);
        Some(Rational::new_raw(p, q))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.coeffs.size_hint()
    }
}

/// The rational value of the first `n + 1` coefficients of the expansion of `x`
pub fn convergent(x: f64, n: usize) -> Result<Rational> {
    Ok(ContinuedFraction::truncate(x, n)?.as_rational())
}

impl Index<usize> for ContinuedFraction {
    type Output = BigInt;

    #[inline]
    fn index(&self, i: usize) -> &BigInt {
        &self.coeffs[i]
    }
}

impl From<Rational> for ContinuedFraction {
    #[inline]
    fn from(r: Rational) -> Self {
        Self::from_rational(&r)
    }
}

impl<'a> From<&'a Rational> for ContinuedFraction {
    #[inline]
    fn from(r: &'a Rational) -> Self {
        Self::from_rational(r)
    }
}

impl fmt::Display for ContinuedFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}", self.coeffs[0])?;
        let mut iter = self.coeffs.iter().skip(1);
        if let Some(v) = iter.next() {
            write!(f, "; {}", v)?;
            for v in iter {
                write!(f, ", {}", v)?;
            }
        }
        write!(f, "]")
    }
}
