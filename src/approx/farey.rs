//! Approximation by bisecting the Farey sequence (the Stern-Brocot search)

use super::{closest, tolerance, within, Policy};
use crate::error::Result;
use crate::rational::Rational;
use log::trace;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};
use core::cmp::{max, Ordering};

/// The mediant `(a + c) / (b + d)` of `a/b` and `c/d`. It lies strictly between
/// the two fractions when their denominators are positive.
///
/// ```
/// use num_farey::{mediant, Rational};
/// let m = mediant(&Rational::new(1, 3).unwrap(), &Rational::new(1, 2).unwrap());
/// assert_eq!(m, Rational::new(2, 5).unwrap());
/// ```
#[inline]
pub fn mediant(lhs: &Rational, rhs: &Rational) -> Rational {
    Rational::new_raw(lhs.numer() + rhs.numer(), lhs.denom() + rhs.denom())
}

/// Search the approximation of a reduced fraction `x` in `(0, 1/2]`
pub(super) fn approximate(x: &Rational, policy: &Policy) -> Result<Rational> {
    // 1/(n+1) < x <= 1/n
    let n = x.denom().div_floor(x.numer());
    let left = Rational::zero();
    let right = Rational::new_raw(BigInt::one(), n.clone());

    Ok(match policy {
        Policy::Accuracy(places) => by_accuracy(x, left, right, &tolerance(*places)),
        Policy::MaxDenominator(bound) if bound <= &n => {
            // no fraction with a small enough denominator lies inside (0, 1/n)
            closest(x, left, Rational::new_raw(BigInt::one(), bound.clone()))
        }
        Policy::MaxDenominator(bound) => by_denominator(x, left, right, bound),
    })
}

fn by_accuracy(x: &Rational, mut left: Rational, mut right: Rational, eps: &Rational) -> Rational {
    loop {
        if within(x, &left, eps) {
            return left;
        }
        if within(x, &right, eps) {
            return right;
        }

        let m = mediant(&left, &right);
        trace!("farey interval [{}, {}], mediant {}", left, right, m);
        match x.value_cmp(&m) {
            Ordering::Less => right = m,
            Ordering::Greater => left = m,
            Ordering::Equal => return m,
        }
    }
}

fn by_denominator(x: &Rational, mut left: Rational, mut right: Rational, bound: &BigInt) -> Rational {
    while max(left.denom(), right.denom()) < bound {
        let m = mediant(&left, &right);
        if m.denom() > bound {
            break;
        }

        trace!("farey interval [{}, {}], mediant {}", left, right, m);
        match x.value_cmp(&m) {
            Ordering::Less => right = m,
            Ordering::Greater => left = m,
            Ordering::Equal => return m,
        }
    }
    closest(x, left, right)
}
