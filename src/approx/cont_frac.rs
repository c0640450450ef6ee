//! Approximation by the convergents and semiconvergents of the continued fraction expansion

use super::{closest, tolerance, within, Policy};
use crate::cont_frac::{Block, ContinuedFraction};
use crate::error::{Error, Result};
use crate::rational::Rational;
use log::trace;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::One;
use core::cmp::max;

/// Search the approximation of a reduced fraction `x` in `(0, 1/2]`
pub(super) fn approximate(x: &Rational, policy: &Policy) -> Result<Rational> {
    let cf = ContinuedFraction::from_rational(x);
    trace!("expansion of {} is {}", x, cf);

    match policy {
        Policy::Accuracy(places) => by_accuracy(x, &cf, &tolerance(*places)),
        Policy::MaxDenominator(bound) => by_denominator(x, &cf, bound),
    }
}

/// `[a0; a1, .., a_(k-1), v]`
fn with_last_term(cf: &ContinuedFraction, k: usize, v: BigInt) -> Result<ContinuedFraction> {
    let head = cf
        .slice(..=k)
        .ok_or_else(|| Error::Construction(format!("no coefficient {} in {}", k, cf)))?;
    head.replace_last_term(v)
}

fn as_rational((p, q): (&BigInt, &BigInt)) -> Rational {
    Rational::new_raw(p.clone(), q.clone())
}

fn by_accuracy(x: &Rational, cf: &ContinuedFraction, eps: &Rational) -> Result<Rational> {
    // find the first convergent C_n close enough, the last one is x itself
    let mut block = Block::<BigInt>::identity();
    let mut found = None;
    for (n, a) in cf.coeffs().iter().enumerate() {
        let (p, q) = block.rmove(a);
        let c = Rational::new_raw(p.clone(), q.clone());
        trace!("convergent {} is {}", n, c);
        if within(x, &c, eps) {
            found = Some((n, c));
            break;
        }
        block.update(p, q);
    }
    let (n, c) = match found {
        Some(v) => v,
        None => return Ok(x.clone()),
    };
    if n < 2 {
        return Ok(c);
    }

    // reduce the last term to the smallest t such that [a0; .., a_(n-1), t]
    // stays on the same side of x as C_n and within the tolerance
    let bound = if n.is_even() { x - eps } else { x + eps };
    let (pm1, qm1) = block.last();
    let (pm2, qm2) = block.second_last();
    let lhs = bound.clone() * qm2.clone() - pm2.clone();
    let rhs = Rational::from_integer(pm1.clone()) - bound * qm1.clone();
    let t = max(lhs.checked_div(&rhs)?.floor() + 1u32, BigInt::one());
    trace!("last term {} of {} reduced to {}", cf[n], cf, t);

    Ok(with_last_term(cf, n, t)?.as_rational())
}

fn by_denominator(x: &Rational, cf: &ContinuedFraction, bound: &BigInt) -> Result<Rational> {
    // find the first convergent C_k whose denominator exceeds the bound
    let mut block = Block::<BigInt>::identity();
    let mut overflow = None;
    for (k, a) in cf.coeffs().iter().enumerate() {
        let (p, q) = block.rmove(a);
        if &q > bound {
            overflow = Some((k, q));
            break;
        }
        trace!("convergent {} is {}/{}", k, p, q);
        block.update(p, q);
    }
    let (k, qk) = match overflow {
        Some(v) => v,
        None => return Ok(x.clone()),
    };

    // C_n with n = k - 1 is the last convergent within the bound
    let a = &cf[k];
    let (_, qn) = block.last();
    let (_, qm1) = block.second_last();
    let cn = as_rational(block.last());

    // semiconvergents with a term smaller than a/2 are never better than C_n
    let half = Rational::new_raw(a.clone(), BigInt::from(2u32)).ceil();
    if half * qn + qm1 > *bound {
        return Ok(cn);
    }

    let i = Rational::new_raw(qk - bound, qn.clone()).ceil();
    let t: BigInt = a - &i;
    let candidate = with_last_term(cf, k, t)?.as_rational();
    trace!("semiconvergent {} with denominator bounded by {}", candidate, bound);
    if a.is_even() && i * 2u32 == *a {
        Ok(closest(x, cn, candidate))
    } else {
        Ok(candidate)
    }
}
