//! Best rational approximation of real numbers
//!
//! There are two methods to find the approximation, and they always agree on the result
//! 1. [Method::Farey] bisects the Farey sequence with mediants until the policy is met.
//! 2. [Method::ContinuedFraction] walks the convergents of the continued fraction expansion,
//!    and then reduces the last partial quotient as far as the policy allows.
//!
//! The search is only performed on `(0, 1/2]`, other numbers are mapped into this range by
//! negation, removing the integer part and reflection `x -> 1 - x`.
//!
//! # References:
//! - <https://en.wikipedia.org/wiki/Continued_fraction#Best_rational_approximations>
//! - <https://en.wikipedia.org/wiki/Stern%E2%80%93Brocot_tree>

mod cont_frac;
mod farey;

pub use farey::mediant;

use crate::error::{Error, Result};
use crate::rational::Rational;
use crate::traits::{Approximation, RationalApproximation};
use core::cmp::Ordering;
use core::convert::TryFrom;
use core::str::FromStr;
use log::{debug, trace};
use num_bigint::BigInt;
use num_traits::{Pow, Signed, Zero};
use std::fmt;

const POLICY_REQUIRED: &str = "must specify one of places or max_denominator";

/// The algorithm used to search for the approximation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Farey,
    ContinuedFraction,
}

impl Method {
    /// Names accepted by [Method::from_str]
    pub const NAMES: [&'static str; 2] = ["farey", "continued_fraction"];

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Method::Farey => Self::NAMES[0],
            Method::ContinuedFraction => Self::NAMES[1],
        }
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "farey" => Ok(Method::Farey),
            "continued_fraction" | "continued-fraction" | "cf" => Ok(Method::ContinuedFraction),
            _ => Err(Error::Configuration(format!(
                "method must be one of {{{}}}, not {:?}",
                Self::NAMES.join(", "),
                s
            ))),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The condition that terminates the search
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Policy {
    /// The approximation is within `0.5 * 10^-places` of the number
    Accuracy(i32),
    /// The approximation has a denominator no larger than the bound
    MaxDenominator(BigInt),
}

impl Policy {
    #[inline]
    pub fn places(places: i32) -> Self {
        Policy::Accuracy(places)
    }

    /// Create a [Policy::MaxDenominator], the bound must be positive
    pub fn max_denominator<T: Into<BigInt>>(bound: T) -> Result<Self> {
        let policy = Policy::MaxDenominator(bound.into());
        policy.validate()?;
        Ok(policy)
    }

    fn validate(&self) -> Result<()> {
        match self {
            Policy::MaxDenominator(bound) if !bound.is_positive() => Err(Error::Configuration(
                format!("max_denominator must be positive, got {}", bound),
            )),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Accuracy(places) => write!(f, "places={}", places),
            Policy::MaxDenominator(bound) => write!(f, "max_denominator={}", bound),
        }
    }
}

/// Keyword style selection of the [Policy], exactly one of the fields should be set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub places: Option<i32>,
    pub max_denominator: Option<u64>,
}

impl Options {
    #[inline]
    pub fn with_places(mut self, places: i32) -> Self {
        self.places = Some(places);
        self
    }

    #[inline]
    pub fn with_max_denominator(mut self, bound: u64) -> Self {
        self.max_denominator = Some(bound);
        self
    }
}

impl TryFrom<Options> for Policy {
    type Error = Error;

    fn try_from(options: Options) -> Result<Self> {
        match (options.places, options.max_denominator) {
            (Some(places), None) => Ok(Policy::Accuracy(places)),
            (None, Some(bound)) => Policy::max_denominator(bound),
            _ => Err(Error::Configuration(POLICY_REQUIRED.to_string())),
        }
    }
}

/// Find the best rational approximation of `x`.
///
/// ```
/// use num_farey::{best_rational_approximation, Method, Policy, Rational};
///
/// let x = 2f64.sqrt() - 1.;
/// let r = best_rational_approximation(x, Method::Farey, &Policy::places(7)).unwrap();
/// assert_eq!(r, Rational::new(2378, 5741).unwrap());
///
/// let r = best_rational_approximation(x, Method::ContinuedFraction, &Policy::max_denominator(1000).unwrap()).unwrap();
/// assert_eq!(r, Rational::new(408, 985).unwrap());
/// ```
pub fn best_rational_approximation(x: f64, method: Method, policy: &Policy) -> Result<Rational> {
    Ok(x.approx_rational(method, policy)?.value())
}

/// Find the best rational approximation of `x`, with the method given by its name
/// and the policy given by [Options].
pub fn find_rational_approximation(x: f64, method: &str, options: Options) -> Result<Rational> {
    let method = Method::from_str(method)?;
    let policy = Policy::try_from(options)?;
    best_rational_approximation(x, method, &policy)
}

impl RationalApproximation for Rational {
    fn approx_rational(&self, method: Method, policy: &Policy) -> Result<Approximation<Rational>> {
        policy.validate()?;

        let x = self.reduced_form();
        debug!("approximating {} by {} with {}", x, method, policy);
        let result = reduce_domain(&x, &|y: &Rational| match method {
            Method::Farey => farey::approximate(y, policy),
            Method::ContinuedFraction => cont_frac::approximate(y, policy),
        })?;
        debug!("approximation of {} is {}", x, result);

        if result == x {
            Ok(Approximation::Exact(result))
        } else {
            Ok(Approximation::Approximated(result))
        }
    }
}

impl RationalApproximation for f64 {
    /// The float is first converted to the fraction with exactly the same value
    fn approx_rational(&self, method: Method, policy: &Policy) -> Result<Approximation<Rational>> {
        Rational::from_f64(*self)?.approx_rational(method, policy)
    }
}

/// Map a reduced fraction into `(0, 1/2]` before calling `search`, and map the result back.
/// The integer part and the reflection keep the result reduced.
fn reduce_domain<F>(x: &Rational, search: &F) -> Result<Rational>
where
    F: Fn(&Rational) -> Result<Rational>,
{
    if x.is_zero() {
        return Ok(Rational::zero());
    }
    if x.is_negative() {
        trace!("negate {}", x);
        return Ok(-reduce_domain(&-x, search)?);
    }

    let i = x.floor();
    if !i.is_zero() {
        trace!("remove integer part {} from {}", i, x);
        return Ok(reduce_domain(&(x.clone() - i.clone()), search)? + i);
    }
    if x.numer() * 2u32 > *x.denom() {
        trace!("reflect {}", x);
        return Ok(1i32 - reduce_domain(&(1i32 - x.clone()), search)?);
    }

    search(x)
}

/// The tolerance `0.5 * 10^-places` of [Policy::Accuracy]
pub(crate) fn tolerance(places: i32) -> Rational {
    let scale: BigInt = Pow::pow(BigInt::from(10u32), places.unsigned_abs());
    if places >= 0 {
        Rational::new_raw(BigInt::from(1u32), scale * 2u32)
    } else {
        Rational::new_raw(scale, BigInt::from(2u32))
    }
}

/// Whether `|x - c| < eps`
#[inline]
pub(crate) fn within(x: &Rational, c: &Rational, eps: &Rational) -> bool {
    (x - c).abs().value_cmp(eps) == Ordering::Less
}

/// Returns the candidate closer to `x`. On a tie the one with smaller denominator wins,
/// and `a` wins if the denominators are also equal.
pub(crate) fn closest(x: &Rational, a: Rational, b: Rational) -> Rational {
    let da = (x - &a).abs();
    let db = (x - &b).abs();
    match da.value_cmp(&db) {
        Ordering::Less => a,
        Ordering::Greater => b,
        Ordering::Equal if b.denom() < a.denom() => b,
        Ordering::Equal => a,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{E, PI};

    const METHODS: [Method; 2] = [Method::Farey, Method::ContinuedFraction];

    fn r(n: i64, d: i64) -> Rational {
        Rational::new(n, d).unwrap()
    }

    fn places(x: f64, method: Method, places: i32) -> Rational {
        best_rational_approximation(x, method, &Policy::places(places)).unwrap()
    }

    fn max_denom(x: f64, method: Method, bound: u64) -> Rational {
        best_rational_approximation(x, method, &Policy::max_denominator(bound).unwrap()).unwrap()
    }

    #[test]
    fn configuration_test() {
        assert_eq!("farey".parse::<Method>(), Ok(Method::Farey));
        assert_eq!("Continued_Fraction".parse::<Method>(), Ok(Method::ContinuedFraction));
        assert_eq!("cf".parse::<Method>(), Ok(Method::ContinuedFraction));
        assert_eq!(Method::ContinuedFraction.to_string(), "continued_fraction");

        let err = "newton".parse::<Method>().unwrap_err();
        assert!(matches!(&err, Error::Configuration(_)));
        assert!(err.to_string().contains("farey, continued_fraction"));
        assert!(err.to_string().contains("newton"));

        let policy_err = Error::Configuration(POLICY_REQUIRED.to_string());
        let both = Options::default().with_places(7).with_max_denominator(1000);
        assert_eq!(Policy::try_from(both), Err(policy_err.clone()));
        assert_eq!(Policy::try_from(Options::default()), Err(policy_err.clone()));
        assert_eq!(find_rational_approximation(0.5, "farey", Options::default()), Err(policy_err.clone()));
        assert_eq!(find_rational_approximation(0.5, "cf", both), Err(policy_err));
        assert!(matches!(
            find_rational_approximation(0.5, "newton", Options::default().with_places(7)),
            Err(Error::Configuration(_))
        ));

        assert_eq!(Policy::try_from(Options::default().with_places(3)), Ok(Policy::Accuracy(3)));
        assert_eq!(
            Policy::try_from(Options::default().with_max_denominator(10)),
            Ok(Policy::MaxDenominator(BigInt::from(10)))
        );
        assert!(matches!(Policy::max_denominator(0), Err(Error::Configuration(_))));
        assert!(matches!(
            best_rational_approximation(0.5, Method::Farey, &Policy::MaxDenominator(BigInt::from(-3))),
            Err(Error::Configuration(_))
        ));
        assert_eq!(Policy::places(7).to_string(), "places=7");
    }

    #[test]
    fn invalid_input_test() {
        for &method in METHODS.iter() {
            assert!(matches!(
                best_rational_approximation(f64::NAN, method, &Policy::places(7)),
                Err(Error::OperandType(_))
            ));
            assert!(matches!(
                best_rational_approximation(f64::INFINITY, method, &Policy::places(7)),
                Err(Error::OperandType(_))
            ));
        }
    }

    #[test]
    fn zero_test() {
        for &method in METHODS.iter() {
            for p in 0..10 {
                assert_eq!(places(0., method, p), r(0, 1));
            }
            for &b in [1u64, 2, 10, 1000].iter() {
                assert_eq!(max_denom(0., method, b), r(0, 1));
            }
            assert_eq!(places(-0., method, 7), r(0, 1));
        }
    }

    #[test]
    fn irrational_test() {
        let x = 2f64.sqrt() - 1.; // 0.41421356237309515
        for &method in METHODS.iter() {
            let v = places(x, method, 7);
            assert_eq!(v, r(2378, 5741));
            assert!((x - v.to_f64()).abs() < 0.5e-7);
            assert_eq!(max_denom(x, method, 1000), r(408, 985));
        }
    }

    #[test]
    fn rational_test() {
        for &method in METHODS.iter() {
            assert_eq!(places(0.5, method, 7), r(1, 2));
            assert_eq!(places(0.4, method, 7), r(2, 5));
            assert_eq!(max_denom(0.5, method, 1000), r(1, 2));
            assert_eq!(max_denom(0.4, method, 1000), r(2, 5));
            assert_eq!(places(3., method, 7), r(3, 1));
            assert_eq!(places(-2.75, method, 7), r(-11, 4));
        }

        let half = 0.5f64.approx_rational(Method::Farey, &Policy::places(7)).unwrap();
        assert!(half.is_exact());
        assert_eq!(half.value_ref(), &r(1, 2));
        assert_eq!(half.value(), r(1, 2));
        let point_four = 0.4f64.approx_rational(Method::ContinuedFraction, &Policy::places(7)).unwrap();
        assert!(!point_four.is_exact());
        assert_eq!(point_four.value_ref(), &r(2, 5));
        assert_ne!(point_four.value_ref().value_cmp(&Rational::from_f64(0.4).unwrap()), Ordering::Equal);

        // a fraction is approximated by its value
        let x = r(710, 226);
        for &method in METHODS.iter() {
            assert_eq!(
                x.approx_rational(method, &Policy::places(10)).unwrap(),
                Approximation::Exact(r(355, 113))
            );
            assert_eq!(
                x.approx_rational(method, &Policy::max_denominator(100).unwrap()).unwrap(),
                Approximation::Approximated(r(311, 99))
            );
        }
    }

    #[test]
    fn negative_test() {
        let x = 1. - 3f64.sqrt(); // -0.7320508075688772
        for &method in METHODS.iter() {
            let v = places(x, method, 7);
            assert_eq!(v, r(-2131, 2911));
            assert!((x - v.to_f64()).abs() < 0.5e-7);
            assert_eq!(max_denom(x, method, 1000), r(-571, 780));
        }
    }

    #[test]
    fn between_half_and_one_test() {
        let x = 3f64.sqrt() - 1.; // 0.7320508075688772
        for &method in METHODS.iter() {
            assert_eq!(places(x, method, 7), r(2131, 2911));
            assert_eq!(max_denom(x, method, 1000), r(571, 780));
        }
    }

    #[test]
    fn greater_than_one_test() {
        let x = 17f64.sqrt(); // 4.123105625617661
        for &method in METHODS.iter() {
            let v = places(x, method, 7);
            assert_eq!(v, r(17684, 4289));
            assert!((x - v.to_f64()).abs() < 0.5e-7);
            assert_eq!(max_denom(x, method, 1000), r(2177, 528));
        }
    }

    #[test]
    fn extremal_test() {
        for &method in METHODS.iter() {
            assert_eq!(places(0.000000001, method, 7), r(0, 1));
            assert_eq!(max_denom(0.000000001, method, 1000), r(0, 1));
            assert_eq!(max_denom(0.0009, method, 1000), r(1, 1000));
            assert_eq!(places(1e-300, method, 7), r(0, 1));
            assert_eq!(max_denom(1e-300, method, 1000), r(0, 1));

            let big = places(1e300, method, 7);
            assert!(big.is_integer());
            assert_eq!(big, Rational::from_f64(1e300).unwrap());
        }
    }

    #[test]
    fn tie_break_test() {
        // the partial quotient of sqrt(2) is even, 140/99 and 99/70 are both candidates
        let x = 2f64.sqrt();
        for &method in METHODS.iter() {
            assert_eq!(max_denom(x, method, 100), r(140, 99));
        }

        // exactly halfway between 0 and 1, or 2 and 3
        for &method in METHODS.iter() {
            assert_eq!(max_denom(0.5, method, 1), r(0, 1));
            assert_eq!(max_denom(2.5, method, 1), r(2, 1));
        }
    }

    #[test]
    fn constants_test() {
        for &method in METHODS.iter() {
            assert_eq!(max_denom(PI, method, 1000), r(355, 113));
            assert_eq!(places(PI, method, 10), r(312689, 99532));
            assert_eq!(max_denom(E, method, 1000), r(1457, 536));
            assert_eq!(places(-PI, method, 3), r(-267, 85));
            assert_eq!(places(123456.789, method, 2), r(1728395, 14));
        }
    }

    #[test]
    fn negative_places_test() {
        for &method in METHODS.iter() {
            assert_eq!(places(2f64.sqrt() - 1., method, -1), r(0, 1));
            assert_eq!(places(37.3, method, -1), r(37, 1));
            assert_eq!(places(1.5, method, 0), r(3, 2));
        }
    }

    #[test]
    fn methods_agreement_test() {
        let mut xs: Vec<f64> = (2..60).map(|k| (k as f64).sqrt()).collect();
        xs.extend((-40..=40).map(|k| k as f64 / 7.3));
        xs.extend([PI, E, -PI, 1e-9, 0.0009, 0.4, 0.5, 123456.789].iter().cloned());

        for &x in xs.iter() {
            for &p in [0, 1, 3, 7, 10].iter() {
                let farey = places(x, Method::Farey, p);
                let cf = places(x, Method::ContinuedFraction, p);
                assert_eq!(farey, cf, "x = {}, places = {}", x, p);
                assert!(farey.is_reduced());
                assert!(within(&Rational::from_f64(x).unwrap(), &farey, &tolerance(p)));
            }
            for &b in [1u64, 2, 7, 100, 1000, 4096].iter() {
                let farey = max_denom(x, Method::Farey, b);
                let cf = max_denom(x, Method::ContinuedFraction, b);
                assert_eq!(farey, cf, "x = {}, max_denominator = {}", x, b);
                assert!(farey.denom() <= &BigInt::from(b));
            }
        }
    }

    #[test]
    fn helpers_test() {
        assert_eq!(tolerance(0), r(1, 2));
        assert_eq!(tolerance(3), r(1, 2000));
        assert_eq!(tolerance(-2), r(100, 2));

        let x = r(1, 3);
        assert!(within(&x, &r(33, 100), &tolerance(2)));
        assert!(!within(&x, &r(33, 100), &tolerance(3)));
        assert_eq!(closest(&x, r(1, 4), r(1, 2)), r(1, 4));
        assert_eq!(closest(&r(1, 2), r(2, 5), r(3, 5)), r(2, 5));
        assert_eq!(closest(&r(1, 2), r(3, 7), r(4, 7)), r(3, 7));
        assert_eq!(closest(&r(3, 8), r(1, 2), r(1, 4)), r(1, 2));
    }
}
