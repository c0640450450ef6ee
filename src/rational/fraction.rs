//! Implementation of exact fractions

use crate::error::{Error, Result};
use core::cmp::Ordering;
use core::ops::{Add, Div, Mul, Neg, Sub};
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{One, Pow, Signed, ToPrimitive, Zero};
use std::fmt;

/// A fraction `numer / denom` of two arbitrary precision integers.
///
/// The denominator is positive. Arithmetic never cancels common factors, so the result
/// of `1/2 + 1/2` is `4/4`, and [Eq] is structural: `1/2 != 2/4`. Use
/// [reduced_form][Rational::reduced_form] to get the canonical representation and
/// [value_cmp][Rational::value_cmp] to compare by value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt, // always positive
}

impl Rational {
    #[inline]
    pub(crate) fn new_raw(numer: BigInt, denom: BigInt) -> Self {
        debug_assert!(denom.is_positive());
        Rational { numer, denom }
    }

    /// Create a fraction `numer / denom`.
    ///
    /// # Errors
    /// [Error::Construction] if `denom` is zero or negative.
    pub fn new<N: Into<BigInt>, D: Into<BigInt>>(numer: N, denom: D) -> Result<Self> {
        let denom = denom.into();
        if !denom.is_positive() {
            return Err(Error::Construction(format!(
                "denominator must be positive, got {}",
                denom
            )));
        }
        Ok(Rational::new_raw(numer.into(), denom))
    }

    /// Create the fraction `n / 1`
    #[inline]
    pub fn from_integer<N: Into<BigInt>>(n: N) -> Self {
        Rational::new_raw(n.into(), BigInt::one())
    }

    /// Create the fraction with exactly the value of a float. The result is reduced,
    /// and its denominator is a power of two.
    ///
    /// Note that `0.1` is not `1/10`, but the binary fraction closest to it.
    pub fn from_f64(x: f64) -> Result<Self> {
        Ratio::<BigInt>::from_float(x)
            .map(Rational::from)
            .ok_or_else(|| Error::OperandType(super::operand::describe_real(x)))
    }

    #[inline]
    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    #[inline]
    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.numer.is_negative()
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// Determine if numerator and denominator are coprime
    #[inline]
    pub fn is_reduced(&self) -> bool {
        self.numer.gcd(&self.denom).is_one()
    }

    /// Divide numerator and denominator by their greatest common divisor.
    /// Zero is always reduced to `0/1`.
    pub fn reduced_form(&self) -> Self {
        let g = self.numer.gcd(&self.denom);
        Rational::new_raw(&self.numer / &g, &self.denom / g)
    }

    #[inline]
    pub fn abs(&self) -> Self {
        Rational::new_raw(self.numer.abs(), self.denom.clone())
    }

    /// Returns `1 / self`, keeping the denominator positive
    pub fn inverse(&self) -> Result<Self> {
        if self.numer.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(self.inverse_nonzero())
    }

    // caller makes sure the numerator is not zero
    #[inline]
    pub(crate) fn inverse_nonzero(&self) -> Self {
        debug_assert!(!self.numer.is_zero());
        if self.numer.is_negative() {
            Rational::new_raw(-&self.denom, -&self.numer)
        } else {
            Rational::new_raw(self.denom.clone(), self.numer.clone())
        }
    }

    /// Largest integer not greater than the fraction
    #[inline]
    pub fn floor(&self) -> BigInt {
        self.numer.div_floor(&self.denom)
    }

    /// Smallest integer not less than the fraction
    pub fn ceil(&self) -> BigInt {
        let (q, r) = self.numer.div_mod_floor(&self.denom);
        if r.is_zero() {
            q
        } else {
            q + 1
        }
    }

    /// Raise numerator and denominator to `power` independently, the result is inverted
    /// if `power` is negative. Any fraction to the zeroth power is `1/1`, including zero.
    pub fn pow(&self, power: i32) -> Result<Self> {
        if power == 0 {
            return Ok(Rational::one());
        }

        let e = power.unsigned_abs();
        let result = Rational::new_raw(
            Pow::pow(&self.numer, e),
            Pow::pow(&self.denom, e),
        );
        if power < 0 {
            result.inverse()
        } else {
            Ok(result)
        }
    }

    /// Raise the fraction to a real power through floating point exponentiation
    #[inline]
    pub fn powf(&self, power: f64) -> f64 {
        self.to_f64().powf(power)
    }

    /// Evaluate the fraction as a float. Huge numerators or denominators are handled
    /// without overflowing the intermediate values.
    pub fn to_f64(&self) -> f64 {
        Ratio::new_raw(self.numer.clone(), self.denom.clone())
            .to_f64()
            .unwrap_or(f64::NAN)
    }

    /// Divide by another fraction. A negative divisor negates both operands first,
    /// so that the denominator of the result stays positive.
    pub fn checked_div(&self, rhs: &Rational) -> Result<Self> {
        if rhs.numer.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let numer = &self.numer * &rhs.denom;
        let denom = &self.denom * &rhs.numer;
        if denom.is_negative() {
            Ok(Rational::new_raw(-numer, -denom))
        } else {
            Ok(Rational::new_raw(numer, denom))
        }
    }

    /// Compare the values of two fractions by cross multiplication
    #[inline]
    pub fn value_cmp(&self, other: &Rational) -> Ordering {
        (&self.numer * &other.denom).cmp(&(&other.numer * &self.denom))
    }

    /// Determine if two fractions have the same value, regardless of the representation
    #[inline]
    pub fn value_eq(&self, other: &Rational) -> bool {
        self.value_cmp(other) == Ordering::Equal
    }

    #[inline]
    pub(crate) fn cmp_integer(&self, other: &BigInt) -> Ordering {
        self.numer.cmp(&(other * &self.denom))
    }
}

impl From<Rational> for (BigInt, BigInt) {
    #[inline]
    fn from(r: Rational) -> Self {
        (r.numer, r.denom)
    }
}

impl From<Ratio<BigInt>> for Rational {
    /// The ratio is reduced already, so is the fraction
    #[inline]
    fn from(r: Ratio<BigInt>) -> Self {
        let (numer, denom) = r.into();
        Rational::new_raw(numer, denom)
    }
}

impl From<Rational> for Ratio<BigInt> {
    /// Note that the ratio will be reduced
    #[inline]
    fn from(r: Rational) -> Self {
        Ratio::new(r.numer, r.denom)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {$(
        impl From<$t> for Rational {
            #[inline]
            fn from(t: $t) -> Self {
                Rational::from_integer(t)
            }
        }
    )*};
}
impl_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64, BigInt);

impl Zero for Rational {
    #[inline]
    fn zero() -> Self {
        Rational::new_raw(BigInt::zero(), BigInt::one())
    }

    /// Any fraction with zero numerator, reduced or not
    #[inline]
    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl One for Rational {
    #[inline]
    fn one() -> Self {
        Rational::new_raw(BigInt::one(), BigInt::one())
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}

impl Neg for Rational {
    type Output = Rational;

    #[inline]
    fn neg(self) -> Rational {
        Rational::new_raw(-self.numer, self.denom)
    }
}

impl<'a> Neg for &'a Rational {
    type Output = Rational;

    #[inline]
    fn neg(self) -> Rational {
        Rational::new_raw(-&self.numer, self.denom.clone())
    }
}

// The operations between two fractions, implemented on references and forwarded for owned values
fn add_ref(lhs: &Rational, rhs: &Rational) -> Rational {
    Rational::new_raw(
        &lhs.numer * &rhs.denom + &lhs.denom * &rhs.numer,
        &lhs.denom * &rhs.denom,
    )
}

fn sub_ref(lhs: &Rational, rhs: &Rational) -> Rational {
    Rational::new_raw(
        &lhs.numer * &rhs.denom - &lhs.denom * &rhs.numer,
        &lhs.denom * &rhs.denom,
    )
}

fn mul_ref(lhs: &Rational, rhs: &Rational) -> Rational {
    Rational::new_raw(&lhs.numer * &rhs.numer, &lhs.denom * &rhs.denom)
}

fn div_ref(lhs: &Rational, rhs: &Rational) -> Rational {
    match lhs.checked_div(rhs) {
        Ok(v) => v,
        Err(_) => panic!("division by zero"),
    }
}

macro_rules! forward_binop {
    (impl $imp:ident, $method:ident, $func:ident) => {
        impl $imp<Rational> for Rational {
            type Output = Rational;
            #[inline]
            fn $method(self, rhs: Rational) -> Rational {
                $func(&self, &rhs)
            }
        }

        impl<'a> $imp<&'a Rational> for Rational {
            type Output = Rational;
            #[inline]
            fn $method(self, rhs: &'a Rational) -> Rational {
                $func(&self, rhs)
            }
        }

        impl<'a> $imp<Rational> for &'a Rational {
            type Output = Rational;
            #[inline]
            fn $method(self, rhs: Rational) -> Rational {
                $func(self, &rhs)
            }
        }

        impl<'a, 'b> $imp<&'b Rational> for &'a Rational {
            type Output = Rational;
            #[inline]
            fn $method(self, rhs: &'b Rational) -> Rational {
                $func(self, rhs)
            }
        }
    };
}

forward_binop!(impl Add, add, add_ref);
forward_binop!(impl Sub, sub, sub_ref);
forward_binop!(impl Mul, mul, mul_ref);
// # Panics
// if the divisor is zero, see Rational::checked_div for the fallible version
forward_binop!(impl Div, div, div_ref);

// Integer operands keep the denominator of the fraction: a/b `op` c = (a `op` b*c) / b
macro_rules! impl_integer_ops {
    ($($t:ty),*) => {$(
        impl Add<$t> for Rational {
            type Output = Rational;
            #[inline]
            fn add(self, rhs: $t) -> Rational {
                let rhs = BigInt::from(rhs);
                Rational::new_raw(self.numer + rhs * &self.denom, self.denom)
            }
        }

        impl Sub<$t> for Rational {
            type Output = Rational;
            #[inline]
            fn sub(self, rhs: $t) -> Rational {
                let rhs = BigInt::from(rhs);
                Rational::new_raw(self.numer - rhs * &self.denom, self.denom)
            }
        }

        impl Mul<$t> for Rational {
            type Output = Rational;
            #[inline]
            fn mul(self, rhs: $t) -> Rational {
                Rational::new_raw(self.numer * BigInt::from(rhs), self.denom)
            }
        }

        impl Div<$t> for Rational {
            type Output = Rational;
            #[inline]
            fn div(self, rhs: $t) -> Rational {
                div_ref(&self, &Rational::from_integer(rhs))
            }
        }

        impl Add<Rational> for $t {
            type Output = Rational;
            #[inline]
            fn add(self, rhs: Rational) -> Rational {
                rhs + self
            }
        }

        impl Sub<Rational> for $t {
            type Output = Rational;
            #[inline]
            fn sub(self, rhs: Rational) -> Rational {
                -rhs + self
            }
        }

        impl Mul<Rational> for $t {
            type Output = Rational;
            #[inline]
            fn mul(self, rhs: Rational) -> Rational {
                rhs * self
            }
        }
    )*};
}
impl_integer_ops!(i32, i64, u32, u64, BigInt);

// Real operands promote the fraction to a float
macro_rules! impl_real_ops {
    ($(impl $imp:ident, $method:ident);*) => {$(
        impl $imp<f64> for Rational {
            type Output = f64;
            #[inline]
            fn $method(self, rhs: f64) -> f64 {
                self.to_f64().$method(rhs)
            }
        }

        impl<'a> $imp<f64> for &'a Rational {
            type Output = f64;
            #[inline]
            fn $method(self, rhs: f64) -> f64 {
                self.to_f64().$method(rhs)
            }
        }

        impl $imp<Rational> for f64 {
            type Output = f64;
            #[inline]
            fn $method(self, rhs: Rational) -> f64 {
                self.$method(rhs.to_f64())
            }
        }
    )*};
}
impl_real_ops!(impl Add, add; impl Sub, sub; impl Mul, mul; impl Div, div);
