//! Operand-polymorphic arithmetic on [Rational]
//!
//! The std operators on [Rational] pick the result type statically: an integer operand
//! yields a fraction and a float operand yields a float. This module provides the same
//! operations for an operand whose kind is only known at runtime.

use super::fraction::Rational;
use crate::error::{Error, Result};
use core::cmp::Ordering;
use core::convert::TryFrom;
use core::str::FromStr;
use num_bigint::BigInt;
use std::fmt;

/// A value that a [Rational] can be combined with
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Rational(Rational),
    Integer(BigInt),
    Real(f64),
}

// describe an invalid real number in error messages
pub(crate) fn describe_real(x: f64) -> String {
    if x.is_nan() {
        "NaN".to_string()
    } else {
        format!("non-finite float {}", x)
    }
}

impl Operand {
    /// Evaluate the operand as a float
    pub fn to_f64(&self) -> f64 {
        match self {
            Operand::Rational(r) => r.to_f64(),
            Operand::Integer(i) => Rational::from_integer(i.clone()).to_f64(),
            Operand::Real(x) => *x,
        }
    }
}

impl From<Rational> for Operand {
    #[inline]
    fn from(r: Rational) -> Self {
        Operand::Rational(r)
    }
}

impl<'a> From<&'a Rational> for Operand {
    #[inline]
    fn from(r: &'a Rational) -> Self {
        Operand::Rational(r.clone())
    }
}

impl From<f64> for Operand {
    #[inline]
    fn from(x: f64) -> Self {
        Operand::Real(x)
    }
}

impl From<f32> for Operand {
    #[inline]
    fn from(x: f32) -> Self {
        Operand::Real(x as f64)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {$(
        impl From<$t> for Operand {
            #[inline]
            fn from(t: $t) -> Self {
                Operand::Integer(BigInt::from(t))
            }
        }
    )*};
}
impl_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64, BigInt);

impl FromStr for Operand {
    type Err = Error;

    /// Parse an integer (`"3"`), a fraction (`"2/3"`) or a finite float (`"0.25"`, `"1e-3"`)
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::OperandType(format!("str {:?}", s));
        let t = s.trim();

        if let Some(pos) = t.find('/') {
            let numer: BigInt = t[..pos].trim().parse().map_err(|_| invalid())?;
            let denom: BigInt = t[pos + 1..].trim().parse().map_err(|_| invalid())?;
            return Rational::new(numer, denom).map(Operand::Rational);
        }
        if let Ok(i) = t.parse::<BigInt>() {
            return Ok(Operand::Integer(i));
        }
        match t.parse::<f64>() {
            Ok(x) if x.is_finite() => Ok(Operand::Real(x)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Rational(r) => write!(f, "{}", r),
            Operand::Integer(i) => write!(f, "{}", i),
            Operand::Real(x) => write!(f, "{}", x),
        }
    }
}

impl Rational {
    /// `self + rhs`, a fraction for rational and integer operands, a float otherwise
    pub fn add_operand<O: Into<Operand>>(&self, rhs: O) -> Result<Operand> {
        let rhs: Operand = rhs.into();
        Ok(match &rhs {
            Operand::Rational(r) => Operand::Rational(self + r),
            Operand::Integer(i) => Operand::Rational(self.clone() + i.clone()),
            Operand::Real(x) => Operand::Real(self + *x),
        })
    }

    /// `self - rhs`, a fraction for rational and integer operands, a float otherwise
    pub fn sub_operand<O: Into<Operand>>(&self, rhs: O) -> Result<Operand> {
        let rhs: Operand = rhs.into();
        Ok(match &rhs {
            Operand::Rational(r) => Operand::Rational(self - r),
            Operand::Integer(i) => Operand::Rational(self.clone() - i.clone()),
            Operand::Real(x) => Operand::Real(self - *x),
        })
    }

    /// `self * rhs`, a fraction for rational and integer operands, a float otherwise
    pub fn mul_operand<O: Into<Operand>>(&self, rhs: O) -> Result<Operand> {
        let rhs: Operand = rhs.into();
        Ok(match &rhs {
            Operand::Rational(r) => Operand::Rational(self * r),
            Operand::Integer(i) => Operand::Rational(self.clone() * i.clone()),
            Operand::Real(x) => Operand::Real(self * *x),
        })
    }

    /// `self / rhs`. Dividing by a zero fraction or a zero integer fails, while
    /// dividing by a float follows the float semantics.
    pub fn div_operand<O: Into<Operand>>(&self, rhs: O) -> Result<Operand> {
        let rhs: Operand = rhs.into();
        Ok(match &rhs {
            Operand::Rational(r) => Operand::Rational(self.checked_div(r)?),
            Operand::Integer(i) => {
                Operand::Rational(self.checked_div(&Rational::from_integer(i.clone()))?)
            }
            Operand::Real(x) => Operand::Real(self / *x),
        })
    }

    /// `self ^ rhs`. Only an integer exponent keeps the result exact, any other
    /// exponent goes through floating point exponentiation.
    pub fn pow_operand<O: Into<Operand>>(&self, rhs: O) -> Result<Operand> {
        let rhs: Operand = rhs.into();
        Ok(match &rhs {
            Operand::Integer(i) => match i32::try_from(i) {
                Ok(p) => Operand::Rational(self.pow(p)?),
                Err(_) => Operand::Real(self.powf(rhs.to_f64())),
            },
            other => Operand::Real(self.powf(other.to_f64())),
        })
    }

    /// Compare the value of the fraction with the operand exactly. A finite float is
    /// compared by its exact binary value, and an infinity by its sign.
    ///
    /// # Errors
    /// [Error::OperandType] if the operand is NaN.
    pub fn partial_cmp_operand<O: Into<Operand>>(&self, rhs: O) -> Result<Ordering> {
        let rhs: Operand = rhs.into();
        Ok(match &rhs {
            Operand::Rational(r) => self.value_cmp(r),
            Operand::Integer(i) => self.cmp_integer(i),
            Operand::Real(x) if x.is_nan() => return Err(Error::OperandType(describe_real(*x))),
            Operand::Real(x) if x.is_infinite() => {
                if x.is_sign_positive() {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
            Operand::Real(x) => self.value_cmp(&Rational::from_f64(*x)?),
        })
    }

    /// Whether the value of the fraction is less than the operand
    #[inline]
    pub fn lt<O: Into<Operand>>(&self, rhs: O) -> Result<bool> {
        self.partial_cmp_operand(rhs).map(|o| o == Ordering::Less)
    }

    /// Whether the value of the fraction is greater than the operand
    #[inline]
    pub fn gt<O: Into<Operand>>(&self, rhs: O) -> Result<bool> {
        self.partial_cmp_operand(rhs).map(|o| o == Ordering::Greater)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    fn r(n: i64, d: i64) -> Rational {
        Rational::new(n, d).unwrap()
    }

    #[test]
    fn parse_test() {
        assert_eq!("3".parse::<Operand>(), Ok(Operand::Integer(BigInt::from(3))));
        assert_eq!(" -2/3 ".parse::<Operand>(), Ok(Operand::Rational(r(-2, 3))));
        assert_eq!("0.25".parse::<Operand>(), Ok(Operand::Real(0.25)));
        assert_eq!("1e-3".parse::<Operand>(), Ok(Operand::Real(1e-3)));
        assert!(matches!("1/0".parse::<Operand>(), Err(Error::Construction(_))));

        let err = "a".parse::<Operand>().unwrap_err();
        assert!(matches!(err, Error::OperandType(_)));
        assert!(err.to_string().starts_with("must be int, float or Rational, not str"));
        assert!(matches!("nan".parse::<Operand>(), Err(Error::OperandType(_))));
        assert!(matches!("1/x".parse::<Operand>(), Err(Error::OperandType(_))));
    }

    #[test]
    fn fmt_test() {
        assert_eq!(format!("{}", Operand::Integer(BigInt::from(-3))), "-3");
        assert_eq!(format!("{}", Operand::from(r(2, 4))), "2/4");
        assert_eq!(format!("{}", Operand::Real(0.25)), "0.25");
        assert_eq!(format!("{}", Operand::Real(f64::INFINITY)), "inf");

        // parsing the display of an exact operand gives it back
        for s in ["7", "-2/3", "1.5"].iter() {
            assert_eq!(s.parse::<Operand>().unwrap().to_string(), *s);
        }
    }

    #[test]
    fn arithmetic_test() {
        let x = r(1, 2);
        assert_eq!(x.add_operand(r(3, 5)), Ok(Operand::Rational(r(11, 10))));
        assert_eq!(x.add_operand(1), Ok(Operand::Rational(r(3, 2))));
        assert_eq!(x.add_operand(0.1), Ok(Operand::Real(0.6)));
        assert_eq!(x.sub_operand(r(3, 5)), Ok(Operand::Rational(r(-1, 10))));
        assert_eq!(x.mul_operand(4), Ok(Operand::Rational(r(4, 2))));
        assert_eq!(x.mul_operand(3.2), Ok(Operand::Real(1.6)));
        assert_eq!(x.div_operand(-2), Ok(Operand::Rational(r(-1, 4))));
        assert_eq!(x.div_operand(0), Err(Error::DivisionByZero));
        assert_eq!(x.div_operand(Rational::zero()), Err(Error::DivisionByZero));
        assert_eq!(x.div_operand(0.25), Ok(Operand::Real(2.0)));
        assert_eq!(r(2, 3).pow_operand(-3), Ok(Operand::Rational(r(27, 8))));
        assert_eq!(r(1, 4).pow_operand(0.5), Ok(Operand::Real(0.5)));
        assert_eq!(r(1, 4).pow_operand(r(1, 2)), Ok(Operand::Real(0.5)));


        // any float follows the float semantics, as the operators do
        assert_eq!(x.add_operand(f64::INFINITY), Ok(Operand::Real(x.clone() + f64::INFINITY)));
        assert_eq!(x.add_operand(f64::INFINITY), Ok(Operand::Real(f64::INFINITY)));
        assert_eq!(x.sub_operand(f64::INFINITY), Ok(Operand::Real(f64::NEG_INFINITY)));
        assert_eq!(x.mul_operand(f64::NEG_INFINITY), Ok(Operand::Real(f64::NEG_INFINITY)));
        assert_eq!(x.div_operand(f64::INFINITY), Ok(Operand::Real(0.0)));
        assert_eq!(x.div_operand(0.0), Ok(Operand::Real(f64::INFINITY)));
        assert_eq!(r(1, 4).pow_operand(f64::INFINITY), Ok(Operand::Real(0.0)));
        assert!(matches!(x.add_operand(f64::NAN), Ok(Operand::Real(v)) if v.is_nan()));
        assert!(matches!(x.mul_operand(f64::NAN), Ok(Operand::Real(v)) if v.is_nan()));
    }

    #[test]
    fn comparison_test() {
        let x = r(1, 2);
        let y = r(2, 3);
        assert_eq!(x.lt(&y), Ok(true));
        assert_eq!(y.gt(&x), Ok(true));
        assert_eq!(x.gt(0), Ok(true));
        assert_eq!(x.lt(1), Ok(true));
        assert_eq!(x.lt(0.5), Ok(false));
        assert_eq!(x.gt(0.5), Ok(false));
        assert_eq!(r(-1, 2).lt(0.0), Ok(true));
        assert_eq!(x.partial_cmp_operand(r(2, 4)), Ok(Ordering::Equal));

        // 0.1 as a float is slightly greater than 1/10
        assert_eq!(r(1, 10).lt(0.1), Ok(true));

        assert_eq!(x.lt(f64::INFINITY), Ok(true));
        assert_eq!(x.gt(f64::INFINITY), Ok(false));
        assert_eq!(r(-1000, 1).gt(f64::NEG_INFINITY), Ok(true));
        assert_eq!(x.partial_cmp_operand(f64::NEG_INFINITY), Ok(Ordering::Greater));

        assert!(matches!(x.lt(f64::NAN), Err(Error::OperandType(_))));
        assert!(matches!(x.gt(f64::NAN), Err(Error::OperandType(_))));
    }
}
