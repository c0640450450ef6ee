//! Best rational approximation of real numbers, by Farey mediant bisection
//! or by continued fraction reduction.
//!
//! ```
//! use num_farey::{find_rational_approximation, Options, Rational};
//!
//! let pi = std::f64::consts::PI;
//! let r = find_rational_approximation(pi, "farey", Options::default().with_max_denominator(1000)).unwrap();
//! assert_eq!(r, Rational::new(355, 113).unwrap());
//! ```

mod approx;
mod cont_frac;
mod error;
mod rational;
pub mod traits;

pub use approx::{best_rational_approximation, find_rational_approximation, mediant, Method, Options, Policy};
pub use cont_frac::{convergent, ContinuedFraction, Convergents};
pub use error::{Error, Result};
pub use rational::{Operand, Rational};
pub use traits::{Approximation, RationalApproximation};
