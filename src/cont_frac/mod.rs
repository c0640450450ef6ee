//! Data structures and algorithms implementations related to
//! finite simple continued fractions
//!
//! [ContinuedFraction][ContinuedFraction] represents a simple continued fraction with limited length.
//! Every rational number can be expanded into one, and its convergents are the
//! candidates searched by the continued fraction approximation.
//!
//! # References:
//! - <https://pi.math.cornell.edu/~gautam/ContinuedFractions.pdf>
//! - <https://crypto.stanford.edu/pbc/notes/contfrac/>
//! - <http://www.numbertheory.org/continued_fractions.html>

mod block;
mod simple;

pub use simple::*;

pub(crate) use block::Block;
