use std::mem::swap;
use num_traits::{One, Zero, NumRef, RefNum};
use num_integer::Integer;

/// A block on the magic table for computing the convergents of a simple continued fraction
/// The method is described in <https://crypto.stanford.edu/pbc/notes/contfrac/compute.html>
#[derive(Debug, Clone)]
pub struct Block<T> {
    pm1: T, // p_(k-1)
    pm2: T, // p_(k-2)
    qm1: T, // q_(k-1)
    qm2: T, // q_(k-2)
}

impl<T> Block<T> {
    /// push the latest convergent to the block
    pub fn update(&mut self, p: T, q: T) {
        swap(&mut self.pm2, &mut self.pm1); // self.pm2 = self.pm1
        swap(&mut self.qm2, &mut self.qm1); // self.qm2 = self.qm1
        self.pm1 = p; self.qm1 = q;
    }

    /// the latest convergent (p_(k-1), q_(k-1))
    #[inline]
    pub fn last(&self) -> (&T, &T) {
        (&self.pm1, &self.qm1)
    }

    /// the convergent before the latest one (p_(k-2), q_(k-2))
    #[inline]
    pub fn second_last(&self) -> (&T, &T) {
        (&self.pm2, &self.qm2)
    }
}

impl<T: Zero + One> Block<T> {
    /// create a block that represents a identity operation
    pub fn identity() -> Self {
        Block { pm1: T::one(), pm2: T::zero(), qm1: T::zero(), qm2: T::one() }
    }
}

impl<T: Integer + NumRef + Clone> Block<T> where for <'r> &'r T: RefNum<T> {
    /// move with an coefficient from regular continued fraction
    pub fn rmove(&self, a: &T) -> (T, T) {
        let p = a * &self.pm1 + &self.pm2;
        let q = a * &self.qm1 + &self.qm2;
        (p, q)
    }

    /// move with an coefficient and push the resulting convergent to the block
    pub fn advance(&mut self, a: &T) -> (T, T) {
        let (p, q) = self.rmove(a);
        self.update(p.clone(), q.clone());
        (p, q)
    }
}
