#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

mod cubic;
mod error;
mod fp;
mod macros;
mod quadratic;

pub use crate::cubic::{CubicExtension, CubicExtensionParams};
pub use crate::error::{Error, Result};
pub use crate::fp::Fp;
pub use crate::quadratic::{QuadExtension, QuadExtensionParams};
pub use bigint;
pub use rand_core;
pub use subtle;
pub use zeroize;

use core::fmt::Debug;
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use rand_core::CryptoRngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// Element of a finite field: a prime field or any extension built on top of
/// one with [`QuadExtension`] / [`CubicExtension`].
///
/// All arithmetic is total. Division is exposed through [`FieldElement::invert`]
/// (constant-time flavor) and [`FieldElement::inverse`] (fallible flavor);
/// neither silently maps zero anywhere.
pub trait FieldElement:
    Copy
    + Clone
    + Debug
    + Default
    + Eq
    + From<u64>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + Sum
    + Product
    + ConditionallySelectable
    + ConstantTimeEq
    + 'static
{
    /// Additive identity.
    const ZERO: Self;

    /// Multiplicative identity.
    const ONE: Self;

    /// Compute `self^2`.
    fn square(&self) -> Self;

    /// Compute `self + self`.
    fn double(&self) -> Self {
        *self + *self
    }

    /// Compute the multiplicative inverse, i.e. `self^-1`.
    ///
    /// Returns the `CtOption` equivalent of `None` if `self` is zero.
    fn invert(&self) -> CtOption<Self>;

    /// Fallible multiplicative inverse, returning [`Error::DivisionByZero`]
    /// for the zero element.
    fn inverse(&self) -> Result<Self> {
        Option::<Self>::from(self.invert()).ok_or(Error::DivisionByZero)
    }

    /// Is this element the additive identity?
    fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Compute `self^exp`, where `exp` is given as little-endian 64-bit limbs.
    ///
    /// Runs in variable time with respect to the exponent.
    fn pow_vartime(&self, exp: &[u64]) -> Self {
        let mut res = Self::ONE;
        for limb in exp.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                if (limb >> i) & 1 == 1 {
                    res *= *self;
                }
            }
        }
        res
    }

    /// Sample a uniformly random field element.
    fn random(rng: &mut impl CryptoRngCore) -> Self;
}

/// Element of a prime field `GF(p)`, i.e. the bottom of a tower.
///
/// Extends [`FieldElement`] with access to the canonical integer
/// representative, which is what scalar multiplication loops over.
pub trait PrimeFieldElement: FieldElement {
    /// Upper bound on the bit length of the canonical representative.
    const NUM_BITS: u32;

    /// Returns the `index`-th bit of the canonical representative of `self`,
    /// with bit 0 being the least significant.
    ///
    /// Runs in variable time with respect to `index` and `self`.
    fn bit_vartime(&self, index: u32) -> bool;
}
