//! Generic quadratic extension fields.

use crate::macros::impl_field_op_variants;
use crate::FieldElement;
use core::fmt::Debug;
use core::ops::{Add, Mul, Neg, Sub};
use rand_core::CryptoRngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::DefaultIsZeroes;

/// Parameters of a quadratic extension `F[u] / (u² - NON_RESIDUE)`.
///
/// `NON_RESIDUE` must be a quadratic non-residue in the base field, otherwise
/// the construction is not a field.
pub trait QuadExtensionParams: Copy + Clone + Debug + Eq + 'static {
    /// Field being extended.
    type Base: FieldElement;

    /// The constant `β` such that `u² = β`.
    const NON_RESIDUE: Self::Base;
}

/// Element `c0 + c1·u` of a quadratic extension field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct QuadExtension<P: QuadExtensionParams> {
    c0: P::Base,
    c1: P::Base,
}

impl<P: QuadExtensionParams> QuadExtension<P> {
    /// Additive identity.
    pub const ZERO: Self = Self::new(P::Base::ZERO, P::Base::ZERO);

    /// Multiplicative identity.
    pub const ONE: Self = Self::new(P::Base::ONE, P::Base::ZERO);

    /// Build an extension element from its coefficients over the base field.
    pub const fn new(c0: P::Base, c1: P::Base) -> Self {
        Self { c0, c1 }
    }

    /// Coefficient of `1`.
    pub fn c0(&self) -> P::Base {
        self.c0
    }

    /// Coefficient of `u`.
    pub fn c1(&self) -> P::Base {
        self.c1
    }

    /// Multiply by an element of the base field.
    pub fn mul_by_base(&self, k: P::Base) -> Self {
        Self::new(self.c0 * k, self.c1 * k)
    }

    /// Multiply by the adjoined root `u`.
    ///
    /// Since `u² = β`, this is the coefficient shift
    /// `(c0 + c1·u)·u = β·c1 + c0·u`.
    pub fn mul_by_nonresidue(&self) -> Self {
        Self::new(self.c1 * P::NON_RESIDUE, self.c0)
    }
}

impl<P: QuadExtensionParams> FieldElement for QuadExtension<P> {
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;

    fn square(&self) -> Self {
        // (c0 + c1·u)² with one base multiplication saved:
        //   c0' = (c0 + c1)(c0 + β·c1) - c0·c1 - β·c0·c1
        //   c1' = 2·c0·c1
        let v0 = self.c0 * self.c1;
        let c0 = (self.c0 + self.c1) * (self.c0 + P::NON_RESIDUE * self.c1)
            - v0
            - P::NON_RESIDUE * v0;
        Self::new(c0, v0.double())
    }

    fn invert(&self) -> CtOption<Self> {
        // (c0 + c1·u)⁻¹ = (c0 - c1·u) / (c0² - β·c1²); the norm is zero iff
        // the element is zero since β is a non-residue.
        let norm = self.c0.square() - P::NON_RESIDUE * self.c1.square();
        norm.invert()
            .map(|t| Self::new(self.c0 * t, -(self.c1 * t)))
    }

    fn random(rng: &mut impl CryptoRngCore) -> Self {
        Self::new(P::Base::random(rng), P::Base::random(rng))
    }
}

impl<P: QuadExtensionParams> Default for QuadExtension<P> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<P: QuadExtensionParams> DefaultIsZeroes for QuadExtension<P> {}

impl<P: QuadExtensionParams> From<u64> for QuadExtension<P> {
    fn from(n: u64) -> Self {
        Self::new(P::Base::from(n), P::Base::ZERO)
    }
}

impl<P: QuadExtensionParams> ConditionallySelectable for QuadExtension<P> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::new(
            P::Base::conditional_select(&a.c0, &b.c0, choice),
            P::Base::conditional_select(&a.c1, &b.c1, choice),
        )
    }
}

impl<P: QuadExtensionParams> ConstantTimeEq for QuadExtension<P> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl<P: QuadExtensionParams> Add for QuadExtension<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.c0 + rhs.c0, self.c1 + rhs.c1)
    }
}

impl<P: QuadExtensionParams> Sub for QuadExtension<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.c0 - rhs.c0, self.c1 - rhs.c1)
    }
}

impl<P: QuadExtensionParams> Mul for QuadExtension<P> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        // Karatsuba: u² reduces to β.
        let v0 = self.c0 * rhs.c0;
        let v1 = self.c1 * rhs.c1;
        let c0 = v0 + P::NON_RESIDUE * v1;
        let c1 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - v0 - v1;
        Self::new(c0, c1)
    }
}

impl<P: QuadExtensionParams> Neg for QuadExtension<P> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.c0, -self.c1)
    }
}

impl_field_op_variants!((P: QuadExtensionParams), QuadExtension<P>);
