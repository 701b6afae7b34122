//! Generic cubic extension fields.

use crate::macros::impl_field_op_variants;
use crate::FieldElement;
use core::fmt::Debug;
use core::ops::{Add, Mul, Neg, Sub};
use rand_core::CryptoRngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::DefaultIsZeroes;

/// Parameters of a cubic extension `F[v] / (v³ - NON_RESIDUE)`.
///
/// `NON_RESIDUE` must be a cubic non-residue in the base field, otherwise the
/// construction is not a field.
pub trait CubicExtensionParams: Copy + Clone + Debug + Eq + 'static {
    /// Field being extended.
    type Base: FieldElement;

    /// The constant `β` such that `v³ = β`.
    const NON_RESIDUE: Self::Base;
}

/// Element `c0 + c1·v + c2·v²` of a cubic extension field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CubicExtension<P: CubicExtensionParams> {
    c0: P::Base,
    c1: P::Base,
    c2: P::Base,
}

impl<P: CubicExtensionParams> CubicExtension<P> {
    /// Additive identity.
    pub const ZERO: Self = Self::new(P::Base::ZERO, P::Base::ZERO, P::Base::ZERO);

    /// Multiplicative identity.
    pub const ONE: Self = Self::new(P::Base::ONE, P::Base::ZERO, P::Base::ZERO);

    /// Build an extension element from its coefficients over the base field.
    pub const fn new(c0: P::Base, c1: P::Base, c2: P::Base) -> Self {
        Self { c0, c1, c2 }
    }

    /// Coefficient of `1`.
    pub fn c0(&self) -> P::Base {
        self.c0
    }

    /// Coefficient of `v`.
    pub fn c1(&self) -> P::Base {
        self.c1
    }

    /// Coefficient of `v²`.
    pub fn c2(&self) -> P::Base {
        self.c2
    }

    /// Multiply by an element of the base field.
    pub fn mul_by_base(&self, k: P::Base) -> Self {
        Self::new(self.c0 * k, self.c1 * k, self.c2 * k)
    }

    /// Multiply by the adjoined root `v`.
    ///
    /// Since `v³ = β`, this is the coefficient shift
    /// `(c0 + c1·v + c2·v²)·v = β·c2 + c0·v + c1·v²`.
    pub fn mul_by_nonresidue(&self) -> Self {
        Self::new(self.c2 * P::NON_RESIDUE, self.c0, self.c1)
    }
}

impl<P: CubicExtensionParams> FieldElement for CubicExtension<P> {
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;

    fn square(&self) -> Self {
        *self * *self
    }

    fn invert(&self) -> CtOption<Self> {
        // Adjugate-based inversion: with
        //   A = c0² - β·c1·c2, B = β·c2² - c0·c1, C = c1² - c0·c2
        // the product (c0 + c1·v + c2·v²)(A + B·v + C·v²) lands in the base
        // field and equals c0·A + β·(c2·B + c1·C), which is zero iff the
        // element is zero.
        let a = self.c0.square() - P::NON_RESIDUE * self.c1 * self.c2;
        let b = P::NON_RESIDUE * self.c2.square() - self.c0 * self.c1;
        let c = self.c1.square() - self.c0 * self.c2;
        let t = self.c0 * a + P::NON_RESIDUE * (self.c2 * b + self.c1 * c);
        t.invert()
            .map(|t| Self::new(a * t, b * t, c * t))
    }

    fn random(rng: &mut impl CryptoRngCore) -> Self {
        Self::new(P::Base::random(rng), P::Base::random(rng), P::Base::random(rng))
    }
}

impl<P: CubicExtensionParams> Default for CubicExtension<P> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<P: CubicExtensionParams> DefaultIsZeroes for CubicExtension<P> {}

impl<P: CubicExtensionParams> From<u64> for CubicExtension<P> {
    fn from(n: u64) -> Self {
        Self::new(P::Base::from(n), P::Base::ZERO, P::Base::ZERO)
    }
}

impl<P: CubicExtensionParams> ConditionallySelectable for CubicExtension<P> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::new(
            P::Base::conditional_select(&a.c0, &b.c0, choice),
            P::Base::conditional_select(&a.c1, &b.c1, choice),
            P::Base::conditional_select(&a.c2, &b.c2, choice),
        )
    }
}

impl<P: CubicExtensionParams> ConstantTimeEq for CubicExtension<P> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1) & self.c2.ct_eq(&other.c2)
    }
}

impl<P: CubicExtensionParams> Add for CubicExtension<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.c0 + rhs.c0, self.c1 + rhs.c1, self.c2 + rhs.c2)
    }
}

impl<P: CubicExtensionParams> Sub for CubicExtension<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.c0 - rhs.c0, self.c1 - rhs.c1, self.c2 - rhs.c2)
    }
}

impl<P: CubicExtensionParams> Mul for CubicExtension<P> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        // Karatsuba over three coefficients: v³ reduces to β.
        let v0 = self.c0 * rhs.c0;
        let v1 = self.c1 * rhs.c1;
        let v2 = self.c2 * rhs.c2;
        let c0 = v0 + P::NON_RESIDUE * ((self.c1 + self.c2) * (rhs.c1 + rhs.c2) - v1 - v2);
        let c1 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - v0 - v1 + P::NON_RESIDUE * v2;
        let c2 = (self.c0 + self.c2) * (rhs.c0 + rhs.c2) - v0 - v2 + v1;
        Self::new(c0, c1, c2)
    }
}

impl<P: CubicExtensionParams> Neg for CubicExtension<P> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.c0, -self.c1, -self.c2)
    }
}

impl_field_op_variants!((P: CubicExtensionParams), CubicExtension<P>);
