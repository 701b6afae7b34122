//! Prime field elements in Montgomery form over a compile-time modulus.

use crate::macros::impl_field_op_variants;
use crate::{FieldElement, PrimeFieldElement};
use bigint::modular::{ConstMontyForm, ConstMontyParams};
use bigint::{Invert, Random, Uint};
use core::ops::{Add, Mul, Neg, Sub};
use rand_core::CryptoRngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::DefaultIsZeroes;

/// Element of the prime field `GF(MOD::MODULUS)`.
///
/// Thin newtype around [`ConstMontyForm`]: internally elements are kept in
/// Montgomery form, with the modulus carried in the `MOD` type parameter.
/// Declare moduli with [`bigint::impl_modulus!`]:
///
/// ```
/// use towerfield::bigint::{impl_modulus, U64};
/// use towerfield::Fp;
///
/// impl_modulus!(F13, U64, "000000000000000d");
///
/// type F13Element = Fp<F13, { U64::LIMBS }>;
///
/// let x = F13Element::from_u64(11);
/// assert_eq!((x + x).to_canonical(), U64::from_u64(9));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Fp<MOD: ConstMontyParams<LIMBS>, const LIMBS: usize>(ConstMontyForm<MOD, LIMBS>);

impl<MOD: ConstMontyParams<LIMBS>, const LIMBS: usize> Fp<MOD, LIMBS> {
    /// Additive identity.
    pub const ZERO: Self = Self(ConstMontyForm::ZERO);

    /// Multiplicative identity.
    pub const ONE: Self = Self(ConstMontyForm::ONE);

    /// Convert an integer into a field element, reducing it modulo the
    /// field's characteristic.
    pub const fn from_uint(uint: Uint<LIMBS>) -> Self {
        Self(ConstMontyForm::new(&uint))
    }

    /// Parse a field element from a big endian hex string.
    ///
    /// The string must have exactly `LIMBS * 16` characters, i.e. include
    /// leading zeros. Suitable for `const` initializers; panics at compile
    /// time on malformed input.
    pub const fn from_be_hex(hex: &str) -> Self {
        Self::from_uint(Uint::from_be_hex(hex))
    }

    /// Convert a `u64` into a field element, reducing modulo the field's
    /// characteristic.
    pub const fn from_u64(n: u64) -> Self {
        Self::from_uint(Uint::from_u64(n))
    }

    /// Retrieve the canonical (fully reduced, non-Montgomery) integer
    /// representative of this element.
    pub fn to_canonical(&self) -> Uint<LIMBS> {
        self.0.retrieve()
    }

    /// Compute `self^2`.
    pub const fn square(&self) -> Self {
        Self(self.0.square())
    }
}

impl<MOD: ConstMontyParams<LIMBS>, const LIMBS: usize> FieldElement for Fp<MOD, LIMBS>
where
    ConstMontyForm<MOD, LIMBS>: Invert<Output = CtOption<ConstMontyForm<MOD, LIMBS>>>,
{
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;

    fn square(&self) -> Self {
        Self(self.0.square())
    }

    fn invert(&self) -> CtOption<Self> {
        <ConstMontyForm<MOD, LIMBS> as Invert>::invert(&self.0).map(Self)
    }

    fn random(rng: &mut impl CryptoRngCore) -> Self {
        Self(ConstMontyForm::random(rng))
    }
}

impl<MOD: ConstMontyParams<LIMBS>, const LIMBS: usize> PrimeFieldElement for Fp<MOD, LIMBS>
where
    ConstMontyForm<MOD, LIMBS>: Invert<Output = CtOption<ConstMontyForm<MOD, LIMBS>>>,
{
    const NUM_BITS: u32 = Uint::<LIMBS>::BITS;

    fn bit_vartime(&self, index: u32) -> bool {
        self.0.retrieve().bit_vartime(index)
    }
}

impl<MOD: ConstMontyParams<LIMBS>, const LIMBS: usize> Default for Fp<MOD, LIMBS> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<MOD: ConstMontyParams<LIMBS>, const LIMBS: usize> DefaultIsZeroes for Fp<MOD, LIMBS> {}

impl<MOD: ConstMontyParams<LIMBS>, const LIMBS: usize> From<u64> for Fp<MOD, LIMBS> {
    fn from(n: u64) -> Self {
        Self::from_u64(n)
    }
}

impl<MOD: ConstMontyParams<LIMBS>, const LIMBS: usize> From<Uint<LIMBS>> for Fp<MOD, LIMBS> {
    fn from(uint: Uint<LIMBS>) -> Self {
        Self::from_uint(uint)
    }
}

impl<MOD: ConstMontyParams<LIMBS>, const LIMBS: usize> ConditionallySelectable for Fp<MOD, LIMBS> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(ConstMontyForm::conditional_select(&a.0, &b.0, choice))
    }
}

impl<MOD: ConstMontyParams<LIMBS>, const LIMBS: usize> ConstantTimeEq for Fp<MOD, LIMBS> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl<MOD: ConstMontyParams<LIMBS>, const LIMBS: usize> Add for Fp<MOD, LIMBS> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl<MOD: ConstMontyParams<LIMBS>, const LIMBS: usize> Sub for Fp<MOD, LIMBS> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl<MOD: ConstMontyParams<LIMBS>, const LIMBS: usize> Mul for Fp<MOD, LIMBS> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl<MOD: ConstMontyParams<LIMBS>, const LIMBS: usize> Neg for Fp<MOD, LIMBS> {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl_field_op_variants!((MOD: ConstMontyParams<LIMBS>, const LIMBS: usize), Fp<MOD, LIMBS>);
