//! The BLS12-381 base and scalar fields and the extension tower above the
//! base field: `Fq2 = Fq[u]/(u² + 1)`, `Fq6 = Fq2[v]/(v³ - (1 + u))` and
//! `Fq12 = Fq6[w]/(w² - v)`.

use towerfield::bigint::{impl_modulus, U256, U384};
use towerfield::{CubicExtension, CubicExtensionParams, Fp, QuadExtension, QuadExtensionParams};

impl_modulus!(
    FqModulus,
    U384,
    "1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab"
);

impl_modulus!(
    FrModulus,
    U256,
    "73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001"
);

/// Element of the base field `Fq`, the field the G1 coordinates live in.
pub type Fq = Fp<FqModulus, { U384::LIMBS }>;

/// Element of the scalar field `Fr`, the prime field of the order of G1 and
/// G2.
pub type Fr = Fp<FrModulus, { U256::LIMBS }>;

/// `Fq2 = Fq[u] / (u² + 1)`; -1 is a non-residue since q ≡ 3 (mod 4).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Fq2Params;

impl QuadExtensionParams for Fq2Params {
    type Base = Fq;

    const NON_RESIDUE: Fq = Fq::from_be_hex(
        "1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaaa"
    );
}

/// Element of `Fq2`, the field the G2 coordinates live in.
pub type Fq2 = QuadExtension<Fq2Params>;

/// `Fq6 = Fq2[v] / (v³ - ξ)` with `ξ = 1 + u`, which is neither a square nor
/// a cube in `Fq2`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Fq6Params;

impl CubicExtensionParams for Fq6Params {
    type Base = Fq2;

    const NON_RESIDUE: Fq2 = Fq2::new(Fq::ONE, Fq::ONE);
}

/// Element of `Fq6`.
pub type Fq6 = CubicExtension<Fq6Params>;

/// `Fq12 = Fq6[w] / (w² - v)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Fq12Params;

impl QuadExtensionParams for Fq12Params {
    type Base = Fq6;

    const NON_RESIDUE: Fq6 = Fq6::new(Fq2::ZERO, Fq2::ONE, Fq2::ZERO);
}

/// Element of `Fq12`, the field pairing values live in.
pub type Fq12 = QuadExtension<Fq12Params>;
