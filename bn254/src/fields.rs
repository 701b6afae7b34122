//! The bn254 base and scalar fields and the extension tower above the base
//! field: `Fq2 = Fq[u]/(u² + 1)`, `Fq6 = Fq2[v]/(v³ - (9 + u))` and
//! `Fq12 = Fq6[w]/(w² - v)`.

use towerfield::bigint::{impl_modulus, U256};
use towerfield::{CubicExtension, CubicExtensionParams, Fp, QuadExtension, QuadExtensionParams};

impl_modulus!(
    FqModulus,
    U256,
    "30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47"
);

impl_modulus!(
    FrModulus,
    U256,
    "30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001"
);

/// Element of the base field `Fq`, the field the G1 coordinates live in.
pub type Fq = Fp<FqModulus, { U256::LIMBS }>;

/// Element of the scalar field `Fr`, the prime field of the order of G1 and
/// G2.
pub type Fr = Fp<FrModulus, { U256::LIMBS }>;

/// `Fq2 = Fq[u] / (u² + 1)`; -1 is a non-residue since q ≡ 3 (mod 4).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Fq2Params;

impl QuadExtensionParams for Fq2Params {
    type Base = Fq;

    const NON_RESIDUE: Fq =
        Fq::from_be_hex("30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd46");
}

/// Element of `Fq2`, the field the G2 coordinates live in.
pub type Fq2 = QuadExtension<Fq2Params>;

/// `Fq6 = Fq2[v] / (v³ - ξ)` with `ξ = 9 + u`, which is neither a square nor
/// a cube in `Fq2`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Fq6Params;

impl CubicExtensionParams for Fq6Params {
    type Base = Fq2;

    const NON_RESIDUE: Fq2 = Fq2::new(Fq::from_u64(9), Fq::ONE);
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
