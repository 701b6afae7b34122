//! The BLS12-381 base group G1: the prime-order subgroup of
//! `y² = x³ + 4` over `Fq`.

use crate::{Fq, Fr};
use curvegroup::weierstrass::{self, EquationAIsZero};
use curvegroup::WeierstrassParams;

/// Marker for the BLS12-381 base curve `y² = x³ + 4` over `Fq`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct G1;

impl WeierstrassParams for G1 {
    type FieldElement = Fq;
    type Scalar = Fr;
    type PointArithmetic = EquationAIsZero;

    const EQUATION_A: Fq = Fq::ZERO;
    const EQUATION_B: Fq = Fq::from_u64(4);

    const GENERATOR: (Fq, Fq) = (
        Fq::from_be_hex(
            "17f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb"
        ),
        Fq::from_be_hex(
            "08b3f481e3aaa0f1a09e30ed741d8ae4fcf5e095d5d00af600db18cb2c04b3edd03cc744a2888ae40caa232946c5e7e1"
        ),
    );

    /// `h1 = (x - 1)² / 3` for the BLS parameter `x`.
    const COFACTOR: &'static [u64] = &[0x8c00aaab0000aaab, 0x396c8c005555e156];
}

/// BLS12-381 G1 point in affine coordinates.
pub type G1Affine = weierstrass::AffinePoint<G1>;

/// BLS12-381 G1 point in projective coordinates.
pub type G1Projective = weierstrass::ProjectivePoint<G1>;
