//! The BLS12-381 twist group G2: the prime-order subgroup of
//! `y² = x³ + 4(1 + u)` over `Fq2`.

use crate::{Fq, Fq2, Fr};
use curvegroup::weierstrass::{self, EquationAIsZero};
use curvegroup::WeierstrassParams;

/// Marker for the BLS12-381 twist curve `y² = x³ + 4ξ` over `Fq2`, the
/// sextic twist with `ξ = 1 + u`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct G2;

impl WeierstrassParams for G2 {
    type FieldElement = Fq2;
    type Scalar = Fr;
    type PointArithmetic = EquationAIsZero;

    const EQUATION_A: Fq2 = Fq2::ZERO;

    /// `b' = 4(1 + u)`.
    const EQUATION_B: Fq2 = Fq2::new(Fq::from_u64(4), Fq::from_u64(4));

    const GENERATOR: (Fq2, Fq2) = (
        Fq2::new(
            Fq::from_be_hex(
                "024aa2b2f08f0a91260805272dc51051c6e47ad4fa403b02b4510b647ae3d1770bac0326a805bbefd48056c8c121bdb8"
            ),
            Fq::from_be_hex(
                "13e02b6052719f607dacd3a088274f65596bd0d09920b61ab5da61bbdc7f5049334cf11213945d57e5ac7d055d042b7e"
            ),
        ),
        Fq2::new(
            Fq::from_be_hex(
                "0ce5d527727d6e118cc9cdc6da2e351aadfd9baa8cbdd3a76d429a695160d12c923ac9cc3baca289e193548608b82801"
            ),
            Fq::from_be_hex(
                "0606c4a02ea734cc32acd2b02bc28b99cb3e287e85a763af267492ab572e99ab3f370d275cec1da1aaa9075ff05f79be"
            ),
        ),
    );

    const COFACTOR: &'static [u64] = &[
        0xcf1c38e31c7238e5,
        0x1616ec6e786f0c70,
        0x21537e293a6691ae,
        0xa628f1cb4d9e82ef,
        0xa68a205b2e5a7ddf,
        0xcd91de4547085aba,
        0x091d50792876a202,
        0x05d543a95414e7f1,
    ];
}

/// BLS12-381 G2 point in affine coordinates.
pub type G2Affine = weierstrass::AffinePoint<G2>;

/// BLS12-381 G2 point in projective coordinates.
pub type G2Projective = weierstrass::ProjectivePoint<G2>;
