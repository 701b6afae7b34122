//! The bn254 twist group G2: points of `y² = x³ + 3/(9 + u)` over `Fq2`.

use crate::{Fq, Fq2, Fr};
use curvegroup::weierstrass::{self, EquationAIsZero};
use curvegroup::WeierstrassParams;

/// Marker for the bn254 twist curve `y² = x³ + 3/ξ` over `Fq2`, the sextic
/// twist with `ξ = 9 + u`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct G2;

impl WeierstrassParams for G2 {
    type FieldElement = Fq2;
    type Scalar = Fr;
    type PointArithmetic = EquationAIsZero;

    const EQUATION_A: Fq2 = Fq2::ZERO;

    /// `b' = 3/ξ`.
    const EQUATION_B: Fq2 = Fq2::new(
        Fq::from_be_hex("2b149d40ceb8aaae81be18991be06ac3b5b4c5e559dbefa33267e6dc24a138e5"),
        Fq::from_be_hex("009713b03af0fed4cd2cafadeed8fdf4a74fa084e52d1852e4a2bd0685c315d2"),
    );

    const GENERATOR: (Fq2, Fq2) = (
        Fq2::new(
            Fq::from_be_hex("1800deef121f1e76426a00665e5c4479674322d4f75edadd46debd5cd992f6ed"),
            Fq::from_be_hex("198e9393920d483a7260bfb731fb5d25f1aa493335a9e71297e485b7aef312c2"),
        ),
        Fq2::new(
            Fq::from_be_hex("12c85ea5db8c6deb4aab71808dcb408fe3d1e7690c43d37b4ce6cc0166fa7daa"),
            Fq::from_be_hex("090689d0585ff075ec9e99ad690c3395bc4b313370b38ef355acdadcd122975b"),
        ),
    );

    /// `h2 = 2p - r`, the number of rational twist points divided by `r`.
    const COFACTOR: &'static [u64] = &[
        0x345f2299c0f9fa8d,
        0x06ceecda572a2489,
        0xb85045b68181585e,
        0x30644e72e131a029,
    ];
}

/// bn254 G2 point in affine coordinates.
pub type G2Affine = weierstrass::AffinePoint<G2>;

/// bn254 G2 point in projective coordinates.
pub type G2Projective = weierstrass::ProjectivePoint<G2>;
