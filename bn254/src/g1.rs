//! The bn254 base group G1: points of `y² = x³ + 3` over `Fq`.

use crate::{Fq, Fr};
use curvegroup::weierstrass::{self, EquationAIsZero};
use curvegroup::WeierstrassParams;

/// Marker for the bn254 base curve `y² = x³ + 3` over `Fq`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct G1;

impl WeierstrassParams for G1 {
    type FieldElement = Fq;
    type Scalar = Fr;
    type PointArithmetic = EquationAIsZero;

    const EQUATION_A: Fq = Fq::ZERO;
    const EQUATION_B: Fq = Fq::from_u64(3);

    /// The customary generator `(1, 2)`.
    const GENERATOR: (Fq, Fq) = (Fq::ONE, Fq::from_u64(2));

    /// The whole group of rational points is of prime order `r`.
    const COFACTOR: &'static [u64] = &[1];
}

/// bn254 G1 point in affine coordinates.
pub type G1Affine = weierstrass::AffinePoint<G1>;

/// bn254 G1 point in projective coordinates.
pub type G1Projective = weierstrass::ProjectivePoint<G1>;
