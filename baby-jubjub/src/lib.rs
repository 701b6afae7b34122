#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

extern crate alloc;

pub use curvegroup;
pub use towerfield;

/// Element of the base field: Baby Jubjub coordinates live in the scalar
/// field of bn254.
pub use bn254::Fr as Fq;

use alloc::vec::Vec;
use curvegroup::edwards;
use curvegroup::{CurveFamily, TwistedEdwardsParams};
use towerfield::bigint::{impl_modulus, U256};
use towerfield::Fp;

impl_modulus!(
    FrModulus,
    U256,
    "060c89ce5c263405370a08b6d0302b0bab3eedb83920ee0a677297dc392126f1"
);

/// Element of the scalar field `Fr`, the prime field of the order of the
/// prime-order subgroup.
pub type Fr = Fp<FrModulus, { U256::LIMBS }>;

/// Marker for the Baby Jubjub curve `168700x² + y² = 1 + 168696x²y²` over
/// `Fq`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BabyJubjubCurve;

impl TwistedEdwardsParams for BabyJubjubCurve {
    type FieldElement = Fq;
    type Scalar = Fr;

    const EQUATION_A: Fq = Fq::from_u64(168700);
    const EQUATION_D: Fq = Fq::from_u64(168696);

    /// The base point `B8 = 8·G`, generating the prime-order subgroup.
    const GENERATOR: (Fq, Fq) = (
        Fq::from_be_hex("0bb77a6ad63e739b4eacb2e09d6277c12ab8d8010534e0b62893f3f6bb957051"),
        Fq::from_be_hex("25797203f7a0b24925572e1cd16bf9edfce0051fb9e133774b3c257a872d7d8b"),
    );

    const COFACTOR: &'static [u64] = &[8];
}

/// Baby Jubjub point in affine coordinates.
pub type AffinePoint = edwards::AffinePoint<BabyJubjubCurve>;

/// Baby Jubjub point in projective coordinates.
pub type ProjectivePoint = edwards::ProjectivePoint<BabyJubjubCurve>;

/// Batch of points in affine coordinates.
pub type Points = Vec<AffinePoint>;

/// Generator of the full group of rational points; multiplying it by the
/// cofactor yields the subgroup base point [`AffinePoint::GENERATOR`].
pub const FULL_GROUP_GENERATOR: AffinePoint = AffinePoint::new_unchecked(
    Fq::from_be_hex("023343e3445b673d38bcba38f25645adb494b1255b1162bb40f41a59f4d4b45e"),
    Fq::from_be_hex("0c19139cb84c680a6e14116da06056174a0cfa121e6e5c2450f87d64fc000001"),
);

/// The Baby Jubjub curve family descriptor.
#[derive(Clone, Copy, Debug)]
pub struct BabyJubjub;

impl CurveFamily for BabyJubjub {
    const NAME: &'static str = "baby-jubjub";

    type BaseField = Fq;
    type ScalarField = Fr;
    type G1Affine = AffinePoint;
    type G1Projective = ProjectivePoint;
}
