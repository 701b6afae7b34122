#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

pub mod edwards;
pub mod weierstrass;

mod error;

pub use crate::error::{Error, Result};
pub use towerfield;
pub use towerfield::{FieldElement, PrimeFieldElement};

use core::fmt::Debug;

/// Constants of a short Weierstrass curve `y² = x³ + ax + b` over a prime
/// field or an extension thereof.
///
/// Implemented by zero-sized marker types, one per curve, so that all curve
/// constants are resolved at compile time.
pub trait WeierstrassParams: Copy + Clone + Debug + Eq + 'static {
    /// Field the curve coordinates live in.
    type FieldElement: FieldElement;

    /// Scalar field, i.e. the prime field of the order of the prime-order
    /// subgroup.
    type Scalar: PrimeFieldElement;

    /// Projective point addition strategy, chosen per the shape of the
    /// `a`-coefficient.
    type PointArithmetic: weierstrass::PointArithmetic<Self>;

    /// Coefficient `a` of the curve equation.
    const EQUATION_A: Self::FieldElement;

    /// Coefficient `b` of the curve equation.
    const EQUATION_B: Self::FieldElement;

    /// Generator of the prime-order subgroup, in affine coordinates.
    const GENERATOR: (Self::FieldElement, Self::FieldElement);

    /// Cofactor of the prime-order subgroup within the full group of
    /// rational points, as little endian 64-bit limbs.
    const COFACTOR: &'static [u64];
}

/// Constants of a twisted Edwards curve `ax² + y² = 1 + dx²y²` over a prime
/// field.
///
/// The addition law implemented for these curves is complete only when `a`
/// is a square and `d` a non-square in the coordinate field; parameters are
/// expected to satisfy that.
pub trait TwistedEdwardsParams: Copy + Clone + Debug + Eq + 'static {
    /// Field the curve coordinates live in.
    type FieldElement: FieldElement;

    /// Scalar field, i.e. the prime field of the order of the prime-order
    /// subgroup.
    type Scalar: PrimeFieldElement;

    /// Coefficient `a` of the curve equation.
    const EQUATION_A: Self::FieldElement;

    /// Coefficient `d` of the curve equation.
    const EQUATION_D: Self::FieldElement;

    /// Generator of the prime-order subgroup, in affine coordinates.
    const GENERATOR: (Self::FieldElement, Self::FieldElement);

    /// Cofactor of the prime-order subgroup within the full group of
    /// rational points, as little endian 64-bit limbs.
    const COFACTOR: &'static [u64];
}

/// Descriptor tying together the fields and point types of one named curve.
///
/// Downstream code generic over a `CurveFamily` can accept any supported
/// curve without caring whether its points are Weierstrass or Edwards shaped.
pub trait CurveFamily: Copy + Clone + Debug + 'static {
    /// Canonical name of the curve.
    const NAME: &'static str;

    /// Field the base group's coordinates live in.
    type BaseField: FieldElement;

    /// Field scalars live in.
    type ScalarField: PrimeFieldElement;

    /// Affine representation of base group elements.
    type G1Affine;

    /// Projective representation of base group elements.
    type G1Projective;
}

/// Extension of [`CurveFamily`] for pairing-friendly curves, adding the
/// twist group and the pairing target field.
///
/// Pairing evaluation itself is out of scope here; this names the groups a
/// pairing would relate so protocol code can be written against them.
pub trait PairingFamily: CurveFamily {
    /// Extension field the twist curve's coordinates live in.
    type TwistField: FieldElement;

    /// Extension field pairing values live in.
    type TargetField: FieldElement;

    /// Affine representation of twist group elements.
    type G2Affine;

    /// Projective representation of twist group elements.
    type G2Projective;
}

/// Returns the `index`-th bit of a little endian limb slice.
pub(crate) fn limb_bit(limbs: &[u64], index: usize) -> bool {
    (limbs[index / 64] >> (index % 64)) & 1 == 1
}
