#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

extern crate alloc;

mod fields;
mod g1;
mod g2;

pub use crate::fields::{Fq, Fq12, Fq12Params, Fq2, Fq2Params, Fq6, Fq6Params, Fr};
pub use crate::g1::{G1Affine, G1Projective, G1};
pub use crate::g2::{G2Affine, G2Projective, G2};
pub use curvegroup;
pub use towerfield;

use alloc::vec::Vec;
use curvegroup::{CurveFamily, PairingFamily};

/// Element of the pairing target group; bilinear pairings on this curve take
/// values in `Fq12`.
pub type Gt = Fq12;

/// Batch of G1 points in affine coordinates.
pub type G1Points = Vec<G1Affine>;

/// Batch of G2 points in affine coordinates.
pub type G2Points = Vec<G2Affine>;

/// The BLS12-381 curve family descriptor.
#[derive(Clone, Copy, Debug)]
pub struct Bls12_381;

impl CurveFamily for Bls12_381 {
    const NAME: &'static str = "bls12-381";

    type BaseField = Fq;
    type ScalarField = Fr;
    type G1Affine = G1Affine;
    type G1Projective = G1Projective;
}

impl PairingFamily for Bls12_381 {
    type TwistField = Fq2;
    type TargetField = Fq12;
    type G2Affine = G2Affine;
    type G2Projective = G2Projective;
}
