//! Tower construction tests against the BLS12-381 constants.

use bls12_381::{Fq, Fq12, Fq12Params, Fq2, Fq6, Fr};
use towerfield::{Error, FieldElement, QuadExtensionParams};

#[test]
fn fq_modulus_wraps_to_zero() {
    let p_minus_one = Fq::from_be_hex(
        "1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaaa"
    );
    assert_eq!(p_minus_one + Fq::ONE, Fq::ZERO);
    assert_eq!(-Fq::ONE, p_minus_one);
}

#[test]
fn fr_modulus_wraps_to_zero() {
    let r_minus_one =
        Fr::from_be_hex("73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000000");
    assert_eq!(r_minus_one + Fr::ONE, Fr::ZERO);
}

#[test]
fn fq_inversion() {
    let x = Fq::from(987654321u64);
    assert_eq!(x * x.inverse().unwrap(), Fq::ONE);
    assert_eq!(Fq::ZERO.inverse(), Err(Error::DivisionByZero));
}

#[test]
fn fq2_adjoined_root_squares_to_minus_one() {
    let u = Fq2::new(Fq::ZERO, Fq::ONE);
    assert_eq!(u.square(), Fq2::new(-Fq::ONE, Fq::ZERO));
}

#[test]
fn fq6_adjoined_root_cubes_to_xi() {
    let v = Fq6::new(Fq2::ZERO, Fq2::ONE, Fq2::ZERO);
    let xi = Fq6::new(Fq2::new(Fq::ONE, Fq::ONE), Fq2::ZERO, Fq2::ZERO);
    assert_eq!(v * v * v, xi);
}

#[test]
fn fq12_adjoined_root_squares_to_v() {
    let w = Fq12::new(Fq6::ZERO, Fq6::ONE);
    assert_eq!(w.square(), Fq12::new(Fq12Params::NON_RESIDUE, Fq6::ZERO));
}

#[test]
fn fq12_inverse_roundtrip() {
    let a = Fq12::new(
        Fq6::new(
            Fq2::new(Fq::from(1u64), Fq::from(2u64)),
            Fq2::new(Fq::from(3u64), Fq::from(4u64)),
            Fq2::new(Fq::from(5u64), Fq::from(6u64)),
        ),
        Fq6::new(
            Fq2::new(Fq::from(7u64), Fq::from(8u64)),
            Fq2::new(Fq::from(9u64), Fq::from(10u64)),
            Fq2::new(Fq::from(11u64), Fq::from(12u64)),
        ),
    );
    assert_eq!(a * a.inverse().unwrap(), Fq12::ONE);
    assert!(bool::from(Fq12::ZERO.invert().is_none()));
}
