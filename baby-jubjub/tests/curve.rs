//! Baby Jubjub group law tests against the EIP-2494 base points and
//! independently computed multiples.

use baby_jubjub::{AffinePoint, Fq, Fr, ProjectivePoint, FULL_GROUP_GENERATOR};
use curvegroup::Error;

fn point(x: &str, y: &str) -> AffinePoint {
    AffinePoint::from_coordinates(Fq::from_be_hex(x), Fq::from_be_hex(y))
        .expect("point not on curve")
}

#[test]
fn base_points_are_on_curve() {
    assert!(bool::from(AffinePoint::GENERATOR.is_on_curve()));
    assert!(bool::from(FULL_GROUP_GENERATOR.is_on_curve()));
    assert!(bool::from(AffinePoint::IDENTITY.is_on_curve()));
}

#[test]
fn subgroup_base_point_is_eight_times_the_generator() {
    assert_eq!(FULL_GROUP_GENERATOR.mul_by_cofactor(), AffinePoint::GENERATOR);
}

#[test]
fn small_multiples_of_the_full_group_generator() {
    let g = FULL_GROUP_GENERATOR;

    let two_g = point(
        "03b4d18b8801b12c784c95e319fb43588e55207574ab4bb046e484d5dab02db9",
        "1990f0c54f32b2d188cb36e43d585714b1954cce117adaa425990bcfcf4a055a",
    );
    let three_g = point(
        "0fb14fe0b032b25d011c8eef5578e6d3349e457428b46c9580ccb1f9edf4f5fd",
        "2d3bfc8a221308908c9f36bb8f370677486660a2477819aac50ec714417f57e1",
    );

    assert_eq!(g.double(), two_g);
    assert_eq!(g.double() + g, three_g);
    assert_eq!(g + g, two_g);
}

#[test]
fn scalar_multiplication_known_value() {
    let k = Fr::from_be_hex("0000000000000000000000000000000000000000000000000000000005b2e5a7");
    let expected = point(
        "10b89c4b2240ec57245368a00ce2cf96a9013435234a938a9e5246e2555bbf7e",
        "016ded80683491b9a82834f6b925beaa9337121b1c281c8a7cdfb0805aedca9d",
    );

    assert_eq!(AffinePoint::GENERATOR * k, expected);
}

#[test]
fn base_point_has_order_l() {
    let b8 = AffinePoint::GENERATOR;
    assert_eq!(b8 * -Fr::ONE, -b8);
    assert!(bool::from((b8 * -Fr::ONE + b8).is_identity()));
}

#[test]
fn identity_and_inverse_cases() {
    let b8 = AffinePoint::GENERATOR;

    assert_eq!(b8 + AffinePoint::IDENTITY, b8);
    assert!(bool::from((b8 + (-b8)).is_identity()));
    assert!(bool::from((b8 * Fr::ZERO).is_identity()));
}

#[test]
fn projective_arithmetic_matches_affine() {
    let b8 = ProjectivePoint::GENERATOR;
    let k = Fr::from(123456789u64);

    assert_eq!(b8.double().to_affine(), AffinePoint::GENERATOR.double());
    assert_eq!((b8 * k).to_affine(), AffinePoint::GENERATOR * k);
    assert_eq!(b8.add(&b8), b8.double());
}

#[test]
fn rejects_malformed_coordinates() {
    assert_eq!(
        AffinePoint::from_coordinates(Fq::ONE, Fq::ONE),
        Err(Error::MalformedPoint)
    );
}

proptest::proptest! {
    #[test]
    fn scalar_multiplication_is_additive(k1: u64, k2: u64) {
        let b8 = AffinePoint::GENERATOR;
        // u64 scalars cannot wrap modulo the 251-bit subgroup order.
        let sum = Fr::from(k1) + Fr::from(k2);
        proptest::prop_assert_eq!(b8 * Fr::from(k1) + b8 * Fr::from(k2), b8 * sum);
    }
}
