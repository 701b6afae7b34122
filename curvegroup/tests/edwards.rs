//! Twisted Edwards group law tests over a small prime field, with expected
//! values cross-checked against plain integer arithmetic.

use curvegroup::edwards::{AffinePoint, ProjectivePoint};
use curvegroup::{Error, TwistedEdwardsParams};
use towerfield::bigint::{impl_modulus, U64};
use towerfield::Fp;

impl_modulus!(Toy, U64, "0000000000010003");

type F = Fp<Toy, { U64::LIMBS }>;

/// `9x² + y² = 1 + 50976x²y²` over `GF(65539)`, a complete twisted Edwards
/// curve (`a` is a square, `d` is not) through `(2, 3)` and `(1, 6)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct ToyEdwards;

impl TwistedEdwardsParams for ToyEdwards {
    type FieldElement = F;
    type Scalar = F;

    const EQUATION_A: F = F::from_u64(9);
    const EQUATION_D: F = F::from_u64(50976);
    const GENERATOR: (F, F) = (F::from_u64(2), F::from_u64(3));
    const COFACTOR: &'static [u64] = &[8];
}

type Affine = AffinePoint<ToyEdwards>;
type Projective = ProjectivePoint<ToyEdwards>;

fn f(n: u64) -> F {
    F::from_u64(n)
}

fn point(x: u64, y: u64) -> Affine {
    AffinePoint::from_coordinates(f(x), f(y)).expect("point not on curve")
}

#[test]
fn generator_and_identity_are_on_curve() {
    assert!(bool::from(Affine::GENERATOR.is_on_curve()));
    assert!(bool::from(Affine::IDENTITY.is_on_curve()));
    assert!(bool::from(Affine::IDENTITY.is_identity()));
    assert!(bool::from(Projective::IDENTITY.is_on_curve()));
}

#[test]
fn from_coordinates_rejects_points_off_the_curve() {
    assert_eq!(
        AffinePoint::<ToyEdwards>::from_coordinates(f(2), f(4)),
        Err(Error::MalformedPoint)
    );
    assert!(AffinePoint::<ToyEdwards>::from_coordinates(f(1), f(6)).is_ok());
}

#[test]
fn affine_addition_known_values() {
    let c1 = Affine::GENERATOR;
    let c2 = point(1, 6);

    assert_eq!(c1 + c2, point(43693, 0));
    assert_eq!(c1.double(), point(61170, 50298));
}

#[test]
fn affine_addition_is_associative() {
    let c1 = Affine::GENERATOR;
    let c2 = point(1, 6);
    let c3 = c1.double();

    assert_eq!((c1 + c2) + c3, c1 + (c2 + c3));
    assert_eq!(c1 + (c2 + c3), point(16766, 13107));
    assert_eq!(c2 + c3, point(1, 65533));
}

#[test]
fn affine_identity_and_inverse_cases() {
    let c1 = Affine::GENERATOR;

    assert_eq!(c1 + Affine::IDENTITY, c1);
    assert_eq!(Affine::IDENTITY + c1, c1);
    assert!(bool::from((c1 + (-c1)).is_identity()));
    assert_eq!(Affine::IDENTITY.double(), Affine::IDENTITY);
    assert_eq!(-Affine::IDENTITY, Affine::IDENTITY);
}

#[test]
fn negation_flips_x_only() {
    let c1 = Affine::GENERATOR;
    assert_eq!(-c1, point(65537, 3));
    assert_eq!(-(-c1), c1);
}

#[test]
fn scalar_multiplication_known_values() {
    let c1 = Affine::GENERATOR;
    let c2 = point(1, 6);

    assert_eq!(c1 * f(5), point(50008, 56500));
    assert_eq!(c2 * f(7), point(1619, 33220));
    assert!(bool::from((c1 * F::ZERO).is_identity()));
    assert_eq!(c1 * F::ONE, c1);
}

#[test]
fn projective_arithmetic_matches_affine() {
    let c1 = Projective::GENERATOR;
    let c2 = Projective::from(point(1, 6));

    assert_eq!((c1 + c2).to_affine(), point(43693, 0));
    assert_eq!(c1.double().to_affine(), point(61170, 50298));
    // The addition formula is unified: adding a point to itself doubles it.
    assert_eq!(c1.add(&c1), c1.double());
    assert_eq!((c1 * f(5)).to_affine(), point(50008, 56500));
}

#[test]
fn projective_identity_and_inverse_cases() {
    let c1 = Projective::GENERATOR;

    assert_eq!(c1 + Projective::IDENTITY, c1);
    assert!(bool::from((c1 - c1).is_identity()));
    assert!(bool::from(Projective::IDENTITY.double().is_identity()));
}

#[test]
fn identity_differs_from_points_sharing_its_coordinates() {
    // (0, -1) is the 2-torsion point: it shares x = 0 with the identity
    // encoding (0, 1) but is a distinct group element.
    let two_torsion = point(0, 65538);

    assert_ne!(two_torsion, Affine::IDENTITY);
    assert_ne!(Projective::from(two_torsion), Projective::IDENTITY);
    assert_eq!(two_torsion.double(), Affine::IDENTITY);
}

#[test]
fn projective_equality_ignores_scaling() {
    let doubled = Projective::GENERATOR.double();
    let via_affine = Projective::from(doubled.to_affine());

    assert_eq!(doubled, via_affine);
    assert_ne!(doubled, Projective::GENERATOR);
}

#[test]
fn cofactor_ladder_matches_scalar_multiplication() {
    let c1 = Affine::GENERATOR;
    assert_eq!(c1.mul_by_cofactor(), point(16039, 8597));
    assert_eq!(c1.mul_by_cofactor(), c1 * f(8));
    assert_eq!(
        Projective::GENERATOR.mul_by_cofactor().to_affine(),
        point(16039, 8597)
    );
}

#[test]
fn sum_of_points() {
    let c1 = Affine::GENERATOR;
    let points = [c1, c1.double()];
    assert_eq!(points.iter().sum::<Affine>(), c1 * f(3));
}

proptest::proptest! {
    // Scalars are kept below half the field size so their sum does not wrap
    // modulo the toy scalar field.
    #[test]
    fn scalar_multiplication_is_additive(k1 in 0u64..32768, k2 in 0u64..32768) {
        let c1 = Affine::GENERATOR;
        proptest::prop_assert_eq!(c1 * f(k1) + c1 * f(k2), c1 * f(k1 + k2));
    }

    #[test]
    fn projective_matches_affine(k in 1u64..32768) {
        let affine = Affine::GENERATOR * f(k);
        let projective = Projective::GENERATOR * f(k);
        proptest::prop_assert_eq!(projective.to_affine(), affine);
    }
}
