//! G1 and G2 group law tests against independently computed multiples of the
//! generators.

use bn254::{Fq, Fq2, Fr, G1Affine, G1Projective, G2Affine, G2Projective};
use curvegroup::Error;

fn g1(x: &str, y: &str) -> G1Affine {
    G1Affine::from_coordinates(Fq::from_be_hex(x), Fq::from_be_hex(y))
        .expect("point not on curve")
}

fn fq2(c0: &str, c1: &str) -> Fq2 {
    Fq2::new(Fq::from_be_hex(c0), Fq::from_be_hex(c1))
}

fn g1_generator_multiples() -> [G1Affine; 4] {
    [
        g1(
            "030644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd3",
            "15ed738c0e0a7c92e7845f96b2ae9c0a68a6a449e3538fc7ff3ebf7a5a18a2c4",
        ),
        g1(
            "0769bf9ac56bea3ff40232bcb1b6bd159315d84715b8e679f2d355961915abf0",
            "2ab799bee0489429554fdb7c8d086475319e63b40b9c5b57cdf1ff3dd9fe2261",
        ),
        g1(
            "06a7b64af8f414bcbeef455b1da5208c9b592b83ee6599824caa6d2ee9141a76",
            "08e74e438cee31ac104ce59b94e45fe98a97d8f8a6e75664ce88ef5a41e72fbc",
        ),
        g1(
            "17c139df0efee0f766bc0204762b774362e4ded88953a39ce849a8a7fa163fa9",
            "01e0559bacb160664764a357af8a9fe70baa9258e0b959273ffc5718c6d4cc7c",
        ),
    ]
}

#[test]
fn g1_generator_is_on_curve() {
    assert!(bool::from(G1Affine::GENERATOR.is_on_curve()));
    assert_eq!(G1Affine::GENERATOR.x(), Fq::ONE);
    assert_eq!(G1Affine::GENERATOR.y(), Fq::from(2u64));
}

#[test]
fn g1_small_multiples_of_the_generator() {
    let [g2, g3, g4, g5] = g1_generator_multiples();
    let g = G1Projective::GENERATOR;

    assert_eq!(g.double().to_affine(), g2);
    assert_eq!((g.double() + g).to_affine(), g3);
    assert_eq!(g.double().double().to_affine(), g4);
    assert_eq!((g * Fr::from(5u64)).to_affine(), g5);
    assert_eq!(g2 + g3, G1Projective::from(g5).to_affine());
}

#[test]
fn g1_scalar_multiplication_with_wide_scalar() {
    let k = Fr::from_be_hex("26b46609e75849ed9680875d1870eaafea4b5d35cb8888a2dbdef8488190cfec");
    let expected = g1(
        "03e651fdd8254cbc5b47a6e4730855ae4ed0e34e3b190a0e33f8d463b271c0e9",
        "28a7272f0e0455d60316f62cf20b84aad612fa69aa299e3797d08466d01aa817",
    );

    assert_eq!((G1Projective::GENERATOR * k).to_affine(), expected);
    assert_eq!((G1Affine::GENERATOR * k).to_affine(), expected);
}

#[test]
fn g1_generator_has_order_r() {
    // (r - 1)·G = -G, so r·G is the identity.
    let g = G1Projective::GENERATOR;
    assert_eq!(g * -Fr::ONE, -g);
    assert!(bool::from((g * -Fr::ONE + g).is_identity()));
}

#[test]
fn g1_rejects_malformed_coordinates() {
    assert_eq!(
        G1Affine::from_coordinates(Fq::ONE, Fq::from(3u64)),
        Err(Error::MalformedPoint)
    );
}

#[test]
fn g2_generator_is_on_curve() {
    assert!(bool::from(G2Affine::GENERATOR.is_on_curve()));
    assert!(bool::from(G2Projective::GENERATOR.is_on_curve()));
}

#[test]
fn g2_small_multiples_of_the_generator() {
    let g = G2Projective::GENERATOR;

    let two_g = G2Affine::from_coordinates(
        fq2(
            "27dc7234fd11d3e8c36c59277c3e6f149d5cd3cfa9a62aee49f8130962b4b3b9",
            "203e205db4f19b37b60121b83a7333706db86431c6d835849957ed8c3928ad79",
        ),
        fq2(
            "04bb53b8977e5f92a0bc372742c4830944a59b4fe6b1c0466e2a6dad122b5d2e",
            "195e8aa5b7827463722b8c153931579d3505566b4edf48d498e185f0509de152",
        ),
    )
    .expect("point not on curve");

    let three_g = G2Affine::from_coordinates(
        fq2(
            "06064e784db10e9051e52826e192715e8d7e478cb09a5e0012defa0694fbc7f5",
            "1014772f57bb9742735191cd5dcfe4ebbc04156b6878a0a7c9824f32ffb66e85",
        ),
        fq2(
            "058e1d5681b5b9e0074b0f9c8d2c68a069b920d74521e79765036d57666c5597",
            "021e2335f3354bb7922ffcc2f38d3323dd9453ac49b55441452aeaca147711b2",
        ),
    )
    .expect("point not on curve");

    assert_eq!(g.double().to_affine(), two_g);
    assert_eq!((g * Fr::from(3u64)).to_affine(), three_g);
    assert_eq!((g.double() + g).to_affine(), three_g);
}

#[test]
fn g2_generator_has_order_r() {
    let g = G2Projective::GENERATOR;
    assert_eq!(g * -Fr::ONE, -g);
    assert!(bool::from((g * -Fr::ONE + g).is_identity()));
}

#[test]
fn g2_cofactor_clearing_matches_reduced_scalar() {
    // The generator already has order r, so multiplying by the cofactor
    // h2 = 2p - r equals multiplying by h2 mod r.
    let g = G2Projective::GENERATOR;
    let h2_mod_r =
        Fr::from_be_hex("00000000000000000000000000000000de9b0491dd70b3f7f07d2d05d0f9fa8c");

    assert_eq!(g.mul_by_cofactor(), g * h2_mod_r);
    assert!(!bool::from(g.mul_by_cofactor().is_identity()));
}

#[test]
fn mixed_addition_agrees_with_projective_addition() {
    let g = G1Projective::GENERATOR;
    let p = g * Fr::from(7u64);

    assert_eq!(p + G1Affine::GENERATOR, p + g);
    assert_eq!(p - G1Affine::GENERATOR, p - g);
    assert_eq!(p + G1Affine::IDENTITY, p);
}

proptest::proptest! {
    #[test]
    fn g1_scalar_multiplication_is_additive(k1: u64, k2: u64) {
        let g = G1Projective::GENERATOR;
        // u64 scalars cannot wrap modulo the 254-bit r.
        let sum = Fr::from(k1) + Fr::from(k2);
        proptest::prop_assert_eq!(g * Fr::from(k1) + g * Fr::from(k2), g * sum);
    }
}
