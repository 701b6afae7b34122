//! G1 and G2 group law tests against independently computed multiples of the
//! generators.

use bls12_381::{Fq, Fq2, Fr, G1Affine, G1Projective, G2Affine, G2Projective};
use curvegroup::Error;

fn g1(x: &str, y: &str) -> G1Affine {
    G1Affine::from_coordinates(Fq::from_be_hex(x), Fq::from_be_hex(y))
        .expect("point not on curve")
}

fn fq2(c0: &str, c1: &str) -> Fq2 {
    Fq2::new(Fq::from_be_hex(c0), Fq::from_be_hex(c1))
}

#[test]
fn g1_generator_is_on_curve() {
    assert!(bool::from(G1Affine::GENERATOR.is_on_curve()));
    assert!(bool::from(G1Projective::GENERATOR.is_on_curve()));
}

#[test]
fn g1_small_multiples_of_the_generator() {
    let g = G1Projective::GENERATOR;

    let two_g = g1(
        "0572cbea904d67468808c8eb50a9450c9721db309128012543902d0ac358a62ae28f75bb8f1c7c42c39a8c5529bf0f4e",
        "166a9d8cabc673a322fda673779d8e3822ba3ecb8670e461f73bb9021d5fd76a4c56d9d4cd16bd1bba86881979749d28",
    );
    let three_g = g1(
        "09ece308f9d1f0131765212deca99697b112d61f9be9a5f1f3780a51335b3ff981747a0b2ca2179b96d2c0c9024e5224",
        "032b80d3a6f5b09f8a84623389c5f80ca69a0cddabc3097f9d9c27310fd43be6e745256c634af45ca3473b0590ae30d1",
    );

    assert_eq!(g.double().to_affine(), two_g);
    assert_eq!((g.double() + g).to_affine(), three_g);
    assert_eq!((g * Fr::from(3u64)).to_affine(), three_g);
}

#[test]
fn g1_scalar_multiplication_with_wide_scalar() {
    let k = Fr::from_be_hex("43f3aa0f614fad228c37807893531bc20f29720c38b67e57a784d9055190cfee");
    let expected = g1(
        "07f48c84f8b3c271aa39a8fc3ecb1c816fce132d5dc322f25af8b5c7119be3ba0cd021976782a9f3d429d05bf0807ac3",
        "0f4aa50bfc227614cc6abc15d8cdbc6f5edff36610bb7970c64fb6e9700e5acf73e4ce421fe52354b51f37e448fc6af4",
    );

    assert_eq!((G1Projective::GENERATOR * k).to_affine(), expected);
}

#[test]
fn g1_generator_has_order_r() {
    let g = G1Projective::GENERATOR;
    assert_eq!(g * -Fr::ONE, -g);
    assert!(bool::from((g * -Fr::ONE + g).is_identity()));
}

#[test]
fn g1_cofactor_clearing_matches_reduced_scalar() {
    // The generator already has order r, so cofactor clearing is the same
    // as multiplying by h1 mod r (h1 is below r).
    let g = G1Projective::GENERATOR;
    let h1 = Fr::from_be_hex("00000000000000000000000000000000396c8c005555e1568c00aaab0000aaab");

    assert_eq!(g.mul_by_cofactor(), g * h1);
    assert!(!bool::from(g.mul_by_cofactor().is_identity()));
}

#[test]
fn g1_rejects_malformed_coordinates() {
    assert_eq!(
        G1Affine::from_coordinates(Fq::ONE, Fq::ONE),
        Err(Error::MalformedPoint)
    );
}

#[test]
fn g2_generator_is_on_curve() {
    assert!(bool::from(G2Affine::GENERATOR.is_on_curve()));
    assert!(bool::from(G2Projective::GENERATOR.is_on_curve()));
}

#[test]
fn g2_double_of_the_generator() {
    let g = G2Projective::GENERATOR;

    let two_g = G2Affine::from_coordinates(
        fq2(
            "1638533957d540a9d2370f17cc7ed5863bc0b995b8825e0ee1ea1e1e4d00dbae81f14b0bf3611b78c952aacab827a053",
            "0a4edef9c1ed7f729f520e47730a124fd70662a904ba1074728114d1031e1572c6c886f6b57ec72a6178288c47c33577",
        ),
        fq2(
            "0468fb440d82b0630aeb8dca2b5256789a66da69bf91009cbfe6bd221e47aa8ae88dece9764bf3bd999d95d71e4c9899",
            "0f6d4552fa65dd2638b361543f887136a43253d9c66c411697003f7a13c308f5422e1aa0a59c8967acdefd8b6e36ccf3",
        ),
    )
    .expect("point not on curve");

    assert_eq!(g.double().to_affine(), two_g);
    assert_eq!(g.add(&g), g.double());
}

#[test]
fn g2_generator_has_order_r() {
    let g = G2Projective::GENERATOR;
    assert_eq!(g * -Fr::ONE, -g);
    assert!(bool::from((g * -Fr::ONE + g).is_identity()));
}

#[test]
fn g2_cofactor_clearing_matches_reduced_scalar() {
    let g = G2Projective::GENERATOR;
    let h2_mod_r =
        Fr::from_be_hex("73eda753299d7d47d5034f7e659fd4ceb4cb5555b1500d525554aaa8aaaaaaad");

    assert_eq!(g.mul_by_cofactor(), g * h2_mod_r);
    assert!(!bool::from(g.mul_by_cofactor().is_identity()));
}

#[test]
fn mixed_addition_agrees_with_projective_addition() {
    let g = G1Projective::GENERATOR;
    let p = g * Fr::from(7u64);

    assert_eq!(p + G1Affine::GENERATOR, p + g);
    assert_eq!(p + G1Affine::IDENTITY, p);
}

proptest::proptest! {
    #[test]
    fn g1_scalar_multiplication_is_additive(k1: u64, k2: u64) {
        let g = G1Projective::GENERATOR;
        // u64 scalars cannot wrap modulo the 255-bit r.
        let sum = Fr::from(k1) + Fr::from(k2);
        proptest::prop_assert_eq!(g * Fr::from(k1) + g * Fr::from(k2), g * sum);
    }
}
