//! Short Weierstrass curves `y² = x³ + ax + b`.
//!
//! Affine points carry an explicit infinity flag and use the classical chord
//! and tangent law; projective points use complete formulas and never branch
//! on their inputs.

mod affine;
mod arithmetic;
mod projective;

pub use affine::AffinePoint;
pub use arithmetic::{EquationAIsGeneric, EquationAIsZero, PointArithmetic};
pub use projective::ProjectivePoint;
