//! Twisted Edwards curves `ax² + y² = 1 + dx²y²`.
//!
//! The identity is the ordinary point `(0, 1)`, so affine points need no
//! infinity flag. With `a` a square and `d` a non-square in the coordinate
//! field the addition law is complete.

mod affine;
mod projective;

pub use affine::AffinePoint;
pub use projective::ProjectivePoint;
