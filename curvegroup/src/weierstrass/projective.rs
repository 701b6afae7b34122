//! Projective points on short Weierstrass curves.

use crate::weierstrass::{AffinePoint, PointArithmetic};
use crate::{limb_bit, FieldElement, PrimeFieldElement, WeierstrassParams};
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Point on a short Weierstrass curve in homogeneous projective coordinates,
/// i.e. `(X : Y : Z)` with `x = X/Z` and `y = Y/Z`.
///
/// Addition and doubling use the complete formulas selected by the curve's
/// [`PointArithmetic`] strategy and are correct for all inputs, including the
/// identity `(0 : 1 : 0)`.
#[derive(Clone, Copy, Debug)]
pub struct ProjectivePoint<C: WeierstrassParams> {
    pub(crate) x: C::FieldElement,
    pub(crate) y: C::FieldElement,
    pub(crate) z: C::FieldElement,
}

impl<C: WeierstrassParams> ProjectivePoint<C> {
    /// The identity of the group: the point at infinity `(0 : 1 : 0)`.
    pub const IDENTITY: Self = Self {
        x: C::FieldElement::ZERO,
        y: C::FieldElement::ONE,
        z: C::FieldElement::ZERO,
    };

    /// Base point of the curve.
    pub const GENERATOR: Self = Self {
        x: C::GENERATOR.0,
        y: C::GENERATOR.1,
        z: C::FieldElement::ONE,
    };

    /// Returns the affine representation of this point, or the affine
    /// identity if it is the point at infinity.
    pub fn to_affine(&self) -> AffinePoint<C> {
        self.z
            .invert()
            .map(|zinv| AffinePoint {
                x: self.x * zinv,
                y: self.y * zinv,
                infinity: 0,
            })
            .unwrap_or(AffinePoint::IDENTITY)
    }

    /// Is this point the identity?
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Do the coordinates satisfy the homogenized curve equation
    /// `Y²Z = X³ + aXZ² + bZ³`?
    pub fn is_on_curve(&self) -> Choice {
        let z_sq = self.z.square();
        let lhs = self.y.square() * self.z;
        let rhs = self.x.square() * self.x
            + C::EQUATION_A * self.x * z_sq
            + C::EQUATION_B * z_sq * self.z;
        lhs.ct_eq(&rhs)
    }

    /// Returns `-self`.
    pub fn neg(&self) -> Self {
        Self {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }

    /// Returns `self + other`.
    pub fn add(&self, other: &Self) -> Self {
        C::PointArithmetic::add(self, other)
    }

    /// Returns `self + other`.
    fn add_mixed(&self, other: &AffinePoint<C>) -> Self {
        C::PointArithmetic::add_mixed(self, other)
    }

    /// Returns `self - other`.
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Returns `self - other`.
    fn sub_mixed(&self, other: &AffinePoint<C>) -> Self {
        self.add_mixed(&-other)
    }

    /// Returns `self + self`.
    pub fn double(&self) -> Self {
        C::PointArithmetic::double(self)
    }

    /// Scalar multiplication via double-and-add, most significant bit first.
    ///
    /// Runs in variable time with respect to the scalar.
    fn mul(&self, scalar: &C::Scalar) -> Self {
        let mut acc = Self::IDENTITY;
        let mut i = C::Scalar::NUM_BITS;

        while i > 0 {
            i -= 1;
            acc = acc.double();

            if scalar.bit_vartime(i) {
                acc = acc.add(self);
            }
        }

        acc
    }

    /// Clear the cofactor, mapping this point into the prime-order subgroup.
    pub fn mul_by_cofactor(&self) -> Self {
        let mut acc = Self::IDENTITY;
        let mut i = C::COFACTOR.len() * 64;

        while i > 0 {
            i -= 1;
            acc = acc.double();

            if limb_bit(C::COFACTOR, i) {
                acc = acc.add(self);
            }
        }

        acc
    }
}

impl<C: WeierstrassParams> ConditionallySelectable for ProjectivePoint<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: C::FieldElement::conditional_select(&a.x, &b.x, choice),
            y: C::FieldElement::conditional_select(&a.y, &b.y, choice),
            z: C::FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl<C: WeierstrassParams> ConstantTimeEq for ProjectivePoint<C> {
    /// Compares the underlying group elements, not the coordinate triples:
    /// two points are equal when their coordinates agree up to a projective
    /// scaling, checked by cross-multiplying with the `Z` coordinates.
    fn ct_eq(&self, other: &Self) -> Choice {
        (self.x * other.z).ct_eq(&(other.x * self.z))
            & (self.y * other.z).ct_eq(&(other.y * self.z))
    }
}

impl<C: WeierstrassParams> PartialEq for ProjectivePoint<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: WeierstrassParams> Eq for ProjectivePoint<C> {}

impl<C: WeierstrassParams> Default for ProjectivePoint<C> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<C: WeierstrassParams> From<AffinePoint<C>> for ProjectivePoint<C> {
    fn from(point: AffinePoint<C>) -> Self {
        Self::from(&point)
    }
}

impl<C: WeierstrassParams> From<&AffinePoint<C>> for ProjectivePoint<C> {
    fn from(point: &AffinePoint<C>) -> Self {
        let projective = Self {
            x: point.x,
            y: point.y,
            z: C::FieldElement::ONE,
        };
        Self::conditional_select(&projective, &Self::IDENTITY, point.is_identity())
    }
}

impl<C: WeierstrassParams> From<ProjectivePoint<C>> for AffinePoint<C> {
    fn from(point: ProjectivePoint<C>) -> Self {
        point.to_affine()
    }
}

impl<C: WeierstrassParams> From<&ProjectivePoint<C>> for AffinePoint<C> {
    fn from(point: &ProjectivePoint<C>) -> Self {
        point.to_affine()
    }
}

impl<C: WeierstrassParams> Add for ProjectivePoint<C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        ProjectivePoint::add(&self, &rhs)
    }
}

impl<C: WeierstrassParams> Add<&ProjectivePoint<C>> for ProjectivePoint<C> {
    type Output = Self;

    fn add(self, rhs: &Self) -> Self {
        ProjectivePoint::add(&self, rhs)
    }
}

impl<C: WeierstrassParams> Add<&ProjectivePoint<C>> for &ProjectivePoint<C> {
    type Output = ProjectivePoint<C>;

    fn add(self, rhs: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::add(self, rhs)
    }
}

impl<C: WeierstrassParams> AddAssign for ProjectivePoint<C> {
    fn add_assign(&mut self, rhs: Self) {
        *self = ProjectivePoint::add(self, &rhs);
    }
}

impl<C: WeierstrassParams> AddAssign<&ProjectivePoint<C>> for ProjectivePoint<C> {
    fn add_assign(&mut self, rhs: &Self) {
        *self = ProjectivePoint::add(self, rhs);
    }
}

impl<C: WeierstrassParams> Add<AffinePoint<C>> for ProjectivePoint<C> {
    type Output = Self;

    fn add(self, rhs: AffinePoint<C>) -> Self {
        self.add_mixed(&rhs)
    }
}

impl<C: WeierstrassParams> Add<&AffinePoint<C>> for ProjectivePoint<C> {
    type Output = Self;

    fn add(self, rhs: &AffinePoint<C>) -> Self {
        self.add_mixed(rhs)
    }
}

impl<C: WeierstrassParams> AddAssign<AffinePoint<C>> for ProjectivePoint<C> {
    fn add_assign(&mut self, rhs: AffinePoint<C>) {
        *self = self.add_mixed(&rhs);
    }
}

impl<C: WeierstrassParams> Sub for ProjectivePoint<C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        ProjectivePoint::sub(&self, &rhs)
    }
}

impl<C: WeierstrassParams> Sub<&ProjectivePoint<C>> for ProjectivePoint<C> {
    type Output = Self;

    fn sub(self, rhs: &Self) -> Self {
        ProjectivePoint::sub(&self, rhs)
    }
}

impl<C: WeierstrassParams> SubAssign for ProjectivePoint<C> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = ProjectivePoint::sub(self, &rhs);
    }
}

impl<C: WeierstrassParams> Sub<AffinePoint<C>> for ProjectivePoint<C> {
    type Output = Self;

    fn sub(self, rhs: AffinePoint<C>) -> Self {
        self.sub_mixed(&rhs)
    }
}

impl<C: WeierstrassParams> Sub<&AffinePoint<C>> for ProjectivePoint<C> {
    type Output = Self;

    fn sub(self, rhs: &AffinePoint<C>) -> Self {
        self.sub_mixed(rhs)
    }
}

impl<C: WeierstrassParams> Neg for ProjectivePoint<C> {
    type Output = Self;

    fn neg(self) -> Self {
        ProjectivePoint::neg(&self)
    }
}

impl<C: WeierstrassParams> Neg for &ProjectivePoint<C> {
    type Output = ProjectivePoint<C>;

    fn neg(self) -> ProjectivePoint<C> {
        ProjectivePoint::neg(self)
    }
}

impl<C: WeierstrassParams> Mul<C::Scalar> for ProjectivePoint<C> {
    type Output = Self;

    fn mul(self, scalar: C::Scalar) -> Self {
        ProjectivePoint::mul(&self, &scalar)
    }
}

impl<C: WeierstrassParams> Mul<&C::Scalar> for &ProjectivePoint<C> {
    type Output = ProjectivePoint<C>;

    fn mul(self, scalar: &C::Scalar) -> ProjectivePoint<C> {
        ProjectivePoint::mul(self, scalar)
    }
}

impl<C: WeierstrassParams> MulAssign<C::Scalar> for ProjectivePoint<C> {
    fn mul_assign(&mut self, scalar: C::Scalar) {
        *self = ProjectivePoint::mul(self, &scalar);
    }
}

impl<C: WeierstrassParams> Sum for ProjectivePoint<C> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::IDENTITY, |acc, item| acc + item)
    }
}

impl<'a, C: WeierstrassParams> Sum<&'a ProjectivePoint<C>> for ProjectivePoint<C> {
    fn sum<I: Iterator<Item = &'a ProjectivePoint<C>>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
