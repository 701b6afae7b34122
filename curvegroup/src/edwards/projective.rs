//! Projective points on twisted Edwards curves.

use crate::edwards::AffinePoint;
use crate::{limb_bit, FieldElement, PrimeFieldElement, TwistedEdwardsParams};
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Point on a twisted Edwards curve in homogeneous projective coordinates,
/// i.e. `(X : Y : Z)` with `x = X/Z` and `y = Y/Z`.
///
/// Uses the unified addition and doubling formulas of
/// [Bernstein-Birkner-Joye-Lange-Peters 2008]; with complete curve
/// parameters no input combination is exceptional and `Z` never vanishes.
///
/// [Bernstein-Birkner-Joye-Lange-Peters 2008]: https://eprint.iacr.org/2008/013
#[derive(Clone, Copy, Debug)]
pub struct ProjectivePoint<C: TwistedEdwardsParams> {
    pub(crate) x: C::FieldElement,
    pub(crate) y: C::FieldElement,
    pub(crate) z: C::FieldElement,
}

impl<C: TwistedEdwardsParams> ProjectivePoint<C> {
    /// The identity of the group: `(0 : 1 : 1)`.
    pub const IDENTITY: Self = Self {
        x: C::FieldElement::ZERO,
        y: C::FieldElement::ONE,
        z: C::FieldElement::ONE,
    };

    /// Base point of the curve.
    pub const GENERATOR: Self = Self {
        x: C::GENERATOR.0,
        y: C::GENERATOR.1,
        z: C::FieldElement::ONE,
    };

    /// Returns the affine representation of this point.
    pub fn to_affine(&self) -> AffinePoint<C> {
        self.z
            .invert()
            .map(|zinv| AffinePoint {
                x: self.x * zinv,
                y: self.y * zinv,
            })
            .unwrap_or(AffinePoint::IDENTITY)
    }

    /// Is this point the identity?
    pub fn is_identity(&self) -> Choice {
        self.x.is_zero() & self.y.ct_eq(&self.z)
    }

    /// Do the coordinates satisfy the homogenized curve equation
    /// `(aX² + Y²)Z² = Z⁴ + dX²Y²`?
    pub fn is_on_curve(&self) -> Choice {
        let x_sq = self.x.square();
        let y_sq = self.y.square();
        let z_sq = self.z.square();
        let lhs = (C::EQUATION_A * x_sq + y_sq) * z_sq;
        let rhs = z_sq.square() + C::EQUATION_D * x_sq * y_sq;
        lhs.ct_eq(&rhs)
    }

    /// Returns `-self`.
    pub fn neg(&self) -> Self {
        Self {
            x: -self.x,
            y: self.y,
            z: self.z,
        }
    }

    /// Returns `self + other`.
    ///
    /// Implements the unified projective addition formula `add-2008-bbjlp`.
    /// The formula is branch free and also handles doubling.
    pub fn add(&self, other: &Self) -> Self {
        let a = self.z * other.z;
        let b = a.square();
        let c = self.x * other.x;
        let d = self.y * other.y;
        let e = C::EQUATION_D * c * d;
        let f = b - e;
        let g = b + e;

        let x = a * f * ((self.x + self.y) * (other.x + other.y) - c - d);
        let y = a * g * (d - C::EQUATION_A * c);
        let z = f * g;

        Self { x, y, z }
    }

    /// Returns `self - other`.
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Returns `self + self`.
    ///
    /// Implements the projective doubling formula `dbl-2008-bbjlp`, which is
    /// exception free for every input.
    pub fn double(&self) -> Self {
        let b = (self.x + self.y).square();
        let c = self.x.square();
        let d = self.y.square();
        let e = C::EQUATION_A * c;
        let f = e + d;
        let h = self.z.square();
        let j = f - h.double();

        let x = (b - c - d) * j;
        let y = f * (e - d);
        let z = f * j;

        Self { x, y, z }
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

impl<C: TwistedEdwardsParams> ConditionallySelectable for ProjectivePoint<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: C::FieldElement::conditional_select(&a.x, &b.x, choice),
            y: C::FieldElement::conditional_select(&a.y, &b.y, choice),
            z: C::FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl<C: TwistedEdwardsParams> ConstantTimeEq for ProjectivePoint<C> {
    /// Compares the underlying group elements, cross-multiplying with the
    /// `Z` coordinates to quotient out the projective scaling.
    fn ct_eq(&self, other: &Self) -> Choice {
        (self.x * other.z).ct_eq(&(other.x * self.z))
            & (self.y * other.z).ct_eq(&(other.y * self.z))
    }
}

impl<C: TwistedEdwardsParams> PartialEq for ProjectivePoint<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: TwistedEdwardsParams> Eq for ProjectivePoint<C> {}

impl<C: TwistedEdwardsParams> Default for ProjectivePoint<C> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<C: TwistedEdwardsParams> From<AffinePoint<C>> for ProjectivePoint<C> {
    fn from(point: AffinePoint<C>) -> Self {
        Self::from(&point)
    }
}

impl<C: TwistedEdwardsParams> From<&AffinePoint<C>> for ProjectivePoint<C> {
    fn from(point: &AffinePoint<C>) -> Self {
        Self {
            x: point.x,
            y: point.y,
            z: C::FieldElement::ONE,
        }
    }
}

impl<C: TwistedEdwardsParams> From<ProjectivePoint<C>> for AffinePoint<C> {
    fn from(point: ProjectivePoint<C>) -> Self {
        point.to_affine()
    }
}

impl<C: TwistedEdwardsParams> From<&ProjectivePoint<C>> for AffinePoint<C> {
    fn from(point: &ProjectivePoint<C>) -> Self {
        point.to_affine()
    }
}

impl<C: TwistedEdwardsParams> Add for ProjectivePoint<C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        ProjectivePoint::add(&self, &rhs)
    }
}

impl<C: TwistedEdwardsParams> Add<&ProjectivePoint<C>> for ProjectivePoint<C> {
    type Output = Self;

    fn add(self, rhs: &Self) -> Self {
        ProjectivePoint::add(&self, rhs)
    }
}

impl<C: TwistedEdwardsParams> Add<&ProjectivePoint<C>> for &ProjectivePoint<C> {
    type Output = ProjectivePoint<C>;

    fn add(self, rhs: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::add(self, rhs)
    }
}

impl<C: TwistedEdwardsParams> AddAssign for ProjectivePoint<C> {
    fn add_assign(&mut self, rhs: Self) {
        *self = ProjectivePoint::add(self, &rhs);
    }
}

impl<C: TwistedEdwardsParams> AddAssign<&ProjectivePoint<C>> for ProjectivePoint<C> {
    fn add_assign(&mut self, rhs: &Self) {
        *self = ProjectivePoint::add(self, rhs);
    }
}

impl<C: TwistedEdwardsParams> Sub for ProjectivePoint<C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        ProjectivePoint::sub(&self, &rhs)
    }
}

impl<C: TwistedEdwardsParams> Sub<&ProjectivePoint<C>> for ProjectivePoint<C> {
    type Output = Self;

    fn sub(self, rhs: &Self) -> Self {
        ProjectivePoint::sub(&self, rhs)
    }
}

impl<C: TwistedEdwardsParams> SubAssign for ProjectivePoint<C> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = ProjectivePoint::sub(self, &rhs);
    }
}

impl<C: TwistedEdwardsParams> Neg for ProjectivePoint<C> {
    type Output = Self;

    fn neg(self) -> Self {
        ProjectivePoint::neg(&self)
    }
}

impl<C: TwistedEdwardsParams> Neg for &ProjectivePoint<C> {
    type Output = ProjectivePoint<C>;

    fn neg(self) -> ProjectivePoint<C> {
        ProjectivePoint::neg(self)
    }
}

impl<C: TwistedEdwardsParams> Mul<C::Scalar> for ProjectivePoint<C> {
    type Output = Self;

    fn mul(self, scalar: C::Scalar) -> Self {
        ProjectivePoint::mul(&self, &scalar)
    }
}

impl<C: TwistedEdwardsParams> Mul<&C::Scalar> for &ProjectivePoint<C> {
    type Output = ProjectivePoint<C>;

    fn mul(self, scalar: &C::Scalar) -> ProjectivePoint<C> {
        ProjectivePoint::mul(self, scalar)
    }
}

impl<C: TwistedEdwardsParams> MulAssign<C::Scalar> for ProjectivePoint<C> {
    fn mul_assign(&mut self, scalar: C::Scalar) {
        *self = ProjectivePoint::mul(self, &scalar);
    }
}

impl<C: TwistedEdwardsParams> Sum for ProjectivePoint<C> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::IDENTITY, |acc, item| acc + item)
    }
}

impl<'a, C: TwistedEdwardsParams> Sum<&'a ProjectivePoint<C>> for ProjectivePoint<C> {
    fn sum<I: Iterator<Item = &'a ProjectivePoint<C>>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
