//! Affine points on twisted Edwards curves.

use crate::{limb_bit, Error, FieldElement, PrimeFieldElement, Result, TwistedEdwardsParams};
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Point on a twisted Edwards curve in affine coordinates.
///
/// Every group element has affine coordinates, the identity being `(0, 1)`.
#[derive(Clone, Copy, Debug)]
pub struct AffinePoint<C: TwistedEdwardsParams> {
    /// x-coordinate.
    pub(crate) x: C::FieldElement,

    /// y-coordinate.
    pub(crate) y: C::FieldElement,
}

impl<C: TwistedEdwardsParams> AffinePoint<C> {
    /// The identity of the group: the point `(0, 1)`.
    pub const IDENTITY: Self = Self {
        x: C::FieldElement::ZERO,
        y: C::FieldElement::ONE,
    };

    /// Base point of the curve.
    pub const GENERATOR: Self = Self {
        x: C::GENERATOR.0,
        y: C::GENERATOR.1,
    };

    /// Build a point from affine coordinates without checking the curve
    /// equation.
    ///
    /// The caller is responsible for the coordinates satisfying it; group
    /// operations on points off the curve produce points off the curve.
    pub const fn new_unchecked(x: C::FieldElement, y: C::FieldElement) -> Self {
        Self { x, y }
    }

    /// Build a point from affine coordinates, checking that they satisfy the
    /// curve equation.
    pub fn from_coordinates(x: C::FieldElement, y: C::FieldElement) -> Result<Self> {
        let point = Self::new_unchecked(x, y);

        if point.is_on_curve().into() {
            Ok(point)
        } else {
            Err(Error::MalformedPoint)
        }
    }

    /// x-coordinate.
    pub fn x(&self) -> C::FieldElement {
        self.x
    }

    /// y-coordinate.
    pub fn y(&self) -> C::FieldElement {
        self.y
    }

    /// Is this point the identity?
    pub fn is_identity(&self) -> Choice {
        self.x.is_zero() & self.y.ct_eq(&C::FieldElement::ONE)
    }

    /// Do the coordinates satisfy the curve equation `ax² + y² = 1 + dx²y²`?
    pub fn is_on_curve(&self) -> Choice {
        let x_sq = self.x.square();
        let y_sq = self.y.square();
        let lhs = C::EQUATION_A * x_sq + y_sq;
        let rhs = C::FieldElement::ONE + C::EQUATION_D * x_sq * y_sq;
        lhs.ct_eq(&rhs)
    }

    /// Add two points with the twisted Edwards addition law:
    ///
    /// ```text
    /// x3 = (x1·y2 + y1·x2) / (1 + d·x1·x2·y1·y2)
    /// y3 = (y1·y2 - a·x1·x2) / (1 - d·x1·x2·y1·y2)
    /// ```
    ///
    /// The identity operands, equal operands and inverse operands are
    /// dispatched by branching first, in variable time; for the remaining
    /// pairs the denominators are nonzero whenever the parameters satisfy
    /// the completeness condition on [`TwistedEdwardsParams`].
    pub fn add(&self, other: &Self) -> Self {
        if self.is_identity().into() {
            return *other;
        }

        if other.is_identity().into() {
            return *self;
        }

        if *self == other.neg() {
            return Self::IDENTITY;
        }

        if self == other {
            return self.double();
        }

        self.add_unchecked(other)
    }

    /// Returns `self + self`.
    ///
    /// The addition law is unified, so doubling is addition applied to two
    /// copies of the same point.
    pub fn double(&self) -> Self {
        self.add_unchecked(self)
    }

    /// The raw addition law, with no dispatch on degenerate operand pairs.
    fn add_unchecked(&self, other: &Self) -> Self {
        let xx = self.x * other.x;
        let yy = self.y * other.y;
        let cross = self.x * other.y + self.y * other.x;
        let t = C::EQUATION_D * xx * yy;

        let x = cross
            * (C::FieldElement::ONE + t)
                .invert()
                .unwrap_or(C::FieldElement::ZERO);
        let y = (yy - C::EQUATION_A * xx)
            * (C::FieldElement::ONE - t)
                .invert()
                .unwrap_or(C::FieldElement::ZERO);

        Self { x, y }
    }

    /// Returns `-self`, i.e. `(-x, y)`.
    pub fn neg(&self) -> Self {
        Self {
            x: -self.x,
            y: self.y,
        }
    }

    /// Scalar multiplication via double-and-add, most significant bit first.
    ///
    /// Runs in variable time with respect to the scalar.
    pub fn mul(&self, scalar: &C::Scalar) -> Self {
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

impl<C: TwistedEdwardsParams> ConditionallySelectable for AffinePoint<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: C::FieldElement::conditional_select(&a.x, &b.x, choice),
            y: C::FieldElement::conditional_select(&a.y, &b.y, choice),
        }
    }
}

impl<C: TwistedEdwardsParams> ConstantTimeEq for AffinePoint<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y)
    }
}

impl<C: TwistedEdwardsParams> PartialEq for AffinePoint<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: TwistedEdwardsParams> Eq for AffinePoint<C> {}

impl<C: TwistedEdwardsParams> Default for AffinePoint<C> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<C: TwistedEdwardsParams> Add for AffinePoint<C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        AffinePoint::add(&self, &rhs)
    }
}

impl<C: TwistedEdwardsParams> Add<&AffinePoint<C>> for AffinePoint<C> {
    type Output = Self;

    fn add(self, rhs: &Self) -> Self {
        AffinePoint::add(&self, rhs)
    }
}

impl<C: TwistedEdwardsParams> Add<&AffinePoint<C>> for &AffinePoint<C> {
    type Output = AffinePoint<C>;

    fn add(self, rhs: &AffinePoint<C>) -> AffinePoint<C> {
        AffinePoint::add(self, rhs)
    }
}

impl<C: TwistedEdwardsParams> AddAssign for AffinePoint<C> {
    fn add_assign(&mut self, rhs: Self) {
        *self = AffinePoint::add(self, &rhs);
    }
}

impl<C: TwistedEdwardsParams> AddAssign<&AffinePoint<C>> for AffinePoint<C> {
    fn add_assign(&mut self, rhs: &Self) {
        *self = AffinePoint::add(self, rhs);
    }
}

impl<C: TwistedEdwardsParams> Sub for AffinePoint<C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        AffinePoint::add(&self, &rhs.neg())
    }
}

impl<C: TwistedEdwardsParams> Sub<&AffinePoint<C>> for AffinePoint<C> {
    type Output = Self;

    fn sub(self, rhs: &Self) -> Self {
        AffinePoint::add(&self, &rhs.neg())
    }
}

impl<C: TwistedEdwardsParams> SubAssign for AffinePoint<C> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = AffinePoint::add(self, &rhs.neg());
    }
}

impl<C: TwistedEdwardsParams> Neg for AffinePoint<C> {
    type Output = Self;

    fn neg(self) -> Self {
        AffinePoint::neg(&self)
    }
}

impl<C: TwistedEdwardsParams> Neg for &AffinePoint<C> {
    type Output = AffinePoint<C>;

    fn neg(self) -> AffinePoint<C> {
        AffinePoint::neg(self)
    }
}

impl<C: TwistedEdwardsParams> Mul<C::Scalar> for AffinePoint<C> {
    type Output = Self;

    fn mul(self, scalar: C::Scalar) -> Self {
        AffinePoint::mul(&self, &scalar)
    }
}

impl<C: TwistedEdwardsParams> MulAssign<C::Scalar> for AffinePoint<C> {
    fn mul_assign(&mut self, scalar: C::Scalar) {
        *self = AffinePoint::mul(self, &scalar);
    }
}

impl<C: TwistedEdwardsParams> Sum for AffinePoint<C> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::IDENTITY, |acc, item| acc + item)
    }
}

impl<'a, C: TwistedEdwardsParams> Sum<&'a AffinePoint<C>> for AffinePoint<C> {
    fn sum<I: Iterator<Item = &'a AffinePoint<C>>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
