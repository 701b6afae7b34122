//! Affine points on short Weierstrass curves.

use crate::weierstrass::ProjectivePoint;
use crate::{Error, FieldElement, Result, WeierstrassParams};
use core::ops::{Add, Mul, Neg, Sub};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Point on a short Weierstrass curve in affine coordinates.
///
/// The point at infinity has no affine coordinates, so it is carried in a
/// separate flag with `(x, y)` zeroed out.
#[derive(Clone, Copy, Debug)]
pub struct AffinePoint<C: WeierstrassParams> {
    /// x-coordinate.
    pub(crate) x: C::FieldElement,

    /// y-coordinate.
    pub(crate) y: C::FieldElement,

    /// Is this point the point at infinity? 0 = no, 1 = yes.
    pub(crate) infinity: u8,
}

impl<C: WeierstrassParams> AffinePoint<C> {
    /// The identity of the group: the point at infinity.
    pub const IDENTITY: Self = Self {
        x: C::FieldElement::ZERO,
        y: C::FieldElement::ZERO,
        infinity: 1,
    };

    /// Base point of the curve.
    pub const GENERATOR: Self = Self {
        x: C::GENERATOR.0,
        y: C::GENERATOR.1,
        infinity: 0,
    };

    /// Build a point from affine coordinates without checking the curve
    /// equation.
    ///
    /// The caller is responsible for the coordinates satisfying it; group
    /// operations on points off the curve produce points off the curve.
    pub const fn new_unchecked(x: C::FieldElement, y: C::FieldElement) -> Self {
        Self { x, y, infinity: 0 }
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

    /// x-coordinate. Zero for the point at infinity.
    pub fn x(&self) -> C::FieldElement {
        self.x
    }

    /// y-coordinate. Zero for the point at infinity.
    pub fn y(&self) -> C::FieldElement {
        self.y
    }

    /// Is this point the identity?
    pub fn is_identity(&self) -> Choice {
        Choice::from(self.infinity)
    }

    /// Do the coordinates satisfy the curve equation `y² = x³ + ax + b`?
    ///
    /// The point at infinity is a group element and counts as well formed.
    pub fn is_on_curve(&self) -> Choice {
        let lhs = self.y.square();
        let rhs = (self.x.square() + C::EQUATION_A) * self.x + C::EQUATION_B;
        lhs.ct_eq(&rhs) | self.is_identity()
    }

    /// Add two affine points with the chord and tangent law.
    ///
    /// Runs in variable time: the degenerate configurations (either operand
    /// the identity, equal operands, inverse operands) are dispatched by
    /// branching before the chord slope is formed, so the division in the
    /// general case is always by a nonzero element.
    pub fn add(&self, other: &Self) -> Self {
        if self.is_identity().into() {
            return *other;
        }

        if other.is_identity().into() {
            return *self;
        }

        if self.x == other.x {
            // Same x means y coordinates agree up to sign.
            return if self.y == -other.y {
                Self::IDENTITY
            } else {
                self.double()
            };
        }

        // x-coordinates differ, so the slope denominator is nonzero.
        let slope = (other.y - self.y)
            * (other.x - self.x)
                .invert()
                .unwrap_or(C::FieldElement::ZERO);
        self.apply_chord(other.x, slope)
    }

    /// Double an affine point.
    ///
    /// A point with `y = 0` is its own inverse, so its double is the
    /// identity; otherwise the tangent slope denominator `2y` is nonzero.
    pub fn double(&self) -> Self {
        if self.is_identity().into() || bool::from(self.y.is_zero()) {
            return Self::IDENTITY;
        }

        let x_sq = self.x.square();
        let slope = (x_sq.double() + x_sq + C::EQUATION_A)
            * self
                .y
                .double()
                .invert()
                .unwrap_or(C::FieldElement::ZERO);
        self.apply_chord(self.x, slope)
    }

    /// Third intersection of the line through `self` with the given slope,
    /// reflected over the x-axis.
    fn apply_chord(&self, other_x: C::FieldElement, slope: C::FieldElement) -> Self {
        let x = slope.square() - self.x - other_x;
        let y = slope * (self.x - x) - self.y;
        Self { x, y, infinity: 0 }
    }

    /// Clear the cofactor, mapping this point into the prime-order subgroup.
    pub fn mul_by_cofactor(&self) -> ProjectivePoint<C> {
        ProjectivePoint::from(self).mul_by_cofactor()
    }
}

impl<C: WeierstrassParams> ConditionallySelectable for AffinePoint<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: C::FieldElement::conditional_select(&a.x, &b.x, choice),
            y: C::FieldElement::conditional_select(&a.y, &b.y, choice),
            infinity: u8::conditional_select(&a.infinity, &b.infinity, choice),
        }
    }
}

impl<C: WeierstrassParams> ConstantTimeEq for AffinePoint<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y) & self.infinity.ct_eq(&other.infinity)
    }
}

impl<C: WeierstrassParams> PartialEq for AffinePoint<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: WeierstrassParams> Eq for AffinePoint<C> {}

impl<C: WeierstrassParams> Default for AffinePoint<C> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<C: WeierstrassParams> Add for AffinePoint<C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        AffinePoint::add(&self, &rhs)
    }
}

impl<C: WeierstrassParams> Add<&AffinePoint<C>> for AffinePoint<C> {
    type Output = Self;

    fn add(self, rhs: &Self) -> Self {
        AffinePoint::add(&self, rhs)
    }
}

impl<C: WeierstrassParams> Sub for AffinePoint<C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        AffinePoint::add(&self, &rhs.neg())
    }
}

impl<C: WeierstrassParams> Sub<&AffinePoint<C>> for AffinePoint<C> {
    type Output = Self;

    fn sub(self, rhs: &Self) -> Self {
        AffinePoint::add(&self, &rhs.neg())
    }
}

impl<C: WeierstrassParams> Neg for AffinePoint<C> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: self.x,
            y: -self.y,
            infinity: self.infinity,
        }
    }
}

impl<C: WeierstrassParams> Neg for &AffinePoint<C> {
    type Output = AffinePoint<C>;

    fn neg(self) -> AffinePoint<C> {
        -*self
    }
}

impl<C: WeierstrassParams> Mul<C::Scalar> for AffinePoint<C> {
    type Output = ProjectivePoint<C>;

    fn mul(self, scalar: C::Scalar) -> ProjectivePoint<C> {
        ProjectivePoint::from(&self) * scalar
    }
}
