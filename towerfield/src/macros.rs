//! Macros for implementing the by-reference and assigning variants of the
//! arithmetic operators in terms of the by-value ones.

/// Implements `Add`/`Sub`/`Mul` for every owned/borrowed combination, the
/// `*Assign` operators, `Neg` for references, and `Sum`/`Product`, given a
/// type whose by-value `Add`/`Sub`/`Mul`/`Neg` impls already exist.
macro_rules! impl_field_op_variants {
    (($($gen:tt)*), $t:ty) => {
        impl<$($gen)*> core::ops::Add<&$t> for $t {
            type Output = $t;

            fn add(self, rhs: &$t) -> $t {
                self + *rhs
            }
        }

        impl<$($gen)*> core::ops::Add<$t> for &$t {
            type Output = $t;

            fn add(self, rhs: $t) -> $t {
                *self + rhs
            }
        }

        impl<$($gen)*> core::ops::Add<&$t> for &$t {
            type Output = $t;

            fn add(self, rhs: &$t) -> $t {
                *self + *rhs
            }
        }

        impl<$($gen)*> core::ops::Sub<&$t> for $t {
            type Output = $t;

            fn sub(self, rhs: &$t) -> $t {
                self - *rhs
            }
        }

        impl<$($gen)*> core::ops::Sub<$t> for &$t {
            type Output = $t;

            fn sub(self, rhs: $t) -> $t {
                *self - rhs
            }
        }

        impl<$($gen)*> core::ops::Sub<&$t> for &$t {
            type Output = $t;

            fn sub(self, rhs: &$t) -> $t {
                *self - *rhs
            }
        }

        impl<$($gen)*> core::ops::Mul<&$t> for $t {
            type Output = $t;

            fn mul(self, rhs: &$t) -> $t {
                self * *rhs
            }
        }

        impl<$($gen)*> core::ops::Mul<$t> for &$t {
            type Output = $t;

            fn mul(self, rhs: $t) -> $t {
                *self * rhs
            }
        }

        impl<$($gen)*> core::ops::Mul<&$t> for &$t {
            type Output = $t;

            fn mul(self, rhs: &$t) -> $t {
                *self * *rhs
            }
        }

        impl<$($gen)*> core::ops::Neg for &$t {
            type Output = $t;

            fn neg(self) -> $t {
                -*self
            }
        }

        impl<$($gen)*> core::ops::AddAssign for $t {
            fn add_assign(&mut self, rhs: $t) {
                *self = *self + rhs;
            }
        }

        impl<$($gen)*> core::ops::AddAssign<&$t> for $t {
            fn add_assign(&mut self, rhs: &$t) {
                *self = *self + *rhs;
            }
        }

        impl<$($gen)*> core::ops::SubAssign for $t {
            fn sub_assign(&mut self, rhs: $t) {
                *self = *self - rhs;
            }
        }

        impl<$($gen)*> core::ops::SubAssign<&$t> for $t {
            fn sub_assign(&mut self, rhs: &$t) {
                *self = *self - *rhs;
            }
        }

        impl<$($gen)*> core::ops::MulAssign for $t {
            fn mul_assign(&mut self, rhs: $t) {
                *self = *self * rhs;
            }
        }

        impl<$($gen)*> core::ops::MulAssign<&$t> for $t {
            fn mul_assign(&mut self, rhs: &$t) {
                *self = *self * *rhs;
            }
        }

        impl<$($gen)*> core::iter::Sum for $t {
            fn sum<I: Iterator<Item = $t>>(iter: I) -> $t {
                iter.reduce(core::ops::Add::add).unwrap_or(<$t>::ZERO)
            }
        }

        impl<'a, $($gen)*> core::iter::Sum<&'a $t> for $t {
            fn sum<I: Iterator<Item = &'a $t>>(iter: I) -> $t {
                iter.copied().sum()
            }
        }

        impl<$($gen)*> core::iter::Product for $t {
            fn product<I: Iterator<Item = $t>>(iter: I) -> $t {
                iter.reduce(core::ops::Mul::mul).unwrap_or(<$t>::ONE)
            }
        }

        impl<'a, $($gen)*> core::iter::Product<&'a $t> for $t {
            fn product<I: Iterator<Item = &'a $t>>(iter: I) -> $t {
                iter.copied().product()
            }
        }
    };
}

pub(crate) use impl_field_op_variants;
