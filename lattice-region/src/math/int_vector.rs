//! Numeric types used for lattice coordinates.

#![allow(clippy::module_name_repetitions)]

use core::fmt;

use crate::math::Axis;
use crate::util::ConciseDebug;

/// Coordinates of lattice points, and components of region sizes.
pub type LatticeCoordinate = i32;

/// A triple of integers, used both as a lattice point and as the size (extent) of a
/// [`Region3i`](crate::math::Region3i).
///
/// This is a plain value: two vectors with equal components are equal and hash identically,
/// and there is no ordering. Arithmetic is component-wise.
///
/// # Overflow
///
/// The operator implementations (`+`, `-`, and so on) use ordinary integer arithmetic and so
/// panic on overflow when overflow checks are enabled (they are, in every profile of this
/// workspace). Use [`IntVector3::checked_add()`] and friends to handle overflow explicitly.
///
/// # Representation
///
/// This struct is guaranteed to be three `i32` without padding, and so may be reinterpreted
/// as any type of identical layout such as `[i32; 3]`.
#[derive(Clone, Copy, Default, Eq, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[allow(missing_docs, clippy::exhaustive_structs)]
#[repr(C)]
pub struct IntVector3 {
    pub x: LatticeCoordinate,
    pub y: LatticeCoordinate,
    pub z: LatticeCoordinate,
}

impl core::hash::Hash for IntVector3 {
    #[inline]
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        // Hashers work on 64-bit quantities.
        // Therefore, it may be more efficient to provide fewer inputs by packing the data into
        // chunks of at most 64 bits.
        (u64::from(self.x.cast_unsigned()) ^ (u64::from(self.y.cast_unsigned()) << 32)).hash(state);
        self.z.hash(state);
    }
}

impl IntVector3 {
    /// Equal to `IntVector3::new(0, 0, 0)`.
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// Equal to `IntVector3::new(1, 1, 1)`; the size of a single-point region.
    pub const ONE: Self = Self::new(1, 1, 1);

    /// Construct `IntVector3 { x, y, z }` from the given coordinates.
    #[inline]
    pub const fn new(x: LatticeCoordinate, y: LatticeCoordinate, z: LatticeCoordinate) -> Self {
        Self { x, y, z }
    }

    /// Construct a vector with all three components equal to `value`.
    #[inline]
    pub const fn splat(value: LatticeCoordinate) -> Self {
        Self::new(value, value, value)
    }

    /// Component-wise minimum.
    ///
    /// ```
    /// use lattice_region::math::IntVector3;
    ///
    /// assert_eq!(
    ///     IntVector3::new(1, 5, -3).min(IntVector3::new(2, 4, -3)),
    ///     IntVector3::new(1, 4, -3),
    /// );
    /// ```
    #[inline]
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        self.zip(other, LatticeCoordinate::min)
    }

    /// Component-wise maximum.
    #[inline]
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        self.zip(other, LatticeCoordinate::max)
    }

    /// Componentwise [`LatticeCoordinate::checked_add()`].
    #[must_use]
    #[inline]
    pub fn checked_add(self, v: Self) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(v.x)?,
            y: self.y.checked_add(v.y)?,
            z: self.z.checked_add(v.z)?,
        })
    }

    /// Componentwise [`LatticeCoordinate::checked_sub()`].
    #[must_use]
    #[inline]
    pub fn checked_sub(self, v: Self) -> Option<Self> {
        Some(Self {
            x: self.x.checked_sub(v.x)?,
            y: self.y.checked_sub(v.y)?,
            z: self.z.checked_sub(v.z)?,
        })
    }

    /// Componentwise [`LatticeCoordinate::wrapping_add()`].
    #[must_use]
    #[inline]
    pub fn wrapping_add(self, v: Self) -> Self {
        self.zip(v, LatticeCoordinate::wrapping_add)
    }

    /// Componentwise [`LatticeCoordinate::wrapping_sub()`].
    #[must_use]
    #[inline]
    pub fn wrapping_sub(self, v: Self) -> Self {
        self.zip(v, LatticeCoordinate::wrapping_sub)
    }

    /// Apply a function to each coordinate independently.
    #[expect(clippy::return_self_not_must_use)]
    #[inline]
    pub fn map(self, mut f: impl FnMut(LatticeCoordinate) -> LatticeCoordinate) -> Self {
        Self {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
        }
    }

    /// Apply a function to each pair of corresponding coordinates of `self` and `other`.
    #[expect(clippy::return_self_not_must_use)]
    #[inline]
    pub fn zip(
        self,
        other: Self,
        mut f: impl FnMut(LatticeCoordinate, LatticeCoordinate) -> LatticeCoordinate,
    ) -> Self {
        Self {
            x: f(self.x, other.x),
            y: f(self.y, other.y),
            z: f(self.z, other.z),
        }
    }
}

impl fmt::Debug for IntVector3 {
    #[allow(clippy::missing_inline_in_public_items)]
    #[mutants::skip]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { x, y, z } = self;
        write!(f, "({x:+?}, {y:+?}, {z:+?})")
    }
}
impl manyfmt::Fmt<ConciseDebug> for IntVector3 {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>, _: &ConciseDebug) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

mod arithmetic {
    use super::*;
    use core::ops;

    impl ops::Add for IntVector3 {
        type Output = Self;
        #[inline]
        fn add(self, rhs: Self) -> Self::Output {
            Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
        }
    }
    impl ops::AddAssign for IntVector3 {
        #[inline]
        fn add_assign(&mut self, rhs: Self) {
            *self = *self + rhs;
        }
    }

    impl ops::Sub for IntVector3 {
        type Output = Self;
        #[inline]
        fn sub(self, rhs: Self) -> Self::Output {
            Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
        }
    }
    impl ops::SubAssign for IntVector3 {
        #[inline]
        fn sub_assign(&mut self, rhs: Self) {
            *self = *self - rhs;
        }
    }

    impl ops::Neg for IntVector3 {
        type Output = Self;
        #[inline]
        fn neg(self) -> Self::Output {
            Self::new(-self.x, -self.y, -self.z)
        }
    }

    impl ops::Mul<LatticeCoordinate> for IntVector3 {
        type Output = Self;
        #[inline]
        fn mul(self, rhs: LatticeCoordinate) -> Self::Output {
            Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
        }
    }

    impl ops::Index<Axis> for IntVector3 {
        type Output = LatticeCoordinate;
        #[inline]
        fn index(&self, index: Axis) -> &Self::Output {
            match index {
                Axis::X => &self.x,
                Axis::Y => &self.y,
                Axis::Z => &self.z,
            }
        }
    }
    impl ops::IndexMut<Axis> for IntVector3 {
        #[inline]
        fn index_mut(&mut self, index: Axis) -> &mut Self::Output {
            match index {
                Axis::X => &mut self.x,
                Axis::Y => &mut self.y,
                Axis::Z => &mut self.z,
            }
        }
    }
}

mod conversion {
    use super::*;
    use euclid::{Point3D, Vector3D};

    impl AsRef<[LatticeCoordinate; 3]> for IntVector3 {
        #[inline]
        fn as_ref(&self) -> &[LatticeCoordinate; 3] {
            bytemuck::must_cast_ref(self)
        }
    }
    impl AsMut<[LatticeCoordinate; 3]> for IntVector3 {
        #[inline]
        fn as_mut(&mut self) -> &mut [LatticeCoordinate; 3] {
            bytemuck::must_cast_mut(self)
        }
    }

    impl From<IntVector3> for [LatticeCoordinate; 3] {
        #[inline]
        fn from(IntVector3 { x, y, z }: IntVector3) -> [LatticeCoordinate; 3] {
            [x, y, z]
        }
    }
    impl From<[LatticeCoordinate; 3]> for IntVector3 {
        #[inline]
        fn from([x, y, z]: [LatticeCoordinate; 3]) -> Self {
            Self { x, y, z }
        }
    }

    // Conversions to and from `euclid`, for callers whose spatial code is written in its terms.
    // Any unit type is accepted since `IntVector3` does not have one.
    impl<U> From<IntVector3> for Point3D<LatticeCoordinate, U> {
        #[inline]
        fn from(IntVector3 { x, y, z }: IntVector3) -> Self {
            Point3D::new(x, y, z)
        }
    }
    impl<U> From<Point3D<LatticeCoordinate, U>> for IntVector3 {
        #[inline]
        fn from(Point3D { x, y, z, .. }: Point3D<LatticeCoordinate, U>) -> Self {
            Self { x, y, z }
        }
    }
    impl<U> From<IntVector3> for Vector3D<LatticeCoordinate, U> {
        #[inline]
        fn from(IntVector3 { x, y, z }: IntVector3) -> Self {
            Vector3D::new(x, y, z)
        }
    }
    impl<U> From<Vector3D<LatticeCoordinate, U>> for IntVector3 {
        #[inline]
        fn from(Vector3D { x, y, z, .. }: Vector3D<LatticeCoordinate, U>) -> Self {
            Self { x, y, z }
        }
    }
}
