//! Axis-aligned integer-coordinate box volumes ([`Region3i`]) and related.

#![allow(clippy::module_name_repetitions)]

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::RangeInclusive;

use manyfmt::Refmt as _;
use rand::Rng;

use crate::math::{Axis, IntVector3, LatticeCoordinate, RegionIter, sort_two};
use crate::util::ConciseDebug;


/// An axis-aligned box of lattice points.
///
/// A region is described by its `min` corner and its `size`; both bounds are inclusive, so the
/// region's greatest corner is `max = min + size - (1, 1, 1)`. A region containing exactly one
/// point has a size of `(1, 1, 1)` and `max == min`.
///
/// A region is **empty** when any component of its size is zero or negative. Empty regions
/// contain no points and encompass nothing. All empty regions compare equal to each other and
/// to [`Region3i::EMPTY`], even if their [`min()`](Self::min) and [`size()`](Self::size)
/// differ; non-empty regions are equal when their `min` and `size` are.
///
/// Every constructor guarantees that the `max` of a non-empty region is representable as a
/// [`LatticeCoordinate`], so none of the accessors can overflow. Constructors whose inputs
/// would violate this have `checked_` variants returning [`RegionOverflowError`]; the
/// unchecked variants panic. Empty regions accept any `min` and `size`.
///
/// Regions are immutable; operations such as [`Region3i::intersect()`] return new regions.
#[derive(Clone, Copy)]
pub struct Region3i {
    min: IntVector3,
    /// Constructor checks ensure that `min + size - 1` does not overflow unless the region
    /// is empty.
    size: IntVector3,
}

impl Region3i {
    /// The canonical empty region, with `min` and `size` both zero.
    ///
    /// This is also the [`Default`] value.
    pub const EMPTY: Region3i = Region3i {
        min: IntVector3::ZERO,
        size: IntVector3::ZERO,
    };

    /// Returns [`Region3i::EMPTY`].
    #[inline]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Constructs a [`Region3i`] from its least corner and its size.
    ///
    /// Both inputs are stored verbatim. If any component of `size` is zero or negative, the
    /// region is empty, but [`min()`](Self::min), [`size()`](Self::size) and
    /// [`max()`](Self::max) still report the stored values.
    ///
    /// ```
    /// use lattice_region::math::{IntVector3, Region3i};
    ///
    /// let region = Region3i::from_min_and_size([3, 4, 5], [8, 5, 2]);
    /// assert_eq!(region.max(), IntVector3::new(10, 8, 6));
    ///
    /// let flat = Region3i::from_min_and_size([1, 1, 1], [0, 1, 1]);
    /// assert!(flat.is_empty());
    /// assert_eq!(flat.min(), IntVector3::new(1, 1, 1));
    /// ```
    ///
    /// Panics if the region is non-empty and `min + size - 1` overflows.
    /// Use [`Region3i::checked_from_min_and_size()`] to avoid panics.
    #[track_caller]
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn from_min_and_size(min: impl Into<IntVector3>, size: impl Into<IntVector3>) -> Self {
        Self::checked_from_min_and_size(min, size).expect("Region3i::from_min_and_size")
    }

    /// Constructs a [`Region3i`] from its least corner and its size.
    ///
    /// Returns [`Err`] if the region is non-empty and its greatest corner,
    /// `min + size - 1`, is not representable.
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn checked_from_min_and_size(
        min: impl Into<IntVector3>,
        size: impl Into<IntVector3>,
    ) -> Result<Self, RegionOverflowError> {
        fn inner(min: IntVector3, size: IntVector3) -> Result<Region3i, RegionOverflowError> {
            let region = Region3i { min, size };
            if !region.is_empty()
                && Axis::ALL
                    .into_iter()
                    .any(|axis| derive_max(min[axis], size[axis]).is_none())
            {
                return Err(RegionOverflowError(OverflowKind::MaxOverflowed { min, size }));
            }
            Ok(region)
        }

        inner(min.into(), size.into())
    }

    /// Constructs a [`Region3i`] from its inclusive least and greatest corners.
    ///
    /// The size is computed as `max - min + (1, 1, 1)`. If `max` is less than `min` on any
    /// axis, the region is empty, and [`Region3i::EMPTY`] is returned.
    ///
    /// ```
    /// use lattice_region::math::{IntVector3, Region3i};
    ///
    /// let region = Region3i::from_min_max([1, 1, 1], [3, 3, 3]);
    /// assert_eq!(region.size(), IntVector3::new(3, 3, 3));
    ///
    /// assert!(Region3i::from_min_max([0, 0, 0], [-1, 0, 0]).is_empty());
    /// ```
    ///
    /// Panics if the size is not representable; this happens only when the region spans
    /// more than [`LatticeCoordinate::MAX`] points on some axis.
    /// Use [`Region3i::checked_from_min_max()`] to avoid panics.
    #[track_caller]
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn from_min_max(min: impl Into<IntVector3>, max: impl Into<IntVector3>) -> Self {
        Self::checked_from_min_max(min, max).expect("Region3i::from_min_max")
    }

    /// Constructs a [`Region3i`] from its inclusive least and greatest corners.
    ///
    /// Returns [`Err`] if the region is non-empty and its size is not representable.
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn checked_from_min_max(
        min: impl Into<IntVector3>,
        max: impl Into<IntVector3>,
    ) -> Result<Self, RegionOverflowError> {
        fn inner(min: IntVector3, max: IntVector3) -> Result<Region3i, RegionOverflowError> {
            if Axis::ALL.into_iter().any(|axis| max[axis] < min[axis]) {
                return Ok(Region3i::EMPTY);
            }
            let mut size = IntVector3::ZERO;
            for axis in Axis::ALL {
                let axis_size = i64::from(max[axis]) - i64::from(min[axis]) + 1;
                size[axis] = LatticeCoordinate::try_from(axis_size)
                    .map_err(|_| RegionOverflowError(OverflowKind::SizeOverflowed { min, max }))?;
            }
            // max is given and representable, so the min + size - 1 check cannot fail.
            Ok(Region3i { min, size })
        }

        inner(min.into(), max.into())
    }

    /// Constructs the region whose opposite corners are `a` and `b`, in either order.
    ///
    /// On each axis independently, the lesser coordinate becomes the region's minimum and
    /// the greater its maximum. The result is never empty.
    ///
    /// ```
    /// use lattice_region::math::Region3i;
    ///
    /// assert_eq!(
    ///     Region3i::bounded([4, 4, -16], [-2, 107, 0]),
    ///     Region3i::from_min_max([-2, 4, -16], [4, 107, 0]),
    /// );
    /// ```
    ///
    /// Panics if the size is not representable, as per [`Region3i::from_min_max()`].
    #[track_caller]
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn bounded(a: impl Into<IntVector3>, b: impl Into<IntVector3>) -> Self {
        Self::checked_bounded(a, b).expect("Region3i::bounded")
    }

    /// Constructs the region whose opposite corners are `a` and `b`, in either order.
    ///
    /// Returns [`Err`] if the size is not representable.
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn checked_bounded(
        a: impl Into<IntVector3>,
        b: impl Into<IntVector3>,
    ) -> Result<Self, RegionOverflowError> {
        let mut min = a.into();
        let mut max = b.into();
        for axis in Axis::ALL {
            sort_two(&mut min[axis], &mut max[axis]);
        }
        Self::checked_from_min_max(min, max)
    }

    /// Constructs a [`Region3i`] containing exactly the given point.
    #[inline]
    pub fn single_point(point: impl Into<IntVector3>) -> Self {
        // A size of 1 can never overflow the max computation.
        Region3i {
            min: point.into(),
            size: IntVector3::ONE,
        }
    }

    /// Constructs the region extending `extents` points from `center` in both directions on
    /// each axis; that is, from `center - extents` to `center + extents` inclusive.
    ///
    /// If any component of `extents` is negative, the region is empty.
    ///
    /// ```
    /// use lattice_region::math::{IntVector3, Region3i};
    ///
    /// let region = Region3i::from_center_extents([0, 10, 0], [1, 0, 2]);
    /// assert_eq!(region, Region3i::from_min_max([-1, 10, -2], [1, 10, 2]));
    /// assert_eq!(region.size(), IntVector3::new(3, 1, 5));
    /// ```
    ///
    /// Panics if the corners or size overflow.
    #[track_caller]
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn from_center_extents(
        center: impl Into<IntVector3>,
        extents: impl Into<IntVector3>,
    ) -> Self {
        let center = center.into();
        let extents = extents.into();
        Self::from_min_max(
            center
                .checked_sub(extents)
                .expect("Region3i::from_center_extents overflowed"),
            center
                .checked_add(extents)
                .expect("Region3i::from_center_extents overflowed"),
        )
    }

    /// The least corner of the region, as given when it was constructed.
    #[inline]
    pub const fn min(&self) -> IntVector3 {
        self.min
    }

    /// The greatest corner of the region, inclusive; equal to
    /// `self.min() + self.size() - (1, 1, 1)`.
    ///
    /// An empty region has no greatest point. For one, the same formula is used, but each
    /// component saturates at the limits of [`LatticeCoordinate`] instead of overflowing.
    #[inline]
    pub fn max(&self) -> IntVector3 {
        let mut max = self.min;
        for axis in Axis::ALL {
            max[axis] = saturating_max(self.min[axis], self.size[axis]);
        }
        max
    }

    /// The number of lattice points along each axis, as given when it was constructed.
    #[inline]
    pub const fn size(&self) -> IntVector3 {
        self.size
    }

    /// Returns whether the region contains no points; that is, whether any component of
    /// its size is zero or negative.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.size.x <= 0 || self.size.y <= 0 || self.size.z <= 0
    }

    /// Computes the number of lattice points in this region, i.e. the product of all sizes,
    /// or zero if it is empty.
    ///
    /// Returns [`None`] if the volume does not fit in a `usize`.
    ///
    /// ```
    /// use lattice_region::math::Region3i;
    ///
    /// let a = Region3i::from_min_and_size([-10, 3, 7], [100, 200, 300]);
    /// assert_eq!(a.volume(), Some(6_000_000));
    ///
    /// let b = Region3i::from_min_and_size([0, 0, 0], [100, -200, 300]);
    /// assert_eq!(b.volume(), Some(0));
    /// ```
    #[inline]
    pub fn volume(&self) -> Option<usize> {
        if self.is_empty() {
            return Some(0);
        }
        // Sizes are positive here, and usize is at least 32 bits, so these conversions
        // cannot fail.
        let width = usize::try_from(self.size.x).ok()?;
        let height = usize::try_from(self.size.y).ok()?;
        let depth = usize::try_from(self.size.z).ok()?;
        width.checked_mul(height)?.checked_mul(depth)
    }

    /// The range of X coordinates of points within the region.
    #[inline]
    pub fn x_range(&self) -> RangeInclusive<LatticeCoordinate> {
        self.axis_range(Axis::X)
    }

    /// The range of Y coordinates of points within the region.
    #[inline]
    pub fn y_range(&self) -> RangeInclusive<LatticeCoordinate> {
        self.axis_range(Axis::Y)
    }

    /// The range of Z coordinates of points within the region.
    #[inline]
    pub fn z_range(&self) -> RangeInclusive<LatticeCoordinate> {
        self.axis_range(Axis::Z)
    }

    /// The inclusive range of coordinates of points within the region along the given axis.
    ///
    /// The range is empty on exactly those axes where the size is zero or negative.
    #[inline]
    pub fn axis_range(&self, axis: Axis) -> RangeInclusive<LatticeCoordinate> {
        let min = self.min[axis];
        let size = self.size[axis];
        match derive_max(min, size) {
            Some(max) => min..=max,
            // Only reachable in empty regions.
            None if size > 0 => min..=LatticeCoordinate::MAX,
            // `min + size - 1` is below the representable range, so `min` is at most zero.
            None => (min + 1)..=min,
        }
    }

    /// Iterate over all points that this region contains.
    ///
    /// The order is X-major: X varies slowest and Z fastest, as in a triple loop
    /// `for x { for y { for z { ... } } }`. An empty region produces no points.
    /// Each call returns an independent iterator.
    ///
    /// ```
    /// use lattice_region::math::{IntVector3, Region3i};
    ///
    /// let region = Region3i::from_min_and_size([10, 20, 30], [1, 2, 3]);
    /// assert_eq!(
    ///     region.iter().collect::<Vec<IntVector3>>(),
    ///     &[
    ///         IntVector3::new(10, 20, 30),
    ///         IntVector3::new(10, 20, 31),
    ///         IntVector3::new(10, 20, 32),
    ///         IntVector3::new(10, 21, 30),
    ///         IntVector3::new(10, 21, 31),
    ///         IntVector3::new(10, 21, 32),
    ///     ]
    /// );
    /// ```
    #[inline]
    pub fn iter(&self) -> RegionIter {
        RegionIter::new(*self)
    }

    /// Returns whether the region includes the given point.
    ///
    /// An empty region encompasses nothing.
    ///
    /// ```
    /// use lattice_region::math::Region3i;
    ///
    /// let region = Region3i::from_min_max([4, 4, 4], [9, 9, 9]);
    /// assert!(!region.encompasses([3, 5, 5].into()));
    /// assert!(region.encompasses([4, 5, 5].into()));
    /// assert!(region.encompasses([9, 5, 5].into()));
    /// assert!(!region.encompasses([10, 5, 5].into()));
    /// ```
    #[inline]
    pub fn encompasses(&self, point: IntVector3) -> bool {
        if self.is_empty() {
            return false;
        }
        let max = self.max();
        Axis::ALL
            .into_iter()
            .all(|axis| self.min[axis] <= point[axis] && point[axis] <= max[axis])
    }

    /// Returns whether this region includes every point of `other`.
    ///
    /// Every region encompasses every empty region; an empty region encompasses only
    /// empty regions.
    ///
    /// ```
    /// use lattice_region::math::Region3i;
    ///
    /// let outer = Region3i::from_min_max([0, 0, 0], [32, 32, 32]);
    /// assert!(outer.encompasses_region(Region3i::from_min_max([1, 1, 1], [17, 17, 17])));
    /// assert!(!outer.encompasses_region(Region3i::from_min_max([1, 1, 1], [33, 17, 17])));
    /// assert!(outer.encompasses_region(Region3i::EMPTY));
    /// ```
    #[inline]
    pub fn encompasses_region(&self, other: Region3i) -> bool {
        if other.is_empty() {
            return true;
        }
        if self.is_empty() {
            return false;
        }
        let self_max = self.max();
        let other_max = other.max();
        Axis::ALL.into_iter().all(|axis| {
            other.min[axis] >= self.min[axis] && other_max[axis] <= self_max[axis]
        })
    }

    /// Returns the region containing every point that both `self` and `other` do.
    ///
    /// If there are no such points, the result is empty; check it with
    /// [`is_empty()`](Self::is_empty).
    ///
    /// ```
    /// use lattice_region::math::Region3i;
    ///
    /// let a = Region3i::from_min_max([0, 0, 0], [32, 32, 32]);
    /// assert_eq!(
    ///     a.intersect(Region3i::from_min_max([16, -5, 30], [40, 5, 31])),
    ///     Region3i::from_min_max([16, 0, 30], [32, 5, 31]),
    /// );
    ///
    /// let far = Region3i::from_min_max([103, 103, 103], [170, 170, 170]);
    /// assert!(a.intersect(far).is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn intersect(&self, other: Region3i) -> Region3i {
        if self.is_empty() || other.is_empty() {
            return Self::EMPTY;
        }
        // The intersection is no larger than either input, so this cannot fail.
        Self::from_min_max(self.min.max(other.min), self.max().min(other.max()))
    }

    /// Returns the smallest region which contains every point of both `self` and `other`.
    ///
    /// Empty regions are ignored. If both inputs are empty, `self` is returned.
    ///
    /// ```
    /// use lattice_region::math::Region3i;
    ///
    /// let a = Region3i::single_point([1, 2, 3]);
    /// let b = Region3i::single_point([4, 7, 11]);
    /// assert_eq!(a.encompassing(b), Region3i::from_min_max([1, 2, 3], [4, 7, 11]));
    /// assert_eq!(a.encompassing(Region3i::EMPTY), a);
    /// ```
    ///
    /// Panics if the size of the result is not representable.
    #[inline]
    #[must_use]
    #[track_caller]
    pub fn encompassing(&self, other: Region3i) -> Region3i {
        if other.is_empty() {
            *self
        } else if self.is_empty() {
            other
        } else {
            Self::from_min_max(self.min.min(other.min), self.max().max(other.max()))
        }
    }

    /// Returns the point of the region closest to `point`, computed by clamping each
    /// coordinate of `point` into the region's range on that axis.
    ///
    /// Points already inside the region are returned unchanged. Points outside are pulled
    /// to the boundary independently per axis, which may land on an edge or corner.
    ///
    /// An empty region has no points to choose from; in that case, this returns
    /// [`min()`](Self::min).
    ///
    /// ```
    /// use lattice_region::math::{IntVector3, Region3i};
    ///
    /// let region = Region3i::from_min_max([0, 0, 0], [4, 4, 4]);
    /// assert_eq!(region.nearest_point_to([2, 1, 1].into()), IntVector3::new(2, 1, 1));
    /// assert_eq!(region.nearest_point_to([15, 2, 1].into()), IntVector3::new(4, 2, 1));
    /// assert_eq!(region.nearest_point_to([15, 12, 7].into()), IntVector3::new(4, 4, 4));
    /// ```
    #[inline]
    pub fn nearest_point_to(&self, point: IntVector3) -> IntVector3 {
        if self.is_empty() {
            return self.min;
        }
        let max = self.max();
        let mut nearest = point;
        for axis in Axis::ALL {
            nearest[axis] = nearest[axis].clamp(self.min[axis], max[axis]);
        }
        nearest
    }

    /// Displaces the region by the given `offset`, leaving its size unchanged.
    ///
    /// An empty region has nothing to displace, so the result is [`Region3i::EMPTY`].
    ///
    /// ```
    /// use lattice_region::math::Region3i;
    ///
    /// assert_eq!(
    ///     Region3i::from_min_and_size([0, 0, 0], [10, 20, 30]).translate([-10, 0, 0]),
    ///     Region3i::from_min_and_size([-10, 0, 0], [10, 20, 30]),
    /// );
    /// ```
    ///
    /// Panics if the new corners overflow.
    #[must_use]
    #[track_caller]
    #[allow(clippy::missing_inline_in_public_items, reason = "already generic")]
    pub fn translate(&self, offset: impl Into<IntVector3>) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        let min = self
            .min
            .checked_add(offset.into())
            .expect("Region3i::translate overflowed");
        Self::from_min_and_size(min, self.size)
    }

    /// Moves the bounds outward by `amount` on both sides of each axis (inward, for negative
    /// components), so that the size grows by twice `amount`.
    ///
    /// Shrinking past zero size produces an empty region. Expanding an empty region produces
    /// [`Region3i::EMPTY`], since it has no bounds to move.
    ///
    /// ```
    /// use lattice_region::math::Region3i;
    ///
    /// let region = Region3i::from_min_max([10, 10, 10], [20, 20, 20]);
    /// assert_eq!(
    ///     region.expand([1, 0, -2]),
    ///     Region3i::from_min_max([9, 10, 12], [21, 20, 18]),
    /// );
    /// assert!(region.expand([0, -6, 0]).is_empty());
    /// ```
    ///
    /// Panics on numeric overflow.
    #[must_use]
    #[track_caller]
    #[allow(clippy::missing_inline_in_public_items, reason = "already generic")]
    pub fn expand(&self, amount: impl Into<IntVector3>) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        let amount = amount.into();
        let (Some(min), Some(size)) = (
            self.min.checked_sub(amount),
            amount
                .checked_add(amount)
                .and_then(|twice| self.size.checked_add(twice)),
        ) else {
            panic!("Region3i::expand overflowed");
        };
        Self::from_min_and_size(min, size)
    }

    /// Returns a random point contained by the region, if there are any.
    ///
    /// ```
    /// use lattice_region::math::Region3i;
    /// use rand::SeedableRng;
    ///
    /// let rng = &mut rand_xoshiro::Xoshiro256Plus::seed_from_u64(0);
    ///
    /// let region = Region3i::from_min_and_size([4, 4, 4], [6, 6, 6]);
    /// for _ in 0..50 {
    ///     assert!(region.encompasses(region.random_point(rng).unwrap()));
    /// }
    ///
    /// let empty = Region3i::from_min_and_size([1, 2, 3], [0, 9, 9]);
    /// assert_eq!(empty.random_point(rng), None);
    /// ```
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn random_point(&self, rng: &mut impl Rng) -> Option<IntVector3> {
        if self.is_empty() {
            None
        } else {
            Some(IntVector3::new(
                rng.random_range(self.x_range()),
                rng.random_range(self.y_range()),
                rng.random_range(self.z_range()),
            ))
        }
    }
}

/// Computes `min + size - 1` for one axis, if it is representable.
fn derive_max(min: LatticeCoordinate, size: LatticeCoordinate) -> Option<LatticeCoordinate> {
    LatticeCoordinate::try_from(i64::from(min) + i64::from(size) - 1).ok()
}

/// Computes `min + size - 1` for one axis, clamped to the representable range.
fn saturating_max(min: LatticeCoordinate, size: LatticeCoordinate) -> LatticeCoordinate {
    derive_max(min, size).unwrap_or(if size > 0 {
        LatticeCoordinate::MAX
    } else {
        LatticeCoordinate::MIN
    })
}

impl Default for Region3i {
    #[inline]
    fn default() -> Self {
        Self::EMPTY
    }
}

impl PartialEq for Region3i {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => true,
            (false, false) => self.min == other.min && self.size == other.size,
            _ => false,
        }
    }
}
impl Eq for Region3i {}

impl Hash for Region3i {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must agree with `PartialEq`: all empty regions hash alike.
        if self.is_empty() {
            state.write_u8(0);
        } else {
            state.write_u8(1);
            self.min.hash(state);
            self.size.hash(state);
        }
    }
}

impl IntoIterator for Region3i {
    type Item = IntVector3;
    type IntoIter = RegionIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        RegionIter::new(self)
    }
}

impl IntoIterator for &Region3i {
    type Item = IntVector3;
    type IntoIter = RegionIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        RegionIter::new(*self)
    }
}

impl fmt::Debug for Region3i {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Region3i")
            .field(&RangeWithLength(self.x_range()))
            .field(&RangeWithLength(self.y_range()))
            .field(&RangeWithLength(self.z_range()))
            .finish()
    }
}

impl manyfmt::Fmt<ConciseDebug> for Region3i {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>, fopt: &ConciseDebug) -> fmt::Result {
        if self.is_empty() {
            write!(f, "empty")
        } else {
            write!(
                f,
                "{}..={}",
                self.min.refmt(fopt),
                self.max().refmt(fopt)
            )
        }
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Region3i {
    #[allow(clippy::missing_inline_in_public_items)]
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        use arbitrary::Arbitrary as _;
        Region3i::checked_from_min_and_size(IntVector3::arbitrary(u)?, IntVector3::arbitrary(u)?)
            .map_err(|_| arbitrary::Error::IncorrectFormat)
    }

    #[allow(clippy::missing_inline_in_public_items)]
    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        let vector = <IntVector3 as arbitrary::Arbitrary<'a>>::size_hint(depth);
        arbitrary::size_hint::and(vector, vector)
    }
}

/// Error when a [`Region3i`] cannot be constructed from the given input because its
/// corners or size would not be representable.
#[derive(Clone, Copy, Debug, displaydoc::Display, Eq, PartialEq)]
#[displaydoc("{0}")]
pub struct RegionOverflowError(OverflowKind);

/// Error details for [`RegionOverflowError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum OverflowKind {
    MaxOverflowed { min: IntVector3, size: IntVector3 },
    SizeOverflowed { min: IntVector3, max: IntVector3 },
}

impl fmt::Display for OverflowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverflowKind::MaxOverflowed { min, size } => write!(
                f,
                "region min {min} plus size {size} overflows",
                min = min.refmt(&ConciseDebug),
                size = size.refmt(&ConciseDebug),
            ),
            OverflowKind::SizeOverflowed { min, max } => write!(
                f,
                "region from {min} to {max} is too large; its size overflows",
                min = min.refmt(&ConciseDebug),
                max = max.refmt(&ConciseDebug),
            ),
        }
    }
}

impl core::error::Error for RegionOverflowError {}

/// `Debug`-formatting helper
struct RangeWithLength(RangeInclusive<LatticeCoordinate>);
impl fmt::Debug for RangeWithLength {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let range = &self.0;
        if f.alternate() {
            write!(
                f,
                "{range:?} ({len})",
                len = i64::from(*range.end()) - i64::from(*range.start()) + 1
            )
        } else {
            range.fmt(f)
        }
    }
}
