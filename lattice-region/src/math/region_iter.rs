use core::cmp::Ordering;
use core::iter::FusedIterator;

use crate::math::{IntVector3, Region3i};

/// Iterator produced by [`Region3i::iter()`].
///
/// Produces every point of the region exactly once, with X varying slowest and Z fastest.
#[derive(Clone, Debug)]
pub struct RegionIter {
    bounds: Region3i,
    /// Cached `bounds.max()`.
    max: IntVector3,
    /// The next point to produce, or [`None`] if the iterator is exhausted.
    point: Option<IntVector3>,
}

impl RegionIter {
    #[inline]
    pub(in crate::math) fn new(bounds: Region3i) -> Self {
        Self {
            bounds,
            max: bounds.max(),
            point: if bounds.is_empty() {
                None
            } else {
                Some(bounds.min())
            },
        }
    }

    /// Returns the region which this iterator iterates over.
    /// This may be larger than the set of points remaining, but it will not be smaller.
    #[inline]
    pub fn bounds(&self) -> Region3i {
        self.bounds
    }

    /// Returns whether the iterator will produce the given point.
    #[inline]
    pub fn contains(&self, point: IntVector3) -> bool {
        let Some(next) = self.point else {
            return false;
        };
        if !self.bounds.encompasses(point) {
            return false;
        }
        match point.x.cmp(&next.x) {
            Ordering::Greater => true, // in a plane not yet emitted
            Ordering::Less => false,   // in a plane already emitted
            Ordering::Equal => match point.y.cmp(&next.y) {
                Ordering::Greater => true, // in a row not yet emitted
                Ordering::Less => false,   // in a row already emitted
                Ordering::Equal => point.z >= next.z,
            },
        }
    }

    /// Number of points not yet produced, if it fits in `usize`.
    fn remaining(&self) -> Option<usize> {
        let Some(next) = self.point else {
            return Some(0);
        };
        let size = self.bounds.size();
        // All differences here are non-negative and fit in u32.
        let to_usize = |n: i64| usize::try_from(n).ok();

        let planes_after = to_usize(i64::from(self.max.x) - i64::from(next.x))?;
        let rows_after = to_usize(i64::from(self.max.y) - i64::from(next.y))?;
        let points_in_row = to_usize(i64::from(self.max.z) - i64::from(next.z) + 1)?;
        let row_len = to_usize(i64::from(size.z))?;
        let plane_len = to_usize(i64::from(size.y))?.checked_mul(row_len)?;

        planes_after
            .checked_mul(plane_len)?
            .checked_add(rows_after.checked_mul(row_len)?)?
            .checked_add(points_in_row)
    }
}

impl Iterator for RegionIter {
    type Item = IntVector3;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let result = self.point?;
        let min = self.bounds.min();
        let max = self.max;

        // Compare before incrementing, so that a region ending at the maximum coordinate
        // never computes an out-of-range successor.
        self.point = if result.z < max.z {
            Some(IntVector3::new(result.x, result.y, result.z + 1))
        } else if result.y < max.y {
            Some(IntVector3::new(result.x, result.y + 1, min.z))
        } else if result.x < max.x {
            Some(IntVector3::new(result.x + 1, min.y, min.z))
        } else {
            None
        };

        Some(result)
    }

    #[allow(clippy::missing_inline_in_public_items, reason = "unclear benefit")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }

    #[allow(clippy::missing_inline_in_public_items, reason = "unclear benefit")]
    fn count(self) -> usize {
        self.remaining().expect("RegionIter::count overflowed usize")
    }

    // Override fold() to achieve greater performance via simpler iteration.
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    fn fold<B, F>(mut self, init: B, mut f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        let mut state = init;
        let min = self.bounds.min();

        // First, if the iterator has already been partly advanced, advance it until the
        // remaining points form whole planes.
        #[cold]
        #[inline(never)]
        fn cold_next(i: &mut RegionIter) -> Option<IntVector3> {
            i.next()
        }
        loop {
            match self.point {
                None => return state,
                Some(point) if point.y == min.y && point.z == min.z => break,
                Some(_) => {
                    if let Some(point) = cold_next(&mut self) {
                        state = f(state, point);
                    }
                }
            }
        }

        let Some(start) = self.point else {
            return state;
        };
        for x in start.x..=self.max.x {
            for y in min.y..=self.max.y {
                for z in min.z..=self.max.z {
                    state = f(state, IntVector3::new(x, y, z));
                }
            }
        }

        state
    }
}

impl FusedIterator for RegionIter {}
