#![allow(clippy::missing_inline_in_public_items)]

use core::fmt;

use manyfmt::{Fmt, Refmt as _};

/// Format type for [`manyfmt::Fmt`] which is similar to [`fmt::Debug`], but uses an
/// alternate concise format.
///
/// Vectors are written as signed tuples like `(+1, -2, +0)`, and regions as the range
/// between their corners, or `empty`.
#[expect(clippy::exhaustive_structs)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ConciseDebug;

impl<T: Fmt<ConciseDebug>, const N: usize> Fmt<ConciseDebug> for [T; N] {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>, fopt: &ConciseDebug) -> fmt::Result {
        fmt.debug_list()
            .entries(self.iter().map(|item| item.refmt(fopt)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{IntVector3, Region3i};

    #[test]
    fn array_of_vectors() {
        let vectors = [IntVector3::new(3, 0, -3), IntVector3::new(-7, 8, 9)];
        assert_eq!(
            format!("{}", vectors.refmt(&ConciseDebug)),
            "[(+3, +0, -3), (-7, +8, +9)]"
        );
    }

    #[test]
    fn array_of_regions() {
        let regions = [
            Region3i::from_min_max([0, 0, 0], [1, 2, 3]),
            Region3i::from_min_and_size([5, 5, 5], [0, 1, 1]),
        ];
        assert_eq!(
            format!("{}", regions.refmt(&ConciseDebug)),
            "[(+0, +0, +0)..=(+1, +2, +3), empty]"
        );
    }
}
