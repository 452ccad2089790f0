//! Integer vectors, regions, and the axes that index them.

mod axis;
pub use axis::*;
mod int_vector;
pub use int_vector::*;
mod region;
pub use region::*;
mod region_iter;
pub use region_iter::*;
#[cfg(feature = "serde")]
mod serde_impls;

// We make an assumption in several places that `usize` is at least 32 bits.
// It's likely that compilation would not succeed anyway, but let's make it explicit.
#[cfg(target_pointer_width = "16")]
compile_error!("lattice-region does not support platforms with less than 32-bit `usize`");

/// Sort exactly two items; swap them if `a > b`.
#[inline]
#[doc(hidden)]
pub fn sort_two<T: PartialOrd>(a: &mut T, b: &mut T) {
    if *a > *b {
        core::mem::swap(a, b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_two_orders_both_ways() {
        let (mut a, mut b) = (5, -3);
        sort_two(&mut a, &mut b);
        assert_eq!((a, b), (-3, 5));

        sort_two(&mut a, &mut b);
        assert_eq!((a, b), (-3, 5));
    }
}
