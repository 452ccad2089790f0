//! Axis-aligned integer regions ([`Region3i`](math::Region3i)) and the integer vectors
//! ([`IntVector3`](math::IntVector3)) they are built from.
//!
//! These are the bounds used for spatial chunks and for walking every lattice point of some
//! part of a voxel world. All types here are immutable `Copy` values.

#![no_std]
// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![cfg_attr(
    not(any(test, feature = "arbitrary")),
    warn(clippy::std_instead_of_core, clippy::std_instead_of_alloc)
)]
#![warn(clippy::missing_inline_in_public_items)]

#[cfg(any(feature = "std", test))]
#[cfg_attr(test, macro_use)]
extern crate std;
extern crate alloc;

pub mod math;

pub mod util;

// reexport for convenience of our tests
#[doc(hidden)]
pub use euclid;
