//! Formatting, logging and testing helpers shared by the rest of the crate.

mod custom_format;
pub use custom_format::*;

pub mod log;

#[doc(hidden)] // for use in internal tests only
#[allow(clippy::missing_inline_in_public_items)]
pub fn assert_send_sync<T: Send + Sync>() {
    // The call to this function having been successfully compiled is the assertion.
}
