//! Library half of the `lattice-region` command-line tool.
//!
//! Argument parsing lives in the binary; this crate holds the logging setup and the
//! [`Query`] evaluation so that both can be tested without spawning a process.

// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![forbid(unsafe_code)]

pub mod logging;

mod query;
pub use query::{Query, execute};
