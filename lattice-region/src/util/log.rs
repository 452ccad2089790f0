//! Helpers for programs which log what they do with regions.

/// Provides the recommended log filter for programs which log through this crate.
///
/// Messages from this crate pass at every level; messages from other crates pass only at
/// [`log::Level::Info`] or more severe, so that dependency debugging output does not drown
/// out region diagnostics.
#[allow(clippy::missing_inline_in_public_items)]
pub fn standard_filter(metadata: &log::Metadata<'_>) -> bool {
    let target = metadata.target();

    target.starts_with("lattice_region") || metadata.level() <= log::Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    fn metadata(target: &str, level: Level) -> log::Metadata<'_> {
        log::Metadata::builder().target(target).level(level).build()
    }

    #[test]
    fn filter() {
        assert!(standard_filter(&metadata(
            "lattice_region::math::region",
            Level::Trace
        )));
        assert!(standard_filter(&metadata(
            "lattice_region_tool::logging",
            Level::Debug
        )));
        assert!(standard_filter(&metadata("some_random_crate", Level::Warn)));
        assert!(standard_filter(&metadata("some_random_crate", Level::Info)));
        assert!(!standard_filter(&metadata("some_random_crate", Level::Debug)));
    }
}
