/// Enumeration of the axes of three-dimensional space.
///
/// Indexes [`IntVector3`]s infallibly, so that per-axis algorithms can be written once as a
/// loop over [`Axis::ALL`].
///
/// [`IntVector3`]: crate::math::IntVector3
#[expect(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, exhaust::Exhaust)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[allow(missing_docs)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All three axes in the standard order, [X, Y, Z].
    ///
    /// This is also the nesting order of region iteration: X varies slowest.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];
}
