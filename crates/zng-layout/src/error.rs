use crate::unit::AlignDirectional;

/// Errors that can happen during layout.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum LayoutError {
    /// A directional alignment was used in a context without a layout direction.
    #[error("directional alignment {align:?} requires a layout direction")]
    MissingDirection {
        /// The alignment that could not be resolved.
        align: AlignDirectional,
    },
}
