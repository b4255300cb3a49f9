/// Convenience result type used across the engine.
pub type CanvasResult<T> = Result<T, CanvasError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Every variant is a local validation failure raised at the offending call. A render
/// aborts on the first error; no partially built scene is ever returned.
#[derive(thiserror::Error, Debug)]
pub enum CanvasError {
    /// A stage identifier outside the fixed pipeline set.
    #[error("unknown stage '{0}'; valid stages: {valid}", valid = crate::registry::stage::stage_names().join(", "))]
    UnknownStage(String),

    /// A stage intensity outside `[0, 1]`.
    #[error("invalid intensity {0}: must be within [0, 1]")]
    InvalidIntensity(f64),

    /// Layout requested with no stages.
    #[error("empty stage set: layout needs at least one stage")]
    EmptyStageSet,

    /// Audit chain requested with a depth of zero.
    #[error("audit chain depth must be >= 1, got {0}")]
    NonPositiveDepth(u32),

    /// Serialization of an empty scene when the caller's policy forbids it.
    #[error("empty scene: nothing to serialize")]
    EmptyScene,

    /// Malformed request shape (canvas, duplicate ids, blend groups, overrides).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors from the raster export adapter.
    #[error("export error: {0}")]
    Export(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CanvasError {
    /// Build a [`CanvasError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CanvasError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`CanvasError::Export`] value.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Build a [`CanvasError::UnknownStage`] value.
    pub fn unknown_stage(name: impl Into<String>) -> Self {
        Self::UnknownStage(name.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
