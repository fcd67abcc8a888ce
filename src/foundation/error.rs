/// Convenience result type used across roofvogel.
pub type RoofvogelResult<T> = Result<T, RoofvogelError>;

/// Error taxonomy for the input boundary.
///
/// Core mutations on the model never fail; refused operations are no-ops.
/// Errors only arise while turning raw input (numbers, labels, JSON) into
/// typed coordinates and commands.
#[derive(thiserror::Error, Debug)]
pub enum RoofvogelError {
    /// Malformed authoring input (unknown label, bad document shape).
    #[error("validation error: {0}")]
    Validation(String),

    /// A level, position or variant outside the fixed coordinate space.
    #[error("coordinate error: {0}")]
    Coordinate(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RoofvogelError {
    /// Build a [`RoofvogelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RoofvogelError::Coordinate`] value.
    pub fn coordinate(msg: impl Into<String>) -> Self {
        Self::Coordinate(msg.into())
    }

    /// Build a [`RoofvogelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
