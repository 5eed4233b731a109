use crate::foundation::core::{EntityId, Position, SceneId};

/// Convenience result type used across scenefader.
pub type FaderResult<T> = Result<T, FaderError>;

/// Top-level error taxonomy used by blend and fader APIs.
///
/// Every variant except [`FaderError::Other`] is a precondition violation: the whole
/// request is rejected and nothing is handed to a [`crate::StateSink`].
#[derive(thiserror::Error, Debug)]
pub enum FaderError {
    /// Invalid user-provided request, anchor or settings data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Two snapshots with different entity ids were asked to merge.
    #[error("entity mismatch: cannot merge '{lower}' with '{upper}'")]
    EntityMismatch {
        /// Entity id of the lower-bracket snapshot.
        lower: EntityId,
        /// Entity id of the upper-bracket snapshot.
        upper: EntityId,
    },

    /// The bracket around the query position has zero width.
    #[error("degenerate bracket at position {position}")]
    DegenerateBracket {
        /// Position shared by both ends of the bracket.
        position: Position,
    },

    /// A scene id could not be resolved by the scene store.
    #[error("unknown scene '{0}'")]
    UnknownScene(SceneId),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// A state sink failed to apply a snapshot or activate a scene.
    #[error("apply error: {0}")]
    Apply(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FaderError {
    /// Build a [`FaderError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FaderError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`FaderError::Apply`] value.
    pub fn apply(msg: impl Into<String>) -> Self {
        Self::Apply(msg.into())
    }

    /// Whether this error was caused by bad input rather than a collaborator failure.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::EntityMismatch { .. }
                | Self::DegenerateBracket { .. }
                | Self::UnknownScene(_)
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
