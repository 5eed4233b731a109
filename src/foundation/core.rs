use std::{cmp::Ordering, fmt};

use crate::foundation::error::{FaderError, FaderResult};

/// A point on the normalized blend axis, always finite and within `[0, 1]`.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Position(f64);

impl Position {
    /// Lower end of the blend axis.
    pub const START: Self = Self(0.0);
    /// Upper end of the blend axis.
    pub const END: Self = Self(1.0);

    /// Validate `value` as a position.
    pub fn new(value: f64) -> FaderResult<Self> {
        if !value.is_finite() {
            return Err(FaderError::validation(format!(
                "position must be finite, got {value}"
            )));
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(FaderError::validation(format!(
                "position must be within [0, 1], got {value}"
            )));
        }
        // -0.0 would otherwise hash and order apart from 0.0
        Ok(Self(if value == 0.0 { 0.0 } else { value }))
    }

    /// Raw value in `[0, 1]`.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Position {}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::hash::Hash for Position {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl TryFrom<f64> for Position {
    type Error = FaderError;

    fn try_from(value: f64) -> FaderResult<Self> {
        Self::new(value)
    }
}

impl From<Position> for f64 {
    fn from(p: Position) -> Self {
        p.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an identifier string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the identifier text.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// Identifier of a stored scene, e.g. `scene.evening`.
    SceneId
);

string_id!(
    /// Identifier of one managed entity, e.g. `light.kitchen`.
    EntityId
);

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
