use std::fmt;

/// A recorded state or attribute value.
///
/// Serialized untagged, so scene files use plain JSON scalars: `"on"`, `180`, `0.5`,
/// `true`, `null`. Arrays and objects are carried through as [`Value::Other`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Explicit "not recorded"; treated exactly like a missing key when blending.
    Null,
    /// Boolean flag. Not numeric: blends with the discrete midpoint switch.
    Bool(bool),
    /// Whole number.
    Integer(i64),
    /// Real number.
    Real(f64),
    /// String or enum token, e.g. `"on"` or `"heat"`.
    Text(String),
    /// Any other structured payload (lists, objects).
    Other(serde_json::Value),
}

impl Value {
    /// Numeric view of `Integer` and `Real` values.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(v) => Some(*v as f64),
            Self::Real(v) => Some(*v),
            _ => None,
        }
    }

    /// Text view of `Text` values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Real(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
            Self::Other(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/value/value.rs"]
mod tests;
