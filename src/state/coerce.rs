use crate::value::value::Value;

/// A state value has no numeric reading.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("no numeric interpretation for state '{0}'")]
pub struct CoercionError(pub String);

/// Maps a state value to a number, e.g. `"on" -> 1`.
///
/// Failures are expected and recovered by the blender; they are never reported to the
/// caller of a blend.
pub trait NumericCoercion {
    fn coerce(&self, state: &Value) -> Result<f64, CoercionError>;
}

impl<F> NumericCoercion for F
where
    F: Fn(&Value) -> Result<f64, CoercionError>,
{
    fn coerce(&self, state: &Value) -> Result<f64, CoercionError> {
        self(state)
    }
}

/// Token table coercion: known "on"-like tokens read as 1, "off"-like tokens as 0,
/// numeric strings parse as floats.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StateTokens {
    /// Tokens that read as `1`.
    pub on: Vec<String>,
    /// Tokens that read as `0`.
    pub off: Vec<String>,
}

impl Default for StateTokens {
    fn default() -> Self {
        fn owned(tokens: &[&str]) -> Vec<String> {
            tokens.iter().map(|t| (*t).to_owned()).collect()
        }

        Self {
            on: owned(&["on", "open", "locked", "home", "above_horizon"]),
            off: owned(&[
                "off",
                "closed",
                "unlocked",
                "not_home",
                "below_horizon",
                "unknown",
            ]),
        }
    }
}

impl NumericCoercion for StateTokens {
    fn coerce(&self, state: &Value) -> Result<f64, CoercionError> {
        match state {
            Value::Integer(_) | Value::Real(_) => state
                .as_f64()
                .filter(|v| v.is_finite())
                .ok_or_else(|| CoercionError(state.to_string())),
            Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Value::Text(s) => {
                if self.on.iter().any(|t| t == s) {
                    return Ok(1.0);
                }
                if self.off.iter().any(|t| t == s) {
                    return Ok(0.0);
                }
                s.trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| CoercionError(s.clone()))
            }
            Value::Null | Value::Other(_) => Err(CoercionError(state.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/coerce.rs"]
mod tests;
