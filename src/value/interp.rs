//! Two-value blending.
//!
//! [`interpolate`] is the leaf of the whole engine: every state and attribute merge
//! ends up here. The rules, in order:
//!
//! 1. missing upper value keeps the lower one,
//! 2. missing lower value takes the upper one,
//! 3. two numbers blend linearly and round to a whole number,
//! 4. anything else switches from lower to upper once the factor passes `0.5`.

use crate::value::value::Value;

/// Tie-break used when a blended number lands exactly on `.5`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Banker's rounding: `2.5 -> 2`, `3.5 -> 4`.
    #[default]
    HalfEven,
    /// `2.5 -> 3`, `-2.5 -> -3`.
    HalfAwayFromZero,
}

impl Rounding {
    /// Round `x` to a whole number using this tie-break.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::HalfEven => x.round_ties_even(),
            Self::HalfAwayFromZero => x.round(),
        }
    }
}

/// Blend `lower` toward `upper` by `factor` (expected in `[0, 1]`).
///
/// `None` and [`Value::Null`] both mean "not recorded". Returns `None` only when both
/// sides are absent.
///
/// Numeric results are always [`Value::Integer`]; out-of-range results saturate at the
/// `i64` bounds.
pub fn interpolate(
    lower: Option<&Value>,
    upper: Option<&Value>,
    factor: f64,
    rounding: Rounding,
) -> Option<Value> {
    let lower = lower.filter(|v| !v.is_absent());
    let upper = upper.filter(|v| !v.is_absent());

    match (lower, upper) {
        (lower, None) => lower.cloned(),
        (None, upper) => upper.cloned(),
        (Some(l), Some(u)) => Some(interpolate_present(l, u, factor, rounding)),
    }
}

fn interpolate_present(lower: &Value, upper: &Value, factor: f64, rounding: Rounding) -> Value {
    match (lower.as_f64(), upper.as_f64()) {
        (Some(l), Some(u)) => Value::Integer(rounding.apply(l + (u - l) * factor) as i64),
        _ => {
            if factor > 0.5 {
                upper.clone()
            } else {
                lower.clone()
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/value/interp.rs"]
mod tests;
