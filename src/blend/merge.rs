use crate::{
    foundation::error::{FaderError, FaderResult},
    state::coerce::NumericCoercion,
    state::snapshot::StateSnapshot,
    value::interp::{Rounding, interpolate},
    value::value::Value,
};

/// Merges two snapshots of the same entity at a fixed blend factor.
#[derive(Clone, Copy)]
pub struct Merger<'a> {
    coercion: &'a dyn NumericCoercion,
    rounding: Rounding,
}

impl<'a> Merger<'a> {
    pub fn new(coercion: &'a dyn NumericCoercion, rounding: Rounding) -> Self {
        Self { coercion, rounding }
    }

    /// Merge the primary state.
    ///
    /// Token states ("on", "open", ..) follow the sticky-on rule: when the lower state
    /// reads as 1 it wins, otherwise the upper state wins. Plain numbers blend. States
    /// without a numeric reading switch at the midpoint.
    pub fn merge_state(&self, lower: &StateSnapshot, upper: &StateSnapshot, factor: f64) -> Value {
        let coerced = self
            .coercion
            .coerce(&lower.state)
            .and_then(|l| self.coercion.coerce(&upper.state).map(|u| (l, u)));

        match coerced {
            Ok((lower_num, _)) if lower.state.is_text() || upper.state.is_text() => {
                if lower_num == 1.0 {
                    lower.state.clone()
                } else {
                    upper.state.clone()
                }
            }
            Ok(_) => self.blend(&lower.state, &upper.state, factor),
            Err(e) => {
                tracing::trace!(entity = %lower.entity_id, "state coercion failed: {e}");
                self.blend(&lower.state, &upper.state, factor)
            }
        }
    }

    /// Merge two snapshots of one entity.
    ///
    /// Only attributes recorded on both sides survive.
    pub fn merge(
        &self,
        lower: &StateSnapshot,
        upper: &StateSnapshot,
        factor: f64,
    ) -> FaderResult<StateSnapshot> {
        if lower.entity_id != upper.entity_id {
            return Err(FaderError::EntityMismatch {
                lower: lower.entity_id.clone(),
                upper: upper.entity_id.clone(),
            });
        }

        let attributes = lower
            .attributes
            .iter()
            .filter_map(|(name, lv)| {
                let uv = upper.attributes.get(name)?;
                Some((name.clone(), self.blend(lv, uv, factor)))
            })
            .collect();

        Ok(StateSnapshot {
            entity_id: lower.entity_id.clone(),
            state: self.merge_state(lower, upper, factor),
            attributes,
        })
    }

    fn blend(&self, lower: &Value, upper: &Value, factor: f64) -> Value {
        interpolate(Some(lower), Some(upper), factor, self.rounding).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/blend/merge.rs"]
mod tests;
