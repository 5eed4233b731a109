use crate::{
    blend::anchors::{AnchorSet, Bracket, Selection},
    blend::merge::Merger,
    foundation::core::{EntityId, Position, SceneId},
    foundation::error::{FaderError, FaderResult},
    scene::store::SceneResolver,
    state::coerce::NumericCoercion,
    state::snapshot::{SceneConfig, StateSnapshot},
    value::interp::Rounding,
};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// Blended states, one per entity recorded in both bracketing scenes, in entity id order.
pub struct SynthesizedSnapshot {
    states: Vec<StateSnapshot>,
}

impl SynthesizedSnapshot {
    pub fn states(&self) -> &[StateSnapshot] {
        &self.states
    }

    pub fn get(&self, entity_id: &EntityId) -> Option<&StateSnapshot> {
        self.states.iter().find(|s| &s.entity_id == entity_id)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// What a blend produced.
pub enum BlendOutcome {
    /// The query hit an anchor; the scene should be activated as-is.
    Exact {
        /// Anchor position that matched.
        position: Position,
        /// Scene to activate.
        scene: SceneId,
    },
    /// The query fell between two anchors.
    Blended {
        /// Bracket used for the merge.
        bracket: Bracket,
        /// Merged states to reproduce.
        snapshot: SynthesizedSnapshot,
    },
}

impl BlendOutcome {
    pub fn is_exact(&self) -> bool {
        matches!(self, Self::Exact { .. })
    }

    /// Merged snapshot, if the outcome is a blend.
    pub fn snapshot(&self) -> Option<&SynthesizedSnapshot> {
        match self {
            Self::Blended { snapshot, .. } => Some(snapshot),
            Self::Exact { .. } => None,
        }
    }
}

/// Pure blend engine over an injected scene resolver and state coercion.
///
/// Holds only shared borrows; one blender can serve any number of calls.
pub struct SnapshotBlender<'a> {
    resolver: &'a dyn SceneResolver,
    merger: Merger<'a>,
}

impl<'a> SnapshotBlender<'a> {
    pub fn new(resolver: &'a dyn SceneResolver, coercion: &'a dyn NumericCoercion) -> Self {
        Self {
            resolver,
            merger: Merger::new(coercion, Rounding::default()),
        }
    }

    pub fn with_rounding(
        resolver: &'a dyn SceneResolver,
        coercion: &'a dyn NumericCoercion,
        rounding: Rounding,
    ) -> Self {
        Self {
            resolver,
            merger: Merger::new(coercion, rounding),
        }
    }

    /// Blend the scenes around `query`.
    ///
    /// Only the two bracketing scenes are resolved. Nothing is returned on error, so a
    /// failed blend never yields a partial snapshot.
    #[tracing::instrument(skip(self, anchors), fields(anchor_count = anchors.len()))]
    pub fn blend(&self, anchors: &AnchorSet, query: Position) -> FaderResult<BlendOutcome> {
        let bracket = match anchors.select(query)? {
            Selection::Exact(anchor) => {
                tracing::debug!(scene = %anchor.scene, "position matches anchor");
                return Ok(BlendOutcome::Exact {
                    position: anchor.position,
                    scene: anchor.scene,
                });
            }
            Selection::Between(bracket) => bracket,
        };

        tracing::debug!(
            lower = %bracket.lower.scene,
            upper = %bracket.upper.scene,
            factor = bracket.factor,
            "bracket selected"
        );

        let lower = self.resolve(&bracket.lower.scene)?;
        let upper = self.resolve(&bracket.upper.scene)?;
        let snapshot = self.blend_configs(lower, upper, bracket.factor)?;

        Ok(BlendOutcome::Blended { bracket, snapshot })
    }

    /// Merge two scene configs entity by entity.
    ///
    /// Entities recorded in only one of the scenes are dropped.
    pub fn blend_configs(
        &self,
        lower: &SceneConfig,
        upper: &SceneConfig,
        factor: f64,
    ) -> FaderResult<SynthesizedSnapshot> {
        let mut states = Vec::with_capacity(lower.len().min(upper.len()));
        for lower_state in lower.iter() {
            let Some(upper_state) = upper.get(&lower_state.entity_id) else {
                continue;
            };
            states.push(self.merger.merge(lower_state, upper_state, factor)?);
        }

        tracing::trace!(
            merged = states.len(),
            lower = lower.len(),
            upper = upper.len(),
            "scene configs merged"
        );
        Ok(SynthesizedSnapshot { states })
    }

    fn resolve(&self, scene: &SceneId) -> FaderResult<&'a SceneConfig> {
        let resolver: &'a dyn SceneResolver = self.resolver;
        resolver
            .resolve(scene)
            .ok_or_else(|| FaderError::UnknownScene(scene.clone()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/blend/blender.rs"]
mod tests;
