//! The "turn on" entry point: validate a request, blend, hand the result to a sink.

use crate::{
    blend::blender::{BlendOutcome, SnapshotBlender},
    fader::request::FadeRequest,
    fader::settings::FaderSettings,
    foundation::core::SceneId,
    foundation::error::{FaderError, FaderResult},
    scene::store::SceneResolver,
    state::snapshot::StateSnapshot,
};

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Opaque caller context forwarded to the sink (who asked, for auditing).
pub struct CallContext {
    pub id: String,
}

impl CallContext {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Applies fader results to real devices.
pub trait StateSink {
    /// Drive every entity to the given synthesized state.
    fn reproduce_states(&mut self, states: &[StateSnapshot], ctx: &CallContext)
    -> FaderResult<()>;

    /// Activate a stored scene as-is.
    fn activate_scene(&mut self, scene: &SceneId, ctx: &CallContext) -> FaderResult<()>;
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
/// One call received by a [`RecordingSink`].
pub enum SinkCall {
    Reproduce {
        states: Vec<StateSnapshot>,
        context: CallContext,
    },
    Activate {
        scene: SceneId,
        context: CallContext,
    },
}

/// Sink that only records what it was asked to do.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub calls: Vec<SinkCall>,
}

impl StateSink for RecordingSink {
    fn reproduce_states(
        &mut self,
        states: &[StateSnapshot],
        ctx: &CallContext,
    ) -> FaderResult<()> {
        self.calls.push(SinkCall::Reproduce {
            states: states.to_vec(),
            context: ctx.clone(),
        });
        Ok(())
    }

    fn activate_scene(&mut self, scene: &SceneId, ctx: &CallContext) -> FaderResult<()> {
        self.calls.push(SinkCall::Activate {
            scene: scene.clone(),
            context: ctx.clone(),
        });
        Ok(())
    }
}

/// Scene fader service over a scene store.
pub struct SceneFader<R> {
    store: R,
    settings: FaderSettings,
}

impl<R: SceneResolver> SceneFader<R> {
    pub fn new(store: R, settings: FaderSettings) -> FaderResult<Self> {
        settings.validate()?;
        Ok(Self { store, settings })
    }

    pub fn settings(&self) -> &FaderSettings {
        &self.settings
    }

    /// Validate `request` and compute its outcome without touching any sink.
    ///
    /// Every referenced scene must resolve, even ones outside the chosen bracket.
    pub fn plan(&self, request: &FadeRequest) -> FaderResult<BlendOutcome> {
        let prepared = request.prepare(self.settings.default_position)?;

        if let Some((_, missing)) = prepared
            .anchors
            .iter()
            .find(|(_, scene)| self.store.resolve(scene).is_none())
        {
            return Err(FaderError::UnknownScene(missing.clone()));
        }

        let blender =
            SnapshotBlender::with_rounding(&self.store, &self.settings.tokens, self.settings.rounding);
        blender.blend(&prepared.anchors, prepared.position)
    }

    /// Plan `request` and apply the outcome to `sink`.
    ///
    /// The sink is not called at all when planning fails.
    #[tracing::instrument(skip(self, request, sink), fields(scenes = request.scenes.len()))]
    pub fn turn_on(
        &self,
        request: &FadeRequest,
        ctx: &CallContext,
        sink: &mut dyn StateSink,
    ) -> FaderResult<BlendOutcome> {
        let outcome = self.plan(request)?;
        match &outcome {
            BlendOutcome::Exact { scene, .. } => {
                tracing::info!(%scene, "activating scene");
                sink.activate_scene(scene, ctx)?;
            }
            BlendOutcome::Blended { snapshot, bracket } => {
                tracing::info!(
                    lower = %bracket.lower.scene,
                    upper = %bracket.upper.scene,
                    states = snapshot.len(),
                    "reproducing blended states"
                );
                sink.reproduce_states(snapshot.states(), ctx)?;
            }
        }
        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fader/service.rs"]
mod tests;
