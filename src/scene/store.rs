use std::{collections::BTreeMap, fs::File, io::BufReader, path::Path};

use crate::{
    foundation::core::SceneId,
    foundation::error::{FaderError, FaderResult},
    state::snapshot::SceneConfig,
};

/// Resolves a scene id to its recorded states.
///
/// Resolution happens before the blend math runs; implementations must already hold
/// the data (no I/O on this path).
pub trait SceneResolver {
    fn resolve(&self, scene: &SceneId) -> Option<&SceneConfig>;
}

impl SceneResolver for BTreeMap<SceneId, SceneConfig> {
    fn resolve(&self, scene: &SceneId) -> Option<&SceneConfig> {
        self.get(scene)
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// In-memory scene table, loadable from a JSON object of `scene id -> [snapshot, ..]`.
pub struct SceneStore {
    scenes: BTreeMap<SceneId, SceneConfig>,
}

impl SceneStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a scene.
    pub fn insert(&mut self, id: impl Into<SceneId>, config: SceneConfig) -> Option<SceneConfig> {
        self.scenes.insert(id.into(), config)
    }

    /// Builder-style [`SceneStore::insert`].
    pub fn with_scene(mut self, id: impl Into<SceneId>, config: SceneConfig) -> Self {
        self.insert(id, config);
        self
    }

    pub fn get(&self, id: &SceneId) -> Option<&SceneConfig> {
        self.scenes.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &SceneId> {
        self.scenes.keys()
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub fn from_json_str(json: &str) -> FaderResult<Self> {
        serde_json::from_str(json).map_err(|e| FaderError::serde(format!("scene store: {e}")))
    }

    pub fn from_json_file(path: &Path) -> FaderResult<Self> {
        let f = File::open(path).map_err(|e| {
            FaderError::Other(anyhow::Error::new(e).context(format!(
                "open scene store '{}'",
                path.display()
            )))
        })?;
        serde_json::from_reader(BufReader::new(f))
            .map_err(|e| FaderError::serde(format!("scene store '{}': {e}", path.display())))
    }
}

impl SceneResolver for SceneStore {
    fn resolve(&self, scene: &SceneId) -> Option<&SceneConfig> {
        self.get(scene)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/store.rs"]
mod tests;
