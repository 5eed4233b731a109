use std::collections::BTreeMap;

use crate::{
    foundation::core::EntityId,
    foundation::error::{FaderError, FaderResult},
    value::value::Value,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One entity's recorded condition inside a scene, or a synthesized one after a blend.
pub struct StateSnapshot {
    /// Entity this snapshot belongs to.
    pub entity_id: EntityId,
    /// Primary state, e.g. `"on"`, `"heat"` or a number.
    pub state: Value,
    /// Recorded attributes; a missing key means "not recorded".
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, Value>,
}

impl StateSnapshot {
    /// Snapshot with no attributes.
    pub fn new(entity_id: impl Into<EntityId>, state: impl Into<Value>) -> Self {
        Self {
            entity_id: entity_id.into(),
            state: state.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Builder-style attribute insert.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }
}

/// The recorded states of one scene, keyed by entity.
///
/// Serialized as a JSON list of snapshots; duplicate entity ids are rejected on load.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<StateSnapshot>", into = "Vec<StateSnapshot>")]
pub struct SceneConfig {
    states: BTreeMap<EntityId, StateSnapshot>,
}

impl SceneConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a list of snapshots, rejecting duplicate entities.
    pub fn from_states(states: impl IntoIterator<Item = StateSnapshot>) -> FaderResult<Self> {
        let mut out = Self::new();
        for snapshot in states {
            if out.states.contains_key(&snapshot.entity_id) {
                return Err(FaderError::validation(format!(
                    "entity '{}' recorded twice in one scene",
                    snapshot.entity_id
                )));
            }
            out.insert(snapshot);
        }
        Ok(out)
    }

    /// Insert or replace the snapshot for its entity.
    pub fn insert(&mut self, snapshot: StateSnapshot) -> Option<StateSnapshot> {
        self.states.insert(snapshot.entity_id.clone(), snapshot)
    }

    pub fn get(&self, entity_id: &EntityId) -> Option<&StateSnapshot> {
        self.states.get(entity_id)
    }

    pub fn contains(&self, entity_id: &EntityId) -> bool {
        self.states.contains_key(entity_id)
    }

    /// Snapshots in entity id order.
    pub fn iter(&self) -> impl Iterator<Item = &StateSnapshot> {
        self.states.values()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl TryFrom<Vec<StateSnapshot>> for SceneConfig {
    type Error = FaderError;

    fn try_from(states: Vec<StateSnapshot>) -> FaderResult<Self> {
        Self::from_states(states)
    }
}

impl From<SceneConfig> for Vec<StateSnapshot> {
    fn from(config: SceneConfig) -> Self {
        config.states.into_values().collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/snapshot.rs"]
mod tests;
