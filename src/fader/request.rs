use crate::{
    blend::anchors::{Anchor, AnchorSet},
    foundation::core::{Position, SceneId},
    foundation::error::{FaderError, FaderResult},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One scene placed on the blend axis.
pub struct SceneInterval {
    /// Scene to anchor.
    pub entity_id: SceneId,
    /// Where the scene sits, in `[0, 1]`.
    pub interval: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A "fade to position" request as received from the host.
pub struct FadeRequest {
    /// Anchored scenes, in any order.
    pub scenes: Vec<SceneInterval>,
    /// Target position; the fader's default applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<f64>,
}

/// A request that passed validation.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedRequest {
    pub anchors: AnchorSet,
    pub position: Position,
}

impl FadeRequest {
    pub fn new(scenes: Vec<SceneInterval>, position: Option<f64>) -> Self {
        Self { scenes, position }
    }

    /// Validate everything up front: at least two scenes, every interval and the
    /// position in `[0, 1]`, no two scenes on the same interval.
    pub fn prepare(&self, default_position: f64) -> FaderResult<PreparedRequest> {
        if self.scenes.len() < 2 {
            return Err(FaderError::validation(format!(
                "at least 2 scenes are required, got {}",
                self.scenes.len()
            )));
        }

        let anchors = self
            .scenes
            .iter()
            .map(|s| -> FaderResult<Anchor> {
                let position = Position::new(s.interval).map_err(|_| {
                    FaderError::validation(format!(
                        "interval of '{}' must be within [0, 1], got {}",
                        s.entity_id, s.interval
                    ))
                })?;
                Ok(Anchor::new(position, s.entity_id.clone()))
            })
            .collect::<FaderResult<Vec<_>>>()?;

        let position = Position::new(self.position.unwrap_or(default_position))?;
        let anchors = AnchorSet::new(anchors)?;
        Ok(PreparedRequest { anchors, position })
    }

    pub fn from_json_str(json: &str) -> FaderResult<Self> {
        serde_json::from_str(json).map_err(|e| FaderError::serde(format!("request: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fader/request.rs"]
mod tests;
