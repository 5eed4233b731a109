use std::{fs::File, io::BufReader, path::Path};

use crate::{
    foundation::error::{FaderError, FaderResult},
    state::coerce::StateTokens,
    value::interp::Rounding,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Host-level knobs for a [`crate::SceneFader`]; every field has a default.
pub struct FaderSettings {
    /// Tie-break for blended numbers.
    pub rounding: Rounding,
    /// Position used when a request does not carry one.
    pub default_position: f64,
    /// Token table used to read states as numbers.
    pub tokens: StateTokens,
}

impl Default for FaderSettings {
    fn default() -> Self {
        Self {
            rounding: Rounding::default(),
            default_position: 0.5,
            tokens: StateTokens::default(),
        }
    }
}

impl FaderSettings {
    pub fn validate(&self) -> FaderResult<()> {
        if !(0.0..=1.0).contains(&self.default_position) {
            return Err(FaderError::validation(format!(
                "default_position must be within [0, 1], got {}",
                self.default_position
            )));
        }
        if let Some(t) = self.tokens.on.iter().find(|t| self.tokens.off.contains(t)) {
            return Err(FaderError::validation(format!(
                "token '{t}' is listed as both on and off"
            )));
        }
        Ok(())
    }

    /// Parse and validate settings JSON.
    pub fn from_json_str(json: &str) -> FaderResult<Self> {
        let settings: Self =
            serde_json::from_str(json).map_err(|e| FaderError::serde(format!("settings: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_json_file(path: &Path) -> FaderResult<Self> {
        let f = File::open(path).map_err(|e| {
            FaderError::Other(
                anyhow::Error::new(e).context(format!("open settings '{}'", path.display())),
            )
        })?;
        let settings: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| FaderError::serde(format!("settings '{}': {e}", path.display())))?;
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fader/settings.rs"]
mod tests;
