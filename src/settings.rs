//! Calculator settings.
//!
//! Loaded from a JSON document; every field is optional and falls back to
//! its default.

use crate::config::{DEFAULT_LEVEL, DEFAULT_QUALITY};
use crate::error::Result;
use crate::query::StdinPrompt;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunables for a [`crate::session::Session`].
///
/// # Examples
///
/// ```rust
/// use dmgcalc::settings::Settings;
///
/// let settings = Settings::from_json(r#"{"default_level": 100}"#).unwrap();
/// assert_eq!(settings.default_level, 100);
/// assert_eq!(settings.default_quality, 31);
/// assert_eq!(settings.abort_token, "e");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Level both combatants start at.
    pub default_level: u8,
    /// Quality every stat starts at.
    pub default_quality: u8,
    /// Selection line that terminates the process.
    pub abort_token: String,
    pub prompt_marker: String,
    /// Evaluate expanded configurations on the rayon pool.
    pub parallel: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_level: DEFAULT_LEVEL,
            default_quality: DEFAULT_QUALITY,
            abort_token: "e".to_string(),
            prompt_marker: ">>>".to_string(),
            parallel: true,
        }
    }
}

impl Settings {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read settings from `path`. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// A stdin prompt using this marker and abort token.
    pub fn stdin_prompt(&self) -> StdinPrompt {
        StdinPrompt::new(self.prompt_marker.clone(), self.abort_token.clone())
    }
}
