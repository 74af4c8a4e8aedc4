use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Textures a scene wants the host to load.
///
/// ```json
/// { "textures": [ { "name": "earth", "path": "textures/earth.jpg", "flip_vertically": true } ] }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextureManifest {
    #[serde(default)]
    pub textures: Vec<TextureDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureDescriptor {
    pub name: String,
    /// Path relative to the page's asset root.
    pub path: String,
    /// Flip rows on upload so uv (0,0) is the bottom-left texel.
    #[serde(default = "default_flip")]
    pub flip_vertically: bool,
}

fn default_flip() -> bool {
    true
}

impl TextureManifest {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }
}
