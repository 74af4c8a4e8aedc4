use std::collections::HashMap;

use log::{info, warn};

use crate::api::types::TextureId;
use crate::assets::manifest::TextureManifest;

/// Load state of a texture, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureStatus {
    Pending,
    Loaded,
    Failed,
}

/// Name → id lookup plus load status for every manifest texture.
///
/// A texture's id is its index in the manifest. Only loaded textures
/// resolve; anything else draws untextured.
pub struct TextureRegistry {
    names: HashMap<String, TextureId>,
    status: Vec<TextureStatus>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self {
            names: HashMap::new(),
            status: Vec::new(),
        }
    }

    pub fn from_manifest(manifest: &TextureManifest) -> Self {
        let mut names = HashMap::with_capacity(manifest.textures.len());
        for (i, desc) in manifest.textures.iter().enumerate() {
            names.insert(desc.name.clone(), TextureId(i as u32));
        }
        Self {
            names,
            status: vec![TextureStatus::Pending; manifest.textures.len()],
        }
    }

    pub fn id(&self, name: &str) -> Option<TextureId> {
        self.names.get(name).copied()
    }

    pub fn status(&self, id: TextureId) -> Option<TextureStatus> {
        self.status.get(id.0 as usize).copied()
    }

    pub fn mark_loaded(&mut self, id: TextureId) {
        if let Some(s) = self.status.get_mut(id.0 as usize) {
            *s = TextureStatus::Loaded;
            info!("texture {} loaded", id.0);
        }
    }

    pub fn mark_failed(&mut self, id: TextureId) {
        if let Some(s) = self.status.get_mut(id.0 as usize) {
            *s = TextureStatus::Failed;
            warn!("texture {} failed to load, drawing untextured", id.0);
        }
    }

    /// The id to bind for `texture`, if it is loaded.
    pub fn resolve(&self, texture: Option<TextureId>) -> Option<TextureId> {
        texture.filter(|&id| self.status(id) == Some(TextureStatus::Loaded))
    }

    pub fn len(&self) -> usize {
        self.status.len()
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_empty()
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> TextureRegistry {
        let json = r#"{ "textures": [
            { "name": "sun", "path": "sun.jpg" },
            { "name": "earth", "path": "earth.jpg" }
        ] }"#;
        TextureRegistry::from_manifest(&TextureManifest::from_json(json).unwrap())
    }

    #[test]
    fn ids_follow_manifest_order() {
        let reg = registry();
        assert_eq!(reg.id("sun"), Some(TextureId(0)));
        assert_eq!(reg.id("earth"), Some(TextureId(1)));
        assert_eq!(reg.id("pluto"), None);
    }

    #[test]
    fn only_loaded_textures_resolve() {
        let mut reg = registry();
        let earth = reg.id("earth");
        assert_eq!(reg.resolve(earth), None);
        reg.mark_loaded(TextureId(1));
        assert_eq!(reg.resolve(earth), Some(TextureId(1)));
        reg.mark_failed(TextureId(0));
        assert_eq!(reg.resolve(Some(TextureId(0))), None);
        assert_eq!(reg.status(TextureId(0)), Some(TextureStatus::Failed));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut reg = registry();
        reg.mark_loaded(TextureId(9));
        assert_eq!(reg.resolve(Some(TextureId(9))), None);
        assert_eq!(reg.resolve(None), None);
    }
}
