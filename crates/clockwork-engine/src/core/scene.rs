use glam::Vec3;

use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::components::transform::Transform;

/// Flat entity storage. Scenes here hold tens of entities, so lookups
/// are linear scans.
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(64),
        }
    }

    pub fn spawn(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Remove an entity by ID. Returns the removed entity if found.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        let idx = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.swap_remove(idx))
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// First entity with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.tag == tag)
    }

    pub fn find_by_tag_mut(&mut self, tag: &str) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.tag == tag)
    }

    // -- Transform helpers; unknown ids are ignored --

    pub fn set_transform(&mut self, id: EntityId, transform: Transform) {
        if let Some(e) = self.get_mut(id) {
            e.transform = transform;
        }
    }

    pub fn set_position(&mut self, id: EntityId, position: Vec3) {
        if let Some(e) = self.get_mut(id) {
            e.transform.position = position;
        }
    }

    pub fn set_rotation(&mut self, id: EntityId, rotation: Vec3) {
        if let Some(e) = self.get_mut(id) {
            e.transform.rotation = rotation;
        }
    }

    pub fn set_active(&mut self, id: EntityId, active: bool) {
        if let Some(e) = self.get_mut(id) {
            e.active = active;
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Remove every entity, returning them so their meshes can be released.
    pub fn drain(&mut self) -> impl Iterator<Item = Entity> + '_ {
        self.entities.drain(..)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
