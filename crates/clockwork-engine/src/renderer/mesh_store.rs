use std::collections::HashMap;

use log::{debug, warn};

use crate::api::types::MeshId;
use crate::geometry::MeshData;

/// Owns every mesh and tracks what the host still has to upload or free.
///
/// Ids are never reused, so a stale id can only miss, never alias.
pub struct MeshStore {
    meshes: HashMap<MeshId, MeshData>,
    next_id: u32,
    /// Inserted but not yet handed to the host.
    pending_uploads: Vec<MeshId>,
    /// Released after the host saw them; the host must free their buffers.
    released: Vec<MeshId>,
}

impl MeshStore {
    pub fn new() -> Self {
        Self {
            meshes: HashMap::new(),
            next_id: 1,
            pending_uploads: Vec::new(),
            released: Vec::new(),
        }
    }

    pub fn insert(&mut self, mesh: MeshData) -> MeshId {
        let id = MeshId(self.next_id);
        self.next_id += 1;
        self.meshes.insert(id, mesh);
        self.pending_uploads.push(id);
        id
    }

    pub fn get(&self, id: MeshId) -> Option<&MeshData> {
        self.meshes.get(&id)
    }

    pub fn contains(&self, id: MeshId) -> bool {
        self.meshes.contains_key(&id)
    }

    /// Release a mesh. Returns `false` (and logs) if it was already gone.
    pub fn release(&mut self, id: MeshId) -> bool {
        if self.meshes.remove(&id).is_none() {
            warn!("mesh {} released twice or never created", id.0);
            return false;
        }
        if let Some(idx) = self.pending_uploads.iter().position(|&p| p == id) {
            // The host never saw it; nothing to free on that side.
            self.pending_uploads.remove(idx);
        } else {
            self.released.push(id);
        }
        true
    }

    /// Release every live mesh.
    pub fn release_all(&mut self) {
        let mut ids: Vec<MeshId> = self.meshes.keys().copied().collect();
        ids.sort();
        for id in ids {
            self.release(id);
        }
    }

    /// Meshes the host has not uploaded yet, oldest first.
    pub fn drain_pending_uploads(&mut self) -> Vec<MeshId> {
        std::mem::take(&mut self.pending_uploads)
    }

    /// Meshes whose GPU buffers the host should free.
    pub fn drain_released(&mut self) -> Vec<MeshId> {
        std::mem::take(&mut self.released)
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}

impl Default for MeshStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for MeshStore {
    fn drop(&mut self) {
        if !self.meshes.is_empty() {
            debug!("dropping mesh store with {} live meshes", self.meshes.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::skybox_cube;

    #[test]
    fn insert_queues_upload() {
        let mut store = MeshStore::new();
        let a = store.insert(skybox_cube());
        let b = store.insert(skybox_cube());
        assert_ne!(a, b);
        assert_eq!(store.drain_pending_uploads(), vec![a, b]);
        assert!(store.drain_pending_uploads().is_empty());
        assert_eq!(store.get(a).map(|m| m.index_count()), Some(36));
    }

    #[test]
    fn release_is_exactly_once() {
        let mut store = MeshStore::new();
        let id = store.insert(skybox_cube());
        store.drain_pending_uploads();
        assert!(store.release(id));
        assert!(!store.release(id));
        assert_eq!(store.drain_released(), vec![id]);
        assert!(store.get(id).is_none());
    }

    #[test]
    fn release_before_upload_is_not_reported() {
        let mut store = MeshStore::new();
        let id = store.insert(skybox_cube());
        assert!(store.release(id));
        assert!(store.drain_pending_uploads().is_empty());
        assert!(store.drain_released().is_empty());
    }

    #[test]
    fn release_all_reports_uploaded_meshes() {
        let mut store = MeshStore::new();
        let a = store.insert(skybox_cube());
        let b = store.insert(skybox_cube());
        store.drain_pending_uploads();
        store.release_all();
        assert!(store.is_empty());
        assert_eq!(store.drain_released(), vec![a, b]);
    }
}
