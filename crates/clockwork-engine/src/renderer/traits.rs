//! Renderer trait for native GPU back-ends.
//!
//! The shipped host is a WebGL page that reads the frame buffer exported by
//! `clockwork-web`. This trait is the same contract for a Rust-native
//! back-end, and lets the runner drive either one.

use crate::api::types::MeshId;
use crate::geometry::MeshData;

use super::draw::{DrawCommand, FrameUniforms};

/// Everything needed to draw one frame.
pub struct FrameData<'a> {
    pub uniforms: &'a FrameUniforms,
    /// Already ordered: background, depth-tested objects, overlay.
    pub commands: &'a [DrawCommand],
    pub clear_color: [f32; 4],
}

pub trait Renderer {
    /// Backend identifier (e.g. "webgl2", "wgpu").
    fn backend(&self) -> &'static str;

    /// Create GPU buffers for a mesh. Called once per mesh id.
    fn upload_mesh(&mut self, id: MeshId, mesh: &MeshData);

    /// Free the GPU buffers of a mesh. Called once per uploaded mesh.
    fn release_mesh(&mut self, id: MeshId);

    fn draw(&mut self, frame: &FrameData);

    fn resize(&mut self, width: u32, height: u32);
}
