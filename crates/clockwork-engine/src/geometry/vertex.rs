use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Interleaved vertex as uploaded to the host's vertex buffers.
/// Wire format: 11 floats = 44 bytes stride
/// `[px, py, pz, nx, ny, nz, r, g, b, u, v]`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    pub const FLOATS: usize = 11;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn new(position: Vec3, normal: Vec3, color: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            color,
            uv,
        }
    }
}

/// Primitive assembly for a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Topology {
    #[default]
    Triangles = 0,
    LineStrip = 1,
}

/// Vertex + index lists for one mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub topology: Topology,
}

impl MeshData {
    pub fn new(topology: Topology) -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            topology,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Vertex data as a flat float slice (host upload view).
    pub fn vertex_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Append a quad given its four corners in counter-clockwise order
    /// as seen from the side the normal points to.
    pub fn push_quad(&mut self, corners: [Vec3; 4], normal: Vec3, color: [f32; 3]) {
        const UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        let base = self.vertices.len() as u32;
        for (corner, uv) in corners.iter().zip(UVS) {
            self.vertices.push(Vertex::new(*corner, normal, color, uv));
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    /// Reverse the winding of every triangle and flip all normals.
    /// Used for meshes viewed from the inside.
    pub fn flip_inside_out(&mut self) {
        for tri in self.indices.chunks_exact_mut(3) {
            tri.swap(1, 2);
        }
        for v in &mut self.vertices {
            v.normal = [-v.normal[0], -v.normal[1], -v.normal[2]];
        }
    }
}

/// Per-face colors for a [`cuboid`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceColors {
    pub front: [f32; 3],
    pub back: [f32; 3],
    pub left: [f32; 3],
    pub right: [f32; 3],
    pub top: [f32; 3],
    pub bottom: [f32; 3],
}

impl FaceColors {
    pub const fn uniform(color: [f32; 3]) -> Self {
        Self {
            front: color,
            back: color,
            left: color,
            right: color,
            top: color,
            bottom: color,
        }
    }
}

/// Axis-aligned box from `min` to `max`: 24 vertices (4 per face, flat
/// normals) and 36 indices, outward winding.
pub fn cuboid(min: Vec3, max: Vec3, colors: FaceColors) -> MeshData {
    let (x0, y0, z0) = (min.x, min.y, min.z);
    let (x1, y1, z1) = (max.x, max.y, max.z);
    let mut mesh = MeshData::new(Topology::Triangles);
    mesh.vertices.reserve(24);
    mesh.indices.reserve(36);

    mesh.push_quad(
        [
            Vec3::new(x0, y0, z1),
            Vec3::new(x1, y0, z1),
            Vec3::new(x1, y1, z1),
            Vec3::new(x0, y1, z1),
        ],
        Vec3::Z,
        colors.front,
    );
    mesh.push_quad(
        [
            Vec3::new(x1, y0, z0),
            Vec3::new(x0, y0, z0),
            Vec3::new(x0, y1, z0),
            Vec3::new(x1, y1, z0),
        ],
        Vec3::NEG_Z,
        colors.back,
    );
    mesh.push_quad(
        [
            Vec3::new(x0, y0, z0),
            Vec3::new(x0, y0, z1),
            Vec3::new(x0, y1, z1),
            Vec3::new(x0, y1, z0),
        ],
        Vec3::NEG_X,
        colors.left,
    );
    mesh.push_quad(
        [
            Vec3::new(x1, y0, z1),
            Vec3::new(x1, y0, z0),
            Vec3::new(x1, y1, z0),
            Vec3::new(x1, y1, z1),
        ],
        Vec3::X,
        colors.right,
    );
    mesh.push_quad(
        [
            Vec3::new(x0, y1, z1),
            Vec3::new(x1, y1, z1),
            Vec3::new(x1, y1, z0),
            Vec3::new(x0, y1, z0),
        ],
        Vec3::Y,
        colors.top,
    );
    mesh.push_quad(
        [
            Vec3::new(x0, y0, z0),
            Vec3::new(x1, y0, z0),
            Vec3::new(x1, y0, z1),
            Vec3::new(x0, y0, z1),
        ],
        Vec3::NEG_Y,
        colors.bottom,
    );
    mesh
}

/// Face normal of triangle `t` computed from its winding.
#[cfg(test)]
pub(crate) fn winding_normal(mesh: &MeshData, t: usize) -> Vec3 {
    let i = &mesh.indices[t * 3..t * 3 + 3];
    let a = Vec3::from_array(mesh.vertices[i[0] as usize].position);
    let b = Vec3::from_array(mesh.vertices[i[1] as usize].position);
    let c = Vec3::from_array(mesh.vertices[i[2] as usize].position);
    (b - a).cross(c - a)
}
