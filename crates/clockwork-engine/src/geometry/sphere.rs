use std::f32::consts::{PI, TAU};

use glam::Vec3;

use super::vertex::{MeshData, Topology, Vertex};

/// Latitude/longitude sphere centered on the origin, +y up.
///
/// `sectors` is clamped to at least 3 and `stacks` to at least 2. Vertices
/// are laid out stack by stack from the north pole, `sectors + 1` per ring
/// so the texture seam gets its own column. `uv = (j / sectors, i / stacks)`.
pub fn uv_sphere(radius: f32, sectors: u32, stacks: u32) -> MeshData {
    let sectors = sectors.max(3);
    let stacks = stacks.max(2);
    let mut mesh = MeshData::new(Topology::Triangles);
    mesh.vertices.reserve(((stacks + 1) * (sectors + 1)) as usize);

    for i in 0..=stacks {
        let phi = PI * i as f32 / stacks as f32;
        let (sin_phi, cos_phi) = phi.sin_cos();
        for j in 0..=sectors {
            let theta = TAU * j as f32 / sectors as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();
            let normal = Vec3::new(sin_phi * cos_theta, cos_phi, -sin_phi * sin_theta);
            let uv = [j as f32 / sectors as f32, i as f32 / stacks as f32];
            mesh.vertices.push(Vertex::new(normal * radius, normal, [1.0, 1.0, 1.0], uv));
        }
    }

    for i in 0..stacks {
        let mut k1 = i * (sectors + 1);
        let mut k2 = k1 + sectors + 1;
        for _ in 0..sectors {
            // The pole rows collapse to a point, so each gets one triangle per quad.
            if i != 0 {
                mesh.indices.extend_from_slice(&[k1, k2, k1 + 1]);
            }
            if i != stacks - 1 {
                mesh.indices.extend_from_slice(&[k1 + 1, k2, k2 + 1]);
            }
            k1 += 1;
            k2 += 1;
        }
    }
    mesh
}
