use std::f32::consts::TAU;

use glam::Vec3;

use super::vertex::{MeshData, Topology, Vertex};

const ORBIT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

/// Closed ellipse in the y = 0 plane, drawn as a line strip.
///
/// Emits `segments + 1` points; the last repeats the first so the strip
/// closes without a separate primitive restart. Points follow
/// `(a cos t, 0, b sin t)`, the same parametrization the orbit model uses.
pub fn orbit_ellipse(semi_major: f32, semi_minor: f32, segments: u32) -> MeshData {
    let segments = segments.max(3);
    let mut mesh = MeshData::new(Topology::LineStrip);
    for i in 0..=segments {
        let t = TAU * i as f32 / segments as f32;
        let (sin, cos) = t.sin_cos();
        let position = Vec3::new(semi_major * cos, 0.0, semi_minor * sin);
        mesh.vertices.push(Vertex::new(position, Vec3::Y, ORBIT_COLOR, [i as f32 / segments as f32, 0.0]));
        mesh.indices.push(i);
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_is_closed() {
        let mesh = orbit_ellipse(60.0, 58.0, 128);
        assert_eq!(mesh.topology, Topology::LineStrip);
        assert_eq!(mesh.vertex_count(), 129);
        assert_eq!(mesh.index_count(), 129);
        let first = Vec3::from_array(mesh.vertices[0].position);
        let last = Vec3::from_array(mesh.vertices[128].position);
        assert!((first - last).length() < 1e-4);
    }

    #[test]
    fn points_lie_on_the_ellipse_in_plane() {
        let (a, b) = (110.0, 104.0);
        let mesh = orbit_ellipse(a, b, 64);
        for v in &mesh.vertices {
            let [x, y, z] = v.position;
            assert_eq!(y, 0.0);
            let e = (x / a).powi(2) + (z / b).powi(2);
            assert!((e - 1.0).abs() < 1e-4);
        }
    }
}
