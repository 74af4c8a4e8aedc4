use glam::Vec3;

use super::vertex::{cuboid, FaceColors, MeshData};

/// Unit cube seen from the inside, centered on the origin.
///
/// The host renders it at the camera position with depth writes off, so
/// its size does not matter; normals point inward.
pub fn skybox_cube() -> MeshData {
    let mut mesh = cuboid(Vec3::NEG_ONE, Vec3::ONE, FaceColors::uniform([1.0, 1.0, 1.0]));
    mesh.flip_inside_out();
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::vertex::winding_normal;

    #[test]
    fn faces_point_at_the_viewer_inside() {
        let mesh = skybox_cube();
        assert_eq!(mesh.index_count(), 36);
        for t in 0..mesh.index_count() / 3 {
            let p = Vec3::from_array(mesh.vertices[mesh.indices[t * 3] as usize].position);
            assert!(winding_normal(&mesh, t).dot(p) < 0.0);
        }
    }
}
