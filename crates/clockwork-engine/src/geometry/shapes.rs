//! Pendulum-clock primitives: case, dial, hands, hour markers, rod and bob.

use std::f32::consts::TAU;

use glam::{Vec2, Vec3};

use super::vertex::{cuboid, FaceColors, MeshData, Topology, Vertex};

/// Wood tones for the clock case, lighter on the faces that catch the light.
const CASE_COLORS: FaceColors = FaceColors {
    front: [0.9, 0.7, 0.5],
    back: [0.5, 0.3, 0.2],
    left: [0.7, 0.5, 0.3],
    right: [0.7, 0.5, 0.3],
    top: [1.0, 0.8, 0.6],
    bottom: [0.4, 0.2, 0.1],
};

const DIAL_COLOR: [f32; 3] = [0.95, 0.95, 0.9];
const DIAL_HALF_THICKNESS: f32 = 0.01;

const MARKER_COLOR: [f32; 3] = [0.15, 0.15, 0.15];
const MARKER_HALF_THICKNESS: f32 = 0.025;
/// Markers sit at this fraction of the dial radius.
const MARKER_RADIUS_FRACTION: f32 = 0.8;

const HAND_HALF_THICKNESS: f32 = 0.03;

const ROD_COLORS: FaceColors = FaceColors {
    front: [0.3, 0.2, 0.1],
    back: [0.3, 0.2, 0.1],
    left: [0.25, 0.15, 0.1],
    right: [0.25, 0.15, 0.1],
    top: [0.35, 0.25, 0.15],
    bottom: [0.2, 0.1, 0.05],
};

const BOB_COLOR: [f32; 3] = [0.2, 0.1, 0.05];
/// Bob thickness relative to its radius.
const BOB_DEPTH_FRACTION: f32 = 0.4;

/// Clock case centered on the origin.
pub fn clock_box(width: f32, height: f32, depth: f32) -> MeshData {
    let half = Vec3::new(width, height, depth) / 2.0;
    cuboid(-half, half, CASE_COLORS)
}

/// Double-sided dial disc in the xy plane.
///
/// Layout: front center, back center, then `segments + 1` (front, back)
/// rim pairs; the last pair repeats the first to close the fan.
pub fn clock_face(radius: f32, segments: u32) -> MeshData {
    let segments = segments.max(3);
    let mut mesh = MeshData::new(Topology::Triangles);
    let front_z = DIAL_HALF_THICKNESS;
    let back_z = -DIAL_HALF_THICKNESS;

    mesh.vertices.push(Vertex::new(Vec3::new(0.0, 0.0, front_z), Vec3::Z, DIAL_COLOR, [0.5, 0.5]));
    mesh.vertices.push(Vertex::new(Vec3::new(0.0, 0.0, back_z), Vec3::NEG_Z, DIAL_COLOR, [0.5, 0.5]));

    for i in 0..=segments {
        let angle = TAU * i as f32 / segments as f32;
        let (sin, cos) = angle.sin_cos();
        let uv = [0.5 + 0.5 * cos, 0.5 + 0.5 * sin];
        let (x, y) = (radius * cos, radius * sin);
        mesh.vertices.push(Vertex::new(Vec3::new(x, y, front_z), Vec3::Z, DIAL_COLOR, uv));
        mesh.vertices.push(Vertex::new(Vec3::new(x, y, back_z), Vec3::NEG_Z, DIAL_COLOR, uv));
    }

    for i in 0..segments {
        let curr = 2 + i * 2;
        let next = 2 + (i + 1) * 2;
        mesh.indices.extend_from_slice(&[0, curr, next]);
    }
    for i in 0..segments {
        let curr = 2 + i * 2 + 1;
        let next = 2 + (i + 1) * 2 + 1;
        mesh.indices.extend_from_slice(&[1, next, curr]);
    }
    mesh
}

/// Hand bar pointing along +x from the pivot.
///
/// Pointing along +x means a hand at rotation 0 shows 3 o'clock; callers
/// turn it with the clockwise dial angle (see `clock::hands`).
pub fn clock_hand(length: f32, width: f32, color: [f32; 3]) -> MeshData {
    let w = width / 2.0;
    cuboid(
        Vec3::new(0.0, -w, -HAND_HALF_THICKNESS),
        Vec3::new(length, w, HAND_HALF_THICKNESS),
        FaceColors::uniform(color),
    )
}

/// Square hour marker centered on its own origin.
pub fn number_marker(size: f32) -> MeshData {
    let s = size / 2.0;
    cuboid(
        Vec3::new(-s, -s, -MARKER_HALF_THICKNESS),
        Vec3::new(s, s, MARKER_HALF_THICKNESS),
        FaceColors::uniform(MARKER_COLOR),
    )
}

/// Where hour marker `number` sits on a dial of `face_radius`.
///
/// Numbers run clockwise with 12 at the top and 3 on the right. Numbers
/// outside 1..=12 fall back to 1.
pub fn marker_position(number: u32, face_radius: f32) -> Vec2 {
    let number = if (1..=12).contains(&number) { number } else { 1 };
    let angle = (number as f32 * 30.0 - 90.0).to_radians();
    let distance = face_radius * MARKER_RADIUS_FRACTION;
    Vec2::new(distance * angle.cos(), -distance * angle.sin())
}

/// Square-section rod hanging from the pivot (y = 0) down to y = -length.
pub fn pendulum_rod(length: f32, width: f32) -> MeshData {
    let w = width / 2.0;
    cuboid(Vec3::new(-w, -length, -w), Vec3::new(w, 0.0, w), ROD_COLORS)
}

/// Lens-shaped bob: two disc caps plus a side band, centered on its origin.
pub fn pendulum_bob(radius: f32, segments: u32) -> MeshData {
    let segments = segments.max(3);
    let depth = radius * BOB_DEPTH_FRACTION;
    let mut mesh = MeshData::new(Topology::Triangles);

    // Caps: same layout as the dial.
    mesh.vertices.push(Vertex::new(Vec3::new(0.0, 0.0, depth), Vec3::Z, BOB_COLOR, [0.5, 0.5]));
    mesh.vertices.push(Vertex::new(Vec3::new(0.0, 0.0, -depth), Vec3::NEG_Z, BOB_COLOR, [0.5, 0.5]));
    for i in 0..=segments {
        let angle = TAU * i as f32 / segments as f32;
        let (sin, cos) = angle.sin_cos();
        let uv = [0.5 + 0.5 * cos, 0.5 + 0.5 * sin];
        let (x, y) = (radius * cos, radius * sin);
        mesh.vertices.push(Vertex::new(Vec3::new(x, y, depth), Vec3::Z, BOB_COLOR, uv));
        mesh.vertices.push(Vertex::new(Vec3::new(x, y, -depth), Vec3::NEG_Z, BOB_COLOR, uv));
    }
    for i in 0..segments {
        let curr = 2 + i * 2;
        let next = 2 + (i + 1) * 2;
        mesh.indices.extend_from_slice(&[0, curr, next]);
        mesh.indices.extend_from_slice(&[1, next + 1, curr + 1]);
    }

    // Band: its own vertices so it can carry radial normals.
    let band_base = mesh.vertices.len() as u32;
    for i in 0..=segments {
        let angle = TAU * i as f32 / segments as f32;
        let (sin, cos) = angle.sin_cos();
        let normal = Vec3::new(cos, sin, 0.0);
        let u = i as f32 / segments as f32;
        let (x, y) = (radius * cos, radius * sin);
        mesh.vertices.push(Vertex::new(Vec3::new(x, y, depth), normal, BOB_COLOR, [u, 1.0]));
        mesh.vertices.push(Vertex::new(Vec3::new(x, y, -depth), normal, BOB_COLOR, [u, 0.0]));
    }
    for i in 0..segments {
        let front = band_base + i * 2;
        let back = front + 1;
        let next_front = band_base + (i + 1) * 2;
        let next_back = next_front + 1;
        mesh.indices.extend_from_slice(&[back, next_back, next_front, next_front, front, back]);
    }
    mesh
}
