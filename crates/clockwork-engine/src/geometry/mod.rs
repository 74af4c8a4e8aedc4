//! Static mesh generators.
//!
//! Every generator is a pure function returning [`MeshData`]; nothing here
//! touches GPU state. The host uploads the data once per mesh.

pub mod orbit_path;
pub mod shapes;
pub mod skybox;
pub mod sphere;
pub mod vertex;

pub use orbit_path::orbit_ellipse;
pub use shapes::{
    clock_box, clock_face, clock_hand, marker_position, number_marker, pendulum_bob, pendulum_rod,
};
pub use skybox::skybox_cube;
pub use sphere::uv_sphere;
pub use vertex::{cuboid, FaceColors, MeshData, Topology, Vertex};
