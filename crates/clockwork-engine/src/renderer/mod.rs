pub mod camera;
pub mod draw;
pub mod light;
pub mod mesh_store;
pub mod traits;

pub use camera::OrbitCamera;
pub use draw::{build_draw_list, DrawCommand, DrawList, FrameUniforms};
pub use light::PointLight;
pub use mesh_store::MeshStore;
pub use traits::{FrameData, Renderer};
