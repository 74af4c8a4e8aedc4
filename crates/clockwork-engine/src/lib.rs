pub mod api;
pub mod assets;
pub mod bridge;
pub mod clock;
pub mod components;
pub mod core;
pub mod error;
pub mod geometry;
pub mod input;
pub mod orbit;
pub mod renderer;

// Re-export key types at crate root for convenience
pub use api::game::{EngineContext, Game, GameConfig};
pub use api::types::{EntityId, GameEvent, MeshId, TextureId};
pub use assets::manifest::{TextureDescriptor, TextureManifest};
pub use assets::registry::{TextureRegistry, TextureStatus};
pub use bridge::protocol::{FrameHeader, ProtocolLayout};
pub use clock::{ClockConfig, ClockModel, ClockTime, HandAngles, HandKind, Pendulum};
pub use components::drawable::Drawable;
pub use components::entity::{Entity, Material};
pub use components::layer::RenderLayer;
pub use components::transform::Transform;
pub use crate::core::scene::Scene;
pub use crate::core::time::FrameClock;
pub use error::ConfigError;
pub use geometry::{MeshData, Topology, Vertex};
pub use input::keys::KeyState;
pub use input::queue::{InputEvent, InputQueue};
pub use orbit::{EclipseKind, EclipseSearch, EclipseState, OrbitConfig, OrbitSnapshot, OrbitalSystem};
pub use renderer::{build_draw_list, DrawCommand, DrawList, FrameData, FrameUniforms, MeshStore, OrbitCamera, PointLight, Renderer};
