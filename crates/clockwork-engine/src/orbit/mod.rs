//! Earth–Moon–Mars orbits around a fixed Sun, with eclipse detection.
//!
//! All orbits lie in the y = 0 plane. Angles are unbounded radians;
//! positions are derived from them on demand.

pub mod alignment;
pub mod body;
pub mod config;
pub mod eclipse;
pub mod system;

pub use alignment::{alignment, is_aligned, occluder_position};
pub use body::{advance_orbits, ellipse_position, moon_position, OrbitingBody};
pub use config::{OrbitConfig, OrbitParams};
pub use eclipse::{EclipseKind, EclipseSearch, EclipseState};
pub use system::{OrbitSnapshot, OrbitalSystem};
