pub mod drawable;
pub mod entity;
pub mod layer;
pub mod transform;
