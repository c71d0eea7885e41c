//! Vector math and screen-space point types.

pub mod point;
pub mod vec3;

pub use point::{Pixel, ScreenPoint};
pub use vec3::Vec3;
