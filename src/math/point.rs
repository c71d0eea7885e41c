//! Points after the screen transform.
//!
//! Screen space uses integer pixel coordinates: column `x` grows to the
//! right and row `y` grows downward, so `row * width + column` addresses a
//! pixel in a flat buffer.

/// An integer pixel coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
}

impl Pixel {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A mesh vertex mapped to the screen.
///
/// `x` and `y` are truncated pixel coordinates; `z` is the vertex's
/// model-space depth, carried through untouched so the depth buffer can
/// compare true depths (larger is nearer the viewer).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
    pub z: f32,
}

impl ScreenPoint {
    pub const fn new(x: i32, y: i32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// The pixel this point lands on, dropping depth.
    #[inline]
    pub const fn pixel(&self) -> Pixel {
        Pixel::new(self.x, self.y)
    }
}
