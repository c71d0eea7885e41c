//! Barycentric triangle rasterization with a depth test.
//!
//! # Algorithm Overview
//!
//! 1. Compute the bounding box of the triangle's three pixels
//! 2. For each pixel in the box, compute its barycentric weights
//! 3. Skip the pixel if any weight is negative (outside the triangle)
//! 4. Interpolate depth from the vertices' z and keep the pixel only if it is
//!    nearer than what the depth buffer holds
//!
//! # Barycentric weights
//!
//! For triangle `A, B, C` and pixel `P`, build the two vectors
//!
//! ```text
//! (C.x - A.x, B.x - A.x, A.x - P.x)
//! (C.y - A.y, B.y - A.y, A.y - P.y)
//! ```
//!
//! Their cross product `u` is proportional to `(v, w, 1)` where
//! `P = A + w (B - A) + v (C - A)`, so the weights are
//!
//! ```text
//! (1 - (u.x + u.y) / u.z,  u.y / u.z,  u.x / u.z)
//! ```
//!
//! `u.z` depends only on the triangle. A triangle with `u.z <= 0` is
//! degenerate or wound the other way in screen space and draws nothing.
//!
//! # Cost
//!
//! Work is proportional to the bounding box area rather than the covered
//! area, but overlapping triangles resolve correctly in any order.

use super::{Rasterizer, Triangle};
use crate::bounds::BoundingBox;
use crate::math::{Pixel, ScreenPoint, Vec3};
use crate::render::framebuffer::FrameBuffer;

/// Barycentric weights of pixel `p` in triangle `a, b, c`, in vertex order.
///
/// Returns `None` when the triangle's cross product denominator is not
/// positive. The weights sum to one; `p` is inside (edges included) when none
/// is negative.
#[inline]
pub fn barycentric(a: ScreenPoint, b: ScreenPoint, c: ScreenPoint, p: Pixel) -> Option<[f32; 3]> {
    let u = Vec3::new((c.x - a.x) as f32, (b.x - a.x) as f32, (a.x - p.x) as f32)
        .cross(Vec3::new((c.y - a.y) as f32, (b.y - a.y) as f32, (a.y - p.y) as f32));

    if u.z > 0.0 {
        Some([1.0 - (u.x + u.y) / u.z, u.y / u.z, u.x / u.z])
    } else {
        None
    }
}

/// Triangle rasterizer using barycentric coverage and a z-buffer.
#[derive(Debug, Default)]
pub struct BarycentricRasterizer;

impl BarycentricRasterizer {
    /// Creates a new barycentric rasterizer instance.
    pub fn new() -> Self {
        BarycentricRasterizer
    }
}

impl Rasterizer for BarycentricRasterizer {
    fn fill_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer) {
        let [a, b, c] = triangle.points;

        // Degenerate check does not depend on the pixel.
        if barycentric(a, b, c, a.pixel()).is_none() {
            return;
        }

        let bounds = BoundingBox::compute(triangle.pixels());

        // Clip to framebuffer bounds
        let min_x = bounds.min.x.max(0);
        let max_x = bounds.max.x.min(buffer.width() as i32 - 1);
        let min_y = bounds.min.y.max(0);
        let max_y = bounds.max.y.min(buffer.height() as i32 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let Some([w0, w1, w2]) = barycentric(a, b, c, Pixel::new(x, y)) else {
                    continue;
                };
                if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                    continue;
                }

                let depth = a.z * w0 + b.z * w1 + c.z * w2;
                buffer.set_pixel_with_depth(x, y, depth, triangle.color);
            }
        }
    }
}
