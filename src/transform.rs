//! Model space to screen space mapping.
//!
//! Each axis of the mesh's bounding box is normalized to `[0, 1]` and scaled
//! by the same `span`, a fraction of the viewport height. Columns start at
//! the left edge; rows are flipped so increasing model y moves up the screen:
//!
//! ```text
//! span   = (height - 1) * fill_ratio
//! column = (x - min.x) / (max.x - min.x) * span
//! row    = (height - 1) - (y - min.y) / (max.y - min.y) * span
//! ```
//!
//! Both are truncated toward zero. The x and y extents are normalized
//! separately, so a mesh that is not square is stretched to a square of
//! `span` pixels. Depth passes through unchanged.

use crate::bounds::BoundingBox;
use crate::math::{ScreenPoint, Vec3};

/// Fraction of the viewport height a mesh spans by default.
pub const DEFAULT_FILL_RATIO: f32 = 0.9;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenTransform {
    origin: Vec3,
    /// Per-axis multiplier; zero for an axis with no extent.
    scale_x: f32,
    scale_y: f32,
    bottom_row: f32,
}

impl ScreenTransform {
    /// Fit `bounds` into a viewport `height` rows tall.
    ///
    /// An axis with zero extent maps every vertex to offset 0 along it. An
    /// empty box yields a transform that sends everything to the bottom-left
    /// pixel.
    pub fn fit(bounds: &BoundingBox<Vec3>, height: u32, fill_ratio: f32) -> Self {
        let bottom_row = height.saturating_sub(1) as f32;
        if bounds.is_empty() {
            return Self {
                origin: Vec3::ZERO,
                scale_x: 0.0,
                scale_y: 0.0,
                bottom_row,
            };
        }

        let span = bottom_row * fill_ratio;
        let extent = bounds.extent();
        let axis_scale = |size: f32| if size > 0.0 { span / size } else { 0.0 };

        Self {
            origin: bounds.min,
            scale_x: axis_scale(extent.x),
            scale_y: axis_scale(extent.y),
            bottom_row,
        }
    }

    #[inline]
    pub fn apply(&self, v: Vec3) -> ScreenPoint {
        let column = (v.x - self.origin.x) * self.scale_x;
        let row = self.bottom_row - (v.y - self.origin.y) * self.scale_y;
        ScreenPoint::new(column as i32, row as i32, v.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Pixel;

    fn unit_square_bounds() -> BoundingBox<Vec3> {
        BoundingBox::compute([Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0)])
    }

    #[test]
    fn full_fill_maps_corners_to_viewport_corners() {
        let t = ScreenTransform::fit(&unit_square_bounds(), 100, 1.0);
        assert_eq!(t.apply(Vec3::ZERO).pixel(), Pixel::new(0, 99));
        assert_eq!(t.apply(Vec3::new(1.0, 0.0, 0.0)).pixel(), Pixel::new(99, 99));
        assert_eq!(t.apply(Vec3::new(1.0, 1.0, 0.0)).pixel(), Pixel::new(99, 0));
        assert_eq!(t.apply(Vec3::new(0.0, 1.0, 0.0)).pixel(), Pixel::new(0, 0));
    }

    #[test]
    fn default_fill_leaves_a_margin() {
        let t = ScreenTransform::fit(&unit_square_bounds(), 100, DEFAULT_FILL_RATIO);
        // span = 99 * 0.9 = 89.1
        assert_eq!(t.apply(Vec3::new(1.0, 1.0, 0.0)).pixel(), Pixel::new(89, 9));
        assert_eq!(t.apply(Vec3::ZERO).pixel(), Pixel::new(0, 99));
    }

    #[test]
    fn scale_follows_height_not_width() {
        let bounds = BoundingBox::compute([Vec3::new(-2.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 0.0)]);
        let t = ScreenTransform::fit(&bounds, 51, 1.0);
        // Four units of x squeezed into the same 50 pixels as one unit of y.
        assert_eq!(t.apply(Vec3::new(2.0, 1.0, 0.0)).pixel(), Pixel::new(50, 0));
        assert_eq!(t.apply(Vec3::new(0.0, 0.5, 0.0)).pixel(), Pixel::new(25, 25));
    }

    #[test]
    fn depth_passes_through() {
        let t = ScreenTransform::fit(&unit_square_bounds(), 10, 1.0);
        assert_eq!(t.apply(Vec3::new(0.5, 0.5, -3.25)).z, -3.25);
    }

    #[test]
    fn flat_axis_does_not_divide_by_zero() {
        let bounds = BoundingBox::compute([Vec3::new(3.0, 0.0, 0.0), Vec3::new(3.0, 2.0, 1.0)]);
        let t = ScreenTransform::fit(&bounds, 11, 1.0);
        let p = t.apply(Vec3::new(3.0, 2.0, 1.0));
        assert_eq!(p.pixel(), Pixel::new(0, 0));
        assert_eq!(t.apply(Vec3::new(3.0, 0.0, 0.0)).pixel(), Pixel::new(0, 10));
    }

    #[test]
    fn empty_bounds_collapse_to_bottom_left() {
        let t = ScreenTransform::fit(&BoundingBox::EMPTY, 8, 0.9);
        assert_eq!(t.apply(Vec3::new(5.0, 5.0, 1.0)).pixel(), Pixel::new(0, 7));
    }
}
