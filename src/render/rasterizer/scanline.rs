//! Scanline-pair triangle rasterization.
//!
//! The triangle is processed one horizontal line at a time:
//!
//! 1. **Sort vertices** by Y coordinate (top to bottom in screen space)
//! 2. **Split** at the middle vertex's row into a top and a bottom half
//! 3. **Fill** each row between the long edge (top to bottom vertex) and the
//!    short edge of the current half
//!
//! ```text
//!        p0                   p0
//!        /\                   /\
//!       /  \                 /  \  <- top half: long edge vs p0-p1
//!      /    \       =>   p1 /----\
//!   p1 \     \              \     \  <- bottom half: long edge vs p1-p2
//!        \    \              \     \
//!          \   \               \    \
//!            \  \                \   \
//!              \ \                 \  \
//!                p2                  p2
//! ```
//!
//! A flat top (p0 and p1 on one row) leaves the top half with no rows and
//! the loop bounds skip it.
//!
//! Edge positions are interpolated over `height + 1` rows and truncated to
//! integers, and each span is filled inclusively. There is no depth test: the
//! caller must submit overlapping triangles back to front.

use super::{Rasterizer, Triangle};
use crate::math::ScreenPoint;
use crate::render::framebuffer::FrameBuffer;

/// Scanline-pair triangle rasterizer.
///
/// Only visits pixels that are actually covered, one row at a time, which
/// keeps memory access sequential. Handles vertex sorting internally, so the
/// input winding does not matter.
#[derive(Debug, Default)]
pub struct ScanlineRasterizer;

impl ScanlineRasterizer {
    /// Creates a new scanline rasterizer instance.
    pub fn new() -> Self {
        Self
    }

    /// Sorts three vertices by Y coordinate (ascending: top to bottom in screen space).
    ///
    /// After sorting: `p0.y <= p1.y <= p2.y`
    fn sort_vertices(p0: &mut ScreenPoint, p1: &mut ScreenPoint, p2: &mut ScreenPoint) {
        // Three comparisons suffice for 3 elements (bubble sort)
        if p1.y < p0.y {
            std::mem::swap(p0, p1);
        }
        if p2.y < p1.y {
            std::mem::swap(p1, p2);
        }
        if p1.y < p0.y {
            std::mem::swap(p0, p1);
        }
    }

    /// X of the edge `from -> to` at `progress` (0 at `from`), truncated.
    #[inline]
    fn edge_x(from: ScreenPoint, to: ScreenPoint, progress: f32) -> i32 {
        (from.x as f32 + (to.x - from.x) as f32 * progress) as i32
    }

    #[inline]
    fn fill_span(buffer: &mut FrameBuffer, y: i32, x1: i32, x2: i32, color: u32) {
        let (left, right) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        for x in left..=right {
            buffer.set_pixel(x, y, color);
        }
    }
}

impl Rasterizer for ScanlineRasterizer {
    fn fill_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer) {
        let [mut p0, mut p1, mut p2] = triangle.points;
        Self::sort_vertices(&mut p0, &mut p1, &mut p2);

        let color = triangle.color;
        let total_height = (p2.y - p0.y + 1) as f32;

        // Top half: long edge against p0 -> p1.
        let top_height = (p1.y - p0.y + 1) as f32;
        for y in p0.y..p1.y {
            let long = (y - p0.y) as f32 / total_height;
            let short = (y - p0.y) as f32 / top_height;
            let x1 = Self::edge_x(p0, p2, long);
            let x2 = Self::edge_x(p0, p1, short);
            Self::fill_span(buffer, y, x1, x2, color);
        }

        // Bottom half: long edge against p1 -> p2.
        let bottom_height = (p2.y - p1.y + 1) as f32;
        for y in p1.y..=p2.y {
            let long = (y - p0.y) as f32 / total_height;
            let short = (y - p1.y) as f32 / bottom_height;
            let x1 = Self::edge_x(p0, p2, long);
            let x2 = Self::edge_x(p1, p2, short);
            Self::fill_span(buffer, y, x1, x2, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::rasterizer::tests::{right_triangle, Target, BLANK, SIZE};

    #[test]
    fn sort_orders_by_row() {
        let mut a = ScreenPoint::new(0, 9, 0.0);
        let mut b = ScreenPoint::new(1, 2, 0.0);
        let mut c = ScreenPoint::new(2, 5, 0.0);
        ScanlineRasterizer::sort_vertices(&mut a, &mut b, &mut c);
        assert_eq!([a.y, b.y, c.y], [2, 5, 9]);
        assert_eq!([a.x, b.x, c.x], [1, 2, 0]);
    }

    #[test]
    fn winding_does_not_matter() {
        let forward = right_triangle(3);
        let mut reversed = forward;
        reversed.points.swap(1, 2);

        let mut a = Target::new();
        let mut b = Target::new();
        a.fill(&ScanlineRasterizer::new(), &forward);
        b.fill(&ScanlineRasterizer::new(), &reversed);
        assert_eq!(a.color, b.color);
        assert!(a.count(3) > 0);
    }

    #[test]
    fn every_row_between_top_and_bottom_is_filled() {
        let triangle = Triangle::new(
            [
                ScreenPoint::new(20, 2, 0.0),
                ScreenPoint::new(5, 20, 0.0),
                ScreenPoint::new(40, 30, 0.0),
            ],
            5,
        );
        let mut target = Target::new();
        target.fill(&ScanlineRasterizer::new(), &triangle);

        for y in 0..SIZE as i32 {
            let filled = (0..SIZE as i32).any(|x| target.at(x, y) == 5);
            assert_eq!(filled, (2..=30).contains(&y), "row {y}");
        }
        // Top vertex is on its own row.
        assert_eq!(target.at(20, 2), 5);
    }

    #[test]
    fn flat_bottom_triangle() {
        // p1 and p2 share a row: the bottom half is that single row.
        let triangle = Triangle::new(
            [
                ScreenPoint::new(10, 0, 0.0),
                ScreenPoint::new(0, 10, 0.0),
                ScreenPoint::new(20, 10, 0.0),
            ],
            2,
        );
        let mut target = Target::new();
        target.fill(&ScanlineRasterizer::new(), &triangle);
        assert_eq!(target.at(10, 0), 2);
        assert_eq!(target.at(10, 5), 2);
        assert_eq!(target.at(0, 10), 2);
        // The long edge is spread over height + 1 rows and stops short of p2.
        assert_eq!(target.at(19, 10), 2);
        assert_eq!(target.at(20, 10), BLANK);
        assert_eq!(target.at(10, 11), BLANK);
    }

    #[test]
    fn later_triangle_overwrites_without_depth() {
        let mut near = right_triangle(1);
        for p in &mut near.points {
            p.z = 10.0;
        }
        let far = right_triangle(2);

        let mut target = Target::new();
        target.fill(&ScanlineRasterizer::new(), &near);
        target.fill(&ScanlineRasterizer::new(), &far);
        assert_eq!(target.at(10, 10), 2);
    }
}
