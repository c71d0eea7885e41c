//! Single-pixel-wide line drawing.

use super::framebuffer::FrameBuffer;
use crate::math::Pixel;

/// Draws a line from `a` to `b`, both ends included.
///
/// Steps one pixel at a time along the axis with the larger extent and keeps
/// a fractional error term for the other axis: each step adds the slope
/// (`dy / dx`, or `dx / dy` for steep lines) to the error, and once the error
/// passes one half the minor coordinate moves by one toward the end point and
/// the error drops by one.
///
/// ```text
///  dx >= dy: one pixel per column     dy > dx: one pixel per row
///
///   ##                                 #
///     ###                              #
///        ###                            #
///           ##                          #
/// ```
///
/// Endpoints are ordered along the major axis first, so `a -> b` and
/// `b -> a` light the same pixels, and exactly `max(dx, dy) + 1` of them.
/// A zero-length line draws the single pixel `a`.
pub fn draw_line(buffer: &mut FrameBuffer, a: Pixel, b: Pixel, color: u32) {
    let dx = (b.x - a.x).abs();
    let dy = (b.y - a.y).abs();

    let mut error = 0.0f32;

    if dx >= dy {
        let (start, end) = if a.x <= b.x { (a, b) } else { (b, a) };
        let delta = if dx == 0 { 0.0 } else { dy as f32 / dx as f32 };
        let y_step = if start.y > end.y { -1 } else { 1 };

        let mut y = start.y;
        for x in start.x..=end.x {
            buffer.set_pixel(x, y, color);
            error += delta;
            if error > 0.5 {
                y += y_step;
                error -= 1.0;
            }
        }
    } else {
        // Steep: iterate rows so no row is skipped.
        let (start, end) = if a.y <= b.y { (a, b) } else { (b, a) };
        let delta = dx as f32 / dy as f32;
        let x_step = if start.x > end.x { -1 } else { 1 };

        let mut x = start.x;
        for y in start.y..=end.y {
            buffer.set_pixel(x, y, color);
            error += delta;
            if error > 0.5 {
                x += x_step;
                error -= 1.0;
            }
        }
    }
}

/// Outlines a triangle with three lines.
pub fn stroke_triangle(buffer: &mut FrameBuffer, [p0, p1, p2]: [Pixel; 3], color: u32) {
    draw_line(buffer, p0, p1, color);
    draw_line(buffer, p1, p2, color);
    draw_line(buffer, p2, p0, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    const SIZE: u32 = 64;
    const INK: u32 = 1;

    fn lit(a: Pixel, b: Pixel) -> BTreeSet<(i32, i32)> {
        let mut color = vec![0u32; (SIZE * SIZE) as usize];
        let mut depth = vec![f32::NEG_INFINITY; (SIZE * SIZE) as usize];
        let mut fb = FrameBuffer::new(&mut color, &mut depth, SIZE, SIZE);
        draw_line(&mut fb, a, b, INK);
        color
            .iter()
            .enumerate()
            .filter(|(_, &c)| c == INK)
            .map(|(i, _)| ((i as u32 % SIZE) as i32, (i as u32 / SIZE) as i32))
            .collect()
    }

    #[test]
    fn shallow_line_steps_once_per_column() {
        let pixels = lit(Pixel::new(0, 0), Pixel::new(4, 2));
        let expected: BTreeSet<_> = [(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)].into_iter().collect();
        assert_eq!(pixels, expected);
    }

    #[test]
    fn steep_line_steps_once_per_row() {
        let pixels = lit(Pixel::new(3, 10), Pixel::new(1, 4));
        assert_eq!(pixels.len(), 7);
        let rows: BTreeSet<_> = pixels.iter().map(|&(_, y)| y).collect();
        assert_eq!(rows, (4..=10).collect());
        assert!(pixels.contains(&(3, 10)));
        assert!(pixels.contains(&(1, 4)));
    }

    #[test]
    fn degenerate_line_draws_one_pixel() {
        let pixels = lit(Pixel::new(5, 5), Pixel::new(5, 5));
        assert_eq!(pixels, [(5, 5)].into_iter().collect());
    }

    #[test]
    fn horizontal_and_vertical_lines() {
        assert_eq!(lit(Pixel::new(2, 3), Pixel::new(9, 3)).len(), 8);
        assert_eq!(lit(Pixel::new(2, 9), Pixel::new(2, 3)).len(), 7);
    }

    #[test]
    fn stroke_outlines_triangle_corners() {
        let mut color = vec![0u32; (SIZE * SIZE) as usize];
        let mut depth = vec![f32::NEG_INFINITY; (SIZE * SIZE) as usize];
        let mut fb = FrameBuffer::new(&mut color, &mut depth, SIZE, SIZE);
        stroke_triangle(
            &mut fb,
            [Pixel::new(1, 1), Pixel::new(20, 1), Pixel::new(1, 20)],
            INK,
        );
        assert_eq!(fb.get_pixel(1, 1), Some(INK));
        assert_eq!(fb.get_pixel(20, 1), Some(INK));
        assert_eq!(fb.get_pixel(1, 20), Some(INK));
        assert_eq!(fb.get_pixel(5, 5), Some(0));
    }

    fn endpoint() -> impl Strategy<Value = Pixel> {
        (0..SIZE as i32, 0..SIZE as i32).prop_map(|(x, y)| Pixel::new(x, y))
    }

    proptest! {
        #[test]
        fn line_covers_major_axis_without_gaps(a in endpoint(), b in endpoint()) {
            let pixels = lit(a, b);
            let dx = (b.x - a.x).abs();
            let dy = (b.y - a.y).abs();
            prop_assert_eq!(pixels.len() as i32, dx.max(dy) + 1);
            prop_assert!(pixels.contains(&(a.x, a.y)));
            prop_assert!(pixels.contains(&(b.x, b.y)));

            // One pixel per step along the major axis, minor axis moves by at most one.
            let mut path: Vec<(i32, i32)> = pixels.into_iter().collect();
            if dx < dy {
                path.sort_by_key(|&(x, y)| (y, x));
            }
            for pair in path.windows(2) {
                let (major0, minor0, major1, minor1) = if dx >= dy {
                    (pair[0].0, pair[0].1, pair[1].0, pair[1].1)
                } else {
                    (pair[0].1, pair[0].0, pair[1].1, pair[1].0)
                };
                prop_assert_eq!(major1 - major0, 1);
                prop_assert!((minor1 - minor0).abs() <= 1);
            }
        }

        #[test]
        fn line_is_symmetric(a in endpoint(), b in endpoint()) {
            prop_assert_eq!(lit(a, b), lit(b, a));
        }
    }
}
