//! Frame buffer abstraction for 2D pixel access.
//!
//! Provides a view into a color buffer and a depth buffer with bounds-checked
//! access. The depth buffer enables hidden surface removal via the z-buffer
//! algorithm.

/// A view into color and depth buffers.
///
/// Wraps 1D slices with width/height metadata to enable 2D pixel access at
/// `row * width + column`. This is a borrowed view, not an owning type: the
/// color buffer belongs to the host surface and the depth buffer to the
/// renderer, and the view lives for one rasterization pass.
///
/// # Depth Buffer
///
/// The depth buffer stores model-space z per pixel. Larger values are nearer
/// the viewer; a pass starts with every entry at negative infinity.
///
/// Writes outside the buffer are dropped, so geometry that strays past the
/// edge is clipped instead of wrapping into the next row.
pub struct FrameBuffer<'a> {
    color_buffer: &'a mut [u32],
    depth_buffer: &'a mut [f32],
    width: u32,
    height: u32,
}

impl<'a> FrameBuffer<'a> {
    /// Create a new FrameBuffer view from buffer slices and dimensions.
    ///
    /// # Panics
    /// Panics in debug builds if buffer lengths don't match width * height
    pub fn new(
        color_buffer: &'a mut [u32],
        depth_buffer: &'a mut [f32],
        width: u32,
        height: u32,
    ) -> Self {
        debug_assert_eq!(
            color_buffer.len(),
            (width * height) as usize,
            "Color buffer size doesn't match dimensions"
        );
        debug_assert_eq!(
            depth_buffer.len(),
            (width * height) as usize,
            "Depth buffer size doesn't match dimensions"
        );
        Self {
            color_buffer,
            depth_buffer,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some((y as u32 * self.width + x as u32) as usize)
        } else {
            None
        }
    }

    /// Set a pixel at (x, y) with depth testing.
    ///
    /// The pixel and its depth entry are only written if `depth` is strictly
    /// greater than the stored depth. Returns whether the write happened.
    #[inline]
    pub fn set_pixel_with_depth(&mut self, x: i32, y: i32, depth: f32, color: u32) -> bool {
        match self.index(x, y) {
            Some(idx) if depth > self.depth_buffer[idx] => {
                self.depth_buffer[idx] = depth;
                self.color_buffer[idx] = color;
                true
            }
            _ => false,
        }
    }

    /// Set a pixel without depth testing.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if let Some(idx) = self.index(x, y) {
            self.color_buffer[idx] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|idx| self.color_buffer[idx])
    }

    /// Get the stored depth at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_depth(&self, x: i32, y: i32) -> Option<f32> {
        self.index(x, y).map(|idx| self.depth_buffer[idx])
    }
}
