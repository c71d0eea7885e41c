//! Host pixel surfaces.
//!
//! A [`Surface`] owns the pixel buffer the renderer draws into. The renderer
//! borrows it between [`Surface::begin_frame`] and [`Surface::present`] and
//! treats it as raw `row * width + column` memory of packed colors (see
//! [`crate::colors`]), so no format negotiation happens here.

use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::SurfaceError;

pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Writable buffer of `width * height` packed colors for the next frame.
    fn begin_frame(&mut self) -> &mut [u32];

    /// Show the buffer filled since the last `begin_frame`.
    fn present(&mut self) -> Result<(), SurfaceError>;
}

/// An off-screen surface backed by a plain `Vec<u32>`.
///
/// Packed colors read R, G, B, A in memory, so the buffer's bytes are an
/// RGBA8 image as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSurface {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
    frames_presented: u64,
}

impl ImageSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![0; (width * height) as usize],
            width,
            height,
            frames_presented: 0,
        }
    }

    /// Packed color at (x, y), or None if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// The pixel buffer as RGBA8 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn to_image(&self) -> Result<RgbaImage, SurfaceError> {
        RgbaImage::from_raw(self.width, self.height, self.as_bytes().to_vec()).ok_or(
            SurfaceError::BufferSize {
                expected: (self.width * self.height) as usize,
                actual: self.pixels.len(),
            },
        )
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), SurfaceError> {
        self.to_image()?
            .save_with_format(path.as_ref(), ImageFormat::Png)?;
        log::info!("Wrote {}x{} image to {}", self.width, self.height, path.as_ref().display());
        Ok(())
    }
}

impl Surface for ImageSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn begin_frame(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    fn present(&mut self) -> Result<(), SurfaceError> {
        self.frames_presented += 1;
        Ok(())
    }
}
