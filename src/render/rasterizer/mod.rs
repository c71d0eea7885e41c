//! Triangle rasterization algorithms.
//!
//! This module provides two fill strategies behind one [`Rasterizer`] trait,
//! selectable at runtime:
//!
//! - [`ScanlineRasterizer`]: sorted scanline-pair interpolation, no depth test
//! - [`BarycentricRasterizer`]: bounding box scan with barycentric inside test
//!   and a per-pixel depth test
//!
//! Only the barycentric fill resolves overlapping triangles correctly in any
//! submission order, so it is the default.

mod barycentric;
mod scanline;

pub use barycentric::{barycentric, BarycentricRasterizer};
pub use scanline::ScanlineRasterizer;

use serde::Deserialize;
use thiserror::Error;

use super::framebuffer::FrameBuffer;
use crate::math::{Pixel, ScreenPoint};

/// A triangle ready for rasterization in screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub points: [ScreenPoint; 3],
    pub color: u32,
}

impl Triangle {
    pub fn new(points: [ScreenPoint; 3], color: u32) -> Self {
        Self { points, color }
    }

    pub fn pixels(&self) -> [Pixel; 3] {
        self.points.map(|p| p.pixel())
    }
}

/// Trait for triangle rasterization algorithms.
///
/// Implementors define how triangles are filled into a pixel buffer.
/// This allows swapping between rasterization strategies for testing and
/// benchmarking.
pub trait Rasterizer {
    /// Fill a triangle into the frame buffer with `triangle.color`.
    fn fill_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer);
}

/// Available rasterization algorithms.
///
/// Use this enum to select which rasterizer the renderer should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RasterizerType {
    /// Splits the triangle at its middle vertex and fills one horizontal span
    /// per row. Writes without a depth test, so overlapping triangles must
    /// arrive back to front.
    ScanlinePair,
    /// Tests every pixel of the bounding box with barycentric weights and
    /// keeps the nearest depth. Correct for overlapping geometry in any order.
    #[default]
    BarycentricDepth,
}

impl std::fmt::Display for RasterizerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RasterizerType::ScanlinePair => write!(f, "scanline-pair"),
            RasterizerType::BarycentricDepth => write!(f, "barycentric-depth"),
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown rasterizer '{0}', expected 'scanline-pair' or 'barycentric-depth'")]
pub struct ParseRasterizerError(String);

impl std::str::FromStr for RasterizerType {
    type Err = ParseRasterizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "scanline-pair" | "scanline" => Ok(RasterizerType::ScanlinePair),
            "barycentric-depth" | "barycentric" => Ok(RasterizerType::BarycentricDepth),
            _ => Err(ParseRasterizerError(s.to_string())),
        }
    }
}

/// Holds both rasterizer implementations and forwards to the active one.
#[derive(Debug, Default)]
pub struct RasterizerDispatcher {
    scanline: ScanlineRasterizer,
    barycentric: BarycentricRasterizer,
    active: RasterizerType,
}

impl RasterizerDispatcher {
    pub fn new(rasterizer_type: RasterizerType) -> Self {
        Self {
            scanline: ScanlineRasterizer::new(),
            barycentric: BarycentricRasterizer::new(),
            active: rasterizer_type,
        }
    }

    pub fn set_type(&mut self, rasterizer_type: RasterizerType) {
        self.active = rasterizer_type;
    }

    pub fn active_type(&self) -> RasterizerType {
        self.active
    }
}

impl Rasterizer for RasterizerDispatcher {
    #[inline]
    fn fill_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer) {
        match self.active {
            RasterizerType::ScanlinePair => self.scanline.fill_triangle(triangle, buffer),
            RasterizerType::BarycentricDepth => self.barycentric.fill_triangle(triangle, buffer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(super) const SIZE: u32 = 48;
    pub(super) const BLANK: u32 = 0;

    /// Owned color and depth buffers for rasterizer tests.
    pub(super) struct Target {
        pub color: Vec<u32>,
        pub depth: Vec<f32>,
    }

    impl Target {
        pub fn new() -> Self {
            let len = (SIZE * SIZE) as usize;
            Self {
                color: vec![BLANK; len],
                depth: vec![f32::NEG_INFINITY; len],
            }
        }

        pub fn fill(&mut self, rasterizer: &dyn Rasterizer, triangle: &Triangle) {
            let mut fb = FrameBuffer::new(&mut self.color, &mut self.depth, SIZE, SIZE);
            rasterizer.fill_triangle(triangle, &mut fb);
        }

        pub fn at(&self, x: i32, y: i32) -> u32 {
            self.color[(y as u32 * SIZE + x as u32) as usize]
        }

        pub fn count(&self, color: u32) -> usize {
            self.color.iter().filter(|&&c| c == color).count()
        }
    }

    /// Right triangle with corners (4,4), (4,36), (36,4), wound so its
    /// barycentric denominator is positive.
    pub(super) fn right_triangle(color: u32) -> Triangle {
        Triangle::new(
            [
                ScreenPoint::new(4, 4, 0.0),
                ScreenPoint::new(4, 36, 0.0),
                ScreenPoint::new(36, 4, 0.0),
            ],
            color,
        )
    }

    #[test]
    fn parse_rasterizer_names() {
        assert_eq!("scanline-pair".parse::<RasterizerType>().unwrap(), RasterizerType::ScanlinePair);
        assert_eq!("scanline_pair".parse::<RasterizerType>().unwrap(), RasterizerType::ScanlinePair);
        assert_eq!("Barycentric".parse::<RasterizerType>().unwrap(), RasterizerType::BarycentricDepth);
        assert!("painter".parse::<RasterizerType>().is_err());
        assert_eq!(RasterizerType::default(), RasterizerType::BarycentricDepth);
    }

    #[test]
    fn display_round_trips_through_parse() {
        for kind in [RasterizerType::ScanlinePair, RasterizerType::BarycentricDepth] {
            assert_eq!(kind.to_string().parse::<RasterizerType>().unwrap(), kind);
        }
    }

    #[test]
    fn both_strategies_fill_the_same_interior() {
        let triangle = right_triangle(9);
        for kind in [RasterizerType::ScanlinePair, RasterizerType::BarycentricDepth] {
            let mut target = Target::new();
            target.fill(&RasterizerDispatcher::new(kind), &triangle);

            for (x, y) in [(4, 4), (5, 5), (10, 10), (4, 30), (30, 5), (18, 18)] {
                assert_eq!(target.at(x, y), 9, "{kind} missed ({x}, {y})");
            }
            for (x, y) in [(3, 4), (4, 3), (30, 30), (21, 21), (40, 40), (0, 0)] {
                assert_eq!(target.at(x, y), BLANK, "{kind} overdrew ({x}, {y})");
            }
        }
    }

    #[test]
    fn dispatcher_switches_strategy() {
        let mut dispatcher = RasterizerDispatcher::new(RasterizerType::ScanlinePair);
        assert_eq!(dispatcher.active_type(), RasterizerType::ScanlinePair);

        // Scanline writes no depth, barycentric does.
        let mut target = Target::new();
        target.fill(&dispatcher, &right_triangle(1));
        assert!(target.depth.iter().all(|d| *d == f32::NEG_INFINITY));

        dispatcher.set_type(RasterizerType::BarycentricDepth);
        target.fill(&dispatcher, &right_triangle(1));
        assert_eq!(target.depth[(10 * SIZE + 10) as usize], 0.0);
    }
}
