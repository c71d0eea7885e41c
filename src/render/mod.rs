//! Rasterization into a borrowed pixel buffer.

mod framebuffer;
pub mod line;
mod rasterizer;

pub use framebuffer::FrameBuffer;
pub use line::{draw_line, stroke_triangle};
pub use rasterizer::{
    barycentric, BarycentricRasterizer, ParseRasterizerError, Rasterizer, RasterizerDispatcher,
    RasterizerType, ScanlineRasterizer, Triangle,
};
