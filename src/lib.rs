//! A CPU-based software rasterizer for flat-shaded triangle meshes.
//!
//! Every pixel is computed on the CPU: a mesh is fitted into the viewport,
//! each face is lit by a single directional light, faces pointing away are
//! culled and the rest are filled with a depth-tested barycentric
//! rasterizer. SDL2 is used only to show frames, behind the `window`
//! feature.
//!
//! # Quick Start
//!
//! ```no_run
//! use trirast::prelude::*;
//!
//! let mut renderer = Renderer::new(800, 600);
//! let mut surface = ImageSurface::new(800, 600);
//! let stats = renderer.render(&Mesh::cube(), &mut surface)?;
//! surface.save_png("cube.png")?;
//! println!("{} faces drawn", stats.rendered);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Public API - exposed to library consumers
pub mod bounds;
pub mod colors;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod light;
pub mod math;
pub mod mesh;
pub mod transform;
#[cfg(feature = "window")]
pub mod window;

// Internal modules - used within the crate only
pub(crate) mod render;

// Re-export commonly needed types at crate root for convenience
pub use config::RenderConfig;
pub use engine::{RenderStats, Renderer};
pub use error::{ConfigError, LoadError, RenderError, SurfaceError};
pub use mesh::{Face, Mesh};
pub use render::{ParseRasterizerError, RasterizerType};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use trirast::prelude::*;
/// ```
pub mod prelude {
    // Engine
    pub use crate::config::RenderConfig;
    pub use crate::engine::{RenderStats, Renderer};

    // Geometry
    pub use crate::bounds::BoundingBox;
    pub use crate::math::{Pixel, ScreenPoint, Vec3};
    pub use crate::mesh::{Face, Mesh};

    // Shading and color
    pub use crate::colors::{ByteOrder, ColorCodec};
    pub use crate::light::DirectionalLight;

    // Rendering
    pub use crate::display::{ImageSurface, Surface};
    pub use crate::render::RasterizerType;

    // Window & Input
    #[cfg(feature = "window")]
    pub use crate::window::{FrameLimiter, Window, WindowEvent};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::{
        barycentric, draw_line, stroke_triangle, BarycentricRasterizer, FrameBuffer, Rasterizer,
        ScanlineRasterizer, Triangle,
    };
}
