//! Core rendering engine.
//!
//! The [`Renderer`] drives one pass per [`Renderer::render`] call:
//!
//! 1. **Reset**: depth buffer to negative infinity, light back to its
//!    configured direction, pixel buffer to the background color
//! 2. **Transform**: fit the mesh's bounding box into the viewport and map
//!    every vertex to a screen point
//! 3. **Rasterize**: shade each face from its model-space vertices, cull the
//!    ones facing away and fill the rest with a flat grey
//! 4. **Present**: hand the pixel buffer back to the surface
//!
//! The mesh is validated before anything is written, so a pass that fails
//! leaves the surface as it was and presents nothing.

use crate::bounds::BoundingBox;
use crate::colors::ColorCodec;
use crate::config::RenderConfig;
use crate::display::Surface;
use crate::error::{RenderError, SurfaceError};
use crate::light::{grey_level, DirectionalLight, FaceShade};
use crate::math::ScreenPoint;
use crate::mesh::Mesh;
use crate::render::{
    stroke_triangle, FrameBuffer, Rasterizer, RasterizerDispatcher, RasterizerType, Triangle,
};
use crate::transform::ScreenTransform;

/// Face counts for one render pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Faces handed to the rasterizer.
    pub rendered: usize,
    /// Faces pointing away from the light.
    pub culled: usize,
    /// Zero-area faces with no normal.
    pub degenerate: usize,
}

/// Owns the per-frame state of the pipeline.
///
/// The depth buffer and the screen point scratch list live as long as the
/// renderer and are reused by every pass. They are mutated in place, so a
/// `Renderer` is not reentrant: one pass at a time, from one thread.
pub struct Renderer {
    width: u32,
    height: u32,
    depth_buffer: Vec<f32>,
    screen_points: Vec<ScreenPoint>,
    wireframe: Vec<Triangle>,
    codec: ColorCodec,
    light: DirectionalLight,
    rasterizer: RasterizerDispatcher,
    config: RenderConfig,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_config(width, height, RenderConfig::default())
    }

    pub fn with_config(width: u32, height: u32, config: RenderConfig) -> Self {
        log::debug!("Render config: {config:?}");
        Self {
            width,
            height,
            depth_buffer: vec![f32::NEG_INFINITY; (width * height) as usize],
            screen_points: Vec::new(),
            wireframe: Vec::new(),
            codec: ColorCodec::native(),
            light: config.light(),
            rasterizer: RasterizerDispatcher::new(config.rasterizer),
            config,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reallocate the depth buffer for a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        log::debug!("Resizing renderer to {width}x{height}");
        self.width = width;
        self.height = height;
        self.depth_buffer = vec![f32::NEG_INFINITY; (width * height) as usize];
    }

    /// Clear the per-frame state owned by the renderer.
    ///
    /// The pixel buffer belongs to the surface; it is cleared at the start of
    /// [`Renderer::render`], once the surface has handed it over.
    pub fn reset(&mut self) {
        self.depth_buffer.fill(f32::NEG_INFINITY);
        self.light = self.config.light();
    }

    pub fn set_rasterizer(&mut self, rasterizer_type: RasterizerType) {
        self.rasterizer.set_type(rasterizer_type);
        self.config.rasterizer = rasterizer_type;
    }

    pub fn rasterizer(&self) -> RasterizerType {
        self.rasterizer.active_type()
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn codec(&self) -> ColorCodec {
        self.codec
    }

    pub fn light(&self) -> DirectionalLight {
        self.light
    }

    /// Depth left by the last pass, row-major. Untouched pixels hold
    /// negative infinity.
    pub fn depth_buffer(&self) -> &[f32] {
        &self.depth_buffer
    }

    /// Render `mesh` into `surface` and present it.
    pub fn render<S: Surface + ?Sized>(
        &mut self,
        mesh: &Mesh,
        surface: &mut S,
    ) -> Result<RenderStats, RenderError> {
        mesh.validate()?;

        if (surface.width(), surface.height()) != (self.width, self.height) {
            self.resize(surface.width(), surface.height());
        }
        self.reset();

        let stats = self.rasterize(mesh, surface.begin_frame())?;
        surface.present()?;

        log::info!("Culled faces: {}", stats.culled + stats.degenerate);
        log::info!("Rendered faces: {}", stats.rendered);
        Ok(stats)
    }

    fn rasterize(&mut self, mesh: &Mesh, pixels: &mut [u32]) -> Result<RenderStats, RenderError> {
        let expected = (self.width * self.height) as usize;
        if pixels.len() != expected {
            return Err(SurfaceError::BufferSize {
                expected,
                actual: pixels.len(),
            }
            .into());
        }
        pixels.fill(self.codec.pack_rgb(self.config.background));

        let vertices = mesh.vertices();
        let model_bounds = BoundingBox::compute(vertices.iter().copied());
        let transform = ScreenTransform::fit(&model_bounds, self.height, self.config.fill_ratio);

        self.screen_points.clear();
        self.screen_points
            .extend(vertices.iter().map(|&v| transform.apply(v)));
        let screen_bounds = BoundingBox::compute(self.screen_points.iter().map(|p| p.pixel()));
        log::info!("Model bounding box: {model_bounds:?}");
        log::info!("Rasterized bounding box: {screen_bounds:?}");

        let mut frame = FrameBuffer::new(pixels, &mut self.depth_buffer, self.width, self.height);
        let mut stats = RenderStats::default();
        self.wireframe.clear();

        for (index, face) in mesh.faces().iter().enumerate() {
            // Indices were validated above.
            let model = face.vertices.map(|i| vertices[i]);

            match self.light.shade_face(model) {
                FaceShade::Degenerate => {
                    log::trace!("Face {index} is degenerate");
                    stats.degenerate += 1;
                }
                FaceShade::Culled => {
                    log::trace!("Face {index} faces away from the light");
                    stats.culled += 1;
                }
                FaceShade::Lit(intensity) => {
                    let color = self.codec.grey(grey_level(intensity));
                    let triangle =
                        Triangle::new(face.vertices.map(|i| self.screen_points[i]), color);
                    self.rasterizer.fill_triangle(&triangle, &mut frame);
                    if self.config.wireframe {
                        self.wireframe.push(triangle);
                    }
                    stats.rendered += 1;
                }
            }
        }

        // Edges go on top of every fill.
        let edge_color = self.codec.pack_rgb(self.config.wireframe_color);
        for triangle in &self.wireframe {
            stroke_triangle(&mut frame, triangle.pixels(), edge_color);
        }

        Ok(stats)
    }
}
