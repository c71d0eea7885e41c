//! trirast command line entry point
//!
//! Renders an OBJ mesh, or the built-in cube, to a PNG file. With the
//! `window` feature the mesh can be shown spinning in an SDL2 window instead.

use std::path::PathBuf;

use clap::Parser;
use trirast::prelude::*;

#[derive(Parser)]
#[command(name = "trirast")]
#[command(about = "Flat-shaded software rasterizer for triangle meshes")]
struct Cli {
    /// Wavefront OBJ file to render (defaults to a cube)
    obj: Option<PathBuf>,

    #[arg(long, default_value_t = 1024)]
    width: u32,

    #[arg(long, default_value_t = 768)]
    height: u32,

    /// PNG file to write
    #[arg(long, short, default_value = "render.png")]
    output: PathBuf,

    /// Fill strategy: scanline-pair or barycentric-depth
    #[arg(long)]
    rasterizer: Option<RasterizerType>,

    /// TOML render configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Stroke triangle edges over the fill
    #[arg(long)]
    wireframe: bool,

    /// Rotation around the X axis, in degrees
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pitch: f32,

    /// Rotation around the Y axis, in degrees
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    yaw: f32,

    /// Show the mesh in a window instead of writing a file (needs the
    /// `window` feature)
    #[arg(long)]
    window: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };
    if let Some(rasterizer) = cli.rasterizer {
        config.rasterizer = rasterizer;
    }
    config.wireframe |= cli.wireframe;

    let mesh = match &cli.obj {
        Some(path) => Mesh::from_obj(path)?,
        None => {
            log::info!("No OBJ given, rendering the built-in cube");
            Mesh::cube()
        }
    };
    let mesh = mesh.rotated(cli.pitch.to_radians(), cli.yaw.to_radians());

    log::info!(
        "Rendering {}x{} with the {} rasterizer",
        cli.width,
        cli.height,
        config.rasterizer
    );
    let mut renderer = Renderer::with_config(cli.width, cli.height, config);

    if cli.window {
        #[cfg(feature = "window")]
        return run_window(&mut renderer, &mesh, cli.width, cli.height);
        #[cfg(not(feature = "window"))]
        return Err("--window needs trirast built with the `window` feature".into());
    }

    let mut surface = ImageSurface::new(cli.width, cli.height);
    renderer.render(&mesh, &mut surface)?;
    surface.save_png(&cli.output)?;

    Ok(())
}

#[cfg(feature = "window")]
fn run_window(
    renderer: &mut Renderer,
    mesh: &Mesh,
    width: u32,
    height: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut window = Window::new("trirast", width, height)?;
    let mut limiter = FrameLimiter::new(&window);
    let mut yaw = 0.0f32;

    log::info!("Running window loop...");
    loop {
        match window.poll_events() {
            WindowEvent::Quit => break,
            WindowEvent::Resize(w, h) => window.resize(w, h)?,
            WindowEvent::None => {}
        }

        let delta = limiter.wait_and_get_delta(&window);
        yaw += delta as f32 * 0.001;
        renderer.render(&mesh.rotated(0.0, yaw), &mut window)?;
    }

    Ok(())
}
