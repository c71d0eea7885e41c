//! SDL2 presentation surface.
//!
//! Frames are rendered into an owned `Vec<u32>` and uploaded to a streaming
//! texture on [`Surface::present`]. The texture's pixel format is picked so
//! that its memory layout is R, G, B, A, matching the native
//! [`ColorCodec`](crate::colors::ColorCodec).

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::WindowContext;

use crate::colors::ByteOrder;
use crate::display::Surface;
use crate::error::SurfaceError;

pub const FPS: u64 = 60;
pub const FRAME_TARGET_TIME: f64 = 1000.0 / FPS as f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    None,
    Quit,
    Resize(u32, u32),
}

pub struct FrameLimiter {
    previous_frame_time: u64,
}

impl FrameLimiter {
    pub fn new(window: &Window) -> Self {
        Self {
            previous_frame_time: window.timer().ticks64(),
        }
    }

    /// Sleeps off whatever is left of the frame budget and returns the
    /// milliseconds since the previous call.
    pub fn wait_and_get_delta(&mut self, window: &Window) -> u64 {
        let mut current_time = window.timer().ticks64();
        let mut delta_time = current_time - self.previous_frame_time;

        let budget = FRAME_TARGET_TIME as u64;
        if delta_time < budget {
            std::thread::sleep(std::time::Duration::from_millis(budget - delta_time));
            current_time = window.timer().ticks64();
            delta_time = current_time - self.previous_frame_time;
        }

        self.previous_frame_time = current_time;
        delta_time
    }
}

/// Texture format whose bytes read R, G, B, A in memory.
///
/// SDL names packed formats by their order within a native-endian `u32`.
fn texture_format(order: ByteOrder) -> PixelFormatEnum {
    match order {
        ByteOrder::LittleEndian => PixelFormatEnum::ABGR8888,
        ByteOrder::BigEndian => PixelFormatEnum::RGBA8888,
    }
}

fn present_error(e: impl ToString) -> SurfaceError {
    SurfaceError::Present(e.to_string())
}

pub struct Window {
    canvas: Canvas<sdl2::video::Window>,
    // Declared before `texture_creator` so it is dropped first.
    texture: Texture<'static>,
    texture_creator: Box<TextureCreator<WindowContext>>,
    event_pump: sdl2::EventPump,
    timer_subsystem: sdl2::TimerSubsystem,
    format: PixelFormatEnum,
    pixels: Vec<u32>,
    width: u32,
    height: u32,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, SurfaceError> {
        let sdl_context = sdl2::init().map_err(present_error)?;
        let video_subsystem = sdl_context.video().map_err(present_error)?;
        let timer_subsystem = sdl_context.timer().map_err(present_error)?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(present_error)?;

        let canvas = window.into_canvas().build().map_err(present_error)?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump().map_err(present_error)?;

        let order = ByteOrder::detect();
        let format = texture_format(order);
        log::debug!("Window texture format {format:?} for {order}-endian host");

        let texture = Self::create_texture(&texture_creator, format, width, height)?;

        Ok(Self {
            canvas,
            texture,
            texture_creator,
            event_pump,
            timer_subsystem,
            format,
            pixels: vec![0; (width * height) as usize],
            width,
            height,
        })
    }

    fn create_texture(
        texture_creator: &TextureCreator<WindowContext>,
        format: PixelFormatEnum,
        width: u32,
        height: u32,
    ) -> Result<Texture<'static>, SurfaceError> {
        // SAFETY: the creator is boxed, so its address is stable, and it is
        // owned by the same Window as the texture. Field order drops the
        // texture first.
        let creator: &'static TextureCreator<WindowContext> =
            unsafe { &*(texture_creator as *const _) };
        creator
            .create_texture_streaming(format, width, height)
            .map_err(present_error)
    }

    pub fn poll_events(&mut self) -> WindowEvent {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return WindowEvent::Quit,
                Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(w, h),
                    ..
                } => return WindowEvent::Resize(w as u32, h as u32),
                _ => {}
            }
        }
        WindowEvent::None
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), SurfaceError> {
        self.texture = Self::create_texture(&self.texture_creator, self.format, width, height)?;
        self.pixels = vec![0; (width * height) as usize];
        self.width = width;
        self.height = height;
        Ok(())
    }

    pub fn timer(&self) -> &sdl2::TimerSubsystem {
        &self.timer_subsystem
    }
}

impl Surface for Window {
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
        self.texture
            .update(
                None,
                bytemuck::cast_slice(&self.pixels),
                (self.width * 4) as usize,
            )
            .map_err(present_error)?;

        self.canvas.clear();
        self.canvas
            .copy(
                &self.texture,
                None,
                Some(Rect::new(0, 0, self.width, self.height)),
            )
            .map_err(present_error)?;
        self.canvas.present();
        Ok(())
    }
}
