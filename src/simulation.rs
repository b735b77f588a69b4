//! Simulation builder and runner

use std::sync::Arc;
use std::time::Instant;

use glam::Vec2;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::color::{ColorLerp, Palette};
use crate::error::AppError;
use crate::field::{ParticleField, CANVAS_SIZE};
use crate::gpu::GpuState;
use crate::image_source::PixelBuffer;
use crate::input::PointerInput;
use crate::layout::LayoutConfig;
use crate::spawn::SeedContext;
use crate::time::FrameTimer;

const TITLE: &str = "Ring Field";
/// Edge length of the generated stand-in images.
const FALLBACK_IMAGE_SIZE: u32 = 256;

/// A ring field animation builder.
///
/// Use method chaining to configure, then call `.run()` to start.
pub struct Simulation {
    image_a: Option<PixelBuffer>,
    image_b: Option<PixelBuffer>,
    seed: Option<u64>,
}

impl Simulation {
    /// Create a simulation with generated source images and a random seed.
    pub fn new() -> Self {
        Self {
            image_a: None,
            image_b: None,
            seed: None,
        }
    }

    /// Set both source images. Image A sets dot size and resting color,
    /// image B the displaced color.
    pub fn with_images(mut self, image_a: PixelBuffer, image_b: PixelBuffer) -> Self {
        self.image_a = Some(image_a);
        self.image_b = Some(image_b);
        self
    }

    /// Fix the random seed for reproducible particle parameters.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Seed the particle field without opening a window.
    pub fn build_field(&self) -> ParticleField<ColorLerp> {
        let mut ctx = match self.seed {
            Some(seed) => SeedContext::from_seed(seed),
            None => SeedContext::new(),
        };

        let fallback_a;
        let fallback_b;
        let (image_a, image_b) = match (&self.image_a, &self.image_b) {
            (Some(a), Some(b)) => (a, b),
            _ => {
                fallback_a = PixelBuffer::radial_gradient(FALLBACK_IMAGE_SIZE, Palette::Grayscale);
                fallback_b = PixelBuffer::radial_gradient(FALLBACK_IMAGE_SIZE, Palette::Viridis);
                (&fallback_a, &fallback_b)
            }
        };

        ParticleField::seed(
            &LayoutConfig::default(),
            Vec2::splat(CANVAS_SIZE),
            image_a,
            image_b,
            &mut ctx,
            ColorLerp::new,
        )
    }

    /// Run the animation. This blocks until the window is closed.
    pub fn run(self) -> Result<(), AppError> {
        let field = self.build_field();

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(field);
        event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    field: ParticleField<ColorLerp>,
    input: PointerInput,
    timer: FrameTimer,
    error: Option<AppError>,
}

impl App {
    fn new(field: ParticleField<ColorLerp>) -> Self {
        Self {
            window: None,
            gpu_state: None,
            field,
            input: PointerInput::new(Vec2::splat(CANVAS_SIZE)),
            timer: FrameTimer::new(),
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        let window_attrs = Window::default_attributes()
            .with_title(TITLE)
            .with_inner_size(winit::dpi::LogicalSize::new(1020, 1020));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let size = window.inner_size();
        self.input.set_window_size(size.width, size.height);

        let gpu_state = pollster::block_on(GpuState::new(
            window.clone(),
            Vec2::splat(CANVAS_SIZE),
            self.field.len() as u32,
        ))?;

        self.window = Some(window);
        self.gpu_state = Some(gpu_state);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        log::error!("{}", error);
        self.error = Some(error);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                self.fail(event_loop, e);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.input.handle_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    let circles = self.field.frame(self.input.cursor().position());
                    match gpu_state.render(circles) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            gpu_state.resize(winit::dpi::PhysicalSize {
                                width: gpu_state.config.width,
                                height: gpu_state.config.height,
                            })
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("Surface out of memory");
                            event_loop.exit();
                        }
                        Err(e) => log::warn!("Render error: {:?}", e),
                    }
                }

                if let Some(window) = &self.window {
                    if self.timer.tick(Instant::now()) {
                        window.set_title(&format!(
                            "{} - {} particles - {:.0} FPS",
                            TITLE,
                            self.field.len(),
                            self.timer.fps()
                        ));
                    }
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_field_is_reproducible() {
        let a = Simulation::new().with_seed(11).build_field();
        let b = Simulation::new().with_seed(11).build_field();
        assert_eq!(a.len(), b.len());
        for (p, q) in a.particles().iter().zip(b.particles()) {
            assert_eq!(p.params(), q.params());
            assert_eq!(p.anchor(), q.anchor());
        }
    }

    #[test]
    fn test_build_field_uses_supplied_images() {
        let field = Simulation::new()
            .with_images(PixelBuffer::solid([0, 0, 0]), PixelBuffer::solid([255, 255, 255]))
            .with_seed(1)
            .build_field();
        // Black red channel maps to the minimum radius everywhere.
        assert!(field.particles().iter().all(|p| p.radius() == 2.0));
    }
}
