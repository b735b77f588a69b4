//! Pointer input for Ring Field.
//!
//! The field reacts to a single [`Cursor`] position. The cursor is only
//! live while the left mouse button is held: pressing sets it, dragging
//! moves it, and releasing parks it at [`Cursor::INACTIVE`], far outside
//! any particle's influence.
//!
//! The canvas is letterboxed into the window, so window pixels are mapped
//! back to canvas pixels through a [`Viewport`] before they reach the field.

use glam::Vec2;
use winit::event::{ElementState, MouseButton, WindowEvent};

/// Shared pointer position in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    position: Vec2,
}

impl Cursor {
    /// Sentinel for "no active pointer".
    pub const INACTIVE: Cursor = Cursor {
        position: Vec2::new(9999.0, 9999.0),
    };

    /// A cursor at `position`.
    pub fn at(position: Vec2) -> Self {
        Self { position }
    }

    /// Current position.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Whether a pointer is currently active.
    pub fn is_active(&self) -> bool {
        *self != Self::INACTIVE
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::INACTIVE
    }
}

/// How the canvas sits inside the window: uniformly scaled and centered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Canvas size in canvas pixels.
    pub canvas: Vec2,
    /// Window size in physical pixels.
    pub window: Vec2,
}

impl Viewport {
    /// Create a viewport for a canvas inside a window.
    pub fn new(canvas: Vec2, window: Vec2) -> Self {
        Self { canvas, window }
    }

    /// Window pixels per canvas pixel.
    pub fn scale(&self) -> f32 {
        let s = (self.window / self.canvas).min_element();
        if s.is_finite() && s > 0.0 {
            s
        } else {
            1.0
        }
    }

    /// Top-left corner of the canvas in window pixels.
    pub fn offset(&self) -> Vec2 {
        (self.window - self.canvas * self.scale()) * 0.5
    }

    /// Fraction of the window each NDC axis of the canvas covers.
    ///
    /// Fed to the vertex shader so the canvas keeps its aspect ratio.
    pub fn ndc_extent(&self) -> Vec2 {
        if self.window.x <= 0.0 || self.window.y <= 0.0 {
            return Vec2::ONE;
        }
        self.canvas * self.scale() / self.window
    }

    /// Convert a window position to canvas pixels.
    pub fn to_canvas(&self, window_pos: Vec2) -> Vec2 {
        (window_pos - self.offset()) / self.scale()
    }
}

/// Tracks the mouse and produces the field's cursor.
#[derive(Debug)]
pub struct PointerInput {
    cursor: Cursor,
    held: bool,
    last_window_pos: Vec2,
    viewport: Viewport,
}

impl PointerInput {
    /// Create a tracker for a canvas of the given size.
    pub fn new(canvas: Vec2) -> Self {
        Self {
            cursor: Cursor::INACTIVE,
            held: false,
            last_window_pos: Vec2::ZERO,
            viewport: Viewport::new(canvas, canvas),
        }
    }

    /// The cursor to feed into the next frame.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Update the window size used for coordinate mapping.
    pub fn set_window_size(&mut self, width: u32, height: u32) {
        self.viewport.window = Vec2::new(width as f32, height as f32);
    }

    /// Left button pressed at the last known pointer position.
    pub fn press(&mut self) {
        self.held = true;
        self.track(self.last_window_pos);
    }

    /// Pointer moved to `window_pos`. Only moves the cursor while held.
    pub fn move_to(&mut self, window_pos: Vec2) {
        self.last_window_pos = window_pos;
        if self.held {
            self.track(window_pos);
        }
    }

    /// Left button released; the cursor goes back to the sentinel.
    pub fn release(&mut self) {
        self.held = false;
        self.cursor = Cursor::INACTIVE;
    }

    fn track(&mut self, window_pos: Vec2) {
        self.cursor = Cursor::at(self.viewport.to_canvas(window_pos));
        log::trace!("cursor {:?}", self.cursor.position());
    }

    /// Process a winit window event.
    pub(crate) fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => self.press(),
                ElementState::Released => self.release(),
            },

            WindowEvent::CursorMoved { position, .. } => {
                self.move_to(Vec2::new(position.x as f32, position.y as f32));
            }

            WindowEvent::CursorLeft { .. } => {
                if self.held {
                    self.release();
                }
            }

            WindowEvent::Resized(size) => {
                self.set_window_size(size.width, size.height);
            }

            _ => {}
        }
    }
}
