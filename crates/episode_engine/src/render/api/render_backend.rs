//! Backend abstraction traits for the rendering system
//!
//! The render loop only ever clears the color buffer, so that is the whole
//! surface a backend has to provide. Keeping it behind a trait lets the loop
//! run against a recording backend in tests.

use super::frame_data::ClearColor;

/// Main rendering backend trait
///
/// Implemented by [`GlRenderer`](crate::render::GlRenderer) for OpenGL.
/// A backend is handed the frame's clear color by the loop and owns nothing
/// else about the frame; presentation belongs to the window.
///
/// # Context Requirements
/// Implementations that talk to a GPU API assume their context is current on
/// the calling thread for the whole lifetime of the backend. Construct them
/// only after the window that owns the context exists.
pub trait RenderBackend {
    /// Clear the color buffer of the current framebuffer to `color`
    fn clear(&mut self, color: ClearColor);
}
