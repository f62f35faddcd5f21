//! OpenGL implementation of [`RenderBackend`]

use std::marker::PhantomData;

use crate::render::api::{ClearColor, RenderBackend};
use crate::render::window::Window;

/// Issues clear calls on the context owned by a [`Window`]
#[derive(Debug)]
pub struct GlRenderer {
    _context: PhantomData<*const ()>,
}

impl GlRenderer {
    /// Create a renderer for the context of `window`
    ///
    /// Taking the window proves a context is current and the GL loader has
    /// run before any clear is issued.
    pub fn new(window: &Window) -> Self {
        let (width, height) = window.framebuffer_size();
        log::debug!("OpenGL renderer bound to {}x{} framebuffer", width, height);
        Self {
            _context: PhantomData,
        }
    }
}

impl RenderBackend for GlRenderer {
    fn clear(&mut self, color: ClearColor) {
        // SAFETY: `GlRenderer` only exists while a loaded context is current
        unsafe {
            gl::ClearColor(color.r, color.g, color.b, color.a);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }
}
