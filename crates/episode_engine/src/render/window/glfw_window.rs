//! GLFW-based window with an OpenGL context
//!
//! [`Window`] is the one place the process-wide GLFW state lives. Creating it
//! initializes GLFW, opens the window, makes its OpenGL context current on the
//! calling thread, and loads the GL function table. Dropping it destroys the
//! window first and then releases the GLFW handle, which terminates the
//! library.

use std::ffi::CStr;

use glfw::Context as _;
use thiserror::Error;

use crate::core::config::WindowConfig;
use crate::render::window::backend::WindowBackend;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// `glfwInit` failed
    #[error("GLFW initialization failed")]
    InitializationFailed,

    /// The window or its OpenGL context could not be created
    #[error("Window creation failed for {width}x{height} OpenGL {major}.{minor} context")]
    CreationFailed {
        /// Requested width in pixels
        width: u32,
        /// Requested height in pixels
        height: u32,
        /// Requested GL major version
        major: u32,
        /// Requested GL minor version
        minor: u32,
    },

    /// The GL loader could not resolve required entry points
    #[error("OpenGL loader failed: {0}")]
    LoaderFailed(String),
}

/// Result alias for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// GLFW window wrapper owning the GL context
///
/// Field order matters: the window is dropped before the `Glfw` handle so
/// the library is never terminated while a window still exists.
pub struct Window {
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    glfw: glfw::Glfw,
    title: String,
}

impl Window {
    /// Initialize GLFW, open a window, and load OpenGL for its context
    pub fn new(config: &WindowConfig) -> WindowResult<Self> {
        let mut glfw = glfw::init(glfw::log_errors).map_err(|e| {
            log::error!("glfwInit failed: {:?}", e);
            WindowError::InitializationFailed
        })?;
        log::debug!("GLFW {} initialized", glfw::get_version_string());

        let version = config.gl_version;
        glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::OpenGl));
        glfw.window_hint(glfw::WindowHint::ContextVersion(version.major, version.minor));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(glfw::OpenGlProfileHint::Core));
        // macOS only hands out core profiles >= 3.2 when forward compatible
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(cfg!(target_os = "macos")));
        glfw.window_hint(glfw::WindowHint::Resizable(false));
        glfw.window_hint(glfw::WindowHint::Visible(config.visible));

        let (mut window, events) = glfw
            .create_window(config.width, config.height, &config.title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed {
                width: config.width,
                height: config.height,
                major: version.major,
                minor: version.minor,
            })?;

        window.make_current();
        window.set_close_polling(true);

        glfw.set_swap_interval(if config.vsync {
            glfw::SwapInterval::Sync(1)
        } else {
            glfw::SwapInterval::None
        });

        gl::load_with(|symbol| window.get_proc_address(symbol) as *const _);
        if !gl::CreateShader::is_loaded() || !gl::Clear::is_loaded() {
            return Err(WindowError::LoaderFailed(
                "core entry points missing after load".to_string(),
            ));
        }

        log::info!(
            "Created {}x{} window '{}' (OpenGL {}, {})",
            config.width,
            config.height,
            config.title,
            gl_string(gl::VERSION),
            gl_string(gl::RENDERER),
        );

        Ok(Self {
            window,
            events,
            glfw,
            title: config.title.clone(),
        })
    }

    /// Title the window was created with
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current framebuffer size in pixels
    pub fn framebuffer_size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_framebuffer_size();
        (width.max(0) as u32, height.max(0) as u32)
    }
}

impl WindowBackend for Window {
    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    fn poll_events(&mut self) {
        self.glfw.poll_events();
        for (_, event) in glfw::flush_messages(&self.events) {
            if matches!(event, glfw::WindowEvent::Close) {
                log::debug!("Close requested for window '{}'", self.title);
            }
        }
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        log::info!("Destroying window '{}' and shutting down GLFW", self.title);
    }
}

/// Read a GL string such as `GL_VERSION`
fn gl_string(name: gl::types::GLenum) -> String {
    // SAFETY: only called after the context is current and the loader ran
    let ptr = unsafe { gl::GetString(name) };
    if ptr.is_null() {
        return "<unknown>".to_string();
    }
    // SAFETY: GL returns a static NUL-terminated string for valid names
    unsafe { CStr::from_ptr(ptr.cast()) }.to_string_lossy().into_owned()
}
