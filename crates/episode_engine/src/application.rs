//! Application lifecycle
//!
//! [`App`] ties the pieces together in startup order: window and GL context,
//! shader compilation, program link, then the render loop. Every step
//! reports failure through [`AppError`] instead of handing an invalid handle
//! to the next one.

use thiserror::Error;

use crate::core::config::AppConfig;
use crate::config::ConfigError;
use crate::render::{
    compile_shader, create_program, GlRenderer, Program, RenderLoop, ShaderError, ShaderKind,
    Window, WindowBackend, WindowError,
};

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration could not be loaded or is invalid
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Window, context, or GL loader setup failed
    #[error("Window error: {0}")]
    Window(#[from] WindowError),

    /// Shader compilation or program link failed
    #[error("Shader error: {0}")]
    Shader(#[from] ShaderError),
}

/// Window, linked program, and render loop for one run of the program
///
/// Fields drop in declaration order, so the window (and with it the GL
/// context and GLFW) goes last.
pub struct App {
    program: Program,
    renderer: GlRenderer,
    render_loop: RenderLoop,
    window: Window,
}

impl App {
    /// Open the window and build the shader program described by `config`
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        config.validate()?;

        log::info!("Initializing '{}'...", config.window.title);
        let window = Window::new(&config.window)?;

        let vertex = compile_shader(ShaderKind::Vertex, &config.shaders.vertex)?;
        let fragment = compile_shader(ShaderKind::Fragment, &config.shaders.fragment)?;
        let program = create_program(vertex, fragment)?;

        let renderer = GlRenderer::new(&window);

        Ok(Self {
            program,
            renderer,
            render_loop: RenderLoop::new(config.clear_color),
            window,
        })
    }

    /// The linked shader program
    pub const fn program(&self) -> &Program {
        &self.program
    }

    /// The window owning the GL context
    pub const fn window(&self) -> &Window {
        &self.window
    }

    /// Ask the render loop to stop after the current frame
    pub fn request_close(&mut self) {
        log::info!("Shutdown requested");
        self.window.set_should_close(true);
    }

    /// Run the render loop until the window closes, then tear everything down
    ///
    /// Returns the number of frames presented.
    pub fn run(mut self) -> Result<u64, AppError> {
        let frames = self.render_loop.run(&mut self.window, &mut self.renderer);
        log::info!(
            "Presented {} frames cleared to {:?} with program {}",
            frames,
            self.render_loop.clear_color().to_array(),
            self.program.id()
        );
        Ok(frames)
    }
}
