//! # Episode Engine
//!
//! Opens a GLFW window with an OpenGL 3.3 core context, compiles and links a
//! vertex/fragment shader pair, and clears the screen every frame until the
//! window is closed.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use episode_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     episode_engine::foundation::logging::init();
//!     let config = AppConfig::load_or_default(DEFAULT_CONFIG_PATH)?;
//!     App::new(&config)?.run()?;
//!     Ok(())
//! }
//! ```
//!
//! Shader and program handles are typed ([`render::Shader`],
//! [`render::Program`]); compilation and link failures come back as
//! [`render::ShaderError`] with the driver log attached.

pub mod config;
pub mod core;
pub mod foundation;
pub mod render;

mod application;

pub use application::{App, AppError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        core::config::{AppConfig, GlVersion, ShaderSources, WindowConfig, DEFAULT_CONFIG_PATH},
        config::{Config, ConfigError},
        render::{
            compile_shader, create_program, ClearColor, GlRenderer, Program, RenderBackend,
            RenderLoop, Shader, ShaderError, ShaderKind, Window, WindowBackend, WindowError,
        },
        App, AppError,
    };
}
