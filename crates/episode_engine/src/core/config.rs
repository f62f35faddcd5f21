//! # Application Configuration
//!
//! Everything the program needs to start: window parameters, the clear color,
//! and the two shader sources. The defaults reproduce the fixed behavior of
//! the program (a 1280x720 "Episode One" window cleared to
//! (0.2, 0.3, 0.7, 1.0)), so a configuration file is optional.
//!
//! All structs are `#[serde(default)]`, so a file only has to name the
//! values it overrides:
//!
//! ```toml
//! clear_color = { r = 0.0, g = 0.0, b = 0.0, a = 1.0 }
//!
//! [window]
//! title = "Episode One (debug)"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{Config, ConfigError};
use crate::render::api::ClearColor;
use crate::render::shader::{DEFAULT_FRAGMENT_SOURCE, DEFAULT_VERTEX_SOURCE};

/// File the binary looks for in the working directory
pub const DEFAULT_CONFIG_PATH: &str = "episode_one.toml";

/// Lowest context version the built-in GLSL 330 shaders compile on
const MIN_GL_VERSION: GlVersion = GlVersion { major: 3, minor: 3 };

/// Requested OpenGL context version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GlVersion {
    /// Major version
    pub major: u32,
    /// Minor version
    pub minor: u32,
}

impl Default for GlVersion {
    fn default() -> Self {
        MIN_GL_VERSION
    }
}

/// Window configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,

    /// Window width in pixels
    pub width: u32,

    /// Window height in pixels
    pub height: u32,

    /// Present on vertical blank
    pub vsync: bool,

    /// Show the window on creation; hidden windows still get a context
    pub visible: bool,

    /// OpenGL core-profile version to request
    pub gl_version: GlVersion,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Episode One".to_string(),
            width: 1280,
            height: 720,
            vsync: true,
            visible: true,
            gl_version: GlVersion::default(),
        }
    }
}

/// GLSL sources for the two pipeline stages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShaderSources {
    /// Vertex stage source
    pub vertex: String,
    /// Fragment stage source
    pub fragment: String,
}

impl Default for ShaderSources {
    fn default() -> Self {
        Self {
            vertex: DEFAULT_VERTEX_SOURCE.to_string(),
            fragment: DEFAULT_FRAGMENT_SOURCE.to_string(),
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Window parameters
    pub window: WindowConfig,

    /// Color every frame is cleared to
    pub clear_color: ClearColor,

    /// Shader sources
    pub shaders: ShaderSources,
}

impl Config for AppConfig {}

impl AppConfig {
    /// Load `path` if it exists, otherwise fall back to defaults
    ///
    /// A file that exists but fails to parse or validate is an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let config = Self::load_from_file(path)?;
        config.validate()?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let window = &self.window;
        if window.title.is_empty() {
            return Err(ConfigError::Invalid("window title cannot be empty".to_string()));
        }

        if window.width == 0 || window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                window.width, window.height
            )));
        }

        if window.gl_version < MIN_GL_VERSION {
            return Err(ConfigError::Invalid(format!(
                "OpenGL {}.{} is below the required {}.{}",
                window.gl_version.major,
                window.gl_version.minor,
                MIN_GL_VERSION.major,
                MIN_GL_VERSION.minor
            )));
        }

        if !self.clear_color.is_normalized() {
            return Err(ConfigError::Invalid(format!(
                "clear color channels must lie in [0, 1], got {:?}",
                self.clear_color.to_array()
            )));
        }

        Ok(())
    }
}
