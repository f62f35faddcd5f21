//! # Core Module
//!
//! Shared configuration types used by the window, the shader assembly step,
//! and the application.

pub mod config;

pub use config::{AppConfig, GlVersion, ShaderSources, WindowConfig, DEFAULT_CONFIG_PATH};
pub use crate::config::{Config, ConfigError};
