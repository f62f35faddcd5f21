//! Public rendering API
//!
//! This module contains the backend trait the render loop drives and the
//! per-frame data handed to it.

pub mod render_backend;
pub mod frame_data;

// Re-export commonly used types
pub use render_backend::RenderBackend;
pub use frame_data::ClearColor;
