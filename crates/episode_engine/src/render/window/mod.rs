//! Window management
//!
//! `glfw_window` owns the GLFW library, the OS window, and its OpenGL
//! context. `backend` is the trait the render loop drives, so the loop can be
//! exercised without a display.

pub(crate) mod backend;
pub mod glfw_window;

pub use backend::WindowBackend;
pub use glfw_window::{Window, WindowError, WindowResult};
