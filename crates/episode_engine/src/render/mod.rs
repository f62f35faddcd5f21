//! Rendering: window, shaders, and the clear-screen loop

pub mod api;
pub mod gl_renderer;
pub mod render_loop;
pub mod shader;
pub mod window;

pub use api::{ClearColor, RenderBackend};
pub use gl_renderer::GlRenderer;
pub use render_loop::RenderLoop;
pub use shader::{
    compile_shader, create_program, shader_delete_status, Program, Shader, ShaderError,
    ShaderKind, ShaderResult,
};
pub use window::{Window, WindowBackend, WindowError, WindowResult};
