//! GLSL shader compilation and program assembly
//!
//! Shaders are compiled from source at startup and linked into a single
//! program. Both steps report failure through [`ShaderError`], carrying the
//! driver's info log, so a zero handle can never reach the GL pipeline.
//!
//! All functions here issue GL calls and require a current OpenGL context
//! with the loader initialized (see [`crate::render::Window::new`]).

use std::ffi::CString;
use std::fmt;
use std::marker::PhantomData;
use std::ptr;

use gl::types::{GLchar, GLenum, GLint, GLuint};
use thiserror::Error;

/// GLSL 330 vertex shader that forwards `in_pos` untouched
pub const DEFAULT_VERTEX_SOURCE: &str = "#version 330 core
layout (location = 0) in vec3 in_pos;
void main() {
    gl_Position = vec4(in_pos, 1);
}
";

/// GLSL 330 fragment shader writing a constant green
pub const DEFAULT_FRAGMENT_SOURCE: &str = "#version 330 core
out vec4 color;
void main() {
   color = vec4(0.2f, 0.7f, 0.3f, 1.0f);
}
";

/// Pipeline stage a shader is compiled for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderKind {
    /// Vertex stage
    Vertex,
    /// Fragment stage
    Fragment,
}

impl ShaderKind {
    fn gl_enum(self) -> GLenum {
        match self {
            Self::Vertex => gl::VERTEX_SHADER,
            Self::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex => f.write_str("vertex"),
            Self::Fragment => f.write_str("fragment"),
        }
    }
}

/// Shader compilation and linking errors
#[derive(Error, Debug)]
pub enum ShaderError {
    /// Source text contains an interior NUL byte and cannot be handed to GL
    #[error("{kind} shader source contains a NUL byte")]
    InvalidSource {
        /// Stage of the rejected source
        kind: ShaderKind,
    },

    /// `glCreateShader` / `glCreateProgram` returned 0
    #[error("failed to create GL {0} object")]
    ObjectCreation(&'static str),

    /// The driver rejected the shader source
    #[error("{kind} shader compilation failed:\n{log}")]
    Compilation {
        /// Stage that failed
        kind: ShaderKind,
        /// Driver info log
        log: String,
    },

    /// A shader was passed in the wrong program slot
    #[error("expected a {expected} shader, got a {found} shader")]
    StageMismatch {
        /// Stage the slot requires
        expected: ShaderKind,
        /// Stage that was supplied
        found: ShaderKind,
    },

    /// The driver failed to link the program
    #[error("program link failed:\n{log}")]
    Link {
        /// Driver info log
        log: String,
    },
}

/// Result alias for shader operations
pub type ShaderResult<T> = Result<T, ShaderError>;

/// A successfully compiled GL shader object
///
/// Deleted when dropped. [`create_program`] consumes shaders, so they cannot
/// be reused after linking. Not `Send`: the handle belongs to the context
/// current on this thread.
#[derive(Debug)]
pub struct Shader {
    id: GLuint,
    kind: ShaderKind,
    _context: PhantomData<*const ()>,
}

impl Shader {
    /// Raw GL name of the shader object
    pub const fn id(&self) -> GLuint {
        self.id
    }

    /// Stage the shader was compiled for
    pub const fn kind(&self) -> ShaderKind {
        self.kind
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        // SAFETY: `id` names a shader created on the current context
        unsafe { gl::DeleteShader(self.id) };
    }
}

/// A linked GL program object
///
/// Lives as long as the context. There is no explicit delete: the program
/// goes away with context teardown.
#[derive(Debug)]
pub struct Program {
    id: GLuint,
    _context: PhantomData<*const ()>,
}

impl Program {
    /// Raw GL name of the program object
    pub const fn id(&self) -> GLuint {
        self.id
    }
}

/// Compile `source` into a shader object for stage `kind`
///
/// On failure the info log is logged at error level as
/// `Compilation Failed\n<log>` and returned in [`ShaderError::Compilation`];
/// the failed object is deleted.
///
/// The logged copy only reaches standard output when a logger is installed
/// (see [`crate::foundation::logging::init`]) and its filter lets errors
/// through; with `RUST_LOG=off` the returned error is the only record.
pub fn compile_shader(kind: ShaderKind, source: &str) -> ShaderResult<Shader> {
    let source = CString::new(source).map_err(|_| ShaderError::InvalidSource { kind })?;

    // SAFETY: a context is current; `source` outlives the call and is
    // NUL-terminated, so a null length array is valid
    let id = unsafe {
        let id = gl::CreateShader(kind.gl_enum());
        if id == 0 {
            return Err(ShaderError::ObjectCreation("shader"));
        }
        gl::ShaderSource(id, 1, &source.as_ptr(), ptr::null());
        gl::CompileShader(id);
        id
    };
    let shader = Shader {
        id,
        kind,
        _context: PhantomData,
    };

    let mut status = GLint::from(gl::FALSE);
    // SAFETY: `id` is a live shader object
    unsafe { gl::GetShaderiv(id, gl::COMPILE_STATUS, &mut status) };
    if status != GLint::from(gl::TRUE) {
        let log = info_log(id, gl::GetShaderiv, gl::GetShaderInfoLog);
        log::error!("Compilation Failed\n{}", log);
        return Err(ShaderError::Compilation { kind, log });
    }

    log::debug!("Compiled {} shader {}", kind, id);
    Ok(shader)
}

/// Link a vertex and a fragment shader into a program
///
/// Both shaders are deleted once linking has run, whether or not it
/// succeeded; they stay flagged for deletion while attached to the program.
/// Link status is checked: a failed link deletes the program and returns
/// [`ShaderError::Link`].
pub fn create_program(vertex: Shader, fragment: Shader) -> ShaderResult<Program> {
    for (shader, expected) in [(&vertex, ShaderKind::Vertex), (&fragment, ShaderKind::Fragment)] {
        if shader.kind != expected {
            return Err(ShaderError::StageMismatch {
                expected,
                found: shader.kind,
            });
        }
    }

    // SAFETY: a context is current and both shaders are live objects on it
    let id = unsafe {
        let id = gl::CreateProgram();
        if id == 0 {
            return Err(ShaderError::ObjectCreation("program"));
        }
        gl::AttachShader(id, vertex.id);
        gl::AttachShader(id, fragment.id);
        gl::LinkProgram(id);
        id
    };

    log::debug!("Deleting shaders {} and {} after link", vertex.id, fragment.id);
    drop(vertex);
    drop(fragment);

    let mut status = GLint::from(gl::FALSE);
    // SAFETY: `id` is a live program object
    unsafe { gl::GetProgramiv(id, gl::LINK_STATUS, &mut status) };
    if status != GLint::from(gl::TRUE) {
        let log = info_log(id, gl::GetProgramiv, gl::GetProgramInfoLog);
        log::error!("Link Failed\n{}", log);
        // SAFETY: `id` is a live program object that is not in use
        unsafe { gl::DeleteProgram(id) };
        return Err(ShaderError::Link { log });
    }

    log::info!("Linked program {}", id);
    Ok(Program {
        id,
        _context: PhantomData,
    })
}

/// `GL_DELETE_STATUS` of the shader named `id`
///
/// A shader deleted while attached to a program stays a valid name, flagged
/// for deletion, until it is detached. Returns `None` when `id` does not name
/// a shader at all, so a freed or never-created name is not mistaken for one
/// that is pending deletion.
pub fn shader_delete_status(id: GLuint) -> Option<bool> {
    // SAFETY: glIsShader accepts any name; GetShaderiv only runs on a valid one
    unsafe {
        if gl::IsShader(id) == gl::FALSE {
            return None;
        }
        let mut status = GLint::from(gl::FALSE);
        gl::GetShaderiv(id, gl::DELETE_STATUS, &mut status);
        Some(status == GLint::from(gl::TRUE))
    }
}

type GetIv = unsafe fn(GLuint, GLenum, *mut GLint);
type GetInfoLog = unsafe fn(GLuint, gl::types::GLsizei, *mut gl::types::GLsizei, *mut GLchar);

/// Fetch the info log of a shader or program object
fn info_log(id: GLuint, get_iv: GetIv, get_log: GetInfoLog) -> String {
    let mut len: GLint = 0;
    // SAFETY: `id` is live and matches the query functions passed in
    unsafe { get_iv(id, gl::INFO_LOG_LENGTH, &mut len) };
    let mut buf = vec![0u8; len.max(1) as usize];
    let mut written: gl::types::GLsizei = 0;
    // SAFETY: `buf` holds `len` bytes
    unsafe { get_log(id, len.max(1), &mut written, buf.as_mut_ptr().cast()) };
    buf.truncate(written.max(0) as usize);
    String::from_utf8_lossy(&buf).trim_end().to_string()
}
