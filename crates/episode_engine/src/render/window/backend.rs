//! Backend-agnostic window trait
//!
//! This module defines the window operations the render loop depends on.
//! The GLFW window implements it for real runs; tests implement it with
//! in-memory windows that count polls and swaps, so the loop's termination
//! and ordering can be checked without a display or a GL driver.

/// Window operations used by the render loop
///
/// Covers exactly what one frame needs: the close flag, event processing,
/// and presentation. Sizing, titles, and input stay on the concrete
/// [`Window`](super::Window) type because the loop never touches them.
///
/// # Design Philosophy
/// - **Minimal Surface**: only the calls made once per frame
/// - **Backend Agnostic**: no GLFW types appear in the signatures
/// - **Programmatic Close**: the application can end the loop through
///   [`set_should_close`](Self::set_should_close) the same way the OS does
///
/// # Thread Safety
/// There is no `Send` bound. A GL context is current on one thread, and GLFW
/// requires window calls on the thread that created the window, so
/// implementations are expected to stay where they were built.
pub trait WindowBackend {
    /// Check if the window should close
    ///
    /// Returns true once the user has requested closure (clicked the close
    /// button, pressed Alt+F4, etc.) or the application has called
    /// [`set_should_close`](Self::set_should_close). The render loop checks
    /// this before every frame.
    fn should_close(&self) -> bool;

    /// Set whether the window should close
    fn set_should_close(&mut self, should_close: bool);

    /// Process pending window system events
    ///
    /// Close requests raised by the OS are applied to the close flag here,
    /// so the loop stops at the next check.
    fn poll_events(&mut self);

    /// Present the back buffer
    ///
    /// Blocks until the next vertical blank when vsync is enabled.
    fn swap_buffers(&mut self);
}
