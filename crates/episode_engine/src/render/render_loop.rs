//! Main render loop
//!
//! poll events → clear → present, until the window's close flag is set.

use crate::render::api::{ClearColor, RenderBackend};
use crate::render::window::WindowBackend;

/// Single-threaded clear-and-present loop
#[derive(Debug, Clone, Copy)]
pub struct RenderLoop {
    clear_color: ClearColor,
}

impl RenderLoop {
    /// Create a loop that clears every frame to `clear_color`
    pub const fn new(clear_color: ClearColor) -> Self {
        Self { clear_color }
    }

    /// Color used for every frame
    pub const fn clear_color(&self) -> ClearColor {
        self.clear_color
    }

    /// Run until the window reports it should close
    ///
    /// The close flag is checked before each frame, so a flag raised while
    /// polling ends the loop once the current frame is presented. Returns the
    /// number of frames presented.
    pub fn run<W, R>(&self, window: &mut W, renderer: &mut R) -> u64
    where
        W: WindowBackend + ?Sized,
        R: RenderBackend + ?Sized,
    {
        log::info!("Starting render loop");
        let mut frames = 0u64;

        while !window.should_close() {
            window.poll_events();
            renderer.clear(self.clear_color);
            window.swap_buffers();
            frames += 1;
        }

        log::info!("Render loop finished after {} frames", frames);
        frames
    }
}

impl Default for RenderLoop {
    fn default() -> Self {
        Self::new(ClearColor::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Window that raises its close flag during the `close_on_poll`-th poll
    #[derive(Default)]
    struct MockWindow {
        close_on_poll: Option<u32>,
        should_close: bool,
        polls: u32,
        swaps: u32,
    }

    impl WindowBackend for MockWindow {
        fn should_close(&self) -> bool {
            self.should_close
        }

        fn set_should_close(&mut self, should_close: bool) {
            self.should_close = should_close;
        }

        fn poll_events(&mut self) {
            self.polls += 1;
            if self.close_on_poll == Some(self.polls) {
                self.should_close = true;
            }
        }

        fn swap_buffers(&mut self) {
            self.swaps += 1;
        }
    }

    #[derive(Default)]
    struct RecordingRenderer {
        clears: Vec<ClearColor>,
    }

    impl RenderBackend for RecordingRenderer {
        fn clear(&mut self, color: ClearColor) {
            self.clears.push(color);
        }
    }

    #[test]
    fn test_loop_stops_within_one_poll_cycle() {
        let mut window = MockWindow {
            close_on_poll: Some(5),
            ..Default::default()
        };
        let mut renderer = RecordingRenderer::default();

        let frames = RenderLoop::default().run(&mut window, &mut renderer);

        assert_eq!(frames, 5);
        assert_eq!(window.polls, 5);
        assert_eq!(window.swaps, 5);
        assert_eq!(renderer.clears.len(), 5);
    }

    #[test]
    fn test_configured_clear_color_reaches_renderer() {
        let color = ClearColor::new(0.0, 0.5, 0.25, 1.0);
        let render_loop = RenderLoop::new(color);
        assert_eq!(render_loop.clear_color(), color);
        assert_eq!(RenderLoop::default().clear_color(), ClearColor::DEFAULT);

        let mut window = MockWindow {
            close_on_poll: Some(2),
            ..Default::default()
        };
        let mut renderer = RecordingRenderer::default();
        render_loop.run(&mut window, &mut renderer);

        assert_eq!(renderer.clears, [color, color]);
    }

    #[test]
    fn test_loop_never_runs_when_already_closing() {
        let mut window = MockWindow::default();
        window.set_should_close(true);
        let mut renderer = RecordingRenderer::default();

        let frames = RenderLoop::default().run(&mut window, &mut renderer);

        assert_eq!(frames, 0);
        assert_eq!(window.polls, 0);
        assert!(renderer.clears.is_empty());
    }

    #[test]
    fn test_every_frame_uses_fixed_clear_color() {
        let mut window = MockWindow {
            close_on_poll: Some(3),
            ..Default::default()
        };
        let mut renderer = RecordingRenderer::default();

        RenderLoop::default().run(&mut window, &mut renderer);

        assert_eq!(renderer.clears.len(), 3);
        for color in &renderer.clears {
            approx::assert_relative_eq!(color.r, 0.2);
            approx::assert_relative_eq!(color.g, 0.3);
            approx::assert_relative_eq!(color.b, 0.7);
            approx::assert_relative_eq!(color.a, 1.0);
            assert_eq!(*color, ClearColor::DEFAULT);
        }
    }

    #[test]
    fn test_clear_happens_between_poll_and_swap() {
        struct Ordered<'a>(&'a std::cell::RefCell<Vec<&'static str>>, bool);

        impl WindowBackend for Ordered<'_> {
            fn should_close(&self) -> bool {
                self.1
            }
            fn set_should_close(&mut self, should_close: bool) {
                self.1 = should_close;
            }
            fn poll_events(&mut self) {
                self.0.borrow_mut().push("poll");
                self.1 = true;
            }
            fn swap_buffers(&mut self) {
                self.0.borrow_mut().push("swap");
            }
        }

        struct OrderedRenderer<'a>(&'a std::cell::RefCell<Vec<&'static str>>);

        impl RenderBackend for OrderedRenderer<'_> {
            fn clear(&mut self, _color: ClearColor) {
                self.0.borrow_mut().push("clear");
            }
        }

        let calls = std::cell::RefCell::new(Vec::new());
        let mut window = Ordered(&calls, false);
        let mut renderer = OrderedRenderer(&calls);

        let frames = RenderLoop::default().run(&mut window, &mut renderer);

        assert_eq!(frames, 1);
        assert_eq!(*calls.borrow(), ["poll", "clear", "swap"]);
    }
}
