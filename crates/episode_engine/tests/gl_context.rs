//! Tests that need a real OpenGL 3.3 context
//!
//! GLFW has to own a display, so these are ignored by default. Run them on a
//! machine with a desktop session (or under Xvfb) with:
//!
//! ```text
//! cargo test -p episode_engine --test gl_context -- --ignored
//! ```
//!
//! GLFW is process-global and not thread-safe, so everything runs inside a
//! single test on one thread.

use std::sync::Mutex;

use episode_engine::prelude::*;
use episode_engine::render::shader_delete_status;
use log::{Level, Log, Metadata, Record};

const MISSING_SEMICOLON: &str = "#version 330 core
out vec4 color;
void main() {
    color = vec4(1.0, 0.0, 0.0, 1.0)
}
";

static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

/// Logger that keeps every record so emitted diagnostics can be inspected
struct RecordingLogger;

impl Log for RecordingLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        RECORDS.lock().unwrap().push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: RecordingLogger = RecordingLogger;

fn hidden_window_config() -> WindowConfig {
    WindowConfig {
        title: "episode_engine gl test".to_string(),
        visible: false,
        vsync: false,
        ..WindowConfig::default()
    }
}

fn valid_shaders_compile() {
    let sources = ShaderSources::default();

    let vertex = compile_shader(ShaderKind::Vertex, &sources.vertex).unwrap();
    let fragment = compile_shader(ShaderKind::Fragment, &sources.fragment).unwrap();

    assert_ne!(vertex.id(), 0);
    assert_ne!(fragment.id(), 0);
    assert_eq!(vertex.kind(), ShaderKind::Vertex);
    assert_eq!(fragment.kind(), ShaderKind::Fragment);
}

fn invalid_shader_reports_and_logs_diagnostic() {
    RECORDS.lock().unwrap().clear();

    let log = match compile_shader(ShaderKind::Fragment, MISSING_SEMICOLON) {
        Err(ShaderError::Compilation { kind, log }) => {
            assert_eq!(kind, ShaderKind::Fragment);
            log
        }
        other => panic!("expected a compilation error, got {:?}", other),
    };
    assert!(!log.is_empty());

    let records = RECORDS.lock().unwrap();
    let emitted = records.iter().find(|(level, message)| {
        *level == Level::Error && message.starts_with("Compilation Failed")
    });
    match emitted {
        Some((_, message)) => assert!(message.contains(&log), "logged {:?}", message),
        None => panic!("no compile diagnostic logged, got {:?}", *records),
    }
}

fn program_link_flags_shaders_for_deletion() {
    let sources = ShaderSources::default();
    let vertex = compile_shader(ShaderKind::Vertex, &sources.vertex).unwrap();
    let fragment = compile_shader(ShaderKind::Fragment, &sources.fragment).unwrap();
    let ids = [vertex.id(), fragment.id()];

    // Live, unlinked shaders are valid names that are not pending deletion
    for id in ids {
        assert_eq!(shader_delete_status(id), Some(false), "shader {}", id);
    }

    let program = create_program(vertex, fragment).unwrap();

    assert_ne!(program.id(), 0);
    for id in ids {
        assert_eq!(shader_delete_status(id), Some(true), "shader {}", id);
    }
}

fn unknown_shader_name_has_no_delete_status() {
    assert_eq!(shader_delete_status(0), None);
    assert_eq!(shader_delete_status(0xDEAD), None);
}

fn swapped_stages_are_rejected() {
    let sources = ShaderSources::default();
    let vertex = compile_shader(ShaderKind::Vertex, &sources.vertex).unwrap();
    let fragment = compile_shader(ShaderKind::Fragment, &sources.fragment).unwrap();

    let err = create_program(fragment, vertex).unwrap_err();
    assert!(matches!(
        err,
        ShaderError::StageMismatch { expected: ShaderKind::Vertex, found: ShaderKind::Fragment }
    ));
}

fn loop_exits_once_close_flag_is_set(window: &mut Window) {
    let mut renderer = GlRenderer::new(window);
    window.set_should_close(true);

    let frames = RenderLoop::default().run(window, &mut renderer);

    assert_eq!(frames, 0);
}

fn app_runs_until_close_requested() {
    let config = AppConfig {
        window: hidden_window_config(),
        ..AppConfig::default()
    };

    let mut app = App::new(&config).unwrap_or_else(|e| panic!("app startup failed: {}", e));
    assert_ne!(app.program().id(), 0);
    assert_eq!(app.window().title(), "episode_engine gl test");

    app.request_close();
    assert_eq!(app.run().unwrap(), 0);
}

#[test]
#[ignore = "requires a display and an OpenGL 3.3 driver"]
fn gl_context_properties() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(log::LevelFilter::Trace);

    {
        let mut window = Window::new(&hidden_window_config()).unwrap();
        assert_eq!(window.title(), "episode_engine gl test");

        valid_shaders_compile();
        invalid_shader_reports_and_logs_diagnostic();
        program_link_flags_shaders_for_deletion();
        unknown_shader_name_has_no_delete_status();
        swapped_stages_are_rejected();
        loop_exits_once_close_flag_is_set(&mut window);
    }

    // The first window and its context are gone; the app brings up its own
    app_runs_until_close_requested();
}
