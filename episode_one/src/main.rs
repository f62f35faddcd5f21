//! Episode One: open a window, build a shader program, clear the screen
//!
//! Reads `episode_one.toml` from the working directory when present and
//! otherwise runs with the built-in defaults.

use episode_engine::foundation::logging;
use episode_engine::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Route panics through the logger so they share the output stream
    std::panic::set_hook(Box::new(|panic_info| {
        match panic_info.location() {
            Some(location) => log::error!(
                "PANIC at {}:{}:{}: {}",
                location.file(),
                location.line(),
                location.column(),
                panic_info
            ),
            None => log::error!("PANIC: {}", panic_info),
        }
    }));

    logging::init();

    log::info!("Starting Episode One");

    let result = AppConfig::load_or_default(DEFAULT_CONFIG_PATH)
        .map_err(AppError::from)
        .and_then(|config| App::new(&config))
        .and_then(App::run);

    match result {
        Ok(frames) => {
            log::info!("Episode One finished after {} frames", frames);
            Ok(())
        }
        Err(e) => {
            log::error!("Episode One failed: {}", e);
            Err(e.into())
        }
    }
}
