use std::sync::Once;

use log::LevelFilter;

static INIT: Once = Once::new();

/// Installs an `env_logger` that captures output per test. `RUST_LOG` overrides the default
/// `trace` level.
pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder()
            .filter_level(LevelFilter::Trace)
            .parse_default_env()
            .is_test(true)
            .try_init();
    });
}
